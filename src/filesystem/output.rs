use std::fs;
use std::path::Path;

use crate::core::error::GreetingError;
use crate::core::greeting::GreetingRecord;

/// Serialize `rec` as 2-space indented JSON and write it to `path`,
/// replacing any existing file. A single attempt; failures are returned as-is.
pub fn write_record(path: &Path, rec: &GreetingRecord) -> Result<(), GreetingError> {
    let mut json = serde_json::to_string_pretty(rec)?;
    json.push('\n');
    fs::write(path, json).map_err(|source| GreetingError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "greeting record written");
    Ok(())
}
