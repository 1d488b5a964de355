use std::io::{self, Write};

use crate::config::Config;
use crate::core::banner::{self, COMPLETION_LINE};
use crate::core::error::GreetingError;
use crate::core::greeting::{produce_record_with, GreetingRecord};
use crate::filesystem::output::write_record;

/// Produce a record from the environment, print the banner to stdout, write
/// `output.json` in the working directory and return the record.
pub fn run() -> Result<GreetingRecord, GreetingError> {
    let cfg = Config::from_env();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(&cfg, &mut out)
}

/// Like [`run`], with explicit inputs and banner sink.
pub fn run_with<W: Write>(cfg: &Config, out: &mut W) -> Result<GreetingRecord, GreetingError> {
    let rec = produce_record_with(cfg);

    out.write_all(banner::render(&rec).as_bytes())
        .map_err(GreetingError::Stdout)?;

    write_record(&cfg.output_path, &rec)?;

    writeln!(out, "{COMPLETION_LINE}").map_err(GreetingError::Stdout)?;
    Ok(rec)
}
