use std::env;
use std::path::{Path, PathBuf};

/// Environment variable carrying the deployment environment name.
pub const ENV_VAR: &str = "ENV";
/// Environment variable carrying the CI build identifier.
pub const BUILD_ID_VAR: &str = "GITHUB_RUN_ID";

pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_BUILD_ID: &str = "local";

/// File name the generator writes, relative to the output directory.
pub const OUTPUT_FILE_NAME: &str = "output.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub environment: String,
    pub build_id: String,
    pub output_path: PathBuf,
}

impl Config {
    /// Resolve inputs from the process environment. Unset variables fall back to
    /// their defaults; set values (including the empty string) are used verbatim.
    pub fn from_env() -> Self {
        let environment = env::var(ENV_VAR).unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());
        let build_id = env::var(BUILD_ID_VAR).unwrap_or_else(|_| DEFAULT_BUILD_ID.to_string());

        Config {
            environment,
            build_id,
            output_path: PathBuf::from(OUTPUT_FILE_NAME),
        }
    }

    /// Same as [`Config::from_env`] but writes `output.json` under `dir`.
    pub fn with_output_dir(dir: impl AsRef<Path>) -> Self {
        let mut cfg = Self::from_env();
        cfg.output_path = dir.as_ref().join(OUTPUT_FILE_NAME);
        cfg
    }
}
