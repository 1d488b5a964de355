use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::config::Config;

pub const MESSAGE: &str = "Hello World from CI/CD Pipeline! 🚀";
pub const VERSION: &str = "1.0.0";

/// One greeting, built fresh on every invocation.
///
/// Field order here is the key order of the serialized JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingRecord {
    pub message: String,
    pub timestamp: String,
    pub version: String,
    pub environment: String,
    pub build_id: String,
}

/// Build a record from the current process environment and clock.
pub fn produce_record() -> GreetingRecord {
    produce_record_with(&Config::from_env())
}

/// Build a record from already-resolved inputs.
pub fn produce_record_with(cfg: &Config) -> GreetingRecord {
    let timestamp = Local::now().to_rfc3339_opts(SecondsFormat::Micros, false);
    tracing::debug!(
        environment = %cfg.environment,
        build_id = %cfg.build_id,
        %timestamp,
        "greeting record produced"
    );

    GreetingRecord {
        message: MESSAGE.to_string(),
        timestamp,
        version: VERSION.to_string(),
        environment: cfg.environment.clone(),
        build_id: cfg.build_id.clone(),
    }
}
