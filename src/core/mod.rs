pub mod banner;
pub mod error;
pub mod greeting;
pub mod service;

pub use error::GreetingError;
pub use greeting::{produce_record, GreetingRecord};
pub use service::run;
