pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod persist;
pub mod pipeline;
pub mod present;

pub use config::{Config, Source};
pub use error::ScrapeError;
pub use extract::PlanRecord;
