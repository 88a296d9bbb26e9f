pub mod client;
pub mod error;

pub use client::StatsClient;
pub use error::SdkError;
