pub mod cards;
#[cfg(feature = "config")]
pub mod config;
pub mod error;
pub mod metrics;
pub mod overview;
pub mod service;
pub mod types;

#[cfg(feature = "config")]
pub use config::HavenConfig;
pub use error::FetchFailure;
pub use overview::{FetchTicket, Overview, OverviewView, Settled};
pub use service::{StatsService, load_stats};
pub use types::*;
