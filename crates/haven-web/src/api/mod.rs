//! Stats access from the dashboard.
//!
//! Components talk to [`ServerStatsService`], which goes through the server
//! functions in [`crate::server_fns::stats`]; on the server those call the
//! shared [`haven_sdk::StatsClient`] held in [`client`].

#[cfg(feature = "ssr")]
pub mod client;

use haven_core::{AdminStats, CounselorStats, FetchFailure, StatsService, UserStats};
use leptos::prelude::ServerFnError;

use crate::server_fns::stats;

/// [`StatsService`] backed by the dashboard's server functions.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerStatsService;

fn into_failure(err: ServerFnError) -> FetchFailure {
    FetchFailure::Transport(err.to_string())
}

impl StatsService for ServerStatsService {
    async fn get_user_stats(&self) -> Result<UserStats, FetchFailure> {
        stats::get_user_stats().await.map_err(into_failure)
    }

    async fn get_counselor_stats(&self) -> Result<CounselorStats, FetchFailure> {
        stats::get_counselor_stats().await.map_err(into_failure)
    }

    async fn get_admin_stats(&self) -> Result<AdminStats, FetchFailure> {
        stats::get_admin_stats().await.map_err(into_failure)
    }
}
