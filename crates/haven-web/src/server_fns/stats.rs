use haven_core::{AdminStats, CounselorStats, UserStats};
use leptos::prelude::*;

#[server]
pub async fn get_user_stats() -> Result<UserStats, ServerFnError> {
    use haven_core::StatsService;
    crate::api::client::client()?
        .get_user_stats()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn get_counselor_stats() -> Result<CounselorStats, ServerFnError> {
    use haven_core::StatsService;
    crate::api::client::client()?
        .get_counselor_stats()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn get_admin_stats() -> Result<AdminStats, ServerFnError> {
    use haven_core::StatsService;
    crate::api::client::client()?
        .get_admin_stats()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
