use std::future::Future;

use crate::error::FetchFailure;
use crate::types::{AdminStats, CounselorStats, Role, RoleStats, UserStats};

/// Source of per-role stats. Every call performs exactly one request against
/// the role's fixed path; implementations do not retry or cache.
pub trait StatsService {
    fn get_user_stats(&self) -> impl Future<Output = Result<UserStats, FetchFailure>>;

    fn get_counselor_stats(&self) -> impl Future<Output = Result<CounselorStats, FetchFailure>>;

    fn get_admin_stats(&self) -> impl Future<Output = Result<AdminStats, FetchFailure>>;
}

/// Call the one service operation matching `role`.
pub async fn load_stats<S: StatsService>(
    service: &S,
    role: Role,
) -> Result<RoleStats, FetchFailure> {
    match role {
        Role::User => service.get_user_stats().await.map(RoleStats::from),
        Role::Counselor => service.get_counselor_stats().await.map(RoleStats::from),
        Role::Admin => service.get_admin_stats().await.map(RoleStats::from),
    }
}
