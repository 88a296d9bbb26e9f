use haven_core::cards::{admin_cards, counselor_cards, user_cards};
use haven_core::{
    FetchFailure, Overview, OverviewView, Role, RoleFlags, RoleStats, Settled, StatItem,
    UserStats, load_stats,
};

use crate::support::{ScriptedService, full_admin_stats, full_counselor_stats, full_user_stats};

fn ready(view: OverviewView) -> haven_core::overview::Dashboard {
    match view {
        OverviewView::Ready(d) => d,
        other => panic!("expected a ready dashboard, got {other:?}"),
    }
}

#[tokio::test]
async fn test_one_call_per_cycle_for_each_role() {
    for role in Role::PRECEDENCE {
        let service = ScriptedService::new()
            .reply(Role::User, Ok(full_user_stats().into()))
            .reply(Role::Counselor, Ok(full_counselor_stats().into()))
            .reply(Role::Admin, Ok(full_admin_stats().into()));
        let mut overview = Overview::new();

        let settled = overview.refresh(RoleFlags::only(role), &service).await;

        assert_eq!(settled, Some(Settled::Applied));
        assert_eq!(service.calls(), vec![role]);
    }
}

#[tokio::test]
async fn test_failure_renders_full_fallback_table() {
    let service = ScriptedService::new().reply(
        Role::Counselor,
        Err(FetchFailure::Status {
            status: 503,
            body: "unavailable".to_string(),
        }),
    );
    let mut overview = Overview::new();

    let settled = overview
        .refresh(RoleFlags::only(Role::Counselor), &service)
        .await;

    assert!(matches!(settled, Some(Settled::Failed(FetchFailure::Status { status: 503, .. }))));
    assert!(!overview.is_loading());
    assert!(overview.counselor_stats().is_none());
    let dashboard = ready(overview.view("dana"));
    assert_eq!(dashboard.cards, counselor_cards(None));
}

#[tokio::test]
async fn test_complete_response_is_displayed() {
    let service = ScriptedService::new().reply(Role::Admin, Ok(full_admin_stats().into()));
    let mut overview = Overview::new();

    overview.refresh(RoleFlags::only(Role::Admin), &service).await;

    let dashboard = ready(overview.view("root"));
    assert_eq!(dashboard.role, Role::Admin);
    assert_eq!(dashboard.cards, admin_cards(Some(&full_admin_stats())));
    assert_eq!(dashboard.banner.heading, "Welcome back, root!");
    assert!(!dashboard.tip.is_empty());
}

#[tokio::test]
async fn test_partial_response_mixes_data_and_fallbacks() {
    let partial = UserStats {
        unread_messages: Some(StatItem::new("2", "From Dr. Lee")),
        ..UserStats::default()
    };
    let service = ScriptedService::new().reply(Role::User, Ok(partial.clone().into()));
    let mut overview = Overview::new();

    overview.refresh(RoleFlags::only(Role::User), &service).await;

    let cards = ready(overview.view("sam")).cards;
    assert_eq!(cards, user_cards(Some(&partial)));
    assert_eq!(cards[2].value, "2");
    assert_eq!(cards[0].value, "No Data");
}

#[tokio::test]
async fn test_user_wins_role_precedence() {
    let service = ScriptedService::new()
        .reply(Role::User, Ok(full_user_stats().into()))
        .reply(Role::Counselor, Ok(full_counselor_stats().into()));
    let flags = RoleFlags {
        is_user: true,
        is_counselor: true,
        is_admin: false,
    };
    let mut overview = Overview::new();

    overview.refresh(flags, &service).await;

    assert_eq!(service.calls(), vec![Role::User]);
    assert_eq!(ready(overview.view("sam")).role, Role::User);
}

#[tokio::test]
async fn test_counselor_wins_over_admin() {
    let service = ScriptedService::new().reply(Role::Counselor, Ok(full_counselor_stats().into()));
    let flags = RoleFlags {
        is_user: false,
        is_counselor: true,
        is_admin: true,
    };
    let mut overview = Overview::new();

    overview.refresh(flags, &service).await;

    assert_eq!(service.calls(), vec![Role::Counselor]);
}

#[test]
fn test_loading_shows_no_cards() {
    let mut overview = Overview::new();
    assert_eq!(overview.view("sam"), OverviewView::Loading);

    let _ticket = overview.begin(RoleFlags::only(Role::User)).unwrap();
    assert!(overview.is_loading());
    assert_eq!(overview.view("sam"), OverviewView::Loading);
}

#[tokio::test]
async fn test_no_role_fetches_nothing_and_renders_nothing() {
    let service = ScriptedService::new();
    let mut overview = Overview::new();

    let settled = overview.refresh(RoleFlags::default(), &service).await;

    assert!(settled.is_none());
    assert!(service.calls().is_empty());
    assert_eq!(overview.view("sam"), OverviewView::Empty);
}

#[test]
fn test_stale_response_is_discarded() {
    let mut overview = Overview::new();
    let first = overview.begin(RoleFlags::only(Role::User)).unwrap();
    let second = overview.begin(RoleFlags::only(Role::Counselor)).unwrap();

    assert_eq!(
        overview.settle(first, Ok(RoleStats::User(full_user_stats()))),
        Settled::Stale
    );
    assert!(overview.user_stats().is_none());
    assert!(overview.is_loading());

    assert_eq!(
        overview.settle(second, Ok(RoleStats::Counselor(full_counselor_stats()))),
        Settled::Applied
    );
    assert!(!overview.is_loading());
    assert_eq!(ready(overview.view("dana")).role, Role::Counselor);
}

#[test]
fn test_refetch_keeps_prior_data_until_new_result() {
    let mut overview = Overview::new();
    let ticket = overview.begin(RoleFlags::only(Role::User)).unwrap();
    overview.settle(ticket, Ok(RoleStats::User(full_user_stats())));

    let again = overview.begin(RoleFlags::only(Role::User)).unwrap();
    assert_eq!(overview.user_stats(), Some(&full_user_stats()));

    // A failed refetch leaves the earlier data in place.
    let settled = overview.settle(again, Err(FetchFailure::Transport("reset".to_string())));
    assert!(matches!(settled, Settled::Failed(_)));
    assert_eq!(
        ready(overview.view("sam")).cards,
        user_cards(Some(&full_user_stats()))
    );
}

#[tokio::test]
async fn test_load_stats_dispatches_by_role() {
    let service = ScriptedService::new().reply(Role::Admin, Ok(full_admin_stats().into()));

    let stats = load_stats(&service, Role::Admin).await.unwrap();

    assert_eq!(stats.role(), Role::Admin);
    assert_eq!(service.calls(), vec![Role::Admin]);
}
