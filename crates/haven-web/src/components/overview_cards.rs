//! Role-aware overview: welcome banner, card grid and tip.
//!
//! The fetch cycle lives in [`haven_core::Overview`]; this component only
//! feeds it the viewer's role flags and renders whatever it reports.

use haven_core::overview::{Banner, Dashboard};
use haven_core::{Overview, OverviewView, Role, Settled, load_stats};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ServerStatsService;
use crate::auth::use_auth;
use crate::components::stats_card::StatsCardView;
use crate::components::ui::Spinner;

#[component]
pub fn OverviewCards() -> impl IntoView {
    let auth = use_auth();
    let overview = RwSignal::new(Overview::new());
    let flags = Memo::new(move |_| auth.flags());

    // Runs on mount and again whenever the role flags change.
    Effect::new(move |_| {
        let flags = flags.get();
        let Some(ticket) = overview.try_update(|o| o.begin_if_changed(flags)).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = load_stats(&ServerStatsService, ticket.role()).await;
            let outcome = overview.try_update(|o| o.settle(ticket, result));
            if let Some(Settled::Failed(err)) = outcome {
                leptos::logging::warn!("Error fetching {} stats: {err}", ticket.role());
            }
        });
    });

    move || {
        let username = auth.username();
        match overview.with(|o| o.view(&username)) {
            OverviewView::Loading => view! { <Spinner /> }.into_any(),
            OverviewView::Empty => ().into_any(),
            OverviewView::Ready(dashboard) => view! { <RoleOverview dashboard /> }.into_any(),
        }
    }
}

#[component]
fn RoleOverview(dashboard: Dashboard) -> impl IntoView {
    let Dashboard {
        role,
        banner,
        cards,
        tip,
    } = dashboard;

    view! {
        <div class="space-y-8" data-role=role.as_str()>
            <WelcomeBanner banner />
            <div class=grid_classes(role)>
                {cards.into_iter().map(|card| view! { <StatsCardView card /> }).collect_view()}
            </div>
            <div class="rounded-lg border border-border bg-muted/40 p-4">
                <p class="text-sm text-muted-foreground">{tip}</p>
            </div>
        </div>
    }
}

#[component]
fn WelcomeBanner(banner: Banner) -> impl IntoView {
    view! {
        <div class="rounded-lg bg-gradient-to-r from-teal-600 to-cyan-600 p-6 text-white">
            <h2 class="text-2xl font-bold">{banner.heading}</h2>
            <p class="mt-1 text-teal-50">{banner.message}</p>
        </div>
    }
}

fn grid_classes(role: Role) -> &'static str {
    match role {
        Role::Admin => "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4",
        Role::User | Role::Counselor => "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
    }
}
