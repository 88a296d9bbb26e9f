use leptos::prelude::*;

use crate::components::overview_cards::OverviewCards;

/// Expects the viewer's session from [`crate::components::layout::RootLayout`].
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-2xl font-bold text-foreground">"Overview"</h1>
                <p class="text-muted-foreground mt-1">"Your statistics at a glance"</p>
            </div>

            <OverviewCards />
        </div>
    }
}
