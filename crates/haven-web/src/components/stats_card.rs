use haven_core::cards::{Accent, CardView, Icon, TrendView};
use leptos::prelude::*;

use crate::components::icons::CardIcon;
use crate::components::ui::Card;
use crate::utils::{accent_classes, trend_classes};

/// One metric card. Pure: output depends only on the props.
#[component]
pub fn StatsCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    icon: Icon,
    #[prop(default = Accent::Teal)] accent: Accent,
    #[prop(default = None)] subtitle: Option<String>,
    #[prop(default = None)] trend: Option<TrendView>,
) -> impl IntoView {
    view! {
        <Card class="stats-card">
            <div class="flex items-start justify-between gap-4">
                <div class="space-y-1">
                    <h3 class="text-sm font-medium text-muted-foreground">{title}</h3>
                    <p class="text-2xl font-bold text-foreground">{value}</p>
                    {subtitle.map(|s| view! { <p class="text-xs text-muted-foreground">{s}</p> })}
                    {trend.map(|t| view! { <TrendLabel trend=t /> })}
                </div>
                <div
                    class=format!("rounded-md p-2 {}", accent_classes(accent))
                    data-accent=accent.as_str()
                >
                    <CardIcon icon=icon />
                </div>
            </div>
        </Card>
    }
}

/// Convenience wrapper rendering a resolved [`CardView`].
#[component]
pub fn StatsCardView(card: CardView) -> impl IntoView {
    view! {
        <StatsCard
            title=card.title
            value=card.value
            icon=card.icon
            accent=card.accent
            subtitle=card.subtitle
            trend=card.trend
        />
    }
}

#[component]
fn TrendLabel(trend: TrendView) -> impl IntoView {
    let direction = trend.direction;
    view! {
        <p
            class=format!("inline-flex items-center gap-1 text-xs font-medium {}", trend_classes(direction))
            data-tone=direction.tone()
        >
            <span aria-hidden="true">{direction.glyph()}</span>
            <span>{trend.label}</span>
        </p>
    }
}
