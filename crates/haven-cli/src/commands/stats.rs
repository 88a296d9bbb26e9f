use anyhow::Result;
use haven_core::cards::CardView;
use haven_core::overview::Dashboard;
use haven_core::{HavenConfig, Overview, OverviewView, RoleFlags};
use haven_sdk::StatsClient;

pub async fn show(config: &HavenConfig, flags: RoleFlags, username: &str, json: bool) -> Result<()> {
    let client = StatsClient::from_config(config)?;

    let mut overview = Overview::new();
    // Failures are logged by the overview and rendered as fallback values.
    overview.refresh(flags, &client).await;

    let view = overview.view(username);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render(&view));
    }

    Ok(())
}

fn render(view: &OverviewView) -> String {
    match view {
        OverviewView::Loading => "Loading\u{2026}\n".to_string(),
        OverviewView::Empty => "No role selected (use --user, --counselor or --admin)\n".to_string(),
        OverviewView::Ready(dashboard) => render_dashboard(dashboard),
    }
}

fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", dashboard.banner.heading));
    out.push_str(&format!("{}\n", dashboard.banner.message));
    out.push_str(&format!("{}\n", "-".repeat(72)));
    out.push_str(&format!("{:<22} {:<14} {:<26} {}\n", "METRIC", "VALUE", "DETAIL", "TREND"));
    for card in &dashboard.cards {
        out.push_str(&render_card(card));
    }
    out.push_str(&format!("{}\n", "-".repeat(72)));
    out.push_str(&format!("{}\n", dashboard.tip));
    out
}

fn render_card(card: &CardView) -> String {
    let trend = card
        .trend
        .as_ref()
        .map(|t| format!("{} {}", t.direction.glyph(), t.label))
        .unwrap_or_default();
    let line = format!(
        "{:<22} {:<14} {:<26} {}",
        card.title,
        card.value,
        card.subtitle.as_deref().unwrap_or_default(),
        trend
    );
    format!("{}\n", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_core::cards::user_cards;
    use haven_core::overview::{Banner, tip};
    use haven_core::{Role, StatItem, UserStats};

    #[test]
    fn render_empty_and_loading() {
        assert!(render(&OverviewView::Empty).starts_with("No role selected"));
        assert_eq!(render(&OverviewView::Loading), "Loading\u{2026}\n");
    }

    #[test]
    fn render_dashboard_includes_banner_cards_and_tip() {
        let stats = UserStats {
            total_sessions: Some(StatItem::new("12", "All time").with_trend("5%", true)),
            ..UserStats::default()
        };
        let dashboard = Dashboard {
            role: Role::User,
            banner: Banner::for_role(Role::User, "sam"),
            cards: user_cards(Some(&stats)),
            tip: tip(Role::User).to_string(),
        };
        let out = render(&OverviewView::Ready(dashboard));

        assert!(out.starts_with("Welcome back, sam!\n"));
        assert!(out.contains("No Data"));
        assert!(out.contains("\u{2191} 5%"));
        assert!(out.trim_end().ends_with(tip(Role::User)));
    }
}
