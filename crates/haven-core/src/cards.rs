//! Fixed card layouts per role and the per-field fallback values shown when a
//! metric is missing.

use serde::{Deserialize, Serialize};

use crate::types::{AdminStats, CounselorStats, Role, RoleStats, StatItem, StatsRecord, Trend, UserStats};

/// Accent color of a card. Cards without an explicit accent are teal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Teal,
    Blue,
    Green,
    Purple,
    Orange,
    Pink,
    Indigo,
    Red,
}

impl Accent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Teal => "teal",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Indigo => "indigo",
            Self::Red => "red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Heart,
    Calendar,
    Message,
    Book,
    Clock,
    Activity,
    Hourglass,
    Users,
    Star,
    UserPlus,
    Shield,
    CheckCircle,
    Gauge,
    Smile,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heart => "heart",
            Self::Calendar => "calendar",
            Self::Message => "message",
            Self::Book => "book",
            Self::Clock => "clock",
            Self::Activity => "activity",
            Self::Hourglass => "hourglass",
            Self::Users => "users",
            Self::Star => "star",
            Self::UserPlus => "user-plus",
            Self::Shield => "shield",
            Self::CheckCircle => "check-circle",
            Self::Gauge => "gauge",
            Self::Smile => "smile",
        }
    }
}

/// Static definition of one card: where its data comes from and what to show without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSpec {
    /// Wire key of the metric in the stats record.
    pub key: &'static str,
    pub title: &'static str,
    pub icon: Icon,
    pub accent: Accent,
    pub fallback_value: &'static str,
    pub fallback_subtitle: &'static str,
}

const fn spec(
    key: &'static str,
    title: &'static str,
    icon: Icon,
    accent: Accent,
    fallback_value: &'static str,
    fallback_subtitle: &'static str,
) -> CardSpec {
    CardSpec {
        key,
        title,
        icon,
        accent,
        fallback_value,
        fallback_subtitle,
    }
}

pub static USER_CARDS: [CardSpec; 6] = [
    spec("moodAverage", "Mood Average", Icon::Smile, Accent::Teal, "No Data", "Last 30 days"),
    spec("totalSessions", "Total Sessions", Icon::Calendar, Accent::Blue, "0", "All time"),
    spec("unreadMessages", "Unread Messages", Icon::Message, Accent::Purple, "0", "From your counselor"),
    spec("journalEntries", "Journal Entries", Icon::Book, Accent::Green, "0", "All time"),
    spec("nextSession", "Next Session", Icon::Clock, Accent::Orange, "None", "N/A"),
    spec("wellnessScore", "Wellness Score", Icon::Heart, Accent::Pink, "N/A", "Pending data"),
];

pub static COUNSELOR_CARDS: [CardSpec; 6] = [
    spec("activeSessions", "Active Sessions", Icon::Activity, Accent::Teal, "0", "Currently in progress"),
    spec("waitingList", "Waiting List", Icon::Hourglass, Accent::Orange, "0", "Awaiting assignment"),
    spec("unreadMessages", "Unread Messages", Icon::Message, Accent::Purple, "0", "From your clients"),
    spec("totalClients", "Total Clients", Icon::Users, Accent::Blue, "0", "Active clients"),
    spec("todaysSchedule", "Today's Schedule", Icon::Calendar, Accent::Green, "0", "Sessions today"),
    spec("sessionRating", "Session Rating", Icon::Star, Accent::Pink, "N/A", "Average rating"),
];

pub static ADMIN_CARDS: [CardSpec; 8] = [
    spec("totalUsers", "Total Users", Icon::Users, Accent::Teal, "0", "Registered users"),
    spec("counselors", "Counselors", Icon::Shield, Accent::Blue, "0", "Licensed professionals"),
    spec("activeSessions", "Active Sessions", Icon::Activity, Accent::Green, "0", "Currently ongoing"),
    spec("systemHealth", "System Health", Icon::Gauge, Accent::Indigo, "100%", "Uptime this month"),
    spec("newUsers", "New Users", Icon::UserPlus, Accent::Purple, "0", "This month"),
    spec("sessionsCompleted", "Sessions Completed", Icon::CheckCircle, Accent::Orange, "0", "This month"),
    spec("avgResponse", "Avg. Response", Icon::Clock, Accent::Red, "N/A", "Response time"),
    spec("satisfaction", "Satisfaction", Icon::Star, Accent::Pink, "N/A", "Average rating"),
];

pub fn card_specs(role: Role) -> &'static [CardSpec] {
    match role {
        Role::User => &USER_CARDS,
        Role::Counselor => &COUNSELOR_CARDS,
        Role::Admin => &ADMIN_CARDS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Up,
    Down,
}

impl TrendDirection {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Up => "\u{2191}",
            Self::Down => "\u{2193}",
        }
    }

    /// Semantic tone of the trend element: `success` when rising, `danger` when falling.
    pub fn tone(&self) -> &'static str {
        match self {
            Self::Up => "success",
            Self::Down => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendView {
    pub label: String,
    pub direction: TrendDirection,
}

impl From<&Trend> for TrendView {
    fn from(trend: &Trend) -> Self {
        Self {
            label: trend.value.clone(),
            direction: if trend.is_up {
                TrendDirection::Up
            } else {
                TrendDirection::Down
            },
        }
    }
}

/// Everything a card displays, already resolved against its fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub title: String,
    pub value: String,
    pub subtitle: Option<String>,
    pub icon: Icon,
    pub accent: Accent,
    pub trend: Option<TrendView>,
}

impl CardView {
    /// Resolve one card. Value and subtitle fall back independently; an empty
    /// string counts as missing.
    pub fn resolve(spec: &CardSpec, item: Option<&StatItem>) -> Self {
        let value = item
            .map(|i| i.value.as_str())
            .filter(|v| !v.is_empty())
            .unwrap_or(spec.fallback_value);
        let subtitle = item
            .map(|i| i.subtitle.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(spec.fallback_subtitle);

        Self {
            title: spec.title.to_string(),
            value: value.to_string(),
            subtitle: Some(subtitle.to_string()),
            icon: spec.icon,
            accent: spec.accent,
            trend: item.and_then(|i| i.trend.as_ref()).map(TrendView::from),
        }
    }
}

fn resolve_record<R: StatsRecord>(stats: Option<&R>) -> Vec<CardView> {
    card_specs(R::ROLE)
        .iter()
        .map(|spec| CardView::resolve(spec, stats.and_then(|s| s.item(spec.key))))
        .collect()
}

pub fn user_cards(stats: Option<&UserStats>) -> Vec<CardView> {
    resolve_record(stats)
}

pub fn counselor_cards(stats: Option<&CounselorStats>) -> Vec<CardView> {
    resolve_record(stats)
}

pub fn admin_cards(stats: Option<&AdminStats>) -> Vec<CardView> {
    resolve_record(stats)
}

/// Card grid for `role`. Stats belonging to another role are ignored.
pub fn cards_for(role: Role, stats: Option<&RoleStats>) -> Vec<CardView> {
    match role {
        Role::User => user_cards(match stats {
            Some(RoleStats::User(s)) => Some(s),
            _ => None,
        }),
        Role::Counselor => counselor_cards(match stats {
            Some(RoleStats::Counselor(s)) => Some(s),
            _ => None,
        }),
        Role::Admin => admin_cards(match stats {
            Some(RoleStats::Admin(s)) => Some(s),
            _ => None,
        }),
    }
}
