use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Viewer classification selecting which stats endpoint and card layout apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Counselor,
    Admin,
}

impl Role {
    /// Precedence order used when more than one role flag is set.
    pub const PRECEDENCE: [Role; 3] = [Role::User, Role::Counselor, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Counselor => "counselor",
            Self::Admin => "admin",
        }
    }

    pub fn from_str_role(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Some(Self::User),
            "counselor" => Some(Self::Counselor),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Fixed stats endpoint path for this role, relative to the API base.
    pub fn stats_path(&self) -> &'static str {
        match self {
            Self::User => "/stats/user",
            Self::Counselor => "/stats/counselor",
            Self::Admin => "/stats/admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role flags as exposed by the authentication collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleFlags {
    pub is_user: bool,
    pub is_counselor: bool,
    pub is_admin: bool,
}

impl RoleFlags {
    pub fn only(role: Role) -> Self {
        let mut flags = Self::default();
        flags.set(role);
        flags
    }

    pub fn set(&mut self, role: Role) {
        match role {
            Role::User => self.is_user = true,
            Role::Counselor => self.is_counselor = true,
            Role::Admin => self.is_admin = true,
        }
    }

    pub fn contains(&self, role: Role) -> bool {
        match role {
            Role::User => self.is_user,
            Role::Counselor => self.is_counselor,
            Role::Admin => self.is_admin,
        }
    }

    /// First set flag in [`Role::PRECEDENCE`] order; `None` when no flag is set.
    pub fn resolve(&self) -> Option<Role> {
        Role::PRECEDENCE.into_iter().find(|role| self.contains(*role))
    }

    /// Parse a comma separated role list such as `"user, admin"`. Unknown names are skipped.
    pub fn parse_list(list: &str) -> Self {
        let mut flags = Self::default();
        for role in list.split(',').filter_map(Role::from_str_role) {
            flags.set(role);
        }
        flags
    }
}

/// The authenticated viewer: display name plus role flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub flags: RoleFlags,
}

impl Session {
    /// Build a session from values forwarded by an auth proxy. Missing values
    /// give an anonymous session with no role.
    pub fn from_forwarded(username: Option<&str>, roles: Option<&str>) -> Self {
        Self {
            username: username.map(str::trim).unwrap_or_default().to_string(),
            flags: roles.map(RoleFlags::parse_list).unwrap_or_default(),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.flags.resolve()
    }
}

/// Directional delta attached to a metric for the current period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub value: String,
    pub is_up: bool,
}

/// A single metric's display value, subtitle and optional trend.
///
/// A missing or `null` value/subtitle decodes as an empty string, which the
/// card layer replaces with its fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatItem {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl StatItem {
    pub fn new(value: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            subtitle: subtitle.into(),
            trend: None,
        }
    }

    pub fn with_trend(mut self, value: impl Into<String>, is_up: bool) -> Self {
        self.trend = Some(Trend {
            value: value.into(),
            is_up,
        });
        self
    }
}

/// Lookup of a record's metric by its wire key.
pub trait StatsRecord {
    const ROLE: Role;

    fn item(&self, key: &str) -> Option<&StatItem>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_average: Option<StatItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sessions: Option<StatItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unread_messages: Option<StatItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_entries: Option<StatItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_session: Option<StatItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wellness_score: Option<StatItem>,
}

impl StatsRecord for UserStats {
    const ROLE: Role = Role::User;

    fn item(&self, key: &str) -> Option<&StatItem> {
        match key {
            "moodAverage" => self.mood_average.as_ref(),
            "totalSessions" => self.total_sessions.as_ref(),
            "unreadMessages" => self.unread_messages.as_ref(),
            "journalEntries" => self.journal_entries.as_ref(),
            "nextSession" => self.next_session.as_ref(),
            "wellnessScore" => self.wellness_score.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounselorStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_sessions: Option<StatItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waiting_list: Option<StatItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unread_messages: Option<StatItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_clients: Option<StatItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todays_schedule: Option<StatItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_rating: Option<StatItem>,
}

impl StatsRecord for CounselorStats {
    const ROLE: Role = Role::Counselor;

    fn item(&self, key: &str) -> Option<&StatItem> {
        match key {
            "activeSessions" => self.active_sessions.as_ref(),
            "waitingList" => self.waiting_list.as_ref(),
            "unreadMessages" => self.unread_messages.as_ref(),
            "totalClients" => self.total_clients.as_ref(),
            "todaysSchedule" => self.todays_schedule.as_ref(),
            "sessionRating" => self.session_rating.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_users: Option<StatItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counselors: Option<StatItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_sessions: Option<StatItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_health: Option<StatItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_users: Option<StatItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sessions_completed: Option<StatItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_response: Option<StatItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satisfaction: Option<StatItem>,
}

impl StatsRecord for AdminStats {
    const ROLE: Role = Role::Admin;

    fn item(&self, key: &str) -> Option<&StatItem> {
        match key {
            "totalUsers" => self.total_users.as_ref(),
            "counselors" => self.counselors.as_ref(),
            "activeSessions" => self.active_sessions.as_ref(),
            "systemHealth" => self.system_health.as_ref(),
            "newUsers" => self.new_users.as_ref(),
            "sessionsCompleted" => self.sessions_completed.as_ref(),
            "avgResponse" => self.avg_response.as_ref(),
            "satisfaction" => self.satisfaction.as_ref(),
            _ => None,
        }
    }
}

/// Stats for exactly one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", content = "stats", rename_all = "lowercase")]
pub enum RoleStats {
    User(UserStats),
    Counselor(CounselorStats),
    Admin(AdminStats),
}

impl RoleStats {
    pub fn role(&self) -> Role {
        match self {
            Self::User(_) => Role::User,
            Self::Counselor(_) => Role::Counselor,
            Self::Admin(_) => Role::Admin,
        }
    }
}

impl From<UserStats> for RoleStats {
    fn from(stats: UserStats) -> Self {
        Self::User(stats)
    }
}

impl From<CounselorStats> for RoleStats {
    fn from(stats: CounselorStats) -> Self {
        Self::Counselor(stats)
    }
}

impl From<AdminStats> for RoleStats {
    fn from(stats: AdminStats) -> Self {
        Self::Admin(stats)
    }
}
