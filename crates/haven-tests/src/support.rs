//! Shared fixtures: sample stats records, a scripted in-memory service, a
//! stub HTTP stats server and the process-wide metrics recorder.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use haven_core::{
    AdminStats, CounselorStats, FetchFailure, Role, RoleStats, StatItem, StatsService, UserStats,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub fn full_user_stats() -> UserStats {
    UserStats {
        mood_average: Some(StatItem::new("7.4", "Last 30 days avg").with_trend("5%", true)),
        total_sessions: Some(StatItem::new("18", "Since joining")),
        unread_messages: Some(StatItem::new("3", "From Dr. Lee")),
        journal_entries: Some(StatItem::new("42", "This year").with_trend("2%", false)),
        next_session: Some(StatItem::new("Tomorrow", "10:00 AM")),
        wellness_score: Some(StatItem::new("82", "Good")),
    }
}

pub fn full_counselor_stats() -> CounselorStats {
    CounselorStats {
        active_sessions: Some(StatItem::new("2", "Right now")),
        waiting_list: Some(StatItem::new("5", "Unassigned")),
        unread_messages: Some(StatItem::new("9", "Clients")),
        total_clients: Some(StatItem::new("24", "Assigned")),
        todays_schedule: Some(StatItem::new("6", "Booked")),
        session_rating: Some(StatItem::new("4.8", "Out of 5").with_trend("0.2", true)),
    }
}

pub fn full_admin_stats() -> AdminStats {
    AdminStats {
        total_users: Some(StatItem::new("1,204", "Signed up")),
        counselors: Some(StatItem::new("37", "Verified")),
        active_sessions: Some(StatItem::new("11", "Live")),
        system_health: Some(StatItem::new("99.9%", "Uptime")),
        new_users: Some(StatItem::new("88", "October")),
        sessions_completed: Some(StatItem::new("640", "October")),
        avg_response: Some(StatItem::new("2h", "Median").with_trend("10%", false)),
        satisfaction: Some(StatItem::new("4.6", "Survey")),
    }
}

/// In-memory [`StatsService`] that records every call and replies from a script.
#[derive(Default)]
pub struct ScriptedService {
    calls: Mutex<Vec<Role>>,
    replies: Mutex<HashMap<Role, Result<RoleStats, FetchFailure>>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, role: Role, reply: Result<RoleStats, FetchFailure>) -> Self {
        self.replies.lock().unwrap().insert(role, reply);
        self
    }

    pub fn calls(&self) -> Vec<Role> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, role: Role) -> Result<RoleStats, FetchFailure> {
        self.calls.lock().unwrap().push(role);
        self.replies
            .lock()
            .unwrap()
            .get(&role)
            .cloned()
            .unwrap_or_else(|| Err(FetchFailure::Transport("no scripted reply".to_string())))
    }
}

impl StatsService for ScriptedService {
    async fn get_user_stats(&self) -> Result<UserStats, FetchFailure> {
        match self.answer(Role::User)? {
            RoleStats::User(s) => Ok(s),
            other => panic!("scripted {:?} reply for user", other.role()),
        }
    }

    async fn get_counselor_stats(&self) -> Result<CounselorStats, FetchFailure> {
        match self.answer(Role::Counselor)? {
            RoleStats::Counselor(s) => Ok(s),
            other => panic!("scripted {:?} reply for counselor", other.role()),
        }
    }

    async fn get_admin_stats(&self) -> Result<AdminStats, FetchFailure> {
        match self.answer(Role::Admin)? {
            RoleStats::Admin(s) => Ok(s),
            other => panic!("scripted {:?} reply for admin", other.role()),
        }
    }
}

/// Canned HTTP responses keyed by role name, plus a log of requested roles.
#[derive(Clone, Default)]
pub struct StubState {
    pub hits: Arc<Mutex<Vec<String>>>,
    pub responses: Arc<HashMap<String, (StatusCode, String)>>,
}

async fn stats_handler(
    State(state): State<StubState>,
    Path(role): Path<String>,
) -> (StatusCode, [(&'static str, &'static str); 1], String) {
    state.hits.lock().unwrap().push(role.clone());
    let (status, body) = state
        .responses
        .get(&role)
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, "{\"error\":\"unknown role\"}".to_string()));
    (status, [("content-type", "application/json")], body)
}

/// Serve `responses` under `/api/stats/{role}` on an ephemeral port.
/// Returns the API base URL and the shared hit log.
pub async fn spawn_stub(responses: HashMap<String, (StatusCode, String)>) -> (String, Arc<Mutex<Vec<String>>>) {
    let state = StubState {
        hits: Arc::default(),
        responses: Arc::new(responses),
    };
    let hits = state.hits.clone();

    let app = Router::new()
        .route("/api/stats/{role}", get(stats_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/api"), hits)
}

/// Prometheus recorder shared by every test in this binary, installed on first use.
pub fn metrics_handle() -> &'static PrometheusHandle {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
    HANDLE.get_or_init(|| PrometheusBuilder::new().install_recorder().unwrap())
}

/// Current value of the `name` sample carrying all of `labels`, 0 if not yet recorded.
pub fn counter_value(name: &str, labels: &[(&str, &str)]) -> u64 {
    let rendered = metrics_handle().render();
    rendered
        .lines()
        .filter(|line| line.starts_with(&format!("{name}{{")))
        .filter(|line| {
            labels
                .iter()
                .all(|(k, v)| line.contains(&format!("{k}=\"{v}\"")))
        })
        .filter_map(|line| line.rsplit(' ').next()?.parse::<u64>().ok())
        .sum()
}
