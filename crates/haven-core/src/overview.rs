//! Fetch/render orchestration for the role overview.
//!
//! [`Overview`] is driven in two steps: [`Overview::begin`] when the viewer's
//! role flags are first seen or change, and [`Overview::settle`] once the
//! matching stats call completes. [`Overview::view`] turns the current state
//! into what the dashboard shows.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cards::{CardView, cards_for};
use crate::error::FetchFailure;
use crate::service::{StatsService, load_stats};
use crate::types::{AdminStats, CounselorStats, Role, RoleFlags, RoleStats, UserStats};

/// Issued by [`Overview::begin`]; only the most recent ticket may settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    id: u64,
    role: Role,
}

impl FetchTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

/// Outcome of [`Overview::settle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    Applied,
    /// The fetch failed; the slot keeps whatever it held before.
    Failed(FetchFailure),
    /// A newer fetch was started after this one; the result was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct Overview {
    loading: bool,
    role: Option<Role>,
    flags: Option<RoleFlags>,
    user: Option<UserStats>,
    counselor: Option<CounselorStats>,
    admin: Option<AdminStats>,
    latest: u64,
}

impl Overview {
    /// A freshly mounted overview is loading until the first `begin` says otherwise.
    pub fn new() -> Self {
        Self {
            loading: true,
            role: None,
            flags: None,
            user: None,
            counselor: None,
            admin: None,
            latest: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn user_stats(&self) -> Option<&UserStats> {
        self.user.as_ref()
    }

    pub fn counselor_stats(&self) -> Option<&CounselorStats> {
        self.counselor.as_ref()
    }

    pub fn admin_stats(&self) -> Option<&AdminStats> {
        self.admin.as_ref()
    }

    /// Start a fetch cycle for `flags`.
    ///
    /// Returns the ticket for the single stats call to make, or `None` when no
    /// role flag is set. Data already held is kept until the new result lands.
    pub fn begin(&mut self, flags: RoleFlags) -> Option<FetchTicket> {
        self.flags = Some(flags);
        self.role = flags.resolve();
        self.latest += 1;

        let Some(role) = self.role else {
            self.loading = false;
            debug!("No role resolved, nothing to fetch");
            return None;
        };

        self.loading = true;
        debug!(role = %role, request_id = self.latest, "Fetching stats");
        Some(FetchTicket {
            id: self.latest,
            role,
        })
    }

    /// Like [`Overview::begin`], but a no-op when `flags` equal the flags of
    /// the current cycle. Suits render loops that re-read the auth state.
    pub fn begin_if_changed(&mut self, flags: RoleFlags) -> Option<FetchTicket> {
        if self.flags == Some(flags) {
            return None;
        }
        self.begin(flags)
    }

    /// Apply the result of the call made for `ticket`.
    pub fn settle(
        &mut self,
        ticket: FetchTicket,
        result: Result<RoleStats, FetchFailure>,
    ) -> Settled {
        if ticket.id != self.latest {
            debug!(
                role = %ticket.role,
                request_id = ticket.id,
                latest = self.latest,
                "Discarding stale stats response"
            );
            crate::metrics::record_stale_discarded(ticket.role);
            return Settled::Stale;
        }

        self.loading = false;
        match result {
            Ok(stats) => {
                self.store(stats);
                Settled::Applied
            }
            Err(err) => {
                warn!(role = %ticket.role, kind = err.kind(), error = %err, "Failed to fetch stats");
                Settled::Failed(err)
            }
        }
    }

    /// Run one full cycle against `service`: begin, fetch, settle.
    pub async fn refresh<S: StatsService>(&mut self, flags: RoleFlags, service: &S) -> Option<Settled> {
        let ticket = self.begin(flags)?;
        let result = load_stats(service, ticket.role).await;
        Some(self.settle(ticket, result))
    }

    fn store(&mut self, stats: RoleStats) {
        match stats {
            RoleStats::User(s) => self.user = Some(s),
            RoleStats::Counselor(s) => self.counselor = Some(s),
            RoleStats::Admin(s) => self.admin = Some(s),
        }
    }

    fn stats_for(&self, role: Role) -> Option<RoleStats> {
        match role {
            Role::User => self.user.clone().map(RoleStats::User),
            Role::Counselor => self.counselor.clone().map(RoleStats::Counselor),
            Role::Admin => self.admin.clone().map(RoleStats::Admin),
        }
    }

    pub fn view(&self, username: &str) -> OverviewView {
        if self.loading {
            return OverviewView::Loading;
        }
        let Some(role) = self.role else {
            return OverviewView::Empty;
        };

        OverviewView::Ready(Dashboard {
            role,
            banner: Banner::for_role(role, username),
            cards: cards_for(role, self.stats_for(role).as_ref()),
            tip: tip(role).to_string(),
        })
    }
}

impl Default for Overview {
    fn default() -> Self {
        Self::new()
    }
}

/// What the overview shows right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverviewView {
    /// Loading indicator only.
    Loading,
    /// No role: no banner, no cards.
    Empty,
    Ready(Dashboard),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub role: Role,
    pub banner: Banner,
    pub cards: Vec<CardView>,
    pub tip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub heading: String,
    pub message: String,
}

impl Banner {
    pub fn for_role(role: Role, username: &str) -> Self {
        let message = match role {
            Role::User => "Here's an overview of your wellness journey.",
            Role::Counselor => "Here's an overview of your practice today.",
            Role::Admin => "Here's an overview of the platform.",
        };
        Self {
            heading: format!("Welcome back, {username}!"),
            message: message.to_string(),
        }
    }
}

pub fn tip(role: Role) -> &'static str {
    match role {
        Role::User => {
            "Tip: Writing in your journal regularly helps you and your counselor track your progress."
        }
        Role::Counselor => {
            "Tip: Reviewing client journals before a session helps you prepare focused conversations."
        }
        Role::Admin => {
            "Tip: Keep an eye on the waiting list and response times to maintain quality of care."
        }
    }
}
