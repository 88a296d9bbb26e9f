//! Read-only access to the authenticated viewer.
//!
//! The session is owned by whoever provides it (see [`AuthProvider`]);
//! components only read role flags and the display name through [`use_auth`].

use haven_core::{Role, RoleFlags, Session};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session>,
}

impl AuthContext {
    pub fn flags(&self) -> RoleFlags {
        self.session.with(|s| s.flags)
    }

    pub fn role(&self) -> Option<Role> {
        self.session.with(Session::role)
    }

    pub fn username(&self) -> String {
        self.session.with(|s| s.username.clone())
    }

    pub fn is_user(&self) -> bool {
        self.flags().is_user
    }

    pub fn is_counselor(&self) -> bool {
        self.flags().is_counselor
    }

    pub fn is_admin(&self) -> bool {
        self.flags().is_admin
    }

    /// Replace the session, e.g. after the auth proxy reports a new login.
    pub fn set(&self, session: Session) {
        self.session.set(session);
    }
}

pub fn provide_auth(session: Session) -> AuthContext {
    let ctx = AuthContext {
        session: RwSignal::new(session),
    };
    provide_context(ctx);
    ctx
}

/// The current [`AuthContext`]. Panics outside an [`AuthProvider`].
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

#[component]
pub fn AuthProvider(session: Session, children: Children) -> impl IntoView {
    provide_auth(session);
    children()
}
