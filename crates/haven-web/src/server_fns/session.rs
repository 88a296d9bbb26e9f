use haven_core::Session;
use leptos::prelude::*;

/// Header carrying the authenticated username, set by the upstream auth proxy.
pub const USER_HEADER: &str = "x-haven-user";
/// Header carrying the comma separated role list, set by the upstream auth proxy.
pub const ROLES_HEADER: &str = "x-haven-roles";

#[server]
pub async fn current_session() -> Result<Session, ServerFnError> {
    use axum::http::HeaderMap;

    let headers: HeaderMap = leptos_axum::extract().await?;
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
    Ok(Session::from_forwarded(header(USER_HEADER), header(ROLES_HEADER)))
}
