//! Page frame. Loads the viewer's session once, provides it to everything
//! below, and shows who is signed in.

use haven_core::Role;
use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::auth::{AuthProvider, use_auth};
use crate::components::ui::Skeleton;
use crate::server_fns::session::current_session;

#[component]
pub fn RootLayout() -> impl IntoView {
    let session = Resource::new(|| (), |_| current_session());

    view! {
        <div class="flex h-screen bg-background">
            <Suspense fallback=move || view! { <Skeleton class="h-full w-60" /> }>
                {move || {
                    session
                        .get()
                        .map(|result| match result {
                            Ok(session) => {
                                view! {
                                    <AuthProvider session>
                                        <Sidebar />
                                        <main class="flex-1 overflow-auto p-8">
                                            <Outlet />
                                        </main>
                                    </AuthProvider>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <main class="flex-1 p-8">
                                        <div class="rounded-lg border border-destructive/50 bg-destructive/10 p-4">
                                            <p class="text-destructive text-sm">{e.to_string()}</p>
                                        </div>
                                    </main>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    view! {
        <aside class="w-60 border-r border-sidebar-border bg-sidebar flex flex-col">
            <div class="h-16 flex items-center px-6 border-b border-sidebar-border">
                <a href="/" class="text-lg font-semibold text-foreground tracking-tight">
                    "Haven"
                </a>
            </div>
            <div class="flex-1" />
            <ViewerBadge />
        </aside>
    }
}

#[component]
fn ViewerBadge() -> impl IntoView {
    let auth = use_auth();
    let name = move || display_name(&auth.username());

    view! {
        <div
            class="px-6 py-4 border-t border-sidebar-border space-y-0.5"
            data-role=move || auth.role().map(|r| r.as_str())
        >
            <p class="text-sm font-medium text-foreground truncate">{name}</p>
            <p class="text-xs text-muted-foreground">{move || role_label(auth.role())}</p>
        </div>
    }
}

fn display_name(username: &str) -> String {
    if username.is_empty() { "Guest".to_string() } else { username.to_string() }
}

fn role_label(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::User) => "Member",
        Some(Role::Counselor) => "Counselor",
        Some(Role::Admin) => "Administrator",
        None => "No role assigned",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_viewer_is_guest() {
        assert_eq!(display_name(""), "Guest");
        assert_eq!(display_name("sam"), "sam");
    }

    #[test]
    fn role_labels() {
        assert_eq!(role_label(Some(Role::Counselor)), "Counselor");
        assert_eq!(role_label(None), "No role assigned");
    }
}
