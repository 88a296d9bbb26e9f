use leptos::prelude::*;

// ─── Card ────────────────────────────────────────────────────────────

#[component]
pub fn Card(
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let cls = format!("rounded-lg border border-border bg-card text-card-foreground p-6 {class}");
    view! { <div class=cls>{children()}</div> }
}

// ─── Spinner ─────────────────────────────────────────────────────────

#[component]
pub fn Spinner(
    #[prop(default = "Loading\u{2026}".into(), into)] label: String,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-3 py-16" role="status">
            <span class="h-6 w-6 animate-spin rounded-full border-2 border-muted border-t-primary" />
            <span class="text-sm text-muted-foreground">{label}</span>
        </div>
    }
}

// ─── Skeleton ────────────────────────────────────────────────────────

#[component]
pub fn Skeleton(
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let cls = format!("animate-pulse rounded-md bg-muted {class}");
    view! { <div class=cls></div> }
}
