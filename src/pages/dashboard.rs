//! Signed-in landing page. Rendered only inside `RequireUser`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::auth_provider::use_auth;
use crate::net::types::Identity;

fn greeting(user: Option<&Identity>) -> String {
    match user.map(|u| u.name.trim()).filter(|n| !n.is_empty()) {
        Some(name) => format!("Welcome back, {name}"),
        None => "Welcome back".to_owned(),
    }
}

/// Single uppercase initial for the avatar fallback.
fn avatar_initial(user: Option<&Identity>) -> String {
    user.and_then(|u| u.name.trim().chars().next())
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let user = Memo::new(move |_| auth.user());

    // Clearing the session is enough; the guard redirects to /login.
    let on_logout = move |_| auth.logout();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                {move || match user.get().and_then(|u| u.profile_image) {
                    Some(src) => view! { <img class="avatar" src=src alt="Profile"/> }.into_any(),
                    None => view! {
                        <span class="avatar avatar--initial">{move || avatar_initial(user.get().as_ref())}</span>
                    }
                    .into_any(),
                }}
                <h1>{move || greeting(user.get().as_ref())}</h1>
                <Show when=move || auth.is_admin()>
                    <a class="dashboard-link" href="/admin">"Admin dashboard"</a>
                </Show>
                <button class="dashboard-logout" on:click=on_logout>"Log out"</button>
            </header>
        </div>
    }
}
