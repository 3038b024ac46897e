//! Admin landing page. Rendered only inside `RequireAdmin`.

use leptos::prelude::*;

use crate::components::auth_provider::use_auth;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = use_auth();
    let name = move || auth.user().map(|u| u.name).unwrap_or_default();
    let email = move || auth.user().and_then(|u| u.email);

    let on_logout = move |_| auth.logout();

    view! {
        <div class="admin-page">
            <header class="admin-header">
                <h1>"Admin dashboard"</h1>
                <p class="admin-identity">
                    {name}
                    <Show when=move || email().is_some()>
                        " · " {move || email().unwrap_or_default()}
                    </Show>
                </p>
                <a class="dashboard-link" href="/dashboard">"User dashboard"</a>
                <button class="dashboard-logout" on:click=on_logout>"Log out"</button>
            </header>
        </div>
    }
}
