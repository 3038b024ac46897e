//! Route guard wrappers for the user and admin areas.
//!
//! Children are never rendered until the policy says so; while verification
//! runs the guard shows a loading placeholder and issues no redirect.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::components::auth_provider::use_auth;
use crate::util::auth::{GuardDecision, GuardPolicy, admin_guard, install_guard_redirect, user_guard};

/// Renders `children` for any authenticated user.
#[component]
pub fn RequireUser(children: ChildrenFn) -> impl IntoView {
    guarded(user_guard, children)
}

/// Renders `children` for admins only.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guarded(admin_guard, children)
}

fn guarded(policy: GuardPolicy, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    install_guard_redirect(auth.state(), policy, navigate);

    let decision = Memo::new(move |_| policy(&auth.state().get()));
    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Loading => view! {
            <div class="route-guard route-guard--loading" aria-busy="true">
                <span class="route-guard__spinner"></span>
                "Loading..."
            </div>
        }
        .into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
    }
}
