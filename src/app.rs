//! Root application component with routing and the auth provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::auth_provider::AuthProvider;
use crate::components::route_guard::{RequireAdmin, RequireUser};
use crate::pages::{admin::AdminPage, dashboard::DashboardPage, login::LoginPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/listing-client.css"/>
        <Title text="Listings"/>

        <AuthProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <RequireUser><DashboardPage/></RequireUser> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <RequireAdmin><AdminPage/></RequireAdmin> }
                    />
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}
