//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::{BACKEND_URL_META, ClientConfig};
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, login_success::LoginSuccessPage, not_found::NotFoundPage,
};
use crate::routes;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The backend URL travels to the browser in a `<meta>` tag so the hydrated
/// app and the server render agree on a single configured value.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=BACKEND_URL_META content=config.backend_url().to_owned()/>
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
///
/// Resolves the client configuration and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::detect);
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/oauth-client.css"/>
        <Title text="Google Sign-In"/>
        <Meta name="description" content="Google OAuth login demo"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=routes::LOGIN/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=(StaticSegment("login"), StaticSegment("success")) view=LoginSuccessPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
