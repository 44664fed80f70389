//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_layout::Layout;
use crate::pages::{
    account::AccountPage, admin::AdminPage, car_detail::CarDetailPage, cars::CarsPage, home::HomePage,
    login::LoginPage, register::RegisterPage,
};
use crate::state::{auth::AuthState, catalog::CatalogState};
use crate::util::auth::init_auth;

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
///
/// Provides the auth and catalog contexts, starts the session lookup and
/// wraps every route in the chrome-aware [`Layout`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let catalog = RwSignal::new(CatalogState::default());
    provide_context(auth);
    provide_context(catalog);

    init_auth(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/driveaway.css"/>
        <Title text="DriveAway car rental"/>

        <Router>
            <Layout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("cars") view=CarsPage/>
                    <Route path=(StaticSegment("cars"), ParamSegment("id")) view=CarDetailPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("account") view=AccountPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
