//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{equipment::EquipmentPage, home::HomePage, login::LoginPage, signup::SignupPage};
use crate::state::auth::AuthState;
use crate::state::session::AppSession;

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
/// Owns the session for the lifetime of the page and injects it, together
/// with the reactive `AuthState`, into every route through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let session = AppSession::from_config();

    provide_context(auth);
    provide_context(session.clone());

    bootstrap_session(session, auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/rental-gears.css"/>
        <Title text="Rental Gears"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("equipment"), ParamSegment("id")) view=EquipmentPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// One-shot validation of a stored token. `loading` drops to false only
/// after the identity check has finished, successfully or not.
fn bootstrap_session(session: AppSession, auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = session.bootstrap().await;
        auth.update(|state| state.resolve(user));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, auth);
    }
}
