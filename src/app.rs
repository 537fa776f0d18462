//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{admin::AdminPage, login::LoginPage, surveyor::SurveyorPage};
use crate::state::AppCtx;
use crate::util::storage;

/// Root application component.
///
/// Provides the shared [`AppCtx`] and sets up client-side routing. The
/// persisted user profile is restored before the first route renders, so the
/// role redirects in the pages see the real auth state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = AppCtx::new();
    ctx.auth.update(|a| a.user = storage::read_user());
    provide_context(ctx);

    view! {
        <Stylesheet id="leptos" href="/style.css"/>
        <Title text="Canopy"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=AdminPage/>
                <Route path=StaticSegment("survey") view=SurveyorPage/>
            </Routes>
        </Router>
    }
}
