//! Admin page: project authoring, sampling design, and review.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::commands::{forms, project};
use crate::components::{
    ModalHost, header::Header, map_host::MapHost, point_inspector::PointInspector,
    project_panel::ProjectPanel, sampling_panel::SamplingPanel, sentinel_panel::SentinelPanel,
    status_bar::StatusBar,
};
use crate::state::AppCtx;

/// Admin page. Redirects to `/login` unless an admin is signed in.
#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = expect_context::<AppCtx>();
    let navigate = use_navigate();

    Effect::new(move || {
        let auth = ctx.auth.get();
        if !auth.loading && !auth.is_admin() {
            navigate("/login", NavigateOptions::default());
        }
    });

    // Imagery parameters shared by the project save and the Sentinel preview.
    let year = RwSignal::new(forms::DEFAULT_YEAR.to_string());
    let months = RwSignal::new(forms::DEFAULT_MONTHS.to_owned());
    let cloud = RwSignal::new(forms::DEFAULT_CLOUD.to_string());

    leptos::task::spawn_local(project::load_projects(ctx));

    view! {
        <div class="page admin-page">
            <Header/>
            <StatusBar/>
            <div class="page__body">
                <aside class="page__sidebar">
                    <ProjectPanel year=year months=months cloud=cloud/>
                    <SamplingPanel/>
                    <SentinelPanel year=year months=months cloud=cloud/>
                    <PointInspector/>
                </aside>
                <MapHost/>
            </div>
            <ModalHost/>
        </div>
    }
}
