//! Surveyor page: pick a project, see its points, join and measure.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use uuid::Uuid;

use crate::commands::project;
use crate::components::{
    ModalHost, header::Header, map_host::MapHost, point_inspector::PointInspector,
    status_bar::StatusBar,
};
use crate::state::AppCtx;

/// Surveyor page. Redirects to `/login` unless a surveyor is signed in.
#[component]
pub fn SurveyorPage() -> impl IntoView {
    let ctx = expect_context::<AppCtx>();
    let navigate = use_navigate();

    Effect::new(move || {
        let auth = ctx.auth.get();
        let is_surveyor = auth.role() == Some(crate::net::types::Role::Surveyor);
        if !auth.loading && !is_surveyor {
            navigate("/login", NavigateOptions::default());
        }
    });

    leptos::task::spawn_local(project::load_projects(ctx));

    let on_select = move |ev| {
        let Ok(id) = event_target_value(&ev).parse::<Uuid>() else { return };
        leptos::task::spawn_local(project::select_project(ctx, id));
    };

    let project_options = move || {
        let mut projects: Vec<_> = ctx.session.get().projects.values().cloned().collect();
        projects.sort_by(|a, b| a.name.cmp(&b.name));
        projects
    };
    let current_id = move || {
        ctx.session
            .get()
            .current_project_id
            .map_or_else(String::new, |id| id.to_string())
    };

    view! {
        <div class="page surveyor-page">
            <Header/>
            <StatusBar/>
            <div class="page__body">
                <aside class="page__sidebar">
                    <section class="panel">
                        <h2 class="panel__title">"Project"</h2>
                        <select class="panel__input" prop:value=current_id on:change=on_select>
                            <option value="">"Select a project..."</option>
                            {move || {
                                project_options()
                                    .into_iter()
                                    .map(|p| {
                                        let value = p.id.to_string();
                                        view! { <option value=value>{p.name}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </section>
                    <PointInspector/>
                </aside>
                <MapHost/>
            </div>
            <ModalHost/>
        </div>
    }
}
