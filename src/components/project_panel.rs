//! Admin project panel: location search, project selection, and AOI authoring.

use leptos::prelude::*;
use uuid::Uuid;

use crate::commands::project;
use crate::state::AppCtx;

/// Project sidebar section.
///
/// The imagery parameters (`year`, `months`, `cloud`) are owned by the page
/// so the Sentinel panel can reuse the same values.
#[component]
pub fn ProjectPanel(
    year: RwSignal<String>,
    months: RwSignal<String>,
    cloud: RwSignal<String>,
) -> impl IntoView {
    let ctx = expect_context::<AppCtx>();

    let query = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());

    let on_search = move |_| {
        leptos::task::spawn_local(project::search(ctx, query.get()));
    };

    let on_select = move |ev| {
        let raw = event_target_value(&ev);
        let Ok(id) = raw.parse::<Uuid>() else { return };
        if let Some(p) = ctx.session.with_untracked(|s| s.projects.get(&id).cloned()) {
            name.set(p.name.clone());
            year.set(p.year.to_string());
        }
        leptos::task::spawn_local(project::select_project(ctx, id));
    };

    let on_new = move |_| {
        name.set(String::new());
        project::start_new_project(ctx);
    };

    let on_save = move |_| {
        leptos::task::spawn_local(project::save_project(
            ctx,
            name.get(),
            year.get(),
            months.get(),
            cloud.get(),
        ));
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
    let editing = move || ctx.session.get().aoi.is_editing();

    view! {
        <section class="panel project-panel">
            <h2 class="panel__title">"Project"</h2>

            <div class="panel__row">
                <input
                    class="panel__input"
                    type="text"
                    placeholder="Search a location..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            leptos::task::spawn_local(project::search(ctx, query.get()));
                        }
                    }
                />
                <button class="btn" on:click=on_search>
                    "Search"
                </button>
            </div>

            <label class="panel__label">
                "Existing project"
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
            </label>

            <div class="panel__row">
                <button class="btn btn--primary" on:click=on_new>
                    "New Project"
                </button>
                <button class="btn" on:click=move |_| project::toggle_aoi_edit(ctx)>
                    {move || if editing() { "Finish Editing" } else { "Edit Area" }}
                </button>
                <Show when=editing>
                    <button class="btn" on:click=move |_| project::reset_aoi(ctx)>
                        "Reset Area"
                    </button>
                </Show>
            </div>

            <label class="panel__label">
                "Project name"
                <input
                    class="panel__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <div class="panel__row">
                <label class="panel__label">
                    "Year"
                    <input
                        class="panel__input panel__input--short"
                        type="number"
                        prop:value=move || year.get()
                        on:input=move |ev| year.set(event_target_value(&ev))
                    />
                </label>
                <label class="panel__label">
                    "Months"
                    <input
                        class="panel__input panel__input--short"
                        type="text"
                        prop:value=move || months.get()
                        on:input=move |ev| months.set(event_target_value(&ev))
                    />
                </label>
                <label class="panel__label">
                    "Max cloud %"
                    <input
                        class="panel__input panel__input--short"
                        type="number"
                        prop:value=move || cloud.get()
                        on:input=move |ev| cloud.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <div class="panel__row">
                <button class="btn btn--primary" on:click=on_save>
                    {move || {
                        if ctx.session.get().is_update() { "Update Project" } else { "Save Project" }
                    }}
                </button>
                <Show when=move || ctx.session.get().current_project_id.is_some()>
                    <button
                        class="btn btn--danger"
                        on:click=move |_| leptos::task::spawn_local(project::delete_project(ctx))
                    >
                        "Delete Project"
                    </button>
                </Show>
            </div>
        </section>
    }
}
