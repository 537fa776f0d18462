//! Survey setup modal: window dates, capacity, and plot radius.

use leptos::prelude::*;

use crate::commands::sampling;
use crate::net::types::SurveySetup;
use crate::state::AppCtx;

/// Setup/edit dialog for one point. With `edit` the current values prefill
/// the form; otherwise it starts from workable defaults.
#[component]
pub fn SurveySetupDialog(point_id: i64, edit: bool) -> impl IntoView {
    let ctx = expect_context::<AppCtx>();

    let existing = edit
        .then(|| ctx.points.with_untracked(|p| p.get(point_id).cloned()))
        .flatten();

    let start_date = RwSignal::new(
        existing.as_ref().and_then(|p| p.start_date.clone()).unwrap_or_default(),
    );
    let end_date =
        RwSignal::new(existing.as_ref().and_then(|p| p.end_date.clone()).unwrap_or_default());
    let description = RwSignal::new(
        existing.as_ref().and_then(|p| p.description.clone()).unwrap_or_default(),
    );
    let max_surveyors = RwSignal::new(
        existing.as_ref().map_or("2".to_owned(), |p| p.max_surveyors.to_string()),
    );
    let plot_radius = RwSignal::new(
        existing
            .as_ref()
            .and_then(|p| p.plot_radius_m)
            .map_or("10".to_owned(), |r| r.to_string()),
    );

    let on_close = move |_| ctx.ui.update(crate::state::ui::UiState::close_modal);

    let on_save = move |_| {
        if start_date.get().is_empty() || end_date.get().is_empty() {
            crate::util::dialog::alert("Start and end dates are required");
            return;
        }
        let setup = SurveySetup {
            start_date: start_date.get(),
            end_date: end_date.get(),
            description: description.get(),
            max_surveyors: max_surveyors.get().trim().parse().unwrap_or(1).max(1),
            plot_radius_m: plot_radius.get().trim().parse().unwrap_or(10.0),
        };
        leptos::task::spawn_local(sampling::save_setup(ctx, point_id, setup));
    };

    view! {
        <div class="dialog-backdrop" on:click=on_close>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{if edit { "Edit Survey" } else { "Setup Survey" }}</h2>

                <label class="dialog__label">
                    "Start date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || start_date.get()
                        on:input=move |ev| start_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "End date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || end_date.get()
                        on:input=move |ev| end_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Max surveyors"
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        prop:value=move || max_surveyors.get()
                        on:input=move |ev| max_surveyors.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Plot radius (m)"
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        prop:value=move || plot_radius.get()
                        on:input=move |ev| plot_radius.set(event_target_value(&ev))
                    />
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=on_close>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=on_save>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
