//! Tree measurement modal (surveyor side).

use leptos::prelude::*;

use crate::commands::survey::{self, MeasurementForm};
use crate::net::types::Species;
use crate::state::AppCtx;

/// Measurement entry dialog for one assigned point. Species come from the
/// backend catalogue; coordinates default to the point itself when blank.
#[component]
pub fn MeasurementDialog(point_id: i64) -> impl IntoView {
    let ctx = expect_context::<AppCtx>();

    let species = RwSignal::new(Vec::<Species>::new());
    leptos::task::spawn_local(async move {
        match survey::load_species().await {
            Ok(list) => species.set(list),
            Err(message) => crate::util::dialog::alert(&message),
        }
    });

    let species_id = RwSignal::new(None::<i64>);
    let latitude = RwSignal::new(String::new());
    let longitude = RwSignal::new(String::new());
    let dbh = RwSignal::new(String::new());
    let height = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let on_close = move |_| ctx.ui.update(crate::state::ui::UiState::close_modal);

    let on_submit = move |_| {
        let form = MeasurementForm {
            species_id: species_id.get(),
            latitude: latitude.get(),
            longitude: longitude.get(),
            dbh: dbh.get(),
            height: height.get(),
            notes: notes.get(),
        };
        leptos::task::spawn_local(survey::submit_measurement(ctx, point_id, form));
    };

    view! {
        <div class="dialog-backdrop" on:click=on_close>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Input Measurement"</h2>

                <label class="dialog__label">
                    "Species"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            species_id.set(event_target_value(&ev).parse().ok());
                        }
                    >
                        <option value="">"Select a species..."</option>
                        {move || {
                            species
                                .get()
                                .into_iter()
                                .map(|s| {
                                    let value = s.id.to_string();
                                    let label = match &s.latin_name {
                                        Some(latin) => format!("{} ({latin})", s.name),
                                        None => s.name.clone(),
                                    };
                                    view! { <option value=value>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>

                {move || {
                    let selected = species_id.get()?;
                    let s = species.get().into_iter().find(|s| s.id == selected)?;
                    Some(view! {
                        <div class="dialog__species-detail">
                            {s.family.map(|f| view! { <p class="dialog__hint">{format!("Family: {f}")}</p> })}
                            {s.description.map(|d| view! { <p class="dialog__hint">{d}</p> })}
                        </div>
                    })
                }}

                <div class="dialog__row">
                    <label class="dialog__label">
                        "Latitude"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="point location"
                            prop:value=move || latitude.get()
                            on:input=move |ev| latitude.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Longitude"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="point location"
                            prop:value=move || longitude.get()
                            on:input=move |ev| longitude.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                <label class="dialog__label">
                    "DBH (cm)"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        prop:value=move || dbh.get()
                        on:input=move |ev| dbh.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Height (m, optional)"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        prop:value=move || height.get()
                        on:input=move |ev| height.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Notes"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    />
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=on_close>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=on_submit>
                        "Submit"
                    </button>
                </div>
            </div>
        </div>
    }
}
