//! Admin sampling panel: placement mode, grid spacing, and bulk actions.

use leptos::prelude::*;

use crate::commands::sampling;
use crate::state::AppCtx;
use crate::state::ui::SamplingMode;

#[component]
pub fn SamplingPanel() -> impl IntoView {
    let ctx = expect_context::<AppCtx>();

    let spacing = RwSignal::new("50".to_owned());

    let mode_radio = move |mode: SamplingMode, label: &'static str| {
        view! {
            <label class="panel__radio">
                <input
                    type="radio"
                    name="sampling-mode"
                    prop:checked=move || ctx.ui.get().sampling_mode == mode
                    on:change=move |_| sampling::set_mode(ctx, mode)
                />
                {label}
            </label>
        }
    };

    view! {
        <section class="panel sampling-panel">
            <h2 class="panel__title">"Sampling"</h2>

            <div class="panel__row">
                {mode_radio(SamplingMode::Grid, "Grid")}
                {mode_radio(SamplingMode::Manual, "Manual")}
                {mode_radio(SamplingMode::Count, "Fixed count")}
            </div>

            <label class="panel__label">
                "Spacing (m)"
                <input
                    class="panel__input panel__input--short"
                    type="number"
                    min=sampling::MIN_SPACING_M
                    prop:value=move || spacing.get()
                    on:input=move |ev| spacing.set(event_target_value(&ev))
                />
            </label>

            <p class="sampling-panel__preview">{move || ctx.ui.get().preview_text}</p>

            <div class="panel__row">
                <button
                    class="btn"
                    on:click=move |_| {
                        leptos::task::spawn_local(sampling::preview_grid(ctx, spacing.get()));
                    }
                >
                    "Estimate"
                </button>
                <button
                    class="btn btn--primary"
                    on:click=move |_| {
                        leptos::task::spawn_local(sampling::generate_grid(ctx, spacing.get()));
                    }
                >
                    "Generate Grid"
                </button>
                <button
                    class="btn btn--danger"
                    on:click=move |_| leptos::task::spawn_local(sampling::remove_all_points(ctx))
                >
                    "Remove All"
                </button>
            </div>
        </section>
    }
}
