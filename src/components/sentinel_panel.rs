//! Sentinel imagery panel, revealed once an AOI is confirmed.

use leptos::prelude::*;

use crate::commands::sentinel;
use crate::state::AppCtx;

/// Imagery controls. Reuses the page-owned `year`/`months`/`cloud` signals so
/// the preview always matches what a save would store.
#[component]
pub fn SentinelPanel(
    year: RwSignal<String>,
    months: RwSignal<String>,
    cloud: RwSignal<String>,
) -> impl IntoView {
    let ctx = expect_context::<AppCtx>();

    view! {
        <Show when=move || ctx.ui.get().sentinel_visible>
            <section class="panel sentinel-panel">
                <h2 class="panel__title">"Sentinel-2 Imagery"</h2>
                <div class="panel__row">
                    <button
                        class="btn btn--primary"
                        on:click=move |_| {
                            leptos::task::spawn_local(sentinel::load_preview(
                                ctx,
                                year.get(),
                                months.get(),
                                cloud.get(),
                            ));
                        }
                    >
                        "Load Imagery"
                    </button>
                    <button class="btn" on:click=move |_| sentinel::clear(ctx)>
                        "Remove Imagery"
                    </button>
                </div>
            </section>
        </Show>
    }
}
