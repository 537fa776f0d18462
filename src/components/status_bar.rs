//! Status line fed by command handlers.

use leptos::prelude::*;

use crate::state::AppCtx;

/// One-line status bar under the header. Commands write to it through
/// `AppCtx::set_status`; it never clears itself.
#[component]
pub fn StatusBar() -> impl IntoView {
    let ctx = expect_context::<AppCtx>();

    view! {
        <div class="status-bar">
            {move || ctx.ui.get().status}
            <Show when=move || ctx.points.get().loading>
                <span class="status-bar__loading">" Loading points..."</span>
            </Show>
        </div>
    }
}
