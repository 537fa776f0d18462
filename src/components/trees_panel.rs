//! Read-only list of the trees submitted for a point.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::TreeRecord;
use crate::state::AppCtx;

#[component]
pub fn TreesDialog(point_id: i64) -> impl IntoView {
    let ctx = expect_context::<AppCtx>();

    let trees = RwSignal::new(Vec::<TreeRecord>::new());
    let loading = RwSignal::new(true);
    leptos::task::spawn_local(async move {
        match api::fetch_trees(point_id).await {
            Ok(list) => trees.set(list),
            Err(message) => crate::util::dialog::alert(&message),
        }
        loading.set(false);
    });

    let on_close = move |_| ctx.ui.update(crate::state::ui::UiState::close_modal);

    view! {
        <div class="dialog-backdrop" on:click=on_close>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Submitted Trees"</h2>

                {move || {
                    if loading.get() {
                        view! { <p>"Loading trees..."</p> }.into_any()
                    } else if trees.get().is_empty() {
                        view! { <p>"No trees submitted yet."</p> }.into_any()
                    } else {
                        view! {
                            <table class="dialog__table">
                                <thead>
                                    <tr>
                                        <th>"Species"</th>
                                        <th>"DBH (cm)"</th>
                                        <th>"Height (m)"</th>
                                        <th>"Biomass (kg)"</th>
                                        <th>"Surveyor"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {trees
                                        .get()
                                        .into_iter()
                                        .map(|t| {
                                            view! {
                                                <tr>
                                                    <td>
                                                        {t.species_name.unwrap_or_else(|| "\u{2014}".to_owned())}
                                                    </td>
                                                    <td>{format!("{:.1}", t.dbh)}</td>
                                                    <td>
                                                        {t.height
                                                            .map_or("\u{2014}".to_owned(), |h| format!("{h:.1}"))}
                                                    </td>
                                                    <td>
                                                        {t.biomass
                                                            .map_or("\u{2014}".to_owned(), |b| format!("{b:.1}"))}
                                                    </td>
                                                    <td>
                                                        {t.surveyor_name
                                                            .unwrap_or_else(|| "\u{2014}".to_owned())}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }
                }}

                <div class="dialog__actions">
                    <button class="btn" on:click=on_close>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
