//! Surveyor assignment modal.

use leptos::prelude::*;
use uuid::Uuid;

use crate::commands::assign;
use crate::net::types::Surveyor;
use crate::state::AppCtx;

/// Roster modal for one point: who is assigned, who can still be added.
/// Reloads its own lists after every change; the marker layer resync happens
/// inside the assign/unassign commands.
#[component]
pub fn AssignPanel(point_id: i64) -> impl IntoView {
    let ctx = expect_context::<AppCtx>();

    let assigned = RwSignal::new(Vec::<Surveyor>::new());
    let available = RwSignal::new(Vec::<Surveyor>::new());

    let refresh = move || async move {
        match assign::load_roster(point_id).await {
            Ok(roster) => {
                assigned.set(roster.assigned);
                available.set(roster.available);
            }
            Err(message) => crate::util::dialog::alert(&message),
        }
    };
    leptos::task::spawn_local(refresh());

    let on_add = move |surveyor_id: Uuid| {
        leptos::task::spawn_local(async move {
            if assign::assign(ctx, point_id, surveyor_id).await {
                refresh().await;
            }
        });
    };
    let on_remove = move |surveyor_id: Uuid| {
        leptos::task::spawn_local(async move {
            if assign::unassign(ctx, point_id, surveyor_id).await {
                refresh().await;
            }
        });
    };

    let on_close = move |_| ctx.ui.update(crate::state::ui::UiState::close_modal);

    view! {
        <div class="dialog-backdrop" on:click=on_close>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Manage Surveyors"</h2>

                <h3 class="dialog__subtitle">"Assigned"</h3>
                <ul class="dialog__list">
                    {move || {
                        assigned
                            .get()
                            .into_iter()
                            .map(|s| {
                                let id = s.id;
                                view! {
                                    <li>
                                        {s.name}
                                        <button class="btn btn--danger" on:click=move |_| on_remove(id)>
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>

                <h3 class="dialog__subtitle">"Available"</h3>
                <ul class="dialog__list">
                    {move || {
                        available
                            .get()
                            .into_iter()
                            .map(|s| {
                                let id = s.id;
                                view! {
                                    <li>
                                        {s.name}
                                        <button class="btn btn--primary" on:click=move |_| on_add(id)>
                                            "Assign"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>

                <div class="dialog__actions">
                    <button class="btn" on:click=on_close>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
