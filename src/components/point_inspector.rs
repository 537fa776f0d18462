//! Detail panel for the selected sampling point.

use leptos::prelude::*;

use crate::commands::{assign, sampling};
use crate::state::AppCtx;
use crate::state::actions::{self, PointAction};
use crate::state::ui::Modal;
use crate::net::types::{PointProperties, SurveyStatus};

/// Point detail panel.
///
/// Reads the selection from `PointsState` and offers exactly the actions
/// `available_actions` grants the signed-in user. Clicking a marker selects;
/// every mutation resyncs the collection, which re-renders this panel.
#[component]
pub fn PointInspector() -> impl IntoView {
    let ctx = expect_context::<AppCtx>();

    let selected = move || ctx.points.get().selected_point().cloned();

    view! {
        <section class="panel point-inspector">
            <h2 class="panel__title">"Sampling Point"</h2>
            {move || {
                if let Some(point) = selected() {
                    render_point(ctx, point).into_any()
                } else {
                    view! { <p class="point-inspector__empty">"No point selected"</p> }.into_any()
                }
            }}
        </section>
    }
}

fn status_text(status: SurveyStatus) -> &'static str {
    match status {
        SurveyStatus::Draft => "Draft",
        SurveyStatus::Ready => "Ready",
        SurveyStatus::Submitted => "Submitted",
        SurveyStatus::Approved => "Approved",
        SurveyStatus::Rejected => "Rejected",
        SurveyStatus::Expired => "Expired",
        SurveyStatus::Unknown => "Unknown",
    }
}

fn render_point(ctx: AppCtx, point: PointProperties) -> impl IntoView {
    let actions = ctx
        .auth
        .with_untracked(|a| a.user.clone())
        .map(|user| actions::available_actions(&user, &point))
        .unwrap_or_default();
    let locked = point.is_locked();
    let point_id = point.id;

    let assigned = if point.assigned_names.is_empty() {
        "\u{2014}".to_owned()
    } else {
        point.assigned_names.join(", ")
    };
    let window = match (&point.start_date, &point.end_date) {
        (Some(start), Some(end)) => format!("{start} \u{2192} {end}"),
        _ => "\u{2014}".to_owned(),
    };

    let buttons = actions
        .into_iter()
        .map(|action| {
            let on_click = move |_| run_action(ctx, point_id, action);
            let class = match action {
                PointAction::Approve => "btn btn--primary",
                PointAction::DeletePoint | PointAction::Reject => "btn btn--danger",
                _ => "btn",
            };
            view! {
                <button class=class on:click=on_click>
                    {action.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="point-inspector__card">
            <dl class="point-inspector__fields">
                <dt>"ID"</dt>
                <dd>{point.id}</dd>
                <dt>"Status"</dt>
                <dd>{status_text(point.survey_status)}</dd>
                <dt>"Surveyors"</dt>
                <dd>{format!("{}/{} ({assigned})", point.assigned_count, point.max_surveyors)}</dd>
                <dt>"Survey window"</dt>
                <dd>{window}</dd>
                <dt>"Plot radius"</dt>
                <dd>
                    {point
                        .plot_radius_m
                        .map_or("\u{2014}".to_owned(), |r| format!("{r:.0} m"))}
                </dd>
                <dt>"Total biomass"</dt>
                <dd>{format!("{:.1} kg", point.total_biomass)}</dd>
            </dl>

            <Show when=move || locked>
                <p class="point-inspector__locked">"This survey is locked."</p>
            </Show>

            <div class="point-inspector__actions">{buttons}</div>
        </div>
    }
}

fn run_action(ctx: AppCtx, point_id: i64, action: PointAction) {
    use leptos::task::spawn_local;

    match action {
        PointAction::ViewTrees => {
            ctx.ui.update(|ui| ui.modal = Modal::Trees { point_id });
        }
        PointAction::Approve => spawn_local(sampling::review_point(ctx, point_id, true)),
        PointAction::Reject => spawn_local(sampling::review_point(ctx, point_id, false)),
        PointAction::SetupSurvey => {
            ctx.ui.update(|ui| ui.modal = Modal::SurveySetup { point_id, edit: false });
        }
        PointAction::EditSurvey => {
            ctx.ui.update(|ui| ui.modal = Modal::SurveySetup { point_id, edit: true });
        }
        PointAction::DeletePoint => spawn_local(sampling::delete_point(ctx, point_id)),
        PointAction::ManageSurveyors => {
            ctx.ui.update(|ui| ui.modal = Modal::Assign { point_id });
        }
        PointAction::Lock => spawn_local(sampling::set_point_lock(ctx, point_id, true)),
        PointAction::Unlock => spawn_local(sampling::set_point_lock(ctx, point_id, false)),
        PointAction::Join => spawn_local(assign::join(ctx, point_id)),
        PointAction::Leave => spawn_local(assign::leave(ctx, point_id)),
        PointAction::InputMeasurement => {
            ctx.ui.update(|ui| ui.modal = Modal::Measurement { point_id });
        }
    }
}
