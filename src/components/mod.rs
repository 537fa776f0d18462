//! Reusable view components shared by the admin and surveyor pages.

use leptos::prelude::*;

use crate::state::AppCtx;
use crate::state::ui::Modal;

pub mod assign_panel;
pub mod header;
pub mod map_host;
pub mod measurement_form;
pub mod point_inspector;
pub mod project_panel;
pub mod sampling_panel;
pub mod sentinel_panel;
pub mod status_bar;
pub mod survey_setup;
pub mod trees_panel;

/// Renders whichever modal the UI state holds. The slot holds at most one
/// dialog, so this is a plain match.
#[component]
pub fn ModalHost() -> impl IntoView {
    let ctx = expect_context::<AppCtx>();

    move || match ctx.ui.get().modal {
        Modal::None => ().into_any(),
        Modal::SurveySetup { point_id, edit } => {
            view! { <survey_setup::SurveySetupDialog point_id=point_id edit=edit/> }.into_any()
        }
        Modal::Assign { point_id } => {
            view! { <assign_panel::AssignPanel point_id=point_id/> }.into_any()
        }
        Modal::Measurement { point_id } => {
            view! { <measurement_form::MeasurementDialog point_id=point_id/> }.into_any()
        }
        Modal::Trees { point_id } => {
            view! { <trees_panel::TreesDialog point_id=point_id/> }.into_any()
        }
    }
}
