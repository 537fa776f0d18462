//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `session`, `points`, `ui`) so individual
//! components can depend on small focused models. Each model lives in one
//! `RwSignal` provided via context from the app root; command handlers
//! receive them through [`AppCtx`] instead of reaching for globals.

pub mod actions;
pub mod auth;
pub mod points;
pub mod session;
pub mod ui;

use leptos::prelude::*;

use auth::AuthState;
use points::PointsState;
use session::SessionState;
use ui::UiState;

/// The full set of shared signals, provided once at the app root.
///
/// `Copy` so command handlers and event closures can capture it freely.
#[derive(Clone, Copy)]
pub struct AppCtx {
    pub auth: RwSignal<AuthState>,
    pub session: RwSignal<SessionState>,
    pub points: RwSignal<PointsState>,
    pub ui: RwSignal<UiState>,
}

impl AppCtx {
    pub fn new() -> Self {
        Self {
            auth: RwSignal::new(AuthState::default()),
            session: RwSignal::new(SessionState::default()),
            points: RwSignal::new(PointsState::default()),
            ui: RwSignal::new(UiState::default()),
        }
    }

    pub fn set_status(&self, text: impl Into<String>) {
        let text = text.into();
        self.ui.update(|ui| ui.set_status(text));
    }
}

impl Default for AppCtx {
    fn default() -> Self {
        Self::new()
    }
}
