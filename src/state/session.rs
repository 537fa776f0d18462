#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;

use uuid::Uuid;

use crate::net::types::Project;
use crate::util::geo::{DEFAULT_AOI_HALF_DEG, Geometry, LatLng, square_around};

/// AOI authoring state.
///
/// Modeled as a tagged state machine (`NoAoi → Editing ⇄ Confirmed`) so that
/// saving mid-edit is not a reachable code path rather than a checked flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AoiState {
    #[default]
    NoAoi,
    /// The polygon is under the map editor. `original` is the last-confirmed
    /// shape, restored by reset.
    Editing { original: Geometry },
    Confirmed { geometry: Geometry },
}

impl AoiState {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        match self {
            Self::NoAoi => None,
            Self::Editing { original } => Some(original),
            Self::Confirmed { geometry } => Some(geometry),
        }
    }
}

/// Why a project save was rejected locally, before any request is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveBlock {
    NoAoi,
    EditingActive,
    EmptyName,
}

impl SaveBlock {
    pub fn user_message(self) -> &'static str {
        match self {
            Self::NoAoi => "Draw a project area first",
            Self::EditingActive => "Finish editing the area first",
            Self::EmptyName => "Project name is required",
        }
    }
}

/// Project-scoped session state: the current project pointer, the cached
/// project list, AOI authoring state, and the admin's map interaction modes.
///
/// Owned by a single `RwSignal` provided via context; command handlers read
/// and write it instead of ambient globals.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub current_project_id: Option<Uuid>,
    pub projects: HashMap<Uuid, Project>,
    pub aoi: AoiState,
    /// Result of the last location search; required before a new project.
    pub search_marker: Option<LatLng>,
    /// Manual point placement armed (map clicks create draft points).
    pub manual_mode: bool,
}

impl SessionState {
    pub fn current_project(&self) -> Option<&Project> {
        self.projects.get(&self.current_project_id?)
    }

    /// Whether a save would update an existing project rather than create.
    pub fn is_update(&self) -> bool {
        self.current_project_id.is_some()
    }

    /// Select an already-loaded project: point the session at it and adopt
    /// its stored AOI as the confirmed geometry.
    pub fn select(&mut self, id: Uuid) -> Option<&Project> {
        let project = self.projects.get(&id)?;
        self.current_project_id = Some(id);
        self.aoi = AoiState::Confirmed { geometry: project.aoi.clone() };
        self.manual_mode = false;
        Some(project)
    }

    /// Begin a new project around the searched location. Returns the default
    /// square AOI, already in edit mode, or `None` without a prior search.
    pub fn start_new(&mut self) -> Option<Geometry> {
        let center = self.search_marker?;
        let square = square_around(center, DEFAULT_AOI_HALF_DEG);
        self.current_project_id = None;
        self.manual_mode = false;
        self.aoi = AoiState::Editing { original: square.clone() };
        Some(square)
    }

    /// Enter edit mode on the confirmed AOI. No-op unless confirmed.
    pub fn begin_edit(&mut self) -> bool {
        if let AoiState::Confirmed { geometry } = &self.aoi {
            self.aoi = AoiState::Editing { original: geometry.clone() };
            true
        } else {
            false
        }
    }

    /// Leave edit mode, adopting the edited polygon as confirmed.
    pub fn end_edit(&mut self, edited: Geometry) {
        if self.aoi.is_editing() {
            self.aoi = AoiState::Confirmed { geometry: edited };
        }
    }

    /// Discard in-progress edits and restore the last-confirmed polygon.
    /// Returns the restored geometry when an edit was actually active.
    pub fn reset_edit(&mut self) -> Option<Geometry> {
        if let AoiState::Editing { original } = &self.aoi {
            let restored = original.clone();
            self.aoi = AoiState::Confirmed { geometry: restored.clone() };
            Some(restored)
        } else {
            None
        }
    }

    /// Local save preconditions, checked before any request is issued.
    pub fn save_block(&self, name: &str) -> Option<SaveBlock> {
        match &self.aoi {
            AoiState::NoAoi => Some(SaveBlock::NoAoi),
            AoiState::Editing { .. } => Some(SaveBlock::EditingActive),
            AoiState::Confirmed { .. } if name.trim().is_empty() => Some(SaveBlock::EmptyName),
            AoiState::Confirmed { .. } => None,
        }
    }

    /// Drop every piece of project-scoped state (project deleted or session
    /// reset). The cached project list survives a plain deselect but not this.
    pub fn clear(&mut self) {
        self.current_project_id = None;
        self.projects.clear();
        self.aoi = AoiState::NoAoi;
        self.search_marker = None;
        self.manual_mode = false;
    }
}
