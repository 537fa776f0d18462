#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Sampling placement mode selected in the admin panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SamplingMode {
    #[default]
    Grid,
    Manual,
    /// Fixed-count placement. Not offered by the backend yet.
    Count,
}

/// Which modal dialog is open, if any. A single slot: dialogs never stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    None,
    /// Survey setup for a point; `edit` prefills the form from the point.
    SurveySetup { point_id: i64, edit: bool },
    /// Assignment management for a point.
    Assign { point_id: i64 },
    /// Tree measurement entry for a point.
    Measurement { point_id: i64 },
    /// Submitted trees for a point, read-only.
    Trees { point_id: i64 },
}

/// Page-level UI state: the status line, sampling controls, and the modal
/// slot. Section visibility is derived from session state, not stored here.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: String,
    pub sampling_mode: SamplingMode,
    pub preview_text: String,
    /// Sentinel section revealed after the AOI is confirmed.
    pub sentinel_visible: bool,
    pub modal: Modal,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: "Search for a location to begin.".to_owned(),
            sampling_mode: SamplingMode::Grid,
            preview_text: "Not calculated yet".to_owned(),
            sentinel_visible: false,
            modal: Modal::None,
        }
    }
}

impl UiState {
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::None;
    }
}
