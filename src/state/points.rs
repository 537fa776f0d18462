#[cfg(test)]
#[path = "points_test.rs"]
mod points_test;

use crate::net::types::{PointFeature, PointProperties};

/// Sampling point layer state for the active project.
///
/// Replaced wholesale by every sync; nothing here is mutated locally except
/// the selection pointer.
#[derive(Clone, Debug, Default)]
pub struct PointsState {
    pub features: Vec<PointFeature>,
    pub selected: Option<i64>,
    pub loading: bool,
}

impl PointsState {
    /// Replace the collection from a fresh fetch. Selection is kept when the
    /// point still exists so an open detail panel re-renders with current
    /// fields, and dropped when it does not.
    pub fn replace(&mut self, features: Vec<PointFeature>) {
        self.features = features;
        self.loading = false;
        if let Some(id) = self.selected {
            if self.get(id).is_none() {
                self.selected = None;
            }
        }
    }

    pub fn get(&self, id: i64) -> Option<&PointProperties> {
        self.features.iter().map(|f| &f.properties).find(|p| p.id == id)
    }

    pub fn selected_point(&self) -> Option<&PointProperties> {
        self.get(self.selected?)
    }

    pub fn clear(&mut self) {
        self.features.clear();
        self.selected = None;
        self.loading = false;
    }
}
