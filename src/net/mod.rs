//! Network layer: wire types and REST helpers for the survey backend.

pub mod api;
pub mod types;
