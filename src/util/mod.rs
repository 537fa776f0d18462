//! Small browser-facing utilities.

pub mod dialog;
pub mod geo;
pub mod storage;
