//! # canopy-client
//!
//! Leptos + WASM frontend for the Canopy biomass field-survey platform.
//! Admins author projects and their area of interest on a Leaflet map,
//! design the sampling plan, and review submitted surveys; surveyors join
//! points and submit tree measurements. All data lives behind the REST
//! backend; this crate is presentation and orchestration only.

pub mod app;
pub mod commands;
pub mod components;
pub mod map;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
