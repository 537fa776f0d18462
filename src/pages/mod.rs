//! Page-level components, one per route.

pub mod admin;
pub mod login;
pub mod surveyor;
