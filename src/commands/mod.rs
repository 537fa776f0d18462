//! Command handlers.
//!
//! Every user-visible operation lives here as an async function taking the
//! shared [`AppCtx`](crate::state::AppCtx). Handlers follow one shape:
//! check local preconditions, confirm destructive steps, issue the request,
//! then resync authoritative state. Components only wire events to these.

pub mod assign;
pub mod forms;
pub mod project;
pub mod sampling;
pub mod sentinel;
pub mod survey;
