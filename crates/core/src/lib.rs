//! Build trigger domain logic.
//!
//! Holds the transient [`trigger::BuildTrigger`] entity, the acknowledgement
//! text returned to callers, and everything needed to start the external
//! build runner as a detached process. Nothing here knows about HTTP.

pub mod error;
pub mod runner;
pub mod trigger;
