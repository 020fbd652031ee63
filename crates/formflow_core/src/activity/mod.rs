//! Activities: units of request handling.
//!
//! # Responsibility
//! - Define the capability contract concrete activities implement
//!   (`Activity`, `LandingActivity`).
//! - Host each activity with an explicit lifecycle state machine
//!   (`Uninitialized -> Received -> Validated`).
//! - Run the validation pass over the declared inputs.
//!
//! # Invariants
//! - Received fields are stored exactly once.
//! - Validation runs at most once and only after `receive`.
//! - Input validation failures are data (missing validated entries), never
//!   errors.

pub mod contract;
pub mod fields;
pub mod host;
pub mod state;
mod trigger;
mod validating;

pub use contract::{Activity, LandingActivity};
pub use fields::Fields;
pub use host::ActivityHost;
pub use state::Stage;
