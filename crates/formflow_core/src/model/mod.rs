//! Shared data shapes for request handling.
//!
//! # Responsibility
//! - Define the raw field map handed to views and activities.
//! - Define declared inputs and the typed values produced by validation.
//!
//! # See also
//! - `crate::validator` for the type rules behind declared inputs.

pub mod field;
