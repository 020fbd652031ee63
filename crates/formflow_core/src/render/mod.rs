//! Render collaborator contract.
//!
//! # Responsibility
//! - Define the opaque `Renderer` service activities hand their output to.
//! - Define the nested parameter map and its dotted-path lookup rule.
//!
//! # Invariants
//! - An unresolved parameter path resolves to the empty string, never an error.
//! - Template syntax is owned by `Renderer` implementations, not by core.

pub mod params;

pub use params::{RenderParam, RenderParams};

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Template rendering service.
///
/// Concrete activities keep a shared handle to one implementation and call it
/// from `Activity::render`.
pub trait Renderer {
    fn render(&self, template_id: &str, params: &RenderParams) -> Result<String, RenderError>;
}

/// Failure reported by a `Renderer` implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    template_id: String,
    message: String,
}

impl RenderError {
    pub fn new(template_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            message: message.into(),
        }
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "failed to render template `{}`: {}",
            self.template_id, self.message
        )
    }
}

impl Error for RenderError {}
