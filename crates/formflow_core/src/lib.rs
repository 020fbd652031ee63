//! Core request handling for form-driven pages.
//! Owns activity lifecycle, view selection and field validation rules.

pub mod activity;
pub mod error;
pub mod logging;
pub mod model;
pub mod render;
pub mod validator;
pub mod view;

pub use activity::{Activity, ActivityHost, Fields, LandingActivity, Stage};
pub use error::{EngineError, EngineResult, ErrorCase};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::field::{fields, inputs, FieldMap, FieldValue, InputDeclarations};
pub use render::{RenderError, RenderParam, RenderParams, Renderer};
pub use validator::{FieldKind, Validator};
pub use view::View;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
