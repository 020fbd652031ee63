//! Structured error for request wiring failures.
//!
//! # Responsibility
//! - Carry one closed failure case plus optional processing context.
//! - Keep collaborator failures (render, process) attached as `source()`.
//!
//! # Invariants
//! - Every `EngineError` is a contract violation or collaborator failure.
//!   User input that fails validation never becomes an error.

use crate::render::RenderError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type EngineResult<T> = Result<T, EngineError>;

type BoxedSource = Box<dyn Error + Send + Sync + 'static>;

/// Closed set of failure reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCase {
    /// Received/validated accessor used before `receive`.
    NotInitialized,
    /// `receive` called twice on the same activity.
    AlreadyInitialized,
    /// Validated accessor used before `validate`.
    NotValidatedYet,
    /// `validate` called twice on the same activity.
    AlreadyValidated,
    /// Requested field is not on the active validation list.
    ParamNotExists,
    /// Requested field is declared but did not pass validation.
    ParamNotValidated,
    /// View has no default activity registered.
    DefaultNotSet,
    /// A second default activity was registered.
    DefaultAlreadySet,
    /// Validator type name is not recognized.
    UnknownType,
    /// Render collaborator failed.
    RenderFailed,
    /// Concrete activity effect failed.
    ProcessFailed,
}

impl ErrorCase {
    /// Stable human-readable message for the case.
    pub fn message(self) -> &'static str {
        match self {
            Self::NotInitialized => {
                "activity has not been initialized; call receive before reading fields"
            }
            Self::AlreadyInitialized => "activity has already been initialized",
            Self::NotValidatedYet => {
                "activity has not been validated; call validate before reading validated fields"
            }
            Self::AlreadyValidated => "activity has already been validated",
            Self::ParamNotExists => "param is not declared on the active validation list",
            Self::ParamNotValidated => "param did not pass validation",
            Self::DefaultNotSet => {
                "view has no default activity; register one without a trigger button"
            }
            Self::DefaultAlreadySet => "view default activity is already set",
            Self::UnknownType => "validator type is unknown",
            Self::RenderFailed => "render collaborator failed",
            Self::ProcessFailed => "activity process failed",
        }
    }
}

impl Display for ErrorCase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Error returned by every fallible engine operation.
#[derive(Debug)]
pub struct EngineError {
    case: ErrorCase,
    context: Option<String>,
    source: Option<BoxedSource>,
}

impl EngineError {
    pub fn new(case: ErrorCase) -> Self {
        Self {
            case,
            context: None,
            source: None,
        }
    }

    /// Creates an error carrying what was being processed (field, type, activity).
    pub fn with_context(case: ErrorCase, context: impl Into<String>) -> Self {
        Self {
            case,
            context: Some(context.into()),
            source: None,
        }
    }

    /// Wraps a failure raised by an activity's own effect.
    pub fn process_failed(
        activity: impl Into<String>,
        source: impl Into<BoxedSource>,
    ) -> Self {
        Self {
            case: ErrorCase::ProcessFailed,
            context: Some(activity.into()),
            source: Some(source.into()),
        }
    }

    /// Attaches context unless one is already present.
    pub fn or_context(mut self, context: impl Into<String>) -> Self {
        if self.context.is_none() {
            self.context = Some(context.into());
        }
        self
    }

    pub fn case(&self) -> ErrorCase {
        self.case
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.context {
            Some(context) => write!(f, "{} (while processing: {context})", self.case),
            None => write!(f, "{}", self.case),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn Error + 'static))
    }
}

impl From<ErrorCase> for EngineError {
    fn from(value: ErrorCase) -> Self {
        Self::new(value)
    }
}

impl From<RenderError> for EngineError {
    fn from(value: RenderError) -> Self {
        Self {
            case: ErrorCase::RenderFailed,
            context: Some(value.template_id().to_string()),
            source: Some(Box::new(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EngineError, ErrorCase};
    use crate::render::RenderError;
    use std::error::Error;

    #[test]
    fn display_appends_context_when_present() {
        let err = EngineError::with_context(ErrorCase::UnknownType, "?color");
        assert_eq!(
            err.to_string(),
            "validator type is unknown (while processing: ?color)"
        );
        assert_eq!(err.context(), Some("?color"));
    }

    #[test]
    fn display_without_context_is_case_message() {
        let err = EngineError::from(ErrorCase::DefaultNotSet);
        assert_eq!(err.to_string(), ErrorCase::DefaultNotSet.message());
        assert!(err.source().is_none());
    }

    #[test]
    fn render_error_converts_with_source() {
        let err = EngineError::from(RenderError::new("view_b", "template missing"));
        assert_eq!(err.case(), ErrorCase::RenderFailed);
        assert_eq!(err.context(), Some("view_b"));
        let source = err.source().expect("render error should be kept as source");
        assert!(source.to_string().contains("template missing"));
    }

    #[test]
    fn process_failed_keeps_boxed_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = EngineError::process_failed("signup", io);
        assert_eq!(err.case(), ErrorCase::ProcessFailed);
        assert!(err
            .source()
            .expect("process source")
            .to_string()
            .contains("disk full"));
    }
}
