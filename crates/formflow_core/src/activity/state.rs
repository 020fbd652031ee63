//! Explicit lifecycle state of one hosted activity.
//!
//! # Invariants
//! - `Uninitialized -> Received -> Validated`, never backwards.
//! - `Validated::values` only holds names present in `Validated::declared`.

use crate::error::{EngineError, EngineResult, ErrorCase};
use crate::model::field::{FieldMap, FieldValue, InputDeclarations};
use std::collections::BTreeMap;

/// Lifecycle stage tag, exposed for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Uninitialized,
    Received,
    Validated,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Received => "received",
            Self::Validated => "validated",
        }
    }
}

/// Result of the validation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Validation {
    /// Active validation list: field name to declared type string.
    pub(crate) declared: InputDeclarations,
    /// Parsed values of declared fields that were received and passed.
    pub(crate) values: BTreeMap<String, FieldValue>,
}

#[derive(Debug, Default)]
pub(crate) enum ActivityState {
    #[default]
    Uninitialized,
    Received(FieldMap),
    Validated {
        received: FieldMap,
        validation: Validation,
    },
}

impl ActivityState {
    pub(crate) fn stage(&self) -> Stage {
        match self {
            Self::Uninitialized => Stage::Uninitialized,
            Self::Received(_) => Stage::Received,
            Self::Validated { .. } => Stage::Validated,
        }
    }

    /// Raw fields; `NotInitialized` before `receive`.
    pub(crate) fn received(&self) -> EngineResult<&FieldMap> {
        match self {
            Self::Uninitialized => Err(EngineError::new(ErrorCase::NotInitialized)),
            Self::Received(received) => Ok(received),
            Self::Validated { received, .. } => Ok(received),
        }
    }

    /// Validation result; `NotInitialized` before `receive`, `NotValidatedYet`
    /// before `validate`.
    pub(crate) fn validation(&self) -> EngineResult<&Validation> {
        match self {
            Self::Uninitialized => Err(EngineError::new(ErrorCase::NotInitialized)),
            Self::Received(_) => Err(EngineError::new(ErrorCase::NotValidatedYet)),
            Self::Validated { validation, .. } => Ok(validation),
        }
    }

    /// Stores the raw fields; `AlreadyInitialized` if already stored.
    pub(crate) fn receive(&mut self, fields: FieldMap) -> EngineResult<()> {
        if !matches!(self, Self::Uninitialized) {
            return Err(EngineError::new(ErrorCase::AlreadyInitialized));
        }
        *self = Self::Received(fields);
        Ok(())
    }

    /// Attaches the validation result, keeping the received fields.
    pub(crate) fn complete_validation(&mut self, validation: Validation) -> EngineResult<()> {
        match std::mem::take(self) {
            Self::Received(received) => {
                *self = Self::Validated {
                    received,
                    validation,
                };
                Ok(())
            }
            other => {
                let case = match other {
                    Self::Uninitialized => ErrorCase::NotInitialized,
                    _ => ErrorCase::AlreadyValidated,
                };
                *self = other;
                Err(EngineError::new(case))
            }
        }
    }
}
