//! Read-only accessor bundle handed to `Activity::render` and `process`.

use crate::activity::contract::Activity;
use crate::activity::state::ActivityState;
use crate::activity::trigger;
use crate::error::{EngineError, EngineResult, ErrorCase};
use crate::model::field::{FieldMap, FieldValue};

/// Snapshot of one initialized activity's received and validated fields.
///
/// Only exists once the activity has received its fields, so received
/// accessors cannot fail. Validated accessors fail with `NotValidatedYet`
/// until the validation pass ran.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    state: &'a ActivityState,
    received: &'a FieldMap,
    first_render: bool,
    inner_button: Option<&'a str>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(activity: &dyn Activity, state: &'a ActivityState) -> EngineResult<Self> {
        let received = state
            .received()
            .map_err(|err| err.or_context(activity.name()))?;
        Ok(Self {
            state,
            received,
            first_render: trigger::is_first_render(activity, received),
            inner_button: trigger::pressed_inner_button(activity, received),
        })
    }

    pub fn received(&self) -> &'a FieldMap {
        self.received
    }

    pub fn get_received(&self, name: &str) -> Option<&'a str> {
        self.received.get(name).map(String::as_str)
    }

    pub fn get_received_or<'d>(&self, name: &str, default: &'d str) -> &'d str
    where
        'a: 'd,
    {
        self.get_received(name).unwrap_or(default)
    }

    pub fn is_received(&self, name: &str) -> bool {
        self.received.contains_key(name)
    }

    /// True when the initial inputs are the active declaration for this request.
    pub fn is_first_render(&self) -> bool {
        self.first_render
    }

    /// First declared inner button present in this request.
    pub fn pressed_inner_button(&self) -> Option<&'a str> {
        self.inner_button
    }

    pub fn any_inner_button_pressed(&self) -> bool {
        self.inner_button.is_some()
    }

    /// Parsed value of a declared field that passed validation.
    ///
    /// # Errors
    /// - `NotValidatedYet` before the validation pass.
    /// - `ParamNotExists` when `name` is not on the active validation list.
    /// - `ParamNotValidated` when `name` is declared but failed or was absent.
    pub fn get_validated(&self, name: &str) -> EngineResult<&'a FieldValue> {
        let state: &'a ActivityState = self.state;
        let validation = state.validation().map_err(|err| err.or_context(name))?;
        if let Some(value) = validation.values.get(name) {
            return Ok(value);
        }

        let case = if validation.declared.contains_key(name) {
            ErrorCase::ParamNotValidated
        } else {
            ErrorCase::ParamNotExists
        };
        Err(EngineError::with_context(case, name))
    }

    pub fn is_validated(&self, name: &str) -> EngineResult<bool> {
        let validation = self.state.validation().map_err(|err| err.or_context(name))?;
        Ok(validation.values.contains_key(name))
    }

    /// Whether `name` should be reported as invalid input.
    ///
    /// With `strict_on_received == false`, a field that was not received counts
    /// as not validated. With `true`, only a received field that failed counts,
    /// so absent optional fields are acceptable.
    pub fn is_not_validated(&self, name: &str, strict_on_received: bool) -> EngineResult<bool> {
        if !self.is_received(name) {
            return Ok(!strict_on_received);
        }
        Ok(!self.is_validated(name)?)
    }

    pub fn exists_on_validation_list(&self, name: &str) -> EngineResult<bool> {
        let validation = self.state.validation().map_err(|err| err.or_context(name))?;
        Ok(validation.declared.contains_key(name))
    }
}
