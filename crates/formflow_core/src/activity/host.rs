//! Lifecycle host wrapping one concrete activity.
//!
//! # Responsibility
//! - Own the activity together with its explicit lifecycle state.
//! - Answer trigger questions (`would_process`, `is_first_render`) for the view.
//! - Drive `render` and `process` with a `Fields` snapshot.
//!
//! # Invariants
//! - `receive` succeeds at most once.
//! - Every received accessor fails with `NotInitialized` before `receive`.

use crate::activity::contract::Activity;
use crate::activity::fields::Fields;
use crate::activity::state::{ActivityState, Stage};
use crate::activity::trigger;
use crate::error::{EngineError, EngineResult};
use crate::model::field::{FieldMap, FieldValue};
use log::debug;

/// One activity plus its request-scoped state.
pub struct ActivityHost {
    pub(crate) activity: Box<dyn Activity>,
    pub(crate) state: ActivityState,
}

impl ActivityHost {
    pub fn new(activity: impl Activity + 'static) -> Self {
        Self::from_boxed(Box::new(activity))
    }

    pub fn from_boxed(activity: Box<dyn Activity>) -> Self {
        Self {
            activity,
            state: ActivityState::default(),
        }
    }

    pub fn name(&self) -> &str {
        self.activity.name()
    }

    pub fn stage(&self) -> Stage {
        self.state.stage()
    }

    /// Stores the raw request fields.
    ///
    /// # Errors
    /// - `AlreadyInitialized` on the second call.
    pub fn receive(&mut self, fields: FieldMap) -> EngineResult<&mut Self> {
        let field_count = fields.len();
        self.state
            .receive(fields)
            .map_err(|err| err.or_context(self.activity.name()))?;
        debug!(
            "event=activity_receive module=activity status=ok activity={} field_count={}",
            self.activity.name(),
            field_count
        );
        Ok(self)
    }

    /// True iff the activity declares no trigger button.
    pub fn is_default(&self) -> bool {
        self.activity.trigger_button().is_none()
    }

    /// Whether this activity claims the current request.
    pub fn would_process(&self) -> EngineResult<bool> {
        Ok(trigger::would_process(
            self.activity.as_ref(),
            self.received_map()?,
        ))
    }

    /// Whether the initial inputs apply to the current request.
    pub fn is_first_render(&self) -> EngineResult<bool> {
        Ok(trigger::is_first_render(
            self.activity.as_ref(),
            self.received_map()?,
        ))
    }

    pub fn pressed_inner_button(&self) -> EngineResult<Option<&str>> {
        Ok(trigger::pressed_inner_button(
            self.activity.as_ref(),
            self.received_map()?,
        ))
    }

    pub fn get_received(&self, name: &str) -> EngineResult<Option<&str>> {
        Ok(self.fields()?.get_received(name))
    }

    pub fn get_received_or<'d>(&'d self, name: &str, default: &'d str) -> EngineResult<&'d str> {
        Ok(self.fields()?.get_received_or(name, default))
    }

    pub fn is_received(&self, name: &str) -> EngineResult<bool> {
        Ok(self.fields()?.is_received(name))
    }

    pub fn get_validated(&self, name: &str) -> EngineResult<&FieldValue> {
        self.fields()?.get_validated(name)
    }

    pub fn is_validated(&self, name: &str) -> EngineResult<bool> {
        self.fields()?.is_validated(name)
    }

    pub fn is_not_validated(&self, name: &str, strict_on_received: bool) -> EngineResult<bool> {
        self.fields()?.is_not_validated(name, strict_on_received)
    }

    pub fn exists_on_validation_list(&self, name: &str) -> EngineResult<bool> {
        self.fields()?.exists_on_validation_list(name)
    }

    /// Accessor snapshot; `NotInitialized` before `receive`.
    pub fn fields(&self) -> EngineResult<Fields<'_>> {
        Fields::new(self.activity.as_ref(), &self.state)
    }

    /// Runs the activity effect and returns the host for chaining.
    pub fn process(&mut self) -> EngineResult<&mut Self> {
        let fields = Fields::new(self.activity.as_ref(), &self.state)?;
        self.activity.process(&fields)?;
        debug!(
            "event=activity_process module=activity status=ok activity={} stage={}",
            self.activity.name(),
            self.state.stage().as_str()
        );
        Ok(self)
    }

    /// Renders the activity output.
    pub fn render(&self) -> EngineResult<String> {
        let fields = self.fields()?;
        let output = self.activity.render(&fields)?;
        debug!(
            "event=activity_render module=activity status=ok activity={} bytes={}",
            self.activity.name(),
            output.len()
        );
        Ok(output)
    }

    fn received_map(&self) -> EngineResult<&FieldMap> {
        self.state
            .received()
            .map_err(|err: EngineError| err.or_context(self.activity.name()))
    }
}

impl std::fmt::Debug for ActivityHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityHost")
            .field("activity", &self.activity.name())
            .field("stage", &self.state.stage())
            .finish()
    }
}
