//! Validation pass over declared inputs.
//!
//! # Responsibility
//! - Pick the active declaration (initial vs inner inputs) for this request.
//! - Run each declared field through its `Validator` and keep parsed values.
//!
//! # Invariants
//! - The pass runs at most once per host.
//! - A name is stored iff it is declared, received and valid. Failed or absent
//!   fields are omitted, never zero-filled.

use crate::activity::host::ActivityHost;
use crate::activity::state::{Stage, Validation};
use crate::activity::trigger;
use crate::error::{EngineError, EngineResult, ErrorCase};
use crate::validator::Validator;
use log::debug;
use std::collections::BTreeMap;

impl ActivityHost {
    /// Validates the active declaration and returns the host for chaining.
    ///
    /// # Errors
    /// - `NotInitialized` before `receive`.
    /// - `AlreadyValidated` on the second call.
    /// - `UnknownType` when a declaration names an unknown validator type,
    ///   with `<field>: <type>` as context; the host stays unvalidated.
    pub fn validate(&mut self) -> EngineResult<&mut Self> {
        let activity = self.activity.as_ref();
        if self.state.stage() == Stage::Validated {
            return Err(EngineError::with_context(
                ErrorCase::AlreadyValidated,
                activity.name(),
            ));
        }
        let received = self
            .state
            .received()
            .map_err(|err| err.or_context(activity.name()))?;

        let first_render = trigger::is_first_render(activity, received);
        let declared = if first_render {
            activity.initial_inputs()
        } else {
            activity.inner_inputs()
        };

        let mut values = BTreeMap::new();
        for (name, declared_type) in &declared {
            let validator = Validator::new(declared_type).map_err(|err| {
                EngineError::with_context(err.case(), format!("{name}: {}", declared_type.trim()))
            })?;
            let raw = received.get(name).map(String::as_str);
            if !validator.validate(raw) {
                continue;
            }
            if let Some(value) = validator.parse(raw) {
                values.insert(name.clone(), value);
            }
        }

        debug!(
            "event=activity_validate module=activity status=ok activity={} first_render={} declared={} validated={}",
            activity.name(),
            first_render,
            declared.len(),
            values.len()
        );
        self.state
            .complete_validation(Validation { declared, values })?;
        Ok(self)
    }
}
