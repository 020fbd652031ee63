//! View: per-request activity container and selection.
//!
//! # Responsibility
//! - Hold one default activity and an ordered list of triggered activities.
//! - Hand the request fields to every activity (`prepare`).
//! - Pick the single activity that handles this request (`choose`).
//!
//! # Invariants
//! - At most one default activity; `prepare`/`choose` require one.
//! - Non-default activities keep registration order, which is the tie-break:
//!   `choose` is a first-match scan, not a priority system.

use crate::activity::{Activity, ActivityHost};
use crate::error::{EngineError, EngineResult, ErrorCase};
use crate::model::field::FieldMap;
use log::{debug, info};
use uuid::Uuid;

/// Request-scoped activity container.
#[derive(Debug)]
pub struct View {
    request_id: Uuid,
    received: FieldMap,
    default: Option<ActivityHost>,
    activities: Vec<ActivityHost>,
}

impl View {
    /// Creates a view for one request's submitted fields.
    pub fn new(received: FieldMap) -> Self {
        Self::with_request_id(Uuid::new_v4(), received)
    }

    /// Creates a view with a caller-provided correlation id.
    pub fn with_request_id(request_id: Uuid, received: FieldMap) -> Self {
        Self {
            request_id,
            received,
            default: None,
            activities: Vec::new(),
        }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn received(&self) -> &FieldMap {
        &self.received
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Number of registered activities, default included.
    pub fn len(&self) -> usize {
        self.activities.len() + usize::from(self.default.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registers an activity.
    ///
    /// Activities without a trigger button become the default; the rest are
    /// appended in registration order.
    ///
    /// # Errors
    /// - `DefaultAlreadySet` when a second default is registered.
    pub fn add_activity(&mut self, activity: impl Activity + 'static) -> EngineResult<&mut Self> {
        self.add_host(ActivityHost::new(activity))
    }

    pub fn add_boxed(&mut self, activity: Box<dyn Activity>) -> EngineResult<&mut Self> {
        self.add_host(ActivityHost::from_boxed(activity))
    }

    fn add_host(&mut self, host: ActivityHost) -> EngineResult<&mut Self> {
        if host.is_default() {
            if let Some(existing) = &self.default {
                return Err(EngineError::with_context(
                    ErrorCase::DefaultAlreadySet,
                    format!("{} (registered: {})", host.name(), existing.name()),
                ));
            }
            debug!(
                "event=view_register module=view status=ok request_id={} activity={} role=default",
                self.request_id,
                host.name()
            );
            self.default = Some(host);
        } else {
            debug!(
                "event=view_register module=view status=ok request_id={} activity={} role=triggered position={}",
                self.request_id,
                host.name(),
                self.activities.len()
            );
            self.activities.push(host);
        }
        Ok(self)
    }

    /// Hands the request fields to the default, then to every other activity
    /// in registration order.
    ///
    /// # Errors
    /// - `DefaultNotSet` when no default is registered.
    /// - `AlreadyInitialized` when called twice.
    pub fn prepare(&mut self) -> EngineResult<&mut Self> {
        let default = self
            .default
            .as_mut()
            .ok_or_else(|| EngineError::new(ErrorCase::DefaultNotSet))?;
        default.receive(self.received.clone())?;
        for host in &mut self.activities {
            host.receive(self.received.clone())?;
        }
        Ok(self)
    }

    /// Selects the activity that handles this request.
    ///
    /// Returns the first non-default activity whose `would_process()` holds,
    /// or the default when none does.
    ///
    /// # Errors
    /// - `DefaultNotSet` when no default is registered.
    /// - `NotInitialized` when `prepare` has not run.
    pub fn choose(&mut self) -> EngineResult<&mut ActivityHost> {
        if self.default.is_none() {
            return Err(EngineError::new(ErrorCase::DefaultNotSet));
        }

        let mut chosen = None;
        for (position, host) in self.activities.iter().enumerate() {
            if host.would_process()? {
                chosen = Some(position);
                break;
            }
        }

        let host = match chosen {
            Some(position) => &mut self.activities[position],
            None => self
                .default
                .as_mut()
                .ok_or_else(|| EngineError::new(ErrorCase::DefaultNotSet))?,
        };
        info!(
            "event=view_choose module=view status=ok request_id={} activity={} fallback={}",
            self.request_id,
            host.name(),
            chosen.is_none()
        );
        Ok(host)
    }
}

#[cfg(test)]
mod tests {
    use super::View;
    use crate::activity::{Fields, LandingActivity};
    use crate::error::{EngineResult, ErrorCase};
    use crate::model::field::{fields, InputDeclarations};
    use uuid::Uuid;

    struct Landing;

    impl LandingActivity for Landing {
        fn inner_buttons(&self) -> &[&str] {
            &[]
        }

        fn inner_inputs(&self) -> InputDeclarations {
            InputDeclarations::new()
        }

        fn render(&self, _fields: &Fields<'_>) -> EngineResult<String> {
            Ok("landing".to_string())
        }

        fn process(&mut self, _fields: &Fields<'_>) -> EngineResult<()> {
            Ok(())
        }
    }

    #[test]
    fn keeps_caller_request_id_and_fields() {
        let request_id = Uuid::new_v4();
        let view = View::with_request_id(request_id, fields([("welcome", "1")]));
        assert_eq!(view.request_id(), request_id);
        assert_eq!(view.received().len(), 1);
        assert!(view.is_empty());
        assert!(!view.has_default());
    }

    #[test]
    fn counts_default_in_len() {
        let mut view = View::new(fields([]));
        view.add_activity(Landing).expect("default registration");
        assert!(view.has_default());
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn prepare_twice_reports_already_initialized() {
        let mut view = View::new(fields([]));
        view.add_activity(Landing).expect("default registration");
        view.prepare().expect("first prepare");
        let err = view.prepare().expect_err("second prepare must fail");
        assert_eq!(err.case(), ErrorCase::AlreadyInitialized);
    }

    #[test]
    fn choose_without_other_activities_returns_default() {
        let mut view = View::new(fields([]));
        view.add_activity(Landing).expect("default registration");
        view.prepare().expect("prepare");
        let chosen = view.choose().expect("choose");
        assert!(chosen.is_default());
        assert_eq!(chosen.render().expect("render"), "landing");
    }
}
