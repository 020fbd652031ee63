//! Capability contracts implemented by concrete activities.

use crate::activity::fields::Fields;
use crate::error::EngineResult;
use crate::model::field::InputDeclarations;

/// One unit of request handling.
///
/// Implementors declare how they are triggered and which inputs they expect;
/// lifecycle state (received and validated fields) lives in the
/// `ActivityHost` that wraps them.
pub trait Activity {
    /// Diagnostic name used in log events and error context.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Button that activates this activity when it is not the default.
    ///
    /// `None` marks the activity as the view's default.
    fn trigger_button(&self) -> Option<&str>;

    /// Buttons this activity recognizes while it is already running.
    fn inner_buttons(&self) -> &[&str];

    /// Inputs expected on the first render (trigger button pressed or default).
    fn initial_inputs(&self) -> InputDeclarations;

    /// Inputs expected once an inner button fired.
    fn inner_inputs(&self) -> InputDeclarations;

    /// Produces the activity output. Must not change activity state.
    fn render(&self, fields: &Fields<'_>) -> EngineResult<String>;

    /// Performs the activity effect for the current request.
    fn process(&mut self, fields: &Fields<'_>) -> EngineResult<()>;
}

/// Activity that is always the view default.
///
/// Landing activities have no trigger button and no first-render inputs;
/// the blanket `Activity` impl fixes both.
pub trait LandingActivity {
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn inner_buttons(&self) -> &[&str];

    fn inner_inputs(&self) -> InputDeclarations;

    fn render(&self, fields: &Fields<'_>) -> EngineResult<String>;

    fn process(&mut self, fields: &Fields<'_>) -> EngineResult<()>;
}

impl<T: LandingActivity> Activity for T {
    fn name(&self) -> &str {
        LandingActivity::name(self)
    }

    fn trigger_button(&self) -> Option<&str> {
        None
    }

    fn inner_buttons(&self) -> &[&str] {
        LandingActivity::inner_buttons(self)
    }

    fn initial_inputs(&self) -> InputDeclarations {
        InputDeclarations::new()
    }

    fn inner_inputs(&self) -> InputDeclarations {
        LandingActivity::inner_inputs(self)
    }

    fn render(&self, fields: &Fields<'_>) -> EngineResult<String> {
        LandingActivity::render(self, fields)
    }

    fn process(&mut self, fields: &Fields<'_>) -> EngineResult<()> {
        LandingActivity::process(self, fields)
    }
}
