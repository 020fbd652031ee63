//! Button-driven trigger rules.
//!
//! Pure functions of an activity's declared buttons and the received fields.
//! The view uses `would_process`; the validation pass uses `is_first_render`.

use crate::activity::contract::Activity;
use crate::model::field::FieldMap;

/// First declared inner button present in `received`, in declaration order.
pub(crate) fn pressed_inner_button<'a>(
    activity: &dyn Activity,
    received: &'a FieldMap,
) -> Option<&'a str> {
    activity
        .inner_buttons()
        .iter()
        .find_map(|button| received.get_key_value(*button))
        .map(|(name, _)| name.as_str())
}

fn trigger_received(activity: &dyn Activity, received: &FieldMap) -> bool {
    activity
        .trigger_button()
        .is_some_and(|button| received.contains_key(button))
}

/// Whether this activity claims the current request.
///
/// | inner button | trigger button declared | trigger received | result |
/// |--------------|-------------------------|------------------|--------|
/// | yes          | any                     | any              | true   |
/// | no           | no (default)            | -                | false  |
/// | no           | yes                     | yes              | true   |
/// | no           | yes                     | no               | false  |
pub(crate) fn would_process(activity: &dyn Activity, received: &FieldMap) -> bool {
    if pressed_inner_button(activity, received).is_some() {
        return true;
    }
    trigger_received(activity, received)
}

/// Whether the initial inputs apply to this request.
///
/// True iff no inner button fired and the activity is either the default or
/// its trigger button was received.
pub(crate) fn is_first_render(activity: &dyn Activity, received: &FieldMap) -> bool {
    if pressed_inner_button(activity, received).is_some() {
        return false;
    }
    activity.trigger_button().is_none() || trigger_received(activity, received)
}

#[cfg(test)]
mod tests {
    use super::{is_first_render, pressed_inner_button, would_process};
    use crate::activity::contract::Activity;
    use crate::activity::fields::Fields;
    use crate::error::EngineResult;
    use crate::model::field::{fields, InputDeclarations};

    struct Probe {
        trigger: Option<&'static str>,
        inner: &'static [&'static str],
    }

    impl Activity for Probe {
        fn trigger_button(&self) -> Option<&str> {
            self.trigger
        }

        fn inner_buttons(&self) -> &[&str] {
            self.inner
        }

        fn initial_inputs(&self) -> InputDeclarations {
            InputDeclarations::new()
        }

        fn inner_inputs(&self) -> InputDeclarations {
            InputDeclarations::new()
        }

        fn render(&self, _fields: &Fields<'_>) -> EngineResult<String> {
            Ok(String::new())
        }

        fn process(&mut self, _fields: &Fields<'_>) -> EngineResult<()> {
            Ok(())
        }
    }

    const TRIGGERED: Probe = Probe {
        trigger: Some("age"),
        inner: &["calc_age", "reset"],
    };
    const DEFAULT: Probe = Probe {
        trigger: None,
        inner: &["welcome"],
    };

    #[test]
    fn inner_button_wins_in_declaration_order() {
        let received = fields([("reset", "1"), ("calc_age", "1")]);
        assert_eq!(pressed_inner_button(&TRIGGERED, &received), Some("calc_age"));
        assert!(would_process(&TRIGGERED, &received));
        assert!(!is_first_render(&TRIGGERED, &received));
    }

    #[test]
    fn trigger_button_starts_first_render() {
        let received = fields([("age", "x")]);
        assert!(would_process(&TRIGGERED, &received));
        assert!(is_first_render(&TRIGGERED, &received));
    }

    #[test]
    fn untouched_triggered_activity_stays_idle() {
        let received = fields([("other", "1")]);
        assert!(!would_process(&TRIGGERED, &received));
        assert!(!is_first_render(&TRIGGERED, &received));
    }

    #[test]
    fn default_only_processes_on_inner_button() {
        let empty = fields([]);
        assert!(!would_process(&DEFAULT, &empty));
        assert!(is_first_render(&DEFAULT, &empty));

        let welcomed = fields([("welcome", "1")]);
        assert!(would_process(&DEFAULT, &welcomed));
        assert!(!is_first_render(&DEFAULT, &welcomed));
    }
}
