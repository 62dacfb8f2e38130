//! DOM-free state for interactive UI primitives.

/// Backing state for a switch that may or may not be controlled by its caller.
///
/// When the caller passes `checked`, that value is authoritative and the internal
/// flag is left alone. Otherwise the switch tracks its own flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwitchState {
    internal: bool,
}

impl SwitchState {
    /// Uncontrolled state seeded with `default_checked`.
    #[must_use]
    pub const fn new(default_checked: bool) -> Self {
        Self {
            internal: default_checked,
        }
    }

    /// Value to display.
    #[must_use]
    pub fn checked(self, controlled: Option<bool>) -> bool {
        controlled.unwrap_or(self.internal)
    }

    /// Flips the reported value once and hands the new value to `emit`.
    ///
    /// Disabled switches ignore the toggle and never call `emit`.
    pub fn toggle(
        &mut self,
        controlled: Option<bool>,
        disabled: bool,
        emit: impl FnOnce(bool),
    ) -> bool {
        let current = self.checked(controlled);
        if disabled {
            return current;
        }
        let next = !current;
        if controlled.is_none() {
            self.internal = next;
        }
        emit(next);
        next
    }
}

/// Percentage of `value` over `max`, clamped to `0..=100`.
#[must_use]
pub fn percent(value: f64, max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn uncontrolled_switch_flips_once_per_toggle() {
        let emitted = RefCell::new(Vec::new());
        let mut state = SwitchState::new(false);
        assert!(state.toggle(None, false, |value| emitted.borrow_mut().push(value)));
        assert!(state.checked(None));
        assert!(!state.toggle(None, false, |value| emitted.borrow_mut().push(value)));
        assert!(!state.checked(None));
        assert_eq!(*emitted.borrow(), vec![true, false]);
    }

    #[test]
    fn controlled_switch_reports_caller_value() {
        let mut emitted = None;
        let mut state = SwitchState::new(false);
        let next = state.toggle(Some(true), false, |value| emitted = Some(value));
        assert!(!next);
        assert_eq!(emitted, Some(false));
        // Caller has not applied the change yet, so it still reads as on.
        assert!(state.checked(Some(true)));
        assert!(!state.checked(None));
    }

    #[test]
    fn disabled_switch_ignores_toggle() {
        let mut calls = 0;
        let mut state = SwitchState::new(true);
        assert!(state.toggle(None, true, |_| calls += 1));
        assert_eq!(calls, 0);
        assert!(state.checked(None));
    }

    #[test]
    fn percent_clamps_and_guards_max() {
        assert!((percent(25.0, 50.0) - 50.0).abs() < f64::EPSILON);
        assert!((percent(120.0, 100.0) - 100.0).abs() < f64::EPSILON);
        assert!(percent(-5.0, 100.0).abs() < f64::EPSILON);
        assert!(percent(5.0, 0.0).abs() < f64::EPSILON);
        assert!(percent(5.0, f64::NAN).abs() < f64::EPSILON);
    }
}
