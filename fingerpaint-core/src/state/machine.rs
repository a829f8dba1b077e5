//! State machine definition

use super::events::Event;

/// Paint loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Splash screen visible, waiting for the first touch
    #[default]
    Unarmed,
    /// Canvas cleared, palette visible, touches paint
    Active,
}

impl State {
    /// Check if touches in this state paint or select pens
    pub fn paint_allowed(&self) -> bool {
        matches!(self, State::Active)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Unarmed, TouchDetected) => Active,
            (Active, TouchDetected) => Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_touch_arms() {
        let next = State::Unarmed.transition(Event::TouchDetected);
        assert_eq!(next, State::Active);
        assert!(next.paint_allowed());
    }

    #[test]
    fn test_unarmed_does_not_paint() {
        assert!(!State::Unarmed.paint_allowed());
    }

    #[test]
    fn test_active_is_absorbing() {
        assert_eq!(State::Active.transition(Event::TouchDetected), State::Active);
    }

    #[test]
    fn test_default_is_unarmed() {
        assert_eq!(State::default(), State::Unarmed);
    }
}
