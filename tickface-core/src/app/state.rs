//! App lifecycle state machine

/// App lifecycle states
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppState {
    /// Not yet initialized
    #[default]
    Uninitialized,
    /// Window pushed, inbox open
    Running,
    /// Window unloaded after exit
    Stopped,
}

/// Lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Initialization finished
    Started,
    /// The app is exiting
    Exit,
}

impl AppState {
    /// Process an event and return the new state
    ///
    /// Events that make no sense in the current state are ignored.
    pub fn transition(self, event: Event) -> Self {
        use AppState::*;
        use Event::*;

        match (self, event) {
            (Uninitialized, Started) => Running,
            (Running, Exit) => Stopped,
            (state, _) => state,
        }
    }

    /// Whether inbound messages are handled in this state
    pub fn accepts_messages(&self) -> bool {
        matches!(self, AppState::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let state = AppState::default();
        assert!(!state.accepts_messages());

        let state = state.transition(Event::Started);
        assert_eq!(state, AppState::Running);
        assert!(state.accepts_messages());

        let state = state.transition(Event::Exit);
        assert_eq!(state, AppState::Stopped);
        assert!(!state.accepts_messages());
    }

    #[test]
    fn test_invalid_events_ignored() {
        assert_eq!(
            AppState::Uninitialized.transition(Event::Exit),
            AppState::Uninitialized
        );
        assert_eq!(AppState::Running.transition(Event::Started), AppState::Running);
        assert_eq!(AppState::Stopped.transition(Event::Started), AppState::Stopped);
    }
}
