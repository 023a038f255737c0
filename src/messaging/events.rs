/// Wizard change notifications
///
/// Published after a transition actually changed the navigation state.
/// Guard failures never produce an event.
use crate::wizard::Transition;

/// Events broadcast by a wizard provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// Active step index moved
    StepChanged { from: usize, to: usize },

    /// Registered steps were replaced
    StepsReplaced { previous_len: usize, len: usize },

    /// Active index was pulled back into bounds after a replacement
    IndexClamped { from: usize, to: usize },

    /// Provider was dropped; its scopes no longer resolve
    ProviderUnmounted,
}

impl WizardEvent {
    /// Event for a reducer outcome, if it changed anything
    pub fn from_transition(transition: Transition) -> Option<Self> {
        match transition {
            Transition::Moved { from, to } => Some(WizardEvent::StepChanged { from, to }),
            Transition::Replaced { previous_len, len } => {
                Some(WizardEvent::StepsReplaced { previous_len, len })
            }
            Transition::Unchanged => None,
        }
    }

    /// Whether a host should re-render in response
    pub fn requires_render(&self) -> bool {
        !matches!(self, WizardEvent::ProviderUnmounted)
    }
}
