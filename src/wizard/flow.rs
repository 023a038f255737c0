/// Wizard flow management
///
/// [`WizardContext`] is the read/transition handle consumers obtain from a
/// scope. All mutation goes through the reducer under a short write lock; no
/// lock is held across the advance effect.
use crossbeam_channel::Receiver;
use parking_lot::RwLock;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::state::{Action, NavigationState, Transition};
use super::steps::{StepDescriptor, StepId};
use crate::config::{ReplacePolicy, WizardConfig};
use crate::messaging::{EventBus, SubscriberId, WizardEvent};

/// Navigation request carried by an interactive element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Previous,
    Next,
    GoTo(usize),
}

/// State owned by a provider and shared with its contexts
pub(crate) struct Shared<T> {
    state: RwLock<NavigationState<T>>,
    config: WizardConfig,
    events: EventBus,
    mounted: AtomicBool,
}

impl<T: StepDescriptor> Shared<T> {
    pub(crate) fn new(config: WizardConfig) -> Self {
        Self {
            state: RwLock::new(NavigationState::new()),
            config,
            events: EventBus::new(),
            mounted: AtomicBool::new(true),
        }
    }

    pub(crate) fn events(&self) -> &EventBus {
        &self.events
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Mark the owning provider gone; outstanding contexts keep working
    pub(crate) fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
        self.events.publish(WizardEvent::ProviderUnmounted);
    }
}

/// Handle to a provider's navigation state and its transitions
pub struct WizardContext<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for WizardContext<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: StepDescriptor> WizardContext<T> {
    pub(crate) fn from_shared(shared: Arc<Shared<T>>) -> Self {
        Self { shared }
    }

    pub fn config(&self) -> &WizardConfig {
        &self.shared.config
    }

    pub fn active_step_index(&self) -> usize {
        self.shared.state.read().active_step_index()
    }

    pub fn steps(&self) -> Vec<T> {
        self.shared.state.read().steps().to_vec()
    }

    pub fn len(&self) -> usize {
        self.shared.state.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.state.read().is_empty()
    }

    pub fn is_first_step(&self) -> bool {
        self.shared.state.read().is_first_step()
    }

    pub fn is_last_step(&self) -> bool {
        self.shared.state.read().is_last_step()
    }

    /// Step at the active index; `None` when empty or out of bounds
    pub fn active_step(&self) -> Option<T> {
        self.shared.state.read().active_step().cloned()
    }

    /// Consistent copy of the whole state
    pub fn snapshot(&self) -> NavigationState<T> {
        self.shared.state.read().clone()
    }

    pub fn advance(&self) -> Transition {
        self.apply(Action::Advance)
    }

    pub fn retreat(&self) -> Transition {
        self.apply(Action::Retreat)
    }

    pub fn go_to(&self, index: usize) -> Transition {
        self.apply(Action::GoTo { index })
    }

    /// Jump to the step registered under `id`
    pub fn go_to_step(&self, id: &StepId) -> Transition {
        let position = self.shared.state.read().position_of(id);
        match position {
            Some(index) => self.go_to(index),
            None => {
                tracing::trace!(%id, "No registered step with this id");
                Transition::Unchanged
            }
        }
    }

    pub fn replace_steps(&self, steps: Vec<T>) -> Transition {
        self.apply(Action::ReplaceSteps(steps))
    }

    /// Run a synchronous effect, then advance regardless of its outcome
    pub fn advance_with<F, R>(&self, effect: F) -> Transition
    where
        F: FnOnce() -> R,
    {
        let _ = effect();
        self.advance()
    }

    /// First phase of an effectful advance: await the effect
    ///
    /// The returned [`AdvanceCommit`] applies the advance against whatever
    /// state exists when it is committed. There is no cancellation: dropping
    /// the future abandons the advance, nothing else.
    pub async fn begin_advance<F>(&self, effect: F) -> AdvanceCommit<T>
    where
        F: Future,
    {
        let _ = effect.await;
        AdvanceCommit {
            context: self.clone(),
        }
    }

    /// Await `effect`, then advance
    pub async fn advance_after<F>(&self, effect: F) -> Transition
    where
        F: Future,
    {
        self.begin_advance(effect).await.commit()
    }

    /// Dispatch a navigation request from an interactive element
    pub fn dispatch(&self, action: NavAction) -> Transition {
        match action {
            NavAction::Previous => self.retreat(),
            NavAction::Next => self.advance(),
            NavAction::GoTo(index) => self.go_to(index),
        }
    }

    pub fn subscribe(&self) -> (Receiver<WizardEvent>, SubscriberId) {
        self.shared.events.subscribe()
    }

    pub fn unsubscribe(&self, id: SubscriberId) {
        self.shared.events.unsubscribe(id);
    }

    fn apply(&self, action: Action<T>) -> Transition {
        let name = action.name();
        let mut clamped = None;

        let transition = {
            let mut state = self.shared.state.write();
            let transition = state.apply(action);
            if matches!(transition, Transition::Replaced { .. })
                && self.shared.config.on_replace == ReplacePolicy::Clamp
            {
                clamped = state
                    .clamp_active_index()
                    .map(|from| (from, state.active_step_index()));
            }
            transition
        };

        match transition {
            Transition::Unchanged => tracing::trace!(action = name, "Guard rejected transition"),
            Transition::Moved { from, to } => {
                tracing::debug!(action = name, from, to, "Active step changed")
            }
            Transition::Replaced { previous_len, len } => {
                tracing::debug!(action = name, previous_len, len, "Steps replaced")
            }
        }

        if let Some(event) = WizardEvent::from_transition(transition) {
            self.shared.events.publish(event);
        }
        if let Some((from, to)) = clamped {
            tracing::warn!(from, to, "Active step index clamped after replacement");
            self.shared.events.publish(WizardEvent::IndexClamped { from, to });
        }

        transition
    }
}

/// Second phase of an effectful advance
#[must_use = "the advance is only applied when committed"]
pub struct AdvanceCommit<T> {
    context: WizardContext<T>,
}

impl<T: StepDescriptor> AdvanceCommit<T> {
    /// Apply the guarded advance against the current state
    pub fn commit(self) -> Transition {
        self.context.advance()
    }
}
