/// Step navigation core
///
/// ## Architecture
///
/// ```text
/// WizardContext (shared handle, events, effectful advance)
///   └── NavigationState (active index + steps)
///         ├── Action (advance, retreat, goto, replace steps)
///         └── StepDescriptor (id + title of a registered step)
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// use wizard_stepper::wizard::{DefaultStep, NavigationState, Action};
///
/// let mut state = NavigationState::with_steps(vec![
///     DefaultStep::new(1, "Account"),
///     DefaultStep::new(2, "Billing"),
/// ]);
///
/// state.apply(Action::Advance);
/// assert!(state.is_last_step());
///
/// // Guards fail silently
/// state.apply(Action::Advance);
/// assert_eq!(state.active_step_index(), 1);
/// ```

pub mod flow;
pub mod state;
pub mod steps;

// Re-export commonly used types
pub use flow::{AdvanceCommit, NavAction, WizardContext};
pub use state::{Action, NavigationState, Transition};
pub use steps::{DefaultStep, StepDescriptor, StepId};
