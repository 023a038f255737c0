/// Navigation state and its reducer
///
/// The state machine's state is the pair (active step index, steps). There are
/// no named modes beyond that pair, and every transition is guarded: a failed
/// guard leaves the state untouched and is never an error.
use super::steps::{StepDescriptor, StepId};

/// Transition requests understood by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Action<T> {
    /// Move to the next step
    Advance,

    /// Move to the previous step
    Retreat,

    /// Jump to the step at `index`
    GoTo { index: usize },

    /// Replace the registered steps wholesale
    ReplaceSteps(Vec<T>),
}

impl<T> Action<T> {
    /// Short name for log output
    pub fn name(&self) -> &'static str {
        match self {
            Action::Advance => "advance",
            Action::Retreat => "retreat",
            Action::GoTo { .. } => "goto",
            Action::ReplaceSteps(_) => "replace_steps",
        }
    }
}

/// What a transition did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Active index changed
    Moved { from: usize, to: usize },

    /// Step list was replaced (index untouched)
    Replaced { previous_len: usize, len: usize },

    /// Guard failed, nothing changed
    Unchanged,
}

impl Transition {
    pub fn is_change(&self) -> bool {
        !matches!(self, Transition::Unchanged)
    }
}

/// Active step index over an ordered list of steps
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState<T> {
    active_step_index: usize,
    steps: Vec<T>,
}

impl<T: StepDescriptor> NavigationState<T> {
    /// Fresh state: index 0, no steps
    pub fn new() -> Self {
        Self {
            active_step_index: 0,
            steps: Vec::new(),
        }
    }

    /// State with steps already registered
    pub fn with_steps(steps: Vec<T>) -> Self {
        Self {
            active_step_index: 0,
            steps,
        }
    }

    pub fn active_step_index(&self) -> usize {
        self.active_step_index
    }

    pub fn steps(&self) -> &[T] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_first_step(&self) -> bool {
        self.active_step_index == 0
    }

    /// True on the final step, and also when no steps are registered
    pub fn is_last_step(&self) -> bool {
        self.active_step_index + 1 >= self.steps.len()
    }

    /// The step at the active index, if the index is in bounds
    pub fn active_step(&self) -> Option<&T> {
        self.steps.get(self.active_step_index)
    }

    /// Position of the step with the given id
    pub fn position_of(&self, id: &StepId) -> Option<usize> {
        self.steps.iter().position(|step| step.id() == id)
    }

    /// Apply an action in place
    pub fn apply(&mut self, action: Action<T>) -> Transition {
        let from = self.active_step_index;
        match action {
            Action::Advance => {
                let next = from + 1;
                if next < self.steps.len() {
                    self.active_step_index = next;
                    return Transition::Moved { from, to: next };
                }
                Transition::Unchanged
            }
            Action::Retreat => {
                if from > 0 {
                    self.active_step_index = from - 1;
                    return Transition::Moved { from, to: from - 1 };
                }
                Transition::Unchanged
            }
            Action::GoTo { index } => {
                if index != from && index < self.steps.len() {
                    self.active_step_index = index;
                    return Transition::Moved { from, to: index };
                }
                Transition::Unchanged
            }
            Action::ReplaceSteps(steps) => {
                let previous_len = self.steps.len();
                self.steps = steps;
                Transition::Replaced {
                    previous_len,
                    len: self.steps.len(),
                }
            }
        }
    }

    /// Pure form of [`apply`](Self::apply): returns the next state
    pub fn reduce(&self, action: Action<T>) -> Self {
        let mut next = self.clone();
        next.apply(action);
        next
    }

    /// Pull an out-of-bounds index back onto the last step
    ///
    /// Returns the old index when it had to move.
    pub fn clamp_active_index(&mut self) -> Option<usize> {
        let max = self.steps.len().saturating_sub(1);
        if self.active_step_index > max {
            let old = self.active_step_index;
            self.active_step_index = max;
            return Some(old);
        }
        None
    }
}

impl<T: StepDescriptor> Default for NavigationState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::steps::DefaultStep;
    use proptest::prelude::*;

    fn steps(n: usize) -> Vec<DefaultStep> {
        (0..n)
            .map(|i| DefaultStep::new(i as i64 + 1, format!("Step {}", i + 1)))
            .collect()
    }

    fn state_at(n: usize, index: usize) -> NavigationState<DefaultStep> {
        let mut state = NavigationState::with_steps(steps(n));
        state.active_step_index = index;
        state
    }

    #[test]
    fn test_new_state() {
        let state: NavigationState<DefaultStep> = NavigationState::new();
        assert_eq!(state.active_step_index(), 0);
        assert!(state.is_empty());
        assert!(state.is_first_step());
        assert!(state.is_last_step());
        assert!(state.active_step().is_none());
    }

    #[test]
    fn test_walkthrough_scenario() {
        let mut state = NavigationState::with_steps(vec![
            DefaultStep::new(1, "A"),
            DefaultStep::new(2, "B"),
            DefaultStep::new(3, "C"),
        ]);

        assert_eq!(state.apply(Action::Advance), Transition::Moved { from: 0, to: 1 });
        assert!(!state.is_first_step());
        assert!(!state.is_last_step());

        state.apply(Action::Advance);
        assert_eq!(state.active_step_index(), 2);
        assert!(state.is_last_step());
        assert_eq!(state.active_step().map(|s| s.title.as_str()), Some("C"));

        assert_eq!(state.apply(Action::Advance), Transition::Unchanged);
        assert_eq!(state.active_step_index(), 2);

        state.apply(Action::GoTo { index: 0 });
        assert_eq!(state.active_step_index(), 0);
    }

    #[test]
    fn test_retreat_at_first_step() {
        let mut state = state_at(3, 0);
        assert_eq!(state.apply(Action::Retreat), Transition::Unchanged);
        assert_eq!(state.active_step_index(), 0);
    }

    #[test]
    fn test_goto_current_is_noop() {
        let mut state = state_at(3, 1);
        assert_eq!(state.apply(Action::GoTo { index: 1 }), Transition::Unchanged);
    }

    #[test]
    fn test_replace_does_not_touch_index() {
        let mut state = state_at(5, 4);
        let result = state.apply(Action::ReplaceSteps(steps(2)));
        assert_eq!(result, Transition::Replaced { previous_len: 5, len: 2 });
        assert_eq!(state.active_step_index(), 4);
        assert!(state.active_step().is_none());
        assert!(state.is_last_step());
    }

    #[test]
    fn test_clamp_active_index() {
        let mut state = state_at(5, 4);
        state.apply(Action::ReplaceSteps(steps(2)));
        assert_eq!(state.clamp_active_index(), Some(4));
        assert_eq!(state.active_step_index(), 1);
        assert_eq!(state.clamp_active_index(), None);

        state.apply(Action::ReplaceSteps(Vec::new()));
        state.clamp_active_index();
        assert_eq!(state.active_step_index(), 0);
    }

    #[test]
    fn test_reduce_is_pure() {
        let state = state_at(3, 0);
        let next = state.reduce(Action::Advance);
        assert_eq!(state.active_step_index(), 0);
        assert_eq!(next.active_step_index(), 1);
        assert_eq!(state.reduce(Action::Retreat), state);
    }

    #[test]
    fn test_position_of() {
        let state = state_at(3, 0);
        assert_eq!(state.position_of(&StepId::Number(3)), Some(2));
        assert_eq!(state.position_of(&StepId::from("3")), None);
    }

    proptest! {
        #[test]
        fn advance_reaches_last_step(n in 1usize..40) {
            let mut state = state_at(n, 0);
            for _ in 0..n - 1 {
                prop_assert!(state.apply(Action::Advance).is_change());
            }
            prop_assert_eq!(state.active_step_index(), n - 1);
            prop_assert!(state.is_last_step());
            prop_assert_eq!(state.apply(Action::Advance), Transition::Unchanged);
            prop_assert_eq!(state.active_step_index(), n - 1);
        }

        #[test]
        fn retreat_steps_back_one(n in 1usize..40, k in 0usize..40) {
            let k = k % n;
            let mut state = state_at(n, k);
            state.apply(Action::Retreat);
            prop_assert_eq!(state.active_step_index(), k.saturating_sub(1));
        }

        #[test]
        fn goto_respects_bounds(n in 1usize..20, current in 0usize..20, target in 0usize..40) {
            let current = current % n;
            let mut state = state_at(n, current);
            state.apply(Action::GoTo { index: target });
            if target < n && target != current {
                prop_assert_eq!(state.active_step_index(), target);
            } else {
                prop_assert_eq!(state.active_step_index(), current);
            }
        }

        #[test]
        fn replace_never_moves_index(n in 0usize..20, m in 0usize..20, k in 0usize..20) {
            let mut state = state_at(n, k);
            state.apply(Action::ReplaceSteps(steps(m)));
            prop_assert_eq!(state.len(), m);
            prop_assert_eq!(state.active_step_index(), k);
        }
    }
}
