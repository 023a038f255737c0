/// Progress readout ("Step n of m")
use super::{Component, Node};
use crate::context::Scope;
use crate::error::WizardError;
use crate::wizard::StepDescriptor;

#[derive(Debug, Clone, Copy, Default)]
pub struct Progress;

impl<T: StepDescriptor> Component<T> for Progress {
    fn render(&self, scope: &Scope<T>) -> Result<Node, WizardError> {
        let ctx = scope.use_wizard()?;
        let label = format!("Step {} of {}", ctx.active_step_index() + 1, ctx.len());
        Ok(Node::el("div").child(label).into())
    }
}
