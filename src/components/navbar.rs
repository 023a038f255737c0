/// Navigation bar listing every registered step
///
/// The entry whose id matches the active step is marked with
/// `fp-c-wizard__nav-link-active`. Entries are not clickable.
use super::{Component, Node};
use crate::context::Scope;
use crate::error::WizardError;
use crate::wizard::StepDescriptor;

pub const ACTIVE_LINK_CLASS: &str = "fp-c-wizard__nav-link-active";

#[derive(Debug, Clone, Copy, Default)]
pub struct Navbar;

impl<T: StepDescriptor> Component<T> for Navbar {
    fn render(&self, scope: &Scope<T>) -> Result<Node, WizardError> {
        let ctx = scope.use_wizard()?;
        let active = ctx.active_step();

        let items = ctx.steps().into_iter().map(|step| -> Node {
            let is_active = active.as_ref().map_or(false, |a| a.id() == step.id());
            let class = if is_active {
                format!("fp-c-wizard__nav-link {}", ACTIVE_LINK_CLASS)
            } else {
                "fp-c-wizard__nav-link".to_string()
            };

            Node::el("li")
                .class("fp-c-wizard__nav-item")
                .attr("key", step.id().to_string())
                .child(Node::el("button").class(class).child(step.title()))
                .into()
        });

        Ok(Node::el("nav")
            .class("fp-c-wizard__nav")
            .child(Node::el("ol").class("fp-c-wizard__nav-list").children(items))
            .into())
    }
}
