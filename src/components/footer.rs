/// Footer with Previous / Next controls
use super::{Component, Node};
use crate::context::Scope;
use crate::error::WizardError;
use crate::wizard::{NavAction, StepDescriptor};

pub const PREVIOUS_LABEL: &str = "Previous";
pub const NEXT_LABEL: &str = "Next";
pub const FOOTER_CLASS: &str = "fp-c-wizard__footer";

#[derive(Debug, Clone, Copy, Default)]
pub struct Footer;

impl<T: StepDescriptor> Component<T> for Footer {
    fn render(&self, scope: &Scope<T>) -> Result<Node, WizardError> {
        let ctx = scope.use_wizard()?;

        Ok(Node::el("div")
            .class(FOOTER_CLASS)
            .child(
                Node::el("button")
                    .disabled(ctx.is_first_step())
                    .on_click(NavAction::Previous)
                    .child(PREVIOUS_LABEL),
            )
            .child(
                Node::el("button")
                    .disabled(ctx.is_last_step())
                    .on_click(NavAction::Next)
                    .child(NEXT_LABEL),
            )
            .into())
    }
}
