/// Wizard shell
///
/// Owns a provider, renders the navbar, the consumer body and the footer
/// inside the wizard frame, and routes button clicks from the last rendered
/// tree back into the navigation state.
use super::footer::FOOTER_CLASS;
use super::{Component, Footer, Navbar, Node};
use crate::config::WizardConfig;
use crate::context::{Scope, WizardProvider};
use crate::error::WizardError;
use crate::wizard::{StepDescriptor, Transition, WizardContext};

pub struct Wizard<T: StepDescriptor> {
    provider: WizardProvider<T>,
    body: Box<dyn Component<T>>,
    last_render: Option<Node>,
}

impl<T: StepDescriptor> Wizard<T> {
    pub fn new(body: impl Component<T> + 'static) -> Self {
        Self::with_config(WizardConfig::default(), body)
    }

    pub fn with_config(config: WizardConfig, body: impl Component<T> + 'static) -> Self {
        Self {
            provider: WizardProvider::new(config),
            body: Box::new(body),
            last_render: None,
        }
    }

    pub fn provider(&self) -> &WizardProvider<T> {
        &self.provider
    }

    pub fn context(&self) -> WizardContext<T> {
        self.provider.context()
    }

    pub fn scope(&self) -> Scope<T> {
        self.provider.scope()
    }

    /// Render the whole wizard
    pub fn render(&mut self) -> Result<&Node, WizardError> {
        let scope = self.provider.scope();
        self.last_render = None;

        // Body first: step registration must be visible to the chrome.
        let body = self.body.render(&scope)?;
        let navbar = Navbar.render(&scope)?;
        let footer = Footer.render(&scope)?;

        let tree: Node = Node::el("div")
            .class("fp-c-wizard")
            .child(
                Node::el("div")
                    .class("fp-c-wizard__outer-wrap")
                    .child(
                        Node::el("div")
                            .class("fp-c-wizard__inner-wrap")
                            .child(navbar)
                            .child(
                                Node::el("div").class("fp-c-wizard__main").child(
                                    Node::el("div")
                                        .class("fp-c-wizard__main-body")
                                        .child(body),
                                ),
                            ),
                    )
                    .child(footer),
            )
            .into();

        Ok(self.last_render.insert(tree))
    }

    pub fn last_render(&self) -> Option<&Node> {
        self.last_render.as_ref()
    }

    /// Click the footer button labelled `label` in the last rendered tree
    ///
    /// Returns `None` when there is no such enabled, actionable button.
    pub fn click(&self, label: &str) -> Option<Transition> {
        // The shell footer closes the tree, after anything the body renders.
        let footer = self.last_render.as_ref()?.find_by_class(FOOTER_CLASS).pop()?;
        let action = footer.find_button(label)?.click_action()?;

        tracing::debug!(label, ?action, "Button clicked");
        Some(self.provider.context().dispatch(action))
    }
}
