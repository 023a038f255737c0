/// Step list container
///
/// `Steps` validates its children, registers their descriptors with the
/// provider when the declared set differs from what is registered, and
/// renders the child at the active index.
use super::{Component, Node};
use crate::context::Scope;
use crate::error::{CompositionError, WizardError};
use crate::wizard::{DefaultStep, StepDescriptor, StepId};

/// One declared step: descriptor plus arbitrary nested content
pub struct Step<T: StepDescriptor> {
    descriptor: T,
    content: Box<dyn Component<T>>,
}

impl<T: StepDescriptor> Step<T> {
    pub fn new(descriptor: T, content: impl Component<T> + 'static) -> Self {
        Self {
            descriptor,
            content: Box::new(content),
        }
    }

    pub fn descriptor(&self) -> &T {
        &self.descriptor
    }
}

impl Step<DefaultStep> {
    pub fn titled(
        id: impl Into<StepId>,
        title: impl Into<String>,
        content: impl Component<DefaultStep> + 'static,
    ) -> Self {
        Self::new(DefaultStep::new(id, title), content)
    }
}

impl<T: StepDescriptor> Component<T> for Step<T> {
    fn render(&self, scope: &Scope<T>) -> Result<Node, WizardError> {
        Ok(Node::el("div")
            .attr("id", self.descriptor.id().to_string())
            .child(self.content.render(scope)?)
            .into())
    }
}

/// A child of `Steps`; only `Step` children are valid
pub enum Child<T: StepDescriptor> {
    Step(Step<T>),
    Other(Box<dyn Component<T>>),
}

impl<T: StepDescriptor> From<Step<T>> for Child<T> {
    fn from(step: Step<T>) -> Self {
        Child::Step(step)
    }
}

pub struct Steps<T: StepDescriptor> {
    children: Vec<Child<T>>,
}

impl<T: StepDescriptor> Steps<T> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    pub fn step(mut self, step: Step<T>) -> Self {
        self.children.push(Child::Step(step));
        self
    }

    /// Add an arbitrary child; rendering will reject it
    pub fn child(mut self, child: impl Component<T> + 'static) -> Self {
        self.children.push(Child::Other(Box::new(child)));
        self
    }

    /// Check composition and collect descriptors in declaration order
    pub fn declared_steps(&self) -> Result<Vec<T>, CompositionError> {
        if self.children.is_empty() {
            return Err(CompositionError::Empty);
        }

        self.children
            .iter()
            .enumerate()
            .map(|(position, child)| match child {
                Child::Step(step) => Ok(step.descriptor.clone()),
                Child::Other(_) => Err(CompositionError::NotAStep { position }),
            })
            .collect()
    }

    fn step_at(&self, index: usize) -> Option<&Step<T>> {
        match self.children.get(index) {
            Some(Child::Step(step)) => Some(step),
            _ => None,
        }
    }
}

impl<T: StepDescriptor> Default for Steps<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StepDescriptor> FromIterator<Step<T>> for Steps<T> {
    fn from_iter<I: IntoIterator<Item = Step<T>>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().map(Child::Step).collect(),
        }
    }
}

impl<T: StepDescriptor> Component<T> for Steps<T> {
    fn render(&self, scope: &Scope<T>) -> Result<Node, WizardError> {
        let declared = self.declared_steps().map_err(|err| {
            tracing::warn!("Invalid Steps composition: {}", err);
            err
        })?;

        let ctx = scope.use_wizard()?;

        if ctx
            .config()
            .registration
            .needs_update(&ctx.steps(), &declared)
        {
            tracing::debug!(count = declared.len(), "Registering declared steps");
            ctx.replace_steps(declared);
        }

        match self.step_at(ctx.active_step_index()) {
            Some(step) => step.render(scope),
            None => Ok(Node::Empty),
        }
    }
}
