/// Presentational wizard components
///
/// Every component renders a [`Node`] from the wizard context it finds in the
/// [`Scope`] it is handed. None of them take configuration beyond that
/// context.
///
/// ```text
/// Wizard (owns the provider)
///   ├── Navbar    (step titles, active marker)
///   ├── body      (consumer components, usually a Steps container)
///   │     └── Steps > Step*   (registers steps, shows the active one)
///   └── Footer    (Previous / Next)
/// Progress          (optional "Step n of m" readout)
/// ```

pub mod footer;
pub mod navbar;
pub mod node;
pub mod progress;
pub mod steps;
pub mod wizard;

pub use footer::Footer;
pub use navbar::Navbar;
pub use node::{ElementNode, Node};
pub use progress::Progress;
pub use steps::{Child, Step, Steps};
pub use wizard::Wizard;

use crate::context::Scope;
use crate::error::WizardError;
use crate::wizard::StepDescriptor;

/// Something that renders a view from the wizard scope
pub trait Component<T: StepDescriptor> {
    fn render(&self, scope: &Scope<T>) -> Result<Node, WizardError>;
}

/// Static content renders as itself
impl<T: StepDescriptor> Component<T> for Node {
    fn render(&self, _scope: &Scope<T>) -> Result<Node, WizardError> {
        Ok(self.clone())
    }
}

impl<T, F> Component<T> for F
where
    T: StepDescriptor,
    F: Fn(&Scope<T>) -> Result<Node, WizardError>,
{
    fn render(&self, scope: &Scope<T>) -> Result<Node, WizardError> {
        self(scope)
    }
}
