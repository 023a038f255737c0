//! Headless multi-step wizard.
//!
//! A provider owns an active-step index over an ordered list of declared
//! steps; components read it through an explicit [`Scope`] and render a
//! framework-agnostic [`Node`] tree with navigation bar, active step content
//! and Previous/Next footer.

pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod messaging;
pub mod wizard;

pub use components::{Component, Footer, Navbar, Node, Progress, Step, Steps, Wizard};
pub use config::{RegistrationPolicy, ReplacePolicy, WizardConfig};
pub use context::{Scope, WizardProvider};
pub use error::{CompositionError, ConfigError, WizardError};
pub use messaging::WizardEvent;
pub use wizard::{
    Action, AdvanceCommit, DefaultStep, NavAction, NavigationState, StepDescriptor, StepId,
    Transition, WizardContext,
};
