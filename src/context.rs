//! Scoped context distribution.
//!
//! A [`WizardProvider`] owns the navigation state. Components receive a
//! [`Scope`] as an explicit render parameter and pull the wizard context out
//! of it; a scope with no live provider binding yields
//! [`WizardError::MissingProvider`].

use crossbeam_channel::Receiver;
use std::sync::{Arc, Weak};

use crate::config::WizardConfig;
use crate::error::WizardError;
use crate::messaging::{SubscriberId, WizardEvent};
use crate::wizard::flow::Shared;
use crate::wizard::{StepDescriptor, WizardContext};

/// Owner of one wizard's navigation state
///
/// Dropping the provider unmounts it: scopes handed out earlier stop
/// resolving.
pub struct WizardProvider<T: StepDescriptor> {
    shared: Arc<Shared<T>>,
}

impl<T: StepDescriptor> WizardProvider<T> {
    pub fn new(config: WizardConfig) -> Self {
        tracing::debug!(?config, "Mounting wizard provider");
        Self {
            shared: Arc::new(Shared::new(config)),
        }
    }

    /// Scope bound to this provider, to be passed down the component tree
    pub fn scope(&self) -> Scope<T> {
        Scope {
            binding: Some(Arc::downgrade(&self.shared)),
        }
    }

    /// Context for code that owns the provider directly
    pub fn context(&self) -> WizardContext<T> {
        WizardContext::from_shared(Arc::clone(&self.shared))
    }

    pub fn subscribe(&self) -> (Receiver<WizardEvent>, SubscriberId) {
        self.shared.events().subscribe()
    }
}

impl<T: StepDescriptor> Default for WizardProvider<T> {
    fn default() -> Self {
        Self::new(WizardConfig::default())
    }
}

impl<T: StepDescriptor> Drop for WizardProvider<T> {
    fn drop(&mut self) {
        tracing::debug!("Unmounting wizard provider");
        self.shared.unmount();
    }
}

/// Render-time parameter carrying an optional provider binding
pub struct Scope<T> {
    binding: Option<Weak<Shared<T>>>,
}

impl<T> Clone for Scope<T> {
    fn clone(&self) -> Self {
        Self {
            binding: self.binding.clone(),
        }
    }
}

impl<T: StepDescriptor> Scope<T> {
    /// Scope outside of any provider
    pub fn unbound() -> Self {
        Self { binding: None }
    }

    /// Whether a mounted provider is bound
    pub fn is_bound(&self) -> bool {
        self.live().is_some()
    }

    /// Read the wizard context, failing if no provider is mounted
    pub fn use_wizard(&self) -> Result<WizardContext<T>, WizardError> {
        self.live()
            .map(WizardContext::from_shared)
            .ok_or(WizardError::MissingProvider)
    }

    fn live(&self) -> Option<Arc<Shared<T>>> {
        self.binding
            .as_ref()
            .and_then(Weak::upgrade)
            .filter(|shared| shared.is_mounted())
    }
}

impl<T: StepDescriptor> Default for Scope<T> {
    fn default() -> Self {
        Self::unbound()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::DefaultStep;

    #[test]
    fn test_unbound_scope_fails() {
        let scope: Scope<DefaultStep> = Scope::unbound();
        assert!(!scope.is_bound());
        assert_eq!(scope.use_wizard().err(), Some(WizardError::MissingProvider));
    }

    #[test]
    fn test_bound_scope_shares_state() {
        let provider = WizardProvider::<DefaultStep>::default();
        let scope = provider.scope();
        scope
            .use_wizard()
            .unwrap()
            .replace_steps(vec![DefaultStep::new(1, "A"), DefaultStep::new(2, "B")]);

        scope.clone().use_wizard().unwrap().advance();
        assert_eq!(provider.context().active_step_index(), 1);
    }

    #[test]
    fn test_dropped_provider_unbinds_scope() {
        let provider = WizardProvider::<DefaultStep>::default();
        let scope = provider.scope();
        let (rx, _id) = provider.subscribe();
        assert!(scope.is_bound());

        drop(provider);

        assert!(!scope.is_bound());
        assert_eq!(scope.use_wizard().err(), Some(WizardError::MissingProvider));
        assert_eq!(rx.try_recv().unwrap(), WizardEvent::ProviderUnmounted);
    }

    #[test]
    fn test_outstanding_context_survives_unmount() {
        let provider = WizardProvider::<DefaultStep>::default();
        let scope = provider.scope();
        let ctx = scope.use_wizard().unwrap();
        ctx.replace_steps(vec![DefaultStep::new(1, "A"), DefaultStep::new(2, "B")]);

        drop(provider);

        assert!(scope.use_wizard().is_err());
        assert_eq!(ctx.advance(), crate::wizard::Transition::Moved { from: 0, to: 1 });
    }

    #[test]
    fn test_providers_are_independent() {
        let first = WizardProvider::<DefaultStep>::default();
        let second = WizardProvider::<DefaultStep>::default();
        first
            .context()
            .replace_steps(vec![DefaultStep::new(1, "A"), DefaultStep::new(2, "B")]);
        first.context().advance();

        assert_eq!(first.scope().use_wizard().unwrap().active_step_index(), 1);
        assert_eq!(second.scope().use_wizard().unwrap().active_step_index(), 0);
    }
}
