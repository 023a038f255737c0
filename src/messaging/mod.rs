/// Change notifications for wizard hosts
///
/// A provider publishes a [`WizardEvent`] after every transition that changed
/// its state. Hosts subscribe and re-render on receipt.
///
/// ```rust,ignore
/// let provider = WizardProvider::<DefaultStep>::new(WizardConfig::default());
/// let (rx, _id) = provider.subscribe();
///
/// provider.scope().use_wizard()?.advance();
///
/// while let Ok(event) = rx.try_recv() {
///     if event.requires_render() {
///         // re-render
///     }
/// }
/// ```

pub mod bus;
pub mod events;

pub use bus::{EventBus, SubscriberId};
pub use events::WizardEvent;
