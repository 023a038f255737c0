/// Wizard step descriptors
///
/// Defines the shape of a registered step: a stable identifier and a display title.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Step identifier
///
/// Steps may be keyed by number or by string, matching whatever the
/// composing code finds natural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepId {
    Number(i64),
    Text(String),
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepId::Number(n) => write!(f, "{}", n),
            StepId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for StepId {
    fn from(value: i64) -> Self {
        StepId::Number(value)
    }
}

impl From<i32> for StepId {
    fn from(value: i32) -> Self {
        StepId::Number(value.into())
    }
}

impl From<&str> for StepId {
    fn from(value: &str) -> Self {
        StepId::Text(value.to_string())
    }
}

impl From<String> for StepId {
    fn from(value: String) -> Self {
        StepId::Text(value)
    }
}

/// Anything that can be registered as a wizard step
///
/// Consumers with richer step metadata implement this for their own type
/// and parameterize the provider with it.
pub trait StepDescriptor: Clone + PartialEq + Send + Sync + 'static {
    fn id(&self) -> &StepId;
    fn title(&self) -> &str;
}

/// Default step descriptor (id + title)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultStep {
    pub id: StepId,
    pub title: String,
}

impl DefaultStep {
    pub fn new(id: impl Into<StepId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl StepDescriptor for DefaultStep {
    fn id(&self) -> &StepId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for DefaultStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
