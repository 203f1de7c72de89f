use std::fmt::{self, Display, Formatter};

use crate::{errors::PhaseError, phase::AsyncPhase};

/// Descriptor of one named signal.
///
/// Its only content is the action type, the fully derived name it was built
/// from. It is serialized as `{"type": "<name>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    action_type: String,
}

impl Action {
    #[must_use]
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
        }
    }

    #[must_use]
    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    #[must_use]
    pub fn into_action_type(self) -> String {
        self.action_type
    }

    /// Split the action type into the base name and the [`AsyncPhase`] whose
    /// suffix it ends with.
    ///
    /// # Errors
    ///
    /// [`PhaseError::MissingSuffix`] if the type does not end with any phase
    /// suffix.
    pub fn split_phase(&self) -> Result<(&str, AsyncPhase), PhaseError> {
        AsyncPhase::split(&self.action_type)
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.action_type)
    }
}

/// Build the [`Action`] for a fully derived name.
///
/// Any string is accepted, the empty one included. Every call allocates a new
/// descriptor.
#[must_use]
pub fn create_action(name: impl Into<String>) -> Action {
    Action::new(name)
}
