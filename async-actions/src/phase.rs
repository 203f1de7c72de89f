use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::errors::PhaseError;

/// One of the three phases of an asynchronous operation.
///
/// The phase suffixes end in different characters, so a derived name ends
/// with at most one of them and splitting it back is unambiguous.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AsyncPhase {
    /// The operation completed.
    Success,
    /// The operation failed.
    Error,
    /// The operation is in flight.
    Busy,
}

impl AsyncPhase {
    /// Every phase, in the field order of
    /// [`AsyncActionSet`](crate::set::AsyncActionSet).
    pub const ALL: [Self; 3] = [Self::Success, Self::Error, Self::Busy];

    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Busy => "busy",
        }
    }

    /// Append this phase's suffix to `base_name`.
    #[must_use]
    pub fn derive_name(self, base_name: &str) -> String {
        let suffix = self.suffix();
        let mut name = String::with_capacity(base_name.len() + suffix.len());
        name.push_str(base_name);
        name.push_str(suffix);
        name
    }

    /// Split a derived name into its base name and phase.
    ///
    /// # Errors
    ///
    /// [`PhaseError::MissingSuffix`] if `name` does not end with a phase suffix.
    pub fn split(name: &str) -> Result<(&str, Self), PhaseError> {
        Self::ALL
            .into_iter()
            .find_map(|phase| {
                name.strip_suffix(phase.suffix())
                    .map(|base_name| (base_name, phase))
            })
            .ok_or_else(|| PhaseError::MissingSuffix(name.to_owned()))
    }
}

impl Display for AsyncPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for AsyncPhase {
    type Err = PhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|phase| phase.suffix() == s)
            .ok_or_else(|| PhaseError::UnknownPhase(s.to_owned()))
    }
}
