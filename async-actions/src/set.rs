use tracing::trace;

use crate::{
    action::{Action, create_action},
    phase::AsyncPhase,
};

/// The busy/success/error descriptors of one asynchronous operation.
///
/// Built fresh by [`create_async_actions`]; fields are never shared with
/// another set, even one built from the same base name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsyncActionSet {
    pub success: Action,
    pub error: Action,
    pub busy: Action,
}

impl AsyncActionSet {
    #[must_use]
    pub fn new(base_name: &str) -> Self {
        create_async_actions(base_name)
    }

    #[must_use]
    pub const fn get(&self, phase: AsyncPhase) -> &Action {
        match phase {
            AsyncPhase::Success => &self.success,
            AsyncPhase::Error => &self.error,
            AsyncPhase::Busy => &self.busy,
        }
    }

    /// Iterate over the descriptors in field order: success, error, busy.
    pub fn iter(&self) -> impl Iterator<Item = (AsyncPhase, &Action)> {
        AsyncPhase::ALL
            .into_iter()
            .map(move |phase| (phase, self.get(phase)))
    }

    /// The phase whose descriptor equals `action`, if any.
    #[must_use]
    pub fn phase_of(&self, action: &Action) -> Option<AsyncPhase> {
        self.iter()
            .find_map(|(phase, candidate)| (candidate == action).then_some(phase))
    }

    /// The base name the set was built from.
    ///
    /// Sets assembled by hand with a `success` action that lacks the suffix
    /// yield its whole action type.
    #[must_use]
    pub fn base_name(&self) -> &str {
        let action_type = self.success.action_type();
        action_type
            .strip_suffix(AsyncPhase::Success.suffix())
            .unwrap_or(action_type)
    }
}

/// Build the [`AsyncActionSet`] for `base_name`.
///
/// Each descriptor is built with [`create_action`] from `base_name` followed by
/// the phase suffix. Any string is accepted; an empty base name yields the bare
/// suffixes.
#[cfg_attr(feature = "instrumentation", tracing::instrument(level = "trace"))]
#[must_use]
pub fn create_async_actions(base_name: &str) -> AsyncActionSet {
    trace!(base_name, "Creating async action set.");
    AsyncActionSet {
        success: create_action(AsyncPhase::Success.derive_name(base_name)),
        error: create_action(AsyncPhase::Error.derive_name(base_name)),
        busy: create_action(AsyncPhase::Busy.derive_name(base_name)),
    }
}
