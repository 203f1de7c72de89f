#![doc = include_str!("../README.md")]

pub mod action;
pub mod errors;
pub mod operation;
pub mod phase;
pub mod set;
pub mod utils;

pub use action::{Action, create_action};
#[cfg(feature = "derive")]
pub use async_actions_derive::*;
pub use errors::PhaseError;
pub use operation::AsyncOperation;
pub use phase::AsyncPhase;
pub use set::{AsyncActionSet, create_async_actions};
