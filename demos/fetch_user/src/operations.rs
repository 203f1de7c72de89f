use std::time::Duration;

use async_actions::AsyncOperation;
use serde_json::{Value, json};
use thiserror::Error;
use tokio::time::sleep;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsyncOperation)]
pub enum UserOperation {
    FetchUser,
    SaveProfile,
}

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("profile storage is read-only")]
    ReadOnly,
}

impl UserOperation {
    /// Stand-in for the real request behind each operation.
    pub async fn perform(self) -> Result<Value, RequestError> {
        sleep(Duration::from_millis(50)).await;
        match self {
            Self::FetchUser => Ok(json!({ "id": 7, "name": "Ada" })),
            Self::SaveProfile => Err(RequestError::ReadOnly),
        }
    }
}
