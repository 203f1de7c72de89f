use async_actions::AsyncOperation as _;
use serde_json::{Value, json};
use tokio::sync::mpsc::{self, Sender};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::{messages::Dispatched, operations::UserOperation};

mod messages;
mod operations;
mod store;

const CHANNEL_CAPACITY: usize = 16;

async fn dispatch(sender: &Sender<Dispatched>, message: Dispatched) {
    if let Err(error) = sender.send(message).await {
        warn!(action = %error.0.action, "Store is gone, dropping action.");
    }
}

#[tokio::main]
async fn main() -> Result<(), serde_json::Error> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    for operation in UserOperation::OPERATIONS {
        let actions = serde_json::to_string(&operation.async_actions())?;
        info!(?operation, %actions, "Registered operation.");
    }

    let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);
    let store = tokio::spawn(store::run(receiver));

    let requests: Vec<_> = UserOperation::OPERATIONS
        .iter()
        .map(|&operation| {
            let sender = sender.clone();
            tokio::spawn(async move {
                let actions = operation.async_actions();
                dispatch(&sender, Dispatched::new(actions.busy, Value::Null)).await;
                let message = match operation.perform().await {
                    Ok(payload) => Dispatched::new(actions.success, payload),
                    Err(error) => Dispatched::new(actions.error, json!(error.to_string())),
                };
                dispatch(&sender, message).await;
            })
        })
        .collect();
    drop(sender);

    for request in requests {
        request.await.expect("Request task should not panic.");
    }
    let phases = store.await.expect("Store task should not panic.");
    for (base_name, phase) in &phases {
        info!(base_name = base_name.as_str(), %phase, "Final phase.");
    }
    Ok(())
}
