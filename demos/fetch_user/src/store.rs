use std::collections::HashMap;

use async_actions::AsyncPhase;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, error, info, warn};

use crate::messages::Dispatched;

/// Folds dispatched actions into a per-operation view of the last phase seen.
pub async fn run(mut inbound: Receiver<Dispatched>) -> HashMap<String, AsyncPhase> {
    let mut phases = HashMap::new();
    while let Some(message) = inbound.recv().await {
        match serde_json::to_string(&message) {
            Ok(dispatched) => debug!(%dispatched, "Received action."),
            Err(error) => warn!(action = %message.action, %error, "Couldn't serialize action."),
        }
        let Ok((base_name, phase)) = message.action.split_phase() else {
            warn!(action = %message.action, "Ignoring action without an async phase.");
            continue;
        };
        match phase {
            AsyncPhase::Busy => info!(base_name, "Request started."),
            AsyncPhase::Success => {
                info!(base_name, payload = %message.payload, "Request succeeded.");
            }
            AsyncPhase::Error => {
                error!(base_name, payload = %message.payload, "Request failed.");
            }
        }
        phases.insert(base_name.to_owned(), phase);
    }
    phases
}

#[cfg(test)]
mod test {
    use async_actions::{AsyncPhase, create_action, create_async_actions};
    use serde_json::{Value, json};
    use tokio::sync::mpsc;

    use crate::{messages::Dispatched, store::run};

    #[tokio::test]
    async fn keeps_last_phase_per_operation() {
        let (sender, receiver) = mpsc::channel(8);
        let store = tokio::spawn(run(receiver));
        let fetch = create_async_actions("fetchUser");
        let save = create_async_actions("saveProfile");
        for message in [
            Dispatched::new(fetch.busy, Value::Null),
            Dispatched::new(save.busy, Value::Null),
            Dispatched::new(create_action("unrelated"), Value::Null),
            Dispatched::new(fetch.success, json!({ "id": 7 })),
        ] {
            sender.send(message).await.unwrap();
        }
        drop(sender);

        let phases = store.await.unwrap();
        assert_eq!(phases.len(), 2);
        assert_eq!(phases["fetchUser"], AsyncPhase::Success);
        assert_eq!(phases["saveProfile"], AsyncPhase::Busy);
    }
}
