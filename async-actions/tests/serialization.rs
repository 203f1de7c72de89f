#![cfg(feature = "serde")]

use async_actions::{AsyncActionSet, AsyncPhase, create_async_actions};

#[test]
fn set_serializes_in_field_order() {
    let json = serde_json::to_string(&create_async_actions("fetchUser")).unwrap();
    assert_eq!(
        json,
        r#"{"success":{"type":"fetchUsersuccess"},"error":{"type":"fetchUsererror"},"busy":{"type":"fetchUserbusy"}}"#
    );
}

#[test]
fn set_deserializes() {
    let json = r#"{"success":{"type":"savesuccess"},"error":{"type":"saveerror"},"busy":{"type":"savebusy"}}"#;
    let actions: AsyncActionSet = serde_json::from_str(json).unwrap();
    assert_eq!(actions, create_async_actions("save"));
}

#[test]
fn phase_serializes_as_suffix() {
    assert_eq!(serde_json::to_string(&AsyncPhase::Busy).unwrap(), r#""busy""#);
    let phase: AsyncPhase = serde_json::from_str(r#""error""#).unwrap();
    assert_eq!(phase, AsyncPhase::Error);
}
