use async_actions::{AsyncOperation, AsyncPhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsyncOperation)]
enum UserOperation {
    FetchUser, // Base name follows the variant name
    #[async_operation(rename = "profile/save")]
    SaveProfile, // Base name is set explicitly
    #[async_operation(rename = "")]
    Anonymous,
    Load,
}

#[test]
fn base_names() {
    assert_eq!(UserOperation::FetchUser.base_name(), "fetchUser");
    assert_eq!(UserOperation::SaveProfile.base_name(), "profile/save");
    assert_eq!(UserOperation::Anonymous.base_name(), "");
    assert_eq!(UserOperation::Load.base_name(), "load");
}

#[test]
fn operations_in_declaration_order() {
    assert_eq!(
        UserOperation::OPERATIONS,
        &[
            UserOperation::FetchUser,
            UserOperation::SaveProfile,
            UserOperation::Anonymous,
            UserOperation::Load,
        ]
    );
}

#[test]
fn async_actions_use_base_name() {
    let actions = UserOperation::SaveProfile.async_actions();
    assert_eq!(actions.success.action_type(), "profile/savesuccess");
    assert_eq!(actions.error.action_type(), "profile/saveerror");
    assert_eq!(actions.busy.action_type(), "profile/savebusy");

    let anonymous = UserOperation::Anonymous.async_actions();
    let names: Vec<_> = anonymous
        .iter()
        .map(|(_, action)| action.action_type().to_owned())
        .collect();
    assert_eq!(names, ["success", "error", "busy"]);
}

#[test]
fn derived_names_never_collide() {
    let mut names: Vec<String> = UserOperation::OPERATIONS
        .iter()
        .flat_map(|operation| {
            let actions = operation.async_actions();
            AsyncPhase::ALL.map(|phase| actions.get(phase).action_type().to_owned())
        })
        .collect();
    let total = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), total);
}
