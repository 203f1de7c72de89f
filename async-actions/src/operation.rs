use crate::set::{AsyncActionSet, create_async_actions};

/// A named asynchronous operation.
///
/// Usually derived on an enum of unit variants with
/// `#[derive(AsyncOperation)]`, which takes each base name from the variant
/// name in `camelCase` and checks at compile time that no two variants share
/// one.
///
/// A renamed variant may not repeat another variant's base name:
///
/// ```compile_fail
/// use async_actions::AsyncOperation;
///
/// #[derive(AsyncOperation)]
/// enum UserOperation {
///     FetchUser,
///     #[async_operation(rename = "fetchUser")]
///     ReloadUser,
/// }
/// ```
///
/// while any other name is accepted:
///
/// ```
/// use async_actions::AsyncOperation;
///
/// #[derive(AsyncOperation)]
/// enum UserOperation {
///     FetchUser,
///     #[async_operation(rename = "fetchUsers")]
///     ReloadUser,
/// }
///
/// assert_eq!(UserOperation::ReloadUser.base_name(), "fetchUsers");
/// ```
///
/// Variants must not carry data:
///
/// ```compile_fail
/// use async_actions::AsyncOperation;
///
/// #[derive(AsyncOperation)]
/// enum UserOperation {
///     FetchUser(u64),
/// }
/// ```
///
/// ```compile_fail
/// use async_actions::AsyncOperation;
///
/// #[derive(AsyncOperation)]
/// enum UserOperation {
///     FetchUser { id: u64 },
/// }
/// ```
///
/// Only enums with at least one variant and no generics can derive it:
///
/// ```compile_fail
/// use async_actions::AsyncOperation;
///
/// #[derive(AsyncOperation)]
/// struct FetchUser;
/// ```
///
/// ```compile_fail
/// use async_actions::AsyncOperation;
///
/// #[derive(AsyncOperation)]
/// enum UserOperation {}
/// ```
///
/// ```compile_fail
/// use async_actions::AsyncOperation;
///
/// #[derive(AsyncOperation)]
/// enum UserOperation<T> {
///     FetchUser,
///     Unused(std::marker::PhantomData<T>),
/// }
/// ```
///
/// ```compile_fail
/// use async_actions::AsyncOperation;
///
/// #[derive(AsyncOperation)]
/// enum UserOperation<'a> {
///     FetchUser,
/// }
/// ```
///
/// `rename` is the only attribute key and takes a string literal:
///
/// ```compile_fail
/// use async_actions::AsyncOperation;
///
/// #[derive(AsyncOperation)]
/// enum UserOperation {
///     #[async_operation(foo = "x")]
///     FetchUser,
/// }
/// ```
///
/// ```compile_fail
/// use async_actions::AsyncOperation;
///
/// #[derive(AsyncOperation)]
/// enum UserOperation {
///     #[async_operation(rename = fetch_user)]
///     FetchUser,
/// }
/// ```
pub trait AsyncOperation {
    /// Root name the phase suffixes are appended to.
    fn base_name(&self) -> &'static str;

    /// Build a fresh [`AsyncActionSet`] for this operation.
    fn async_actions(&self) -> AsyncActionSet {
        create_async_actions(self.base_name())
    }
}
