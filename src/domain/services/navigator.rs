/// Route of the login screen, the only destination this workflow uses.
/// The host surface also links here for users who already have an account.
pub const LOGIN_ROUTE: &str = "/login";

/// Takes the user to another screen. The host shell decides what a route
/// change actually means (swap a view, push history, close a window).
pub trait Navigator: Send + Sync {
    fn go_to(&self, path: &str);
}
