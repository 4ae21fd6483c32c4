use common::login::LoginFailure;

#[derive(Default)]
pub struct LoginComponent {
    pub email: String,
    pub password: String,
    pub error: Option<LoginFailure>,
    /// The login request is in flight; the submit button is disabled.
    pub pending: bool,
}
