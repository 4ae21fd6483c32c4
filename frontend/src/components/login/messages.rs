use common::login::LoginFailure;

pub enum Msg {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    /// Page to navigate to, or the failure to display.
    Finished(Result<&'static str, LoginFailure>),
}
