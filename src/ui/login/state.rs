use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    /// A sign-in request is in flight; input is ignored until it resolves.
    pub submitting: bool,
    pub error: Option<String>,
}

impl UiState for LoginState {}

impl LoginState {
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.email.is_empty() && !self.password.is_empty()
    }
}
