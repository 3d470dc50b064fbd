use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    Input(char),
    Backspace,
    /// Tab between the email and password fields.
    SwitchField,
    /// Submit was accepted and a request is in flight.
    Submitting,
    /// The backend rejected the sign-in.
    Failed { message: String },
    /// Sign-in succeeded; reset the form for next time.
    Reset,
    /// The stored session died; show why the user is back here.
    SessionExpired,
}

impl Intent for LoginIntent {}
