use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::{LoginField, LoginState};
use crate::ui::mvi::Reducer;

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Intent = LoginIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::Input(ch) => {
                if state.submitting {
                    return state;
                }
                let mut next = state;
                match next.focus {
                    LoginField::Email => next.email.push(ch),
                    LoginField::Password => next.password.push(ch),
                }
                next.error = None;
                next
            }
            LoginIntent::Backspace => {
                if state.submitting {
                    return state;
                }
                let mut next = state;
                match next.focus {
                    LoginField::Email => {
                        next.email.pop();
                    }
                    LoginField::Password => {
                        next.password.pop();
                    }
                }
                next
            }
            LoginIntent::SwitchField => {
                if state.submitting {
                    return state;
                }
                let focus = match state.focus {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                };
                LoginState { focus, ..state }
            }
            LoginIntent::Submitting => LoginState {
                submitting: true,
                error: None,
                ..state
            },
            LoginIntent::Failed { message } => LoginState {
                submitting: false,
                password: String::new(),
                error: Some(message),
                ..state
            },
            LoginIntent::Reset => LoginState::default(),
            LoginIntent::SessionExpired => LoginState {
                error: Some("Session expired. Please sign in again.".to_string()),
                ..LoginState::default()
            },
        }
    }
}
