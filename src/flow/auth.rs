//! Sign-in and sign-up.

use std::fmt;

use crate::api::{ApiClient, FlowError, Transport, LOGIN_PATH, USER_PATH};
use crate::loading::LoadingGuard;
use crate::model::{Credentials, NewUser, User};

/// Which half of the login form is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    SignIn,
    SignUp,
}

impl FormMode {
    pub fn toggle(&mut self) {
        *self = match self {
            FormMode::SignIn => FormMode::SignUp,
            FormMode::SignUp => FormMode::SignIn,
        };
    }

    /// Submit button label.
    pub fn title(self) -> &'static str {
        match self {
            FormMode::SignIn => "Sign In",
            FormMode::SignUp => "Register",
        }
    }

    /// Label of the control that switches to the other mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            FormMode::SignIn => "Sign Up",
            FormMode::SignUp => "Sign In",
        }
    }
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormMode::SignIn => write!(f, "Sign In"),
            FormMode::SignUp => write!(f, "Sign Up"),
        }
    }
}

/// Payload for one auth submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    SignIn(Credentials),
    SignUp(NewUser),
}

impl AuthRequest {
    pub fn mode(&self) -> FormMode {
        match self {
            AuthRequest::SignIn(_) => FormMode::SignIn,
            AuthRequest::SignUp(_) => FormMode::SignUp,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            AuthRequest::SignIn(_) => LOGIN_PATH,
            AuthRequest::SignUp(_) => USER_PATH,
        }
    }
}

/// Login screen fields. Both halves keep their input across mode switches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub mode: FormMode,
    pub credentials: Credentials,
    pub new_user: NewUser,
}

impl LoginForm {
    pub fn request(&self) -> AuthRequest {
        match self.mode {
            FormMode::SignIn => AuthRequest::SignIn(self.credentials.clone()),
            FormMode::SignUp => AuthRequest::SignUp(self.new_user.clone()),
        }
    }
}

pub struct AuthFlow<T> {
    client: ApiClient<T>,
}

impl<T: Transport> AuthFlow<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// Sign in or sign up, returning the authenticated user.
    ///
    /// Overlapping calls are allowed; `loading` only counts them.
    pub async fn submit(
        &self,
        loading: &LoadingGuard,
        request: AuthRequest,
    ) -> Result<User, FlowError> {
        let _busy = loading.track();

        let mode = request.mode();
        let builder = self.client.requests().post(request.path(), None);
        let api_request = match &request {
            AuthRequest::SignIn(credentials) => builder.json(credentials)?,
            AuthRequest::SignUp(new_user) => builder.json(new_user)?,
        };

        match self.client.call::<User>(api_request).await {
            Ok(envelope) => {
                tracing::info!(%mode, username = %envelope.data.username, message = %envelope.message, "authenticated");
                Ok(envelope.data)
            }
            Err(err) => {
                tracing::info!(%mode, error_type = err.error_type(), "authentication failed");
                Err(err)
            }
        }
    }
}
