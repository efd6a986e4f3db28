//! Profile read and update for a signed-in user.

use crate::api::{ApiClient, ApiRequest, FlowError, Transport, USER_PATH};
use crate::loading::LoadingGuard;
use crate::model::{ProfileUpdate, User};

/// Profile screen state: the held user and its busy flag.
#[derive(Debug, Clone)]
pub struct ProfileState {
    pub user: User,
    pub loading: LoadingGuard,
}

impl ProfileState {
    pub fn new(user: User) -> Self {
        Self {
            user,
            loading: LoadingGuard::new(),
        }
    }

    pub fn with_loading(user: User, loading: LoadingGuard) -> Self {
        Self { user, loading }
    }
}

pub struct ProfileFlow<T> {
    client: ApiClient<T>,
}

impl<T: Transport> ProfileFlow<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// Save edited fields. Empty strings are left out of the update.
    ///
    /// On success the held user is replaced with the server's copy and the
    /// envelope message is returned.
    pub async fn submit(
        &self,
        state: &mut ProfileState,
        edited_username: &str,
        edited_email: &str,
    ) -> Result<String, FlowError> {
        let update = ProfileUpdate::from_edits(edited_username, edited_email);
        self.patch(state, update).await
    }

    /// Set a new password; the rest of the profile is untouched.
    pub async fn change_password(
        &self,
        state: &mut ProfileState,
        password: &str,
    ) -> Result<String, FlowError> {
        self.patch(state, ProfileUpdate::password(password)).await
    }

    /// Reload the held user from the server.
    pub async fn refresh(&self, state: &mut ProfileState) -> Result<String, FlowError> {
        let loading = state.loading.clone();
        let _busy = loading.track();

        let request = self.client.requests().get(USER_PATH, Some(&state.user.token));
        self.replace_user(state, request).await
    }

    async fn patch(
        &self,
        state: &mut ProfileState,
        update: ProfileUpdate,
    ) -> Result<String, FlowError> {
        let loading = state.loading.clone();
        let _busy = loading.track();

        tracing::debug!(?update, "saving profile");
        let request = self
            .client
            .requests()
            .patch(USER_PATH, Some(&state.user.token))
            .json(&update)?;
        self.replace_user(state, request).await
    }

    async fn replace_user(
        &self,
        state: &mut ProfileState,
        request: ApiRequest,
    ) -> Result<String, FlowError> {
        match self.client.call::<User>(request).await {
            Ok(envelope) => {
                tracing::info!(username = %envelope.data.username, message = %envelope.message, "profile updated");
                state.user = envelope.data;
                Ok(envelope.message)
            }
            Err(err) => {
                tracing::info!(error_type = err.error_type(), "profile request failed");
                Err(err)
            }
        }
    }
}
