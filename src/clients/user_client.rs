use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{User, UserCreate, UserPatch};
use crate::user_actor::UserError;

/// Client for the user store actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, user);

impl UserClient {
    #[instrument(skip(self, payload))]
    pub async fn create_user(&self, payload: UserCreate) -> Result<u64, UserError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(UserError::from)
    }

    /// Full update: the stored user is rebuilt from the payload under the
    /// same id.
    #[instrument(skip(self, payload))]
    #[allow(dead_code)]
    pub async fn replace_user(&self, id: u64, payload: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.replace(id, payload).await.map_err(UserError::from)
    }

    /// Applies a raw partial-update payload to the stored user.
    ///
    /// The payload is decoded into a typed patch here, at the transport
    /// boundary; decode failures (identity key, unknown field, mistyped
    /// value) are returned without consulting the store.
    #[instrument(skip(self, payload))]
    pub async fn patch_user(
        &self,
        id: u64,
        payload: Map<String, Value>,
    ) -> Result<User, UserError> {
        let patch = UserPatch::from_payload(payload)?;
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(UserError::from)
    }
}
