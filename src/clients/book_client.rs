use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::book_actor::BookError;
use crate::domain::{Book, BookCreate, BookPatch};

/// Client for the book store actor.
#[derive(Clone)]
pub struct BookClient {
    inner: ResourceClient<Book>,
}

impl_basic_client!(BookClient, Book, BookError, book);

impl BookClient {
    #[instrument(skip(self, payload))]
    pub async fn create_book(&self, payload: BookCreate) -> Result<u64, BookError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(BookError::from)
    }

    #[instrument(skip(self, payload))]
    #[allow(dead_code)]
    pub async fn replace_book(&self, id: u64, payload: BookCreate) -> Result<Book, BookError> {
        debug!("Sending request");
        self.inner.replace(id, payload).await.map_err(BookError::from)
    }

    /// Applies a raw partial-update payload to the stored book, decoding it
    /// into a typed patch before anything reaches the actor.
    #[instrument(skip(self, payload))]
    pub async fn patch_book(
        &self,
        id: u64,
        payload: Map<String, Value>,
    ) -> Result<Book, BookError> {
        let patch = BookPatch::from_payload(payload)?;
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(BookError::from)
    }
}
