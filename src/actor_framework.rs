use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::patch::PatchError;

// =============================================================================
// 1. THE ABSTRACTION (Entity trait)
// =============================================================================

/// Trait any domain record must implement to be managed by a
/// [`ResourceActor`].
///
/// A record has a stable identity, a payload it is constructed from, and a
/// typed partial update. Both construction and patch application run the
/// record's validation rules, so the store never holds an invalid record.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    /// The record's identity. Immutable once assigned by the store.
    fn id(&self) -> &Self::Id;

    /// Constructs and validates a full record from an assigned id and a
    /// create payload.
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, PatchError>;

    /// Pure merge-patch: returns a new record with the patch's fields
    /// overlaid on `self`, re-validated. The base record is never mutated
    /// and its identity always carries over.
    fn apply_patch(&self, patch: &Self::Patch) -> Result<Self, PatchError>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

/// Store-level failures shared by every resource actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("record not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Patch(#[from] PatchError),
    #[error("actor channel closed")]
    ChannelClosed,
    #[error("actor dropped the response")]
    ResponseDropped,
}

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    /// Full update: rebuild the record from a create payload, keeping the
    /// stored id.
    Replace {
        id: T::Id,
        payload: T::CreatePayload,
        respond_to: Response<T>,
    },
    /// Partial update: find, apply the typed patch, store the result.
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns an in-memory record store and serializes all access to it through
/// its mailbox. A single `Update` is therefore atomic with respect to other
/// requests for the same entity type; a caller-side get-then-replace
/// sequence is not, and can lose updates.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs until every client channel is dropped.
    pub async fn run(mut self) {
        info!("Resource actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let id = (self.next_id_fn)();
                    let result = T::from_create(id.clone(), payload).map(|item| {
                        self.store.insert(id.clone(), item);
                        id
                    });
                    let _ = respond_to.send(result.map_err(FrameworkError::from));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let mut items: Vec<T> = self.store.values().cloned().collect();
                    items.sort_by(|a, b| a.id().cmp(b.id()));
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Replace { id, payload, respond_to } => {
                    let result = if self.store.contains_key(&id) {
                        T::from_create(id.clone(), payload)
                            .map(|item| {
                                self.store.insert(id, item.clone());
                                item
                            })
                            .map_err(FrameworkError::from)
                    } else {
                        Err(FrameworkError::NotFound(id.to_string()))
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let result = match self.store.get(&id).cloned() {
                        Some(base) => base
                            .apply_patch(&patch)
                            .map(|patched| {
                                self.store.insert(id, patched.clone());
                                patched
                            })
                            .map_err(FrameworkError::from),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let result = match self.store.remove(&id) {
                        Some(_) => Ok(()),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
            }
        }
        debug!("Resource actor stopped");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<R>(
        &self,
        make_request: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make_request(respond_to))
            .await
            .map_err(|_| FrameworkError::ChannelClosed)?;
        response.await.map_err(|_| FrameworkError::ResponseDropped)?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T::Id, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Create { payload, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn replace(&self, id: T::Id, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Replace { id, payload, respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.call(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u64,
        body: String,
        pinned: bool,
    }

    #[derive(Debug)]
    struct NoteCreate {
        body: String,
    }

    #[derive(Debug, Default)]
    struct NotePatch {
        body: Option<String>,
        pinned: Option<bool>,
    }

    impl Entity for Note {
        type Id = u64;
        type CreatePayload = NoteCreate;
        type Patch = NotePatch;

        fn id(&self) -> &u64 {
            &self.id
        }

        fn from_create(id: u64, payload: NoteCreate) -> Result<Self, PatchError> {
            let note = Self {
                id,
                body: payload.body,
                pinned: false,
            };
            if note.body.is_empty() {
                return Err(PatchError::ValidationFailed {
                    field: "body",
                    reason: "must not be empty".to_string(),
                });
            }
            Ok(note)
        }

        fn apply_patch(&self, patch: &NotePatch) -> Result<Self, PatchError> {
            let mut next = self.clone();
            if let Some(body) = &patch.body {
                next.body = body.clone();
            }
            if let Some(pinned) = patch.pinned {
                next.pinned = pinned;
            }
            if next.body.is_empty() {
                return Err(PatchError::ValidationFailed {
                    field: "body",
                    reason: "must not be empty".to_string(),
                });
            }
            Ok(next)
        }
    }

    fn spawn_note_actor() -> ResourceClient<Note> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || counter.fetch_add(1, Ordering::SeqCst);
        let (actor, client) = ResourceActor::<Note>::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn create_get_update_roundtrip() {
        let client = spawn_note_actor();

        let id = client
            .create(NoteCreate { body: "buy milk".to_string() })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let patched = client
            .update(id, NotePatch { pinned: Some(true), ..NotePatch::default() })
            .await
            .unwrap();
        assert!(patched.pinned);
        assert_eq!(patched.body, "buy milk");

        let stored = client.get(id).await.unwrap().unwrap();
        assert_eq!(stored, patched);
    }

    #[tokio::test]
    async fn update_of_missing_record_fails_not_found() {
        let client = spawn_note_actor();
        let err = client.update(99, NotePatch::default()).await.unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("99".to_string()));
    }

    #[tokio::test]
    async fn rejected_patch_leaves_store_untouched() {
        let client = spawn_note_actor();
        let id = client
            .create(NoteCreate { body: "keep me".to_string() })
            .await
            .unwrap();

        let err = client
            .update(id, NotePatch { body: Some(String::new()), ..NotePatch::default() })
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::Patch(_)));

        let stored = client.get(id).await.unwrap().unwrap();
        assert_eq!(stored.body, "keep me");
    }

    #[tokio::test]
    async fn replace_keeps_the_stored_id() {
        let client = spawn_note_actor();
        let id = client
            .create(NoteCreate { body: "v1".to_string() })
            .await
            .unwrap();

        let replaced = client
            .replace(id, NoteCreate { body: "v2".to_string() })
            .await
            .unwrap();
        assert_eq!(replaced.id, id);
        assert_eq!(replaced.body, "v2");

        let err = client
            .replace(42, NoteCreate { body: "ghost".to_string() })
            .await
            .unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("42".to_string()));
    }

    #[tokio::test]
    async fn list_and_delete() {
        let client = spawn_note_actor();
        for body in ["a", "b", "c"] {
            client.create(NoteCreate { body: body.to_string() }).await.unwrap();
        }
        assert_eq!(client.list().await.unwrap().len(), 3);

        client.delete(2).await.unwrap();
        assert_eq!(client.list().await.unwrap().len(), 2);
        assert_eq!(client.get(2).await.unwrap(), None);

        let err = client.delete(2).await.unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("2".to_string()));
    }
}
