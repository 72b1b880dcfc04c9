use crate::actor_framework::Entity;
use crate::domain::{Book, BookCreate, BookPatch};
use crate::patch::PatchError;

impl Entity for Book {
    type Id = u64;
    type CreatePayload = BookCreate;
    type Patch = BookPatch;

    fn id(&self) -> &u64 {
        &self.id
    }

    fn from_create(id: u64, payload: BookCreate) -> Result<Self, PatchError> {
        let book = Self {
            id,
            title: payload.title,
            author: payload.author,
            published: payload.published,
        };
        book.validate()?;
        Ok(book)
    }

    /// The optional fields use double-`Option` slots, so a patch can clear
    /// `author` or `published` as well as set them.
    fn apply_patch(&self, patch: &BookPatch) -> Result<Self, PatchError> {
        let mut next = self.clone();
        if let Some(title) = &patch.title {
            next.title = title.clone();
        }
        if let Some(author) = &patch.author {
            next.author = author.clone();
        }
        if let Some(published) = patch.published {
            next.published = published;
        }
        next.validate()?;
        Ok(next)
    }
}
