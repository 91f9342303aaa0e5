//! Comment service.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Comment, CommentPatch, NewComment};
use crate::error::{AppError, Result};
use crate::service::ensure_exists;
use crate::storage::Database;

/// Service for comment resources.
pub struct CommentService {
    db: Arc<Database>,
}

impl CommentService {
    /// Create a new comment service.
    #[must_use]
    pub const fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// All comments in key order.
    pub async fn list(&self) -> Vec<Comment> {
        self.db.read(|ds| ds.comments.list()).await
    }

    /// Look up a comment; `None` when absent.
    pub async fn get(&self, id: i64) -> Option<Comment> {
        self.db.read(|ds| ds.comments.get(id).cloned()).await
    }

    /// Comments on one post.
    pub async fn by_post(&self, post_id: i64) -> Vec<Comment> {
        self.db
            .read(|ds| ds.comments.filter(|c| c.post_id == post_id))
            .await
    }

    /// Create a comment on an existing post.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` if `postId` does not exist, or a storage error.
    pub async fn create(&self, input: NewComment) -> Result<Comment> {
        let comment = self
            .db
            .write(|ds| {
                ensure_exists(&ds.posts, input.post_id)?;
                Ok::<_, AppError>(ds.comments.insert(input.into()))
            })
            .await?;

        info!(comment_id = comment.id, post_id = comment.post_id, "Comment created");
        Ok(comment)
    }

    /// Apply a partial update; `None` when the comment does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` if a supplied `postId` does not exist, or a storage error.
    pub async fn update(&self, id: i64, patch: CommentPatch) -> Result<Option<Comment>> {
        self.db
            .modify(|ds| -> Result<Option<Comment>> {
                let Some(mut comment) = ds.comments.get(id).cloned() else {
                    return Ok(None);
                };
                if let Some(post_id) = patch.post_id {
                    ensure_exists(&ds.posts, post_id)?;
                }

                patch.apply(&mut comment);
                ds.comments.replace(comment.clone());
                Ok(Some(comment))
            })
            .await
    }

    /// Delete a comment; `false` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let removed = self
            .db
            .modify(|ds| Ok::<_, AppError>(ds.comments.remove(id)))
            .await?;

        if removed.is_some() {
            info!(comment_id = id, "Comment deleted");
        }
        Ok(removed.is_some())
    }
}
