//! Post service.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Comment, NewPost, Post, PostPatch, PostWithComments};
use crate::error::{AppError, Result};
use crate::service::ensure_exists;
use crate::storage::Database;

/// Service for post resources.
pub struct PostService {
    db: Arc<Database>,
}

impl PostService {
    /// Create a new post service.
    #[must_use]
    pub const fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// All posts in key order.
    pub async fn list(&self) -> Vec<Post> {
        self.db.read(|ds| ds.posts.list()).await
    }

    /// Look up a post; `None` when absent.
    pub async fn get(&self, id: i64) -> Option<Post> {
        self.db.read(|ds| ds.posts.get(id).cloned()).await
    }

    /// Create a post for an existing user.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` if `userId` does not exist, or a storage error.
    pub async fn create(&self, input: NewPost) -> Result<Post> {
        let post = self
            .db
            .write(|ds| {
                ensure_exists(&ds.users, input.user_id)?;
                Ok::<_, AppError>(ds.posts.insert(input.into()))
            })
            .await?;

        info!(post_id = post.id, user_id = post.user_id, "Post created");
        Ok(post)
    }

    /// Apply a partial update; `None` when the post does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` if a supplied `userId` does not exist, or a storage error.
    pub async fn update(&self, id: i64, patch: PostPatch) -> Result<Option<Post>> {
        self.db
            .modify(|ds| -> Result<Option<Post>> {
                let Some(mut post) = ds.posts.get(id).cloned() else {
                    return Ok(None);
                };
                if let Some(user_id) = patch.user_id {
                    ensure_exists(&ds.users, user_id)?;
                }

                patch.apply(&mut post);
                ds.posts.replace(post.clone());
                Ok(Some(post))
            })
            .await
    }

    /// Delete a post and its comments; `false` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let removed = self
            .db
            .modify(|ds| Ok::<_, AppError>(ds.remove_post(id)))
            .await?;

        if let Some(removed) = removed {
            info!(post_id = id, comments = removed.comments, "Post deleted");
        }
        Ok(removed.is_some())
    }

    /// Comments on the post; empty when the post does not exist.
    pub async fn comments(&self, post_id: i64) -> Vec<Comment> {
        self.db
            .read(|ds| ds.comments.filter(|c| c.post_id == post_id))
            .await
    }

    /// The post together with its comments; `None` when the post does not exist.
    pub async fn with_comments(&self, id: i64) -> Option<PostWithComments> {
        self.db
            .read(|ds| {
                let post = ds.posts.get(id)?.clone();
                Some(PostWithComments {
                    comments: ds.comments.filter(|c| c.post_id == post.id),
                    post,
                })
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntityKind, NewComment, NewUser};
    use crate::service::{CommentService, UserService};

    struct Fixture {
        posts: PostService,
        comments: CommentService,
        user_id: i64,
    }

    async fn fixture() -> Fixture {
        let db = Arc::new(Database::in_memory());
        let user = UserService::new(Arc::clone(&db))
            .create(NewUser {
                name: "Leanne Graham".to_string(),
                username: "Bret".to_string(),
                email: "Sincere@april.biz".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        Fixture {
            posts: PostService::new(Arc::clone(&db)),
            comments: CommentService::new(db),
            user_id: user.id,
        }
    }

    fn new_post(user_id: i64, title: &str) -> NewPost {
        NewPost {
            user_id,
            title: title.to_string(),
            body: "quia et suscipit".to_string(),
        }
    }

    fn new_comment(post_id: i64) -> NewComment {
        NewComment {
            post_id,
            name: "id labore ex et quam laborum".to_string(),
            email: "Eliseo@gardner.biz".to_string(),
            body: "laudantium enim quasi".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let f = fixture().await;
        let post = f.posts.create(new_post(f.user_id, "sunt aut facere")).await.unwrap();

        assert_eq!(post.user_id, f.user_id);
        assert_eq!(f.posts.get(post.id).await, Some(post));
    }

    #[tokio::test]
    async fn test_create_with_missing_user() {
        let f = fixture().await;
        let result = f.posts.create(new_post(99_999, "orphan")).await;

        assert!(matches!(
            result,
            Err(AppError::ReferenceNotFound {
                entity: EntityKind::User,
                id: 99_999
            })
        ));
        assert!(f.posts.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_revalidates_user() {
        let f = fixture().await;
        let post = f.posts.create(new_post(f.user_id, "title")).await.unwrap();

        let patch = PostPatch {
            user_id: Some(404),
            title: Some("moved".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            f.posts.update(post.id, patch).await,
            Err(AppError::ReferenceNotFound { .. })
        ));
        assert_eq!(f.posts.get(post.id).await.unwrap().title, "title");

        let patch = PostPatch {
            body: Some("new body".to_string()),
            ..Default::default()
        };
        let updated = f.posts.update(post.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.title, "title");
        assert_eq!(updated.body, "new body");
    }

    #[tokio::test]
    async fn test_delete_cascades_to_comments() {
        let f = fixture().await;
        let doomed = f.posts.create(new_post(f.user_id, "doomed")).await.unwrap();
        let kept = f.posts.create(new_post(f.user_id, "kept")).await.unwrap();
        f.comments.create(new_comment(doomed.id)).await.unwrap();
        let survivor = f.comments.create(new_comment(kept.id)).await.unwrap();

        assert!(f.posts.delete(doomed.id).await.unwrap());
        assert!(f.posts.get(doomed.id).await.is_none());
        assert_eq!(f.comments.list().await, vec![survivor]);
        assert!(!f.posts.delete(doomed.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_with_comments() {
        let f = fixture().await;
        let post = f.posts.create(new_post(f.user_id, "title")).await.unwrap();
        let c1 = f.comments.create(new_comment(post.id)).await.unwrap();
        let c2 = f.comments.create(new_comment(post.id)).await.unwrap();

        let view = f.posts.with_comments(post.id).await.unwrap();
        assert_eq!(view.post, post);
        assert_eq!(view.comments, vec![c1, c2]);
        assert_eq!(f.posts.comments(post.id).await.len(), 2);

        assert!(f.posts.with_comments(404).await.is_none());
        assert!(f.posts.comments(404).await.is_empty());
    }
}
