//! User service.
//!
//! Owns the uniqueness rules for email and username and the cascade that
//! removes a user's posts, comments, albums, photos and todos with it.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Album, NewUser, Post, Todo, User, UserPatch};
use crate::error::{AppError, Result};
use crate::storage::{Database, Dataset};

/// Service for user resources.
pub struct UserService {
    db: Arc<Database>,
}

impl UserService {
    /// Create a new user service.
    #[must_use]
    pub const fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// All users in key order.
    pub async fn list(&self) -> Vec<User> {
        self.db.read(|ds| ds.users.list()).await
    }

    /// Look up a user; `None` when absent.
    pub async fn get(&self, id: i64) -> Option<User> {
        self.db.read(|ds| ds.users.get(id).cloned()).await
    }

    /// Create a user.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKey` if the email or username is taken, or a storage error.
    pub async fn create(&self, input: NewUser) -> Result<User> {
        let user = self
            .db
            .write(|ds| {
                ensure_unique(
                    ds,
                    None,
                    Some(input.email.as_str()),
                    Some(input.username.as_str()),
                )?;
                Ok::<_, AppError>(ds.users.insert(input.into()))
            })
            .await?;

        info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }

    /// Apply a partial update; `None` when the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKey` if a supplied email or username belongs to
    /// another user, or a storage error.
    pub async fn update(&self, id: i64, patch: UserPatch) -> Result<Option<User>> {
        self.db
            .modify(|ds| -> Result<Option<User>> {
                let Some(mut user) = ds.users.get(id).cloned() else {
                    return Ok(None);
                };
                ensure_unique(ds, Some(id), patch.email.as_deref(), patch.username.as_deref())?;

                patch.apply(&mut user);
                ds.users.replace(user.clone());
                Ok(Some(user))
            })
            .await
    }

    /// Delete a user and everything it owns; `false` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let removed = self
            .db
            .modify(|ds| Ok::<_, AppError>(ds.remove_user(id)))
            .await?;

        let Some(removed) = removed else {
            return Ok(false);
        };

        info!(
            user_id = id,
            posts = removed.posts,
            comments = removed.comments,
            albums = removed.albums,
            photos = removed.photos,
            todos = removed.todos,
            total = removed.total(),
            "User deleted"
        );
        Ok(true)
    }

    /// Posts written by the user; empty when the user does not exist.
    pub async fn posts(&self, user_id: i64) -> Vec<Post> {
        self.db
            .read(|ds| ds.posts.filter(|p| p.user_id == user_id))
            .await
    }

    /// Albums owned by the user.
    pub async fn albums(&self, user_id: i64) -> Vec<Album> {
        self.db
            .read(|ds| ds.albums.filter(|a| a.user_id == user_id))
            .await
    }

    /// Todos owned by the user.
    pub async fn todos(&self, user_id: i64) -> Vec<Todo> {
        self.db
            .read(|ds| ds.todos.filter(|t| t.user_id == user_id))
            .await
    }
}

/// Reject an email or username already used by a user other than `except`.
///
/// Both comparisons ignore ASCII case.
fn ensure_unique(
    ds: &Dataset,
    except: Option<i64>,
    email: Option<&str>,
    username: Option<&str>,
) -> Result<()> {
    let mut others = ds.users.iter().filter(|u| Some(u.id) != except);

    if let Some(email) = email
        && others.clone().any(|u| u.email.eq_ignore_ascii_case(email))
    {
        return Err(AppError::DuplicateKey {
            field: "email",
            value: email.to_string(),
        });
    }

    if let Some(username) = username
        && others.any(|u| u.username.eq_ignore_ascii_case(username))
    {
        return Err(AppError::DuplicateKey {
            field: "username",
            value: username.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Comment, NewAlbum, NewComment, NewPost, NewTodo};
    use crate::service::{AlbumService, CommentService, PostService, TodoService};

    fn new_user(username: &str) -> NewUser {
        NewUser {
            name: format!("{username} Example"),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            ..Default::default()
        }
    }

    fn create_test_service() -> (UserService, Arc<Database>) {
        let db = Arc::new(Database::in_memory());
        (UserService::new(Arc::clone(&db)), db)
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let (service, _db) = create_test_service();

        let created = service.create(new_user("Bret")).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(service.get(created.id).await, Some(created.clone()));

        let second = service.create(new_user("Antonette")).await.unwrap();
        assert_ne!(second.id, created.id);
        assert_eq!(service.list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let (service, _db) = create_test_service();
        let first = service.create(new_user("Bret")).await.unwrap();

        let mut clash = new_user("Other");
        clash.email = "BRET@example.com".to_string();
        let result = service.create(clash).await;

        assert!(matches!(
            result,
            Err(AppError::DuplicateKey { field: "email", .. })
        ));
        assert_eq!(service.get(first.id).await, Some(first));
        assert_eq!(service.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let (service, _db) = create_test_service();
        service.create(new_user("Bret")).await.unwrap();

        let mut clash = new_user("Bret");
        clash.email = "someone.else@example.com".to_string();
        let result = service.create(clash).await;

        assert!(matches!(
            result,
            Err(AppError::DuplicateKey {
                field: "username",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_update_partial() {
        let (service, _db) = create_test_service();
        let user = service.create(new_user("Bret")).await.unwrap();

        let patch = UserPatch {
            name: Some("Leanne Graham".to_string()),
            ..Default::default()
        };
        let updated = service.update(user.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.name, "Leanne Graham");
        assert_eq!(updated.email, user.email);
        assert_eq!(service.get(user.id).await, Some(updated));
    }

    #[tokio::test]
    async fn test_empty_update_is_identity() {
        let (service, _db) = create_test_service();
        let user = service.create(new_user("Bret")).await.unwrap();

        let updated = service
            .update(user.id, UserPatch::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated, user);
    }

    #[tokio::test]
    async fn test_update_keeps_own_email() {
        let (service, _db) = create_test_service();
        let user = service.create(new_user("Bret")).await.unwrap();
        let other = service.create(new_user("Antonette")).await.unwrap();

        let same = UserPatch {
            email: Some(user.email.clone()),
            ..Default::default()
        };
        assert!(service.update(user.id, same).await.is_ok());

        let taken = UserPatch {
            email: Some(other.email.clone()),
            ..Default::default()
        };
        assert!(matches!(
            service.update(user.id, taken).await,
            Err(AppError::DuplicateKey { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_missing() {
        let (service, _db) = create_test_service();
        let result = service.update(42, UserPatch::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let (service, _db) = create_test_service();
        let user = service.create(new_user("Bret")).await.unwrap();

        assert!(service.delete(user.id).await.unwrap());
        assert!(service.get(user.id).await.is_none());
        assert!(!service.delete(user.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_cascades() {
        let (service, db) = create_test_service();
        let posts = PostService::new(Arc::clone(&db));
        let comments = CommentService::new(Arc::clone(&db));
        let albums = AlbumService::new(Arc::clone(&db));
        let todos = TodoService::new(Arc::clone(&db));

        let user = service.create(new_user("Bret")).await.unwrap();
        let keeper = service.create(new_user("Antonette")).await.unwrap();

        for title in ["first", "second"] {
            let post = posts
                .create(NewPost {
                    user_id: user.id,
                    title: title.to_string(),
                    body: "body".to_string(),
                })
                .await
                .unwrap();
            comments
                .create(NewComment {
                    post_id: post.id,
                    name: "reply".to_string(),
                    email: "reply@example.com".to_string(),
                    body: "body".to_string(),
                })
                .await
                .unwrap();
        }
        albums
            .create(NewAlbum {
                user_id: user.id,
                title: "album".to_string(),
            })
            .await
            .unwrap();
        todos
            .create(NewTodo {
                user_id: keeper.id,
                title: "unrelated".to_string(),
                completed: false,
            })
            .await
            .unwrap();

        assert!(service.delete(user.id).await.unwrap());

        assert!(posts.list().await.is_empty());
        let remaining: Vec<Comment> = comments.list().await;
        assert!(remaining.is_empty());
        assert!(albums.list().await.is_empty());
        assert_eq!(todos.list().await.len(), 1);
        assert!(service.get(keeper.id).await.is_some());
    }

    #[tokio::test]
    async fn test_relationship_accessors() {
        let (service, db) = create_test_service();
        let todos = TodoService::new(Arc::clone(&db));

        let a = service.create(new_user("Bret")).await.unwrap();
        let b = service.create(new_user("Antonette")).await.unwrap();
        for (user_id, title) in [(a.id, "one"), (b.id, "two"), (a.id, "three")] {
            todos
                .create(NewTodo {
                    user_id,
                    title: title.to_string(),
                    completed: false,
                })
                .await
                .unwrap();
        }

        let titles: Vec<_> = service
            .todos(a.id)
            .await
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, ["one", "three"]);
        assert!(service.posts(a.id).await.is_empty());
        assert!(service.albums(99_999).await.is_empty());
    }
}
