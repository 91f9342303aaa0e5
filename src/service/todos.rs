//! Todo service.

use std::sync::Arc;

use tracing::info;

use crate::domain::{NewTodo, Todo, TodoPatch};
use crate::error::{AppError, Result};
use crate::service::ensure_exists;
use crate::storage::Database;

/// Service for todo resources.
pub struct TodoService {
    db: Arc<Database>,
}

impl TodoService {
    /// Create a new todo service.
    #[must_use]
    pub const fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// All todos in key order.
    pub async fn list(&self) -> Vec<Todo> {
        self.db.read(|ds| ds.todos.list()).await
    }

    /// Look up a todo; `None` when absent.
    pub async fn get(&self, id: i64) -> Option<Todo> {
        self.db.read(|ds| ds.todos.get(id).cloned()).await
    }

    /// Todos owned by one user.
    pub async fn by_user(&self, user_id: i64) -> Vec<Todo> {
        self.db
            .read(|ds| ds.todos.filter(|t| t.user_id == user_id))
            .await
    }

    /// Todos marked done.
    pub async fn completed(&self) -> Vec<Todo> {
        self.db.read(|ds| ds.todos.filter(|t| t.completed)).await
    }

    /// Todos not yet done.
    pub async fn pending(&self) -> Vec<Todo> {
        self.db.read(|ds| ds.todos.filter(|t| !t.completed)).await
    }

    /// Create a todo for an existing user.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` if `userId` does not exist, or a storage error.
    pub async fn create(&self, input: NewTodo) -> Result<Todo> {
        let todo = self
            .db
            .write(|ds| {
                ensure_exists(&ds.users, input.user_id)?;
                Ok::<_, AppError>(ds.todos.insert(input.into()))
            })
            .await?;

        info!(todo_id = todo.id, user_id = todo.user_id, "Todo created");
        Ok(todo)
    }

    /// Apply a partial update; `None` when the todo does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` if a supplied `userId` does not exist, or a storage error.
    pub async fn update(&self, id: i64, patch: TodoPatch) -> Result<Option<Todo>> {
        self.db
            .modify(|ds| -> Result<Option<Todo>> {
                let Some(mut todo) = ds.todos.get(id).cloned() else {
                    return Ok(None);
                };
                if let Some(user_id) = patch.user_id {
                    ensure_exists(&ds.users, user_id)?;
                }

                patch.apply(&mut todo);
                ds.todos.replace(todo.clone());
                Ok(Some(todo))
            })
            .await
    }

    /// Delete a todo; `false` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let removed = self
            .db
            .modify(|ds| Ok::<_, AppError>(ds.todos.remove(id)))
            .await?;

        if removed.is_some() {
            info!(todo_id = id, "Todo deleted");
        }
        Ok(removed.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewUser;
    use crate::service::UserService;
    use crate::storage::MemoryStorage;
    use crate::storage::seed::sample_dataset;

    async fn create_test_service() -> (TodoService, i64) {
        let db = Arc::new(Database::in_memory());
        let user = UserService::new(Arc::clone(&db))
            .create(NewUser {
                name: "Chelsey Dietrich".to_string(),
                username: "Kamren".to_string(),
                email: "Lucio_Hettinger@annie.ca".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        (TodoService::new(db), user.id)
    }

    fn new_todo(user_id: i64, title: &str, completed: bool) -> NewTodo {
        NewTodo {
            user_id,
            title: title.to_string(),
            completed,
        }
    }

    #[tokio::test]
    async fn test_completed_and_pending() {
        let (service, user_id) = create_test_service().await;
        let done = service.create(new_todo(user_id, "delectus aut autem", true)).await.unwrap();
        let open = service.create(new_todo(user_id, "quis ut nam facilis", false)).await.unwrap();

        assert_eq!(service.completed().await, vec![done]);
        assert_eq!(service.pending().await, vec![open]);
    }

    #[tokio::test]
    async fn test_completed_and_pending_partition_seed_data() {
        let db = Arc::new(Database::with_dataset(
            sample_dataset(),
            Arc::new(MemoryStorage::new()),
        ));
        let service = TodoService::new(db);

        let all = service.list().await;
        let completed = service.completed().await;
        let pending = service.pending().await;

        assert!(!completed.is_empty());
        assert!(!pending.is_empty());
        assert_eq!(completed.len() + pending.len(), all.len());
        assert!(completed.iter().all(|t| t.completed));
        assert!(pending.iter().all(|t| !t.completed));
    }

    #[tokio::test]
    async fn test_by_user_and_missing_user() {
        let (service, user_id) = create_test_service().await;
        service.create(new_todo(user_id, "a", false)).await.unwrap();
        service.create(new_todo(user_id, "b", true)).await.unwrap();

        assert_eq!(service.by_user(user_id).await.len(), 2);
        assert!(service.by_user(404).await.is_empty());

        let result = service.create(new_todo(99_999, "orphan", false)).await;
        assert!(matches!(result, Err(AppError::ReferenceNotFound { .. })));
        assert_eq!(service.list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_toggle_completed() {
        let (service, user_id) = create_test_service().await;
        let todo = service.create(new_todo(user_id, "a", false)).await.unwrap();

        let patch = TodoPatch {
            completed: Some(true),
            ..Default::default()
        };
        let updated = service.update(todo.id, patch).await.unwrap().unwrap();
        assert!(updated.completed);
        assert_eq!(updated.title, "a");

        assert!(service.delete(todo.id).await.unwrap());
        assert!(service.get(todo.id).await.is_none());
    }
}
