//! Service layer module.
//!
//! One service per resource. Services check referential integrity and
//! uniqueness inside the write transaction; field validation has already
//! happened at the request boundary.

pub mod albums;
pub mod comments;
pub mod photos;
pub mod posts;
pub mod todos;
pub mod users;

pub use albums::AlbumService;
pub use comments::CommentService;
pub use photos::PhotoService;
pub use posts::PostService;
pub use todos::TodoService;
pub use users::UserService;

use crate::domain::Entity;
use crate::error::{AppError, Result};
use crate::storage::Table;

/// Fail with `ReferenceNotFound` unless `table` holds a row keyed `id`.
pub(crate) fn ensure_exists<E: Entity>(table: &Table<E>, id: i64) -> Result<()> {
    if table.contains(id) {
        Ok(())
    } else {
        Err(AppError::missing_reference(E::KIND, id))
    }
}
