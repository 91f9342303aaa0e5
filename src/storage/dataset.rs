//! The full set of tables and the cascade rules between them.

use serde::{Deserialize, Serialize};

use crate::domain::{Album, Comment, Photo, Post, Todo, User};
use crate::storage::table::Table;

/// All six resource tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub users: Table<User>,
    pub posts: Table<Post>,
    pub comments: Table<Comment>,
    pub albums: Table<Album>,
    pub photos: Table<Photo>,
    pub todos: Table<Todo>,
}

/// Rows removed by one cascading delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Removed {
    pub users: usize,
    pub posts: usize,
    pub comments: usize,
    pub albums: usize,
    pub photos: usize,
    pub todos: usize,
}

impl Removed {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.users + self.posts + self.comments + self.albums + self.photos + self.todos
    }

    const fn merge(mut self, other: Self) -> Self {
        self.users += other.users;
        self.posts += other.posts;
        self.comments += other.comments;
        self.albums += other.albums;
        self.photos += other.photos;
        self.todos += other.todos;
        self
    }
}

impl Dataset {
    /// Remove a post and its comments.
    ///
    /// Returns `None` when the post does not exist.
    pub fn remove_post(&mut self, id: i64) -> Option<Removed> {
        self.posts.remove(id)?;
        let comments = self.comments.remove_where(|c| c.post_id == id);
        Some(Removed {
            posts: 1,
            comments,
            ..Removed::default()
        })
    }

    /// Remove an album and its photos.
    ///
    /// Returns `None` when the album does not exist.
    pub fn remove_album(&mut self, id: i64) -> Option<Removed> {
        self.albums.remove(id)?;
        let photos = self.photos.remove_where(|p| p.album_id == id);
        Some(Removed {
            albums: 1,
            photos,
            ..Removed::default()
        })
    }

    /// Remove a user with everything it owns, transitively.
    ///
    /// Returns `None` when the user does not exist.
    pub fn remove_user(&mut self, id: i64) -> Option<Removed> {
        self.users.remove(id)?;
        let mut removed = Removed {
            users: 1,
            ..Removed::default()
        };

        for post_id in self.posts.ids_where(|p| p.user_id == id) {
            if let Some(r) = self.remove_post(post_id) {
                removed = removed.merge(r);
            }
        }
        for album_id in self.albums.ids_where(|a| a.user_id == id) {
            if let Some(r) = self.remove_album(album_id) {
                removed = removed.merge(r);
            }
        }
        removed.todos = self.todos.remove_where(|t| t.user_id == id);

        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewUser;

    fn user(ds: &mut Dataset, name: &str) -> User {
        ds.users.insert(
            NewUser {
                name: name.to_string(),
                username: name.to_string(),
                email: format!("{name}@example.com"),
                ..Default::default()
            }
            .into(),
        )
    }

    fn post(ds: &mut Dataset, user_id: i64) -> Post {
        ds.posts.insert(Post {
            user_id,
            id: 0,
            title: "title".to_string(),
            body: "body".to_string(),
        })
    }

    fn comment(ds: &mut Dataset, post_id: i64) -> Comment {
        ds.comments.insert(Comment {
            post_id,
            id: 0,
            name: "name".to_string(),
            email: "c@example.com".to_string(),
            body: "body".to_string(),
        })
    }

    #[test]
    fn test_remove_user_cascades_transitively() {
        let mut ds = Dataset::default();
        let alice = user(&mut ds, "alice");
        let bob = user(&mut ds, "bob");

        let p1 = post(&mut ds, alice.id);
        let p2 = post(&mut ds, alice.id);
        let bob_post = post(&mut ds, bob.id);
        comment(&mut ds, p1.id);
        comment(&mut ds, p2.id);
        let bob_comment = comment(&mut ds, bob_post.id);

        let album = ds.albums.insert(Album {
            user_id: alice.id,
            id: 0,
            title: "album".to_string(),
        });
        ds.photos.insert(Photo {
            album_id: album.id,
            id: 0,
            title: "photo".to_string(),
            url: "https://example.com/a.png".to_string(),
            thumbnail_url: "https://example.com/a_t.png".to_string(),
        });
        ds.todos.insert(Todo {
            user_id: alice.id,
            id: 0,
            title: "todo".to_string(),
            completed: false,
        });

        let removed = ds.remove_user(alice.id).unwrap();
        assert_eq!(
            removed,
            Removed {
                users: 1,
                posts: 2,
                comments: 2,
                albums: 1,
                photos: 1,
                todos: 1,
            }
        );
        assert_eq!(removed.total(), 8);

        assert!(ds.users.contains(bob.id));
        assert_eq!(ds.posts.list(), vec![bob_post]);
        assert_eq!(ds.comments.list(), vec![bob_comment]);
        assert!(ds.albums.is_empty());
        assert!(ds.photos.is_empty());
        assert!(ds.todos.is_empty());
    }

    #[test]
    fn test_remove_missing_parent() {
        let mut ds = Dataset::default();
        assert!(ds.remove_user(1).is_none());
        assert!(ds.remove_post(1).is_none());
        assert!(ds.remove_album(1).is_none());
    }

    #[test]
    fn test_remove_post_keeps_siblings() {
        let mut ds = Dataset::default();
        let alice = user(&mut ds, "alice");
        let p1 = post(&mut ds, alice.id);
        let p2 = post(&mut ds, alice.id);
        comment(&mut ds, p1.id);
        let kept = comment(&mut ds, p2.id);

        let removed = ds.remove_post(p1.id).unwrap();
        assert_eq!(removed.comments, 1);
        assert_eq!(ds.comments.list(), vec![kept]);
        assert!(ds.users.contains(alice.id));
    }
}
