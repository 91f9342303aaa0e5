//! Resource entities.
//!
//! Each entity serializes directly into its JSON transfer shape (camelCase
//! field names, as served by JSONPlaceholder).

use serde::{Deserialize, Serialize};

/// The six resource types exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A user account.
    User,
    /// A blog post written by a user.
    Post,
    /// A comment on a post.
    Comment,
    /// A photo album owned by a user.
    Album,
    /// A photo inside an album.
    Photo,
    /// A todo item owned by a user.
    Todo,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "User"),
            Self::Post => write!(f, "Post"),
            Self::Comment => write!(f, "Comment"),
            Self::Album => write!(f, "Album"),
            Self::Photo => write!(f, "Photo"),
            Self::Todo => write!(f, "Todo"),
        }
    }
}

/// A stored row with an integer primary key.
pub trait Entity: Clone + Send + Sync + Serialize + for<'de> Deserialize<'de> + 'static {
    /// Kind used in messages and logs.
    const KIND: EntityKind;

    /// Primary key.
    fn id(&self) -> i64;

    /// Overwrite the primary key. Only the storage layer assigns keys.
    fn set_id(&mut self, id: i64);
}

macro_rules! impl_entity {
    ($ty:ty, $kind:expr) => {
        impl Entity for $ty {
            const KIND: EntityKind = $kind;

            fn id(&self) -> i64 {
                self.id
            }

            fn set_id(&mut self, id: i64) {
                self.id = id;
            }
        }
    };
}

/// Geographic coordinates embedded in an [`Address`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    /// Latitude, kept as text.
    pub lat: String,
    /// Longitude, kept as text.
    pub lng: String,
}

/// Postal address embedded in a [`User`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Employer embedded in a [`User`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// A user. Owns posts, albums and todos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Unique across all users.
    pub username: String,
    /// Unique across all users.
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

/// A post written by a user. Owns comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// A comment on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: i64,
    pub id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// A photo album owned by a user. Owns photos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
}

/// A photo inside an album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub album_id: i64,
    pub id: i64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

/// A todo item owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl_entity!(User, EntityKind::User);
impl_entity!(Post, EntityKind::Post);
impl_entity!(Comment, EntityKind::Comment);
impl_entity!(Album, EntityKind::Album);
impl_entity!(Photo, EntityKind::Photo);
impl_entity!(Todo, EntityKind::Todo);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_wire_shape() {
        let user = User {
            id: 1,
            name: "Leanne Graham".to_string(),
            username: "Bret".to_string(),
            email: "Sincere@april.biz".to_string(),
            address: Address {
                street: "Kulas Light".to_string(),
                suite: "Apt. 556".to_string(),
                city: "Gwenborough".to_string(),
                zipcode: "92998-3874".to_string(),
                geo: Geo {
                    lat: "-37.3159".to_string(),
                    lng: "81.1496".to_string(),
                },
            },
            phone: "17707368031".to_string(),
            website: "https://hildegard.org".to_string(),
            company: Company {
                name: "Romaguera-Crona".to_string(),
                catch_phrase: "Multi-layered client-server neural-net".to_string(),
                bs: "harness real-time e-markets".to_string(),
            },
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["address"]["geo"]["lat"], "-37.3159");
        assert_eq!(
            value["company"]["catchPhrase"],
            "Multi-layered client-server neural-net"
        );
    }

    #[test]
    fn test_child_wire_shape() {
        let photo = Photo {
            album_id: 2,
            id: 51,
            title: "t".to_string(),
            url: "https://via.placeholder.com/600/92c952".to_string(),
            thumbnail_url: "https://via.placeholder.com/150/92c952".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&photo).unwrap(),
            json!({
                "albumId": 2,
                "id": 51,
                "title": "t",
                "url": "https://via.placeholder.com/600/92c952",
                "thumbnailUrl": "https://via.placeholder.com/150/92c952"
            })
        );
    }

    #[test]
    fn test_entity_kind_display() {
        assert_eq!(EntityKind::Comment.to_string(), "Comment");
        assert_eq!(<Todo as Entity>::KIND, EntityKind::Todo);
    }
}
