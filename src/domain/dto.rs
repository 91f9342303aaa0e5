//! Data Transfer Objects for responses beyond the plain entities.

use serde::{Deserialize, Serialize};

use crate::domain::model::{Album, Comment, Photo, Post};

/// Standard envelope used by the operational endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, non-zero = error).
    pub code: i32,

    /// Human-readable message.
    pub message: String,

    /// Response data (null on error).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Create an error response.
    pub fn error(code: i32, message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// A post together with all of its comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostWithComments {
    #[serde(flatten)]
    pub post: Post,
    pub comments: Vec<Comment>,
}

/// An album together with all of its photos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumWithPhotos {
    #[serde(flatten)]
    pub album: Album,
    pub photos: Vec<Photo>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,

    /// Service version.
    pub version: String,

    /// Server time (RFC 3339).
    pub timestamp: String,
}

/// Readiness check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyResponse {
    /// Overall readiness status.
    pub ready: bool,

    /// Individual component statuses.
    pub components: ReadyComponents,
}

/// Component readiness statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyComponents {
    /// Storage backend status.
    pub storage: bool,

    /// Name of the configured storage backend.
    pub backend: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success(vec![1, 2, 3]);
        assert_eq!(response.code, 0);
        assert_eq!(response.message, "success");
        assert_eq!(response.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_api_response_error() {
        let response = ApiResponse::<()>::error(5003, "service unavailable");
        assert_eq!(response.code, 5003);
        assert!(response.data.is_none());
    }

    #[test]
    fn test_post_with_comments_is_flattened() {
        let view = PostWithComments {
            post: Post {
                user_id: 1,
                id: 1,
                title: "sunt aut facere".to_string(),
                body: "quia et suscipit".to_string(),
            },
            comments: vec![Comment {
                post_id: 1,
                id: 1,
                name: "id labore ex et quam laborum".to_string(),
                email: "Eliseo@gardner.biz".to_string(),
                body: "laudantium enim quasi".to_string(),
            }],
        };

        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["userId"], json!(1));
        assert_eq!(value["title"], json!("sunt aut facere"));
        assert_eq!(value["comments"][0]["postId"], json!(1));
    }
}
