//! Domain models for the placeholder API.
//!
//! This module contains the six resource entities, their write inputs with
//! validation rules, and the response shapes that wrap them.

pub mod dto;
pub mod input;
pub mod model;
pub mod validation;

pub use dto::{
    AlbumWithPhotos, ApiResponse, HealthResponse, PostWithComments, ReadyComponents,
    ReadyResponse,
};
pub use input::{
    AddressPatch, AlbumPatch, CommentPatch, CompanyPatch, GeoPatch, NewAlbum, NewComment,
    NewPhoto, NewPost, NewTodo, NewUser, PhotoPatch, PostPatch, TodoPatch, UserPatch,
};
pub use model::{
    Address, Album, Comment, Company, Entity, EntityKind, Geo, Photo, Post, Todo, User,
};
pub use validation::{Validate, ValidationErrors};
