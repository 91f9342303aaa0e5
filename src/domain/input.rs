//! Write inputs: create payloads and partial updates.
//!
//! Create payloads default every missing field so that absence is reported
//! as a validation failure rather than a parse error. Patch payloads wrap
//! every field in `Option`: `None` (absent or `null`) leaves the stored value
//! untouched, `Some` overwrites it.

use serde::Deserialize;

use crate::domain::model::{Address, Album, Comment, Company, Geo, Photo, Post, Todo, User};
use crate::domain::validation::{Validate, ValidationErrors};

const NAME_MAX: usize = 100;
const EMAIL_MAX: usize = 100;
const TITLE_MAX: usize = 200;
const BODY_MAX: usize = 5000;
const PHONE_MAX: usize = 20;
const WEBSITE_MAX: usize = 200;
const PHOTO_URL_MAX: usize = 500;
const STREET_MAX: usize = 200;
const ZIPCODE_MAX: usize = 20;
const COORDINATE_MAX: usize = 20;
const CATCH_PHRASE_MAX: usize = 200;

// ============== Users ==============

/// Payload for creating a user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

impl Validate for NewUser {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.required("name", &self.name, NAME_MAX);
        errors.username("username", &self.username, NAME_MAX);
        errors.email("email", &self.email, EMAIL_MAX);
        errors.phone("phone", &self.phone, PHONE_MAX);
        errors.url("website", &self.website, WEBSITE_MAX, false);
        validate_address(&mut errors, &self.address);
        validate_company(&mut errors, &self.company);
        errors.into_result()
    }
}

impl From<NewUser> for User {
    fn from(input: NewUser) -> Self {
        Self {
            id: 0,
            name: input.name,
            username: input.username,
            email: input.email,
            address: input.address,
            phone: input.phone,
            website: input.website,
            company: input.company,
        }
    }
}

/// Partial update of a user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub address: Option<AddressPatch>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub company: Option<CompanyPatch>,
}

/// Partial update of an embedded address.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddressPatch {
    pub street: Option<String>,
    pub suite: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub geo: Option<GeoPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeoPatch {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

/// Partial update of an embedded company.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub catch_phrase: Option<String>,
    pub bs: Option<String>,
}

impl Validate for UserPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.required_if_present("name", self.name.as_deref(), NAME_MAX);
        errors.username_if_present("username", self.username.as_deref(), NAME_MAX);
        errors.email_if_present("email", self.email.as_deref(), EMAIL_MAX);
        if let Some(phone) = &self.phone {
            errors.phone("phone", phone, PHONE_MAX);
        }
        if let Some(website) = &self.website {
            errors.url("website", website, WEBSITE_MAX, false);
        }
        if let Some(address) = &self.address {
            errors.max_len_if_present("address.street", address.street.as_deref(), STREET_MAX);
            errors.max_len_if_present("address.suite", address.suite.as_deref(), NAME_MAX);
            errors.max_len_if_present("address.city", address.city.as_deref(), NAME_MAX);
            errors.max_len_if_present("address.zipcode", address.zipcode.as_deref(), ZIPCODE_MAX);
            if let Some(geo) = &address.geo {
                errors.max_len_if_present("address.geo.lat", geo.lat.as_deref(), COORDINATE_MAX);
                errors.max_len_if_present("address.geo.lng", geo.lng.as_deref(), COORDINATE_MAX);
            }
        }
        if let Some(company) = &self.company {
            errors.max_len_if_present("company.name", company.name.as_deref(), NAME_MAX);
            errors.max_len_if_present(
                "company.catchPhrase",
                company.catch_phrase.as_deref(),
                CATCH_PHRASE_MAX,
            );
            errors.max_len_if_present("company.bs", company.bs.as_deref(), CATCH_PHRASE_MAX);
        }
        errors.into_result()
    }
}

impl UserPatch {
    /// Overwrite the supplied fields of `user`.
    pub fn apply(self, user: &mut User) {
        assign(&mut user.name, self.name);
        assign(&mut user.username, self.username);
        assign(&mut user.email, self.email);
        assign(&mut user.phone, self.phone);
        assign(&mut user.website, self.website);
        if let Some(address) = self.address {
            address.apply(&mut user.address);
        }
        if let Some(company) = self.company {
            assign(&mut user.company.name, company.name);
            assign(&mut user.company.catch_phrase, company.catch_phrase);
            assign(&mut user.company.bs, company.bs);
        }
    }
}

impl AddressPatch {
    fn apply(self, address: &mut Address) {
        assign(&mut address.street, self.street);
        assign(&mut address.suite, self.suite);
        assign(&mut address.city, self.city);
        assign(&mut address.zipcode, self.zipcode);
        if let Some(geo) = self.geo {
            assign(&mut address.geo.lat, geo.lat);
            assign(&mut address.geo.lng, geo.lng);
        }
    }
}

fn validate_address(errors: &mut ValidationErrors, address: &Address) {
    errors.max_len("address.street", &address.street, STREET_MAX);
    errors.max_len("address.suite", &address.suite, NAME_MAX);
    errors.max_len("address.city", &address.city, NAME_MAX);
    errors.max_len("address.zipcode", &address.zipcode, ZIPCODE_MAX);
    validate_geo(errors, &address.geo);
}

fn validate_geo(errors: &mut ValidationErrors, geo: &Geo) {
    errors.max_len("address.geo.lat", &geo.lat, COORDINATE_MAX);
    errors.max_len("address.geo.lng", &geo.lng, COORDINATE_MAX);
}

fn validate_company(errors: &mut ValidationErrors, company: &Company) {
    errors.max_len("company.name", &company.name, NAME_MAX);
    errors.max_len("company.catchPhrase", &company.catch_phrase, CATCH_PHRASE_MAX);
    errors.max_len("company.bs", &company.bs, CATCH_PHRASE_MAX);
}

// ============== Posts ==============

/// Payload for creating a post.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewPost {
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

impl Validate for NewPost {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.foreign_key("userId", self.user_id);
        errors.required("title", &self.title, TITLE_MAX);
        errors.required("body", &self.body, BODY_MAX);
        errors.into_result()
    }
}

impl From<NewPost> for Post {
    fn from(input: NewPost) -> Self {
        Self {
            user_id: input.user_id,
            id: 0,
            title: input.title,
            body: input.body,
        }
    }
}

/// Partial update of a post.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostPatch {
    pub user_id: Option<i64>,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl Validate for PostPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.foreign_key_if_present("userId", self.user_id);
        errors.required_if_present("title", self.title.as_deref(), TITLE_MAX);
        errors.required_if_present("body", self.body.as_deref(), BODY_MAX);
        errors.into_result()
    }
}

impl PostPatch {
    /// Overwrite the supplied fields of `post`.
    pub fn apply(self, post: &mut Post) {
        assign(&mut post.user_id, self.user_id);
        assign(&mut post.title, self.title);
        assign(&mut post.body, self.body);
    }
}

// ============== Comments ==============

/// Payload for creating a comment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewComment {
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl Validate for NewComment {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.foreign_key("postId", self.post_id);
        errors.required("name", &self.name, TITLE_MAX);
        errors.email("email", &self.email, EMAIL_MAX);
        errors.required("body", &self.body, BODY_MAX);
        errors.into_result()
    }
}

impl From<NewComment> for Comment {
    fn from(input: NewComment) -> Self {
        Self {
            post_id: input.post_id,
            id: 0,
            name: input.name,
            email: input.email,
            body: input.body,
        }
    }
}

/// Partial update of a comment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentPatch {
    pub post_id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub body: Option<String>,
}

impl Validate for CommentPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.foreign_key_if_present("postId", self.post_id);
        errors.required_if_present("name", self.name.as_deref(), TITLE_MAX);
        errors.email_if_present("email", self.email.as_deref(), EMAIL_MAX);
        errors.required_if_present("body", self.body.as_deref(), BODY_MAX);
        errors.into_result()
    }
}

impl CommentPatch {
    /// Overwrite the supplied fields of `comment`.
    pub fn apply(self, comment: &mut Comment) {
        assign(&mut comment.post_id, self.post_id);
        assign(&mut comment.name, self.name);
        assign(&mut comment.email, self.email);
        assign(&mut comment.body, self.body);
    }
}

// ============== Albums ==============

/// Payload for creating an album.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewAlbum {
    pub user_id: i64,
    pub title: String,
}

impl Validate for NewAlbum {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.foreign_key("userId", self.user_id);
        errors.required("title", &self.title, TITLE_MAX);
        errors.into_result()
    }
}

impl From<NewAlbum> for Album {
    fn from(input: NewAlbum) -> Self {
        Self {
            user_id: input.user_id,
            id: 0,
            title: input.title,
        }
    }
}

/// Partial update of an album.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlbumPatch {
    pub user_id: Option<i64>,
    pub title: Option<String>,
}

impl Validate for AlbumPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.foreign_key_if_present("userId", self.user_id);
        errors.required_if_present("title", self.title.as_deref(), TITLE_MAX);
        errors.into_result()
    }
}

impl AlbumPatch {
    /// Overwrite the supplied fields of `album`.
    pub fn apply(self, album: &mut Album) {
        assign(&mut album.user_id, self.user_id);
        assign(&mut album.title, self.title);
    }
}

// ============== Photos ==============

/// Payload for creating a photo.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewPhoto {
    pub album_id: i64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

impl Validate for NewPhoto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.foreign_key("albumId", self.album_id);
        errors.required("title", &self.title, TITLE_MAX);
        errors.url("url", &self.url, PHOTO_URL_MAX, true);
        errors.url("thumbnailUrl", &self.thumbnail_url, PHOTO_URL_MAX, true);
        errors.into_result()
    }
}

impl From<NewPhoto> for Photo {
    fn from(input: NewPhoto) -> Self {
        Self {
            album_id: input.album_id,
            id: 0,
            title: input.title,
            url: input.url,
            thumbnail_url: input.thumbnail_url,
        }
    }
}

/// Partial update of a photo.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhotoPatch {
    pub album_id: Option<i64>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl Validate for PhotoPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.foreign_key_if_present("albumId", self.album_id);
        errors.required_if_present("title", self.title.as_deref(), TITLE_MAX);
        if let Some(url) = &self.url {
            errors.url("url", url, PHOTO_URL_MAX, true);
        }
        if let Some(thumbnail_url) = &self.thumbnail_url {
            errors.url("thumbnailUrl", thumbnail_url, PHOTO_URL_MAX, true);
        }
        errors.into_result()
    }
}

impl PhotoPatch {
    /// Overwrite the supplied fields of `photo`.
    pub fn apply(self, photo: &mut Photo) {
        assign(&mut photo.album_id, self.album_id);
        assign(&mut photo.title, self.title);
        assign(&mut photo.url, self.url);
        assign(&mut photo.thumbnail_url, self.thumbnail_url);
    }
}

// ============== Todos ==============

/// Payload for creating a todo.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewTodo {
    pub user_id: i64,
    pub title: String,
    pub completed: bool,
}

impl Validate for NewTodo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.foreign_key("userId", self.user_id);
        errors.required("title", &self.title, TITLE_MAX);
        errors.into_result()
    }
}

impl From<NewTodo> for Todo {
    fn from(input: NewTodo) -> Self {
        Self {
            user_id: input.user_id,
            id: 0,
            title: input.title,
            completed: input.completed,
        }
    }
}

/// Partial update of a todo.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TodoPatch {
    pub user_id: Option<i64>,
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl Validate for TodoPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.foreign_key_if_present("userId", self.user_id);
        errors.required_if_present("title", self.title.as_deref(), TITLE_MAX);
        errors.into_result()
    }
}

impl TodoPatch {
    /// Overwrite the supplied fields of `todo`.
    pub fn apply(self, todo: &mut Todo) {
        assign(&mut todo.user_id, self.user_id);
        assign(&mut todo.title, self.title);
        assign(&mut todo.completed, self.completed);
    }
}

fn assign<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
