//! # api crate — client for the remote Catalog Service
//!
//! Everything the frontends need to talk to the catalog backend, with no UI
//! code. The service owns all business logic (persistence, authentication,
//! validation); this crate only issues HTTP requests, carries the session,
//! and types the wire.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`CatalogClient`] — the HTTP operations (login, list/get/create/update/delete categories, current user) |
//! | [`error`] | [`ApiError`] — missing credential, unauthorized, request failure, transport |
//! | [`models`] | Wire types: [`Category`], [`Product`], payloads, [`UserInfo`] |
//! | [`session`] | [`Session`] — the opaque bearer token and its persistence |

pub mod client;
pub mod error;
pub mod models;
pub mod session;

pub use client::{CatalogClient, ClientConfig};
pub use error::ApiError;
pub use models::{
    Category, CategoryDetail, CategoryPatch, NewCategory, Organization, Product, UserInfo,
};
pub use session::{Session, SESSION_TOKEN_KEY};
