//! # API crate: REST client for the rental listing service
//!
//! Everything the frontends need to talk to the listing API lives here:
//! configuration, wire models, the HTTP client, bearer-token decoding, and
//! the pre-flight validation run before a review is posted. The crate has
//! no UI dependencies and compiles both natively (for unit tests) and for
//! `wasm32`, where `reqwest` rides on the browser's `fetch`.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`], one async method per API operation |
//! | [`config`] | [`ApiConfig`], the base URL of the listing API |
//! | [`error`] | [`ApiError`], transport failures vs. server rejections |
//! | [`models`] | Wire types: [`Place`], [`Review`], [`LoginResponse`] |
//! | [`review`] | [`NewReview`] payload and [`validate_review`] |
//! | [`token`] | [`user_id_from_token`], user id from a bearer token payload |

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod review;
pub mod token;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{host_name, Amenity, LoginResponse, Place, PlaceOwner, Review};
pub use review::{validate_review, NewReview, ReviewError};
pub use token::user_id_from_token;
