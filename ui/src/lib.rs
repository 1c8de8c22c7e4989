//! This crate contains all shared UI for the workspace: the session and
//! authentication glue, and the components the views compose.

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod catalog;
pub use catalog::ImageCatalog;

mod navbar;
pub use navbar::Navbar;

mod place_card;
pub use place_card::{passes_filter, PlaceCard, PriceFilter, PRICE_FILTER_STEPS};

mod review_form;
pub use review_form::{ReviewForm, ReviewLoginPrompt};

pub mod session;

mod star_rating;
pub use star_rating::{StarRating, StarRow, MAX_STARS};
