use dioxus::prelude::*;

use api::{ApiClient, ApiConfig};
use ui::{AuthProvider, ImageCatalog};
use views::{Home, Login, PlaceDetail};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login?:next")]
    Login { next: String },
    #[route("/place?:place_id")]
    PlaceDetail { place_id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| ApiClient::new(ApiConfig::default()));
    use_context_provider(default_catalog);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Card images for the seeded listings; anything unmapped gets the
/// placeholder.
fn default_catalog() -> ImageCatalog {
    ImageCatalog::default().with_images([
        ("Cozy Cottage", "/assets/images/cozy-cottage.jpg"),
        ("Modern Apartment", "/assets/images/modern-apartment.jpg"),
        ("Beach House", "/assets/images/beach-house.jpg"),
        ("Mountain Cabin", "/assets/images/mountain-cabin.jpg"),
    ])
}
