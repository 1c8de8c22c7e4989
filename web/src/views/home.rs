use dioxus::prelude::*;

use api::ApiClient;
use ui::{passes_filter, use_auth, ImageCatalog, Navbar, PlaceCard, PriceFilter};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let client = use_context::<ApiClient>();
    let catalog = use_context::<ImageCatalog>();
    let auth = use_auth();
    let max_price = use_signal(|| Option::<f64>::None);
    let nav = use_navigator();

    // One fetch per visit, with the token attached once the cookie has
    // been read. The price filter below only hides cards.
    let places = use_resource(move || {
        let client = client.clone();
        async move {
            let state = auth();
            if state.loading {
                return None;
            }
            match client.list_places(state.token.as_deref()).await {
                Ok(places) => Some(places),
                Err(err) => {
                    tracing::error!("failed to load places: {err}");
                    Some(Vec::new())
                }
            }
        }
    });

    let on_view = move |place_id: String| {
        nav.push(Route::PlaceDetail { place_id });
    };

    let body = match places() {
        Some(Some(list)) if list.is_empty() => rsx! {
            p { class: "places-empty", "No places to show." }
        },
        Some(Some(list)) => rsx! {
            section {
                class: "places-grid",
                for place in list.into_iter().filter(|place| passes_filter(place.price, max_price())) {
                    PlaceCard {
                        key: "{place.id}",
                        image: catalog.image_for(&place.title).to_string(),
                        place: place.clone(),
                        on_view: on_view,
                    }
                }
            }
        },
        _ => rsx! {
            p { class: "places-loading", "Loading places..." }
        },
    };

    rsx! {
        Navbar {}

        main {
            class: "places-page",
            h1 { "Places to stay" }
            PriceFilter { selected: max_price }
            {body}
        }
    }
}
