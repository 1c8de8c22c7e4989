//! Place summary cards and the client-side price filter.

use dioxus::prelude::*;

use api::Place;

/// Ceilings offered by the price dropdown. `None` is "All".
pub const PRICE_FILTER_STEPS: [Option<f64>; 4] = [None, Some(10.0), Some(50.0), Some(100.0)];

/// Whether a place at `price` stays visible under the selected ceiling.
pub fn passes_filter(price: f64, max: Option<f64>) -> bool {
    match max {
        Some(max) => price <= max,
        None => true,
    }
}

/// One place summary in the listing grid.
#[component]
pub fn PlaceCard(place: Place, image: String, on_view: EventHandler<String>) -> Element {
    let place_id = place.id.clone();
    let price_line = place.price_line();

    rsx! {
        article {
            class: "place-card",
            img { class: "place-card-image", src: "{image}", alt: "{place.title}" }
            h2 { class: "place-card-title", "{place.title}" }
            p { class: "place-card-price", "{price_line}" }
            button {
                class: "place-card-details",
                onclick: move |_| on_view.call(place_id.clone()),
                "View details"
            }
        }
    }
}

/// Dropdown that narrows the listing to places at or under a price.
///
/// The selection lives in a signal owned by the listing view; changing it
/// only re-filters the already-fetched snapshot, it never re-fetches.
#[component]
pub fn PriceFilter(mut selected: Signal<Option<f64>>) -> Element {
    rsx! {
        label {
            class: "price-filter",
            "Max price: "
            select {
                onchange: move |evt| selected.set(evt.value().parse::<f64>().ok()),
                option { value: "all", "All" }
                for step in PRICE_FILTER_STEPS.iter().flatten() {
                    option { value: "{step}", "${step}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_passes_everything() {
        assert!(passes_filter(0.0, None));
        assert!(passes_filter(99999.0, None));
    }

    #[test]
    fn test_ceiling_is_inclusive() {
        for threshold in [10.0, 50.0, 100.0] {
            assert!(passes_filter(threshold, Some(threshold)));
            assert!(passes_filter(threshold - 0.01, Some(threshold)));
            assert!(!passes_filter(threshold + 0.01, Some(threshold)));
        }
    }

    #[test]
    fn test_exactly_the_cheap_places_survive() {
        let prices = [5.0, 10.0, 49.99, 50.0, 75.0, 100.0, 250.0];
        let visible: Vec<f64> = prices
            .iter()
            .copied()
            .filter(|price| passes_filter(*price, Some(50.0)))
            .collect();
        assert_eq!(visible, vec![5.0, 10.0, 49.99, 50.0]);
    }
}
