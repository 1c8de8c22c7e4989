//! # Wire models for the listing API
//!
//! Deserialization targets for the JSON the API returns, plus the small
//! display helpers the views use. The API sends supersets of these shapes
//! (owner email, coordinates, timestamps); unknown fields are ignored and
//! optional blocks default so older and newer server versions both parse.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Place`] | A rentable listing: title, nightly price, optional description and owner block, amenities. |
//! | [`PlaceOwner`] | The owner block embedded in a place record. |
//! | [`Amenity`] | One named amenity of a place. |
//! | [`Review`] | A user review of a place: text, 1–5 rating, author. |
//! | [`LoginResponse`] | Body of a successful `POST /auth/login`. |

use serde::{Deserialize, Serialize};

/// A rentable listing, as returned by `GET /places` and `GET /places/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Nightly price.
    pub price: f64,
    /// Present on detail responses, usually absent from list summaries.
    #[serde(default)]
    pub owner: Option<PlaceOwner>,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
}

impl Place {
    /// Description to display, with a stand-in when the record has none.
    pub fn description_text(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or("No description provided.")
    }

    /// Price line shown on cards and the detail view.
    pub fn price_line(&self) -> String {
        format!("${:.2} per night", self.price)
    }
}

/// The owner block embedded in a place record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceOwner {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Host display name for a place, `"Unknown"` when the record carries no
/// usable owner.
pub fn host_name(owner: Option<&PlaceOwner>) -> String {
    match owner {
        Some(owner) => {
            let name = format!("{} {}", owner.first_name, owner.last_name);
            let name = name.trim();
            if name.is_empty() {
                "Unknown".to_string()
            } else {
                name.to_string()
            }
        }
        None => "Unknown".to_string(),
    }
}

/// One named amenity of a place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub name: String,
}

/// A user review of a place.
///
/// `user_name` is only present when the API joins in the author's name;
/// [`Review::author`] falls back to the raw user id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub place_id: Option<String>,
    pub text: String,
    /// 1–5 stars.
    pub rating: u8,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl Review {
    /// Author line for a review card.
    pub fn author(&self) -> &str {
        self.user_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.user_id)
    }
}

/// Body of a successful `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_detail_deserializes() {
        let place: Place = serde_json::from_str(
            r#"{
                "id": "p-1",
                "title": "Beach House",
                "description": "Steps from the sand",
                "price": 150.0,
                "latitude": 34.0,
                "longitude": -118.0,
                "owner": {"id": "u-1", "first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com"},
                "amenities": [{"id": "a-1", "name": "WiFi"}, {"id": "a-2", "name": "Pool"}]
            }"#,
        )
        .unwrap();
        assert_eq!(place.title, "Beach House");
        assert_eq!(place.amenities.len(), 2);
        assert_eq!(host_name(place.owner.as_ref()), "Ada Lovelace");
        assert_eq!(place.price_line(), "$150.00 per night");
    }

    #[test]
    fn test_place_summary_without_optional_blocks() {
        let place: Place =
            serde_json::from_str(r#"{"id": "p-2", "title": "Cozy Cottage", "price": 45}"#).unwrap();
        assert!(place.owner.is_none());
        assert!(place.amenities.is_empty());
        assert_eq!(place.description_text(), "No description provided.");
        assert_eq!(host_name(place.owner.as_ref()), "Unknown");
    }

    #[test]
    fn test_host_name_ignores_blank_owner() {
        let owner = PlaceOwner::default();
        assert_eq!(host_name(Some(&owner)), "Unknown");
    }

    #[test]
    fn test_review_author_falls_back_to_user_id() {
        let with_name: Review = serde_json::from_str(
            r#"{"id": "r-1", "text": "Great stay", "rating": 5, "user_id": "u-1", "user_name": "Ada"}"#,
        )
        .unwrap();
        assert_eq!(with_name.author(), "Ada");

        let without_name: Review =
            serde_json::from_str(r#"{"text": "Fine", "rating": 3, "user_id": "u-2"}"#).unwrap();
        assert_eq!(without_name.author(), "u-2");
    }
}
