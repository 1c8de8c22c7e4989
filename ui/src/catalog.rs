//! Title → image mapping for place cards.

use std::collections::HashMap;

/// Maps place titles to card images.
///
/// The mapping is content, not logic: the embedding application supplies
/// it (the listing API carries no imagery), and any unmapped title falls
/// back to the placeholder.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageCatalog {
    images: HashMap<String, String>,
    placeholder: String,
}

impl Default for ImageCatalog {
    fn default() -> Self {
        Self::new("/assets/images/place-placeholder.jpg")
    }
}

impl ImageCatalog {
    /// Empty catalog with the given placeholder image.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            images: HashMap::new(),
            placeholder: placeholder.into(),
        }
    }

    /// Builder method to add `(title, image)` entries.
    pub fn with_images<I, T, U>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
        T: Into<String>,
        U: Into<String>,
    {
        self.images
            .extend(entries.into_iter().map(|(title, image)| (title.into(), image.into())));
        self
    }

    /// Image for a place title, or the placeholder when unmapped.
    pub fn image_for(&self, title: &str) -> &str {
        self.images
            .get(title)
            .map(String::as_str)
            .unwrap_or(&self.placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_title_returns_its_image() {
        let catalog = ImageCatalog::default()
            .with_images([("Beach House", "/assets/images/beach-house.jpg")]);
        assert_eq!(catalog.image_for("Beach House"), "/assets/images/beach-house.jpg");
    }

    #[test]
    fn test_unmapped_title_returns_placeholder() {
        let catalog = ImageCatalog::default();
        assert_eq!(
            catalog.image_for("Secret Bunker"),
            "/assets/images/place-placeholder.jpg"
        );
    }
}
