use serde::{Deserialize, Serialize};

/// A single portfolio entry as returned by `GET /works`.
///
/// The server also sends the nested `category` object and the owner's
/// `userId`; those are not needed by the gallery and are skipped during
/// deserialization.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub id: u32,
    pub title: String,
    pub image_url: String,
    pub category_id: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_server_payload_and_ignores_extra_fields() {
        let json = r#"{
            "id": 3,
            "title": "Restaurant Sushisen - Londres",
            "imageUrl": "http://localhost:5678/images/restaurant-sushisen-londres.png",
            "categoryId": 3,
            "userId": 1,
            "category": { "id": 3, "name": "Hotels & restaurants" }
        }"#;

        let work: Work = serde_json::from_str(json).unwrap();

        assert_eq!(work.id, 3);
        assert_eq!(work.category_id, 3);
        assert_eq!(work.title, "Restaurant Sushisen - Londres");
        assert!(work.image_url.ends_with(".png"));
    }
}
