//! Credit rating reference record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record::{field, DomainRecord, Field};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    #[serde(default)]
    pub id: Option<i32>,
    #[schema(example = "Aaa")]
    pub moodys_rating: Option<String>,
    #[serde(rename = "sandPRating")]
    #[schema(example = "AAA")]
    pub sand_p_rating: Option<String>,
    #[schema(example = "AAA")]
    pub fitch_rating: Option<String>,
    #[schema(example = 10)]
    pub order_number: Option<i32>,
}

impl Rating {
    pub fn new(
        moodys_rating: impl Into<String>,
        sand_p_rating: impl Into<String>,
        fitch_rating: impl Into<String>,
        order_number: i32,
    ) -> Self {
        Self {
            id: None,
            moodys_rating: Some(moodys_rating.into()),
            sand_p_rating: Some(sand_p_rating.into()),
            fitch_rating: Some(fitch_rating.into()),
            order_number: Some(order_number),
        }
    }
}

impl DomainRecord for Rating {
    const KIND: &'static str = "rating";

    const IDENTITY_FIELDS: &'static [Field<Self>] = &[
        field!(Rating, fitch_rating, "fitchRating"),
        field!(Rating, sand_p_rating, "sandPRating"),
        field!(Rating, moodys_rating, "moodysRating"),
        field!(Rating, order_number, "orderNumber"),
    ];

    const TEXT_FIELDS: &'static [Field<Self>] = &[];

    const COPIED_FIELDS: &'static [Field<Self>] = &[
        field!(Rating, fitch_rating, "fitchRating"),
        field!(Rating, moodys_rating, "moodysRating"),
        field!(Rating, sand_p_rating, "sandPRating"),
        field!(Rating, order_number, "orderNumber"),
    ];

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn clear_id(&mut self) {
        self.id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_single_field_is_enough() {
        let rating = Rating {
            order_number: Some(3),
            ..Rating::default()
        };
        assert!(rating.is_valid());
    }

    #[test]
    fn test_blank_but_present_is_accepted() {
        let rating = Rating {
            fitch_rating: Some(String::new()),
            ..Rating::default()
        };
        assert!(rating.is_valid());
    }

    #[test]
    fn test_all_absent_is_rejected() {
        assert!(!Rating::default().is_valid());
    }

    #[test]
    fn test_sand_p_wire_name() {
        let rating: Rating = serde_json::from_str(r#"{"sandPRating":"AA"}"#).unwrap();
        assert_eq!(rating.sand_p_rating.as_deref(), Some("AA"));
    }
}
