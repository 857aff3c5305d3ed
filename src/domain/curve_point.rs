//! Curve point reference record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record::{field, DomainRecord, Field};

/// One stored point of a named curve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    #[serde(default)]
    pub id: Option<i32>,
    #[schema(example = 10)]
    pub curve_id: Option<i32>,
    pub as_of_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::utils::decimal::deserialize")]
    #[schema(example = 10.0)]
    pub term: Option<f64>,
    #[serde(default, deserialize_with = "crate::utils::decimal::deserialize")]
    #[schema(example = 30.0)]
    pub value: Option<f64>,
    pub creation_date: Option<DateTime<Utc>>,
}

impl CurvePoint {
    pub fn new(curve_id: i32, term: f64, value: f64) -> Self {
        Self {
            curve_id: Some(curve_id),
            term: Some(term),
            value: Some(value),
            ..Self::default()
        }
    }
}

impl DomainRecord for CurvePoint {
    const KIND: &'static str = "curve point";

    const IDENTITY_FIELDS: &'static [Field<Self>] = &[field!(CurvePoint, curve_id, "curveId")];

    const TEXT_FIELDS: &'static [Field<Self>] = &[
        field!(CurvePoint, term, "term"),
        field!(CurvePoint, value, "value"),
    ];

    const COPIED_FIELDS: &'static [Field<Self>] = &[
        field!(CurvePoint, curve_id, "curveId"),
        field!(CurvePoint, term, "term"),
        field!(CurvePoint, value, "value"),
    ];

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn clear_id(&mut self) {
        self.id = None;
    }
}
