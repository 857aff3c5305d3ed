//! Bid list reference record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record::{field, DomainRecord, Field};

/// A bid list entry. Quantities and prices are stored, never computed over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BidList {
    /// Assigned on creation; ignored when submitted in a form
    #[serde(default)]
    pub id: Option<i32>,
    #[schema(example = "Account Test")]
    pub account: Option<String>,
    #[serde(rename = "type")]
    #[schema(example = "Type Test")]
    pub bid_type: Option<String>,
    #[serde(default, deserialize_with = "crate::utils::decimal::deserialize")]
    #[schema(example = 10.0)]
    pub bid_quantity: Option<f64>,
    #[serde(default, deserialize_with = "crate::utils::decimal::deserialize")]
    pub ask_quantity: Option<f64>,
    #[serde(default, deserialize_with = "crate::utils::decimal::deserialize")]
    pub bid: Option<f64>,
    #[serde(default, deserialize_with = "crate::utils::decimal::deserialize")]
    pub ask: Option<f64>,
    pub benchmark: Option<String>,
    pub bid_list_date: Option<DateTime<Utc>>,
    pub commentary: Option<String>,
    pub security: Option<String>,
    pub status: Option<String>,
    pub trader: Option<String>,
    pub book: Option<String>,
    pub creation_name: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub revision_name: Option<String>,
    pub revision_date: Option<DateTime<Utc>>,
    pub deal_name: Option<String>,
    pub deal_type: Option<String>,
    pub source_list_id: Option<String>,
    pub side: Option<String>,
}

impl BidList {
    pub fn new(account: impl Into<String>, bid_type: impl Into<String>, bid_quantity: f64) -> Self {
        Self {
            account: Some(account.into()),
            bid_type: Some(bid_type.into()),
            bid_quantity: Some(bid_quantity),
            ..Self::default()
        }
    }
}

impl DomainRecord for BidList {
    const KIND: &'static str = "bid list";

    const IDENTITY_FIELDS: &'static [Field<Self>] = &[
        field!(BidList, account, "account"),
        field!(BidList, bid_type, "type"),
        field!(BidList, bid_quantity, "bidQuantity"),
    ];

    const TEXT_FIELDS: &'static [Field<Self>] = &[
        field!(BidList, account, "account"),
        field!(BidList, bid_type, "type"),
    ];

    const COPIED_FIELDS: &'static [Field<Self>] = &[
        field!(BidList, account, "account"),
        field!(BidList, bid_type, "type"),
        field!(BidList, bid_quantity, "bidQuantity"),
    ];

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn clear_id(&mut self) {
        self.id = None;
    }
}
