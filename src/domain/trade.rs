//! Trade reference record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record::{field, DomainRecord, Field};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    #[serde(default)]
    pub id: Option<i32>,
    #[schema(example = "Trade Account")]
    pub account: Option<String>,
    #[serde(rename = "type")]
    #[schema(example = "Type")]
    pub trade_type: Option<String>,
    #[serde(default, deserialize_with = "crate::utils::decimal::deserialize")]
    #[schema(example = 10.0)]
    pub buy_quantity: Option<f64>,
    #[serde(default, deserialize_with = "crate::utils::decimal::deserialize")]
    pub sell_quantity: Option<f64>,
    #[serde(default, deserialize_with = "crate::utils::decimal::deserialize")]
    pub buy_price: Option<f64>,
    #[serde(default, deserialize_with = "crate::utils::decimal::deserialize")]
    pub sell_price: Option<f64>,
    pub benchmark: Option<String>,
    pub trade_date: Option<DateTime<Utc>>,
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

impl Trade {
    pub fn new(account: impl Into<String>, trade_type: impl Into<String>, buy_quantity: f64) -> Self {
        Self {
            account: Some(account.into()),
            trade_type: Some(trade_type.into()),
            buy_quantity: Some(buy_quantity),
            ..Self::default()
        }
    }
}

impl DomainRecord for Trade {
    const KIND: &'static str = "trade";

    const IDENTITY_FIELDS: &'static [Field<Self>] = &[
        field!(Trade, account, "account"),
        field!(Trade, trade_type, "type"),
        field!(Trade, buy_quantity, "buyQuantity"),
    ];

    const TEXT_FIELDS: &'static [Field<Self>] = &[];

    const COPIED_FIELDS: &'static [Field<Self>] = Self::IDENTITY_FIELDS;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn clear_id(&mut self) {
        self.id = None;
    }
}
