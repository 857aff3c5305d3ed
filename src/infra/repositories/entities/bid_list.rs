//! Bid list entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::domain::BidList;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bidlist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub account: Option<String>,
    #[sea_orm(column_name = "type")]
    pub bid_type: Option<String>,
    pub bid_quantity: Option<f64>,
    pub ask_quantity: Option<f64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub benchmark: Option<String>,
    pub bid_list_date: Option<DateTimeUtc>,
    pub commentary: Option<String>,
    pub security: Option<String>,
    pub status: Option<String>,
    pub trader: Option<String>,
    pub book: Option<String>,
    pub creation_name: Option<String>,
    pub creation_date: Option<DateTimeUtc>,
    pub revision_name: Option<String>,
    pub revision_date: Option<DateTimeUtc>,
    pub deal_name: Option<String>,
    pub deal_type: Option<String>,
    pub source_list_id: Option<String>,
    pub side: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for BidList {
    fn from(model: Model) -> Self {
        BidList {
            id: Some(model.id),
            account: model.account,
            bid_type: model.bid_type,
            bid_quantity: model.bid_quantity,
            ask_quantity: model.ask_quantity,
            bid: model.bid,
            ask: model.ask,
            benchmark: model.benchmark,
            bid_list_date: model.bid_list_date,
            commentary: model.commentary,
            security: model.security,
            status: model.status,
            trader: model.trader,
            book: model.book,
            creation_name: model.creation_name,
            creation_date: model.creation_date,
            revision_name: model.revision_name,
            revision_date: model.revision_date,
            deal_name: model.deal_name,
            deal_type: model.deal_type,
            source_list_id: model.source_list_id,
            side: model.side,
        }
    }
}

impl From<BidList> for ActiveModel {
    fn from(record: BidList) -> Self {
        ActiveModel {
            id: record.id.map_or(NotSet, Set),
            account: Set(record.account),
            bid_type: Set(record.bid_type),
            bid_quantity: Set(record.bid_quantity),
            ask_quantity: Set(record.ask_quantity),
            bid: Set(record.bid),
            ask: Set(record.ask),
            benchmark: Set(record.benchmark),
            bid_list_date: Set(record.bid_list_date),
            commentary: Set(record.commentary),
            security: Set(record.security),
            status: Set(record.status),
            trader: Set(record.trader),
            book: Set(record.book),
            creation_name: Set(record.creation_name),
            creation_date: Set(record.creation_date),
            revision_name: Set(record.revision_name),
            revision_date: Set(record.revision_date),
            deal_name: Set(record.deal_name),
            deal_type: Set(record.deal_type),
            source_list_id: Set(record.source_list_id),
            side: Set(record.side),
        }
    }
}
