//! Trade entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::domain::Trade;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "trade")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub account: Option<String>,
    #[sea_orm(column_name = "type")]
    pub trade_type: Option<String>,
    pub buy_quantity: Option<f64>,
    pub sell_quantity: Option<f64>,
    pub buy_price: Option<f64>,
    pub sell_price: Option<f64>,
    pub benchmark: Option<String>,
    pub trade_date: Option<DateTimeUtc>,
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

impl From<Model> for Trade {
    fn from(model: Model) -> Self {
        Trade {
            id: Some(model.id),
            account: model.account,
            trade_type: model.trade_type,
            buy_quantity: model.buy_quantity,
            sell_quantity: model.sell_quantity,
            buy_price: model.buy_price,
            sell_price: model.sell_price,
            benchmark: model.benchmark,
            trade_date: model.trade_date,
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

impl From<Trade> for ActiveModel {
    fn from(record: Trade) -> Self {
        ActiveModel {
            id: record.id.map_or(NotSet, Set),
            account: Set(record.account),
            trade_type: Set(record.trade_type),
            buy_quantity: Set(record.buy_quantity),
            sell_quantity: Set(record.sell_quantity),
            buy_price: Set(record.buy_price),
            sell_price: Set(record.sell_price),
            benchmark: Set(record.benchmark),
            trade_date: Set(record.trade_date),
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
