//! Rating entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::domain::Rating;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rating")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub moodys_rating: Option<String>,
    pub sand_p_rating: Option<String>,
    pub fitch_rating: Option<String>,
    pub order_number: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Rating {
    fn from(model: Model) -> Self {
        Rating {
            id: Some(model.id),
            moodys_rating: model.moodys_rating,
            sand_p_rating: model.sand_p_rating,
            fitch_rating: model.fitch_rating,
            order_number: model.order_number,
        }
    }
}

impl From<Rating> for ActiveModel {
    fn from(record: Rating) -> Self {
        ActiveModel {
            id: record.id.map_or(NotSet, Set),
            moodys_rating: Set(record.moodys_rating),
            sand_p_rating: Set(record.sand_p_rating),
            fitch_rating: Set(record.fitch_rating),
            order_number: Set(record.order_number),
        }
    }
}
