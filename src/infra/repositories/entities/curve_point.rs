//! Curve point entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::domain::CurvePoint;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "curvepoint")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub curve_id: Option<i32>,
    pub as_of_date: Option<DateTimeUtc>,
    pub term: Option<f64>,
    pub value: Option<f64>,
    pub creation_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CurvePoint {
    fn from(model: Model) -> Self {
        CurvePoint {
            id: Some(model.id),
            curve_id: model.curve_id,
            as_of_date: model.as_of_date,
            term: model.term,
            value: model.value,
            creation_date: model.creation_date,
        }
    }
}

impl From<CurvePoint> for ActiveModel {
    fn from(record: CurvePoint) -> Self {
        ActiveModel {
            id: record.id.map_or(NotSet, Set),
            curve_id: Set(record.curve_id),
            as_of_date: Set(record.as_of_date),
            term: Set(record.term),
            value: Set(record.value),
            creation_date: Set(record.creation_date),
        }
    }
}
