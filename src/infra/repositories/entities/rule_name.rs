//! Rule name entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::domain::RuleName;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rulename")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub json: Option<String>,
    pub template: Option<String>,
    pub sql_str: Option<String>,
    pub sql_part: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for RuleName {
    fn from(model: Model) -> Self {
        RuleName {
            id: Some(model.id),
            name: model.name,
            description: model.description,
            json: model.json,
            template: model.template,
            sql_str: model.sql_str,
            sql_part: model.sql_part,
        }
    }
}

impl From<RuleName> for ActiveModel {
    fn from(record: RuleName) -> Self {
        ActiveModel {
            id: record.id.map_or(NotSet, Set),
            name: Set(record.name),
            description: Set(record.description),
            json: Set(record.json),
            template: Set(record.template),
            sql_str: Set(record.sql_str),
            sql_part: Set(record.sql_part),
        }
    }
}
