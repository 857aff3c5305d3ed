//! Rule name reference record. Rule bodies are stored verbatim, never evaluated.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record::{field, DomainRecord, Field};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleName {
    #[serde(default)]
    pub id: Option<i32>,
    #[schema(example = "Rule Name")]
    pub name: Option<String>,
    pub description: Option<String>,
    pub json: Option<String>,
    pub template: Option<String>,
    pub sql_str: Option<String>,
    pub sql_part: Option<String>,
}

impl DomainRecord for RuleName {
    const KIND: &'static str = "rule name";

    const IDENTITY_FIELDS: &'static [Field<Self>] = &[
        field!(RuleName, name, "name"),
        field!(RuleName, description, "description"),
        field!(RuleName, json, "json"),
        field!(RuleName, template, "template"),
        field!(RuleName, sql_str, "sqlStr"),
        field!(RuleName, sql_part, "sqlPart"),
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
