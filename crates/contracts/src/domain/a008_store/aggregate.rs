use crate::shared::collection::{Entity, FieldValue};
use serde::{Deserialize, Serialize};

/// Магазин (арендатор) пользователя. Все списки дашборда строятся
/// в контексте выбранного магазина.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub currency: String,
}

impl Entity for Store {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "currency" => Some(FieldValue::Text(&self.currency)),
            _ => None,
        }
    }
}
