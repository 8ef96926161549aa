use crate::enums::notification_kind::NotificationKind;
use crate::shared::collection::{Entity, FieldValue, FilterDef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Уведомление пользователя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub message: String,
    pub kind: NotificationKind,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn read_state(&self) -> &'static str {
        if self.is_read {
            "read"
        } else {
            "unread"
        }
    }
}

impl Entity for Notification {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "title" => Some(FieldValue::Text(&self.title)),
            "message" => Some(FieldValue::Text(&self.message)),
            "kind" => Some(FieldValue::Text(self.kind.code())),
            "readState" => Some(FieldValue::Text(self.read_state())),
            "createdAt" => Some(FieldValue::Timestamp(self.created_at)),
            _ => None,
        }
    }
}

pub const NOTIFICATION_FILTERS: &[FilterDef] = &[
    FilterDef::search("q", &["title", "message"]),
    FilterDef::category("kind", "kind"),
    FilterDef::category("read", "readState"),
];

/// Тело запроса отметки уведомлений прочитанными
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkReadRequest {
    pub ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::collection::{derive_view, FilterSet, FilterState, SortSpec};

    fn notification(id: &str, title: &str, kind: NotificationKind, is_read: bool, hour: u32) -> Notification {
        Notification {
            id: id.to_string(),
            title: title.to_string(),
            message: String::new(),
            kind,
            is_read,
            created_at: format!("2024-05-01T{:02}:00:00Z", hour).parse().unwrap(),
        }
    }

    #[test]
    fn test_unread_filter_newest_first() {
        let items = vec![
            notification("1", "Low stock: Laptop", NotificationKind::LowStock, false, 9),
            notification("2", "Order #1001 shipped", NotificationKind::Order, true, 10),
            notification("3", "Low stock: Mouse", NotificationKind::LowStock, false, 11),
        ];
        let state = FilterState::new().with("read", "unread");
        let set = FilterSet::compile(NOTIFICATION_FILTERS, &state).unwrap();
        let view = derive_view(&items, &set, Some(&SortSpec::desc("createdAt")));
        let ids: Vec<&str> = view.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_kind_wire_format() {
        let json = r#"{"id":"n1","title":"t","kind":"low_stock","createdAt":"2024-05-01T09:00:00Z"}"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind, NotificationKind::LowStock);
        assert!(!n.is_read);
    }
}
