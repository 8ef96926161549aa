use serde::{Deserialize, Serialize};
use std::fmt;

/// Тип уведомления
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    LowStock,
    Order,
    Transfer,
    Billing,
    System,
}

impl NotificationKind {
    pub fn code(&self) -> &'static str {
        match self {
            NotificationKind::LowStock => "low_stock",
            NotificationKind::Order => "order",
            NotificationKind::Transfer => "transfer",
            NotificationKind::Billing => "billing",
            NotificationKind::System => "system",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            NotificationKind::LowStock => "Low stock",
            NotificationKind::Order => "Orders",
            NotificationKind::Transfer => "Transfers",
            NotificationKind::Billing => "Billing",
            NotificationKind::System => "System",
        }
    }

    pub fn all() -> Vec<NotificationKind> {
        vec![
            NotificationKind::LowStock,
            NotificationKind::Order,
            NotificationKind::Transfer,
            NotificationKind::Billing,
            NotificationKind::System,
        ]
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
