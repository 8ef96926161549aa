use serde::{Deserialize, Serialize};
use std::fmt;

/// Статус перемещения между складами
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    #[default]
    Pending,
    InTransit,
    Completed,
    Cancelled,
}

impl TransferStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "pending",
            TransferStatus::InTransit => "in_transit",
            TransferStatus::Completed => "completed",
            TransferStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "Pending",
            TransferStatus::InTransit => "In transit",
            TransferStatus::Completed => "Completed",
            TransferStatus::Cancelled => "Cancelled",
        }
    }

    pub fn all() -> Vec<TransferStatus> {
        vec![
            TransferStatus::Pending,
            TransferStatus::InTransit,
            TransferStatus::Completed,
            TransferStatus::Cancelled,
        ]
    }

    /// Следующий статус по кнопке действия ("Start" / "Complete")
    pub fn next(&self) -> Option<TransferStatus> {
        match self {
            TransferStatus::Pending => Some(TransferStatus::InTransit),
            TransferStatus::InTransit => Some(TransferStatus::Completed),
            TransferStatus::Completed | TransferStatus::Cancelled => None,
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
