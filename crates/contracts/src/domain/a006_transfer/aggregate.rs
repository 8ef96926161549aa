use crate::enums::transfer_status::TransferStatus;
use crate::shared::collection::{Entity, FieldValue, FilterDef};
use crate::shared::form::{FieldArray, FieldError, FormDraft, Validate, ValidationErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Строка перемещения
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferLine {
    pub product_id: String,
    pub quantity: u32,
}

impl Validate for TransferLine {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.product_id.trim().is_empty() {
            errors.push(FieldError::new("productId", "Select a product"));
        }
        if self.quantity == 0 {
            errors.push(FieldError::new("quantity", "Quantity must be at least 1"));
        }
        errors
    }
}

/// Перемещение товаров между складами
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: String,
    pub reference: String,
    pub from_warehouse_id: String,
    pub to_warehouse_id: String,
    #[serde(default)]
    pub status: TransferStatus,
    #[serde(default)]
    pub lines: Vec<TransferLine>,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Transfer {
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

impl Entity for Transfer {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "reference" => Some(FieldValue::Text(&self.reference)),
            "fromWarehouseId" => Some(FieldValue::Text(&self.from_warehouse_id)),
            "toWarehouseId" => Some(FieldValue::Text(&self.to_warehouse_id)),
            "status" => Some(FieldValue::Text(self.status.code())),
            "quantity" => Some(FieldValue::Number(f64::from(self.total_quantity()))),
            "note" => self.note.as_deref().map(FieldValue::Text),
            "createdAt" => Some(FieldValue::Timestamp(self.created_at)),
            _ => None,
        }
    }
}

pub const TRANSFER_FILTERS: &[FilterDef] = &[
    FilterDef::search("q", &["reference", "note"]),
    FilterDef::category("status", "status"),
    FilterDef::category("from", "fromWarehouseId"),
    FilterDef::category("to", "toWarehouseId"),
];

/// Перевести перемещение `id` в следующий статус в локальной копии списка.
///
/// Меняется только сущность с этим id; возвращает новый статус или `None`,
/// если сущность не найдена или статус конечный.
pub fn advance_local_status(transfers: &mut [Transfer], id: &str) -> Option<TransferStatus> {
    let transfer = transfers.iter_mut().find(|t| t.id == id)?;
    let next = transfer.status.next()?;
    transfer.status = next;
    Some(next)
}

/// Тело запроса создания перемещения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransferRequest {
    pub from_warehouse_id: String,
    pub to_warehouse_id: String,
    pub lines: Vec<TransferLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Черновик формы перемещения
#[derive(Debug, Clone, Default)]
pub struct TransferDraft {
    pub from_warehouse_id: String,
    pub to_warehouse_id: String,
    pub note: String,
    pub lines: FieldArray<TransferLine>,
}

impl TransferDraft {
    pub fn to_request(&self) -> CreateTransferRequest {
        let note = self.note.trim();
        CreateTransferRequest {
            from_warehouse_id: self.from_warehouse_id.clone(),
            to_warehouse_id: self.to_warehouse_id.clone(),
            lines: self.lines.rows().to_vec(),
            note: (!note.is_empty()).then(|| note.to_string()),
        }
    }
}

impl FormDraft for TransferDraft {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require("fromWarehouseId", &self.from_warehouse_id, "Select a source warehouse");
        errors.require("toWarehouseId", &self.to_warehouse_id, "Select a destination warehouse");
        if !self.from_warehouse_id.is_empty() && self.from_warehouse_id == self.to_warehouse_id {
            errors.add_field("toWarehouseId", "Destination must differ from source");
        }
        self.lines.validate_into("lines", &mut errors);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{FormPhase, FormSession};

    fn transfer(id: &str, status: TransferStatus) -> Transfer {
        Transfer {
            id: id.to_string(),
            reference: format!("TR-{}", id),
            from_warehouse_id: "w1".into(),
            to_warehouse_id: "w2".into(),
            status,
            lines: vec![],
            note: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_local_status_changes_single_entity() {
        let mut items = vec![
            transfer("1", TransferStatus::Pending),
            transfer("2", TransferStatus::Pending),
        ];
        assert_eq!(advance_local_status(&mut items, "2"), Some(TransferStatus::InTransit));
        assert_eq!(items[0].status, TransferStatus::Pending);
        assert_eq!(advance_local_status(&mut items, "2"), Some(TransferStatus::Completed));
        assert_eq!(advance_local_status(&mut items, "2"), None);
        assert_eq!(advance_local_status(&mut items, "missing"), None);
    }

    #[test]
    fn test_transfer_form_flow() {
        let mut session: FormSession<TransferDraft> = FormSession::default();
        session
            .edit(|d| {
                d.from_warehouse_id = "w1".into();
                d.to_warehouse_id = "w1".into();
            })
            .unwrap();

        let err = session.begin_submit().unwrap_err();
        assert!(err.to_string().contains("validation"));
        assert_eq!(session.errors().row("lines", 0).len(), 2);
        assert!(session.errors().field("toWarehouseId").is_some());

        session
            .try_edit(|d| {
                d.to_warehouse_id = "w2".into();
                d.lines.set(0, TransferLine { product_id: "p1".into(), quantity: 3 })?;
                let i = d.lines.append();
                d.lines.set(i, TransferLine { product_id: "p2".into(), quantity: 1 })
            })
            .unwrap();

        let draft = session.begin_submit().unwrap();
        let request = draft.to_request();
        assert_eq!(request.lines.len(), 2);
        assert_eq!(request.note, None);
        assert_eq!(session.phase(), FormPhase::Submitting);
    }
}
