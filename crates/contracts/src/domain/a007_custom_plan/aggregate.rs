use crate::shared::form::{FieldArray, FieldError, FormDraft, KeyValueArray, ValidationErrors};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

pub const MAX_LIMITATION_LEN: usize = 200;

/// Запрос индивидуального тарифа.
///
/// Формат на проводе: объект функций и массив строк ограничений, например
/// `{"description": "...", "companySize": 40, "features": {"users": 50},
/// "limitations": ["No SSO"]}`. Функции без лимита в `features` не
/// попадают (как `undefined` в JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomPlanRequest {
    pub description: String,
    pub company_size: u32,
    #[serde(serialize_with = "serialize_defined", default)]
    pub features: BTreeMap<String, Option<u32>>,
    #[serde(default)]
    pub limitations: Vec<String>,
}

fn serialize_defined<S: Serializer>(
    features: &BTreeMap<String, Option<u32>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let defined: Vec<(&String, u32)> = features
        .iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect();
    let mut map = serializer.serialize_map(Some(defined.len()))?;
    for (k, v) in defined {
        map.serialize_entry(k, &v)?;
    }
    map.end()
}

/// Ответ сервера на запрос тарифа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomPlanResponse {
    pub request_id: String,
}

/// Черновик формы запроса тарифа
#[derive(Debug, Clone, Default)]
pub struct CustomPlanDraft {
    pub description: String,
    /// Размер компании как введен в поле формы
    pub company_size: String,
    /// Функция -> лимит (пусто = без лимита)
    pub features: KeyValueArray<Option<u32>>,
    pub limitations: FieldArray<String>,
}

impl CustomPlanDraft {
    fn parsed_company_size(&self) -> Option<u32> {
        self.company_size.trim().parse::<u32>().ok().filter(|n| *n > 0)
    }

    /// Вызывать после успешной валидации. Пустые строки ограничений
    /// не отправляются.
    pub fn to_request(&self) -> CustomPlanRequest {
        CustomPlanRequest {
            description: self.description.trim().to_string(),
            company_size: self.parsed_company_size().unwrap_or_default(),
            features: self.features.to_map(),
            limitations: self
                .limitations
                .iter()
                .map(|l| l.trim())
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

impl FormDraft for CustomPlanDraft {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require("description", &self.description, "Describe what you need");
        if self.parsed_company_size().is_none() {
            errors.add_field("companySize", "Company size must be a positive number");
        }
        self.features.validate_into("features", true, &mut errors);
        for (index, limitation) in self.limitations.iter().enumerate() {
            if limitation.chars().count() > MAX_LIMITATION_LEN {
                errors.add_row(
                    "limitations",
                    index,
                    FieldError::new("text", format!("At most {} characters", MAX_LIMITATION_LEN)),
                );
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{FormPhase, FormSession, RenamePolicy};

    #[test]
    fn test_request_wire_shape() {
        let mut draft = CustomPlanDraft {
            description: "Multi-store retail chain".into(),
            company_size: "40".into(),
            ..Default::default()
        };
        draft.features.insert("users", Some(50)).unwrap();
        draft.features.insert("sso", None).unwrap();
        draft.limitations.set(0, "No phone support".into()).unwrap();
        draft.limitations.append();

        assert!(draft.validate().is_empty());
        let json = serde_json::to_value(draft.to_request()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "description": "Multi-store retail chain",
                "companySize": 40,
                "features": {"users": 50},
                "limitations": ["No phone support"]
            })
        );
    }

    #[test]
    fn test_request_deserialize() {
        let json = r#"{"description":"d","companySize":5,"features":{"users":10},"limitations":[]}"#;
        let req: CustomPlanRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.features.get("users"), Some(&Some(10)));
    }

    #[test]
    fn test_validation_errors() {
        let mut draft = CustomPlanDraft {
            company_size: "0".into(),
            ..Default::default()
        };
        draft.features.insert("users", Some(1)).unwrap();
        draft.features.append();
        draft.limitations.set(0, "x".repeat(MAX_LIMITATION_LEN + 1)).unwrap();

        let errors = draft.validate();
        assert!(errors.field("description").is_some());
        assert!(errors.field("companySize").is_some());
        assert_eq!(errors.invalid_rows("features"), vec![1]);
        assert_eq!(errors.invalid_rows("limitations"), vec![0]);
    }

    #[test]
    fn test_feature_rename_in_session() {
        let mut draft = CustomPlanDraft {
            description: "d".into(),
            company_size: "3".into(),
            ..Default::default()
        };
        draft.features.insert("users", Some(5)).unwrap();
        draft.features.insert("projects", Some(2)).unwrap();

        let mut session = FormSession::new(draft);
        assert!(session
            .try_edit(|d| d.features.rename("users", "projects", RenamePolicy::Reject))
            .is_err());
        session
            .try_edit(|d| d.features.rename("users", "seats", RenamePolicy::Reject))
            .unwrap();
        session.cancel().unwrap();
        assert_eq!(session.phase(), FormPhase::Cancelled);
        assert!(session.draft().features.to_map().is_empty());
    }
}
