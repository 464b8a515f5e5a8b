use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

/// One field definition inside a form. Order is the rendering order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub field_name: String,
    pub field_type: String,
}

/// Request body for form creation. Name and fields default to empty so a
/// missing field is reported the same way as an empty one.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormRequest {
    #[serde(default)]
    pub form_name: String,
    #[serde(default)]
    pub fields: Vec<FormField>,
}

/// Request body for an anonymous submission. The payload is stored opaquely
/// and never checked against the form's declared fields.
#[derive(Debug, Deserialize)]
pub struct SubmitFormRequest {
    pub data: Value,
}

/// One stored submission as rendered on the dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
    pub data: Value,
}

/// One form with its field list and submission log.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub id: Uuid,
    pub admin_id: Uuid,
    pub form_name: String,
    pub fields: Vec<FormField>,
    pub submissions: Vec<SubmissionResponse>,
}

/// Generic acknowledgment body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_serializes_camel_case() {
        let json = serde_json::to_string(&FormField {
            field_name: "Q1".into(),
            field_type: "text".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"fieldName":"Q1","fieldType":"text"}"#);
    }

    #[test]
    fn create_request_defaults_missing_fields() {
        let req: CreateFormRequest = serde_json::from_str(r#"{"formName":"Survey"}"#).unwrap();
        assert_eq!(req.form_name, "Survey");
        assert!(req.fields.is_empty());
    }

    #[test]
    fn field_order_survives_roundtrip() {
        let req: CreateFormRequest = serde_json::from_str(
            r#"{"formName":"Survey","fields":[
                {"fieldName":"Q2","fieldType":"text"},
                {"fieldName":"Q1","fieldType":"number"}
            ]}"#,
        )
        .unwrap();
        let names: Vec<&str> = req.fields.iter().map(|f| f.field_name.as_str()).collect();
        assert_eq!(names, ["Q2", "Q1"]);
    }
}
