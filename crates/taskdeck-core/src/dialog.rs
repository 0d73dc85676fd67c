use serde::Serialize;
use thiserror::Error;

use crate::board::STATUS_TO_DO;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormRejection {
    #[error("Title is required")]
    TitleRequired,
    #[error("No token found")]
    MissingToken,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateFields {
    pub title: String,
    pub description: String,
    pub board: Option<i64>,
    pub status: Option<String>,
}

impl CreateFields {
    pub fn new_board() -> Self {
        Self::default()
    }

    pub fn new_task(board_id: i64) -> Self {
        Self {
            board: Some(board_id),
            status: Some(STATUS_TO_DO.to_string()),
            ..Self::default()
        }
    }

    pub fn plan(&self, token: Option<&str>) -> Result<PlannedCreate, FormRejection> {
        if self.title.trim().is_empty() {
            return Err(FormRejection::TitleRequired);
        }
        let token = token.ok_or(FormRejection::MissingToken)?;

        Ok(PlannedCreate {
            request: CreateRequest {
                title: self.title.clone(),
                description: self.description.clone(),
                board_id: self.board,
                status: self.status.clone(),
            },
            token: token.to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateRequest {
    pub title: String,

    pub description: String,

    #[serde(rename = "boardId", skip_serializing_if = "Option::is_none")]
    pub board_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedCreate {
    pub request: CreateRequest,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome {
    Created(serde_json::Value),
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_title_is_rejected_before_anything_else() {
        let mut fields = CreateFields::new_board();
        fields.title = "   ".to_string();

        assert_eq!(fields.plan(Some("tok")), Err(FormRejection::TitleRequired));
        assert_eq!(fields.plan(None), Err(FormRejection::TitleRequired));
        assert_eq!(
            FormRejection::TitleRequired.to_string(),
            "Title is required"
        );
    }

    #[test]
    fn missing_token_blocks_the_request_locally() {
        let mut fields = CreateFields::new_board();
        fields.title = "Launch checklist".to_string();

        assert_eq!(fields.plan(None), Err(FormRejection::MissingToken));
        assert_eq!(FormRejection::MissingToken.to_string(), "No token found");
    }

    #[test]
    fn board_mode_omits_the_optional_fields_entirely() {
        let mut fields = CreateFields::new_board();
        fields.title = "Launch checklist".to_string();

        let planned = fields.plan(Some("tok")).expect("plan board create");
        let body = serde_json::to_value(&planned.request).expect("encode request");

        assert_eq!(
            body,
            json!({ "title": "Launch checklist", "description": "" })
        );
        assert_eq!(planned.token, "tok");
    }

    #[test]
    fn task_mode_defaults_status_and_carries_the_parent_board() {
        let fields = CreateFields::new_task(7);

        assert_eq!(fields.status.as_deref(), Some(STATUS_TO_DO));
        assert_eq!(fields.board, Some(7));
    }

    #[test]
    fn task_request_matches_the_wire_contract() {
        let mut fields = CreateFields::new_task(7);
        fields.title = "Write spec".to_string();
        fields.status = Some("Doing".to_string());

        let planned = fields.plan(Some("tok")).expect("plan task create");
        let body = serde_json::to_value(&planned.request).expect("encode request");

        assert_eq!(
            body,
            json!({
                "title": "Write spec",
                "description": "",
                "boardId": 7,
                "status": "Doing"
            })
        );
    }

    #[test]
    fn title_is_validated_trimmed_but_sent_verbatim() {
        let mut fields = CreateFields::new_board();
        fields.title = "  Launch checklist ".to_string();

        let planned = fields.plan(Some("tok")).expect("plan board create");
        assert_eq!(planned.request.title, "  Launch checklist ");
    }
}
