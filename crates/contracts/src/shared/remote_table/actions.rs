use serde::{Deserialize, Serialize};

use super::selection::SelectionSet;
use crate::shared::api::ValidationError;

/// Действие над строкой таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionVerb {
    Approve,
    Reject,
    Block,
    Unblock,
    Burn,
    Purchase,
    Delete,
}

impl ActionVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionVerb::Approve => "APPROVE",
            ActionVerb::Reject => "REJECT",
            ActionVerb::Block => "BLOCK",
            ActionVerb::Unblock => "UNBLOCK",
            ActionVerb::Burn => "BURN",
            ActionVerb::Purchase => "PURCHASE",
            ActionVerb::Delete => "DELETE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionVerb::Approve => "Approve",
            ActionVerb::Reject => "Reject",
            ActionVerb::Block => "Block",
            ActionVerb::Unblock => "Unblock",
            ActionVerb::Burn => "Burn",
            ActionVerb::Purchase => "Purchase",
            ActionVerb::Delete => "Delete",
        }
    }

    /// Отклонение требует непустого комментария
    pub fn requires_remark(&self) -> bool {
        matches!(self, ActionVerb::Reject)
    }
}

/// Можно ли нажать "Confirm" в диалоге с таким комментарием
pub fn can_confirm(verb: ActionVerb, remark: &str) -> bool {
    !verb.requires_remark() || !remark.trim().is_empty()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActionRequest {
    pub row_id: String,
    pub verb: ActionVerb,
    pub remark: Option<String>,
}

impl RowActionRequest {
    pub fn new(row_id: impl Into<String>, verb: ActionVerb) -> Self {
        Self {
            row_id: row_id.into(),
            verb,
            remark: None,
        }
    }

    pub fn with_remark(mut self, remark: &str) -> Self {
        let trimmed = remark.trim();
        self.remark = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn validate(self) -> Result<Self, ValidationError> {
        if self.verb.requires_remark() && self.remark.is_none() {
            return Err(ValidationError::new(
                "remark",
                "Remark is required when rejecting",
            ));
        }
        Ok(self)
    }

    pub fn remark_or_empty(&self) -> String {
        self.remark.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkActionRequest {
    pub ids: Vec<String>,
    pub verb: ActionVerb,
}

impl BulkActionRequest {
    pub fn from_selection(
        selection: &SelectionSet,
        verb: ActionVerb,
    ) -> Result<Self, ValidationError> {
        if selection.is_empty() {
            return Err(ValidationError::new("selection", "Select at least one row"));
        }
        Ok(Self {
            ids: selection.ids(),
            verb,
        })
    }
}

/// Результат действия: сообщение для уведомления и признак успеха
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActionResult {
    pub success: bool,
    pub message: String,
}

impl RowActionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Флаг "массовое действие выполняется": пока он поднят, обе кнопки заблокированы
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkActionGuard {
    in_flight: Option<ActionVerb>,
}

impl BulkActionGuard {
    pub fn begin(&mut self, verb: ActionVerb) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        self.in_flight = Some(verb);
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = None;
    }

    pub fn in_flight(&self) -> Option<ActionVerb> {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_requires_remark() {
        assert!(!can_confirm(ActionVerb::Reject, "  "));
        assert!(can_confirm(ActionVerb::Reject, "duplicate"));
        assert!(can_confirm(ActionVerb::Approve, ""));

        let err = RowActionRequest::new("1", ActionVerb::Reject)
            .with_remark(" ")
            .validate()
            .unwrap_err();
        assert_eq!(err.field, "remark");

        let ok = RowActionRequest::new("1", ActionVerb::Reject)
            .with_remark(" spam ")
            .validate()
            .unwrap();
        assert_eq!(ok.remark.as_deref(), Some("spam"));
    }

    #[test]
    fn bulk_needs_selection() {
        let mut sel = SelectionSet::default();
        assert!(BulkActionRequest::from_selection(&sel, ActionVerb::Approve).is_err());
        sel.toggle("b", true);
        sel.toggle("a", true);
        let req = BulkActionRequest::from_selection(&sel, ActionVerb::Approve).unwrap();
        assert_eq!(req.ids, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn guard_blocks_second_bulk_action() {
        let mut guard = BulkActionGuard::default();
        assert!(guard.begin(ActionVerb::Approve));
        assert!(!guard.begin(ActionVerb::Reject));
        assert_eq!(guard.in_flight(), Some(ActionVerb::Approve));
        guard.finish();
        assert!(guard.begin(ActionVerb::Reject));
    }

    #[test]
    fn verb_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&ActionVerb::Approve).unwrap(), "\"APPROVE\"");
    }
}
