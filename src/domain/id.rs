use derive_more::Display;
use std::sync::Arc;

use super::error::AuditError;

/// Label of the deployable unit that emits audit events (`backend-go`).
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct ServiceLabel(Arc<str>);

impl ServiceLabel {
    pub fn new(label: impl Into<String>) -> Result<Self, AuditError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(AuditError::Validation(
                "service label must not be empty".into(),
            ));
        }
        ensure_storable("service", &label)?;
        Ok(Self(label.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// PostgreSQL text columns cannot hold NUL.
pub fn ensure_storable(field: &str, value: &str) -> Result<(), AuditError> {
    if value.contains('\0') {
        return Err(AuditError::Validation(format!(
            "{field} must not contain NUL characters"
        )));
    }
    Ok(())
}
