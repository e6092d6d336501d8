use {
    super::details::Details,
    super::error::AuditError,
    super::id::{ServiceLabel, ensure_storable},
    chrono::{DateTime, Utc},
};

/// What the caller knows about the action being audited.
#[derive(Debug, Clone, Default)]
pub struct NewAuditEvent {
    pub action: String,
    pub entity: String,
    pub entity_id: String,
    pub user_id: String,
    pub request_ip: String,
    pub details: Details,
}

/// One row of `audit_log`, built and serialized up front and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEvent {
    timestamp: DateTime<Utc>,
    service: ServiceLabel,
    user_id: String,
    action: String,
    entity: String,
    entity_id: String,
    request_ip: String,
    details: Details,
    encoded_details: String,
}

impl AuditEvent {
    /// Fails closed on NUL-bearing text or unencodable details.
    pub fn new(
        timestamp: DateTime<Utc>,
        service: ServiceLabel,
        event: NewAuditEvent,
    ) -> Result<Self, AuditError> {
        for (field, value) in [
            ("user_id", &event.user_id),
            ("action", &event.action),
            ("entity", &event.entity),
            ("entity_id", &event.entity_id),
            ("request_ip", &event.request_ip),
        ] {
            ensure_storable(field, value)?;
        }
        event.details.ensure_storable()?;

        let encoded_details = event.details.encode()?;

        Ok(Self {
            timestamp,
            service,
            user_id: event.user_id,
            action: event.action,
            entity: event.entity,
            entity_id: event.entity_id,
            request_ip: event.request_ip,
            details: event.details,
            encoded_details,
        })
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn service(&self) -> &ServiceLabel {
        &self.service
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    pub fn request_ip(&self) -> &str {
        &self.request_ip
    }

    pub fn details(&self) -> &Details {
        &self.details
    }

    /// JSON text bound to the `details` column.
    pub fn encoded_details(&self) -> &str {
        &self.encoded_details
    }
}
