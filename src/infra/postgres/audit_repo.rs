use {
    crate::domain::{audit::AuditEvent, error::AuditError, sink::AuditSink},
    sqlx::{PgExecutor, PgPool},
    std::{future::Future, pin::Pin},
};

/// Append one row to `audit_log`.
///
/// Generic over the executor so callers can pass the pool (one borrowed
/// connection) or their own transaction to commit the audit row together
/// with a business write.
pub async fn insert_audit_event<'e, E>(executor: E, event: &AuditEvent) -> Result<(), AuditError>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        r#"
        INSERT INTO audit_log (timestamp, service, user_id, action, entity, entity_id, request_ip, details)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8::jsonb)
        "#,
    )
    .bind(event.timestamp())
    .bind(event.service().as_str())
    .bind(event.user_id())
    .bind(event.action())
    .bind(event.entity())
    .bind(event.entity_id())
    .bind(event.request_ip())
    .bind(event.encoded_details())
    .execute(executor)
    .await?;

    Ok(())
}

#[derive(Clone)]
pub struct PgAuditSink {
    pool: PgPool,
}

impl PgAuditSink {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AuditSink for PgAuditSink {
    fn insert<'a>(
        &'a self,
        event: &'a AuditEvent,
    ) -> Pin<Box<dyn Future<Output = Result<(), AuditError>> + Send + 'a>> {
        Box::pin(insert_audit_event(&self.pool, event))
    }
}
