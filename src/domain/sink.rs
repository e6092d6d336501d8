use {
    super::audit::AuditEvent,
    super::error::AuditError,
    std::{future::Future, pin::Pin},
};

/// Where built audit events get persisted. One call, one row.
pub trait AuditSink: Send + Sync {
    fn insert<'a>(
        &'a self,
        event: &'a AuditEvent,
    ) -> Pin<Box<dyn Future<Output = Result<(), AuditError>> + Send + 'a>>;
}
