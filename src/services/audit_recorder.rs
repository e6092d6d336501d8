use {
    crate::domain::{
        audit::{AuditEvent, NewAuditEvent},
        clock::{Clock, SystemClock},
        error::AuditError,
        id::ServiceLabel,
        sink::AuditSink,
    },
    std::{sync::Arc, time::Duration},
};

/// Builds audit events and writes each one through the sink under a deadline.
///
/// The recorder never retries and never logs its own failures; callers
/// decide whether a failed audit blocks the action being audited.
#[derive(Clone)]
pub struct AuditRecorder {
    sink: Arc<dyn AuditSink>,
    clock: Arc<dyn Clock>,
    service: ServiceLabel,
    deadline: Duration,
}

impl AuditRecorder {
    pub fn new(sink: Arc<dyn AuditSink>, service: ServiceLabel, deadline: Duration) -> Self {
        Self {
            sink,
            clock: Arc::new(SystemClock),
            service,
            deadline,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Record one event under the default deadline.
    pub async fn record(&self, event: NewAuditEvent) -> Result<(), AuditError> {
        self.record_within(event, self.deadline).await
    }

    /// Record one event, dropping the in-flight insert once `deadline` elapses.
    pub async fn record_within(
        &self,
        event: NewAuditEvent,
        deadline: Duration,
    ) -> Result<(), AuditError> {
        let event = AuditEvent::new(self.clock.now(), self.service.clone(), event)?;

        tokio::time::timeout(deadline, self.sink.insert(&event))
            .await
            .map_err(|_| AuditError::Timeout(deadline))?
    }
}
