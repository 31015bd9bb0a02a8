use std::fmt;

/// Request-scoped logger.
///
/// Obtained from `Ctx<Authed>::log()`. Every event carries the request id and
/// the acting principal's id. Values wrapped in `Secret` print as
/// `[REDACTED]`, so credential material cannot reach the log through this type.
#[derive(Debug, Clone, Copy)]
pub struct RequestLog<'a> {
    request_id: &'a str,
    principal_id: i64,
}

impl<'a> RequestLog<'a> {
    pub(crate) fn new(request_id: &'a str, principal_id: i64) -> Self {
        Self {
            request_id,
            principal_id,
        }
    }

    /// Returns the request ID associated with this logger.
    pub fn request_id(&self) -> &str {
        self.request_id
    }

    /// Returns the principal ID associated with this logger.
    pub fn principal_id(&self) -> i64 {
        self.principal_id
    }

    /// Logs an info-level message.
    ///
    /// ```no_run
    /// # use account_core::{RequestLog, Secret};
    /// # fn example(log: &RequestLog) {
    /// let hash = Secret::new("$argon2id$...".to_string());
    /// log.info(format_args!("stored credential {:?}", hash));
    /// # }
    /// ```
    pub fn info(&self, args: fmt::Arguments<'_>) {
        tracing::info!(
            request_id = %self.request_id,
            principal_id = self.principal_id,
            "{}",
            args
        );
    }

    /// Logs a warning-level message.
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        tracing::warn!(
            request_id = %self.request_id,
            principal_id = self.principal_id,
            "{}",
            args
        );
    }

    /// Logs an error-level message.
    pub fn error(&self, args: fmt::Arguments<'_>) {
        tracing::error!(
            request_id = %self.request_id,
            principal_id = self.principal_id,
            "{}",
            args
        );
    }

    /// Logs a debug-level message.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(
            request_id = %self.request_id,
            principal_id = self.principal_id,
            "{}",
            args
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Secret;

    #[test]
    fn logger_carries_request_and_principal() {
        let log = RequestLog::new("req-7", 42);
        assert_eq!(log.request_id(), "req-7");
        assert_eq!(log.principal_id(), 42);
    }

    #[test]
    fn secrets_format_redacted_in_log_arguments() {
        let hash = Secret::new("$2a$10$abc".to_string());
        let rendered = format!("{}", format_args!("stored {:?}", hash));
        assert_eq!(rendered, "stored [REDACTED]");

        let subscriber = tracing_subscriber::fmt().with_test_writer().finish();
        let _guard = tracing::subscriber::set_default(subscriber);
        RequestLog::new("req-1", 1).info(format_args!("stored {:?}", hash));
    }
}
