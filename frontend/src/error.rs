use thiserror::Error;

/// Client-side failure classification. Workflow steps land their cause in
/// `UploadPhase::Failed`; the login panel and the expiry dialog consume the
/// auth variants directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// Rejected before any network use (type or size constraint).
    #[error("{0}")]
    Validation(String),
    #[error("Upload failed: {0}")]
    Upload(String),
    #[error("Analysis failed: {0}")]
    Analysis(String),
    /// The history ledger holds no record for the uploaded file.
    #[error("No analysis record was found for this upload")]
    CorrelationNotFound,
    #[error("Download failed: {0}")]
    ArtifactUnavailable(String),
    #[error("{0}")]
    Auth(String),
    #[error("Your session has expired. Please log in again.")]
    SessionExpired,
}

impl WorkflowError {
    /// Message suitable for inline display.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_passes_through() {
        let err = WorkflowError::Validation("Only audio and video files are supported".into());
        assert_eq!(err.message(), "Only audio and video files are supported");
    }

    #[test]
    fn step_failures_name_the_step() {
        assert!(WorkflowError::Upload("500 Internal Server Error".into())
            .message()
            .starts_with("Upload failed"));
        assert!(WorkflowError::Analysis("boom".into())
            .message()
            .starts_with("Analysis failed"));
        assert!(WorkflowError::CorrelationNotFound
            .message()
            .contains("No analysis record"));
    }
}
