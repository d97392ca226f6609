use crate::state::upload::{UploadPhase, UploadState};

pub fn phase_label(phase: &UploadPhase) -> String {
    match phase {
        UploadPhase::Idle => "Ready to upload".into(),
        UploadPhase::Validating => "Checking file...".into(),
        UploadPhase::Uploading => "Uploading...".into(),
        UploadPhase::Analyzing => "Analyzing... This may take a while".into(),
        UploadPhase::Correlating => "Fetching analysis record...".into(),
        UploadPhase::Ready => "Analysis complete!".into(),
        UploadPhase::Failed(cause) => cause.message(),
    }
}

pub fn is_running(phase: &UploadPhase) -> bool {
    matches!(
        phase,
        UploadPhase::Validating
            | UploadPhase::Uploading
            | UploadPhase::Analyzing
            | UploadPhase::Correlating
    )
}

/// Submit is only offered for a freshly selected file.
pub fn can_submit(state: &UploadState) -> bool {
    state
        .job
        .as_ref()
        .map(|job| job.phase == UploadPhase::Idle)
        .unwrap_or(false)
}

pub fn format_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}
