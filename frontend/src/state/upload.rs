use crate::{
    api::{ApiClient, HistoryRecord},
    config::UploadLimits,
    error::WorkflowError,
};
use leptos::*;
use serde_json::Value;

/// Metadata of a picked file. The browser file handle itself stays in the
/// view layer; the state machine only carries data.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaCandidate {
    pub name: String,
    pub size: u64,
    pub media_type: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadPhase {
    Idle,
    Validating,
    Uploading,
    Analyzing,
    Correlating,
    Ready,
    Failed(WorkflowError),
}

impl UploadPhase {
    fn rank(&self) -> u8 {
        match self {
            UploadPhase::Idle => 0,
            UploadPhase::Validating => 1,
            UploadPhase::Uploading => 2,
            UploadPhase::Analyzing => 3,
            UploadPhase::Correlating => 4,
            UploadPhase::Ready => 5,
            UploadPhase::Failed(_) => 6,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadPhase::Ready | UploadPhase::Failed(_))
    }

    /// Phases only move forward; `Failed` is reachable from any
    /// non-terminal phase, and nothing leaves a terminal phase.
    pub fn can_advance_to(&self, next: &UploadPhase) -> bool {
        !self.is_terminal() && next.rank() > self.rank()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadJob {
    pub source: MediaCandidate,
    pub phase: UploadPhase,
    pub upload_id: Option<i64>,
    pub analysis: Option<Value>,
    pub request_id: Option<i64>,
}

impl UploadJob {
    fn new(source: MediaCandidate) -> Self {
        Self {
            source,
            phase: UploadPhase::Idle,
            upload_id: None,
            analysis: None,
            request_id: None,
        }
    }
}

/// Upload workflow state. `generation` bumps on every (re)selection and
/// restart; async completions carry the generation they were dispatched
/// under and are dropped when it no longer matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadState {
    pub job: Option<UploadJob>,
    pub generation: u32,
}

impl UploadState {
    /// Installs a fresh job for a validated candidate, discarding any prior
    /// job and its derived identifiers.
    pub fn install_job(&mut self, candidate: MediaCandidate) {
        self.generation = self.generation.wrapping_add(1);
        self.job = Some(UploadJob::new(candidate));
    }

    /// Claims the submission ticket: requires an Idle job. Anything else,
    /// including a submission already in flight, is a no-op.
    pub fn begin_submission(&mut self) -> Option<u32> {
        match &mut self.job {
            Some(job) if job.phase == UploadPhase::Idle => {
                job.phase = UploadPhase::Validating;
                Some(self.generation)
            }
            _ => None,
        }
    }

    /// Returns a Validating job to Idle when the local pre-flight failed
    /// before anything reached the network.
    pub fn abort_submission(&mut self) {
        if let Some(job) = &mut self.job {
            if job.phase == UploadPhase::Validating {
                job.phase = UploadPhase::Idle;
            }
        }
    }

    /// Resets a terminal job to Idle with the same source so it can be
    /// submitted again. Derived identifiers are discarded.
    pub fn restart(&mut self) {
        if let Some(job) = &self.job {
            if job.phase.is_terminal() {
                let source = job.source.clone();
                self.install_job(source);
            }
        }
    }

    fn advance(&mut self, next: UploadPhase) {
        if let Some(job) = &mut self.job {
            if job.phase.can_advance_to(&next) {
                job.phase = next;
            }
        }
    }
}

pub fn validate_candidate(
    candidate: &MediaCandidate,
    limits: &UploadLimits,
) -> Result<(), WorkflowError> {
    let media_type = candidate.media_type.to_ascii_lowercase();
    if !(media_type.contains("audio") || media_type.contains("video")) {
        return Err(WorkflowError::Validation(
            "Please select an audio or video file".into(),
        ));
    }
    // The limit itself is still acceptable; only larger files are rejected.
    if candidate.size > limits.max_bytes {
        return Err(WorkflowError::Validation(format!(
            "File size must be under {}MB",
            limits.max_megabytes()
        )));
    }
    Ok(())
}

/// Validates and installs a new job. On violation the state is untouched
/// and the failure goes back to the caller without any network use.
pub fn select_file(
    set_state: WriteSignal<UploadState>,
    candidate: MediaCandidate,
    limits: &UploadLimits,
) -> Result<(), WorkflowError> {
    validate_candidate(&candidate, limits)?;
    set_state.update(|state| state.install_job(candidate));
    Ok(())
}

/// First ledger record for the uploaded file, in server order. Duplicate
/// `file_id`s are possible; the first match wins.
pub fn correlate(records: &[HistoryRecord], upload_id: i64) -> Option<i64> {
    records
        .iter()
        .find(|record| record.file_id == upload_id)
        .map(|record| record.id)
}

/// Applies a state edit only while `generation` is still current. Returns
/// whether the edit landed; a disposed signal counts as stale.
fn apply_if_current(
    set_state: WriteSignal<UploadState>,
    generation: u32,
    edit: impl FnOnce(&mut UploadState),
) -> bool {
    set_state
        .try_update(|state| {
            if state.generation == generation {
                edit(state);
                true
            } else {
                false
            }
        })
        .unwrap_or(false)
}

fn fail(
    set_state: WriteSignal<UploadState>,
    generation: u32,
    cause: WorkflowError,
) -> Result<(), WorkflowError> {
    // A stale failure belongs to an orphaned flight; report nothing.
    if apply_if_current(set_state, generation, |state| {
        state.advance(UploadPhase::Failed(cause.clone()));
    }) {
        Err(cause)
    } else {
        Ok(())
    }
}

pub struct SubmissionInput {
    pub generation: u32,
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// Drives one claimed submission to a terminal phase: upload, analyze, then
/// correlate against the history ledger. Every write re-checks the
/// generation, so a reselection or unmount mid-flight orphans the remaining
/// steps silently.
pub async fn run_submission(
    api: &ApiClient,
    set_state: WriteSignal<UploadState>,
    input: SubmissionInput,
) -> Result<(), WorkflowError> {
    let SubmissionInput {
        generation,
        file_name,
        media_type,
        bytes,
    } = input;

    if !apply_if_current(set_state, generation, |state| {
        state.advance(UploadPhase::Uploading)
    }) {
        return Ok(());
    }

    let upload_id = match api.upload_media(&file_name, &media_type, bytes).await {
        Ok(response) => response.file_id,
        Err(error) => return fail(set_state, generation, WorkflowError::Upload(error.message)),
    };
    if !apply_if_current(set_state, generation, |state| {
        if let Some(job) = &mut state.job {
            job.upload_id = Some(upload_id);
        }
        state.advance(UploadPhase::Analyzing);
    }) {
        return Ok(());
    }

    let analysis = match api.analyze_media(upload_id).await {
        Ok(outcome) => outcome,
        Err(error) => return fail(set_state, generation, WorkflowError::Analysis(error.message)),
    };
    if !apply_if_current(set_state, generation, |state| {
        if let Some(job) = &mut state.job {
            job.analysis = Some(analysis);
        }
        state.advance(UploadPhase::Correlating);
    }) {
        return Ok(());
    }

    // A ledger the client cannot read cannot confirm a match either.
    let request_id = match api.fetch_history().await {
        Ok(records) => correlate(&records, upload_id),
        Err(_) => None,
    };
    match request_id {
        Some(request_id) => {
            apply_if_current(set_state, generation, |state| {
                if let Some(job) = &mut state.job {
                    job.request_id = Some(request_id);
                }
                state.advance(UploadPhase::Ready);
            });
            Ok(())
        }
        None => fail(set_state, generation, WorkflowError::CorrelationNotFound),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Pdf,
    Json,
    RawFile,
}

/// One artifact download order: what to fetch and the name to save it
/// under in the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRequest {
    pub kind: ArtifactKind,
    pub id: i64,
    pub filename: String,
}

/// Downloads one generated artifact. Failures surface the gateway's
/// response text.
pub async fn fetch_artifact(
    api: &ApiClient,
    kind: ArtifactKind,
    id: i64,
) -> Result<Vec<u8>, WorkflowError> {
    let result = match kind {
        ArtifactKind::Pdf => api.download_pdf_report(id).await,
        ArtifactKind::Json => api.download_json_report(id).await,
        ArtifactKind::RawFile => api.download_user_file(id).await,
    };
    result.map_err(|error| WorkflowError::ArtifactUnavailable(error.message))
}

pub fn artifact_filename(kind: ArtifactKind, id: i64, source_name: Option<&str>) -> String {
    match kind {
        ArtifactKind::Pdf => format!("report_{}.pdf", id),
        ArtifactKind::Json => format!("report_{}.json", id),
        ArtifactKind::RawFile => source_name
            .map(|name| name.to_string())
            .unwrap_or_else(|| format!("file_{}", id)),
    }
}

pub fn artifact_mime(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Pdf => "application/pdf",
        ArtifactKind::Json => "application/json",
        ArtifactKind::RawFile => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UploadLimits;

    fn audio_candidate(size: u64) -> MediaCandidate {
        MediaCandidate {
            name: "take.mp3".into(),
            size,
            media_type: "audio/mpeg".into(),
        }
    }

    fn record(id: i64, file_id: i64) -> HistoryRecord {
        HistoryRecord {
            id,
            file_id,
            report_path: None,
            request_date: "2025-01-02T03:04:05".parse().unwrap(),
        }
    }

    #[test]
    fn accepts_audio_and_video_within_the_limit() {
        let limits = UploadLimits::default();
        assert!(validate_candidate(&audio_candidate(10 * 1024 * 1024), &limits).is_ok());
        let video = MediaCandidate {
            name: "clip.mp4".into(),
            size: 1024,
            media_type: "video/mp4".into(),
        };
        assert!(validate_candidate(&video, &limits).is_ok());
    }

    #[test]
    fn the_size_limit_itself_is_still_accepted() {
        let limits = UploadLimits::default();
        assert!(validate_candidate(&audio_candidate(limits.max_bytes), &limits).is_ok());
        assert!(validate_candidate(&audio_candidate(limits.max_bytes + 1), &limits).is_err());
    }

    #[test]
    fn rejects_oversized_and_foreign_types() {
        let limits = UploadLimits::default();
        let too_big = validate_candidate(&audio_candidate(30 * 1024 * 1024), &limits);
        assert_eq!(
            too_big,
            Err(WorkflowError::Validation("File size must be under 25MB".into()))
        );

        let text = MediaCandidate {
            name: "notes.txt".into(),
            size: 10,
            media_type: "text/plain".into(),
        };
        assert_eq!(
            validate_candidate(&text, &limits),
            Err(WorkflowError::Validation(
                "Please select an audio or video file".into()
            ))
        );
    }

    #[test]
    fn declared_type_match_is_case_insensitive() {
        let limits = UploadLimits::default();
        let shouty = MediaCandidate {
            name: "take.mp3".into(),
            size: 10,
            media_type: "Audio/MPEG".into(),
        };
        assert!(validate_candidate(&shouty, &limits).is_ok());
    }

    #[test]
    fn phases_only_move_forward() {
        let order = [
            UploadPhase::Idle,
            UploadPhase::Validating,
            UploadPhase::Uploading,
            UploadPhase::Analyzing,
            UploadPhase::Correlating,
            UploadPhase::Ready,
        ];
        for pair in order.windows(2) {
            assert!(pair[0].can_advance_to(&pair[1]));
            assert!(!pair[1].can_advance_to(&pair[0]));
        }
        assert!(UploadPhase::Idle.can_advance_to(&UploadPhase::Ready));
    }

    #[test]
    fn failed_is_reachable_from_running_phases_only() {
        let failed = UploadPhase::Failed(WorkflowError::CorrelationNotFound);
        assert!(UploadPhase::Uploading.can_advance_to(&failed));
        assert!(UploadPhase::Correlating.can_advance_to(&failed));
        assert!(!UploadPhase::Ready.can_advance_to(&failed));
        assert!(!failed.can_advance_to(&UploadPhase::Idle));
        assert!(failed.is_terminal());
        assert!(UploadPhase::Ready.is_terminal());
    }

    #[test]
    fn install_job_bumps_the_generation_and_drops_derived_ids() {
        let mut state = UploadState::default();
        state.install_job(audio_candidate(10));
        let first_generation = state.generation;
        if let Some(job) = &mut state.job {
            job.upload_id = Some(7);
            job.request_id = Some(9);
        }

        state.install_job(audio_candidate(20));
        assert_eq!(state.generation, first_generation.wrapping_add(1));
        let job = state.job.unwrap();
        assert_eq!(job.phase, UploadPhase::Idle);
        assert!(job.upload_id.is_none());
        assert!(job.request_id.is_none());
    }

    #[test]
    fn submission_requires_an_idle_job() {
        let mut state = UploadState::default();
        assert_eq!(state.begin_submission(), None);

        state.install_job(audio_candidate(10));
        let ticket = state.begin_submission();
        assert_eq!(ticket, Some(state.generation));
        assert_eq!(
            state.job.as_ref().map(|job| job.phase.clone()),
            Some(UploadPhase::Validating)
        );

        // Already in flight: claiming again is a no-op.
        assert_eq!(state.begin_submission(), None);
    }

    #[test]
    fn abort_returns_a_preflight_job_to_idle() {
        let mut state = UploadState::default();
        state.install_job(audio_candidate(10));
        state.begin_submission();
        state.abort_submission();
        assert_eq!(
            state.job.as_ref().map(|job| job.phase.clone()),
            Some(UploadPhase::Idle)
        );
        // Aborting outside the pre-flight changes nothing.
        state.advance(UploadPhase::Uploading);
        state.abort_submission();
        assert_eq!(
            state.job.as_ref().map(|job| job.phase.clone()),
            Some(UploadPhase::Uploading)
        );
    }

    #[test]
    fn restart_resets_only_terminal_jobs() {
        let mut state = UploadState::default();
        state.install_job(audio_candidate(10));
        let generation = state.generation;
        state.restart();
        assert_eq!(state.generation, generation);

        if let Some(job) = &mut state.job {
            job.phase = UploadPhase::Failed(WorkflowError::CorrelationNotFound);
            job.upload_id = Some(3);
        }
        state.restart();
        assert_eq!(state.generation, generation.wrapping_add(1));
        let job = state.job.unwrap();
        assert_eq!(job.phase, UploadPhase::Idle);
        assert_eq!(job.source.name, "take.mp3");
        assert!(job.upload_id.is_none());
    }

    #[test]
    fn correlation_takes_the_first_match_in_server_order() {
        let records = vec![record(1, 11), record(2, 22)];
        assert_eq!(correlate(&records, 22), Some(2));
        assert_eq!(correlate(&records, 99), None);

        let duplicated = vec![record(5, 7), record(9, 7)];
        assert_eq!(correlate(&duplicated, 7), Some(5));
    }

    #[test]
    fn artifact_names_follow_the_request_id() {
        assert_eq!(artifact_filename(ArtifactKind::Pdf, 12, None), "report_12.pdf");
        assert_eq!(
            artifact_filename(ArtifactKind::Json, 12, None),
            "report_12.json"
        );
        assert_eq!(
            artifact_filename(ArtifactKind::RawFile, 3, Some("take.mp3")),
            "take.mp3"
        );
        assert_eq!(artifact_filename(ArtifactKind::RawFile, 3, None), "file_3");
        assert_eq!(artifact_mime(ArtifactKind::Pdf), "application/pdf");
        assert_eq!(artifact_mime(ArtifactKind::RawFile), "application/octet-stream");
    }
}
