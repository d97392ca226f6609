use crate::{
    components::layout::LoadingSpinner,
    pages::upload::utils::phase_label,
    state::upload::{
        artifact_filename, ArtifactKind, ArtifactRequest, UploadJob, UploadPhase, UploadState,
    },
};
use leptos::*;

const PRIMARY_BUTTON: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50";
const SECONDARY_BUTTON: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated";

#[component]
pub fn UploadStatusSection(
    state: ReadSignal<UploadState>,
    on_download: Callback<ArtifactRequest>,
    on_restart: Callback<()>,
) -> impl IntoView {
    view! {
        <div>
            {move || match state.get().job {
                None => ().into_view(),
                Some(job) => render_job(&job, on_download, on_restart),
            }}
        </div>
    }
}

fn render_job(
    job: &UploadJob,
    on_download: Callback<ArtifactRequest>,
    on_restart: Callback<()>,
) -> View {
    let label = phase_label(&job.phase);
    match &job.phase {
        // The picker already shows the selection; nothing to report yet.
        UploadPhase::Idle => ().into_view(),
        UploadPhase::Validating
        | UploadPhase::Uploading
        | UploadPhase::Analyzing
        | UploadPhase::Correlating => view! {
            <div class="bg-surface-elevated shadow rounded-lg p-6">
                <div class="flex items-center gap-2 text-sm text-fg-muted">
                    <LoadingSpinner />
                    <span>{label}</span>
                </div>
            </div>
        }
        .into_view(),
        UploadPhase::Ready => {
            let request_id = job.request_id.unwrap_or_default();
            view! {
                <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                    <p class="text-sm font-semibold text-status-success-text">{label}</p>
                    <div class="flex flex-wrap gap-2">
                        <button
                            class=PRIMARY_BUTTON
                            on:click=move |_| {
                                on_download
                                    .call(ArtifactRequest {
                                        kind: ArtifactKind::Pdf,
                                        id: request_id,
                                        filename: artifact_filename(ArtifactKind::Pdf, request_id, None),
                                    })
                            }
                        >
                            "Download PDF Report"
                        </button>
                        <button
                            class=SECONDARY_BUTTON
                            on:click=move |_| {
                                on_download
                                    .call(ArtifactRequest {
                                        kind: ArtifactKind::Json,
                                        id: request_id,
                                        filename: artifact_filename(ArtifactKind::Json, request_id, None),
                                    })
                            }
                        >
                            "Download JSON Report"
                        </button>
                        <button class=SECONDARY_BUTTON on:click=move |_| on_restart.call(())>
                            "Analyze another file"
                        </button>
                    </div>
                </div>
            }
            .into_view()
        }
        UploadPhase::Failed(_) => view! {
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <p class="text-sm font-semibold text-status-error-text">{label}</p>
                <button class=SECONDARY_BUTTON on:click=move |_| on_restart.call(())>
                    "Try again"
                </button>
            </div>
        }
        .into_view(),
    }
}
