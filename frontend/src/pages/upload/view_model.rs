use crate::{
    api::ApiClient,
    config::UploadLimits,
    error::WorkflowError,
    state::upload::{
        self, artifact_mime, fetch_artifact, ArtifactRequest, MediaCandidate, SubmissionInput,
        UploadState,
    },
    utils::{file::read_file_bytes, trigger_blob_download},
};
use leptos::{ev::MouseEvent, *};
use log::error;
use web_sys::HtmlInputElement;

#[derive(Clone, Copy)]
pub struct UploadViewModel {
    pub state: (ReadSignal<UploadState>, WriteSignal<UploadState>),
    pub selected_file: RwSignal<Option<web_sys::File>>,
    pub notice: RwSignal<Option<String>>,
    pub submit_action: Action<(), Result<(), WorkflowError>>,
    pub download_action: Action<ArtifactRequest, Result<(), WorkflowError>>,
    pub limits: UploadLimits,
}

impl UploadViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let (state, set_state) = create_signal(UploadState::default());
        let selected_file = create_rw_signal(None::<web_sys::File>);
        let notice = create_rw_signal(None::<String>);
        let limits = UploadLimits::default();

        let api_clone = api.clone();
        let submit_action = create_action(move |_: &()| {
            let api = api_clone.clone();
            async move { submit_selected(&api, set_state, selected_file, notice).await }
        });

        let api_clone = api.clone();
        let download_action = create_action(move |request: &ArtifactRequest| {
            let api = api_clone.clone();
            let request = request.clone();
            async move { download_artifact(&api, request).await }
        });

        {
            create_effect(move |_| {
                if let Some(Err(cause)) = download_action.value().get() {
                    error!("Artifact download failed: {}", cause);
                    notice.set(Some(cause.message()));
                }
            });
        }

        Self {
            state: (state, set_state),
            selected_file,
            notice,
            submit_action,
            download_action,
            limits,
        }
    }

    /// Installs the picked file as a fresh job. A rejected pick clears both
    /// the state and the input element so the stale name does not linger.
    pub fn handle_select(&self) -> impl Fn(web_sys::Event) {
        let set_state = self.state.1;
        let selected_file = self.selected_file;
        let notice = self.notice;
        let limits = self.limits;
        move |ev| {
            let input = event_target::<HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            let candidate = MediaCandidate {
                name: file.name(),
                size: file.size() as u64,
                media_type: file.type_(),
            };
            match upload::select_file(set_state, candidate, &limits) {
                Ok(()) => {
                    notice.set(None);
                    selected_file.set(Some(file));
                }
                Err(cause) => {
                    notice.set(Some(cause.message()));
                    selected_file.set(None);
                    input.set_value("");
                }
            }
        }
    }

    pub fn handle_submit(&self) -> impl Fn(MouseEvent) {
        let submit_action = self.submit_action;
        let notice = self.notice;
        move |_| {
            if submit_action.pending().get_untracked() {
                return;
            }
            notice.set(None);
            submit_action.dispatch(());
        }
    }

    pub fn handle_restart(&self) -> impl Fn(()) {
        let set_state = self.state.1;
        let notice = self.notice;
        move |_| {
            notice.set(None);
            set_state.update(|state| state.restart());
        }
    }

    pub fn handle_download(&self) -> impl Fn(ArtifactRequest) {
        let download_action = self.download_action;
        move |request| {
            if download_action.pending().get_untracked() {
                return;
            }
            download_action.dispatch(request);
        }
    }
}

/// Reads the picked file and drives the submission. A failed local read
/// returns the job to Idle and reports through the notice slot; nothing has
/// reached the network at that point.
async fn submit_selected(
    api: &ApiClient,
    set_state: WriteSignal<UploadState>,
    selected_file: RwSignal<Option<web_sys::File>>,
    notice: RwSignal<Option<String>>,
) -> Result<(), WorkflowError> {
    let Some(generation) = set_state
        .try_update(|state| state.begin_submission())
        .flatten()
    else {
        return Ok(());
    };
    let Some(file) = selected_file.get_untracked() else {
        abort_if_current(set_state, generation);
        return Ok(());
    };
    match read_file_bytes(&file).await {
        Ok(bytes) => {
            let input = SubmissionInput {
                generation,
                file_name: file.name(),
                media_type: file.type_(),
                bytes,
            };
            upload::run_submission(api, set_state, input).await
        }
        Err(message) => {
            abort_if_current(set_state, generation);
            notice.set(Some(message));
            Ok(())
        }
    }
}

fn abort_if_current(set_state: WriteSignal<UploadState>, generation: u32) {
    let _ = set_state.try_update(|state| {
        if state.generation == generation {
            state.abort_submission();
        }
    });
}

pub async fn download_artifact(
    api: &ApiClient,
    request: ArtifactRequest,
) -> Result<(), WorkflowError> {
    let bytes = fetch_artifact(api, request.kind, request.id).await?;
    trigger_blob_download(&request.filename, &bytes, artifact_mime(request.kind))
        .map_err(WorkflowError::ArtifactUnavailable)
}

pub fn use_upload_view_model() -> UploadViewModel {
    match use_context::<UploadViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = UploadViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
