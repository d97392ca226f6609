use crate::api::{ApiClient, ApiError, FileDescriptor, HistoryRecord};
use crate::pages::dashboard::repository;
use crate::pages::upload::view_model::download_artifact;
use crate::state::upload::ArtifactRequest;
use leptos::{ev::MouseEvent, *};
use log::error;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub history_resource: Resource<u32, Result<Vec<HistoryRecord>, ApiError>>,
    pub files_resource: Resource<u32, Result<Vec<FileDescriptor>, ApiError>>,
    pub history_refresh: RwSignal<u32>,
    pub files_refresh: RwSignal<u32>,
    pub download_action: Action<ArtifactRequest, Result<(), crate::error::WorkflowError>>,
    pub download_notice: RwSignal<Option<String>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

        let history_refresh = create_rw_signal(0u32);
        let api_clone = api.clone();
        let history_resource = create_resource(
            move || history_refresh.get(),
            move |_| {
                let api = api_clone.clone();
                async move { repository::fetch_history(&api).await }
            },
        );

        let files_refresh = create_rw_signal(0u32);
        let api_clone = api.clone();
        let files_resource = create_resource(
            move || files_refresh.get(),
            move |_| {
                let api = api_clone.clone();
                async move { repository::fetch_user_files(&api).await }
            },
        );

        let api_clone = api.clone();
        let download_action = create_action(move |request: &ArtifactRequest| {
            let api = api_clone.clone();
            let request = request.clone();
            async move { download_artifact(&api, request).await }
        });

        let download_notice = create_rw_signal(None);

        {
            create_effect(move |_| {
                if let Some(result) = download_action.value().get() {
                    match result {
                        Ok(_) => download_notice.set(None),
                        Err(cause) => {
                            error!("Artifact download failed: {}", cause);
                            download_notice.set(Some(cause.message()));
                        }
                    }
                }
            });
        }

        Self {
            history_resource,
            files_resource,
            history_refresh,
            files_refresh,
            download_action,
            download_notice,
        }
    }

    pub fn handle_refresh_history(&self) -> impl Fn(MouseEvent) {
        let history_refresh = self.history_refresh;
        move |_| {
            history_refresh.update(|tick| *tick = tick.wrapping_add(1));
        }
    }

    pub fn handle_refresh_files(&self) -> impl Fn(MouseEvent) {
        let files_refresh = self.files_refresh;
        move |_| {
            files_refresh.update(|tick| *tick = tick.wrapping_add(1));
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

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
