use crate::{
    components::{error::InlineErrorMessage, layout::Layout},
    pages::upload::{
        components::{picker::FilePicker, status::UploadStatusSection},
        utils,
        view_model::use_upload_view_model,
    },
};
use leptos::*;

#[component]
pub fn UploadPanel() -> impl IntoView {
    let vm = use_upload_view_model();
    let (state, _) = vm.state;
    let selected = Signal::derive(move || state.get().job.map(|job| job.source));
    let busy = Signal::derive(move || {
        state
            .get()
            .job
            .map(|job| utils::is_running(&job.phase))
            .unwrap_or(false)
    });
    let can_submit = create_memo(move |_| utils::can_submit(&state.get()));

    view! {
        <Layout>
            <div class="max-w-3xl mx-auto space-y-6">
                <div>
                    <h2 class="text-2xl font-bold text-fg">"Upload Media for Analysis"</h2>
                    <p class="text-sm text-fg-muted">
                        "The service transcribes your file, pulls out the key points and builds a report."
                    </p>
                </div>
                <InlineErrorMessage error=vm.notice.read_only() />
                <FilePicker
                    selected=selected
                    busy=busy
                    max_megabytes=vm.limits.max_megabytes()
                    on_select=Callback::new(vm.handle_select())
                />
                <div>
                    <button
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || !can_submit.get()
                        on:click=vm.handle_submit()
                    >
                        "Upload & Analyze"
                    </button>
                </div>
                <UploadStatusSection
                    state=state
                    on_download=Callback::new(vm.handle_download())
                    on_restart=Callback::new(vm.handle_restart())
                />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::UploadPanel;
    use crate::state::session::GuardStatus;
    use crate::test_support::helpers::{provide_memory_session, provide_session_state};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn renders_the_picker_and_the_submit_control() {
        let html = render_to_string(move || {
            provide_memory_session(30 * 60 * 1000);
            provide_session_state(GuardStatus::Authenticated, Some("alice"));
            view! { <UploadPanel /> }
        });
        assert!(html.contains("Upload Media for Analysis"));
        assert!(html.contains("Supported: MP3, WAV, MP4, AVI (max 25MB)"));
        assert!(html.contains("Upload & Analyze"));
    }
}
