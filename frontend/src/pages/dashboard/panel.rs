use crate::components::{error::InlineErrorMessage, layout::Layout};
use crate::pages::dashboard::{
    components::{FilesSection, HistorySection},
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();

    view! {
        <Layout>
            <div class="max-w-5xl mx-auto space-y-6">
                <h2 class="text-2xl font-bold text-fg">{"Dashboard"}</h2>
                <InlineErrorMessage error={vm.download_notice.read_only()} />
                <HistorySection
                    history={vm.history_resource}
                    on_refresh={Callback::new(vm.handle_refresh_history())}
                    on_download={Callback::new(vm.handle_download())}
                />
                <FilesSection
                    files={vm.files_resource}
                    on_refresh={Callback::new(vm.handle_refresh_files())}
                    on_download={Callback::new(vm.handle_download())}
                />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::state::session::GuardStatus;
    use crate::test_support::helpers::{provide_memory_session, provide_session_state};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_page_renders_both_sections() {
        let html = render_to_string(|| {
            let (store, _clock) = provide_memory_session(30 * 60 * 1000);
            store.begin_session("tok-1", "alice");
            provide_session_state(GuardStatus::Authenticated, Some("alice"));
            provide_context(ApiClient::with_session(store.clone()));
            view! { <DashboardPage /> }
        });
        assert!(html.contains("Dashboard"));
        assert!(html.contains("Analysis History"));
        assert!(html.contains("Uploaded Files"));
        assert!(html.contains("Loading analysis history..."));
    }
}
