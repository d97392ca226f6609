use crate::{
    api::FileDescriptor,
    components::{error::InlineErrorMessage, layout::LoadingSpinner},
    pages::dashboard::utils::{file_display_name, format_timestamp},
    state::upload::{ArtifactKind, ArtifactRequest},
};
use leptos::{ev::MouseEvent, *};

#[component]
pub fn FilesSection(
    files: Resource<u32, Result<Vec<FileDescriptor>, crate::api::ApiError>>,
    on_refresh: Callback<MouseEvent>,
    on_download: Callback<ArtifactRequest>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <div>
                    <h3 class="text-base font-semibold text-fg">{"Uploaded Files"}</h3>
                    <p class="text-sm text-fg-muted">{"Raw media stored on the server"}</p>
                </div>
                <button
                    class="px-3 py-1.5 text-sm rounded-md border border-border text-fg hover:bg-surface"
                    on:click=move |ev| on_refresh.call(ev)
                >
                    {"Refresh"}
                </button>
            </div>
            {move || match files.get() {
                None => view! {
                    <div class="flex items-center gap-2 text-sm text-fg-muted">
                        <LoadingSpinner />
                        <span>{"Loading uploaded files..."}</span>
                    </div>
                }.into_view(),
                Some(Err(err)) => {
                    let error_signal = create_rw_signal(Some(err.message));
                    view! { <InlineErrorMessage error={error_signal} /> }.into_view()
                }
                Some(Ok(list)) => view! {
                    <FilesTable files=list on_download=on_download />
                }.into_view(),
            }}
        </div>
    }
}

#[component]
pub fn FilesTable(
    files: Vec<FileDescriptor>,
    on_download: Callback<ArtifactRequest>,
) -> impl IntoView {
    if files.is_empty() {
        return view! {
            <p class="text-sm text-fg-muted">{"No files uploaded yet."}</p>
        }
        .into_view();
    }
    view! {
        <table class="w-full text-sm text-left">
            <thead>
                <tr class="text-fg-muted border-b border-border">
                    <th class="py-2 pr-4 font-medium">{"Name"}</th>
                    <th class="py-2 pr-4 font-medium">{"Type"}</th>
                    <th class="py-2 pr-4 font-medium">{"Uploaded"}</th>
                    <th class="py-2 font-medium"></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || files.clone()
                    key=|file| file.id
                    children=move |file: FileDescriptor| {
                        let display_name = file_display_name(&file.file_path);
                        let request = ArtifactRequest {
                            kind: ArtifactKind::RawFile,
                            id: file.id,
                            filename: display_name.clone(),
                        };
                        view! {
                            <tr class="border-b border-border last:border-0">
                                <td class="py-2 pr-4 text-fg">{display_name}</td>
                                <td class="py-2 pr-4 text-fg-muted">{file.file_type.clone()}</td>
                                <td class="py-2 pr-4 text-fg-muted">{format_timestamp(&file.upload_date)}</td>
                                <td class="py-2">
                                    <button
                                        class="px-2 py-1 text-xs rounded-md border border-border text-fg hover:bg-surface"
                                        on:click=move |_| on_download.call(request.clone())
                                    >
                                        {"Download"}
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
    .into_view()
}
