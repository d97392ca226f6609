use crate::{
    api::HistoryRecord,
    components::{error::InlineErrorMessage, layout::LoadingSpinner},
    pages::dashboard::utils::format_timestamp,
    state::upload::{artifact_filename, ArtifactKind, ArtifactRequest},
};
use leptos::{ev::MouseEvent, *};

const ROW_BUTTON: &str =
    "px-2 py-1 text-xs rounded-md border border-border text-fg hover:bg-surface";

#[component]
pub fn HistorySection(
    history: Resource<u32, Result<Vec<HistoryRecord>, crate::api::ApiError>>,
    on_refresh: Callback<MouseEvent>,
    on_download: Callback<ArtifactRequest>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <div>
                    <h3 class="text-base font-semibold text-fg">{"Analysis History"}</h3>
                    <p class="text-sm text-fg-muted">{"Reports generated from your previous uploads"}</p>
                </div>
                <button
                    class="px-3 py-1.5 text-sm rounded-md border border-border text-fg hover:bg-surface"
                    on:click=move |ev| on_refresh.call(ev)
                >
                    {"Refresh"}
                </button>
            </div>
            {move || match history.get() {
                None => view! {
                    <div class="flex items-center gap-2 text-sm text-fg-muted">
                        <LoadingSpinner />
                        <span>{"Loading analysis history..."}</span>
                    </div>
                }.into_view(),
                Some(Err(err)) => {
                    let error_signal = create_rw_signal(Some(err.message));
                    view! { <InlineErrorMessage error={error_signal} /> }.into_view()
                }
                Some(Ok(list)) => view! {
                    <HistoryTable records=list on_download=on_download />
                }.into_view(),
            }}
        </div>
    }
}

#[component]
pub fn HistoryTable(
    records: Vec<HistoryRecord>,
    on_download: Callback<ArtifactRequest>,
) -> impl IntoView {
    if records.is_empty() {
        return view! {
            <p class="text-sm text-fg-muted">
                {"No analysis requests yet. Upload a file to get started."}
            </p>
        }
        .into_view();
    }
    view! {
        <table class="w-full text-sm text-left">
            <thead>
                <tr class="text-fg-muted border-b border-border">
                    <th class="py-2 pr-4 font-medium">{"Request"}</th>
                    <th class="py-2 pr-4 font-medium">{"File"}</th>
                    <th class="py-2 pr-4 font-medium">{"Date"}</th>
                    <th class="py-2 font-medium">{"Reports"}</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || records.clone()
                    key=|record| record.id
                    children=move |record: HistoryRecord| {
                        // The gateway fills report_path once the report exists.
                        let has_report = record.report_path.is_some();
                        let pdf = ArtifactRequest {
                            kind: ArtifactKind::Pdf,
                            id: record.id,
                            filename: artifact_filename(ArtifactKind::Pdf, record.id, None),
                        };
                        let json = ArtifactRequest {
                            kind: ArtifactKind::Json,
                            id: record.id,
                            filename: artifact_filename(ArtifactKind::Json, record.id, None),
                        };
                        view! {
                            <tr class="border-b border-border last:border-0">
                                <td class="py-2 pr-4 text-fg">{format!("#{}", record.id)}</td>
                                <td class="py-2 pr-4 text-fg">{format!("File {}", record.file_id)}</td>
                                <td class="py-2 pr-4 text-fg-muted">{format_timestamp(&record.request_date)}</td>
                                <td class="py-2">
                                    {if has_report {
                                        view! {
                                            <div class="flex gap-2">
                                                <button
                                                    class={ROW_BUTTON}
                                                    on:click=move |_| on_download.call(pdf.clone())
                                                >
                                                    {"PDF"}
                                                </button>
                                                <button
                                                    class={ROW_BUTTON}
                                                    on:click=move |_| on_download.call(json.clone())
                                                >
                                                    {"JSON"}
                                                </button>
                                            </div>
                                        }
                                        .into_view()
                                    } else {
                                        ().into_view()
                                    }}
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
