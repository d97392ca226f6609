use crate::pages::upload::utils::format_size;
use crate::state::upload::MediaCandidate;
use leptos::*;

#[component]
pub fn FilePicker(
    selected: Signal<Option<MediaCandidate>>,
    busy: Signal<bool>,
    max_megabytes: u64,
    on_select: Callback<web_sys::Event>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-base font-semibold text-fg">"Choose a file"</h3>
                <p class="text-sm text-fg-muted">
                    {format!("Supported: MP3, WAV, MP4, AVI (max {}MB)", max_megabytes)}
                </p>
            </div>
            <input
                type="file"
                accept=".mp3,.wav,.mp4,.avi"
                class="block w-full text-sm text-fg-muted file:mr-4 file:py-2 file:px-4 file:rounded-md file:border-0 file:text-sm file:font-semibold file:bg-action-primary-bg file:text-action-primary-text hover:file:bg-action-primary-bg-hover"
                disabled=move || busy.get()
                on:change=move |ev| on_select.call(ev)
            />
            {move || {
                selected
                    .get()
                    .map(|candidate| {
                        view! {
                            <p class="text-sm text-fg">
                                {candidate.name.clone()}
                                <span class="text-fg-muted">
                                    {format!(" ({})", format_size(candidate.size))}
                                </span>
                            </p>
                        }
                    })
            }}
        </div>
    }
}
