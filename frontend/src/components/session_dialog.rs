use crate::state::session::use_expiry_notice;
use leptos::*;

/// Modal raised by the liveness watcher when a session times out. The only
/// exit acknowledges the notice and moves to the login view; the notice
/// slot stays empty afterwards because expiry also cleared the credential.
#[component]
pub fn SessionExpiredDialog() -> impl IntoView {
    let notice = use_expiry_notice();
    let message = create_memo(move |_| notice.0.get().map(|cause| cause.message()));

    let on_acknowledge = Callback::new(move |_: ()| {
        notice.0.set(None);
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    });

    view! {
        <Show when=move || message.get().is_some()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <div class="absolute inset-0 bg-overlay-backdrop"></div>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                >
                    <h2 class="text-lg font-semibold text-fg">"Session expired"</h2>
                    <p class="text-sm text-fg-muted">{move || message.get().unwrap_or_default()}</p>
                    <div class="flex justify-end">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                            on:click=move |_| on_acknowledge.call(())
                        >
                            "Go to login"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
