use leptos::*;

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[component]
pub fn InlineSuccessMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded my-2">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn inline_error_shows_only_when_set() {
        let html = render_to_string(move || {
            let error = create_rw_signal(Some("Upload failed: storage unavailable".to_string()));
            view! { <InlineErrorMessage error=error /> }
        });
        assert!(html.contains("Upload failed: storage unavailable"));

        let empty = render_to_string(move || {
            let error = create_rw_signal(None::<String>);
            view! { <InlineErrorMessage error=error /> }
        });
        assert!(!empty.contains("bg-status-error-bg"));
    }

    #[test]
    fn inline_success_shows_only_when_set() {
        let html = render_to_string(move || {
            let message = create_rw_signal(Some("Registration successful!".to_string()));
            view! { <InlineSuccessMessage message=message /> }
        });
        assert!(html.contains("Registration successful!"));
    }
}
