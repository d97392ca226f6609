use crate::state::session::{sign_out, use_session, use_session_store, GuardStatus};
use leptos::*;

const NAV_LINK: &str = "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn NavBar() -> impl IntoView {
    let (session, set_session) = use_session();
    let store = use_session_store();
    let authenticated = create_memo(move |_| session.get().status == GuardStatus::Authenticated);

    let on_logout = Callback::new(move |_: ()| {
        sign_out(&store, set_session);
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/");
        }
    });

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <a href="/" class="text-xl font-semibold text-fg">
                            "MediaLens"
                        </a>
                    </div>
                    <nav class="flex items-center space-x-4">
                        <Show
                            when=move || authenticated.get()
                            fallback=move || {
                                view! {
                                    <a href="/login" class=NAV_LINK>
                                        "Login"
                                    </a>
                                    <a href="/register" class=NAV_LINK>
                                        "Register"
                                    </a>
                                }
                            }
                        >
                            <a href="/upload" class=NAV_LINK>
                                "Upload"
                            </a>
                            <a href="/dashboard" class=NAV_LINK>
                                "Dashboard"
                            </a>
                            <span class="text-fg-muted text-sm px-3">
                                {move || subject_label(session.get().subject.as_deref())}
                            </span>
                            <button
                                on:click=move |_| on_logout.call(())
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Logout"
                            </button>
                        </Show>
                    </nav>
                </div>
            </div>
        </header>
    }
}

fn subject_label(subject: Option<&str>) -> String {
    match subject {
        Some(name) => format!("Signed in as {}", name),
        None => String::new(),
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <NavBar/>
            <main class="max-w-5xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::subject_label;

    #[test]
    fn subject_label_names_the_signed_in_user() {
        assert_eq!(subject_label(Some("alice")), "Signed in as alice");
        assert_eq!(subject_label(None), "");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_memory_session, provide_session_state};
    use crate::test_support::ssr::render_to_string;

    const TTL: i64 = 30 * 60 * 1000;

    #[test]
    fn nav_offers_login_and_register_to_visitors() {
        let html = render_to_string(move || {
            provide_memory_session(TTL);
            provide_session_state(GuardStatus::Anonymous, None);
            view! { <NavBar /> }
        });
        assert!(html.contains("Login"));
        assert!(html.contains("Register"));
        assert!(!html.contains("Logout"));
    }

    #[test]
    fn nav_offers_the_workflow_to_signed_in_users() {
        let html = render_to_string(move || {
            provide_memory_session(TTL);
            provide_session_state(GuardStatus::Authenticated, Some("alice"));
            view! { <NavBar /> }
        });
        assert!(html.contains("Upload"));
        assert!(html.contains("Dashboard"));
        assert!(html.contains("Signed in as alice"));
        assert!(html.contains("Logout"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_memory_session(TTL);
            provide_session_state(GuardStatus::Anonymous, None);
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error".into() />
                    <SuccessMessage message="ok".into() />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }
}
