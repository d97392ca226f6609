use crate::{
    components::layout::LoadingSpinner,
    pages::login::LoginPanel,
    state::session::{use_session, GuardStatus},
};
use leptos::*;

/// Wraps a protected view. Until the first liveness check settles the
/// status, a spinner holds the spot; an anonymous visitor gets the login
/// panel rendered in place of the protected content, with no navigation.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let status = create_memo(move |_| session.get().status);
    view! {
        <Show
            when=move || should_render_protected(status.get())
            fallback=move || {
                if status.get() == GuardStatus::Unknown {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    view! { <LoginPanel /> }.into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_protected(status: GuardStatus) -> bool {
    status == GuardStatus::Authenticated
}

#[cfg(test)]
mod tests {
    use super::should_render_protected;
    use crate::state::session::GuardStatus;

    #[test]
    fn only_an_authenticated_session_unlocks_the_view() {
        assert!(!should_render_protected(GuardStatus::Unknown));
        assert!(!should_render_protected(GuardStatus::Anonymous));
        assert!(should_render_protected(GuardStatus::Authenticated));
    }
}
