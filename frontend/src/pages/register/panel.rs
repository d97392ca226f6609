use crate::{
    api::{ApiClient, RegisterRequest},
    pages::register::{components::form::RegisterForm, repository, utils},
};
use gloo_timers::callback::Timeout;
use leptos::{ev::SubmitEvent, Callback, *};

/// Delay before moving a freshly registered user to the login view, long
/// enough to read the confirmation.
const REDIRECT_DELAY_MS: u32 = 1_500;

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm_password, set_confirm_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (success, set_success) = create_signal(None::<String>);

    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let register_action = create_action(move |request: &RegisterRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { repository::register(&api, &request).await }
    });
    let pending = register_action.pending();

    {
        create_effect(move |_| {
            if let Some(result) = register_action.value().get() {
                match result {
                    Ok(_) => {
                        set_error.set(None);
                        set_success
                            .set(Some("Registration successful! Redirecting to login...".into()));
                        Timeout::new(REDIRECT_DELAY_MS, || {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href("/login");
                            }
                        })
                        .forget();
                    }
                    Err(err) => set_error.set(Some(err.message)),
                }
            }
        });
    }

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let uname = username.get_untracked();
        let mail = email.get_untracked();
        let pword = password.get_untracked();
        let confirm = confirm_password.get_untracked();

        if let Err(msg) = utils::validate_registration(&uname, &mail, &pword, &confirm) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);

        register_action.dispatch(RegisterRequest {
            username: uname,
            password: pword,
            email: mail,
        });
    });

    let username_input = Callback::new(move |value: String| set_username.set(value));
    let email_input = Callback::new(move |value: String| set_email.set(value));
    let password_input = Callback::new(move |value: String| set_password.set(value));
    let confirm_input = Callback::new(move |value: String| set_confirm_password.set(value));

    view! {
        <RegisterForm
            username=username
            email=email
            password=password
            confirm_password=confirm_password
            error=error
            success=success
            pending=pending.into()
            on_username_input=username_input
            on_email_input=email_input
            on_password_input=password_input
            on_confirm_input=confirm_input
            on_submit=handle_submit
        />
    }
}
