use crate::{
    api::LoginRequest,
    pages::login::{components::form::LoginForm, utils},
    state::session,
};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let login_action = session::use_sign_in_action();
    let pending = login_action.pending();

    {
        create_effect(move |_| {
            if let Some(result) = login_action.value().get() {
                match result {
                    Ok(()) => {
                        set_error.set(None);
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/upload");
                        }
                    }
                    Err(err) => set_error.set(Some(err.message())),
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
        let pword = password.get_untracked();

        if let Err(msg) = utils::validate_credentials(&uname, &pword) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);

        login_action.dispatch(LoginRequest {
            username: uname,
            password: pword,
        });
    });

    let username_input = Callback::new(move |value: String| set_username.set(value));
    let password_input = Callback::new(move |value: String| set_password.set(value));

    view! {
        <LoginForm
            username=username
            password=password
            error=error
            pending=pending.into()
            on_username_input=username_input
            on_password_input=password_input
            on_submit=handle_submit
        />
    }
}
