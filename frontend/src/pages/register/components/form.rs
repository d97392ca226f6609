use crate::components::error::{InlineErrorMessage, InlineSuccessMessage};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

const FIELD_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-border placeholder-gray-500 text-fg rounded-md focus:outline-none focus:ring-blue-500 focus:border-blue-500 focus:z-10 sm:text-sm";

#[component]
pub fn RegisterForm(
    username: ReadSignal<String>,
    email: ReadSignal<String>,
    password: ReadSignal<String>,
    confirm_password: ReadSignal<String>,
    error: ReadSignal<Option<String>>,
    success: ReadSignal<Option<String>>,
    pending: Signal<bool>,
    on_username_input: Callback<String>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_confirm_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Create your account"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Register to upload and analyze your media"
                    </p>
                </div>
                <form class="mt-8 space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="username" class="sr-only">"Username"</label>
                        <input
                            id="username"
                            name="username"
                            type="text"
                            required
                            class=FIELD_CLASS
                            placeholder="Username"
                            prop:value=username
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                on_username_input.call(target.value());
                            }
                        />
                    </div>
                    <div>
                        <label for="email" class="sr-only">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            required
                            class=FIELD_CLASS
                            placeholder="Email address"
                            prop:value=email
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                on_email_input.call(target.value());
                            }
                        />
                    </div>
                    <div>
                        <label for="password" class="sr-only">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            required
                            class=FIELD_CLASS
                            placeholder="Password"
                            prop:value=password
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                on_password_input.call(target.value());
                            }
                        />
                        <p class="mt-1 text-xs text-fg-muted">
                            "At least 8 characters with an uppercase letter and a number"
                        </p>
                    </div>
                    <div>
                        <label for="confirm_password" class="sr-only">"Confirm password"</label>
                        <input
                            id="confirm_password"
                            name="confirm_password"
                            type="password"
                            required
                            class=FIELD_CLASS
                            placeholder="Confirm password"
                            prop:value=confirm_password
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                on_confirm_input.call(target.value());
                            }
                        />
                    </div>

                    <InlineErrorMessage error=error />
                    <InlineSuccessMessage message=success />

                    <div>
                        <button
                            type="submit"
                            disabled=pending
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-50"
                        >
                            {move || if pending.get() { "Registering..." } else { "Register" }}
                        </button>
                    </div>

                    <p class="text-center text-sm text-fg-muted">
                        "Already have an account? "
                        <a href="/login" class="font-medium text-action-primary-bg hover:underline">
                            "Login here"
                        </a>
                    </p>
                </form>
            </div>
        </div>
    }
}
