use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;

mod panel;

pub use panel::RegisterPanel;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! { <RegisterPanel /> }
}
