use leptos::*;

pub mod components;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::UploadPanel;

#[component]
pub fn UploadPage() -> impl IntoView {
    view! { <UploadPanel /> }
}
