pub mod error;
pub mod guard;
pub mod layout;
pub mod session_dialog;
