pub mod session;
pub mod upload;
