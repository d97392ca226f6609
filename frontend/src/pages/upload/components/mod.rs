pub mod picker;
pub mod status;
