pub mod download;
pub mod file;
pub mod storage;

pub use download::trigger_blob_download;
