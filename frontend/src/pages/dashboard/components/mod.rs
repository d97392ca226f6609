pub mod files;
pub mod history;

pub use files::FilesSection;
pub use history::HistorySection;
