use crate::api::{ApiClient, ApiError, FileDescriptor, HistoryRecord};

pub async fn fetch_history(api: &ApiClient) -> Result<Vec<HistoryRecord>, ApiError> {
    api.fetch_history().await
}

pub async fn fetch_user_files(api: &ApiClient) -> Result<Vec<FileDescriptor>, ApiError> {
    api.fetch_user_files().await
}
