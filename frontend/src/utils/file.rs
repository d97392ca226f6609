use wasm_bindgen_futures::JsFuture;

/// Reads a picked file into memory for the multipart upload.
pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Could not read the selected file".to_string())?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
