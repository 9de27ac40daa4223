//! Reading picked or dropped files into `ResumeFile`s.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

/// Human-readable size for the "Selected:" line.
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let value = bytes as f64;
    if value < KB {
        format!("{bytes} B")
    } else if value < KB * KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{:.1} MB", value / (KB * KB))
    }
}

/// First file of a picker or drop, if any.
#[cfg(feature = "hydrate")]
pub fn first_file(files: Option<web_sys::FileList>) -> Option<web_sys::File> {
    files?.get(0)
}

/// Copy the file's bytes out of the browser.
///
/// # Errors
///
/// Returns the JS error text if the browser cannot read the file.
#[cfg(feature = "hydrate")]
pub async fn read_resume(file: web_sys::File) -> Result<screening::ResumeFile, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(screening::ResumeFile::new(file.name(), bytes))
}
