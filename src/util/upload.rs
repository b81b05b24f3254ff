//! Justification file payloads and client-side upload checks.
//!
//! The server enforces the same extension list; checking here only saves a
//! round trip for files that would be refused anyway.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Extensions accepted for justification documents.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "pdf"];

/// Multipart field name expected by the upload endpoints.
pub const UPLOAD_FIELD: &str = "file";

/// A file picked by the user, already read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("No se seleccionó ningún archivo")]
    NoFile,
    #[error("Extensión de archivo no permitida")]
    ExtensionNotAllowed,
}

/// Validate a picked file name against [`ALLOWED_EXTENSIONS`].
///
/// # Errors
///
/// Returns [`UploadError`] for a blank name or a refused extension.
pub fn validate_file_name(file_name: &str) -> Result<(), UploadError> {
    let name = file_name.trim();
    if name.is_empty() {
        return Err(UploadError::NoFile);
    }
    let Some((stem, ext)) = name.rsplit_once('.') else {
        return Err(UploadError::ExtensionNotAllowed);
    };
    if stem.is_empty() {
        return Err(UploadError::ExtensionNotAllowed);
    }
    let ext = ext.to_ascii_lowercase();
    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(UploadError::ExtensionNotAllowed)
    }
}

impl FileUpload {
    /// Check the payload before it is sent.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError`] when the name is blank or the extension is
    /// not accepted by the server.
    pub fn validate(&self) -> Result<(), UploadError> {
        validate_file_name(&self.file_name)
    }
}
