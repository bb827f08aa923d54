//! Turning user-supplied image files into embeddable `data:` URIs.

use std::{fs, path::Path};

use base64::{engine::general_purpose::STANDARD, Engine};
use thiserror::Error;

/// Largest accepted source file (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image is {size} bytes; images must be {limit} bytes or smaller")]
    TooLarge { size: u64, limit: u64 },

    #[error("file is not a recognized image format")]
    UnrecognizedFormat(#[source] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Encode `bytes` as a `data:` URI after checking size and format.
pub fn ingest_image(bytes: &[u8], limit: u64) -> Result<String, ImageError> {
    check_size(bytes.len() as u64, limit)?;

    let format = image::guess_format(bytes).map_err(ImageError::UnrecognizedFormat)?;
    Ok(to_data_uri(format.to_mime_type(), bytes))
}

/// Like [`ingest_image`], but rejects oversized files before reading them.
pub fn ingest_image_file(path: &Path, limit: u64) -> Result<String, ImageError> {
    check_size(fs::metadata(path)?.len(), limit)?;
    let bytes = fs::read(path)?;
    ingest_image(&bytes, limit)
}

pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

fn check_size(size: u64, limit: u64) -> Result<(), ImageError> {
    if size > limit {
        return Err(ImageError::TooLarge { size, limit });
    }
    Ok(())
}
