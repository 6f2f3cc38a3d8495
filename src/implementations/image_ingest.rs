use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use base64::Engine;
use log::{debug, warn};
use mime::Mime;
use tokio::task::JoinSet;

use crate::errors::{StayError, StayResult};

static NEXT_IMAGE_ID: AtomicU64 = AtomicU64::new(1);

/// A local image already converted to an embedded data URI
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub id: u64,
    pub name: String,
    pub data_uri: String,
}

/// MIME type for an image file, judged by extension; `None` for non-images
pub fn image_mime(path: &Path) -> Option<Mime> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => mime::IMAGE_PNG,
        "jpg" | "jpeg" => mime::IMAGE_JPEG,
        "gif" => mime::IMAGE_GIF,
        "bmp" => mime::IMAGE_BMP,
        "svg" => mime::IMAGE_SVG,
        "webp" => "image/webp".parse().ok()?,
        "avif" => "image/avif".parse().ok()?,
        _ => return None,
    };
    Some(mime)
}

pub fn data_uri(mime: &Mime, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime.essence_str(),
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Read one image file and embed it
pub async fn ingest_file(path: &Path) -> StayResult<UploadedImage> {
    let mime = image_mime(path)
        .ok_or_else(|| StayError::InvalidInput(format!("{} is not an image file", path.display())))?;
    let bytes = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    debug!("Embedded {} ({} bytes, {})", name, bytes.len(), mime);
    Ok(UploadedImage {
        id: NEXT_IMAGE_ID.fetch_add(1, Ordering::Relaxed),
        name,
        data_uri: data_uri(&mime, &bytes),
    })
}

/// Ingest several files concurrently.
///
/// Non-image files are skipped up front. Results arrive in completion order,
/// not argument order; one file failing leaves the others untouched.
pub async fn ingest_files(paths: &[PathBuf]) -> Vec<StayResult<UploadedImage>> {
    let mut tasks = JoinSet::new();
    for path in paths {
        if image_mime(path).is_none() {
            warn!("Skipping {}: not an image file", path.display());
            continue;
        }
        let path = path.clone();
        tasks.spawn(async move { ingest_file(&path).await });
    }

    let mut results = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(result) => results.push(result),
            Err(e) => results.push(Err(StayError::InvalidInput(format!("image ingestion task failed: {}", e)))),
        }
    }
    results
}
