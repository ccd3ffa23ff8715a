use image::DynamicImage;
use std::path::Path;
use tracing::warn;

/// Decode the image at `path`. Returns `None` if it cannot be read or decoded.
pub fn load_image(path: impl AsRef<Path>) -> Option<DynamicImage> {
    let path = path.as_ref();
    match image::open(path) {
        Ok(img) => Some(img),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load image");
            None
        }
    }
}

/// Decode an in-memory encoded image (PNG, JPEG, ...).
pub fn decode_image(bytes: &[u8]) -> Option<DynamicImage> {
    match image::load_from_memory(bytes) {
        Ok(img) => Some(img),
        Err(e) => {
            warn!(error = %e, "failed to decode image");
            None
        }
    }
}
