//! ICO icon container creation.
//!
//! Converts the source image to a multi-resolution ICO file. The source is
//! forced to RGBA and re-encoded at every standard Windows icon size that
//! does not exceed its own dimensions, so a 512x512 source yields the full
//! 16-256 ladder while a 48x48 source only carries the sizes it can fill.

use crate::error::{ErrorExt, ReplaceError, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::FilterType;
use std::path::Path;

/// Standard icon sizes embedded in the container, largest to none depending
/// on the source dimensions. 256 is the ICO format's upper bound.
const ICO_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// Create an ICO file from the source image, overwriting any existing file
/// at `output`. Returns the source dimensions for status reporting.
pub async fn write_container(source: &Path, output: &Path) -> Result<(u32, u32)> {
    let img = image::open(source).map_err(|error| ReplaceError::Image {
        path: source.to_path_buf(),
        error,
    })?;

    // ICO entries are 32-bit RGBA regardless of the source pixel format
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let min_dim = width.min(height);
    let mut sizes: Vec<u32> = ICO_SIZES.iter().copied().filter(|s| *s <= min_dim).collect();
    if sizes.is_empty() {
        sizes.push(min_dim.min(256));
    }

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for size in sizes {
        log::debug!("adding {}x{} entry from {}", size, size, source.display());

        let frame = if (size, size) == (width, height) {
            rgba.clone()
        } else {
            image::imageops::resize(&rgba, size, size, FilterType::Lanczos3)
        };

        let icon_image = IconImage::from_rgba_data(size, size, frame.into_raw());
        let entry = IconDirEntry::encode(&icon_image).map_err(|error| ReplaceError::Fs {
            context: "encoding icon container entry",
            path: output.to_path_buf(),
            error,
        })?;
        icon_dir.add_entry(entry);
    }

    let tokio_file = tokio::fs::File::create(output)
        .await
        .fs_context("creating icon container", output)?;
    let file = tokio_file.into_std().await;
    icon_dir.write(file).map_err(|error| ReplaceError::Fs {
        context: "writing icon container",
        path: output.to_path_buf(),
        error,
    })?;

    log::info!("created icon container: {}", output.display());
    Ok((width, height))
}
