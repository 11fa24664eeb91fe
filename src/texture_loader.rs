use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use raylib::prelude::*;

/// Lists image files (png/jpg/jpeg) in `dir`, sorted by file name so the
/// slideshow plays in lexical order.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
            if matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg") {
                paths.push(path);
            }
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// EXIF orientation tag, if the bytes carry one (JPEG only in practice).
fn exif_orientation(bytes: &[u8]) -> Option<u16> {
    let exif = Reader::new().read_from_container(&mut Cursor::new(bytes)).ok()?;
    let field = exif.get_field(Tag::Orientation, In::PRIMARY)?;
    match &field.value {
        Value::Short(values) => values.first().copied(),
        _ => None,
    }
}

/// Decodes an image file, applies its EXIF rotation (orientations 3/6/8;
/// flipped variants are ignored), and uploads it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read file {}", path.display()))?;

    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();

    let orientation = if ext == "jpg" || ext == "jpeg" {
        match exif_orientation(&bytes) {
            Some(o) => o,
            None => {
                debug!("no usable EXIF orientation in {}", path.display());
                1
            }
        }
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{ext}"), &bytes)
        .map_err(|e| anyhow!("failed to decode {}: {}", path.display(), e))?;

    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        1 => {}
        other => warn!("ignoring EXIF orientation {} for {}", other, path.display()),
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {}", path.display(), e))
}
