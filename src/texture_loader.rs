use std::fs;
use std::io::Cursor;
use std::path::Path;
use log::{debug, warn};
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use crate::error::{GliderError, GliderResult};

pub fn is_supported_image(path: &Path) -> bool {
    matches!(
        extension_of(path).as_str(),
        "png" | "jpg" | "jpeg" | "bmp" | "gif"
    )
}

fn extension_of(path: &Path) -> String {
    path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase()
}

/// EXIF orientation of a JPEG, 1 (upright) when absent or unreadable.
pub fn read_orientation(file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!("could not read EXIF data: {}", e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> GliderResult<Texture2D> {
    if !is_supported_image(image_path) {
        return Err(GliderError::image(format!("unsupported image format: {:?}", image_path)));
    }

    let file_bytes = fs::read(image_path).map_err(|source| GliderError::Io {
        path: image_path.to_path_buf(),
        source,
    })?;

    let extension = extension_of(image_path);
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(&file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| GliderError::image(format!("{:?}: {}", image_path, e)))?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Flipped orientations are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    debug!("loaded {:?} ({}x{}, orientation {})", image_path, image.width(), image.height(), orientation);

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| GliderError::texture(format!("{:?}: {}", image_path, e)))?;

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("rocket.PNG")));
        assert!(is_supported_image(Path::new("dir/ship.jpeg")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[test]
    fn garbage_bytes_read_as_upright() {
        assert_eq!(read_orientation(b"definitely not a jpeg"), 1);
    }
}
