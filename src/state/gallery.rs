//! The photo gallery backing the carousel
//!
//! A gallery is a fixed, ordered list of photos. Each photo's index is
//! assigned by list order and stays stable for the lifetime of the gallery;
//! the carousel and the background crossfade both key off that index.
//!
//! Galleries come from two places: a built-in set of generated placeholder
//! cards shown at startup, and a user-picked folder scanned for raster
//! images. Folder loading is CPU-bound (decode + resize) and runs on a
//! blocking task off the UI thread.

use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task;
use tracing::{info, warn};
use walkdir::WalkDir;

/// Raster formats the folder scan will pick up
const SUPPORTED_EXTENSIONS: [&str; 8] = [
    "jpg", "jpeg", "png", "webp", "bmp", "tif", "tiff", "gif",
];

/// Upper bound on photos taken from one folder. Every photo also paints a
/// full-window background copy, so the stack is kept small.
const MAX_PHOTOS: usize = 16;

/// Decoded photos larger than this on either axis are downscaled before
/// being handed to the renderer
const MAX_DECODE_EXTENT: u32 = 1600;

/// Pixel size of generated placeholder cards (4:5.2, the carousel box ratio)
const PLACEHOLDER_WIDTH: u32 = 800;
const PLACEHOLDER_HEIGHT: u32 = 1040;

/// Errors from loading a gallery out of a folder
#[derive(Debug, Clone, Error)]
pub enum GalleryError {
    #[error("no readable images in {}", .0.display())]
    NoImages(PathBuf),

    #[error("background load task failed")]
    TaskFailed,
}

/// A single photo bound to its slot in the carousel
#[derive(Debug, Clone)]
pub struct Photo {
    /// 0-based position in the gallery, stable for the session
    pub index: usize,
    /// Decoded pixels, shared with the renderer
    pub handle: Handle,
}

/// An immutable, ordered photo list
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    photos: Vec<Photo>,
    /// Folder the photos came from; `None` for the built-in placeholders
    source: Option<PathBuf>,
}

impl Gallery {
    /// Number of photos in the gallery
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Photos in index order
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Folder this gallery was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The built-in startup gallery: five generated gradient cards.
    ///
    /// Keeps the screen working with zero configuration and no bundled
    /// binary assets.
    pub fn placeholder() -> Self {
        // Top/bottom gradient stops, one pair per card
        const CARD_COLORS: [([u8; 3], [u8; 3]); 5] = [
            ([0x2b, 0x59, 0x76], [0xd9, 0x89, 0x4c]),
            ([0x6d, 0x28, 0x4e], [0xf2, 0xc1, 0x4e]),
            ([0x1f, 0x4d, 0x3c], [0x9f, 0xd3, 0x56]),
            ([0x45, 0x2e, 0x63], [0xe1, 0x6a, 0x54]),
            ([0x12, 0x2e, 0x4a], [0x72, 0xc3, 0xbc]),
        ];

        let photos = CARD_COLORS
            .iter()
            .enumerate()
            .map(|(index, &(top, bottom))| Photo {
                index,
                handle: gradient_card(top, bottom),
            })
            .collect();

        Gallery {
            photos,
            source: None,
        }
    }

    /// Scan `folder` for raster images and build a gallery from them.
    ///
    /// Runs the walk and the decoding on a blocking task because both are
    /// CPU/IO heavy and must not stall the UI thread.
    pub async fn load_folder(folder: PathBuf) -> Result<Gallery, GalleryError> {
        task::spawn_blocking(move || Gallery::load_folder_blocking(folder))
            .await
            .map_err(|_| GalleryError::TaskFailed)?
    }

    /// Blocking implementation of the folder scan
    fn load_folder_blocking(folder: PathBuf) -> Result<Gallery, GalleryError> {
        info!(folder = %folder.display(), "scanning folder for photos");

        // Unreadable entries are skipped, not fatal; a fully unreadable
        // folder falls out as NoImages below.
        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(&folder)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_supported_image(path) {
                paths.push(path.to_path_buf());
            }
        }

        // Walk order is filesystem-dependent; sort so indices are stable
        // across runs of the same folder.
        paths.sort();
        paths.truncate(MAX_PHOTOS);

        let mut photos = Vec::with_capacity(paths.len());
        for path in &paths {
            match decode_photo(path) {
                Ok(handle) => photos.push(Photo {
                    index: photos.len(),
                    handle,
                }),
                Err(message) => {
                    warn!(path = %path.display(), %message, "skipping unreadable image");
                }
            }
        }

        if photos.is_empty() {
            return Err(GalleryError::NoImages(folder));
        }

        info!(count = photos.len(), "gallery loaded");
        Ok(Gallery {
            photos,
            source: Some(folder),
        })
    }
}

/// Check the file extension against the supported raster formats,
/// case-insensitively.
fn is_supported_image(path: &Path) -> bool {
    match path.extension() {
        Some(extension) => {
            let ext = extension.to_string_lossy().to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// Decode one image file and convert it into a renderer handle,
/// downscaling oversized photos first.
fn decode_photo(path: &Path) -> Result<Handle, String> {
    let decoded = image::open(path).map_err(|e| e.to_string())?;

    let decoded = if decoded.width() > MAX_DECODE_EXTENT || decoded.height() > MAX_DECODE_EXTENT {
        decoded.resize(MAX_DECODE_EXTENT, MAX_DECODE_EXTENT, FilterType::Lanczos3)
    } else {
        decoded
    };

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

/// Render a vertical gradient card between two colors
fn gradient_card(top: [u8; 3], bottom: [u8; 3]) -> Handle {
    let rows = (PLACEHOLDER_HEIGHT - 1).max(1) as f32;
    let card = image::RgbaImage::from_fn(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, |_x, y| {
        let t = y as f32 / rows;
        let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        image::Rgba([
            channel(top[0], bottom[0]),
            channel(top[1], bottom[1]),
            channel(top[2], bottom[2]),
            0xff,
        ])
    });

    Handle::from_rgba(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, card.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extension_filter() {
        assert!(is_supported_image(Path::new("/photos/a.jpg")));
        assert!(is_supported_image(Path::new("/photos/b.PNG")));
        assert!(is_supported_image(Path::new("/photos/c.WebP")));

        assert!(!is_supported_image(Path::new("/photos/notes.txt")));
        assert!(!is_supported_image(Path::new("/photos/archive.zip")));
        assert!(!is_supported_image(Path::new("/photos/noextension")));
    }

    #[test]
    fn test_placeholder_gallery_has_stable_indices() {
        let gallery = Gallery::placeholder();
        assert_eq!(gallery.len(), 5);
        assert!(gallery.source().is_none());

        for (expected, photo) in gallery.photos().iter().enumerate() {
            assert_eq!(photo.index, expected);
        }
    }

    #[test]
    fn test_empty_folder_reports_no_images() {
        let dir = std::env::temp_dir().join("parallax-gallery-empty-folder-test");
        std::fs::create_dir_all(&dir).unwrap();

        let result = Gallery::load_folder_blocking(dir.clone());
        assert!(matches!(result, Err(GalleryError::NoImages(path)) if path == dir));
    }
}
