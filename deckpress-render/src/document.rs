//! PDF document output.
//!
//! Each raster page becomes one PDF page holding a single full-bleed
//! image XObject. The media box is the page's pixel size converted to
//! points at the print resolution, so a 2550×3300 page at 300 DPI is
//! 612×792 pt (US Letter).
//!
//! Encoding happens entirely in memory; [`write_pdf`] then writes a
//! sibling temporary file and renames it into place, so the target path
//! only ever holds a complete document.

use std::fs;
use std::path::{Path, PathBuf};

use deckpress_core::RgbImage;
use miniz_oxide::deflate::compress_to_vec_zlib;
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref};
use thiserror::Error;

const POINTS_PER_INCH: f32 = 72.0;
const IMAGE_NAME: Name<'static> = Name(b"Im0");
const COMPRESSION_LEVEL: u8 = 6;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("document has no pages")]
    NoPages,
    #[error("resolution must be positive")]
    ZeroDpi,
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Encode `pages` as a PDF at `dpi`.
pub fn encode_pdf(pages: &[RgbImage], dpi: u32) -> Result<Vec<u8>, DocumentError> {
    if pages.is_empty() {
        return Err(DocumentError::NoPages);
    }
    if dpi == 0 {
        return Err(DocumentError::ZeroDpi);
    }

    let mut next_id = 1;
    let mut alloc = || {
        let id = Ref::new(next_id);
        next_id += 1;
        id
    };

    let catalog_id = alloc();
    let tree_id = alloc();
    let page_ids: Vec<Ref> = pages.iter().map(|_| alloc()).collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().copied())
        .count(pages.len() as i32);

    for (image, &page_id) in pages.iter().zip(&page_ids) {
        let image_id = alloc();
        let content_id = alloc();
        let (width, height) = image.dimensions();
        let width_pt = width as f32 * POINTS_PER_INCH / dpi as f32;
        let height_pt = height as f32 * POINTS_PER_INCH / dpi as f32;

        let pixels = compress_to_vec_zlib(image.as_raw(), COMPRESSION_LEVEL);
        {
            let mut xobject = pdf.image_xobject(image_id, &pixels);
            xobject.filter(Filter::FlateDecode);
            xobject.width(width as i32);
            xobject.height(height as i32);
            xobject.color_space().device_rgb();
            xobject.bits_per_component(8);
        }

        let mut content = Content::new();
        content.save_state();
        content.transform([width_pt, 0.0, 0.0, height_pt, 0.0, 0.0]);
        content.x_object(IMAGE_NAME);
        content.restore_state();
        let raw = content.finish();
        pdf.stream(content_id, &compress_to_vec_zlib(&raw, COMPRESSION_LEVEL))
            .filter(Filter::FlateDecode);

        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, width_pt, height_pt))
            .parent(tree_id)
            .contents(content_id);
        page.resources().x_objects().pair(IMAGE_NAME, image_id);
    }

    let bytes = pdf.finish();
    log::debug!("Document: encoded {} pages into {} bytes", pages.len(), bytes.len());
    Ok(bytes)
}

/// Atomically write `bytes` to `path`.
pub fn write_pdf(path: &Path, bytes: &[u8]) -> Result<(), DocumentError> {
    let partial = partial_path(path);
    let io_err = |source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Err(source) = fs::write(&partial, bytes) {
        let _ = fs::remove_file(&partial);
        return Err(io_err(source));
    }
    fs::rename(&partial, path).map_err(|source| {
        let _ = fs::remove_file(&partial);
        io_err(source)
    })
}

fn partial_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.pdf".to_string());
    path.with_file_name(format!(".{name}.partial"))
}

// ===================================================================
// Tests
// ===================================================================
