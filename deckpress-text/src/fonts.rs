//! Font resolution: file, installed family, or builtin fallback.
//!
//! Wraps `font-kit` to validate font files and to look up installed
//! families. Resolution is an explicit chain rather than a catch-all:
//!
//! ```text
//! FontHandle::resolve(path, family)
//!   ├── load_font(path)            → FontSource::File
//!   ├── load_system_family(family) → FontSource::System
//!   └── FontHandle::builtin()      → FontSource::Builtin (never fails)
//! ```
//!
//! Each step that fails is logged and the next is tried.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use font_kit::font::Font;
use font_kit::properties::{Style as FkStyle, Weight as FkWeight};
use font_kit::source::SystemSource;
use thiserror::Error;

/// Why a preferred font could not be used.
#[derive(Error, Debug)]
pub enum FontResolutionFailure {
    #[error("font file {path} could not be read: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("font file {path} is not a usable font: {reason}")]
    Unparseable { path: PathBuf, reason: String },
    #[error("font family {0:?} is not installed")]
    FamilyNotFound(String),
}

/// Where a [`FontHandle`] came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// Loaded from an explicit font file.
    File(PathBuf),
    /// Resolved from an installed family name.
    System(String),
    /// Generic sans-serif from the engine's own font database.
    Builtin,
}

/// A resolved font: its family name and raw face data.
///
/// Cheap to clone; the face bytes are shared.
#[derive(Clone)]
pub struct FontHandle {
    family: Option<String>,
    data: Option<Arc<Vec<u8>>>,
    source: FontSource,
}

impl FontHandle {
    /// The guaranteed fallback. Has no face data of its own; text is
    /// shaped with the generic sans-serif family.
    pub fn builtin() -> Self {
        Self {
            family: None,
            data: None,
            source: FontSource::Builtin,
        }
    }

    /// Resolve the preferred font, falling back step by step.
    ///
    /// An explicit `path` takes priority over `family`. This never fails.
    pub fn resolve(path: Option<&Path>, family: Option<&str>) -> Self {
        if let Some(path) = path {
            match load_font(path) {
                Ok(handle) => return handle,
                Err(err) => log::warn!("{err}; trying the next font source"),
            }
        }
        if let Some(family) = family {
            match load_system_family(family) {
                Ok(handle) => return handle,
                Err(err) => log::warn!("{err}; trying the next font source"),
            }
        }
        log::info!("FontHandle: using builtin sans-serif");
        Self::builtin()
    }

    /// Concrete family name, or `None` for the builtin generic family.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Raw face bytes to register with the shaping engine.
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_ref().map(|d| d.as_slice())
    }

    pub fn source(&self) -> &FontSource {
        &self.source
    }

    pub fn is_builtin(&self) -> bool {
        self.source == FontSource::Builtin
    }
}

impl fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontHandle")
            .field("family", &self.family)
            .field("source", &self.source)
            .field("bytes", &self.data.as_ref().map_or(0, |d| d.len()))
            .finish()
    }
}

impl fmt::Display for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.family()) {
            (FontSource::File(path), Some(family)) => {
                write!(f, "{family} ({})", path.display())
            }
            (FontSource::System(_), Some(family)) => write!(f, "{family} (installed)"),
            _ => f.write_str("sans-serif (builtin)"),
        }
    }
}

/// Load and validate a font file.
pub fn load_font(path: &Path) -> Result<FontHandle, FontResolutionFailure> {
    let bytes = std::fs::read(path).map_err(|source| FontResolutionFailure::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let data = Arc::new(bytes);
    let font = Font::from_bytes(data.clone(), 0).map_err(|err| {
        FontResolutionFailure::Unparseable {
            path: path.to_path_buf(),
            reason: format!("{err:?}"),
        }
    })?;

    let family = font.family_name();
    log::debug!("FontHandle: loaded {family:?} from {}", path.display());
    Ok(FontHandle {
        family: Some(family),
        data: Some(data),
        source: FontSource::File(path.to_path_buf()),
    })
}

/// Look up an installed family and pick its regular face.
pub fn load_system_family(name: &str) -> Result<FontHandle, FontResolutionFailure> {
    let not_found = || FontResolutionFailure::FamilyNotFound(name.to_string());

    let source = SystemSource::new();
    let family = source.select_family_by_name(name).map_err(|_| not_found())?;

    let font = family
        .fonts()
        .iter()
        .filter_map(|handle| handle.load().ok())
        .min_by_key(|font| regular_distance(font))
        .ok_or_else(not_found)?;
    let data = font.copy_font_data().ok_or_else(not_found)?;

    let family_name = font.family_name();
    log::debug!("FontHandle: resolved installed family {family_name:?}");
    Ok(FontHandle {
        family: Some(family_name),
        data: Some(data),
        source: FontSource::System(name.to_string()),
    })
}

/// Distance from an upright 400-weight face (lower = better).
fn regular_distance(font: &Font) -> u32 {
    let props = font.properties();
    let style = if props.style == FkStyle::Normal { 0 } else { 1000 };
    let weight = (props.weight.0 - FkWeight::NORMAL.0).abs() as u32;
    style + weight
}

// ===================================================================
// Tests
// ===================================================================
