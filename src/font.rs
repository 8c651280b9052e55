//! Fonts used to draw text onto placeholder images.
//!
//! A named TrueType font is opened as a path if it exists, and otherwise looked up in the
//! system's font directories.  If it can't be found or
//! can't be parsed, we fall back to a built-in 8x8 bitmap font, which is always available.  Font
//! problems are logged but never returned to the caller.

use std::{
    fmt::{Debug, Formatter},
    io,
    path::{Path, PathBuf},
};

use cgmath::{Point2, Vector2};
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};
use imageproc::pixelops::weighted_sum;
use rusttype::{point, Font, Scale};
use thiserror::Error;

use crate::utils::Rect;

/// Width and height (in pixels) of every glyph in the fallback bitmap font
pub const BITMAP_GLYPH_SIZE: u32 = 8;

/// How deep we're willing to recurse into font directories (guards against symlink loops)
const MAX_SEARCH_DEPTH: usize = 8;

/// Reasons why a named font couldn't be used
#[derive(Error, Debug)]
pub enum FontError {
    #[error("no font file named {0:?} in any font directory")]
    NotFound(String),
    #[error("failed to read font file")]
    Read(#[from] io::Error),
    #[error("font file could not be parsed")]
    Parse,
}

/// The font which is actually used to draw text.  This is either the requested TrueType font, or
/// the built-in bitmap font if the requested one couldn't be loaded.
pub enum FontSource {
    TrueType {
        /// Where the font was loaded from
        path: PathBuf,
        font: Font<'static>,
        scale: Scale,
    },
    /// The built-in 8x8 bitmap font
    Bitmap,
}

impl FontSource {
    /// Attempts to load the font file called `name` (see [`resolve_font_file`]), at a size of
    /// `point_size` pixels per em.  Falls back to [`FontSource::Bitmap`] on any failure.
    pub fn load(name: &str, point_size: f32) -> Self {
        let loaded = resolve_font_file(name)
            .ok_or_else(|| FontError::NotFound(name.to_owned()))
            .and_then(|path| Self::try_load_from_path(path, point_size));
        Self::or_fallback(loaded)
    }

    /// Same as [`FontSource::load`], but with an explicit path instead of a font name
    pub fn load_from_path(path: impl AsRef<Path>, point_size: f32) -> Self {
        Self::or_fallback(Self::try_load_from_path(
            path.as_ref().to_owned(),
            point_size,
        ))
    }

    fn try_load_from_path(path: PathBuf, point_size: f32) -> Result<Self, FontError> {
        let data = std::fs::read(&path)?;
        let font = Font::try_from_vec(data).ok_or(FontError::Parse)?;
        let scale = em_scale(&font, point_size);
        Ok(Self::TrueType { path, font, scale })
    }

    fn or_fallback(loaded: Result<Self, FontError>) -> Self {
        match loaded {
            Ok(source) => {
                log::info!("Using font {:?}", source);
                source
            }
            Err(e) => {
                log::warn!("{}; falling back to built-in bitmap font", e);
                Self::Bitmap
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Bitmap)
    }

    /// Returns the width (in pixels) of the ink which would be drawn for `line`.  Lines which draw
    /// no ink (e.g. empty lines) have width `0`.
    pub fn measure(&self, line: &str) -> u32 {
        match self {
            Self::TrueType { font, scale, .. } => ink_bounds(font, *scale, line)
                .map_or(0, |bbox| bbox.width() as u32),
            Self::Bitmap => line.chars().count() as u32 * BITMAP_GLYPH_SIZE,
        }
    }

    /// Draws `line` onto `canvas` in `color`, where `top_left` is the top-left corner of the line.
    /// Any part of the text which falls outside the canvas is clipped.
    pub fn draw(&self, canvas: &mut RgbImage, line: &str, top_left: Point2<i32>, color: Rgb<u8>) {
        match self {
            Self::TrueType { font, scale, .. } => {
                draw_truetype(canvas, font, *scale, line, top_left, color)
            }
            Self::Bitmap => draw_bitmap(canvas, line, top_left, color),
        }
    }
}

impl Debug for FontSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TrueType { path, scale, .. } => {
                write!(f, "TrueType({:?} @ {}px)", path, scale.y)
            }
            Self::Bitmap => write!(f, "Bitmap({0}x{0})", BITMAP_GLYPH_SIZE),
        }
    }
}

/// Computes the [`Scale`] at which `font`'s em square is `point_size` pixels high.  rusttype
/// scales by line height (ascent - descent), which is usually bigger than the em square.
fn em_scale(font: &Font, point_size: f32) -> Scale {
    let v_metrics = font.v_metrics_unscaled();
    let line_units = v_metrics.ascent - v_metrics.descent;
    let units_per_em = font.units_per_em() as f32;
    if line_units <= 0.0 || units_per_em <= 0.0 {
        return Scale::uniform(point_size);
    }
    Scale::uniform(point_size * line_units / units_per_em)
}

/////////////////
// FONT LOOKUP //
/////////////////

/// The directories which we search for font files, in search order.  Directories that don't
/// exist are included; they're skipped during the search.
pub fn font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(windir) = std::env::var_os("WINDIR") {
        dirs.push(Path::new(&windir).join("Fonts"));
    }
    let home = std::env::var_os("HOME").map(PathBuf::from);
    if let Some(home) = &home {
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join(".fonts"));
    }
    dirs.push(PathBuf::from("/usr/share/fonts"));
    dirs.push(PathBuf::from("/usr/local/share/fonts"));
    dirs.push(PathBuf::from("/Library/Fonts"));
    dirs.push(PathBuf::from("/System/Library/Fonts"));
    if let Some(home) = &home {
        dirs.push(home.join("Library/Fonts"));
    }
    dirs
}

/// Finds the font file for `name`.  `name` is first tried as a path (relative to the working
/// directory unless absolute), then searched for in the system's [`font_dirs`].
pub fn resolve_font_file(name: &str) -> Option<PathBuf> {
    let direct = Path::new(name);
    if direct.is_file() {
        return Some(direct.to_owned());
    }
    find_font_file(name)
}

/// Searches the system's [`font_dirs`] for a file called `name` (ignoring case)
pub fn find_font_file(name: &str) -> Option<PathBuf> {
    find_font_file_in(&font_dirs(), name)
}

/// Searches `dirs` (recursively, in order) for a file called `name` (ignoring case)
pub fn find_font_file_in(dirs: &[PathBuf], name: &str) -> Option<PathBuf> {
    let name = name.to_lowercase();
    dirs.iter().find_map(|dir| search_dir(dir, &name, 0))
}

fn search_dir(dir: &Path, name: &str, depth: usize) -> Option<PathBuf> {
    if depth > MAX_SEARCH_DEPTH {
        return None;
    }
    // Unreadable or missing directories just don't contain the font
    let entries = std::fs::read_dir(dir).ok()?;
    let mut sub_dirs = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            sub_dirs.push(path);
        } else if entry.file_name().to_string_lossy().to_lowercase() == name {
            log::debug!("Found font {:?}", path);
            return Some(path);
        }
    }
    // Files directly in `dir` take priority over files in sub-directories
    sub_dirs.sort();
    sub_dirs
        .iter()
        .find_map(|sub_dir| search_dir(sub_dir, name, depth + 1))
}

//////////////
// TRUETYPE //
//////////////

/// The union of the pixel bounding boxes of every glyph in `line`, or `None` if no glyph draws
/// any pixels.  The line's origin is at `(0, 0)`, with the baseline at `y = ascent`.
fn ink_bounds(font: &Font, scale: Scale, line: &str) -> Option<Rect<i32>> {
    let ascent = font.v_metrics(scale).ascent;
    font.layout(line, scale, point(0.0, ascent))
        .filter_map(|glyph| glyph.pixel_bounding_box())
        .map(Rect::<i32>::from)
        .reduce(Rect::union)
}

fn draw_truetype(
    canvas: &mut RgbImage,
    font: &Font,
    scale: Scale,
    line: &str,
    top_left: Point2<i32>,
    color: Rgb<u8>,
) {
    let bounds = Rect::from_origin(canvas.width() as i32, canvas.height() as i32);
    let ascent = font.v_metrics(scale).ascent;
    let origin = point(top_left.x as f32, top_left.y as f32 + ascent);
    for glyph in font.layout(line, scale, origin) {
        let bbox = match glyph.pixel_bounding_box() {
            Some(bbox) => bbox,
            None => continue, // e.g. spaces
        };
        glyph.draw(|gx, gy, coverage| {
            let p = Point2::new(bbox.min.x + gx as i32, bbox.min.y + gy as i32);
            if !bounds.contains(p) {
                return;
            }
            let coverage = coverage.clamp(0.0, 1.0);
            let (x, y) = (p.x as u32, p.y as u32);
            let background = *canvas.get_pixel(x, y);
            canvas.put_pixel(x, y, weighted_sum(background, color, 1.0 - coverage, coverage));
        });
    }
}

////////////
// BITMAP //
////////////

/// The 8 rows of the bitmap glyph for `c`, with bit 0 being the leftmost pixel.  Characters with
/// no glyph are drawn as `?`.
fn bitmap_glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

fn draw_bitmap(canvas: &mut RgbImage, line: &str, top_left: Point2<i32>, color: Rgb<u8>) {
    let bounds = Rect::from_origin(canvas.width() as i32, canvas.height() as i32);
    let glyph_size = BITMAP_GLYPH_SIZE as i32;
    for (i, c) in line.chars().enumerate() {
        let cell = Rect::from_min_size(
            Point2::new(top_left.x + i as i32 * glyph_size, top_left.y),
            Vector2::new(glyph_size, glyph_size),
        );
        for (row_idx, row) in bitmap_glyph(c).iter().enumerate() {
            for col_idx in 0..glyph_size {
                if row & (1 << col_idx) == 0 {
                    continue;
                }
                let p = cell.min() + Vector2::new(col_idx, row_idx as i32);
                if bounds.contains(p) {
                    canvas.put_pixel(p.x as u32, p.y as u32, color);
                }
            }
        }
    }
}
