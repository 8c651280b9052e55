use std::path::{Path, PathBuf};

use cgmath::Vector2;
use image::{codecs::jpeg::JpegEncoder, ColorType, Rgb, RgbImage};

use crate::{
    error::{Error, Result},
    font::FontSource,
    image::PlaceholderSpec,
    layout::layout_lines,
};

/// The fixed parameters used to generate every placeholder image.  The binary only ever uses
/// [`Config::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory into which the images are written (created if it doesn't exist)
    pub output_dir: PathBuf,
    pub canvas_size: Vector2<u32>,
    /// Vertical distance (in pixels) between the tops of consecutive lines of text
    pub line_height: u32,
    /// File name of the preferred font, looked up in the system's font directories
    pub font_name: String,
    /// Size of the preferred font, in pixels per em
    pub font_size: f32,
    pub text_color: Rgb<u8>,
    /// JPEG quality, from 1 (worst) to 100 (best)
    pub jpeg_quality: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("backend/uploads/staff"),
            canvas_size: Vector2::new(200, 200),
            line_height: 20,
            font_name: "arial.ttf".to_owned(),
            font_size: 14.0,
            text_color: Rgb([255, 255, 255]),
            jpeg_quality: 95,
        }
    }
}

/// Persistent state used for generating placeholder images.  The font is loaded once, when the
/// `Generator` is created.
#[derive(Debug)]
pub struct Generator {
    config: Config,
    font: FontSource,
}

impl Generator {
    /// Creates a new `Generator`, loading the font named by [`Config::font_name`] (or the
    /// fallback font if that can't be loaded).
    pub fn new(config: Config) -> Self {
        let font = FontSource::load(&config.font_name, config.font_size);
        Self::with_font(config, font)
    }

    /// Creates a new `Generator` which draws text with an already-loaded [`FontSource`]
    pub fn with_font(config: Config, font: FontSource) -> Self {
        Self { config, font }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn font(&self) -> &FontSource {
        &self.font
    }

    /// Creates [`Config::output_dir`] and all its parents.  Does nothing if the directory already
    /// exists.
    pub fn ensure_output_directory(&self) -> Result<()> {
        let path = &self.config.output_dir;
        if path.exists() && !path.is_dir() {
            return Err(Error::NotADirectory(path.clone()));
        }
        std::fs::create_dir_all(path).map_err(|source| Error::CreateDir {
            path: path.clone(),
            source,
        })?;
        log::debug!("Output directory {:?} is ready", path);
        Ok(())
    }

    /// Generates every image in `specs` (in order), calling `on_created` with the path of each
    /// image once it's been written.  Returns the paths of all the written images.
    pub fn run(
        &self,
        specs: &[PlaceholderSpec],
        mut on_created: impl FnMut(&Path),
    ) -> Result<Vec<PathBuf>> {
        self.ensure_output_directory()?;
        let mut written = Vec::with_capacity(specs.len());
        for spec in specs {
            let path = self.render_placeholder(spec)?;
            on_created(&path);
            written.push(path);
        }
        log::info!(
            "Wrote {} images to {:?}",
            written.len(),
            self.config.output_dir
        );
        Ok(written)
    }

    ///////////////
    // RENDERING //
    ///////////////

    /// Render and save a single placeholder image, returning the path to which it was written.
    /// Any existing file at that path is overwritten.
    pub fn render_placeholder(&self, spec: &PlaceholderSpec) -> Result<PathBuf> {
        let canvas = self.render_image(spec);
        let path = self.output_path(spec);
        self.save_jpeg(&canvas, &path)?;
        Ok(path)
    }

    /// Render a placeholder image to an in-memory buffer, without touching the filesystem
    pub fn render_image(&self, spec: &PlaceholderSpec) -> RgbImage {
        let size = self.config.canvas_size;
        let mut canvas = RgbImage::from_pixel(size.x, size.y, spec.color);
        let lines = layout_lines(spec.text, size, self.config.line_height, |line| {
            self.font.measure(line)
        });
        for line in &lines {
            log::debug!("{}: drawing {:?} at {:?}", spec.filename, line.text, line.pos);
            self.font
                .draw(&mut canvas, line.text, line.pos, self.config.text_color);
        }
        canvas
    }

    /// The path to which `spec`'s image is written
    pub fn output_path(&self, spec: &PlaceholderSpec) -> PathBuf {
        self.config.output_dir.join(spec.filename)
    }

    fn save_jpeg(&self, canvas: &RgbImage, path: &Path) -> Result<()> {
        // Encode into memory first, so that encoding and I/O errors are reported separately
        let mut bytes = Vec::new();
        JpegEncoder::new_with_quality(&mut bytes, self.config.jpeg_quality)
            .encode(
                canvas.as_raw(),
                canvas.width(),
                canvas.height(),
                ColorType::Rgb8,
            )
            .map_err(|source| Error::Encode {
                path: path.to_owned(),
                source,
            })?;
        std::fs::write(path, &bytes).map_err(|source| Error::Save {
            path: path.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn test_generator(dir: &TempDir) -> Generator {
        let config = Config {
            output_dir: dir.path().join("uploads/staff"),
            ..Config::default()
        };
        Generator::with_font(config, FontSource::Bitmap)
    }

    #[test]
    fn default_config_matches_fixed_constants() {
        let config = Config::default();
        assert_eq!(config.output_dir, Path::new("backend/uploads/staff"));
        assert_eq!(config.canvas_size, Vector2::new(200, 200));
        assert_eq!(config.line_height, 20);
        assert_eq!(config.font_name, "arial.ttf");
        assert_eq!(config.font_size, 14.0);
        assert_eq!(config.text_color, Rgb([255, 255, 255]));
        assert_eq!(config.jpeg_quality, 95);
    }

    #[test]
    fn render_image_fills_background() {
        let dir = TempDir::new().unwrap();
        let gen = test_generator(&dir);
        let spec = PlaceholderSpec::new("x.jpg", "Dr. Someone\nPresident", [52, 73, 94]);
        let canvas = gen.render_image(&spec);
        assert_eq!(canvas.dimensions(), (200, 200));
        // Corners are far away from the text
        for &(x, y) in &[(0, 0), (199, 0), (0, 199), (199, 199), (5, 100)] {
            assert_eq!(*canvas.get_pixel(x, y), Rgb([52, 73, 94]));
        }
    }

    #[test]
    fn render_image_draws_white_text_in_the_middle() {
        let dir = TempDir::new().unwrap();
        let gen = test_generator(&dir);
        let spec = PlaceholderSpec::new("x.jpg", "Ms. Ana Reyes\nHead Librarian", [0, 0, 0]);
        let canvas = gen.render_image(&spec);
        let white = Rgb([255, 255, 255]);
        let white_pixels = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == white)
            .map(|(x, y, _)| (x, y))
            .collect::<Vec<_>>();
        assert!(!white_pixels.is_empty());
        // Text block is 40px high, starting at y = 80
        assert!(white_pixels.iter().all(|&(_, y)| (80..120).contains(&y)));
        // "Head Librarian" is 112px wide => starts at x = 44
        assert!(white_pixels.iter().all(|&(x, _)| (44..156).contains(&x)));
    }

    #[test]
    fn render_image_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let gen = test_generator(&dir);
        let spec = PlaceholderSpec::new("x.jpg", "A\nB", [1, 2, 3]);
        assert_eq!(gen.render_image(&spec), gen.render_image(&spec));
    }

    #[test]
    fn ensure_output_directory_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let gen = test_generator(&dir);
        gen.ensure_output_directory().unwrap();
        gen.ensure_output_directory().unwrap();
        assert!(dir.path().join("uploads/staff").is_dir());
    }

    #[test]
    fn output_dir_colliding_with_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("uploads"), b"not a directory").unwrap();
        let gen = test_generator(&dir);
        assert!(matches!(
            gen.ensure_output_directory(),
            Err(Error::CreateDir { .. })
        ));

        let config = Config {
            output_dir: dir.path().join("uploads"),
            ..Config::default()
        };
        let gen = Generator::with_font(config, FontSource::Bitmap);
        assert!(matches!(
            gen.ensure_output_directory(),
            Err(Error::NotADirectory(_))
        ));
    }

    #[test]
    fn render_placeholder_overwrites() {
        let dir = TempDir::new().unwrap();
        let gen = test_generator(&dir);
        gen.ensure_output_directory().unwrap();
        let spec = PlaceholderSpec::new("x.jpg", "A", [10, 20, 30]);
        let path = gen.output_path(&spec);
        std::fs::write(&path, b"stale").unwrap();

        assert_eq!(gen.render_placeholder(&spec).unwrap(), path);
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);
    }

    #[test]
    fn render_placeholder_into_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let gen = test_generator(&dir);
        // `ensure_output_directory` was never called
        let spec = PlaceholderSpec::new("x.jpg", "A", [10, 20, 30]);
        assert!(matches!(
            gen.render_placeholder(&spec),
            Err(Error::Save { .. })
        ));
    }
}
