use std::fmt::{Debug, Formatter};

use image::Rgb;
use itertools::Itertools;

/// The specification for a single placeholder image
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSpec {
    /// Name of the output file, relative to the output directory
    pub filename: &'static str,
    /// The text drawn over the background.  Each `'\n'`-separated line is drawn separately
    pub text: &'static str,
    pub color: Rgb<u8>,
}

impl PlaceholderSpec {
    pub const fn new(filename: &'static str, text: &'static str, color: [u8; 3]) -> Self {
        Self {
            filename,
            text,
            color: Rgb(color),
        }
    }

    /// The lines of [`Self::text`], in the order that they're drawn (top to bottom)
    pub fn lines(&self) -> Vec<&'static str> {
        self.text.split('\n').collect_vec()
    }
}

impl Debug for PlaceholderSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Rgb([r, g, b]) = self.color;
        write!(
            f,
            "PlaceholderSpec({:?}, {:?}, rgb({}, {}, {}))",
            self.filename, self.text, r, g, b
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_split_on_newlines() {
        let spec = PlaceholderSpec::new("a.jpg", "Dr. Someone\nPresident", [0, 0, 0]);
        assert_eq!(spec.lines(), vec!["Dr. Someone", "President"]);
    }

    #[test]
    fn empty_text_is_one_line() {
        let spec = PlaceholderSpec::new("a.jpg", "", [0, 0, 0]);
        assert_eq!(spec.lines(), vec![""]);
    }

    #[test]
    fn trailing_newline_gives_trailing_empty_line() {
        let spec = PlaceholderSpec::new("a.jpg", "Name\n", [1, 2, 3]);
        assert_eq!(spec.lines(), vec!["Name", ""]);
    }

    #[test]
    fn debug_is_compact() {
        let spec = PlaceholderSpec::new("a.jpg", "x", [1, 2, 3]);
        assert_eq!(
            format!("{:?}", spec),
            r#"PlaceholderSpec("a.jpg", "x", rgb(1, 2, 3))"#
        );
    }
}
