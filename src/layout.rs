//! Positioning of multi-line text blocks, centred on a canvas

use cgmath::{Point2, Vector2};
use itertools::Itertools;

/// A single line of text, along with the position of its top-left corner on the canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLayout<'t> {
    pub text: &'t str,
    pub pos: Point2<i32>,
}

/// Splits `text` into lines and centres the resulting block on a canvas of size `canvas`.
///
/// Every line takes up exactly `line_height` pixels, so the block is `line_height * num_lines`
/// pixels high regardless of the font.  Each line is horizontally centred according to the width
/// returned by `measure`.  Positions are rounded down, and are negative if the block (or a line)
/// doesn't fit on the canvas.
pub fn layout_lines<'t>(
    text: &'t str,
    canvas: Vector2<u32>,
    line_height: u32,
    mut measure: impl FnMut(&str) -> u32,
) -> Vec<LineLayout<'t>> {
    let lines = text.split('\n').collect_vec();
    let total_height = lines.len() as i64 * line_height as i64;
    let y_start = centre_offset(canvas.y as i64, total_height);

    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let x = centre_offset(canvas.x as i64, measure(line) as i64);
            let y = y_start + i as i64 * line_height as i64;
            LineLayout {
                text: line,
                pos: Point2::new(saturate(x), saturate(y)),
            }
        })
        .collect_vec()
}

/// `(outer - inner) / 2`, rounded towards negative infinity
fn centre_offset(outer: i64, inner: i64) -> i64 {
    (outer - inner).div_euclid(2)
}

fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
