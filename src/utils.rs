use std::fmt::{Debug, Formatter};

use cgmath::{BaseNum, Point2, Vector2};

//////////
// RECT //
//////////

/// An axis-aligned rectangular region in 2D space.  `min` is inclusive and `max` is exclusive.
// Invariant: max.x >= min.x && max.y >= min.y
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect<S> {
    min: Point2<S>,
    max: Point2<S>,
}

impl<S: BaseNum> Rect<S> {
    /// Creates a [`Rect`] with a given size and where the minimum corner is the origin (i.e.
    /// `(0, 0)`)
    pub fn from_origin(width: S, height: S) -> Self {
        Self {
            min: Point2::new(S::zero(), S::zero()),
            max: Point2::new(width, height),
        }
    }

    pub fn from_min_size(min: Point2<S>, size: Vector2<S>) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    pub fn from_min_max(min: Point2<S>, max: Point2<S>) -> Self {
        debug_assert!(max.x >= min.x && max.y >= min.y);
        Self { min, max }
    }

    pub fn min(self) -> Point2<S> {
        self.min
    }

    pub fn width(self) -> S {
        self.max.x - self.min.x
    }

    pub fn contains(self, p: Point2<S>) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }
}

impl<S: PartialOrd> Rect<S> {
    /// Computes the smallest `Rect` to contain both `self` and `other`
    pub fn union(self, other: Self) -> Self {
        let min_x = partial_min(self.min.x, other.min.x);
        let min_y = partial_min(self.min.y, other.min.y);
        let max_x = partial_max(self.max.x, other.max.x);
        let max_y = partial_max(self.max.y, other.max.y);
        Self {
            min: Point2::new(min_x, min_y),
            max: Point2::new(max_x, max_y),
        }
    }
}

impl From<rusttype::Rect<i32>> for Rect<i32> {
    fn from(r: rusttype::Rect<i32>) -> Self {
        Self::from_min_max(Point2::new(r.min.x, r.min.y), Point2::new(r.max.x, r.max.y))
    }
}

impl<S: Debug> Debug for Rect<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect(({:?}, {:?}) - ({:?}, {:?}))",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

fn partial_max<S: PartialOrd>(x: S, y: S) -> S {
    if x < y {
        y
    } else {
        x
    }
}

fn partial_min<S: PartialOrd>(x: S, y: S) -> S {
    if x < y {
        x
    } else {
        y
    }
}
