use std::fmt::{Debug, Formatter};

use cgmath::{BaseNum, Point2, Vector2};

//////////
// RECT //
//////////

/// An axis-aligned rectangular region in 2D space.  `min` is inclusive and `max` is exclusive, so
/// a `Rect` covering a single pixel at `(x, y)` has `max = (x + 1, y + 1)`.
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

    /// Creates a [`Rect`] from its edges, in the order `(left, top, right, bottom)`.  `left` must
    /// not exceed `right`, and `top` must not exceed `bottom`.
    pub fn from_edges(left: S, top: S, right: S, bottom: S) -> Self {
        debug_assert!(left <= right && top <= bottom);
        Self {
            min: Point2::new(left, top),
            max: Point2::new(right, bottom),
        }
    }

    /// Creates the 1x1 [`Rect`] covering the pixel at `(x, y)`
    pub fn pixel(x: S, y: S) -> Self {
        Self::from_min_size(Point2::new(x, y), Vector2::new(S::one(), S::one()))
    }

    pub fn left(&self) -> S {
        self.min.x
    }

    pub fn top(&self) -> S {
        self.min.y
    }

    pub fn right(&self) -> S {
        self.max.x
    }

    pub fn bottom(&self) -> S {
        self.max.y
    }

    pub fn width(&self) -> S {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> S {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vector2<S> {
        self.max - self.min
    }

    pub fn is_empty(&self) -> bool {
        self.width() == S::zero() || self.height() == S::zero()
    }

    /// Returns `true` if `other` lies entirely within `self`
    pub fn contains(&self, other: Self) -> bool {
        other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
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
