use crate::float_types::Real;
use nalgebra::Point2;
use serde::Serialize;

/// Axis-aligned bounding box in the drawing plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Aabb2 {
    pub mins: Point2<Real>,
    pub maxs: Point2<Real>,
}

impl Aabb2 {
    #[inline]
    pub const fn new(mins: Point2<Real>, maxs: Point2<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Smallest box containing every point, `None` for an empty sequence.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point2<Real>>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(Self::new(first, first), |mut bb, p| {
            bb.mins.x = bb.mins.x.min(p.x);
            bb.mins.y = bb.mins.y.min(p.y);
            bb.maxs.x = bb.maxs.x.max(p.x);
            bb.maxs.y = bb.maxs.y.max(p.y);
            bb
        }))
    }

    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.maxs.x >= other.mins.x
            && self.mins.x <= other.maxs.x
            && self.maxs.y >= other.mins.y
            && self.mins.y <= other.maxs.y
    }

    #[inline]
    pub fn center(&self) -> Point2<Real> {
        Point2::new(
            (self.mins.x + self.maxs.x) / 2.0,
            (self.mins.y + self.maxs.y) / 2.0,
        )
    }

    #[inline]
    pub fn width(&self) -> Real {
        self.maxs.x - self.mins.x
    }

    #[inline]
    pub fn height(&self) -> Real {
        self.maxs.y - self.mins.y
    }

    /// Box grown to also contain `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            Point2::new(self.mins.x.min(other.mins.x), self.mins.y.min(other.mins.y)),
            Point2::new(self.maxs.x.max(other.maxs.x), self.maxs.y.max(other.maxs.y)),
        )
    }
}

/// Midpoint of the bounding box of a non-empty point sequence.
pub fn bounding_box_center(points: &[Point2<Real>]) -> Option<Point2<Real>> {
    Aabb2::from_points(points).map(|bb| bb.center())
}
