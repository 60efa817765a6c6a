//! Point and arc sequences handed to whatever renders the gear.
//!
//! The generators never serialize anything themselves. A [`Contour`] is a
//! start point followed by straight and circular [`Segment`]s. Closed
//! contours implicitly return to their start point.

use crate::aabb::Aabb2;
use crate::float_types::{PI, Real};
use crate::math::point_on_circle;
use geo::{Coord, LineString, Polygon};
use nalgebra::{Point2, Vector2};
use serde::Serialize;

/// Circular arc swept from `start_angle` to `end_angle` (radians).
/// The sign of `end_angle - start_angle` gives the direction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CircularArc {
    pub center: Point2<Real>,
    pub radius: Real,
    pub start_angle: Real,
    pub end_angle: Real,
}

impl CircularArc {
    /// Arc around the origin.
    pub fn centered(radius: Real, start_angle: Real, end_angle: Real) -> Self {
        Self {
            center: Point2::new(0.0, 0.0),
            radius,
            start_angle,
            end_angle,
        }
    }

    #[inline]
    pub fn sweep(&self) -> Real {
        self.end_angle - self.start_angle
    }

    /// More than half a turn, the SVG `large-arc` flag.
    #[inline]
    pub fn is_large(&self) -> bool {
        self.sweep().abs() > PI
    }

    /// Counter-clockwise in the drawing's own axes, the SVG `sweep` flag.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sweep() > 0.0
    }

    pub fn point_at(&self, angle: Real) -> Point2<Real> {
        self.center + point_on_circle(self.radius, angle).coords
    }

    pub fn start_point(&self) -> Point2<Real> {
        self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Point2<Real> {
        self.point_at(self.end_angle)
    }

    /// `segments + 1` points along the arc, endpoints included.
    pub fn sample(&self, segments: usize) -> Vec<Point2<Real>> {
        let segments = segments.max(1);
        let step = self.sweep() / segments as Real;
        (0..=segments)
            .map(|i| self.point_at(self.start_angle + step * i as Real))
            .collect()
    }

    fn translated(&self, offset: &Vector2<Real>) -> Self {
        Self {
            center: self.center + offset,
            ..*self
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Segment {
    /// Straight line to the given point
    Line(Point2<Real>),
    /// Arc whose start coincides with the previous end point
    Arc(CircularArc),
}

impl Segment {
    pub fn end_point(&self) -> Point2<Real> {
        match self {
            Segment::Line(p) => *p,
            Segment::Arc(arc) => arc.end_point(),
        }
    }
}

/// One connected run of segments.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Contour {
    pub start: Point2<Real>,
    pub segments: Vec<Segment>,
    pub closed: bool,
}

impl Contour {
    /// Polyline through `points`. Returns `None` for an empty slice.
    pub fn polyline(points: &[Point2<Real>], closed: bool) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(Self {
            start: *first,
            segments: rest.iter().copied().map(Segment::Line).collect(),
            closed,
        })
    }

    /// Full circle around the origin drawn as two half arcs from the top.
    pub fn circle(radius: Real) -> Self {
        let top = PI / 2.0;
        Self {
            start: point_on_circle(radius, top),
            segments: vec![
                Segment::Arc(CircularArc::centered(radius, top, top - PI)),
                Segment::Arc(CircularArc::centered(radius, top - PI, top - 2.0 * PI)),
            ],
            closed: true,
        }
    }

    pub fn end_point(&self) -> Point2<Real> {
        self.segments.last().map_or(self.start, Segment::end_point)
    }

    /// Polyline approximation: arcs are split into `arc_segments` chords.
    /// For closed contours the start point is not repeated at the end.
    pub fn flatten(&self, arc_segments: usize) -> Vec<Point2<Real>> {
        let mut out = vec![self.start];
        for seg in &self.segments {
            match seg {
                Segment::Line(p) => out.push(*p),
                Segment::Arc(arc) => out.extend(arc.sample(arc_segments).into_iter().skip(1)),
            }
        }
        if self.closed && out.len() > 1 {
            let first = out[0];
            if let Some(&last) = out.last() {
                if (last - first).norm() <= crate::float_types::tolerance() {
                    out.pop();
                }
            }
        }
        out
    }

    pub fn translate(&self, dx: Real, dy: Real) -> Self {
        let offset = Vector2::new(dx, dy);
        Self {
            start: self.start + offset,
            segments: self
                .segments
                .iter()
                .map(|seg| match seg {
                    Segment::Line(p) => Segment::Line(p + offset),
                    Segment::Arc(arc) => Segment::Arc(arc.translated(&offset)),
                })
                .collect(),
            closed: self.closed,
        }
    }

    pub fn bounding_box(&self, arc_segments: usize) -> Option<Aabb2> {
        Aabb2::from_points(&self.flatten(arc_segments))
    }

    pub fn to_line_string(&self, arc_segments: usize) -> LineString<Real> {
        let mut coords: Vec<Coord<Real>> = self
            .flatten(arc_segments)
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect();
        if self.closed {
            if let Some(first) = coords.first().copied() {
                coords.push(first);
            }
        }
        LineString::new(coords)
    }

    /// Closed contour as a `geo` polygon without holes.
    pub fn to_polygon(&self, arc_segments: usize) -> Polygon<Real> {
        Polygon::new(self.to_line_string(arc_segments), vec![])
    }
}
