//! SVG export.
//!
//! Contours become SVG path data with absolute `M`, `L`, `A` commands and a
//! trailing `z` for closed contours. Coordinates are written with four
//! decimals. The drawing frame is y-up and SVG is y-down, so every Y is
//! negated and arc sweep flags are inverted: a meshed rack ends up below the
//! gear and annotations above it.

use crate::float_types::Real;
use crate::gear::GearDrawing;
use crate::io::IoError;
use crate::path::{Contour, Segment};
use nalgebra::Point2;
use ::svg::Document;
use ::svg::Node;
use ::svg::node::element::{Element, Group, Path};

#[derive(Clone, Debug, PartialEq)]
pub struct SvgOptions {
    pub stroke: String,
    pub stroke_width: Real,
    /// Guides are drawn with this fraction of `stroke_width`
    pub guide_ratio: Real,
    /// Blank border around the drawing, as a fraction of its larger side
    pub margin: Real,
    /// Lines of text placed above the gear
    pub annotations: Vec<String>,
    pub text_height: Real,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            stroke: "#000000".to_string(),
            stroke_width: 0.6,
            guide_ratio: 0.25,
            margin: 0.05,
            annotations: Vec::new(),
            text_height: 4.0,
        }
    }
}

/// SVG user coordinates of a drawing point.
#[inline]
pub fn to_svg_point(p: &Point2<Real>) -> Point2<Real> {
    // 0 - y so that a zero Y prints as 0, not -0
    Point2::new(p.x, 0.0 - p.y)
}

/// Path data for a single contour.
pub fn contour_path_data(contour: &Contour) -> String {
    let start = to_svg_point(&contour.start);
    let mut d = format!("M{:.4},{:.4}", start.x, start.y);
    for seg in &contour.segments {
        match seg {
            Segment::Line(p) => {
                let p = to_svg_point(p);
                d.push_str(&format!("L{:.4},{:.4}", p.x, p.y));
            },
            Segment::Arc(arc) => {
                let end = to_svg_point(&arc.end_point());
                d.push_str(&format!(
                    "A{r:.4},{r:.4} 0 {} {} {:.4},{:.4}",
                    u8::from(arc.is_large()),
                    u8::from(!arc.is_positive()),
                    end.x,
                    end.y,
                    r = arc.radius.abs(),
                ));
            },
        }
    }
    if contour.closed {
        d.push('z');
    }
    d
}

/// Path data for several contours drawn as one path element.
pub fn path_data<'a, I>(contours: I) -> String
where
    I: IntoIterator<Item = &'a Contour>,
{
    contours.into_iter().map(contour_path_data).collect()
}

fn styled_path(d: String, stroke: &str, width: Real) -> Path {
    Path::new()
        .set("d", d)
        .set("fill", "none")
        .set("stroke", stroke.to_string())
        .set("stroke-width", format!("{width:.4}"))
}

impl GearDrawing {
    pub fn to_svg(&self, options: &SvgOptions) -> Document {
        let thin = options.stroke_width * options.guide_ratio;
        let teeth = self.geometry.teeth;
        let pivot = to_svg_point(&self.pivot);

        let mut gear = Group::new()
            .set("id", format!("Gear{teeth}"))
            .set(
                "data-info",
                format!(
                    "N:{teeth}; Pitch:{:.4}; Pressure Angle: {:.4}",
                    self.geometry.circular_pitch,
                    self.geometry.pressure_angle_deg()
                ),
            )
            .set(
                "data-pivot",
                format!("{:.4},{:.4}", pivot.x, pivot.y),
            )
            .add(styled_path(
                path_data(&self.gear_contours()),
                &options.stroke,
                options.stroke_width,
            ));

        let guides = self.guide_contours();
        if !guides.is_empty() {
            gear = gear.add(styled_path(path_data(&guides), &options.stroke, thin));
        }

        if let Some(rack) = &self.rack {
            let mut group = Group::new().set("id", format!("RackGear{}", rack.tooth_count));
            if let Some(outline) = rack.to_contour() {
                group = group.add(styled_path(
                    contour_path_data(&outline),
                    &options.stroke,
                    options.stroke_width,
                ));
            }
            if let Some(guide) = rack.guide_contour() {
                group = group.add(styled_path(contour_path_data(&guide), &options.stroke, thin));
            }
            gear = gear.add(group);
        }

        // top edge of the drawing is its largest Y, the smallest SVG y
        let (mut min_x, mut min_y, mut width, mut height) = match self.bounding_box() {
            Some(bb) => (bb.mins.x, 0.0 - bb.maxs.y, bb.width(), bb.height()),
            None => (0.0, 0.0, 0.0, 0.0),
        };

        if !options.annotations.is_empty() {
            let line = options.text_height * 1.2;
            let top_edge = min_y.min(-self.geometry.outer_radius);
            let mut y = top_edge - options.annotations.len() as Real * line;
            let top = y - options.text_height;
            for note in &options.annotations {
                let mut text = Element::new("text");
                text.assign("x", "0");
                text.assign("y", format!("{y:.4}"));
                text.assign("font-size", format!("{:.4}", options.text_height));
                text.assign("text-anchor", "middle");
                text.assign("fill", "#F6921E");
                text.append(::svg::node::Text::new(note.clone()));
                gear = gear.add(text);
                y += line;
            }
            if top < min_y {
                height += min_y - top;
                min_y = top;
            }
        }

        let pad = options.margin * width.max(height);
        min_x -= pad;
        min_y -= pad;
        width += 2.0 * pad;
        height += 2.0 * pad;

        Document::new()
            .set(
                "viewBox",
                format!("{min_x:.4} {min_y:.4} {width:.4} {height:.4}"),
            )
            .add(gear)
    }

    pub fn to_svg_string(&self, options: &SvgOptions) -> String {
        self.to_svg(options).to_string()
    }
}

pub fn write_svg<W: std::io::Write>(
    drawing: &GearDrawing,
    options: &SvgOptions,
    writer: W,
) -> Result<(), IoError> {
    ::svg::write(writer, &drawing.to_svg(options))?;
    Ok(())
}
