//! SVG path-data builder
//!
//! Commands are appended in order and never modified afterwards. The
//! `Display` output is the `d` attribute of an SVG `<path>`: one token per
//! command, separated by single spaces. Absolute commands are upper case,
//! relative ones lower case.

use std::fmt;

use serde::Serialize;

use crate::geometry::{Polygon2D, Vector2D};

/// One drawing instruction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    LineBy { dx: f64, dy: f64 },
    HorizontalLineTo { x: f64 },
    HorizontalLineBy { dx: f64 },
    VerticalLineTo { y: f64 },
    VerticalLineBy { dy: f64 },
    EllipticalArcTo {
        rx: f64,
        ry: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    EllipticalArcBy {
        rx: f64,
        ry: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        dx: f64,
        dy: f64,
    },
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo { x, y } => write!(f, "M {},{}", fmt_num(x), fmt_num(y)),
            PathCommand::LineTo { x, y } => write!(f, "L {},{}", fmt_num(x), fmt_num(y)),
            PathCommand::LineBy { dx, dy } => write!(f, "l {},{}", fmt_num(dx), fmt_num(dy)),
            PathCommand::HorizontalLineTo { x } => write!(f, "H {}", fmt_num(x)),
            PathCommand::HorizontalLineBy { dx } => write!(f, "h {}", fmt_num(dx)),
            PathCommand::VerticalLineTo { y } => write!(f, "V {}", fmt_num(y)),
            PathCommand::VerticalLineBy { dy } => write!(f, "v {}", fmt_num(dy)),
            PathCommand::EllipticalArcTo { rx, ry, x_rotation, large_arc, sweep, x, y } => write!(
                f,
                "A {} {} {} {} {} {},{}",
                fmt_num(rx),
                fmt_num(ry),
                fmt_num(x_rotation),
                fmt_flag(large_arc),
                fmt_flag(sweep),
                fmt_num(x),
                fmt_num(y)
            ),
            PathCommand::EllipticalArcBy { rx, ry, x_rotation, large_arc, sweep, dx, dy } => write!(
                f,
                "a {} {} {} {} {} {},{}",
                fmt_num(rx),
                fmt_num(ry),
                fmt_num(x_rotation),
                fmt_flag(large_arc),
                fmt_flag(sweep),
                fmt_num(dx),
                fmt_num(dy)
            ),
            PathCommand::Close => write!(f, "Z"),
        }
    }
}

/// An ordered list of path commands with a chaining builder API.
///
/// ```
/// use trackline::path::SvgPath;
///
/// let mut path = SvgPath::new();
/// path.move_to(10.0, 10.0).horizontal_line_by(20.0).vertical_line_by(5.0).close();
/// assert_eq!(path.to_string(), "M 10,10 h 20 v 5 Z");
/// ```
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
pub struct SvgPath {
    commands: Vec<PathCommand>,
}

impl SvgPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outline a polygon: move to the first point, draw a relative line to
    /// each following point, then close. An empty polygon gives an empty path.
    pub fn from_polygon(polygon: &Polygon2D) -> Self {
        let mut path = SvgPath::new();
        let mut points = polygon.iter();
        let Some(first) = points.next() else {
            return path;
        };

        path.move_to(first.x, first.y);
        let mut previous = *first;
        for point in points {
            let delta = point.sub(previous);
            path.line_by(delta.x, delta.y);
            previous = *point;
        }
        path.close();
        path
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Append a raw command.
    pub fn push(&mut self, command: PathCommand) -> &mut Self {
        self.commands.push(command);
        self
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(PathCommand::MoveTo { x, y })
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(PathCommand::LineTo { x, y })
    }

    pub fn line_by(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.push(PathCommand::LineBy { dx, dy })
    }

    pub fn horizontal_line_to(&mut self, x: f64) -> &mut Self {
        self.push(PathCommand::HorizontalLineTo { x })
    }

    pub fn horizontal_line_by(&mut self, dx: f64) -> &mut Self {
        self.push(PathCommand::HorizontalLineBy { dx })
    }

    pub fn vertical_line_to(&mut self, y: f64) -> &mut Self {
        self.push(PathCommand::VerticalLineTo { y })
    }

    pub fn vertical_line_by(&mut self, dy: f64) -> &mut Self {
        self.push(PathCommand::VerticalLineBy { dy })
    }

    /// Circular arc of `radius` ending at the absolute point `endpoint`.
    pub fn elliptical_arc_curve_to(
        &mut self,
        radius: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        endpoint: Vector2D,
    ) -> &mut Self {
        self.push(PathCommand::EllipticalArcTo {
            rx: radius,
            ry: radius,
            x_rotation,
            large_arc,
            sweep,
            x: endpoint.x,
            y: endpoint.y,
        })
    }

    /// Circular arc of `radius` ending `delta` away from the current point.
    pub fn elliptical_arc_curve_by(
        &mut self,
        radius: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        delta: Vector2D,
    ) -> &mut Self {
        self.push(PathCommand::EllipticalArcBy {
            rx: radius,
            ry: radius,
            x_rotation,
            large_arc,
            sweep,
            dx: delta.x,
            dy: delta.y,
        })
    }

    pub fn close(&mut self) -> &mut Self {
        self.push(PathCommand::Close)
    }
}

impl fmt::Display for SvgPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}

/// Decimal places kept in path data.
const PRECISION: i32 = 3;

/// Format a number with fixed precision, trailing zeros trimmed.
///
/// Negative zero (and anything rounding to zero) prints as `0`, so tiny
/// floating point residues never leak into the output.
pub(crate) fn fmt_num(value: f64) -> String {
    let scale = 10_f64.powi(PRECISION);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        return "0".to_string();
    }

    let s = format!("{:.prec$}", rounded, prec = PRECISION as usize);
    if !s.contains('.') {
        return s;
    }
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

fn fmt_flag(flag: bool) -> &'static str {
    if flag { "1" } else { "0" }
}
