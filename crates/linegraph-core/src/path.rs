// File: crates/linegraph-core/src/path.rs
// Summary: Drawable path description (move/line/curve instructions) and segment adders.

use crate::geometry::{Point, Rect};

/// One drawing instruction. An ordered sequence of these fully determines the shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathInstruction {
    MoveTo(Point),
    LineTo(Point),
    CurveTo { end: Point, ctrl1: Point, ctrl2: Point },
}

impl PathInstruction {
    /// Point the pen ends up at after this instruction.
    pub fn end_point(&self) -> Point {
        match *self {
            PathInstruction::MoveTo(p) | PathInstruction::LineTo(p) => p,
            PathInstruction::CurveTo { end, .. } => end,
        }
    }
}

/// Immutable-once-built instruction sequence. Rebuilt from scratch on every layout change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinePath {
    instructions: Vec<PathInstruction>,
}

impl LinePath {
    pub fn new() -> Self {
        Self { instructions: Vec::new() }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { instructions: Vec::with_capacity(n) }
    }

    pub fn move_to(&mut self, p: Point) {
        self.instructions.push(PathInstruction::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.instructions.push(PathInstruction::LineTo(p));
    }

    pub fn curve_to(&mut self, end: Point, ctrl1: Point, ctrl2: Point) {
        self.instructions.push(PathInstruction::CurveTo { end, ctrl1, ctrl2 });
    }

    /// Independent two-point line: a move followed by a line.
    pub fn add_line(&mut self, from: Point, to: Point) {
        self.move_to(from);
        self.line_to(to);
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathInstruction> {
        self.instructions.iter()
    }

    pub fn instructions(&self) -> &[PathInstruction] {
        &self.instructions
    }

    pub fn current_point(&self) -> Option<Point> {
        self.instructions.last().map(PathInstruction::end_point)
    }

    /// Bounding box of every point referenced, control points included.
    pub fn bounds(&self) -> Option<Rect> {
        let mut pts = self.instructions.iter().flat_map(|ins| match *ins {
            PathInstruction::MoveTo(p) | PathInstruction::LineTo(p) => [Some(p), None, None],
            PathInstruction::CurveTo { end, ctrl1, ctrl2 } => [Some(end), Some(ctrl1), Some(ctrl2)],
        }).flatten();
        let first = pts.next()?;
        Some(pts.fold(Rect::spanning(first, first), |acc, p| acc.union(&Rect::spanning(p, p))))
    }
}

impl<'a> IntoIterator for &'a LinePath {
    type Item = &'a PathInstruction;
    type IntoIter = std::slice::Iter<'a, PathInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

/// How consecutive points are joined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentKind {
    Straight,
    /// Cubic Bezier whose control points sit `curviness` of the horizontal span
    /// inside each endpoint, at that endpoint's Y.
    Curved { curviness: f64 },
}

impl SegmentKind {
    /// Append a segment ending at `end`. The pen is assumed to be at `start`.
    pub fn add_segment(&self, path: &mut LinePath, start: Point, end: Point) {
        match *self {
            SegmentKind::Straight => path.line_to(end),
            SegmentKind::Curved { curviness } => {
                let (c1, c2) = curve_control_points(start, end, curviness);
                path.curve_to(end, c1, c2);
            }
        }
    }
}

/// Control points for the S-curve between `start` and `end`.
/// Both stay within the segment's X span for curviness in [0, 1] and never overshoot vertically.
pub fn curve_control_points(start: Point, end: Point, curviness: f64) -> (Point, Point) {
    let difference = end.x - start.x;
    let one = Point::new(start.x + difference * curviness, start.y);
    let two = Point::new(end.x - difference * curviness, end.y);
    (one, two)
}
