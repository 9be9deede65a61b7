//! Stroke path geometry for the stroke currently being drawn.

/// A point in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    // Point at fraction `t` along the segment from `self` to `other`.
    fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// A single path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Starts a new subpath at the given point.
    MoveTo(Point),
    /// Quadratic Bézier from the current point through `ctrl` to `end`.
    QuadTo { ctrl: Point, end: Point },
}

/// Mutable sequence of path commands.
///
/// A quadratic segment issued before any `move_to` starts from the origin.
#[derive(Debug, Clone, Default)]
pub struct StrokePath {
    commands: Vec<PathCommand>,
}

impl StrokePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards every command.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn move_to(&mut self, point: Point) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn quad_to(&mut self, ctrl: Point, end: Point) {
        self.commands.push(PathCommand::QuadTo { ctrl, end });
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of quadratic segments, i.e. the parts that actually produce ink.
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::QuadTo { .. }))
            .count()
    }

    /// Replaces the context's current path with this one.
    ///
    /// Cairo has no quadratic primitive, so each quad is elevated to the
    /// equivalent cubic: both cubic controls sit 2/3 of the way from the
    /// segment endpoints toward the quadratic control point.
    pub fn trace(&self, ctx: &cairo::Context) {
        ctx.new_path();
        let mut current = Point::default();
        let mut started = false;

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(point) => {
                    ctx.move_to(point.x, point.y);
                    current = point;
                    started = true;
                }
                PathCommand::QuadTo { ctrl, end } => {
                    if !started {
                        ctx.move_to(current.x, current.y);
                        started = true;
                    }
                    let c1 = current.lerp(ctrl, 2.0 / 3.0);
                    let c2 = end.lerp(ctrl, 2.0 / 3.0);
                    ctx.curve_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y);
                    current = end;
                }
            }
        }
    }
}
