//! Path data interpreter.
//!
//! Each command letter is dispatched to its own step method. The steps share
//! an explicit cursor state instead of relying on case fall-through:
//!
//! ```text
//! cursor                  current pen position
//! subpath_start           where Z returns to
//! last_cubic_control      second control point of the previous C/S
//! last_quadratic_control  control point of the previous Q/T
//! ```

use crate::arc::endpoint_to_center;
use crate::outline::{DrawOp, ShapeOutline};
use crate::scanner::Scanner;
use shapekit_core::{MalformedPathError, Point};

/// Arguments of an `A`/`a` command, already resolved to absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcArgs {
    pub rx: f64,
    pub ry: f64,
    /// Degrees
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub end: Point,
}

/// Interprets path data into a [`ShapeOutline`]
///
/// The step methods (`move_to`, `line_to`, ...) take absolute coordinates and
/// can be driven directly; [`PathInterpreter::interpret`] drives them from a
/// path string.
#[derive(Debug, Clone, Default)]
pub struct PathInterpreter {
    cursor: Point,
    subpath_start: Point,
    subpath_open: bool,
    last_cubic_control: Option<Point>,
    last_quadratic_control: Option<Point>,
    ops: Vec<DrawOp>,
}

fn is_command(c: char) -> bool {
    matches!(
        c.to_ascii_uppercase(),
        'M' | 'Z' | 'L' | 'H' | 'V' | 'C' | 'S' | 'Q' | 'T' | 'A'
    )
}

impl PathInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret a complete path string.
    ///
    /// Fails on the first unknown command letter or missing argument; no
    /// partial outline is returned.
    pub fn interpret(path: &str) -> Result<ShapeOutline, MalformedPathError> {
        let mut interpreter = Self::new();
        let mut scanner = Scanner::new(path);
        let mut repeat: Option<char> = None;

        loop {
            let command = match repeat.take() {
                Some(command) => command,
                None => match scanner.next_command() {
                    Some((command, offset)) if !is_command(command) => {
                        return Err(MalformedPathError::UnknownCommand { command, offset });
                    }
                    Some((command, _)) => command,
                    None => break,
                },
            };

            let next = interpreter.execute(command, &mut scanner)?;
            if let Some(next) = next {
                if scanner.next_is_number() {
                    repeat = Some(next);
                }
            }
        }

        let outline = interpreter.finish();
        tracing::debug!(
            "Interpreted {} bytes of path data into {} ops ({} subpaths)",
            path.len(),
            outline.len(),
            outline.subpaths()
        );
        Ok(outline)
    }

    /// Current pen position
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn finish(self) -> ShapeOutline {
        ShapeOutline::new(self.ops)
    }

    /// Read the arguments of one command and apply it.
    ///
    /// Returns the letter an implicit repeat continues with, or `None` for
    /// commands that never repeat.
    fn execute(
        &mut self,
        command: char,
        scanner: &mut Scanner<'_>,
    ) -> Result<Option<char>, MalformedPathError> {
        let relative = command.is_ascii_lowercase();
        let origin = if relative { self.cursor } else { Point::ORIGIN };
        let read_point = |scanner: &mut Scanner<'_>| -> Result<Point, MalformedPathError> {
            let x = scanner.read_number(command)?;
            let y = scanner.read_number(command)?;
            Ok(origin + Point::new(x, y))
        };

        tracing::trace!("Path command '{}' at offset {}", command, scanner.offset());

        match command.to_ascii_uppercase() {
            'M' => {
                let target = read_point(scanner)?;
                self.move_to(target);
                // Repeated coordinate pairs after a moveto are linetos.
                return Ok(Some(if relative { 'l' } else { 'L' }));
            }
            'Z' => {
                self.close();
                return Ok(None);
            }
            'L' => {
                let target = read_point(scanner)?;
                self.line_to(target);
            }
            'H' => {
                let x = scanner.read_number(command)? + origin.x;
                self.line_to(Point::new(x, self.cursor.y));
            }
            'V' => {
                let y = scanner.read_number(command)? + origin.y;
                self.line_to(Point::new(self.cursor.x, y));
            }
            'C' => {
                let ctrl1 = read_point(scanner)?;
                let ctrl2 = read_point(scanner)?;
                let end = read_point(scanner)?;
                self.cubic_to(ctrl1, ctrl2, end);
            }
            'S' => {
                let ctrl2 = read_point(scanner)?;
                let end = read_point(scanner)?;
                self.smooth_cubic_to(ctrl2, end);
            }
            'Q' => {
                let ctrl = read_point(scanner)?;
                let end = read_point(scanner)?;
                self.quadratic_to(ctrl, end);
            }
            'T' => {
                let end = read_point(scanner)?;
                self.smooth_quadratic_to(end);
            }
            'A' => {
                let rx = scanner.read_number(command)?;
                let ry = scanner.read_number(command)?;
                let x_axis_rotation = scanner.read_number(command)?;
                let large_arc = scanner.read_flag(command)?;
                let sweep = scanner.read_flag(command)?;
                let end = read_point(scanner)?;
                self.arc_to(ArcArgs {
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    end,
                });
            }
            _ => {
                return Err(MalformedPathError::UnknownCommand {
                    command,
                    offset: scanner.offset().saturating_sub(command.len_utf8()),
                });
            }
        }

        Ok(Some(command))
    }

    /// Start a subpath at the cursor if a drawing command arrives without one.
    fn ensure_subpath(&mut self) {
        if !self.subpath_open {
            self.ops.push(DrawOp::MoveTo {
                x: self.cursor.x,
                y: self.cursor.y,
            });
            self.subpath_start = self.cursor;
            self.subpath_open = true;
        }
    }

    fn clear_controls(&mut self) {
        self.last_cubic_control = None;
        self.last_quadratic_control = None;
    }

    pub fn move_to(&mut self, target: Point) {
        self.ops.push(DrawOp::MoveTo {
            x: target.x,
            y: target.y,
        });
        self.cursor = target;
        self.subpath_start = target;
        self.subpath_open = true;
        self.clear_controls();
    }

    /// Close the current subpath, drawing back to its start unless the
    /// cursor is already there.
    pub fn close(&mut self) {
        if self.subpath_open {
            if self.cursor != self.subpath_start {
                self.ops.push(DrawOp::LineTo {
                    x: self.subpath_start.x,
                    y: self.subpath_start.y,
                });
            }
            self.cursor = self.subpath_start;
            self.subpath_open = false;
        }
        self.clear_controls();
    }

    pub fn line_to(&mut self, target: Point) {
        self.ensure_subpath();
        self.ops.push(DrawOp::LineTo {
            x: target.x,
            y: target.y,
        });
        self.cursor = target;
        self.clear_controls();
    }

    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, end: Point) {
        self.ensure_subpath();
        self.ops.push(DrawOp::CubicBezierTo {
            x1: ctrl1.x,
            y1: ctrl1.y,
            x2: ctrl2.x,
            y2: ctrl2.y,
            x: end.x,
            y: end.y,
        });
        self.cursor = end;
        self.last_cubic_control = Some(ctrl2);
        self.last_quadratic_control = None;
    }

    /// Cubic whose first control point mirrors the previous cubic's second
    /// control point through the cursor (or is the cursor itself).
    pub fn smooth_cubic_to(&mut self, ctrl2: Point, end: Point) {
        let ctrl1 = self
            .last_cubic_control
            .map_or(self.cursor, |prev| prev.reflect_about(self.cursor));
        self.cubic_to(ctrl1, ctrl2, end);
    }

    pub fn quadratic_to(&mut self, ctrl: Point, end: Point) {
        self.ensure_subpath();
        self.ops.push(DrawOp::QuadraticBezierTo {
            x1: ctrl.x,
            y1: ctrl.y,
            x: end.x,
            y: end.y,
        });
        self.cursor = end;
        self.last_quadratic_control = Some(ctrl);
        self.last_cubic_control = None;
    }

    pub fn smooth_quadratic_to(&mut self, end: Point) {
        let ctrl = self
            .last_quadratic_control
            .map_or(self.cursor, |prev| prev.reflect_about(self.cursor));
        self.quadratic_to(ctrl, end);
    }

    /// Circular arc to `args.end`.
    ///
    /// Differing radii are forced to a circle of radius `rx`. A zero radius
    /// degrades to a line; an arc ending on the cursor is dropped.
    pub fn arc_to(&mut self, args: ArcArgs) {
        self.ensure_subpath();
        self.clear_controls();

        let rx = args.rx.abs();
        let ry = args.ry.abs();
        if rx != ry {
            tracing::warn!(
                "Forcing elliptical arc to be a circular one (rx={}, ry={})",
                args.rx,
                args.ry
            );
        }

        if args.end == self.cursor {
            return;
        }
        if rx == 0.0 || ry == 0.0 {
            self.line_to(args.end);
            return;
        }

        let rotation = args.x_axis_rotation.to_radians();
        let Some(arc) = endpoint_to_center(
            self.cursor,
            args.end,
            rx,
            rx,
            rotation,
            args.large_arc,
            args.sweep,
        ) else {
            self.line_to(args.end);
            return;
        };

        // For a circle the local frame only differs from the world frame by
        // the x-axis rotation.
        let start_angle = arc.start_angle + rotation;
        self.ops.push(DrawOp::ArcTo {
            cx: arc.center.x,
            cy: arc.center.y,
            radius: arc.rx,
            start_angle,
            end_angle: start_angle + arc.delta_angle,
            counterclockwise: args.sweep,
        });
        self.cursor = args.end;
    }
}
