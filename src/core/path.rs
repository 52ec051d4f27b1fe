use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::PixelPoint;

/// One renderer-consumable drawing instruction in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo {
        to: PixelPoint,
    },
    CubicTo {
        control1: PixelPoint,
        control2: PixelPoint,
        to: PixelPoint,
    },
    LineTo {
        to: PixelPoint,
    },
    Close,
}

impl PathCommand {
    /// End point of the command, or `None` for `Close`.
    #[must_use]
    pub fn end_point(self) -> Option<PixelPoint> {
        match self {
            Self::MoveTo { to } | Self::CubicTo { to, .. } | Self::LineTo { to } => Some(to),
            Self::Close => None,
        }
    }

    /// All points carried by the command, control points included.
    #[must_use]
    pub fn points(self) -> SmallVec<[PixelPoint; 3]> {
        match self {
            Self::MoveTo { to } | Self::LineTo { to } => smallvec![to],
            Self::CubicTo {
                control1,
                control2,
                to,
            } => smallvec![control1, control2, to],
            Self::Close => SmallVec::new(),
        }
    }

    fn same_kind(self, other: Self) -> bool {
        std::mem::discriminant(&self) == std::mem::discriminant(&other)
    }

    fn map_points(self, f: impl Fn(PixelPoint) -> PixelPoint) -> Self {
        match self {
            Self::MoveTo { to } => Self::MoveTo { to: f(to) },
            Self::CubicTo {
                control1,
                control2,
                to,
            } => Self::CubicTo {
                control1: f(control1),
                control2: f(control2),
                to: f(to),
            },
            Self::LineTo { to } => Self::LineTo { to: f(to) },
            Self::Close => Self::Close,
        }
    }

    /// Point-wise interpolation between two commands of the same kind.
    ///
    /// Returns `None` when the kinds differ.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Option<Self> {
        let lerped = match (self, other) {
            (Self::MoveTo { to: a }, Self::MoveTo { to: b }) => Self::MoveTo { to: a.lerp(b, t) },
            (
                Self::CubicTo {
                    control1: a1,
                    control2: a2,
                    to: a3,
                },
                Self::CubicTo {
                    control1: b1,
                    control2: b2,
                    to: b3,
                },
            ) => Self::CubicTo {
                control1: a1.lerp(b1, t),
                control2: a2.lerp(b2, t),
                to: a3.lerp(b3, t),
            },
            (Self::LineTo { to: a }, Self::LineTo { to: b }) => Self::LineTo { to: a.lerp(b, t) },
            (Self::Close, Self::Close) => Self::Close,
            _ => return None,
        };
        Some(lerped)
    }
}

/// Ordered path command sequence describing one open or closed path.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Curve {
    commands: Vec<PathCommand>,
}

impl Curve {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub(crate) fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    #[must_use]
    pub fn start_point(&self) -> Option<PixelPoint> {
        self.commands.first().and_then(|command| command.end_point())
    }

    #[must_use]
    pub fn end_point(&self) -> Option<PixelPoint> {
        self.commands
            .iter()
            .rev()
            .find_map(|command| command.end_point())
    }

    /// Points the path passes through (control points excluded).
    #[must_use]
    pub fn anchor_points(&self) -> Vec<PixelPoint> {
        self.commands
            .iter()
            .filter_map(|command| command.end_point())
            .collect()
    }

    /// Horizontal extent covered by anchor and control points.
    #[must_use]
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        self.commands
            .iter()
            .flat_map(|command| command.points())
            .fold(None, |extent, point| {
                Some(match extent {
                    Some((min, max)) => (f64::min(min, point.x), f64::max(max, point.x)),
                    None => (point.x, point.x),
                })
            })
    }

    /// Returns `true` when both curves have the same command count and kinds,
    /// which is the precondition for point-wise interpolation.
    #[must_use]
    pub fn is_compatible_with(&self, other: &Self) -> bool {
        self.commands.len() == other.commands.len()
            && self
                .commands
                .iter()
                .zip(&other.commands)
                .all(|(a, b)| a.same_kind(*b))
    }

    /// Same command structure with every point dropped onto `baseline_y`.
    #[must_use]
    pub fn flattened_to(&self, baseline_y: f64) -> Self {
        Self {
            commands: self
                .commands
                .iter()
                .map(|command| command.map_points(|point| PixelPoint::new(point.x, baseline_y)))
                .collect(),
        }
    }

    /// Serializes the commands as SVG path data (`M`, `C`, `L`, `Z`).
    #[must_use]
    pub fn to_svg_path_data(&self) -> String {
        let mut out = String::with_capacity(self.commands.len() * 48);
        for command in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = match command {
                PathCommand::MoveTo { to } => write!(out, "M{:.3},{:.3}", to.x, to.y),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => write!(
                    out,
                    "C{:.3},{:.3} {:.3},{:.3} {:.3},{:.3}",
                    control1.x, control1.y, control2.x, control2.y, to.x, to.y
                ),
                PathCommand::LineTo { to } => write!(out, "L{:.3},{:.3}", to.x, to.y),
                PathCommand::Close => write!(out, "Z"),
            };
        }
        out
    }
}
