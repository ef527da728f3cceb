//! Layer composition
//!
//! Turns simulation state into an ordered list of draw commands, back to front:
//! background, display disk, sweep, targets, HUD. Every angular placement goes
//! through [`crate::to_screen`] so the sweep line, its wedge and the target
//! markers agree on where a bearing is.

use glam::Vec2;

use super::command::{Color, DrawCommand, Frame, FrameBuilder, Layer, Paint, Stroke};
use super::encoder;
use crate::consts::SWEEP_ARC_HALF_WIDTH_DEG;
use crate::sim::SimulationState;
use crate::{rim_point, to_screen, wrap_degrees};

/// Display palette
pub mod palette {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(10, 20, 10);
    pub const DISK_INNER: Color = Color::rgba(0, 80, 0, 100);
    pub const DISK_OUTER: Color = Color::rgba(0, 40, 0, 50);
    pub const DISK_RIM: Color = Color::rgb(0, 180, 0);
    pub const GRID: Color = Color::rgb(0, 120, 0);
    pub const SWEEP: Color = Color::rgb(0, 255, 0);
    pub const SWEEP_GLOW_INNER: Color = Color::rgba(0, 255, 0, 80);
    pub const SWEEP_GLOW_OUTER: Color = Color::rgba(0, 255, 0, 0);
    pub const HUD: Color = Color::rgb(0, 255, 0);
}

/// Concentric range rings inside the rim
pub const RANGE_RINGS: u32 = 4;
/// Angle between grid spokes
pub const SPOKE_STEP_DEG: u32 = 45;
/// Radius of the dot at the tip of the sweep line
pub const GLOW_DOT_RADIUS: f32 = 3.0;
/// Half length of each crosshair arm
pub const CROSSHAIR_SIZE: f32 = 8.0;
/// Peak alpha of the newest afterglow line
pub const AFTERGLOW_MAX_ALPHA: f32 = 60.0;

/// HUD label anchors (baseline origin)
pub const HUD_ANGLE_POS: Vec2 = Vec2::new(10.0, 20.0);
pub const HUD_COUNT_POS: Vec2 = Vec2::new(10.0, 40.0);

/// Builds frames from simulation state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerComposer {
    /// Half width of the highlighted wedge around the sweep line
    pub arc_half_width_deg: f32,
    /// Draw the scan history as fading lines behind the wedge
    pub afterglow: bool,
}

impl Default for LayerComposer {
    fn default() -> Self {
        Self {
            arc_half_width_deg: SWEEP_ARC_HALF_WIDTH_DEG,
            afterglow: false,
        }
    }
}

impl LayerComposer {
    pub fn new(arc_half_width_deg: f32, afterglow: bool) -> Self {
        Self {
            arc_half_width_deg,
            afterglow,
        }
    }

    /// Compose one frame for a display disk of `radius` pixels at `center`.
    ///
    /// A non-positive radius means the surface has no drawable area yet; the
    /// frame is empty in that case.
    pub fn compose(&self, state: &SimulationState, center: Vec2, radius: f32) -> Frame {
        if !(radius.is_finite() && radius > 0.0) {
            return Frame::empty();
        }

        let mut frame = FrameBuilder::default();
        frame.layer(Layer::Background, background());
        frame.layer(Layer::Display, display_disk(center, radius));
        frame.layer(Layer::Sweep, self.sweep(state, center, radius));
        frame.layer(Layer::Targets, targets(state, center, radius));
        frame.layer(Layer::Hud, hud(state, center));
        frame.finish()
    }

    fn sweep(&self, state: &SimulationState, center: Vec2, radius: f32) -> Vec<DrawCommand> {
        let angle = state.sweep_angle_deg;
        let mut commands = Vec::with_capacity(3 + state.scan_history.len());

        if self.afterglow {
            commands.extend(afterglow(state, center, radius));
        }

        commands.push(DrawCommand::Pie {
            center,
            radius,
            start_deg: wrap_degrees(angle - self.arc_half_width_deg),
            span_deg: self.arc_half_width_deg * 2.0,
            fill: Paint::RadialGradient {
                center,
                radius,
                inner: palette::SWEEP_GLOW_INNER,
                outer: palette::SWEEP_GLOW_OUTER,
            },
        });

        let tip = rim_point(center, radius, angle);
        commands.push(DrawCommand::Line {
            from: center,
            to: tip,
            stroke: Stroke::solid(palette::SWEEP, 2.0),
        });
        commands.push(DrawCommand::Circle {
            center: tip,
            radius: GLOW_DOT_RADIUS,
            fill: Some(Paint::Solid(palette::SWEEP)),
            stroke: None,
        });

        commands
    }
}

/// Compose with the default wedge width and no afterglow
pub fn compose(state: &SimulationState, center: Vec2, radius: f32) -> Frame {
    LayerComposer::default().compose(state, center, radius)
}

fn background() -> [DrawCommand; 1] {
    [DrawCommand::Clear {
        color: palette::BACKGROUND,
    }]
}

fn display_disk(center: Vec2, radius: f32) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(1 + RANGE_RINGS as usize + 8);

    commands.push(DrawCommand::Circle {
        center,
        radius,
        fill: Some(Paint::RadialGradient {
            center,
            radius,
            inner: palette::DISK_INNER,
            outer: palette::DISK_OUTER,
        }),
        stroke: Some(Stroke::solid(palette::DISK_RIM, 2.0)),
    });

    let grid = Stroke::dotted(palette::GRID, 1.0);
    let divisions = (RANGE_RINGS + 1) as f32;
    for i in 1..=RANGE_RINGS {
        commands.push(DrawCommand::Circle {
            center,
            radius: radius * i as f32 / divisions,
            fill: None,
            stroke: Some(grid),
        });
    }

    for spoke in (0..360).step_by(SPOKE_STEP_DEG as usize) {
        commands.push(DrawCommand::Line {
            from: center,
            to: rim_point(center, radius, spoke as f32),
            stroke: grid,
        });
    }

    commands
}

/// Past sweep angles as fading lines, oldest (faintest) first
fn afterglow(state: &SimulationState, center: Vec2, radius: f32) -> Vec<DrawCommand> {
    let history = &state.scan_history;
    // The newest entry is the live sweep line itself
    let past = history.len().saturating_sub(1);

    history
        .iter()
        .take(past)
        .enumerate()
        .map(|(i, angle)| {
            let age = (past - i) as f32 / history.len() as f32;
            let alpha = ((1.0 - age) * AFTERGLOW_MAX_ALPHA).round() as u8;
            DrawCommand::Line {
                from: center,
                to: rim_point(center, radius, angle),
                stroke: Stroke::solid(palette::SWEEP.with_alpha(alpha), 2.0),
            }
        })
        .collect()
}

fn targets(state: &SimulationState, center: Vec2, radius: f32) -> Vec<DrawCommand> {
    let max_distance = state.max_distance;
    let mut commands = Vec::with_capacity(state.targets().len() * 2);

    for target in state.targets() {
        let pos = to_screen(center, radius, max_distance, target.distance, target.angle_deg);
        let style = encoder::encode(target, max_distance);

        commands.push(DrawCommand::Circle {
            center: pos,
            radius: style.radius_px,
            fill: None,
            stroke: Some(Stroke::solid(style.color, 2.0)),
        });
        commands.push(DrawCommand::Circle {
            center: pos,
            radius: style.radius_px - 2.0,
            fill: Some(Paint::Solid(style.color)),
            stroke: None,
        });
    }

    commands
}

fn hud(state: &SimulationState, center: Vec2) -> [DrawCommand; 4] {
    let crosshair = Stroke::solid(palette::HUD, 1.0);
    [
        DrawCommand::Text {
            position: HUD_ANGLE_POS,
            text: format!("Angle: {:.0}°", state.sweep_angle_deg.floor()),
            color: palette::HUD,
        },
        DrawCommand::Text {
            position: HUD_COUNT_POS,
            text: format!("Targets: {}", state.targets().len()),
            color: palette::HUD,
        },
        DrawCommand::Line {
            from: center - Vec2::new(CROSSHAIR_SIZE, 0.0),
            to: center + Vec2::new(CROSSHAIR_SIZE, 0.0),
            stroke: crosshair,
        },
        DrawCommand::Line {
            from: center - Vec2::new(0.0, CROSSHAIR_SIZE),
            to: center + Vec2::new(0.0, CROSSHAIR_SIZE),
            stroke: crosshair,
        },
    ]
}
