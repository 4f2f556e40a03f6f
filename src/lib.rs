//! Hookline - predicted hook collision lines
//!
//! Core modules:
//! - `sim`: Deterministic hook flight re-simulation (geometry, oracles, tick loop)
//! - `renderer`: Reduction of simulated segments into lines or ribbons
//! - `hookcoll`: Per-actor, per-frame orchestration (visibility, color, alpha)
//! - `settings`: User-facing configuration

pub mod hookcoll;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use hookcoll::{ActorFrame, FrameResult, HookCollLine};
pub use settings::{HookCollSettings, OutcomeColors, ShowMode};

use glam::Vec2;

/// Physics constants shared with the authoritative simulation
pub mod consts {
    /// Diameter of a character's collision body (world units)
    pub const PHYSICAL_SIZE: f32 = 28.0;
    /// Distance in front of the firing character where the hook spawns
    pub const HOOK_START_DISTANCE: f32 = PHYSICAL_SIZE * 1.5;
    /// Radius used to stop the drawn line at a struck character
    pub const PLAYER_HITBOX_RADIUS: f32 = PHYSICAL_SIZE * 1.45 / 2.0;
    /// Radius the reference roster uses to decide that a hook hits a character
    pub const PLAYER_HOOK_RADIUS: f32 = PHYSICAL_SIZE + 2.0;
    /// Edge length of one map tile
    pub const TILE_SIZE: f32 = 32.0;
    /// Seconds of hook flight simulated before giving up
    pub const HOOK_SIM_SECONDS: u32 = 5;
    /// Granularity of the fixed-point hook direction
    pub const DIRECTION_FIXED_SCALE: f32 = 256.0;
}

/// Unit vector pointing at `angle` (radians)
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Angle (radians, in [-π, π]) of a vector
#[inline]
pub fn angle(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}
