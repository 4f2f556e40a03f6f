//! Hook simulation inputs and results
//!
//! Every value here is created fresh for one simulation call and discarded
//! afterwards. Nothing persists across frames.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{HOOK_SIM_SECONDS, HOOK_START_DISTANCE};

/// Identifies a character in the current frame's snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Per-actor hook tuning, owned by the gameplay prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HookTuning {
    /// Maximum hook reach measured from the firing position
    pub hook_length: f32,
    /// Distance the hook travels per tick
    pub hook_fire_speed: f32,
    /// Server tick rate
    pub ticks_per_second: u32,
}

impl Default for HookTuning {
    fn default() -> Self {
        Self {
            hook_length: 380.0,
            hook_fire_speed: 80.0,
            ticks_per_second: 50,
        }
    }
}

impl HookTuning {
    /// Whether a hook line can be predicted at all with this tuning
    ///
    /// Callers skip the whole feature when this is false.
    pub fn can_draw(&self) -> bool {
        self.hook_fire_speed > 0.0 && self.hook_length >= HOOK_START_DISTANCE
    }

    /// Hard ceiling on simulated ticks
    pub fn max_ticks(&self) -> u32 {
        HOOK_SIM_SECONDS.saturating_mul(self.ticks_per_second)
    }
}

/// Where and in which direction the hook is fired
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationOrigin {
    /// Render position of the firing character
    pub base_pos: Vec2,
    /// Unit aim direction
    pub direction: Vec2,
    /// Firing character, never reported as hit
    pub actor: ActorId,
}

impl SimulationOrigin {
    pub fn new(base_pos: Vec2, direction: Vec2, actor: ActorId) -> Self {
        Self {
            base_pos,
            direction,
            actor,
        }
    }

    /// Point in front of the character where the hook spawns
    pub fn hook_start(&self) -> Vec2 {
        self.base_pos + self.direction * HOOK_START_DISTANCE
    }
}

/// One piece of the drawn hook line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
}

impl LineSegment {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Unit direction from start to end (zero for a degenerate segment)
    pub fn direction(&self) -> Vec2 {
        (self.end - self.start).normalize_or_zero()
    }
}

/// What a blocking tile does to the hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolidKind {
    /// The hook would attach
    Hookable,
    /// The hook bounces off and retracts
    NoHook,
}

/// How a simulated hook flight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Reached full length without hitting anything
    FreeRetract,
    /// Struck another character
    HitPlayer(ActorId),
    /// Struck a blocking tile
    HitSolid(SolidKind),
    /// Entered a teleporter with no exits
    StuckInTeleporter,
    /// Entered a teleporter with several exits; the real path is unknowable
    AmbiguousTeleport,
    /// Ran out of simulation budget before drawing anything
    Exhausted,
}

impl Outcome {
    /// Outcomes whose drawn line is a guess rather than a prediction
    pub fn is_uncertain(&self) -> bool {
        matches!(self, Outcome::AmbiguousTeleport | Outcome::Exhausted)
    }
}

/// Result of one simulation call
#[derive(Debug, Clone, PartialEq)]
pub struct HookPath {
    /// Drawn segments in simulation order
    pub segments: Vec<LineSegment>,
    pub outcome: Outcome,
    /// Ticks actually simulated
    pub ticks: u32,
}

impl HookPath {
    /// Last point of the drawn line
    pub fn end_point(&self) -> Option<Vec2> {
        self.segments.last().map(|s| s.end)
    }

    /// Total drawn length across all segments
    pub fn drawn_length(&self) -> f32 {
        self.segments.iter().map(LineSegment::length).sum()
    }
}
