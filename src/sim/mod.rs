//! Deterministic hook simulation module
//!
//! Everything needed to predict a hook's flight lives here. This module must be
//! pure and deterministic:
//! - Tick-quantized stepping only
//! - Map and character queries go through the oracle traits
//! - No rendering or platform dependencies

pub mod geometry;
pub mod oracle;
pub mod roster;
pub mod state;
pub mod tick;
pub mod tilemap;

pub use geometry::{
    LineCircleHits, closest_point_on_segment, intersect_line_circle, nearest_to,
    quantize_to_fixed256, round_to_int,
};
pub use oracle::{CollisionOracle, NoCollision, NoPlayers, PlayerHit, PlayerOracle, TileHit, TileKind};
pub use roster::Roster;
pub use state::{ActorId, HookPath, HookTuning, LineSegment, Outcome, SimulationOrigin, SolidKind};
pub use tick::simulate_hook;
pub use tilemap::{Tile, TileMap};
