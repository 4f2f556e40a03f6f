//! Query interfaces the simulator consumes
//!
//! Both oracles answer read-only questions about a frame-local snapshot (the
//! map, and the characters' positions this tick). "No hit" is an ordinary
//! answer, never an error.

use glam::Vec2;

use super::state::ActorId;

/// Classification of the first tile a hook runs into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// Ordinary collision, the hook attaches
    Solid,
    /// Hook-blocking tile, the hook retracts
    NoHook,
    /// Teleporter that redirects hooks; carries the teleporter number
    TeleHook(u32),
}

/// First blocking tile along a segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileHit {
    pub pos: Vec2,
    pub kind: TileKind,
}

/// Character struck along a segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerHit {
    pub actor: ActorId,
    /// Point on the queried segment where the hit registered
    pub pos: Vec2,
    /// Center of the struck character's collision body
    pub hitbox_center: Vec2,
}

/// Map queries
pub trait CollisionOracle {
    /// First tile between `p0` and `p1` that stops or redirects a hook
    fn first_blocking_tile(&self, p0: Vec2, p1: Vec2) -> Option<TileHit>;

    /// Exit points of teleporter `id` (possibly empty)
    fn teleporter_destinations(&self, id: u32) -> &[Vec2];
}

/// Character queries
pub trait PlayerOracle {
    /// Nearest character (other than `excluding`) intersected by `p0`..`p1`
    fn first_intersected_actor(&self, p0: Vec2, p1: Vec2, excluding: ActorId) -> Option<PlayerHit>;
}

impl<T: CollisionOracle + ?Sized> CollisionOracle for &T {
    fn first_blocking_tile(&self, p0: Vec2, p1: Vec2) -> Option<TileHit> {
        (**self).first_blocking_tile(p0, p1)
    }

    fn teleporter_destinations(&self, id: u32) -> &[Vec2] {
        (**self).teleporter_destinations(id)
    }
}

impl<T: PlayerOracle + ?Sized> PlayerOracle for &T {
    fn first_intersected_actor(&self, p0: Vec2, p1: Vec2, excluding: ActorId) -> Option<PlayerHit> {
        (**self).first_intersected_actor(p0, p1, excluding)
    }
}

/// Empty map, used when no map is loaded
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCollision;

impl CollisionOracle for NoCollision {
    fn first_blocking_tile(&self, _p0: Vec2, _p1: Vec2) -> Option<TileHit> {
        None
    }

    fn teleporter_destinations(&self, _id: u32) -> &[Vec2] {
        &[]
    }
}

/// Empty world, used when character positions are unavailable
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPlayers;

impl PlayerOracle for NoPlayers {
    fn first_intersected_actor(&self, _p0: Vec2, _p1: Vec2, _excluding: ActorId) -> Option<PlayerHit> {
        None
    }
}
