//! Character positions for hook-versus-character tests

use glam::Vec2;

use super::geometry::closest_point_on_segment;
use super::oracle::{PlayerHit, PlayerOracle};
use super::state::ActorId;
use crate::consts::PLAYER_HOOK_RADIUS;

/// A character as seen by the hook this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RosterEntry {
    pub actor: ActorId,
    pub pos: Vec2,
    /// False for characters the firing team cannot interact with (solo, other team)
    pub collides: bool,
}

/// Frame snapshot of every active character
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a character that can be hooked
    pub fn push(&mut self, actor: ActorId, pos: Vec2) {
        self.entries.push(RosterEntry {
            actor,
            pos,
            collides: true,
        });
    }

    /// Add a character the hook passes through
    pub fn push_ghost(&mut self, actor: ActorId, pos: Vec2) {
        self.entries.push(RosterEntry {
            actor,
            pos,
            collides: false,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PlayerOracle for Roster {
    fn first_intersected_actor(&self, p0: Vec2, p1: Vec2, excluding: ActorId) -> Option<PlayerHit> {
        let mut best: Option<(f32, PlayerHit)> = None;

        for entry in self.entries.iter().filter(|e| e.collides && e.actor != excluding) {
            let Some(closest) = closest_point_on_segment(p0, p1, entry.pos) else {
                continue;
            };
            if entry.pos.distance(closest) >= PLAYER_HOOK_RADIUS {
                continue;
            }

            // Nearest to the segment start wins
            let dist = p0.distance(entry.pos);
            if best.as_ref().is_none_or(|(d, _)| dist < *d) {
                best = Some((
                    dist,
                    PlayerHit {
                        actor: entry.actor,
                        pos: closest,
                        hitbox_center: entry.pos,
                    },
                ));
            }
        }

        best.map(|(_, hit)| hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roster_hits_nothing() {
        let roster = Roster::new();
        assert!(roster.is_empty());
        assert!(
            roster
                .first_intersected_actor(Vec2::ZERO, Vec2::new(100.0, 0.0), ActorId(0))
                .is_none()
        );
    }

    #[test]
    fn test_excludes_firing_actor() {
        let mut roster = Roster::new();
        roster.push(ActorId(0), Vec2::new(50.0, 0.0));
        let hit = roster.first_intersected_actor(Vec2::ZERO, Vec2::new(100.0, 0.0), ActorId(0));
        assert!(hit.is_none());
    }

    #[test]
    fn test_nearest_actor_wins() {
        let mut roster = Roster::new();
        roster.push(ActorId(1), Vec2::new(80.0, 5.0));
        roster.push(ActorId(2), Vec2::new(40.0, -5.0));
        let hit = roster
            .first_intersected_actor(Vec2::ZERO, Vec2::new(100.0, 0.0), ActorId(0))
            .expect("two characters on the line");
        assert_eq!(hit.actor, ActorId(2));
        assert_eq!(hit.pos, Vec2::new(40.0, 0.0));
        assert_eq!(hit.hitbox_center, Vec2::new(40.0, -5.0));
    }

    #[test]
    fn test_ghosts_and_distant_actors_are_ignored() {
        let mut roster = Roster::new();
        roster.push_ghost(ActorId(1), Vec2::new(50.0, 0.0));
        roster.push(ActorId(2), Vec2::new(50.0, PLAYER_HOOK_RADIUS + 1.0));
        assert_eq!(roster.len(), 2);
        assert!(!roster.is_empty());
        assert!(
            roster
                .first_intersected_actor(Vec2::ZERO, Vec2::new(100.0, 0.0), ActorId(0))
                .is_none()
        );
    }
}
