//! Tick-by-tick hook flight prediction
//!
//! Re-runs the hook's flight the way the server steps it: a fixed distance per
//! tick, positions snapped to whole units, and the direction reduced to 1/256
//! precision after the first tick. Skipping either rounding step makes the
//! predicted line drift away from where the real hook lands.

use glam::Vec2;

use super::geometry::{intersect_line_circle, nearest_to, quantize_to_fixed256, round_to_int, LineCircleHits};
use super::oracle::{CollisionOracle, PlayerHit, PlayerOracle, TileKind};
use super::state::{HookPath, HookTuning, LineSegment, Outcome, SimulationOrigin, SolidKind};
use crate::consts::{HOOK_START_DISTANCE, PLAYER_HITBOX_RADIUS};

/// Mutable state of one predicted flight
struct Flight {
    /// Origin of the hook length check; moves on teleport
    base_pos: Vec2,
    /// Where the currently drawn line begins; moves on teleport
    line_start: Vec2,
    /// Simulated hook tip
    segment_start: Vec2,
    direction: Vec2,
    entered_telehook: bool,
    segments: Vec<LineSegment>,
}

impl Flight {
    fn new(origin: &SimulationOrigin) -> Self {
        let start = origin.hook_start();
        Self {
            base_pos: origin.base_pos,
            line_start: start,
            segment_start: start,
            direction: origin.direction,
            entered_telehook: false,
            segments: Vec::new(),
        }
    }

    /// Snap the tip to whole units; the first tick also fixes the direction
    fn snap(&mut self, tip: Vec2, tick: u32) {
        self.segment_start = round_to_int(tip);
        if tick == 0 {
            self.direction = quantize_to_fixed256(self.direction);
        }
    }

    fn push_line_to(&mut self, end: Vec2) {
        self.segments.push(LineSegment::new(self.line_start, end));
    }
}

/// Predict where a hook fired from `origin` ends up
///
/// Never fails: running into nothing, an unknowable teleporter or the tick
/// budget are all reported through [`Outcome`]. Callers must check
/// [`HookTuning::can_draw`] first; with invalid tuning the result is
/// meaningless but still bounded.
pub fn simulate_hook<C, P>(origin: &SimulationOrigin, tuning: &HookTuning, collision: &C, players: &P) -> HookPath
where
    C: CollisionOracle + ?Sized,
    P: PlayerOracle + ?Sized,
{
    debug_assert!(tuning.can_draw(), "hook prediction with unusable tuning: {tuning:?}");

    let max_ticks = tuning.max_ticks();
    let mut flight = Flight::new(origin);
    let mut outcome = None;
    let mut tick = 0;

    while tick < max_ticks {
        let segment_end = flight.segment_start + flight.direction * tuning.hook_fire_speed;
        let current = tick;
        tick += 1;

        // The hook starts retracting this tick
        if flight.base_pos.distance(segment_end) > tuning.hook_length {
            if !flight.entered_telehook {
                let retract_end =
                    flight.base_pos + (segment_end - flight.base_pos).normalize_or_zero() * tuning.hook_length;
                if let Some(hit) = players.first_intersected_actor(flight.segment_start, retract_end, origin.actor) {
                    let stop = player_stop(flight.line_start, segment_end, &hit, origin.base_pos);
                    flight.push_line_to(stop);
                    outcome = Some(Outcome::HitPlayer(hit.actor));
                    break;
                }
            }

            let tip = flight.segment_start;
            flight.push_line_to(tip);
            outcome = Some(Outcome::FreeRetract);
            break;
        }

        let tile_hit = collision.first_blocking_tile(flight.segment_start, segment_end);
        let reach = tile_hit.map_or(segment_end, |hit| hit.pos);

        if let Some(hit) = players.first_intersected_actor(flight.segment_start, reach, origin.actor) {
            let stop = player_stop(flight.line_start, reach, &hit, origin.base_pos);
            flight.push_line_to(stop);
            outcome = Some(Outcome::HitPlayer(hit.actor));
            break;
        }

        let Some(tile_hit) = tile_hit else {
            flight.snap(segment_end, current);
            continue;
        };

        flight.push_line_to(tile_hit.pos);
        let teleporter = match tile_hit.kind {
            TileKind::Solid => {
                outcome = Some(Outcome::HitSolid(SolidKind::Hookable));
                break;
            }
            TileKind::NoHook => {
                outcome = Some(Outcome::HitSolid(SolidKind::NoHook));
                break;
            }
            TileKind::TeleHook(id) => id,
        };

        flight.entered_telehook = true;
        match collision.teleporter_destinations(teleporter) {
            [] => {
                outcome = Some(Outcome::StuckInTeleporter);
                break;
            }
            [exit] => {
                // Line restarts inside the exit so no gap is drawn
                flight.base_pos = *exit;
                flight.line_start = *exit;
                flight.snap(*exit + origin.direction * HOOK_START_DISTANCE, current);
            }
            _ => {
                outcome = Some(Outcome::AmbiguousTeleport);
                break;
            }
        }
    }

    let outcome = outcome.unwrap_or_else(|| {
        log::debug!("hook prediction for {:?} ran out of {} ticks", origin.actor, max_ticks);
        if flight.segments.is_empty() {
            let guess = flight.base_pos + flight.direction * tuning.hook_length;
            flight.push_line_to(guess);
            Outcome::Exhausted
        } else {
            // A teleporter chain cut off by the budget draws like a free line
            Outcome::FreeRetract
        }
    });
    log::trace!("hook prediction for {:?}: {:?} after {} ticks", origin.actor, outcome, tick);

    HookPath {
        segments: flight.segments,
        outcome,
        ticks: tick,
    }
}

/// End the line on the struck character's body instead of passing through it
fn player_stop(start: Vec2, end: Vec2, hit: &PlayerHit, shooter: Vec2) -> Vec2 {
    match intersect_line_circle(start, end, hit.hitbox_center, PLAYER_HITBOX_RADIUS) {
        LineCircleHits::Two(a, b) => nearest_to(shooter, a, b),
        LineCircleHits::One(p) => p,
        LineCircleHits::None => hit.pos,
    }
}
