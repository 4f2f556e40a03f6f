//! Per-frame hook collision line for one character
//!
//! Decides whether a character's line is shown, runs the prediction, picks
//! color and opacity and hands the reduced primitives to a sink. Called once
//! per visible character per frame, after the frame's predicted state is
//! final.

use glam::Vec2;

use crate::consts::HOOK_START_DISTANCE;
use crate::renderer::hook_line::{DrawPrimitives, line_width, outcome_color, reduce, submit};
use crate::renderer::sink::DrawSink;
use crate::renderer::vertex::{Rgba, invert_color};
use crate::settings::{HookCollSettings, ShowMode};
use crate::sim::{
    ActorId, CollisionOracle, HookPath, HookTuning, LineSegment, PlayerOracle, SimulationOrigin, simulate_hook,
};

/// What the renderer knows about one character this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorFrame {
    pub actor: ActorId,
    /// Interpolated render position
    pub position: Vec2,
    /// Aim angle in radians
    pub aim_angle: f32,
    pub tuning: HookTuning,
    /// The character is controlled by this client
    pub local: bool,
    /// The character is holding the show-hook-line input / reports aiming
    pub aiming: bool,
    /// The character is on a different team than the local one
    pub other_team: bool,
    /// Distance of the cursor from the character (local only)
    pub cursor_distance: f32,
}

impl ActorFrame {
    pub fn new(actor: ActorId, position: Vec2, aim_angle: f32, tuning: HookTuning) -> Self {
        Self {
            actor,
            position,
            aim_angle,
            tuning,
            local: false,
            aiming: false,
            other_team: false,
            cursor_distance: 0.0,
        }
    }
}

/// Why a line is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    /// Shown permanently by the always setting
    pub always: bool,
    /// Shown because the character is aiming
    pub aiming: bool,
}

impl Visibility {
    /// Both reasons at once swap the colors so the held input stays noticeable
    pub fn inverts_color(&self) -> bool {
        self.always && self.aiming
    }
}

/// Everything produced for one character's line
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    pub path: HookPath,
    pub color: Rgba,
    pub alpha: f32,
    pub primitives: DrawPrimitives,
}

/// Hook collision line renderer
#[derive(Debug, Clone)]
pub struct HookCollLine {
    pub settings: HookCollSettings,
    /// Server permits the always-on mode
    pub server_allows: bool,
    /// Current camera zoom
    pub zoom: f32,
}

impl HookCollLine {
    pub fn new(settings: HookCollSettings) -> Self {
        Self {
            settings,
            server_allows: true,
            zoom: 1.0,
        }
    }

    /// Whether the character's line is drawn at all
    pub fn visibility(&self, frame: &ActorFrame) -> Option<Visibility> {
        let mode = self.settings.show_mode(frame.local);
        let visibility = Visibility {
            always: self.server_allows && mode == ShowMode::Always,
            aiming: frame.aiming && mode != ShowMode::Off,
        };
        (visibility.always || visibility.aiming).then_some(visibility)
    }

    /// Tuning after applying the cursor-length option
    pub fn effective_tuning(&self, frame: &ActorFrame) -> HookTuning {
        let mut tuning = frame.tuning;
        if frame.local && self.settings.hook_length_follows_cursor {
            tuning.hook_length = frame.cursor_distance;
        }
        tuning
    }

    /// Predict and reduce one character's line without drawing it
    ///
    /// Returns `None` when nothing should be drawn: hidden, unusable tuning,
    /// or fully transparent.
    pub fn prepare<C, P>(&self, frame: &ActorFrame, collision: &C, players: &P) -> Option<FrameResult>
    where
        C: CollisionOracle + ?Sized,
        P: PlayerOracle + ?Sized,
    {
        let visibility = self.visibility(frame)?;

        let tuning = self.effective_tuning(frame);
        if !tuning.can_draw() {
            return None;
        }

        let alpha = self.settings.effective_alpha(frame.other_team);
        if alpha <= 0.0 {
            return None;
        }

        let direction = crate::direction(frame.aim_angle);
        let origin = SimulationOrigin::new(frame.position, direction, frame.actor);
        let path = simulate_hook(&origin, &tuning, collision, players);

        let mut color = outcome_color(path.outcome, &self.settings.colors);
        if visibility.inverts_color() {
            color = invert_color(color);
        }

        // Bridge from the body to where the hook spawns
        let mut segments = path.segments.clone();
        segments.push(LineSegment::new(
            frame.position,
            frame.position + direction * HOOK_START_DISTANCE,
        ));

        let thickness = line_width(self.settings.size(frame.local));
        let primitives = reduce(&segments, direction, thickness, self.zoom);

        Some(FrameResult {
            path,
            color,
            alpha,
            primitives,
        })
    }

    /// Predict one character's line and draw it into `sink`
    pub fn render<C, P, S>(&self, frame: &ActorFrame, collision: &C, players: &P, sink: &mut S) -> Option<FrameResult>
    where
        C: CollisionOracle + ?Sized,
        P: PlayerOracle + ?Sized,
        S: DrawSink + ?Sized,
    {
        let result = self.prepare(frame, collision, players)?;
        submit(&result.primitives, result.color, result.alpha, sink);
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::sink::{DrawCall, RecordingSink};
    use crate::settings::OutcomeColors;
    use crate::sim::{NoCollision, NoPlayers, Outcome, Roster};

    fn tuning() -> HookTuning {
        HookTuning {
            hook_length: 800.0,
            hook_fire_speed: 160.0,
            ticks_per_second: 50,
        }
    }

    fn aiming_local() -> ActorFrame {
        ActorFrame {
            local: true,
            aiming: true,
            ..ActorFrame::new(ActorId(0), Vec2::ZERO, 0.0, tuning())
        }
    }

    #[test]
    fn test_hidden_when_not_aiming() {
        let line = HookCollLine::new(HookCollSettings::default());
        let frame = ActorFrame::new(ActorId(0), Vec2::ZERO, 0.0, tuning());
        assert!(line.visibility(&frame).is_none());

        let mut sink = RecordingSink::default();
        assert!(line.render(&frame, &NoCollision, &NoPlayers, &mut sink).is_none());
        assert!(sink.calls.is_empty());
    }

    #[test]
    fn test_always_mode_needs_server_permission() {
        let mut line = HookCollLine::new(HookCollSettings {
            show_other: ShowMode::Always,
            ..Default::default()
        });
        let frame = ActorFrame::new(ActorId(1), Vec2::ZERO, 0.0, tuning());
        assert!(line.visibility(&frame).is_some());

        line.server_allows = false;
        assert!(line.visibility(&frame).is_none());
    }

    #[test]
    fn test_off_mode_ignores_aiming() {
        let line = HookCollLine::new(HookCollSettings {
            show_own: ShowMode::Off,
            ..Default::default()
        });
        assert!(line.visibility(&aiming_local()).is_none());
    }

    #[test]
    fn test_free_line_draws_with_gap_segment() {
        let line = HookCollLine::new(HookCollSettings::default());
        let mut sink = RecordingSink::default();
        let result = line
            .render(&aiming_local(), &NoCollision, &NoPlayers, &mut sink)
            .expect("visible line");

        assert_eq!(result.path.outcome, Outcome::FreeRetract);
        assert_eq!(result.color, OutcomeColors::default().no_coll);
        assert_eq!(result.alpha, 1.0);

        let [DrawCall::Lines { segments, .. }] = sink.calls.as_slice() else {
            panic!("expected one hairline call, got {:?}", sink.calls);
        };
        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[1],
            LineSegment::new(Vec2::ZERO, Vec2::new(HOOK_START_DISTANCE, 0.0))
        );
    }

    #[test]
    fn test_always_and_aiming_inverts_color() {
        let line = HookCollLine::new(HookCollSettings {
            show_own: ShowMode::Always,
            ..Default::default()
        });
        let result = line
            .prepare(&aiming_local(), &NoCollision, &NoPlayers)
            .expect("visible line");
        assert_eq!(result.color, invert_color(OutcomeColors::default().no_coll));
    }

    #[test]
    fn test_unusable_tuning_draws_nothing() {
        let line = HookCollLine::new(HookCollSettings::default());
        let frame = ActorFrame {
            tuning: HookTuning {
                hook_fire_speed: 0.0,
                ..tuning()
            },
            ..aiming_local()
        };
        assert!(line.prepare(&frame, &NoCollision, &NoPlayers).is_none());
    }

    #[test]
    fn test_cursor_distance_replaces_hook_length() {
        let line = HookCollLine::new(HookCollSettings {
            hook_length_follows_cursor: true,
            ..Default::default()
        });
        let frame = ActorFrame {
            cursor_distance: 300.0,
            ..aiming_local()
        };
        assert_eq!(line.effective_tuning(&frame).hook_length, 300.0);

        let result = line.prepare(&frame, &NoCollision, &NoPlayers).expect("visible line");
        assert_eq!(result.path.end_point(), Some(Vec2::new(202.0, 0.0)));

        // Too close to the character to draw anything
        let close = ActorFrame {
            cursor_distance: 10.0,
            ..frame
        };
        assert!(line.prepare(&close, &NoCollision, &NoPlayers).is_none());
    }

    #[test]
    fn test_transparent_line_is_skipped() {
        let line = HookCollLine::new(HookCollSettings {
            other_team_alpha: 0,
            ..Default::default()
        });
        let frame = ActorFrame {
            other_team: true,
            ..aiming_local()
        };
        assert!(line.prepare(&frame, &NoCollision, &NoPlayers).is_none());
    }

    #[test]
    fn test_ribbon_for_player_hit() {
        let mut line = HookCollLine::new(HookCollSettings {
            size_own: 3,
            ..Default::default()
        });
        line.zoom = 2.0;
        let mut roster = Roster::new();
        roster.push(ActorId(7), Vec2::new(300.0, 0.0));

        let mut sink = RecordingSink::default();
        let result = line
            .render(&aiming_local(), &NoCollision, &roster, &mut sink)
            .expect("visible line");

        assert_eq!(result.path.outcome, Outcome::HitPlayer(ActorId(7)));
        assert_eq!(result.color, OutcomeColors::default().tee_coll);
        let [DrawCall::Ribbon { quads, .. }] = sink.calls.as_slice() else {
            panic!("expected one ribbon call, got {:?}", sink.calls);
        };
        assert_eq!(quads.len(), 2);
        // Half-width 1.0 at size 3, doubled by zoom
        assert!((quads[0].corners[0].y - 2.0).abs() < 1e-5);
    }
}
