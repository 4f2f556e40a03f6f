//! Hookline demo entry point
//!
//! Builds a small test map with a few characters, fires hooks at seeded random
//! aim angles and logs what each predicted line would look like.
//!
//! Usage: `hookline [settings.json] [seed]`

use std::collections::BTreeMap;
use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use hookline::renderer::{RecordingSink, Vertex, primitive_vertices};
use hookline::sim::{ActorId, HookTuning, Roster, TileMap};
use hookline::{ActorFrame, HookCollLine, HookCollSettings, ShowMode};

const DEMO_MAP: &[&str] = &[
    "################################",
    "#..............................#",
    "#.......xxxx...................#",
    "#..............................#",
    "#...........1..........#.......#",
    "#......................#.......#",
    "#....................2.#.......#",
    "#..............................#",
    "#..............................#",
    "#.........######...............#",
    "#..............................#",
    "################################",
];

const SHOTS: u32 = 32;

fn build_map() -> Option<TileMap> {
    let mut map = TileMap::from_rows(DEMO_MAP)?;
    // Teleporter 1 has one exit, teleporter 2 has two
    map.add_tele_out(1, Vec2::new(27.0 * 32.0 + 16.0, 2.0 * 32.0 + 16.0));
    map.add_tele_out(2, Vec2::new(3.0 * 32.0 + 16.0, 8.0 * 32.0 + 16.0));
    map.add_tele_out(2, Vec2::new(28.0 * 32.0 + 16.0, 9.0 * 32.0 + 16.0));
    Some(map)
}

fn main() {
    env_logger::init();
    log::info!("Hookline demo starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => HookCollSettings::load(path),
        None => HookCollSettings {
            show_own: ShowMode::Always,
            ..Default::default()
        },
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345_u64);

    let Some(map) = build_map() else {
        log::error!("Demo map is malformed");
        return;
    };

    let shooter = ActorId(0);
    let position = Vec2::new(16.0 * 32.0, 5.0 * 32.0 + 16.0);
    let mut roster = Roster::new();
    roster.push(shooter, position);
    roster.push(ActorId(1), Vec2::new(9.0 * 32.0, 7.0 * 32.0));
    roster.push(ActorId(2), Vec2::new(20.0 * 32.0, 2.0 * 32.0));
    roster.push_ghost(ActorId(3), Vec2::new(12.0 * 32.0, 8.0 * 32.0));

    let line = HookCollLine::new(settings);
    let tuning = HookTuning::default();
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut sink = RecordingSink::default();
    let mut tally: BTreeMap<String, u32> = BTreeMap::new();
    let mut vertex_count = 0;

    log::info!("Firing {} hooks with seed {}", SHOTS, seed);

    for shot in 0..SHOTS {
        let aim_angle = rng.random_range(0.0..TAU);
        let frame = ActorFrame {
            local: true,
            aiming: true,
            ..ActorFrame::new(shooter, position, aim_angle, tuning)
        };

        let Some(result) = line.render(&frame, &map, &roster, &mut sink) else {
            log::info!("shot {:2}: not drawn", shot);
            continue;
        };

        log::info!(
            "shot {:2}: aim {:6.1}° -> {:?} after {} ticks, {} primitives ({:.0} units) ending at {:?}, color {:?}",
            shot,
            aim_angle.to_degrees(),
            result.path.outcome,
            result.path.ticks,
            result.primitives.len(),
            result.path.drawn_length(),
            result.path.end_point(),
            result.color,
        );
        vertex_count += primitive_vertices(&result.primitives, result.color, result.alpha).len();
        *tally.entry(format!("{:?}", result.path.outcome)).or_default() += 1;
    }

    for (outcome, count) in &tally {
        println!("{outcome:>24}: {count}");
    }
    println!(
        "{} draw calls recorded, {} vertices ({} bytes)",
        sink.calls.len(),
        vertex_count,
        vertex_count * Vertex::stride()
    );
}
