//! Tile-grid collision map
//!
//! A square-tile map with a game layer (solid / hook-blocking tiles) and a
//! teleporter layer. Segment queries sample the line at sub-unit steps the same
//! way the authoritative physics does, so a predicted hook stops on the same
//! tile the real one would.

use std::collections::BTreeMap;

use glam::Vec2;

use super::oracle::{CollisionOracle, TileHit, TileKind};
use crate::consts::TILE_SIZE;

/// Contents of one map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Air,
    Solid,
    NoHook,
    /// Hook teleporter entrance with its teleporter number
    TeleHook(u32),
}

impl Tile {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | ' ' => Some(Tile::Air),
            '#' => Some(Tile::Solid),
            'x' => Some(Tile::NoHook),
            _ => c.to_digit(10).filter(|&n| n > 0).map(Tile::TeleHook),
        }
    }
}

/// Collision map for hook prediction
#[derive(Debug, Clone)]
pub struct TileMap {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    /// Teleporter number -> exit points
    tele_outs: BTreeMap<u32, Vec<Vec2>>,
}

impl TileMap {
    /// Create an empty (all air) map
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Air; width * height],
            tele_outs: BTreeMap::new(),
        }
    }

    /// Build a map from ASCII rows
    ///
    /// `.` air, `#` solid, `x` hook-blocking, `1`-`9` hook teleporter with
    /// that number. Returns `None` for an empty map, ragged rows or unknown
    /// characters.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.chars().count();
        if width == 0 {
            return None;
        }

        let mut tiles = Vec::with_capacity(width * height);
        for row in rows {
            if row.chars().count() != width {
                return None;
            }
            for c in row.chars() {
                tiles.push(Tile::from_char(c)?);
            }
        }

        Some(Self {
            width,
            height,
            tiles,
            tele_outs: BTreeMap::new(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Set a tile; out-of-range coordinates are ignored
    pub fn set_tile(&mut self, x: usize, y: usize, tile: Tile) {
        if x < self.width && y < self.height {
            self.tiles[y * self.width + x] = tile;
        }
    }

    /// Register an exit point for teleporter `id`
    pub fn add_tele_out(&mut self, id: u32, pos: Vec2) {
        self.tele_outs.entry(id).or_default().push(pos);
    }

    /// Tile under a world position (positions outside the map read the border)
    pub fn tile_at(&self, pos: Vec2) -> Tile {
        if self.tiles.is_empty() {
            return Tile::Air;
        }
        let ix = pos.x.round() as i64;
        let iy = pos.y.round() as i64;
        let tile_size = TILE_SIZE as i64;
        let tx = ix.div_euclid(tile_size).clamp(0, self.width as i64 - 1) as usize;
        let ty = iy.div_euclid(tile_size).clamp(0, self.height as i64 - 1) as usize;
        self.tiles[ty * self.width + tx]
    }
}

impl CollisionOracle for TileMap {
    fn first_blocking_tile(&self, p0: Vec2, p1: Vec2) -> Option<TileHit> {
        let steps = (p0.distance(p1) + 1.0) as u32;
        let steps = steps.max(1);

        for i in 0..=steps {
            let pos = p0.lerp(p1, i as f32 / steps as f32);
            let kind = match self.tile_at(pos) {
                Tile::Air => continue,
                Tile::Solid => TileKind::Solid,
                Tile::NoHook => TileKind::NoHook,
                Tile::TeleHook(id) => TileKind::TeleHook(id),
            };
            return Some(TileHit { pos, kind });
        }

        None
    }

    fn teleporter_destinations(&self, id: u32) -> &[Vec2] {
        self.tele_outs.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }
}
