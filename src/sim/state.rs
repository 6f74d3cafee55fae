//! Simulation state and entity types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{FormationOptions, Tuning};
use crate::difficulty::DifficultyParams;
use crate::path::BezierLoop;
use crate::patterns::PatternLibrary;

/// A fixed angular position in the formation ring
///
/// Slots live for exactly one wave and are never reassigned; `occupied`
/// only flips from true to false when the assigned enemy dies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Slot {
    pub index: usize,
    pub angle: f32,
    pub occupied: bool,
}

/// Per-enemy behavior state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnemyState {
    /// Tracking the formation slot target
    Formation,
    /// Scripted dive attack
    Diving {
        vel: Vec2,
        /// Pre-dive formation x, used to re-enter at the top of the screen
        return_x: f32,
        /// Whether the dive steers toward the player's x
        homing: bool,
    },
}

/// An enemy entity; `pos` is the top-left of its bounding box
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    /// Index into the wave's slot set
    pub slot: usize,
    pub pos: Vec2,
    pub size: Vec2,
    pub state: EnemyState,
    /// Blend source recorded at the most recent pattern switch; present
    /// only while the post-switch interpolation window is running.
    pub blend_from: Option<Vec2>,
}

impl Enemy {
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Muzzle point for projectile spawns
    pub fn lower_center(&self) -> Vec2 {
        self.pos + Vec2::new(self.size.x * 0.5, self.size.y)
    }

    /// Point-in-bounding-box hit test
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.pos.x
            && x <= self.pos.x + self.size.x
            && y >= self.pos.y
            && y <= self.pos.y + self.size.y
    }

    pub fn is_diving(&self) -> bool {
        matches!(self.state, EnemyState::Diving { .. })
    }
}

/// An enemy projectile; pruned once `life` reaches zero
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
}

impl Projectile {
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.life -= dt;
    }

    pub fn alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Read-only player capability consulted for dive targeting; absent by
/// default, and absence degrades dives to vertical-only motion
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerRef {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// A second shot waiting on the simulation clock
///
/// Cancelled wholesale when the wave is reset, so a stale roster can never
/// fire it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PendingShot {
    pub fire_at: f64,
    pub pos: Vec2,
}

/// Things that happened during a tick, drained by the controller facade
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwarmEvent {
    WaveSpawned { pattern: usize },
    ShotFired,
    Explosion { center: Vec2 },
    PointsScored { points: u64 },
}

/// Complete controller state
///
/// Owns the roster and projectile list exclusively; external consumers
/// read snapshots through the facade and never mutate.
#[derive(Debug)]
pub struct SwarmState {
    pub virtual_width: f32,
    pub virtual_height: f32,
    pub tuning: Tuning,
    /// Raw difficulty level; applied when the next wave is created
    pub difficulty: u32,
    /// Snapshot derived at the last wave creation
    pub params: DifficultyParams,

    pub patterns: PatternLibrary,
    pub pattern_index: usize,
    pub pattern_timer: f32,
    pub path: BezierLoop,

    /// Elapsed time on the current loop; restarted by pattern switches
    pub time: f32,
    /// Monotonic simulation clock, never reset
    pub clock: f64,
    pub current_rotation: f32,
    pub shoot_timer: f32,

    pub enemies: Vec<Enemy>,
    pub slots: Vec<Slot>,
    pub projectiles: Vec<Projectile>,
    pub pending_shots: Vec<PendingShot>,
    /// Countdown to the next wave once the roster empties
    pub respawn_timer: Option<f32>,
    pub initial_wave_size: usize,

    pub player: Option<PlayerRef>,
    pub events: Vec<SwarmEvent>,
    pub rng: Pcg32,
    next_id: u32,

    /// Lower edge of the vertical band the center is clamped into
    pub vertical_offset: f32,
    /// Upper edge of the vertical band
    pub max_vertical_position: f32,
}

impl SwarmState {
    pub fn new(options: FormationOptions) -> Self {
        let vertical_offset = options.virtual_height * 0.2;
        let max_vertical_position = options.virtual_height * 0.4;
        let path = BezierLoop::new(
            options.virtual_width * 0.5,
            vertical_offset,
            options.virtual_width * 0.25,
        );
        let patterns = PatternLibrary::standard();
        let pattern_index = patterns.index_of(&options.pattern).unwrap_or_else(|| {
            log::warn!(
                "unknown starting pattern {:?}, falling back to {:?}",
                options.pattern,
                patterns.pattern(0).name
            );
            0
        });
        let params =
            DifficultyParams::derive(options.difficulty, options.virtual_height, &options.tuning);

        let mut state = Self {
            virtual_width: options.virtual_width,
            virtual_height: options.virtual_height,
            tuning: options.tuning,
            difficulty: options.difficulty.max(1),
            params,
            patterns,
            pattern_index,
            pattern_timer: 0.0,
            path,
            time: 0.0,
            clock: 0.0,
            current_rotation: 0.0,
            shoot_timer: 0.0,
            enemies: Vec::new(),
            slots: Vec::new(),
            projectiles: Vec::new(),
            pending_shots: Vec::new(),
            respawn_timer: None,
            initial_wave_size: 0,
            player: None,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(options.seed),
            next_id: 1,
            vertical_offset,
            max_vertical_position,
        };
        super::tick::create_wave(&mut state);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
