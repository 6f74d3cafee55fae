//! Balance constants and constructor options
//!
//! Every knob the controller consults is enumerated here with an explicit
//! default, so hosts configure the swarm through typed structs instead of
//! free-form option bags.

use serde::{Deserialize, Serialize};

/// Data-driven balance constants
///
/// `base_*` values describe difficulty level 1; the `*_increase` values are
/// applied per step of cycle difficulty by [`crate::difficulty::DifficultyParams`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // === Formation ring ===
    /// Ring radius at cycle difficulty 1
    pub base_formation_radius: f32,
    /// Radius gained per cycle-difficulty step
    pub radius_increase: f32,
    /// Pulse amplitude factor at cycle difficulty 1
    pub base_pulse_intensity: f32,
    /// Pulse amplitude gained per step
    pub pulse_intensity_increase: f32,
    /// Pulse frequency (Hz) at cycle difficulty 1
    pub base_pulse_speed: f32,
    /// Pulse frequency gained per step
    pub pulse_speed_increase: f32,

    // === Rotation ===
    /// Ring rotation speed (rad/s) at cycle difficulty 1
    pub base_rotation_speed: f32,
    /// Rotation speed gained per step
    pub rotation_speed_increase: f32,
    /// Hard cap on rotation speed
    pub max_rotation_speed: f32,
    /// Extra rotation speed per completed 10-level cycle
    pub rotation_cycle_bonus: f32,

    // === Shooting ===
    /// Seconds between shots at cycle difficulty 1
    pub base_shoot_interval: f32,
    /// Seconds between shots at cycle difficulty 10
    pub min_shoot_interval: f32,
    /// Downward projectile speed
    pub projectile_speed: f32,
    /// Seconds a projectile lives before being pruned
    pub projectile_lifetime: f32,
    /// Master toggle for the attack controller
    pub shooting_enabled: bool,

    // === Diving ===
    /// Per-second dive probability at cycle difficulty 1
    pub base_dive_chance: f32,
    /// Dive probability gained per step
    pub dive_chance_increase: f32,
    /// Initial downward dive velocity at cycle difficulty 1
    pub base_dive_speed: f32,
    /// Dive velocity gained per step
    pub dive_speed_increase: f32,
    /// Hard cap on initial dive velocity
    pub max_dive_speed: f32,
    /// Downward acceleration while diving
    pub dive_acceleration: f32,
    /// Scale on the horizontal velocity of player-seeking dives
    pub dive_curve_intensity: f32,

    // === Wave lifecycle ===
    /// Enemies per wave; the integer part is used at wave creation
    pub alien_count: f32,
    /// Enemy bounding-box side length
    pub enemy_size: f32,
    /// Seconds for one full trip around the travel path
    pub loop_duration: f32,
    /// Seconds between timed pattern switches
    pub pattern_duration: f32,
    /// Seconds between the roster emptying and the next wave
    pub respawn_delay: f32,
    /// Base point award per kill before the difficulty multiplier
    pub points_base: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_formation_radius: 120.0,
            radius_increase: 15.0,
            base_pulse_intensity: 0.75,
            pulse_intensity_increase: 0.75,
            base_pulse_speed: 0.5,
            pulse_speed_increase: 0.1,

            base_rotation_speed: 1.0,
            rotation_speed_increase: 0.4,
            max_rotation_speed: 6.0,
            rotation_cycle_bonus: 0.4,

            base_shoot_interval: 0.5,
            min_shoot_interval: 0.1,
            projectile_speed: 550.0,
            projectile_lifetime: 2.0,
            shooting_enabled: true,

            base_dive_chance: 0.005,
            dive_chance_increase: 0.002,
            base_dive_speed: 600.0,
            dive_speed_increase: 100.0,
            max_dive_speed: 1200.0,
            dive_acceleration: 1000.0,
            dive_curve_intensity: 0.8,

            alien_count: 12.0,
            enemy_size: 100.0,
            loop_duration: 10.0,
            pattern_duration: 15.0,
            respawn_delay: 2.0,
            points_base: 100,
        }
    }
}

/// Constructor inputs for [`crate::SwarmController`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormationOptions {
    /// Virtual playfield width in world units
    pub virtual_width: f32,
    /// Virtual playfield height in world units
    pub virtual_height: f32,
    /// Starting difficulty level (>= 1, unbounded)
    pub difficulty: u32,
    /// Starting pattern name; unknown names fall back to the first catalog entry
    pub pattern: String,
    /// RNG seed; identical seeds reproduce identical runs
    pub seed: u64,
    /// Balance constants
    pub tuning: Tuning,
}

impl Default for FormationOptions {
    fn default() -> Self {
        Self {
            virtual_width: 1080.0,
            virtual_height: 1080.0,
            difficulty: 1,
            pattern: "infinity".to_string(),
            seed: 0,
            tuning: Tuning::default(),
        }
    }
}
