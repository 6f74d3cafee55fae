//! Difficulty-derived parameter model
//!
//! A pure mapping from the unbounded difficulty level to the parameter
//! snapshot a wave is created with. Levels wrap in ten-step cycles, so the
//! curve keeps escalating forever without any single parameter running away.

use serde::{Deserialize, Serialize};

use crate::config::Tuning;

/// Width of one difficulty cycle
pub const CYCLE_LEN: u32 = 10;

/// Split a level (>= 1) into completed cycles and the 1..=10 position
/// inside the current cycle.
#[inline]
pub fn cycle(level: u32) -> (u32, u32) {
    let level = level.max(1);
    ((level - 1) / CYCLE_LEN, ((level - 1) % CYCLE_LEN) + 1)
}

/// Derived parameter snapshot for one wave
///
/// Recomputed wholesale every time a wave is (re)created; never mutated
/// piecemeal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyParams {
    /// The raw level this snapshot was derived from
    pub level: u32,
    /// Ring radius, hard-clamped to a quarter of the virtual height
    pub formation_radius: f32,
    /// Pulse amplitude factor
    pub pulse_intensity: f32,
    /// Pulse frequency (Hz)
    pub pulse_speed: f32,
    /// Seconds between shots
    pub shoot_interval: f32,
    /// Formation drift speed, capped at 2.0
    pub speed: f32,
    /// Ring rotation speed (rad/s), capped
    pub rotation_speed: f32,
    /// +1 on odd levels, -1 on even levels
    pub rotation_direction: f32,
    /// Per-second dive probability
    pub dive_chance: f32,
    /// Initial downward dive velocity, capped
    pub dive_speed: f32,
}

impl DifficultyParams {
    /// Derive the full snapshot for `level`.
    pub fn derive(level: u32, virtual_height: f32, t: &Tuning) -> Self {
        let (cycle_count, cycle_difficulty) = cycle(level);
        let step = (cycle_difficulty - 1) as f32;
        let cycles = cycle_count as f32;

        let formation_radius =
            (virtual_height * 0.25).min(t.base_formation_radius + step * t.radius_increase);
        let pulse_intensity = t.base_pulse_intensity + step * t.pulse_intensity_increase;
        let pulse_speed = t.base_pulse_speed + step * t.pulse_speed_increase;

        // Shoot cadence tightens linearly across the cycle
        let progress = (step / 9.0).min(1.0);
        let shoot_interval =
            t.base_shoot_interval - progress * (t.base_shoot_interval - t.min_shoot_interval);

        let speed = (0.3 + cycles * 0.1 + cycle_difficulty as f32 * 0.05).min(2.0);

        let rotation_speed = t.max_rotation_speed.min(
            t.base_rotation_speed + step * t.rotation_speed_increase + cycles * t.rotation_cycle_bonus,
        );
        let rotation_direction = if level % 2 == 0 { -1.0 } else { 1.0 };

        let dive_chance = t.base_dive_chance + step * t.dive_chance_increase;
        let dive_speed = t
            .max_dive_speed
            .min(t.base_dive_speed + (step + cycles) * t.dive_speed_increase);

        log::info!(
            "difficulty level {} (cycle {}, step {})",
            level,
            cycle_count + 1,
            cycle_difficulty
        );

        Self {
            level,
            formation_radius,
            pulse_intensity,
            pulse_speed,
            shoot_interval,
            speed,
            rotation_speed,
            rotation_direction,
            dive_chance,
            dive_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f32 = 1080.0;

    fn derive(level: u32) -> DifficultyParams {
        DifficultyParams::derive(level, VH, &Tuning::default())
    }

    #[test]
    fn test_cycle_wraps_for_all_levels() {
        for level in 1..=200u32 {
            let (count, step) = cycle(level);
            assert_eq!(count, (level - 1) / 10, "level {level}");
            assert!((1..=10).contains(&step), "level {level} step {step}");
        }
    }

    #[test]
    fn test_level_one_baseline() {
        let p = derive(1);
        assert_eq!(cycle(1), (0, 1));
        assert_eq!(p.formation_radius, 120.0);
        assert_eq!(p.pulse_intensity, 0.75);
        assert_eq!(p.shoot_interval, 0.5);
        assert!((p.speed - 0.35).abs() < 1e-6);
        assert_eq!(p.rotation_speed, 1.0);
        assert_eq!(p.rotation_direction, 1.0);
        assert_eq!(p.dive_chance, 0.005);
        assert_eq!(p.dive_speed, 600.0);
    }

    #[test]
    fn test_level_eleven_starts_second_cycle() {
        let p = derive(11);
        assert_eq!(cycle(11), (1, 1));
        // Base rotation plus one cycle bonus, direction positive (11 is odd)
        assert!((p.rotation_speed - 1.4).abs() < 1e-6);
        assert_eq!(p.rotation_direction, 1.0);
        // Radius resets with the cycle, dive speed keeps climbing
        assert_eq!(p.formation_radius, 120.0);
        assert_eq!(p.dive_speed, 700.0);
    }

    #[test]
    fn test_rotation_direction_follows_parity() {
        for level in 1..=40u32 {
            let expect = if level % 2 == 0 { -1.0 } else { 1.0 };
            assert_eq!(derive(level).rotation_direction, expect, "level {level}");
        }
    }

    #[test]
    fn test_radius_grows_within_cycle_and_clamps() {
        let mut prev = 0.0;
        for level in 1..=10u32 {
            let r = derive(level).formation_radius;
            assert!(r >= prev);
            assert!(r <= VH * 0.25);
            prev = r;
        }
        // Small playfield forces the clamp at every level
        let t = Tuning::default();
        for level in 1..=20u32 {
            let p = DifficultyParams::derive(level, 400.0, &t);
            assert_eq!(p.formation_radius, 100.0);
        }
    }

    #[test]
    fn test_shoot_interval_tightens_monotonically() {
        let mut prev = f32::MAX;
        for level in 1..=10u32 {
            let i = derive(level).shoot_interval;
            assert!(i < prev, "level {level}");
            prev = i;
        }
        assert!((derive(1).shoot_interval - 0.5).abs() < 1e-6);
        assert!((derive(10).shoot_interval - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_speed_and_rotation_caps() {
        for level in 1..=300u32 {
            let p = derive(level);
            assert!(p.speed <= 2.0);
            assert!(p.rotation_speed <= 6.0);
            assert!(p.dive_speed <= 1200.0);
        }
        assert_eq!(derive(250).speed, 2.0);
        assert_eq!(derive(250).rotation_speed, 6.0);
    }
}
