//! Projectile pacing and multi-shot escalation
//!
//! One shot per `shoot_interval` from a random surviving enemy. Above
//! difficulty 5 a coin flip schedules a second, laterally offset shot a
//! fraction of a second later on the simulation clock; pausing the
//! simulation (not calling tick) or resetting the wave suppresses it.

use glam::Vec2;
use rand::Rng;

use super::state::{PendingShot, Projectile, SwarmEvent, SwarmState};
use crate::consts::{SECOND_SHOT_DELAY, SECOND_SHOT_OFFSET};

/// Advance shoot pacing, fire due scheduled shots, integrate and prune
/// projectiles.
pub fn tick_attack(state: &mut SwarmState, dt: f32) {
    if state.tuning.shooting_enabled && !state.enemies.is_empty() {
        state.shoot_timer += dt;
        if state.shoot_timer >= state.params.shoot_interval {
            state.shoot_timer = 0.0;
            fire(state);
        }
    }

    // Scheduled second shots come due on the simulation clock
    let clock = state.clock;
    let mut due: Vec<Vec2> = Vec::new();
    state.pending_shots.retain(|shot| {
        if shot.fire_at <= clock {
            due.push(shot.pos);
            false
        } else {
            true
        }
    });
    for pos in due {
        spawn_projectile(state, pos);
        state.events.push(SwarmEvent::ShotFired);
    }

    for projectile in state.projectiles.iter_mut() {
        projectile.update(dt);
    }
    state.projectiles.retain(|p| p.alive());
}

fn fire(state: &mut SwarmState) {
    if state.enemies.is_empty() {
        return;
    }
    let shooter = state.rng.random_range(0..state.enemies.len());
    let muzzle = state.enemies[shooter].lower_center();
    spawn_projectile(state, muzzle);
    state.events.push(SwarmEvent::ShotFired);

    // High difficulty: coin-flip a delayed, offset second shot
    if state.difficulty > 5 && state.rng.random_bool(0.5) {
        state.pending_shots.push(PendingShot {
            fire_at: state.clock + SECOND_SHOT_DELAY,
            pos: muzzle + Vec2::new(SECOND_SHOT_OFFSET, 0.0),
        });
    }
}

fn spawn_projectile(state: &mut SwarmState, pos: Vec2) {
    state.projectiles.push(Projectile {
        pos,
        vel: Vec2::new(0.0, state.tuning.projectile_speed),
        life: state.tuning.projectile_lifetime,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormationOptions;

    fn state_with_difficulty(difficulty: u32) -> SwarmState {
        let options = FormationOptions {
            difficulty,
            seed: 42,
            ..Default::default()
        };
        SwarmState::new(options)
    }

    #[test]
    fn test_no_shot_from_empty_roster() {
        let mut state = state_with_difficulty(1);
        state.enemies.clear();
        for _ in 0..100 {
            state.clock += 0.1;
            tick_attack(&mut state, 0.1);
        }
        assert!(state.projectiles.is_empty());
        assert!(!state.events.iter().any(|e| *e == SwarmEvent::ShotFired));
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut state = state_with_difficulty(1);
        // Level 1 interval is 0.5s; 0.6s elapsed fires exactly once
        tick_attack(&mut state, 0.3);
        assert!(state.projectiles.is_empty());
        tick_attack(&mut state, 0.3);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.shoot_timer, 0.0);
    }

    #[test]
    fn test_projectiles_expire() {
        let mut state = state_with_difficulty(1);
        tick_attack(&mut state, 0.5);
        assert_eq!(state.projectiles.len(), 1);
        let lifetime = state.tuning.projectile_lifetime;
        state.tuning.shooting_enabled = false;
        tick_attack(&mut state, lifetime + 0.1);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_low_difficulty_never_schedules_second_shot() {
        let mut state = state_with_difficulty(5);
        for _ in 0..200 {
            state.clock += 0.5;
            tick_attack(&mut state, 0.5);
        }
        assert!(state.pending_shots.is_empty());
    }

    #[test]
    fn test_second_shot_fires_after_delay() {
        let mut state = state_with_difficulty(6);
        // Drive firing until the 50% roll schedules a second shot
        let mut scheduled = false;
        for _ in 0..200 {
            let interval = state.params.shoot_interval;
            state.clock += interval as f64;
            tick_attack(&mut state, interval);
            if !state.pending_shots.is_empty() {
                scheduled = true;
                break;
            }
        }
        assert!(scheduled, "seeded run should schedule a double shot");

        let pending = state.pending_shots[0];
        let before = state.projectiles.len();
        state.tuning.shooting_enabled = false;
        state.clock += SECOND_SHOT_DELAY + 0.01;
        tick_attack(&mut state, 0.02);
        assert!(state.pending_shots.is_empty());
        assert_eq!(state.projectiles.len(), before + 1);
        let second = state.projectiles.last().unwrap();
        // Offset survives, modulo the integration step
        assert!((second.pos.x - pending.pos.x).abs() < 1e-3);
    }

    #[test]
    fn test_wave_reset_cancels_pending_shots() {
        let mut state = state_with_difficulty(6);
        state.pending_shots.push(PendingShot {
            fire_at: state.clock + SECOND_SHOT_DELAY,
            pos: Vec2::new(100.0, 100.0),
        });
        super::super::tick::create_wave(&mut state);
        assert!(state.pending_shots.is_empty());
    }
}
