//! Per-enemy dive state machine
//!
//! Enemies toggle between formation tracking and a scripted dive for their
//! whole lifetime; there is no terminal state. Transitions are driven by a
//! seeded roll plus a horizontal spacing guard that keeps simultaneous
//! dives from clustering.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, EnemyState, PlayerRef};
use crate::consts::{BLEND_WINDOW, DIVE_SPACING, OFFSCREEN_MARGIN, PLAYER_LEAD};

/// True when a dive may begin at `target_x` given everyone already diving
pub fn spacing_clear(enemies: &[Enemy], target_x: f32) -> bool {
    !enemies
        .iter()
        .any(|e| e.is_diving() && (e.pos.x - target_x).abs() < DIVE_SPACING)
}

/// Roll the per-tick dive chance. The chance-times-delta product is clamped
/// so low frame rates cannot push the approximation past certainty.
pub fn dive_roll<R: Rng>(rng: &mut R, dive_chance: f32, dt: f32) -> bool {
    rng.random::<f32>() < (dive_chance * dt).min(1.0)
}

/// Build the dive state entered from the given slot target.
///
/// With a player reference the horizontal velocity aims at a predicted
/// player position (current x led by half the player's horizontal
/// velocity); without one the dive is vertical-only.
pub fn start_dive(
    target: Vec2,
    dive_speed: f32,
    curve_intensity: f32,
    player: Option<&PlayerRef>,
) -> EnemyState {
    let mut vel = Vec2::new(0.0, dive_speed);
    let mut homing = false;
    if let Some(p) = player {
        let predicted = Vec2::new(p.pos.x + p.vel.x * PLAYER_LEAD, p.pos.y);
        let to_player = predicted - target;
        let angle = to_player.y.atan2(to_player.x);
        vel.x = angle.cos() * dive_speed * curve_intensity;
        homing = true;
    }
    EnemyState::Diving {
        vel,
        return_x: target.x,
        homing,
    }
}

/// One tick of dive kinematics. Returns true when the enemy left the play
/// bounds and was snapped back to formation at the top of the screen.
pub fn tick_dive(
    enemy: &mut Enemy,
    player: Option<&PlayerRef>,
    dive_acceleration: f32,
    dt: f32,
    virtual_width: f32,
    virtual_height: f32,
) -> bool {
    let EnemyState::Diving {
        mut vel,
        return_x,
        homing,
    } = enemy.state
    else {
        return false;
    };

    vel.y += dive_acceleration * dt;
    enemy.pos.y += vel.y * dt;

    if homing {
        if let Some(p) = player {
            // Keep steering toward the player's current x
            let dx = p.pos.x - enemy.pos.x;
            vel.x += dx.signum() * dive_acceleration * dt * 0.5;
        }
        enemy.pos.x += vel.x * dt;
    }

    let out_of_bounds = enemy.pos.y > virtual_height + OFFSCREEN_MARGIN
        || enemy.pos.x < -OFFSCREEN_MARGIN
        || enemy.pos.x > virtual_width + OFFSCREEN_MARGIN;

    if out_of_bounds {
        enemy.pos = Vec2::new(return_x, -OFFSCREEN_MARGIN);
        enemy.state = EnemyState::Formation;
        enemy.blend_from = None;
        true
    } else {
        enemy.state = EnemyState::Diving {
            vel,
            return_x,
            homing,
        };
        false
    }
}

/// Formation tracking with the optional post-pattern-switch blend.
///
/// `time` is the loop-elapsed time, which a pattern switch restarts at
/// zero; the blend source is cleared permanently once the window elapses.
pub fn track_formation(enemy: &mut Enemy, target: Vec2, time: f32) {
    match enemy.blend_from {
        Some(from) => {
            let t = (time / BLEND_WINDOW).min(1.0);
            enemy.pos = from.lerp(target, t);
            if t >= 1.0 {
                enemy.blend_from = None;
            }
        }
        None => enemy.pos = target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn enemy_at(x: f32, y: f32, state: EnemyState) -> Enemy {
        Enemy {
            id: 1,
            slot: 0,
            pos: Vec2::new(x, y),
            size: Vec2::splat(100.0),
            state,
            blend_from: None,
        }
    }

    #[test]
    fn test_spacing_guard_blocks_nearby_dives() {
        let diving = enemy_at(
            500.0,
            600.0,
            EnemyState::Diving {
                vel: Vec2::new(0.0, 600.0),
                return_x: 500.0,
                homing: false,
            },
        );
        let roster = vec![diving];
        assert!(!spacing_clear(&roster, 560.0));
        assert!(spacing_clear(&roster, 650.0));
    }

    #[test]
    fn test_dive_roll_clamps_oversized_product() {
        // chance * dt far above 1 must always trigger, never misbehave
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..100 {
            assert!(dive_roll(&mut rng, 50.0, 1.0));
        }
    }

    #[test]
    fn test_start_dive_without_player_is_vertical() {
        let state = start_dive(Vec2::new(400.0, 300.0), 600.0, 0.8, None);
        let EnemyState::Diving { vel, return_x, homing } = state else {
            panic!("expected diving state");
        };
        assert_eq!(vel.x, 0.0);
        assert_eq!(vel.y, 600.0);
        assert_eq!(return_x, 400.0);
        assert!(!homing);
    }

    #[test]
    fn test_start_dive_aims_toward_player() {
        let player = PlayerRef {
            pos: Vec2::new(900.0, 1000.0),
            vel: Vec2::new(100.0, 0.0),
        };
        let state = start_dive(Vec2::new(400.0, 300.0), 600.0, 0.8, Some(&player));
        let EnemyState::Diving { vel, homing, .. } = state else {
            panic!("expected diving state");
        };
        assert!(homing);
        assert!(vel.x > 0.0, "player is to the right");
        assert!(vel.x.abs() <= 600.0 * 0.8 + 1e-3);
    }

    #[test]
    fn test_dive_returns_at_bottom_edge() {
        let mut enemy = enemy_at(
            400.0,
            1000.0,
            EnemyState::Diving {
                vel: Vec2::new(0.0, 800.0),
                return_x: 350.0,
                homing: false,
            },
        );
        let mut returned = false;
        for _ in 0..100 {
            if tick_dive(&mut enemy, None, 1000.0, 0.016, 1080.0, 1080.0) {
                returned = true;
                break;
            }
        }
        assert!(returned);
        assert_eq!(enemy.state, EnemyState::Formation);
        assert_eq!(enemy.pos.x, 350.0);
        assert_eq!(enemy.pos.y, -50.0);
    }

    #[test]
    fn test_blend_interpolates_then_clears() {
        let mut enemy = enemy_at(0.0, 0.0, EnemyState::Formation);
        enemy.blend_from = Some(Vec2::new(0.0, 0.0));
        let target = Vec2::new(100.0, 200.0);

        track_formation(&mut enemy, target, 0.25);
        assert!((enemy.pos - Vec2::new(50.0, 100.0)).length() < 1e-4);
        assert!(enemy.blend_from.is_some());

        track_formation(&mut enemy, target, 0.5);
        assert_eq!(enemy.pos, target);
        assert!(enemy.blend_from.is_none());

        // Without a blend source tracking is direct
        let other = Vec2::new(10.0, 20.0);
        track_formation(&mut enemy, other, 0.01);
        assert_eq!(enemy.pos, other);
    }
}
