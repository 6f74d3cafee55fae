//! Per-tick control flow and wave lifecycle
//!
//! Order per tick: respawn watch, timed pattern cycling, time accumulation,
//! center sample, rotation, per-enemy formation/dive update, attack pacing,
//! projectile pruning. Collision queries arrive between ticks from the
//! host's collision detector.

use std::f32::consts::TAU;

use glam::Vec2;

use super::state::{Enemy, EnemyState, Slot, SwarmEvent, SwarmState};
use super::{attack, dive, formation, scoring};
use crate::difficulty::DifficultyParams;

/// Advance the whole controller one tick. `dt` is caller-supplied and must
/// be clamped upstream to a sane maximum.
pub fn tick(state: &mut SwarmState, dt: f32) {
    state.clock += dt as f64;

    // Empty-wave watch: start the respawn countdown exactly once
    if state.enemies.is_empty() && state.respawn_timer.is_none() {
        state.respawn_timer = Some(state.tuning.respawn_delay);
    }

    if let Some(timer) = state.respawn_timer.as_mut() {
        *timer -= dt;
        if *timer <= 0.0 {
            let next = state.patterns.random_other(&mut state.rng, state.pattern_index);
            apply_pattern(state, next);
            create_wave(state);
        }
        // Roster is rebuilding; skip the regular update
        return;
    }

    // Timed pattern cycling, independent of respawn
    state.pattern_timer += dt;
    if state.pattern_timer >= state.tuning.pattern_duration {
        state.pattern_timer = 0.0;
        let next = state.patterns.next(state.pattern_index);
        apply_pattern(state, next);
    }

    state.time = (state.time + dt) % state.tuning.loop_duration;

    let center = formation::center(
        &state.path,
        state.time,
        state.tuning.loop_duration,
        (state.vertical_offset, state.max_vertical_position),
    );
    let radius = formation::pulsed_radius(&state.params, state.time);
    state.current_rotation = formation::advance_rotation(state.current_rotation, &state.params, dt);

    // One enemy at a time, so the spacing guard sees dives started earlier
    // in the same tick
    for i in 0..state.enemies.len() {
        match state.enemies[i].state {
            EnemyState::Formation => {
                let slot_angle = state.slots[state.enemies[i].slot].angle;
                let target =
                    formation::slot_target(center, slot_angle, state.current_rotation, radius);
                if dive::dive_roll(&mut state.rng, state.params.dive_chance, dt)
                    && dive::spacing_clear(&state.enemies, target.x)
                {
                    let dive_state = dive::start_dive(
                        target,
                        state.params.dive_speed,
                        state.tuning.dive_curve_intensity,
                        state.player.as_ref(),
                    );
                    state.enemies[i].state = dive_state;
                } else {
                    dive::track_formation(&mut state.enemies[i], target, state.time);
                }
            }
            EnemyState::Diving { .. } => {
                let player = state.player;
                dive::tick_dive(
                    &mut state.enemies[i],
                    player.as_ref(),
                    state.tuning.dive_acceleration,
                    dt,
                    state.virtual_width,
                    state.virtual_height,
                );
            }
        }
    }

    attack::tick_attack(state, dt);
}

/// Atomically (re)build the wave: fresh difficulty snapshot, slots, and
/// roster. Any pending respawn or scheduled shot is cancelled so nothing
/// acts on the stale roster.
pub fn create_wave(state: &mut SwarmState) {
    state.params = DifficultyParams::derive(state.difficulty, state.virtual_height, &state.tuning);
    state.pending_shots.clear();
    state.respawn_timer = None;
    state.enemies.clear();
    state.slots.clear();
    state.shoot_timer = 0.0;

    let count = (state.tuning.alien_count.floor() as usize).max(1);
    let angle_step = TAU / count as f32;
    for index in 0..count {
        state.slots.push(Slot {
            index,
            angle: index as f32 * angle_step,
            occupied: true,
        });
    }
    let size = Vec2::splat(state.tuning.enemy_size);
    for slot in 0..count {
        let id = state.next_entity_id();
        state.enemies.push(Enemy {
            id,
            slot,
            pos: Vec2::ZERO,
            size,
            state: EnemyState::Formation,
            blend_from: None,
        });
    }
    state.initial_wave_size = count;

    state.events.push(SwarmEvent::WaveSpawned {
        pattern: state.pattern_index,
    });
    log::info!(
        "wave of {} spawned on pattern {:?} at level {}",
        count,
        state.patterns.pattern(state.pattern_index).name,
        state.difficulty
    );
}

/// Make `name` the current pattern; unknown names keep the prior pattern.
pub fn switch_pattern(state: &mut SwarmState, name: &str) {
    match state.patterns.index_of(name) {
        Some(index) => apply_pattern(state, index),
        None => log::warn!(
            "unknown pattern {:?}, keeping {:?}",
            name,
            state.patterns.pattern(state.pattern_index).name
        ),
    }
}

/// Restart the loop on a new pattern and record blend sources for every
/// live enemy. Does not touch the roster or its slots.
fn apply_pattern(state: &mut SwarmState, index: usize) {
    state.pattern_index = index;
    state.time = 0.0;
    for enemy in &mut state.enemies {
        enemy.blend_from = Some(enemy.pos);
    }
    log::debug!("pattern -> {:?}", state.patterns.pattern(index).name);
}

/// Kill by entity id; safe against duplicate or late reports.
pub fn remove_on_hit(state: &mut SwarmState, id: u32) -> bool {
    let Some(index) = state.enemies.iter().position(|e| e.id == id) else {
        return false;
    };
    let enemy = state.enemies.remove(index);
    if let Some(slot) = state.slots.get_mut(enemy.slot) {
        slot.occupied = false;
    }
    state.events.push(SwarmEvent::Explosion {
        center: enemy.center(),
    });
    let points = scoring::points_for_kill(
        state.difficulty,
        state.initial_wave_size,
        state.enemies.len(),
        state.tuning.points_base,
    );
    state.events.push(SwarmEvent::PointsScored { points });
    true
}

/// Point-vs-roster hit test. On hit the enemy dies: slot release, visual
/// effect, scoring. Returns whether anything was hit.
pub fn check_collision(state: &mut SwarmState, x: f32, y: f32) -> bool {
    let Some(id) = state
        .enemies
        .iter()
        .find(|e| e.contains(x, y))
        .map(|e| e.id)
    else {
        return false;
    };
    remove_on_hit(state, id)
}

/// Test all active projectiles against an axis-aligned rectangle. Every
/// hit projectile is invalidated so the next tick prunes it.
pub fn check_player_collision(state: &mut SwarmState, px: f32, py: f32, pw: f32, ph: f32) -> bool {
    let mut hit = false;
    for projectile in state.projectiles.iter_mut() {
        let p = projectile.pos;
        if p.x >= px && p.x <= px + pw && p.y >= py && p.y <= py + ph {
            projectile.life = 0.0;
            hit = true;
        }
    }
    hit
}
