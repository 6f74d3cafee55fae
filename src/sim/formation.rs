//! Formation slot geometry
//!
//! Turns elapsed time into the travel-path center, the pulsing radius, and
//! rotated slot targets for the current tick.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::consts::PULSE_AMPLITUDE;
use crate::difficulty::DifficultyParams;
use crate::path::LoopPath;

/// Formation center: the path sample with its vertical component clamped
/// into `[band.0, band.1]`.
pub fn center(path: &impl LoopPath, time: f32, loop_duration: f32, band: (f32, f32)) -> Vec2 {
    let progress = (time % loop_duration) / loop_duration;
    let mut pos = path.point_at(progress);
    pos.y = pos.y.clamp(band.0, band.1);
    pos
}

/// Ring radius with the sinusoidal pulse applied
pub fn pulsed_radius(params: &DifficultyParams, time: f32) -> f32 {
    params.formation_radius
        + (time * params.pulse_speed * TAU).sin() * params.pulse_intensity * PULSE_AMPLITUDE
}

/// Advance the rotation accumulator, wrapping into `[0, 2π)`
pub fn advance_rotation(current: f32, params: &DifficultyParams, dt: f32) -> f32 {
    (current + params.rotation_speed * params.rotation_direction * dt).rem_euclid(TAU)
}

/// Target position for a slot with the given fixed angle
pub fn slot_target(center: Vec2, slot_angle: f32, rotation: f32, radius: f32) -> Vec2 {
    let angle = slot_angle + rotation;
    center + Vec2::new(angle.cos(), angle.sin()) * radius
}
