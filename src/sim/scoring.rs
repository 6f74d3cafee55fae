//! Kill-to-points policy
//!
//! The controller converts confirmed hits into point awards and reports
//! them outward; it never accumulates a running score itself.

/// Points for a confirmed kill, scaled by difficulty level and by how far
/// the wave has been depleted.
pub fn points_for_kill(
    level: u32,
    initial_wave_size: usize,
    remaining: usize,
    points_base: u64,
) -> u64 {
    let depleted = initial_wave_size.saturating_sub(remaining) as f32;
    let multiplier = level as f32 * (1.0 + depleted * 0.1);
    (points_base as f32 * multiplier).floor() as u64
}
