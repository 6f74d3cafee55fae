//! Closed-loop travel path for the formation center
//!
//! The formation rides a smooth closed curve in the upper part of the
//! playfield. The controller samples it once per tick by normalized
//! progress; the curve itself carries no gameplay state.

use glam::Vec2;

/// Anything that can be sampled as a closed loop by normalized progress
pub trait LoopPath {
    /// Point at `progress` in `[0, 1]`; `point_at(0.0) == point_at(1.0)`
    /// and out-of-range values wrap.
    fn point_at(&self, progress: f32) -> Vec2;
}

/// Closed chain of cubic Bezier segments sweeping a figure-eight band
/// around `(cx, cy)` with the given half-width.
#[derive(Debug, Clone)]
pub struct BezierLoop {
    segments: Vec<[Vec2; 4]>,
}

impl BezierLoop {
    pub fn new(cx: f32, cy: f32, radius: f32) -> Self {
        let half_h = radius * 0.35;
        let waypoints = [
            Vec2::new(cx - radius, cy),
            Vec2::new(cx - radius * 0.5, cy - half_h),
            Vec2::new(cx, cy),
            Vec2::new(cx + radius * 0.5, cy + half_h),
            Vec2::new(cx + radius, cy),
            Vec2::new(cx + radius * 0.5, cy - half_h),
            Vec2::new(cx, cy),
            Vec2::new(cx - radius * 0.5, cy + half_h),
        ];
        Self::through_points(&waypoints)
    }

    /// Closed smooth curve through the given waypoints, with Catmull-Rom
    /// tangents converted to Bezier control points.
    pub fn through_points(points: &[Vec2]) -> Self {
        let n = points.len();
        assert!(n >= 3, "a closed loop needs at least three waypoints");
        let mut segments = Vec::with_capacity(n);
        for i in 0..n {
            let p0 = points[(i + n - 1) % n];
            let p1 = points[i];
            let p2 = points[(i + 1) % n];
            let p3 = points[(i + 2) % n];
            let c1 = p1 + (p2 - p0) / 6.0;
            let c2 = p2 - (p3 - p1) / 6.0;
            segments.push([p1, c1, c2, p2]);
        }
        Self { segments }
    }
}

impl LoopPath for BezierLoop {
    fn point_at(&self, progress: f32) -> Vec2 {
        let p = progress.rem_euclid(1.0);
        let scaled = p * self.segments.len() as f32;
        let index = (scaled as usize).min(self.segments.len() - 1);
        cubic_point(&self.segments[index], scaled - index as f32)
    }
}

#[inline]
fn cubic_point(seg: &[Vec2; 4], t: f32) -> Vec2 {
    let u = 1.0 - t;
    seg[0] * (u * u * u) + seg[1] * (3.0 * u * u * t) + seg[2] * (3.0 * u * t * t) + seg[3] * (t * t * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_closes() {
        let path = BezierLoop::new(540.0, 216.0, 270.0);
        let start = path.point_at(0.0);
        let end = path.point_at(1.0);
        assert!((start - end).length() < 1e-4);
    }

    #[test]
    fn test_progress_wraps() {
        let path = BezierLoop::new(540.0, 216.0, 270.0);
        let a = path.point_at(0.25);
        let b = path.point_at(1.25);
        assert!((a - b).length() < 1e-4);
    }

    #[test]
    fn test_stays_within_horizontal_band() {
        let path = BezierLoop::new(540.0, 216.0, 270.0);
        for i in 0..=100 {
            let p = path.point_at(i as f32 / 100.0);
            assert!(p.x >= 540.0 - 270.0 - 1.0 && p.x <= 540.0 + 270.0 + 1.0);
        }
    }

    #[test]
    fn test_passes_through_waypoints() {
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 100.0),
        ];
        let path = BezierLoop::through_points(&pts);
        for (i, p) in pts.iter().enumerate() {
            let sampled = path.point_at(i as f32 / pts.len() as f32);
            assert!((sampled - *p).length() < 1e-3, "waypoint {i}");
        }
    }
}
