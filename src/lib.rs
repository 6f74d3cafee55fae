//! Pattern Swarm - enemy formation and dive-attack controller
//!
//! Drives the enemy waves of a fixed-camera arcade shooter: a rotating,
//! pulsing ring of enemies riding a closed travel path, individual members
//! peeling off into scripted dive attacks, projectile fire pacing, and a
//! difficulty curve that wraps every ten levels so it can climb forever.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (formation geometry, dive state
//!   machine, attack pacing, scoring, wave lifecycle)
//! - `difficulty`: Level -> derived parameter snapshot
//! - `path`: Closed-loop travel curve for the formation center
//! - `patterns`: Named pattern catalog driving cycling and respawn variety
//! - `controller`: Facade wiring audio/rendering/score collaborators

pub mod config;
pub mod controller;
pub mod difficulty;
pub mod path;
pub mod patterns;
pub mod sim;

pub use config::{FormationOptions, Tuning};
pub use controller::{AudioSink, EffectSink, SceneRenderer, SoundCue, SwarmController};
pub use difficulty::DifficultyParams;
pub use sim::state::PlayerRef;

/// Fixed gameplay constants that are not balance knobs
pub mod consts {
    /// Seconds over which the post-pattern-switch position blend runs
    pub const BLEND_WINDOW: f32 = 0.5;
    /// How far past the play bounds a diving enemy travels before re-entry
    pub const OFFSCREEN_MARGIN: f32 = 50.0;
    /// Minimum horizontal distance between simultaneous dives
    pub const DIVE_SPACING: f32 = 100.0;
    /// Simulation-clock delay before a scheduled second shot fires
    pub const SECOND_SHOT_DELAY: f64 = 0.1;
    /// Lateral offset of the second shot from the first muzzle point
    pub const SECOND_SHOT_OFFSET: f32 = 20.0;
    /// Fraction of the player's horizontal velocity used to lead dive aim
    pub const PLAYER_LEAD: f32 = 0.5;
    /// Multiplier turning pulse intensity into a radius amplitude
    pub const PULSE_AMPLITUDE: f32 = 7.5;
}
