//! Deterministic simulation module
//!
//! All wave behavior lives here. This module must stay pure and
//! deterministic:
//! - Caller-supplied tick delta only
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies; side effects surface
//!   as [`state::SwarmEvent`]s drained by the controller facade

pub mod attack;
pub mod dive;
pub mod formation;
pub mod scoring;
pub mod state;
pub mod tick;

pub use state::{Enemy, EnemyState, PendingShot, PlayerRef, Projectile, Slot, SwarmEvent, SwarmState};
pub use tick::{check_collision, check_player_collision, create_wave, switch_pattern, tick};
