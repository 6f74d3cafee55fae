//! Controller facade and external collaborator seams
//!
//! The simulation reports everything that happened as events; this facade
//! drains them after each operation and routes them to the injected
//! collaborators: an optional audio sink, an optional effect sink that
//! receives kill positions for the host's explosion effects, and a points
//! callback for the host's scoring system.

use glam::Vec2;

use crate::config::FormationOptions;
use crate::difficulty::DifficultyParams;
use crate::sim::state::{Enemy, PlayerRef, Projectile, SwarmEvent, SwarmState};
use crate::sim::tick;

/// Sound cues raised by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// An enemy fired a projectile
    EnemyShoot,
    /// An enemy was destroyed
    Explosion,
    /// A fresh wave spawned
    WaveSpawn,
}

/// Injected audio collaborator; absent by default and never a global
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Injected visual-effect collaborator; receives the center of each kill
/// so the host can place its explosion effect
pub trait EffectSink {
    fn explosion(&mut self, center: Vec2);
}

/// Draw delegation target; rendering internals live with the host
pub trait SceneRenderer {
    fn draw_enemy(&mut self, enemy: &Enemy);
    fn draw_projectile(&mut self, projectile: &Projectile);
}

/// The formation-and-attack controller
pub struct SwarmController {
    state: SwarmState,
    audio: Option<Box<dyn AudioSink>>,
    effects: Option<Box<dyn EffectSink>>,
    on_points: Box<dyn FnMut(u64)>,
}

impl SwarmController {
    pub fn new(options: FormationOptions) -> Self {
        let mut controller = Self {
            state: SwarmState::new(options),
            audio: None,
            effects: None,
            on_points: Box::new(|_| {}),
        };
        controller.dispatch_events();
        controller
    }

    /// Attach the audio collaborator
    pub fn with_audio(mut self, audio: Box<dyn AudioSink>) -> Self {
        self.audio = Some(audio);
        self
    }

    /// Attach the visual-effect collaborator
    pub fn with_effects(mut self, effects: Box<dyn EffectSink>) -> Self {
        self.effects = Some(effects);
        self
    }

    /// Attach the score callback invoked once per confirmed kill
    pub fn on_points(mut self, callback: impl FnMut(u64) + 'static) -> Self {
        self.on_points = Box::new(callback);
        self
    }

    /// Advance the full state machine one tick. `delta` is in seconds and
    /// must be clamped upstream to a sane maximum.
    pub fn update(&mut self, delta: f32) {
        tick::tick(&mut self.state, delta);
        self.dispatch_events();
    }

    /// Delegate drawing of the roster and projectiles to the host
    pub fn draw(&self, renderer: &mut dyn SceneRenderer) {
        for enemy in &self.state.enemies {
            renderer.draw_enemy(enemy);
        }
        for projectile in &self.state.projectiles {
            renderer.draw_projectile(projectile);
        }
    }

    /// Switch to a named pattern; unknown names are logged no-ops
    pub fn switch_pattern(&mut self, name: &str) {
        tick::switch_pattern(&mut self.state, name);
    }

    /// Point-vs-enemy hit test; a hit kills, releases the slot, and scores
    pub fn check_collision(&mut self, x: f32, y: f32) -> bool {
        let hit = tick::check_collision(&mut self.state, x, y);
        self.dispatch_events();
        hit
    }

    /// Rect-vs-projectile test; hit projectiles are invalidated
    pub fn check_player_collision(&mut self, px: f32, py: f32, pw: f32, ph: f32) -> bool {
        tick::check_player_collision(&mut self.state, px, py, pw, ph)
    }

    /// Provide the read-only player reference used for dive targeting
    pub fn set_player(&mut self, player: PlayerRef) {
        self.state.player = Some(player);
    }

    /// Drop the player reference; dives degrade to vertical-only motion
    pub fn clear_player(&mut self) {
        self.state.player = None;
    }

    /// Set the difficulty level; takes effect when the next wave is created
    pub fn set_difficulty(&mut self, level: u32) {
        self.state.difficulty = level.max(1);
    }

    /// Force a fresh wave now, cancelling any pending respawn or
    /// scheduled shot
    pub fn reset_wave(&mut self) {
        tick::create_wave(&mut self.state);
        self.dispatch_events();
    }

    pub fn params(&self) -> &DifficultyParams {
        &self.state.params
    }

    pub fn difficulty(&self) -> u32 {
        self.state.difficulty
    }

    pub fn current_pattern(&self) -> &str {
        &self.state.patterns.pattern(self.state.pattern_index).name
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.state.enemies
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.state.projectiles
    }

    fn dispatch_events(&mut self) {
        for event in self.state.events.drain(..) {
            match event {
                SwarmEvent::PointsScored { points } => (self.on_points)(points),
                SwarmEvent::ShotFired => {
                    if let Some(audio) = &mut self.audio {
                        audio.play(SoundCue::EnemyShoot);
                    }
                }
                SwarmEvent::Explosion { center } => {
                    if let Some(effects) = &mut self.effects {
                        effects.explosion(center);
                    }
                    if let Some(audio) = &mut self.audio {
                        audio.play(SoundCue::Explosion);
                    }
                }
                SwarmEvent::WaveSpawned { .. } => {
                    if let Some(audio) = &mut self.audio {
                        audio.play(SoundCue::WaveSpawn);
                    }
                }
            }
        }
    }
}
