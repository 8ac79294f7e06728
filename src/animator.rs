// The single frame loop shared by every running effect. The host requests a
// frame when `register` says so and keeps going while `frame` returns true.

use crate::config::EffectsConfig;
use crate::effects::{Confetti, Effect, Fireworks, Frame, SideFireworks};
use crate::exclusion::ExclusionZone;
use crate::surface::Surface;
use rand::RngCore;
use std::rc::Rc;

// Monotonic, in milliseconds
pub trait Clock {
    fn now(&self) -> f64;
}

pub struct Animator {
    effects: Vec<Box<dyn Effect>>,
    scheduled: bool,
    clock: Box<dyn Clock>,
    rng: Box<dyn RngCore>,
    config: EffectsConfig,
}

impl Animator {
    pub fn new(clock: Box<dyn Clock>, rng: Box<dyn RngCore>, config: EffectsConfig) -> Self {
        Animator {
            effects: Vec::new(),
            scheduled: false,
            clock,
            rng,
            config,
        }
    }

    pub fn config(&self) -> &EffectsConfig {
        &self.config
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    pub fn active_effects(&self) -> usize {
        self.effects.len()
    }

    // True on the idle to active transition: the caller must request a frame
    pub fn register(&mut self, effect: Box<dyn Effect>) -> bool {
        self.effects.push(effect);
        if self.scheduled {
            false
        } else {
            self.scheduled = true;
            true
        }
    }

    // The frame request failed, so no loop is running after all
    pub fn mark_idle(&mut self) {
        self.scheduled = false;
    }

    // `None` arguments fall back to the configured defaults
    pub fn start_confetti(&mut self, count: Option<usize>) -> bool {
        let config = self.config.confetti.clone();
        let confetti = Confetti::new(count.unwrap_or(config.count), config);
        self.register(Box::new(confetti))
    }

    pub fn start_fireworks(&mut self, bursts: Option<usize>) -> bool {
        let config = self.config.fireworks.clone();
        let fireworks = Fireworks::new(bursts.unwrap_or(config.bursts), self.clock.now(), config);
        self.register(Box::new(fireworks))
    }

    pub fn start_side_fireworks(
        &mut self,
        duration_ms: Option<f64>,
        interval_ms: Option<f64>,
        zone: Rc<dyn ExclusionZone>,
    ) -> bool {
        let side = SideFireworks::new(
            duration_ms.unwrap_or(self.config.side_fireworks.duration_ms),
            interval_ms.unwrap_or(self.config.side_fireworks.interval_ms),
            self.clock.now(),
            zone,
            self.config.side_fireworks.clone(),
        );
        self.register(Box::new(side))
    }

    // False once nothing is left: the surface is clear and the animator idle
    pub fn frame(&mut self, surface: &mut dyn Surface, width: f64, height: f64) -> bool {
        surface.resize(width, height);
        surface.clear_rect(0.0, 0.0, width, height);

        let now = self.clock.now();
        let mut frame = Frame {
            surface: &mut *surface,
            rng: &mut *self.rng,
            width,
            height,
            now,
        };
        // Walk backwards so removal doesn't skip the next effect
        for i in (0..self.effects.len()).rev() {
            if !self.effects[i].advance(&mut frame) {
                self.effects.remove(i);
            }
        }

        if self.effects.is_empty() {
            self.scheduled = false;
            surface.clear_rect(0.0, 0.0, width, height);
            false
        } else {
            true
        }
    }
}
