// Particle records for the two kinds of effect: tumbling confetti squares
// and fading firework sparks. Each one knows how to advance itself a frame.

use crate::color::Color;
use vecmath::{vec2_add, Vector2};

pub struct Confetto {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub size: f64,
    pub rotation: f64,
    pub spin: f64,
    pub color: Color,
    pub life: u32,
    pub max_life: f64,
}

impl Confetto {
    pub fn step(&mut self, gravity: f64) {
        self.vel[1] += gravity;
        self.pos = vec2_add(self.pos, self.vel);
        self.rotation += self.spin;
        self.life += 1;
    }

    // Below the bottom edge (plus margin) or out of life
    pub fn is_dead(&self, height: f64, bottom_margin: f64) -> bool {
        self.pos[1] > height + bottom_margin || self.life as f64 > self.max_life
    }
}

pub struct Spark {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub drag: f64,
    pub gravity: f64,
    pub size: f64,
    pub color: Color,
    pub alpha: f64,
    pub decay: f64,
}

impl Spark {
    pub fn step(&mut self) {
        self.vel[0] *= self.drag;
        self.vel[1] = self.vel[1] * self.drag + self.gravity;
        self.pos = vec2_add(self.pos, self.vel);
        self.alpha -= self.decay;
    }

    pub fn is_spent(&self) -> bool {
        self.alpha <= 0.0
    }
}
