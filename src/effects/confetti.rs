use super::{Effect, Frame};
use crate::color::palette_color;
use crate::config::ConfettiConfig;
use crate::particle::Confetto;
use rand::{Rng, RngCore};
use std::f64::consts::PI;

// Pieces are created on the first frame so they spread across the width the
// surface has by then
pub struct Confetti {
    count: usize,
    pieces: Option<Vec<Confetto>>,
    config: ConfettiConfig,
}

impl Confetti {
    pub fn new(count: usize, config: ConfettiConfig) -> Self {
        Confetti {
            count,
            pieces: None,
            config,
        }
    }

    pub fn pieces(&self) -> &[Confetto] {
        self.pieces.as_deref().unwrap_or(&[])
    }

    fn populate(&self, width: f64, rng: &mut dyn RngCore) -> Vec<Confetto> {
        let config = &self.config;
        (0..self.count)
            .map(|i| Confetto {
                pos: [rng.gen::<f64>() * width, config.start_y],
                vel: [(rng.gen::<f64>() - 0.5) * 6.0, rng.gen::<f64>() * 3.0 + 2.0],
                size: rng.gen::<f64>() * 6.0 + 3.0,
                rotation: rng.gen::<f64>() * PI,
                spin: (rng.gen::<f64>() - 0.5) * 0.2,
                color: palette_color(&config.palette, i),
                life: 0,
                max_life: config.max_life_min + rng.gen::<f64>() * config.max_life_spread,
            })
            .collect()
    }
}

impl Effect for Confetti {
    fn advance(&mut self, frame: &mut Frame<'_>) -> bool {
        if self.pieces.is_none() {
            self.pieces = Some(self.populate(frame.width, &mut *frame.rng));
        }
        let (gravity, margin) = (self.config.gravity, self.config.bottom_margin);
        let pieces = match self.pieces.as_mut() {
            Some(pieces) => pieces,
            None => return false,
        };

        let surface = &mut *frame.surface;
        for p in pieces.iter_mut() {
            p.step(gravity);
            surface.save();
            surface.translate(p.pos[0], p.pos[1]);
            surface.rotate(p.rotation);
            surface.set_fill_color(&p.color);
            surface.fill_rect(-p.size / 2.0, -p.size / 2.0, p.size, p.size);
            surface.restore();
        }
        let height = frame.height;
        pieces.retain(|p| !p.is_dead(height, margin));

        !pieces.is_empty()
    }
}
