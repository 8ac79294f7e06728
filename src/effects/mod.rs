// Visual effects, advanced one frame at a time by the animator

mod burst;
mod confetti;
mod fireworks;
mod side_fireworks;

pub use confetti::Confetti;
pub use fireworks::Fireworks;
pub use side_fireworks::SideFireworks;

use crate::surface::Surface;
use rand::RngCore;

pub struct Frame<'a> {
    pub surface: &'a mut dyn Surface,
    pub rng: &'a mut dyn RngCore,
    pub width: f64,
    pub height: f64,
    // ms
    pub now: f64,
}

pub trait Effect {
    // False once finished; the effect is dropped and never advanced again
    fn advance(&mut self, frame: &mut Frame<'_>) -> bool;
}
