use super::burst::{spawn_ring, step_and_draw};
use super::{Effect, Frame};
use crate::config::FireworksConfig;
use crate::particle::Spark;
use rand::Rng;
use std::collections::VecDeque;

pub struct Fireworks {
    sparks: Vec<Spark>,
    // Burst offsets in ms from `started_at`, earliest first
    schedule: VecDeque<f64>,
    started_at: f64,
    frames: u32,
    bursts_fired: usize,
    config: FireworksConfig,
}

impl Fireworks {
    pub fn new(bursts: usize, started_at: f64, config: FireworksConfig) -> Self {
        let schedule = (0..bursts).map(|i| i as f64 * config.spacing_ms).collect();
        Fireworks {
            sparks: Vec::new(),
            schedule,
            started_at,
            frames: 0,
            bursts_fired: 0,
            config,
        }
    }

    pub fn pending_bursts(&self) -> impl Iterator<Item = f64> + '_ {
        self.schedule.iter().copied()
    }

    pub fn bursts_fired(&self) -> usize {
        self.bursts_fired
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }
}

impl Effect for Fireworks {
    fn advance(&mut self, frame: &mut Frame<'_>) -> bool {
        let elapsed = frame.now - self.started_at;
        while self.schedule.front().map_or(false, |&due| elapsed >= due) {
            self.schedule.pop_front();
            let (x_offset, x_spread) = self.config.center_x;
            let (y_offset, y_spread) = self.config.burst.center_y;
            let center = [
                frame.rng.gen::<f64>() * (frame.width * x_spread) + frame.width * x_offset,
                frame.rng.gen::<f64>() * (frame.height * y_spread) + frame.height * y_offset,
            ];
            spawn_ring(&mut self.sparks, center, &self.config.burst, &mut *frame.rng);
            self.bursts_fired += 1;
        }

        step_and_draw(
            &mut self.sparks,
            &mut *frame.surface,
            self.config.burst.alpha_floor,
            None,
        );
        self.frames += 1;

        !self.sparks.is_empty() || !self.schedule.is_empty() || self.frames < self.config.min_frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::testing::{frame, rng, HEIGHT, WIDTH};
    use crate::surface::recording::RecordingSurface;

    #[test]
    fn schedules_bursts_every_220ms() {
        let fireworks = Fireworks::new(6, 5_000.0, FireworksConfig::default());
        let schedule: Vec<f64> = fireworks.pending_bursts().collect();
        assert_eq!(schedule, vec![0.0, 220.0, 440.0, 660.0, 880.0, 1100.0]);
    }

    #[test]
    fn first_burst_fires_on_the_first_frame() {
        let mut fireworks = Fireworks::new(6, 1_000.0, FireworksConfig::default());
        let (mut surface, mut rng) = (RecordingSurface::new(), rng());
        assert!(fireworks.advance(&mut frame(&mut surface, &mut rng, 1_000.0)));
        assert_eq!(fireworks.bursts_fired(), 1);
        assert_eq!(fireworks.sparks().len(), 48);
        assert_eq!(surface.circles().len(), 48);
    }

    #[test]
    fn late_frames_catch_up_on_every_due_burst() {
        let mut fireworks = Fireworks::new(6, 0.0, FireworksConfig::default());
        let (mut surface, mut rng) = (RecordingSurface::new(), rng());
        fireworks.advance(&mut frame(&mut surface, &mut rng, 500.0));
        assert_eq!(fireworks.bursts_fired(), 3);
        assert_eq!(fireworks.pending_bursts().next(), Some(660.0));
    }

    #[test]
    fn fires_exactly_the_requested_bursts_over_its_lifetime() {
        let mut fireworks = Fireworks::new(6, 0.0, FireworksConfig::default());
        let (mut surface, mut rng) = (RecordingSurface::new(), rng());
        let mut now = 0.0;
        let mut most_sparks = 0;
        while fireworks.advance(&mut frame(&mut surface, &mut rng, now)) {
            most_sparks = most_sparks.max(fireworks.sparks().len());
            now += 16.0;
            assert!(now < 10_000.0);
            surface.reset();
        }
        assert_eq!(fireworks.bursts_fired(), 6);
        assert!(most_sparks > 48);
        assert!(fireworks.sparks().is_empty());
    }

    #[test]
    fn burst_centres_stay_in_the_upper_middle() {
        let mut fireworks = Fireworks::new(1, 0.0, FireworksConfig::default());
        let (mut surface, mut rng) = (RecordingSurface::new(), rng());
        fireworks.advance(&mut frame(&mut surface, &mut rng, 0.0));
        // One step from the centre moves at most 5.5px
        let s = &fireworks.sparks()[0];
        assert!(s.pos[0] > WIDTH * 0.1 - 6.0 && s.pos[0] < WIDTH * 0.9 + 6.0);
        assert!(s.pos[1] > HEIGHT * 0.15 - 6.0 && s.pos[1] < HEIGHT * 0.65 + 6.0);
    }

    #[test]
    fn lives_at_least_the_frame_floor() {
        let mut fireworks = Fireworks::new(0, 0.0, FireworksConfig::default());
        let (mut surface, mut rng) = (RecordingSurface::new(), rng());
        let mut frames = 1;
        while fireworks.advance(&mut frame(&mut surface, &mut rng, 0.0)) {
            frames += 1;
        }
        assert_eq!(frames, 120);
    }

    #[test]
    fn sparks_are_drawn_near_opaque_until_removed() {
        let mut fireworks = Fireworks::new(1, 0.0, FireworksConfig::default());
        let (mut surface, mut rng) = (RecordingSurface::new(), rng());
        for i in 0..60 {
            fireworks.advance(&mut frame(&mut surface, &mut rng, i as f64 * 16.0));
        }
        assert!(surface.circles().iter().all(|&(_, _, alpha)| alpha >= 0.9));
    }
}
