use super::burst::{spawn_ring, step_and_draw};
use super::{Effect, Frame};
use crate::config::SideFireworksConfig;
use crate::exclusion::{choose_band, ExclusionZone, Side};
use crate::particle::Spark;
use rand::Rng;
use std::rc::Rc;

pub struct SideFireworks {
    sparks: Vec<Spark>,
    started_at: f64,
    next_spawn_at: f64,
    duration_ms: f64,
    interval_ms: f64,
    zone: Rc<dyn ExclusionZone>,
    config: SideFireworksConfig,
}

impl SideFireworks {
    pub fn new(
        duration_ms: f64,
        interval_ms: f64,
        started_at: f64,
        zone: Rc<dyn ExclusionZone>,
        config: SideFireworksConfig,
    ) -> Self {
        SideFireworks {
            sparks: Vec::new(),
            started_at,
            next_spawn_at: started_at,
            duration_ms,
            // the spawn loop must make progress
            interval_ms: interval_ms.max(1.0),
            zone,
            config,
        }
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    fn spawn(&mut self, frame: &mut Frame<'_>) {
        let forbid = self.zone.forbidden_range(frame.width);
        let preferred = if frame.rng.gen::<f64>() < 0.5 {
            Side::Left
        } else {
            Side::Right
        };
        let band = choose_band(preferred, frame.width, forbid, &self.config);
        let (y_offset, y_spread) = self.config.burst.center_y;
        let center = [
            frame.rng.gen::<f64>() * band.width() + band.min_x,
            frame.rng.gen::<f64>() * (frame.height * y_spread) + frame.height * y_offset,
        ];
        spawn_ring(&mut self.sparks, center, &self.config.burst, &mut *frame.rng);
    }
}

impl Effect for SideFireworks {
    fn advance(&mut self, frame: &mut Frame<'_>) -> bool {
        let now = frame.now;
        while now >= self.next_spawn_at && now - self.started_at <= self.duration_ms {
            self.spawn(frame);
            self.next_spawn_at += self.interval_ms;
        }

        let hidden = self.zone.forbidden_range(frame.width);
        step_and_draw(
            &mut self.sparks,
            &mut *frame.surface,
            self.config.burst.alpha_floor,
            hidden,
        );

        now - self.started_at <= self.duration_ms || !self.sparks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::testing::{frame, rng, HEIGHT};
    use crate::exclusion::{NoExclusion, XRange};
    use crate::surface::recording::RecordingSurface;
    use std::cell::Cell;

    const MODAL: XRange = XRange {
        left: 350.0,
        right: 850.0,
    };

    fn modal_zone() -> Rc<dyn ExclusionZone> {
        Rc::new(|w: f64| Some(XRange::clamped(MODAL.left, MODAL.right, w)))
    }

    #[test]
    fn spawns_one_burst_per_interval_while_running() {
        let mut fx = SideFireworks::new(1_000.0, 300.0, 0.0, Rc::new(NoExclusion), SideFireworksConfig::default());
        let (mut surface, mut rng) = (RecordingSurface::new(), rng());
        fx.advance(&mut frame(&mut surface, &mut rng, 0.0));
        assert_eq!(fx.sparks().len(), 50);
        // 300, 600 and 900 are all due by 950
        fx.advance(&mut frame(&mut surface, &mut rng, 950.0));
        assert_eq!(fx.sparks().len(), 200);
    }

    #[test]
    fn no_spawns_after_the_duration() {
        let mut fx = SideFireworks::new(500.0, 100.0, 0.0, Rc::new(NoExclusion), SideFireworksConfig::default());
        let (mut surface, mut rng) = (RecordingSurface::new(), rng());
        fx.advance(&mut frame(&mut surface, &mut rng, 0.0));
        let before = fx.sparks().len();
        fx.advance(&mut frame(&mut surface, &mut rng, 2_000.0));
        assert_eq!(fx.sparks().len(), before);
    }

    #[test]
    fn never_draws_inside_the_overlay() {
        let mut fx = SideFireworks::new(3_000.0, 120.0, 0.0, modal_zone(), SideFireworksConfig::default());
        let (mut surface, mut rng) = (RecordingSurface::new(), rng());
        let mut now = 0.0;
        while fx.advance(&mut frame(&mut surface, &mut rng, now)) {
            now += 16.0;
            assert!(now < 20_000.0);
        }
        let circles = surface.circles();
        assert!(!circles.is_empty());
        assert!(circles.iter().all(|&(x, _, _)| !MODAL.contains(x)));
    }

    #[test]
    fn bursts_spawn_beside_the_overlay() {
        let mut fx = SideFireworks::new(10_000.0, 50.0, 0.0, modal_zone(), SideFireworksConfig::default());
        let (mut surface, mut rng) = (RecordingSurface::new(), rng());
        fx.advance(&mut frame(&mut surface, &mut rng, 0.0));
        for _ in 0..40 {
            let before = fx.sparks().len();
            let next = fx.next_spawn_at;
            fx.advance(&mut frame(&mut surface, &mut rng, next));
            // The burst spawned this frame is at the tail; one step moves it < 6px
            let centre = fx.sparks()[before].pos;
            assert!(centre[0] < 310.0 + 6.0 || centre[0] > 890.0 - 6.0);
            assert!(centre[1] > HEIGHT * 0.1 - 6.0 && centre[1] < HEIGHT * 0.55 + 6.0);
        }
    }

    #[test]
    fn overlay_hiding_mid_effect_lifts_the_restriction() {
        let shown = Rc::new(Cell::new(true));
        let flag = Rc::clone(&shown);
        let zone: Rc<dyn ExclusionZone> = Rc::new(move |w: f64| {
            if flag.get() {
                Some(XRange::clamped(0.0, w, w))
            } else {
                None
            }
        });
        let mut fx = SideFireworks::new(100.0, 50.0, 0.0, zone, SideFireworksConfig::default());
        let (mut surface, mut rng) = (RecordingSurface::new(), rng());
        fx.advance(&mut frame(&mut surface, &mut rng, 0.0));
        assert!(surface.circles().is_empty());
        shown.set(false);
        fx.advance(&mut frame(&mut surface, &mut rng, 16.0));
        assert!(!surface.circles().is_empty());
    }

    #[test]
    fn stays_alive_until_duration_and_sparks_are_both_done() {
        let mut fx = SideFireworks::new(200.0, 1_000.0, 0.0, Rc::new(NoExclusion), SideFireworksConfig::default());
        let (mut surface, mut rng) = (RecordingSurface::new(), rng());
        assert!(fx.advance(&mut frame(&mut surface, &mut rng, 0.0)));
        // past the duration but sparks are still fading
        assert!(fx.advance(&mut frame(&mut surface, &mut rng, 250.0)));
        let mut now = 250.0;
        while fx.advance(&mut frame(&mut surface, &mut rng, now)) {
            now += 16.0;
        }
        assert!(fx.sparks().is_empty());
    }

    #[test]
    fn zero_interval_does_not_hang() {
        let mut fx = SideFireworks::new(10.0, 0.0, 0.0, Rc::new(NoExclusion), SideFireworksConfig::default());
        let (mut surface, mut rng) = (RecordingSurface::new(), rng());
        fx.advance(&mut frame(&mut surface, &mut rng, 5.0));
        assert_eq!(fx.sparks().len(), 6 * 50);
    }
}
