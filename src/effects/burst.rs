// Radial spark bursts shared by both fireworks effects

use crate::color::palette_color;
use crate::config::BurstConfig;
use crate::exclusion::XRange;
use crate::particle::Spark;
use crate::surface::Surface;
use rand::{Rng, RngCore};
use std::f64::consts::PI;

// A ring of sparks at `center`, angles spread evenly around the circle plus jitter
pub fn spawn_ring(sparks: &mut Vec<Spark>, center: [f64; 2], config: &BurstConfig, rng: &mut dyn RngCore) {
    let count = config.sparks;
    sparks.reserve(count);
    for i in 0..count {
        let angle = (PI * 2.0 * i as f64) / count as f64 + rng.gen::<f64>() * config.angle_jitter;
        let speed = config.speed_min + rng.gen::<f64>() * config.speed_spread;
        sparks.push(Spark {
            pos: center,
            vel: [angle.cos() * speed, angle.sin() * speed],
            drag: config.drag_max - rng.gen::<f64>() * config.drag_spread,
            gravity: config.gravity,
            size: config.size_min + rng.gen::<f64>() * config.size_spread,
            color: palette_color(&config.palette, i),
            alpha: 1.0,
            decay: config.decay_min + rng.gen::<f64>() * config.decay_spread,
        });
    }
}

// Step every spark, draw the ones outside `hidden`, then drop the spent ones
pub fn step_and_draw(
    sparks: &mut Vec<Spark>,
    surface: &mut dyn Surface,
    alpha_floor: f64,
    hidden: Option<XRange>,
) {
    for spark in sparks.iter_mut() {
        spark.step();
        if hidden.map_or(false, |range| range.contains(spark.pos[0])) {
            continue;
        }
        surface.save();
        surface.set_global_alpha(spark.alpha.max(alpha_floor));
        surface.set_fill_color(&spark.color);
        surface.fill_circle(spark.pos[0], spark.pos[1], spark.size);
        surface.restore();
    }
    sparks.retain(|spark| !spark.is_spent());
}
