// The screen band an overlay covers, and where side-fireworks spawn beside it

use crate::config::SideFireworksConfig;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct XRange {
    pub left: f64,
    pub right: f64,
}

impl XRange {
    pub fn clamped(left: f64, right: f64, viewport_width: f64) -> XRange {
        XRange {
            left: left.max(0.0),
            right: right.min(viewport_width),
        }
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.left && x <= self.right
    }
}

// Something on screen that fireworks must not be drawn over
pub trait ExclusionZone {
    fn forbidden_range(&self, viewport_width: f64) -> Option<XRange>;
}

impl<F> ExclusionZone for F
where
    F: Fn(f64) -> Option<XRange>,
{
    fn forbidden_range(&self, viewport_width: f64) -> Option<XRange> {
        self(viewport_width)
    }
}

pub struct NoExclusion;

impl ExclusionZone for NoExclusion {
    fn forbidden_range(&self, _viewport_width: f64) -> Option<XRange> {
        None
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpawnBand {
    pub side: Side,
    pub min_x: f64,
    pub max_x: f64,
}

impl SpawnBand {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }
}

fn band_for(side: Side, width: f64, forbid: Option<XRange>, config: &SideFireworksConfig) -> SpawnBand {
    let margin = config.edge_margin;
    let mut min_x = margin;
    let mut max_x = width - margin;
    if let Some(range) = forbid {
        match side {
            Side::Left => max_x = margin.max(range.left - config.gap),
            Side::Right => min_x = (width - margin).min(range.right + config.gap),
        }
    }
    SpawnBand { side, min_x, max_x }
}

// Falls back to the other side when the preferred one is narrower than
// `min_band`, even if that one is narrow too
pub fn choose_band(
    preferred: Side,
    width: f64,
    forbid: Option<XRange>,
    config: &SideFireworksConfig,
) -> SpawnBand {
    let band = band_for(preferred, width, forbid, config);
    if band.width() < config.min_band {
        band_for(preferred.opposite(), width, forbid, config)
    } else {
        band
    }
}
