// Tuning constants for the effects and the page wiring. The defaults match
// the shipped greeting page.

use crate::color::{Color, CONFETTI_PALETTE, FIREWORKS_PALETTE};

#[derive(Clone, Debug)]
pub struct ConfettiConfig {
    pub count: usize,
    pub start_y: f64,
    pub gravity: f64,
    pub bottom_margin: f64,
    pub max_life_min: f64,
    pub max_life_spread: f64,
    pub palette: Vec<Color>,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        ConfettiConfig {
            count: 160,
            start_y: -10.0,
            gravity: 0.05,
            bottom_margin: 50.0,
            max_life_min: 260.0,
            max_life_spread: 120.0,
            palette: CONFETTI_PALETTE.to_vec(),
        }
    }
}

// Random attributes are `min + r * spread` with r in [0, 1), drag is
// `drag_max - r * drag_spread`
#[derive(Clone, Debug)]
pub struct BurstConfig {
    pub sparks: usize,
    pub speed_min: f64,
    pub speed_spread: f64,
    pub angle_jitter: f64,
    pub drag_max: f64,
    pub drag_spread: f64,
    pub gravity: f64,
    pub size_min: f64,
    pub size_spread: f64,
    pub decay_min: f64,
    pub decay_spread: f64,
    pub alpha_floor: f64,
    // (offset, spread) as fractions of the viewport height
    pub center_y: (f64, f64),
    pub palette: Vec<Color>,
}

impl Default for BurstConfig {
    fn default() -> Self {
        BurstConfig {
            sparks: 48,
            speed_min: 2.0,
            speed_spread: 3.5,
            angle_jitter: 0.2,
            drag_max: 0.99,
            drag_spread: 0.02,
            gravity: 0.03,
            size_min: 2.0,
            size_spread: 2.0,
            decay_min: 0.008,
            decay_spread: 0.01,
            // Sparks stay near opaque until removed. Kept as shipped.
            alpha_floor: 0.9,
            center_y: (0.15, 0.5),
            palette: FIREWORKS_PALETTE.to_vec(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FireworksConfig {
    pub bursts: usize,
    pub spacing_ms: f64,
    // fractions of the viewport width
    pub center_x: (f64, f64),
    pub min_frames: u32,
    pub burst: BurstConfig,
}

impl Default for FireworksConfig {
    fn default() -> Self {
        FireworksConfig {
            bursts: 6,
            spacing_ms: 220.0,
            center_x: (0.1, 0.8),
            min_frames: 120,
            burst: BurstConfig::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SideFireworksConfig {
    pub duration_ms: f64,
    pub interval_ms: f64,
    pub edge_margin: f64,
    pub gap: f64,
    pub min_band: f64,
    pub burst: BurstConfig,
}

impl Default for SideFireworksConfig {
    fn default() -> Self {
        SideFireworksConfig {
            duration_ms: 25_000.0,
            interval_ms: 280.0,
            edge_margin: 20.0,
            gap: 40.0,
            min_band: 60.0,
            burst: BurstConfig {
                sparks: 50,
                speed_spread: 3.8,
                angle_jitter: 0.25,
                size_spread: 2.2,
                alpha_floor: 0.0,
                center_y: (0.1, 0.45),
                ..BurstConfig::default()
            },
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct EffectsConfig {
    pub confetti: ConfettiConfig,
    pub fireworks: FireworksConfig,
    pub side_fireworks: SideFireworksConfig,
    // console.time around every frame
    pub profile_frames: bool,
}

#[derive(Clone, Debug)]
pub struct PageConfig {
    pub canvas: &'static str,
    pub theme_toggle: &'static str,
    pub music_toggle: &'static str,
    pub confetti_button: &'static str,
    pub music: &'static str,
    pub lightbox: &'static str,
    pub lightbox_content: &'static str,
    pub lightbox_close: &'static str,
    pub message_card_button: &'static str,
    pub card_message: &'static str,
    pub placeholders: &'static str,
    pub balloons: &'static str,
    pub message_title: &'static str,
    pub message_fallback: &'static str,
    pub photo_alt: &'static str,
    pub balloon_count: usize,
    pub volume: f64,
    pub autoplay_retry_ms: [i32; 3],
    pub burst_confetti: usize,
    pub burst_fireworks: usize,
    pub card_confetti: usize,
    pub card_side_duration_ms: f64,
    pub card_side_interval_ms: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            canvas: "#confetti-canvas",
            theme_toggle: "#themeToggle",
            music_toggle: "#musicToggle",
            confetti_button: "#confettiBtn",
            music: "#bgMusic",
            lightbox: "#lightbox",
            lightbox_content: ".lightbox-content",
            lightbox_close: ".lightbox-close",
            message_card_button: "#openMessageCard",
            card_message: "#cardMessage",
            placeholders: ".placeholder",
            balloons: ".balloons",
            message_title: "Дорогая Анжела!",
            message_fallback: "С Днём Рождения! Пусть исполняются мечты и улыбается сердце.",
            photo_alt: "Фото",
            balloon_count: 12,
            volume: 0.6,
            autoplay_retry_ms: [100, 500, 1000],
            burst_confetti: 180,
            burst_fireworks: 6,
            card_confetti: 220,
            card_side_duration_ms: 20_000.0,
            card_side_interval_ms: 300.0,
        }
    }
}
