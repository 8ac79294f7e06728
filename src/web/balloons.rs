// Floating balloons and the headline entrance. Both are tweened by the gsap
// global the page loads; without it the balloons are still placed, just still.

use super::report;
use crate::color::{palette_color, Color, BALLOON_PALETTE};
use js_sys::{Object, Reflect};
use rand::{Rng, RngCore};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = gsap, js_name = to)]
    fn tween_to(target: &JsValue, vars: &Object) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = from)]
    fn tween_from(target: &JsValue, vars: &Object) -> Result<JsValue, JsValue>;
}

// selector, rise in px, duration, delay, stagger
const ENTRANCE: [(&str, f64, f64, f64, Option<f64>); 3] = [
    (".headline", 20.0, 0.9, 0.0, None),
    (".subtitle", 20.0, 0.9, 0.1, None),
    (".cta .button", 16.0, 0.8, 0.15, Some(0.06)),
];

// Sizes in px, timings in seconds
#[derive(Clone, Debug, PartialEq)]
pub struct Balloon {
    pub size: f64,
    pub left_pct: f64,
    pub bottom: f64,
    pub drift_x: f64,
    pub duration: f64,
    pub delay: f64,
    pub color: Color,
}

impl Balloon {
    pub fn random(index: usize, rng: &mut dyn RngCore) -> Balloon {
        Balloon {
            size: 40.0 + rng.gen::<f64>() * 40.0,
            left_pct: rng.gen::<f64>() * 100.0,
            bottom: -(60.0 + rng.gen::<f64>() * 100.0),
            drift_x: (index as f64).sin() * 40.0 + (rng.gen::<f64>() * 60.0 - 30.0),
            duration: 10.0 + rng.gen::<f64>() * 8.0,
            delay: rng.gen::<f64>() * 6.0,
            color: palette_color(&BALLOON_PALETTE, index),
        }
    }

    fn apply(&self, element: &HtmlElement) -> Result<(), JsValue> {
        let style = element.style();
        style.set_property("width", &format!("{}px", self.size))?;
        style.set_property("height", &format!("{}px", self.size * 1.2))?;
        style.set_property("left", &format!("{}%", self.left_pct))?;
        style.set_property("bottom", &format!("{}px", self.bottom))?;
        style.set_property("position", "absolute")?;
        style.set_property("background", &self.color.to_css())?;
        style.set_property("border-radius", "50% 50% 45% 55% / 55% 60% 40% 45%")?;
        style.set_property("filter", "blur(0.2px)")?;
        style.set_property("opacity", "0.8")
    }
}

fn has_gsap() -> bool {
    Reflect::has(&js_sys::global(), &JsValue::from_str("gsap")).unwrap_or(false)
}

fn vars(entries: &[(&str, JsValue)]) -> Result<Object, JsValue> {
    let vars = Object::new();
    for (key, value) in entries {
        Reflect::set(&vars, &JsValue::from_str(key), value)?;
    }
    Ok(vars)
}

// Replaces whatever the container held with `count` balloons rising forever
pub fn create_balloons(window: &Window, document: &Document, selector: &str, count: usize) -> Result<(), JsValue> {
    let container = match document.query_selector(selector)? {
        Some(container) => container,
        None => return Ok(()),
    };
    container.set_inner_html("");

    let tweened = has_gsap();
    if !tweened {
        log!("gsap not loaded, balloons stay put");
    }
    let rise = window.inner_height()?.as_f64().unwrap_or(0.0) + 200.0;
    let mut rng = rand::thread_rng();
    for i in 0..count {
        let balloon = Balloon::random(i, &mut rng);
        let element = document.create_element("div")?.dyn_into::<HtmlElement>()?;
        element.set_class_name("balloon");
        balloon.apply(&element)?;
        container.append_child(&element)?;

        if tweened {
            let float = vars(&[
                ("y", JsValue::from_f64(-rise)),
                ("x", JsValue::from_f64(balloon.drift_x)),
                ("duration", JsValue::from_f64(balloon.duration)),
                ("repeat", JsValue::from_f64(-1.0)),
                ("delay", JsValue::from_f64(balloon.delay)),
                ("ease", JsValue::from_str("sine.inOut")),
            ])?;
            report("balloon tween", tween_to(&element, &float).map(|_| ()));
        }
    }
    Ok(())
}

pub fn animate_entrance() -> Result<(), JsValue> {
    if !has_gsap() {
        log!("gsap not loaded, skipping the entrance");
        return Ok(());
    }
    for &(selector, rise, duration, delay, stagger) in ENTRANCE.iter() {
        let mut entries = vec![
            ("y", JsValue::from_f64(rise)),
            ("opacity", JsValue::from_f64(0.0)),
            ("duration", JsValue::from_f64(duration)),
            ("ease", JsValue::from_str("power3.out")),
            ("delay", JsValue::from_f64(delay)),
        ];
        if let Some(stagger) = stagger {
            entries.push(("stagger", JsValue::from_f64(stagger)));
        }
        tween_from(&JsValue::from_str(selector), &vars(&entries)?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn balloons_cycle_the_palette() {
        let mut rng = StdRng::seed_from_u64(11);
        let colors: Vec<Color> = (0..7).map(|i| Balloon::random(i, &mut rng).color).collect();
        assert_eq!(colors[0], BALLOON_PALETTE[0]);
        assert_eq!(colors[4], BALLOON_PALETTE[4]);
        assert_eq!(colors[5], BALLOON_PALETTE[0]);
        assert_eq!(colors[6], BALLOON_PALETTE[1]);
    }

    #[test]
    fn balloons_start_below_the_fold() {
        let mut rng = StdRng::seed_from_u64(11);
        for i in 0..50 {
            let b = Balloon::random(i, &mut rng);
            assert!(b.size >= 40.0 && b.size < 80.0);
            assert!(b.left_pct >= 0.0 && b.left_pct < 100.0);
            assert!(b.bottom <= -60.0 && b.bottom > -160.0);
            assert!(b.drift_x.abs() <= 70.0);
            assert!(b.duration >= 10.0 && b.duration < 18.0);
            assert!(b.delay >= 0.0 && b.delay < 6.0);
        }
    }

    #[test]
    fn only_the_buttons_stagger_in() {
        let staggered: Vec<&str> = ENTRANCE
            .iter()
            .filter(|step| step.4.is_some())
            .map(|step| step.0)
            .collect();
        assert_eq!(staggered, vec![".cta .button"]);
    }
}
