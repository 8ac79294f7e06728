// Drives the animator from requestAnimationFrame on the page's effects canvas

use super::CanvasSurface;
use crate::animator::{Animator, Clock};
use crate::config::{EffectsConfig, PageConfig};
use crate::exclusion::{ExclusionZone, NoExclusion};
use crate::surface::Surface;
use crate::utils::Timer;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Performance, Window};

pub struct PerformanceClock {
    performance: Option<Performance>,
}

impl PerformanceClock {
    pub fn new(window: &Window) -> Self {
        PerformanceClock {
            performance: window.performance(),
        }
    }
}

impl Clock for PerformanceClock {
    fn now(&self) -> f64 {
        match &self.performance {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        }
    }
}

type StepClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct Host {
    animator: Animator,
    surface: CanvasSurface,
    window: Window,
    frame_id: Option<i32>,
}

impl Host {
    fn viewport(&self) -> (f64, f64) {
        let dimension = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (
            dimension(self.window.inner_width()),
            dimension(self.window.inner_height()),
        )
    }

    fn request_frame(&mut self, step: &StepClosure) {
        let step = step.borrow();
        let callback = match step.as_ref() {
            Some(callback) => callback,
            None => return,
        };
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => self.frame_id = Some(id),
            Err(err) => {
                log!("requestAnimationFrame failed: {:?}", err);
                self.frame_id = None;
                self.animator.mark_idle();
            }
        }
    }

    fn stop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

// Confetti and fireworks over the page, sharing one canvas and one frame
// loop. Starting more while effects run just adds to them.
#[wasm_bindgen]
pub struct Effects {
    host: Option<Rc<RefCell<Host>>>,
    step: StepClosure,
    zone: Rc<dyn ExclusionZone>,
}

#[wasm_bindgen]
impl Effects {
    // Side-fireworks keep clear of the lightbox when the page has one
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Effects, JsValue> {
        let config = PageConfig::default();
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = super::query::<HtmlCanvasElement>(&document, config.canvas)?;
        let zone: Rc<dyn ExclusionZone> = match super::Lightbox::find(&document, &config)? {
            Some(lightbox) => Rc::new(lightbox),
            None => Rc::new(NoExclusion),
        };
        Ok(Effects::attach(window, canvas, zone, EffectsConfig::default()))
    }

    // Omitted arguments use the `EffectsConfig` defaults
    pub fn start_confetti(&self, count: Option<usize>) {
        self.start(|animator| animator.start_confetti(count));
    }

    pub fn start_fireworks(&self, bursts: Option<usize>) {
        self.start(|animator| animator.start_fireworks(bursts));
    }

    pub fn start_side_fireworks(&self, duration_ms: Option<f64>, interval_ms: Option<f64>) {
        let zone = Rc::clone(&self.zone);
        self.start(move |animator| animator.start_side_fireworks(duration_ms, interval_ms, zone));
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.host
            .as_ref()
            .map_or(false, |host| host.borrow().animator.is_scheduled())
    }

    pub fn fit_to_viewport(&self) {
        if let Some(host) = &self.host {
            let mut host = host.borrow_mut();
            let (width, height) = host.viewport();
            host.surface.resize(width, height);
        }
    }
}

impl Effects {
    // Without a usable canvas every start function is a no-op
    pub fn attach(
        window: Window,
        canvas: Option<HtmlCanvasElement>,
        zone: Rc<dyn ExclusionZone>,
        config: EffectsConfig,
    ) -> Effects {
        let step: StepClosure = Rc::new(RefCell::new(None));
        let surface = match canvas.map(CanvasSurface::new) {
            Some(Ok(surface)) => surface,
            Some(Err(err)) => {
                log!("effects canvas unusable: {:?}", err);
                return Effects { host: None, step, zone };
            }
            None => {
                log!("effects canvas not found");
                return Effects { host: None, step, zone };
            }
        };

        let clock = PerformanceClock::new(&window);
        let animator = Animator::new(Box::new(clock), Box::new(rand::thread_rng()), config);
        let host = Rc::new(RefCell::new(Host {
            animator,
            surface,
            window,
            frame_id: None,
        }));

        let weak_host = Rc::downgrade(&host);
        let weak_step = Rc::downgrade(&step);
        *step.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            run_frame(&weak_host, &weak_step);
        }) as Box<dyn FnMut()>));

        Effects {
            host: Some(host),
            step,
            zone,
        }
    }

    pub fn canvas(&self) -> Option<HtmlCanvasElement> {
        self.host
            .as_ref()
            .map(|host| host.borrow().surface.canvas().clone())
    }

    fn start(&self, start: impl FnOnce(&mut Animator) -> bool) {
        let host = match &self.host {
            Some(host) => host,
            None => return,
        };
        let mut host = host.borrow_mut();
        if start(&mut host.animator) {
            host.request_frame(&self.step);
        }
    }
}

impl Drop for Effects {
    fn drop(&mut self) {
        if let Some(host) = &self.host {
            host.borrow_mut().stop();
        }
    }
}

fn run_frame(host: &Weak<RefCell<Host>>, step: &Weak<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let (host, step) = match (host.upgrade(), step.upgrade()) {
        (Some(host), Some(step)) => (host, step),
        _ => return,
    };
    let mut host = host.borrow_mut();
    let _timer = if host.animator.config().profile_frames {
        Some(Timer::new("Effects::frame"))
    } else {
        None
    };

    let (width, height) = host.viewport();
    let Host {
        animator, surface, ..
    } = &mut *host;
    if animator.frame(surface, width, height) {
        host.request_frame(&step);
    } else {
        host.stop();
    }
}
