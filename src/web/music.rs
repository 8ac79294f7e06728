// Background music: a play/pause toggle and the autoplay unlock dance.
//
// Browsers block audio until the user interacts with the page, so playback is
// retried a few times after load, on the first interaction of any kind, and
// when the tab becomes visible. The first success wins and the unlock
// listeners are removed.

use super::{listen, report};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlAudioElement, VisibilityState, Window};

const UNLOCK_DOCUMENT_EVENTS: [&str; 6] = [
    "touchstart",
    "touchend",
    "touchmove",
    "click",
    "pointerdown",
    "pointerup",
];
const UNLOCK_WINDOW_EVENTS: [&str; 3] = ["touchstart", "click", "scroll"];
const UNLOCK_BODY_EVENTS: [&str; 2] = ["touchstart", "click"];

pub fn icon(paused: bool) -> &'static str {
    if paused {
        "🔈"
    } else {
        "🔊"
    }
}

// Touch and scroll listeners never call preventDefault
fn is_passive(event: &str) -> bool {
    event.starts_with("touch") || event == "scroll"
}

type UnlockClosure = Closure<dyn FnMut(Event)>;

pub struct Music {
    audio: HtmlAudioElement,
    toggle: Option<Element>,
    volume: f64,
    started: Cell<bool>,
    unlock: RefCell<Option<UnlockClosure>>,
    unlock_targets: RefCell<Vec<(EventTarget, &'static str)>>,
}

impl Music {
    pub fn new(audio: HtmlAudioElement, toggle: Option<Element>, volume: f64) -> Rc<Music> {
        Rc::new(Music {
            audio,
            toggle,
            volume,
            started: Cell::new(false),
            unlock: RefCell::new(None),
            unlock_targets: RefCell::new(Vec::new()),
        })
    }

    pub fn is_paused(&self) -> bool {
        self.audio.paused()
    }

    pub fn update_icon(&self) {
        if let Some(toggle) = &self.toggle {
            toggle.set_text_content(Some(icon(self.is_paused())));
        }
    }

    pub fn toggle(self: &Rc<Self>) {
        if self.is_paused() {
            self.audio.set_volume(self.volume);
            self.attempt_play(|_| {});
        } else {
            report("music pause", self.audio.pause());
        }
        self.update_icon();
    }

    // `done` gets whether the track is now playing
    pub fn attempt_play(self: &Rc<Self>, done: impl FnOnce(bool) + 'static) {
        if !self.is_paused() {
            done(true);
            return;
        }
        let promise = match self.audio.play() {
            Ok(promise) => promise,
            Err(err) => {
                log!("music play failed: {:?}", err);
                done(false);
                return;
            }
        };

        let done: Box<dyn FnOnce(bool)> = Box::new(done);
        let done = Rc::new(RefCell::new(Some(done)));
        let settle = move |playing: bool| {
            let done = done.borrow_mut().take();
            if let Some(done) = done {
                done(playing);
            }
        };
        let on_reject = settle.clone();
        let music = Rc::downgrade(self);
        let resolved = Closure::once(move |_: JsValue| {
            if let Some(music) = music.upgrade() {
                music.update_icon();
            }
            settle(true);
        });
        let rejected = Closure::once(move |err: JsValue| {
            log!("music blocked: {:?}", err);
            on_reject(false);
        });
        let _ = promise.then2(&resolved, &rejected);
        // Only one of the two ever runs
        resolved.forget();
        rejected.forget();
    }

    pub fn mount(self: &Rc<Self>, window: &Window, document: &Document, retry_ms: &[i32]) -> Result<(), JsValue> {
        self.audio.set_muted(false);
        self.audio.set_volume(self.volume);
        self.audio.set_loop(true);

        if let Some(toggle) = &self.toggle {
            let music = Rc::clone(self);
            listen(toggle, "click", move |_| music.toggle())?;
        }

        for &delay in retry_ms {
            let music = Rc::downgrade(self);
            let retry = Closure::once_into_js(move || {
                if let Some(music) = music.upgrade() {
                    music.attempt_play(|_| {});
                }
            });
            window.set_timeout_with_callback_and_timeout_and_arguments_0(retry.unchecked_ref(), delay)?;
        }

        self.bind_unlock(window, document)?;

        let music = Rc::downgrade(self);
        let doc = document.clone();
        listen(document, "visibilitychange", move |_| {
            let music = match music.upgrade() {
                Some(music) => music,
                None => return,
            };
            if doc.visibility_state() == VisibilityState::Visible && music.is_paused() && !music.started.get() {
                let unlocked = Rc::downgrade(&music);
                music.attempt_play(move |playing| {
                    if let (true, Some(music)) = (playing, unlocked.upgrade()) {
                        music.started.set(true);
                        music.remove_unlock_listeners();
                    }
                });
            }
        })?;

        for event in &["play", "pause"] {
            let music = Rc::clone(self);
            listen(&self.audio, event, move |_| music.update_icon())?;
        }

        let music = Rc::clone(self);
        listen(&self.audio, "ended", move |_| {
            music.audio.set_current_time(0.0);
            music.attempt_play(|_| {});
        })?;

        self.update_icon();
        Ok(())
    }

    fn bind_unlock(self: &Rc<Self>, window: &Window, document: &Document) -> Result<(), JsValue> {
        let music: Weak<Music> = Rc::downgrade(self);
        let closure: UnlockClosure = Closure::wrap(Box::new(move |_: Event| {
            if let Some(music) = music.upgrade() {
                music.start_once();
            }
        }) as Box<dyn FnMut(Event)>);

        let mut targets: Vec<(EventTarget, &'static str)> = Vec::new();
        let document_target: &EventTarget = document.as_ref();
        targets.extend(UNLOCK_DOCUMENT_EVENTS.iter().map(|&e| (document_target.clone(), e)));
        let window_target: &EventTarget = window.as_ref();
        targets.extend(UNLOCK_WINDOW_EVENTS.iter().map(|&e| (window_target.clone(), e)));
        if let Some(body) = document.body() {
            let body_target: &EventTarget = body.as_ref();
            targets.extend(UNLOCK_BODY_EVENTS.iter().map(|&e| (body_target.clone(), e)));
        }

        for (target, event) in &targets {
            let mut options = AddEventListenerOptions::new();
            #[allow(deprecated)]
            options.once(true).passive(is_passive(event));
            target.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
        }

        *self.unlock.borrow_mut() = Some(closure);
        *self.unlock_targets.borrow_mut() = targets;
        Ok(())
    }

    fn start_once(self: &Rc<Self>) {
        if self.started.replace(true) {
            return;
        }
        self.audio.set_muted(false);
        self.audio.set_volume(self.volume);
        let music = Rc::downgrade(self);
        self.attempt_play(move |_| {
            if let Some(music) = music.upgrade() {
                music.update_icon();
            }
        });
        self.remove_unlock_listeners();
    }

    // The closure itself stays alive: it may be the one running right now
    fn remove_unlock_listeners(&self) {
        let unlock = self.unlock.borrow();
        let callback = match unlock.as_ref() {
            Some(callback) => callback,
            None => return,
        };
        for (target, event) in self.unlock_targets.borrow_mut().drain(..) {
            let _ = target.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_reflects_playback() {
        assert_eq!(icon(true), "🔈");
        assert_eq!(icon(false), "🔊");
    }

    #[test]
    fn touch_and_scroll_listeners_are_passive() {
        assert!(is_passive("touchstart"));
        assert!(is_passive("touchmove"));
        assert!(is_passive("scroll"));
        assert!(!is_passive("click"));
        assert!(!is_passive("pointerdown"));
    }

    #[test]
    fn unlock_covers_every_first_interaction() {
        let total = UNLOCK_DOCUMENT_EVENTS.len() + UNLOCK_WINDOW_EVENTS.len() + UNLOCK_BODY_EVENTS.len();
        assert_eq!(total, 11);
        assert!(UNLOCK_WINDOW_EVENTS.contains(&"scroll"));
    }
}
