// Page entry point: starts the decorations and wires the controls to the
// effects, the lightbox and the music player.

use super::{animate_entrance, create_balloons, listen, query, report, Effects, Lightbox, Music};
use crate::config::{EffectsConfig, PageConfig};
use crate::exclusion::{ExclusionZone, NoExclusion};
use crate::message::{self, MediaKind};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAudioElement, HtmlCanvasElement};

#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    let config = PageConfig::default();
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    report("entrance", animate_entrance());
    report(
        "balloons",
        create_balloons(&window, &document, config.balloons, config.balloon_count),
    );

    let lightbox = Lightbox::find(&document, &config)?.map(Rc::new);
    let zone: Rc<dyn ExclusionZone> = match &lightbox {
        Some(lightbox) => Rc::clone(lightbox) as Rc<dyn ExclusionZone>,
        None => Rc::new(NoExclusion),
    };
    let canvas = query::<HtmlCanvasElement>(&document, config.canvas)?;
    let effects = Rc::new(Effects::attach(window.clone(), canvas, zone, EffectsConfig::default()));

    effects.fit_to_viewport();
    {
        let effects = Rc::clone(&effects);
        listen(&window, "resize", move |_| effects.fit_to_viewport())?;
    }

    if let Some(toggle) = document.query_selector(config.theme_toggle)? {
        let doc = document.clone();
        listen(&toggle, "click", move |_| report("theme toggle", toggle_theme(&doc)))?;
    }

    if let Some(button) = document.query_selector(config.confetti_button)? {
        let effects = Rc::clone(&effects);
        let (confetti, fireworks) = (config.burst_confetti, config.burst_fireworks);
        listen(&button, "click", move |_| {
            effects.start_confetti(Some(confetti));
            effects.start_fireworks(Some(fireworks));
        })?;
    }

    if let Some(audio) = query::<HtmlAudioElement>(&document, config.music)? {
        let toggle = document.query_selector(config.music_toggle)?;
        let music = Music::new(audio, toggle, config.volume);
        music.mount(&window, &document, &config.autoplay_retry_ms)?;
    }

    if let Some(lightbox) = lightbox {
        lightbox.bind_close()?;
        bind_placeholders(&document, &config, &lightbox)?;
        bind_message_card(&document, &config, &lightbox, &effects)?;
    }
    Ok(())
}

fn toggle_theme(document: &Document) -> Result<(), JsValue> {
    if let Some(body) = document.body() {
        body.class_list().toggle("light")?;
    }
    Ok(())
}

fn bind_placeholders(document: &Document, config: &PageConfig, lightbox: &Rc<Lightbox>) -> Result<(), JsValue> {
    let placeholders = document.query_selector_all(config.placeholders)?;
    for i in 0..placeholders.length() {
        let element = match placeholders.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            Some(element) => element,
            None => continue,
        };
        let lightbox = Rc::clone(lightbox);
        let target = element.clone();
        listen(&element, "click", move |_| {
            let kind = MediaKind::from_attr(target.get_attribute("data-kind").as_deref());
            let src = target.get_attribute("data-src").unwrap_or_default();
            report("open media", lightbox.open_media(kind, &src));
        })?;
    }
    Ok(())
}

fn bind_message_card(
    document: &Document,
    config: &PageConfig,
    lightbox: &Rc<Lightbox>,
    effects: &Rc<Effects>,
) -> Result<(), JsValue> {
    let button = match document.query_selector(config.message_card_button)? {
        Some(button) => button,
        None => return Ok(()),
    };
    let doc = document.clone();
    let lightbox = Rc::clone(lightbox);
    let effects = Rc::clone(effects);
    let target = button.clone();
    let config = config.clone();
    listen(&button, "click", move |_| {
        let card = doc.query_selector(config.card_message).ok().flatten().map(|card| {
            let markup = card.inner_html();
            if markup.is_empty() {
                card.text_content().unwrap_or_default()
            } else {
                markup
            }
        });
        let button_message = target.get_attribute("data-message");
        let body = message::compose(card.as_deref(), button_message.as_deref(), config.message_fallback);
        report("open message", lightbox.open_message(&body));

        effects.start_confetti(Some(config.card_confetti));
        effects.start_side_fireworks(Some(config.card_side_duration_ms), Some(config.card_side_interval_ms));
    })
}
