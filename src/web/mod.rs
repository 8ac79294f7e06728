// Browser glue

mod balloons;
mod canvas;
mod effects;
mod lightbox;
mod music;
mod page;

pub use balloons::{animate_entrance, create_balloons, Balloon};
pub use canvas::CanvasSurface;
pub use effects::{Effects, PerformanceClock};
pub use lightbox::Lightbox;
pub use music::Music;
pub use page::mount;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget};

// Listener for the lifetime of the page
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub(crate) fn query<T: JsCast>(document: &Document, selector: &str) -> Result<Option<T>, JsValue> {
    Ok(document
        .query_selector(selector)?
        .and_then(|element| element.dyn_into::<T>().ok()))
}

pub(crate) fn report(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log!("{}: {:?}", context, err);
    }
}
