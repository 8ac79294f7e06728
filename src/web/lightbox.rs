// Modal viewer for photos, videos and the greeting card text

use super::{listen, report};
use crate::config::PageConfig;
use crate::exclusion::{ExclusionZone, XRange};
use crate::message::{MediaKind, MessageBody};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlImageElement, HtmlMediaElement,
    HtmlVideoElement, KeyboardEvent,
};

const SHOWN: &str = "show";

pub struct Lightbox {
    document: Document,
    root: Element,
    content: Element,
    close: Option<Element>,
    title: &'static str,
    photo_alt: &'static str,
}

impl Lightbox {
    pub fn find(document: &Document, config: &PageConfig) -> Result<Option<Lightbox>, JsValue> {
        let root = match document.query_selector(config.lightbox)? {
            Some(root) => root,
            None => return Ok(None),
        };
        let content = match root.query_selector(config.lightbox_content)? {
            Some(content) => content,
            None => return Ok(None),
        };
        let close = root.query_selector(config.lightbox_close)?;
        Ok(Some(Lightbox {
            document: document.clone(),
            root,
            content,
            close,
            title: config.message_title,
            photo_alt: config.photo_alt,
        }))
    }

    pub fn is_shown(&self) -> bool {
        self.root.class_list().contains(SHOWN)
    }

    pub fn open_media(&self, kind: MediaKind, src: &str) -> Result<(), JsValue> {
        self.clear();
        match kind {
            MediaKind::Video => {
                let video = self
                    .document
                    .create_element("video")?
                    .dyn_into::<HtmlVideoElement>()?;
                video.set_src(src);
                video.set_controls(true);
                video.set_autoplay(true);
                video.set_loop(true);
                video.set_attribute("playsinline", "")?;
                video.style().set_property("background", "#000")?;
                self.content.append_child(&video)?;
            }
            MediaKind::Photo => {
                let img = self
                    .document
                    .create_element("img")?
                    .dyn_into::<HtmlImageElement>()?;
                img.set_src(src);
                img.set_alt(self.photo_alt);
                self.content.append_child(&img)?;
            }
        }
        self.show()
    }

    pub fn open_message(&self, body: &MessageBody) -> Result<(), JsValue> {
        self.clear();
        let wrapper = self.document.create_element("div")?;
        wrapper.set_class_name("lightbox-text");
        match body {
            MessageBody::Html(markup) => {
                wrapper.set_inner_html(&format!("<h3>{}</h3>{}", self.title, markup));
            }
            MessageBody::Text(text) => {
                let title = self.document.create_element("h3")?;
                title.set_text_content(Some(self.title));
                let paragraph = self.document.create_element("p")?;
                paragraph.set_text_content(Some(text.as_str()));
                wrapper.append_child(&title)?;
                wrapper.append_child(&paragraph)?;
            }
        }
        self.content.append_child(&wrapper)?;
        self.show()
    }

    pub fn show(&self) -> Result<(), JsValue> {
        self.root.class_list().add_1(SHOWN)?;
        self.set_body_overflow("hidden")
    }

    // Also stops and rewinds a playing video
    pub fn hide(&self) -> Result<(), JsValue> {
        self.root.class_list().remove_1(SHOWN)?;
        self.set_body_overflow("")?;
        if let Some(video) = self.root.query_selector("video")? {
            let video = video.dyn_into::<HtmlMediaElement>()?;
            video.pause()?;
            video.set_current_time(0.0);
        }
        Ok(())
    }

    pub fn bind_close(self: &Rc<Self>) -> Result<(), JsValue> {
        if let Some(close) = &self.close {
            let lightbox = Rc::clone(self);
            listen(close, "click", move |_| report("lightbox hide", lightbox.hide()))?;
        }

        let lightbox = Rc::clone(self);
        listen(&self.root, "click", move |event| {
            let backdrop: &JsValue = lightbox.root.as_ref();
            let on_backdrop = event
                .target()
                .map_or(false, |target| JsValue::from(target) == *backdrop);
            if on_backdrop {
                report("lightbox hide", lightbox.hide());
            }
        })?;

        let lightbox = Rc::clone(self);
        listen(&self.document, "keydown", move |event| {
            let escape = event
                .dyn_ref::<KeyboardEvent>()
                .map_or(false, |key| key.key() == "Escape");
            if escape && lightbox.is_shown() {
                report("lightbox hide", lightbox.hide());
            }
        })
    }

    // Remove everything but the buttons (the close control lives in here)
    fn clear(&self) {
        let children = self.content.children();
        for i in (0..children.length()).rev() {
            if let Some(child) = children.item(i) {
                if child.dyn_ref::<HtmlButtonElement>().is_none() {
                    child.remove();
                }
            }
        }
    }

    fn set_body_overflow(&self, value: &str) -> Result<(), JsValue> {
        match self.document.body() {
            Some(body) => body.style().set_property("overflow", value),
            None => Ok(()),
        }
    }
}

impl ExclusionZone for Lightbox {
    fn forbidden_range(&self, viewport_width: f64) -> Option<XRange> {
        if !self.is_shown() {
            return None;
        }
        let rect = self.content.get_bounding_client_rect();
        Some(XRange::clamped(rect.left(), rect.right(), viewport_width))
    }
}
