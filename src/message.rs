// What the lightbox shows: the greeting card text, or a photo/video

#[derive(Clone, Debug, PartialEq)]
pub enum MessageBody {
    // Author-supplied markup, inserted as is
    Html(String),
    Text(String),
}

// First non-blank of the card markup and the button's data-message, then the fallback
pub fn compose(card_markup: Option<&str>, button_message: Option<&str>, fallback: &str) -> MessageBody {
    let card = card_markup.map(str::trim).unwrap_or("");
    if !card.is_empty() {
        return MessageBody::Html(card.to_owned());
    }
    let button = button_message.map(str::trim).unwrap_or("");
    if !button.is_empty() {
        MessageBody::Text(button.to_owned())
    } else {
        MessageBody::Text(fallback.to_owned())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video,
}

impl MediaKind {
    // Anything but "video" is shown as a photo
    pub fn from_attr(kind: Option<&str>) -> MediaKind {
        match kind {
            Some("video") => MediaKind::Video,
            _ => MediaKind::Photo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "Happy birthday!";

    #[test]
    fn card_markup_wins() {
        let body = compose(Some("  <p>Hi <b>you</b></p>\n"), Some("from button"), FALLBACK);
        assert_eq!(body, MessageBody::Html("<p>Hi <b>you</b></p>".to_owned()));
    }

    #[test]
    fn button_message_when_card_is_blank() {
        let body = compose(Some("   "), Some(" from button "), FALLBACK);
        assert_eq!(body, MessageBody::Text("from button".to_owned()));
    }

    #[test]
    fn fallback_when_nothing_is_set() {
        assert_eq!(compose(None, None, FALLBACK), MessageBody::Text(FALLBACK.to_owned()));
        assert_eq!(compose(None, Some(""), FALLBACK), MessageBody::Text(FALLBACK.to_owned()));
    }

    #[test]
    fn media_kind_defaults_to_photo() {
        assert_eq!(MediaKind::from_attr(Some("video")), MediaKind::Video);
        assert_eq!(MediaKind::from_attr(Some("photo")), MediaKind::Photo);
        assert_eq!(MediaKind::from_attr(Some("gif")), MediaKind::Photo);
        assert_eq!(MediaKind::from_attr(None), MediaKind::Photo);
    }
}
