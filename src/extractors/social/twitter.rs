//! Twitter Card extractor.
//!
//! Scans `<meta name="twitter:*">` tags. The player and app subtrees nest
//! the same way Open Graph structured properties do.

use scraper::Html;
use url::Url;

use crate::errors::Result;
use crate::extractors::common::{html_utils, url_utils};
use crate::types::social::{OpenGraph, TwitterApp, TwitterCard, TwitterPlayer};

use super::opengraph;

/// Extract Twitter Card metadata from HTML.
///
/// # Arguments
/// * `html` - HTML content to parse
/// * `base_url` - Optional base URL for resolving relative URLs
pub fn extract(html: &str, base_url: Option<&str>) -> Result<TwitterCard> {
    let document = html_utils::parse_document(html);
    let base = url_utils::parse_base(base_url);
    Ok(from_document(&document, base.as_ref()))
}

/// Extract Twitter Card metadata, then fill absent `title`, `description`,
/// `image` and `url` from the page's Open Graph data.
///
/// Fallbacks are scalar projections only; nested Open Graph records are
/// never merged into the card.
pub fn extract_with_fallback(html: &str, base_url: Option<&str>) -> Result<TwitterCard> {
    let document = html_utils::parse_document(html);
    let base = url_utils::parse_base(base_url);
    let card = from_document(&document, base.as_ref());
    let og = opengraph::from_document(&document, base.as_ref());
    Ok(apply_opengraph_fallback(card, &og))
}

/// Extract Twitter Card metadata from an already-parsed document.
pub(crate) fn from_document(document: &Html, base: Option<&Url>) -> TwitterCard {
    let mut card = TwitterCard::default();

    let mut player: Option<TwitterPlayer> = None;
    let mut app: Option<TwitterApp> = None;

    let Ok(selector) = html_utils::selector("meta[name][content]") else {
        return card;
    };

    for element in document.select(&selector) {
        let Some(name) = html_utils::get_attr(&element, "name") else {
            continue;
        };
        let Some(content) = html_utils::get_attr_nonempty(&element, "content") else {
            continue;
        };
        let Some(prop) = name.strip_prefix("twitter:") else {
            continue;
        };

        match prop {
            "card" => set(&mut card.card, content),
            "site" => set(&mut card.site, content),
            "site:id" => set(&mut card.site_id, content),
            "creator" => set(&mut card.creator, content),
            "creator:id" => set(&mut card.creator_id, content),
            "title" => set(&mut card.title, content),
            "description" => set(&mut card.description, content),
            "image" => set(&mut card.image, url_utils::resolve(base, &content)),
            "image:alt" => set(&mut card.image_alt, content),
            "player" => {
                let player = player.get_or_insert_with(Default::default);
                set(&mut player.url, url_utils::resolve(base, &content));
            }
            "player:width" => {
                set(&mut player.get_or_insert_with(Default::default).width, content);
            }
            "player:height" => {
                set(
                    &mut player.get_or_insert_with(Default::default).height,
                    content,
                );
            }
            "player:stream" => {
                let player = player.get_or_insert_with(Default::default);
                set(&mut player.stream, url_utils::resolve(base, &content));
            }
            _ if prop.starts_with("app:") => {
                apply_app_tag(app.get_or_insert_with(Default::default), &prop[4..], content);
            }
            _ => {}
        }
    }

    card.player = player;
    card.app = app;
    card
}

fn apply_app_tag(app: &mut TwitterApp, prop: &str, content: String) {
    match prop {
        "name:iphone" => set(&mut app.name_iphone, content),
        "name:ipad" => set(&mut app.name_ipad, content),
        "name:googleplay" => set(&mut app.name_googleplay, content),
        "id:iphone" => set(&mut app.id_iphone, content),
        "id:ipad" => set(&mut app.id_ipad, content),
        "id:googleplay" => set(&mut app.id_googleplay, content),
        "url:iphone" => set(&mut app.url_iphone, content),
        "url:ipad" => set(&mut app.url_ipad, content),
        "url:googleplay" => set(&mut app.url_googleplay, content),
        "country" => set(&mut app.country, content),
        _ => {}
    }
}

/// Copy scalar Open Graph values into the card's absent slots.
pub(crate) fn apply_opengraph_fallback(mut card: TwitterCard, og: &OpenGraph) -> TwitterCard {
    if card.title.is_none() {
        card.title = og.title.clone();
    }
    if card.description.is_none() {
        card.description = og.description.clone();
    }
    if card.image.is_none() {
        card.image = og.image.first().and_then(|media| media.url.clone());
    }
    if card.url.is_none() {
        card.url = og.url.clone();
    }
    card
}

fn set(slot: &mut Option<String>, content: String) {
    if slot.is_none() {
        *slot = Some(content);
    }
}
