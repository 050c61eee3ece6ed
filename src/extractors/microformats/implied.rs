//! Implied name, photo and url for roots that never declared them.

use scraper::ElementRef;
use url::Url;

use crate::extractors::common::{html_utils, url_utils};
use crate::types::microformats::{MicroformatItem, PropertyValue};

/// Fill in implied properties on a finished root.
///
/// Callers must not invoke this when the root contains a nested
/// microformat root; implied values would leak nested content.
pub(super) fn apply(item: &mut MicroformatItem, root: &ElementRef, base: Option<&Url>) {
    if !item.has_property("name") {
        if let Some(name) = implied_name(root) {
            item.add_property("name", PropertyValue::Text(name));
        }
    }
    if !item.has_property("photo") {
        if let Some(photo) = implied_photo(root) {
            item.add_property("photo", PropertyValue::Text(url_utils::resolve(base, &photo)));
        }
    }
    if !item.has_property("url") {
        if let Some(url) = implied_url(root) {
            item.add_property("url", PropertyValue::Text(url_utils::resolve(base, &url)));
        }
    }
}

/// `img[alt]` / `area[alt]` / `abbr[title]` on the root, its only child,
/// or its only grandchild; the root's text content otherwise.
fn implied_name(root: &ElementRef) -> Option<String> {
    if let Some(name) = name_attr(root) {
        return Some(name);
    }
    if let Some(child) = only_child(root) {
        if let Some(name) = name_attr(&child) {
            return Some(name);
        }
        if let Some(grandchild) = only_child(&child) {
            if let Some(name) = name_attr(&grandchild) {
                return Some(name);
            }
        }
    }

    let text = html_utils::collapsed_text(root);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn name_attr(element: &ElementRef) -> Option<String> {
    let attr = match element.value().name() {
        "img" | "area" => "alt",
        "abbr" => "title",
        _ => return None,
    };
    html_utils::get_attr_nonempty(element, attr)
}

/// `img[src]` / `object[data]` on the root, or exactly one such element
/// among its children, possibly one intermediate element down.
fn implied_photo(root: &ElementRef) -> Option<String> {
    if let Some(src) = photo_attr(root) {
        return Some(src);
    }
    if let Some(src) = sole_match(root, photo_attr) {
        return Some(src);
    }
    if let Some(child) = only_child(root) {
        if let Some(src) = sole_match(&child, photo_attr) {
            return Some(src);
        }
    }
    None
}

fn photo_attr(element: &ElementRef) -> Option<String> {
    match element.value().name() {
        "img" => html_utils::get_attr_nonempty(element, "src"),
        "object" => html_utils::get_attr_nonempty(element, "data"),
        _ => None,
    }
}

/// `a[href]` / `area[href]` on the root, or exactly one such child.
fn implied_url(root: &ElementRef) -> Option<String> {
    if let Some(href) = url_attr(root) {
        return Some(href);
    }
    sole_match(root, url_attr)
}

fn url_attr(element: &ElementRef) -> Option<String> {
    match element.value().name() {
        "a" | "area" => html_utils::get_attr_nonempty(element, "href"),
        _ => return None,
    }
}

/// The root's single element child, if it has exactly one.
fn only_child<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    let mut children = element.children().filter_map(ElementRef::wrap);
    let first = children.next()?;
    if children.next().is_some() {
        None
    } else {
        Some(first)
    }
}

/// The value of exactly one matching direct child; `None` when zero or
/// several children match.
fn sole_match(
    element: &ElementRef,
    matcher: impl Fn(&ElementRef) -> Option<String>,
) -> Option<String> {
    let mut matches = element
        .children()
        .filter_map(ElementRef::wrap)
        .filter_map(|child| matcher(&child));
    let first = matches.next()?;
    if matches.next().is_some() {
        None
    } else {
        Some(first)
    }
}
