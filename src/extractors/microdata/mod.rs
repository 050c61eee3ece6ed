//! HTML5 Microdata extraction.
//!
//! Walks the `itemscope` tree: each top-level scope becomes an item, each
//! `itemprop` descendant a property, and each nested scope a nested item.
//! `itemref` pulls additional subtrees in by id, with revisit protection
//! so reference cycles terminate.

use std::collections::{HashMap, HashSet};

use ego_tree::iter::Edge;
use ego_tree::NodeId;
use scraper::{ElementRef, Html};
use url::Url;

use crate::errors::Result;
use crate::extractors::common::{html_utils, url_utils};
use crate::types::microdata::MicrodataItem;

#[cfg(test)]
mod tests;

/// Extract all microdata items from HTML.
///
/// # Arguments
/// * `html` - The HTML content
/// * `base_url` - Optional base URL for resolving relative URLs
pub fn extract(html: &str, base_url: Option<&str>) -> Result<Vec<MicrodataItem>> {
    let document = html_utils::parse_document(html);
    let base = url_utils::parse_base(base_url);
    Ok(from_document(&document, base.as_ref()))
}

/// Extract microdata items from an already-parsed document.
pub(crate) fn from_document(document: &Html, base: Option<&Url>) -> Vec<MicrodataItem> {
    let mut items = Vec::new();

    let Ok(scope_selector) = html_utils::selector("[itemscope]") else {
        return items;
    };

    // id → element map for itemref resolution, first declaration wins
    let mut ids: HashMap<String, ElementRef> = HashMap::new();
    if let Ok(id_selector) = html_utils::selector("[id]") {
        for element in document.select(&id_selector) {
            if let Some(id) = element.value().attr("id") {
                ids.entry(id.to_string()).or_insert(element);
            }
        }
    }

    for element in document.select(&scope_selector) {
        if is_top_level_scope(&element) {
            let mut path = Vec::new();
            items.push(extract_item(&element, base, &ids, &mut path));
        }
    }

    items
}

/// A scope is nested (not top-level) when it names a property of an
/// enclosing scope: it carries `itemprop` and has an `itemscope` ancestor.
fn is_top_level_scope(element: &ElementRef) -> bool {
    if element.value().attr("itemprop").is_none() {
        return true;
    }
    !element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().attr("itemscope").is_some())
}

/// Build one item from its scope element.
///
/// `path` holds the scope elements currently under construction; a nested
/// scope already on the path (reachable through an itemref cycle) is not
/// re-expanded.
fn extract_item(
    element: &ElementRef,
    base: Option<&Url>,
    ids: &HashMap<String, ElementRef>,
    path: &mut Vec<NodeId>,
) -> MicrodataItem {
    let mut item = MicrodataItem::default();
    path.push(element.id());

    if let Some(itemtype) = element.value().attr("itemtype") {
        item.item_type = itemtype.split_whitespace().map(String::from).collect();
    }
    if let Some(itemid) = element.value().attr("itemid") {
        let itemid = itemid.trim();
        if !itemid.is_empty() {
            item.id = Some(itemid.to_string());
        }
    }

    // The scope's own subtree, then any itemref-ed subtrees
    let mut roots: Vec<ElementRef> = vec![*element];
    if let Some(itemref) = element.value().attr("itemref") {
        for id in itemref.split_whitespace() {
            if let Some(referenced) = ids.get(id) {
                if roots.iter().all(|r| r.id() != referenced.id()) {
                    roots.push(*referenced);
                }
            }
        }
    }

    // Elements already consumed for this item; itemref-ed subtrees overlap
    // when a reference points inside the scope itself.
    let mut seen: HashSet<NodeId> = HashSet::new();

    for root in &roots {
        collect_properties(&mut item, root, base, ids, path, &mut seen);
    }

    path.pop();
    item
}

/// Scan one subtree for `itemprop` elements belonging to the current scope,
/// without descending into nested scopes for their properties.
fn collect_properties(
    item: &mut MicrodataItem,
    root: &ElementRef,
    base: Option<&Url>,
    ids: &HashMap<String, ElementRef>,
    path: &mut Vec<NodeId>,
    seen: &mut HashSet<NodeId>,
) {
    let root_id = root.id();
    let mut nested_depth: usize = 0;

    for edge in root.traverse() {
        match edge {
            Edge::Open(node) => {
                let Some(element) = ElementRef::wrap(node) else {
                    continue;
                };
                if node.id() == root_id {
                    continue;
                }

                if element.value().attr("itemscope").is_some() {
                    // A nested scope: its subtree is its own; the scope
                    // itself becomes a value of this item's properties.
                    if nested_depth == 0 && seen.insert(node.id()) {
                        if let Some(names) = element.value().attr("itemprop") {
                            if !path.contains(&node.id()) {
                                let nested = extract_item(&element, base, ids, path);
                                for name in names.split_whitespace() {
                                    item.add_item(name, nested.clone());
                                }
                            }
                        }
                    }
                    nested_depth += 1;
                    continue;
                }
                if nested_depth > 0 {
                    continue;
                }

                if let Some(names) = element.value().attr("itemprop") {
                    if seen.insert(node.id()) {
                        if let Some(value) = property_value(&element, base) {
                            for name in names.split_whitespace() {
                                item.add_text(name, value.clone());
                            }
                        }
                    }
                }
            }
            Edge::Close(node) => {
                if node.id() != root_id {
                    if let Some(element) = ElementRef::wrap(node) {
                        if element.value().attr("itemscope").is_some() {
                            nested_depth = nested_depth.saturating_sub(1);
                        }
                    }
                }
            }
        }
    }
}

/// The value of a non-scope property element, chosen by tag.
fn property_value(element: &ElementRef, base: Option<&Url>) -> Option<String> {
    let attr = |name: &str| element.value().attr(name).map(String::from);
    let resolved = |value: String| url_utils::resolve(base, &value);

    let value = match element.value().name() {
        "meta" => attr("content"),
        "audio" | "embed" | "iframe" | "img" | "source" | "track" | "video" => {
            attr("src").map(resolved)
        }
        "a" | "area" | "link" => attr("href").map(resolved),
        "object" => attr("data").map(resolved),
        "data" | "meter" => attr("value"),
        "time" => attr("datetime").or_else(|| Some(html_utils::collapsed_text(element))),
        _ => Some(html_utils::collapsed_text(element)),
    }?;

    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
