//! The microformats v2 tree walker.
//!
//! A single pass over the DOM's open/close edge stream drives a stack of
//! item frames (one per `h-*` root) and a stack of property scopes, so
//! arbitrarily deep documents never recurse on DOM depth. Implied
//! properties and nested-item linkage happen when a frame closes.

use ego_tree::iter::Edge;
use ego_tree::NodeId;
use scraper::{ElementRef, Html};
use url::Url;

use crate::extractors::common::html_utils;
use crate::types::microformats::{MicroformatItem, PropertyValue};

use super::implied;
use super::properties::{self, Prefix, PropClass};

/// An `h-*` root whose subtree is still being walked.
struct ItemFrame<'a> {
    element: ElementRef<'a>,
    item: MicroformatItem,
    /// Property classes on the root element itself; they name the property
    /// of the enclosing item this root becomes a value of.
    pending_props: Vec<PropClass>,
    /// Height of the scope stack when this frame opened; open scopes below
    /// this index belong to enclosing items.
    scope_floor: usize,
    /// A root was seen somewhere inside this one.
    has_nested_root: bool,
    /// Datetime values already collected, for value-class date inheritance.
    dt_seen: Vec<String>,
}

/// An open property element without a root class of its own.
struct PropScope {
    node: NodeId,
    props: Vec<PropClass>,
    /// A nested root supplied this property's value; skip the default
    /// extraction when the scope closes.
    captured_nested: bool,
}

/// Walk the document and return its top-level microformat items.
pub(super) fn walk(document: &Html, base: Option<&Url>) -> Vec<MicroformatItem> {
    let mut items = Vec::new();
    let mut frames: Vec<ItemFrame> = Vec::new();
    let mut scopes: Vec<PropScope> = Vec::new();

    for edge in document.root_element().traverse() {
        match edge {
            Edge::Open(node) => {
                let Some(element) = ElementRef::wrap(node) else {
                    continue;
                };
                let class = element.value().attr("class").unwrap_or("");

                let root_classes: Vec<String> = class
                    .split_whitespace()
                    .filter(|token| properties::is_root_class(token))
                    .map(String::from)
                    .collect();
                let prop_classes: Vec<PropClass> = if frames.is_empty() {
                    Vec::new()
                } else {
                    class
                        .split_whitespace()
                        .filter_map(properties::parse_prop_class)
                        .collect()
                };

                if !root_classes.is_empty() {
                    for frame in &mut frames {
                        frame.has_nested_root = true;
                    }
                    frames.push(ItemFrame {
                        element,
                        item: new_item(&element, root_classes),
                        pending_props: prop_classes,
                        scope_floor: scopes.len(),
                        has_nested_root: false,
                        dt_seen: Vec::new(),
                    });
                } else if !prop_classes.is_empty() {
                    scopes.push(PropScope {
                        node: node.id(),
                        props: prop_classes,
                        captured_nested: false,
                    });
                }
            }
            Edge::Close(node) => {
                // A property element closing?
                if scopes.last().is_some_and(|scope| scope.node == node.id()) {
                    let Some(scope) = scopes.pop() else { continue };
                    if !scope.captured_nested {
                        if let (Some(element), Some(frame)) =
                            (ElementRef::wrap(node), frames.last_mut())
                        {
                            extract_properties(frame, &element, &scope.props, base);
                        }
                    }
                    continue;
                }

                // A root closing?
                if frames
                    .last()
                    .is_some_and(|frame| frame.element.id() == node.id())
                {
                    if let Some(frame) = frames.pop() {
                        close_frame(frame, &mut frames, &mut scopes, &mut items, base);
                    }
                }
            }
        }
    }

    items
}

fn new_item(element: &ElementRef, root_classes: Vec<String>) -> MicroformatItem {
    MicroformatItem {
        item_type: root_classes,
        id: html_utils::get_attr_nonempty(element, "id"),
        lang: html_utils::get_attr_nonempty(element, "lang"),
        shape: if element.value().name() == "area" {
            html_utils::get_attr_nonempty(element, "shape")
        } else {
            None
        },
        ..Default::default()
    }
}

/// Extract every property a closing scope declared, into the owning frame.
fn extract_properties(
    frame: &mut ItemFrame<'_>,
    element: &ElementRef,
    props: &[PropClass],
    base: Option<&Url>,
) {
    for prop in props {
        let Some(value) = properties::extract_value(prop.prefix, element, base, &frame.dt_seen)
        else {
            continue;
        };
        if prop.prefix == Prefix::Dt {
            if let PropertyValue::Text(text) = &value {
                frame.dt_seen.push(text.clone());
            }
        }
        frame.item.add_property(&prop.name, value);
    }
}

/// Finalize a root: apply implied properties, then link the item into its
/// parent (as a property value, a child, or both) or emit it top-level.
fn close_frame(
    frame: ItemFrame<'_>,
    frames: &mut [ItemFrame<'_>],
    scopes: &mut [PropScope],
    items: &mut Vec<MicroformatItem>,
    base: Option<&Url>,
) {
    let mut item = frame.item;
    if !frame.has_nested_root {
        implied::apply(&mut item, &frame.element, base);
    }

    let Some(parent) = frames.last_mut() else {
        items.push(item);
        return;
    };

    // Property linkage: the root's own p-/u-/dt-/e- classes win; otherwise
    // an enclosing property element inside the parent captures the item.
    let link_props: Option<Vec<PropClass>> = if !frame.pending_props.is_empty() {
        Some(frame.pending_props)
    } else if scopes.len() > parent.scope_floor {
        scopes.last_mut().map(|scope| {
            scope.captured_nested = true;
            scope.props.clone()
        })
    } else {
        None
    };

    if let Some(props) = link_props {
        item.value = item_scalar_value(&item, props[0].prefix);
        for prop in &props {
            if prop.prefix == Prefix::Dt {
                if let Some(value) = &item.value {
                    parent.dt_seen.push(value.clone());
                }
            }
            parent
                .item
                .add_property(&prop.name, PropertyValue::Item(Box::new(item.clone())));
        }
    }
    parent.item.add_child(item);
}

/// The scalar stand-in for an item used as a property value: its URL for
/// `u-*` linkage, its name otherwise.
fn item_scalar_value(item: &MicroformatItem, prefix: Prefix) -> Option<String> {
    let first_text = |name: &str| {
        item.properties.get(name).and_then(|values| {
            values.iter().find_map(|value| match value {
                PropertyValue::Text(text) => Some(text.clone()),
                PropertyValue::Embedded { value, .. } => Some(value.clone()),
                PropertyValue::Item(_) => None,
            })
        })
    };
    match prefix {
        Prefix::U => first_text("url").or_else(|| first_text("name")),
        _ => first_text("name").or_else(|| first_text("url")),
    }
}
