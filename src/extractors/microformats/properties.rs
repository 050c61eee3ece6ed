//! Per-prefix property value extraction, including the value-class
//! pattern and datetime composition.

use scraper::ElementRef;
use url::Url;

use crate::extractors::common::{html_utils, url_utils};
use crate::types::microformats::PropertyValue;

/// The four microformats v2 property prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Prefix {
    /// `p-` plain text
    P,
    /// `u-` URL
    U,
    /// `dt-` datetime
    Dt,
    /// `e-` embedded markup
    E,
}

/// One property class token parsed off an element.
#[derive(Debug, Clone)]
pub(super) struct PropClass {
    pub prefix: Prefix,
    pub name: String,
}

/// Whether a class token names a microformat root (`h-card`, `h-entry`, ...).
pub(super) fn is_root_class(token: &str) -> bool {
    token.strip_prefix("h-").is_some_and(is_valid_suffix)
}

/// Parse a property class token (`p-name`, `u-url`, `dt-start`, `e-content`).
pub(super) fn parse_prop_class(token: &str) -> Option<PropClass> {
    let (prefix, suffix) = if let Some(s) = token.strip_prefix("dt-") {
        (Prefix::Dt, s)
    } else if let Some(s) = token.strip_prefix("p-") {
        (Prefix::P, s)
    } else if let Some(s) = token.strip_prefix("u-") {
        (Prefix::U, s)
    } else if let Some(s) = token.strip_prefix("e-") {
        (Prefix::E, s)
    } else {
        return None;
    };
    if !is_valid_suffix(suffix) {
        return None;
    }
    Some(PropClass {
        prefix,
        name: suffix.to_string(),
    })
}

fn is_valid_suffix(suffix: &str) -> bool {
    !suffix.is_empty()
        && suffix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Extract one property value from an element.
///
/// `dt_seen` holds the datetime values already collected on the owning
/// item, in document order, for value-class date inheritance. Empty
/// extractions yield `None` and the property entry is omitted.
pub(super) fn extract_value(
    prefix: Prefix,
    element: &ElementRef,
    base: Option<&Url>,
    dt_seen: &[String],
) -> Option<PropertyValue> {
    match prefix {
        Prefix::P => nonempty(p_value(element)).map(PropertyValue::Text),
        Prefix::U => nonempty(u_value(element, base)).map(PropertyValue::Text),
        Prefix::Dt => nonempty(dt_value(element, dt_seen)).map(PropertyValue::Text),
        Prefix::E => e_value(element),
    }
}

fn nonempty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// The "plain value" of an element: alt/title/value attributes for the
/// tags that carry one, text content otherwise.
fn p_value(element: &ElementRef) -> String {
    if let Some(fragments) = value_class_fragments(element, Prefix::P) {
        return fragments.concat();
    }
    plain_value(element)
}

pub(super) fn plain_value(element: &ElementRef) -> String {
    match element.value().name() {
        "img" | "area" => {
            if let Some(alt) = element.value().attr("alt") {
                return alt.trim().to_string();
            }
        }
        "abbr" => {
            if let Some(title) = element.value().attr("title") {
                return title.trim().to_string();
            }
        }
        "data" | "input" => {
            if let Some(value) = element.value().attr("value") {
                return value.trim().to_string();
            }
        }
        _ => {}
    }
    html_utils::collapsed_text(element)
}

/// The URL value of an element, taken from its dominant URL attribute.
fn u_value(element: &ElementRef, base: Option<&Url>) -> String {
    if let Some(fragments) = value_class_fragments(element, Prefix::U) {
        return url_utils::resolve(base, fragments.concat().trim());
    }

    let attr = |name: &str| element.value().attr(name).map(str::trim).map(String::from);
    let raw = match element.value().name() {
        "a" | "area" | "link" => attr("href"),
        "img" | "audio" | "video" | "source" | "iframe" | "embed" => {
            attr("src").or_else(|| attr("poster"))
        }
        "object" => attr("data"),
        _ => attr("href")
            .or_else(|| attr("src"))
            .or_else(|| attr("data"))
            .or_else(|| attr("value"))
            .or_else(|| attr("content")),
    };

    let raw = raw.unwrap_or_else(|| html_utils::collapsed_text(element));
    if raw.is_empty() {
        return raw;
    }
    url_utils::resolve(base, &raw)
}

/// The datetime value of an element, emitted verbatim except for
/// value-class composition.
fn dt_value(element: &ElementRef, dt_seen: &[String]) -> String {
    if let Some(fragments) = value_class_fragments(element, Prefix::Dt) {
        return compose_datetime(&fragments, dt_seen);
    }

    match element.value().name() {
        "time" | "ins" | "del" => {
            if let Some(datetime) = element.value().attr("datetime") {
                return datetime.trim().to_string();
            }
        }
        "abbr" => {
            if let Some(title) = element.value().attr("title") {
                return title.trim().to_string();
            }
        }
        "data" | "input" => {
            if let Some(value) = element.value().attr("value") {
                return value.trim().to_string();
            }
        }
        _ => {}
    }
    html_utils::collapsed_text(element)
}

/// The embedded-markup value of an element: plain text plus serialized
/// inner HTML (left untrimmed).
fn e_value(element: &ElementRef) -> Option<PropertyValue> {
    let html = element.inner_html();
    let value = element.text().collect::<String>().trim().to_string();
    if value.is_empty() && html.trim().is_empty() {
        return None;
    }
    Some(PropertyValue::Embedded { value, html })
}

/// Collect `value` / `value-title` descendants in document order.
///
/// Returns `None` when the pattern is not in use, so the default per-tag
/// extraction applies.
fn value_class_fragments(element: &ElementRef, prefix: Prefix) -> Option<Vec<String>> {
    let mut fragments = Vec::new();

    for node in element.descendants().skip(1) {
        let Some(descendant) = ElementRef::wrap(node) else {
            continue;
        };
        let Some(class) = descendant.value().attr("class") else {
            continue;
        };
        let mut tokens = class.split_whitespace();
        if tokens.clone().any(|t| t == "value-title") {
            if let Some(title) = descendant.value().attr("title") {
                fragments.push(title.trim().to_string());
            }
        } else if tokens.any(|t| t == "value") {
            fragments.push(fragment_value(&descendant, prefix));
        }
    }

    if fragments.is_empty() {
        None
    } else {
        Some(fragments)
    }
}

/// The value of one `class="value"` fragment, per the owning prefix.
fn fragment_value(element: &ElementRef, prefix: Prefix) -> String {
    match prefix {
        Prefix::Dt => match element.value().name() {
            "time" | "ins" | "del" => element
                .value()
                .attr("datetime")
                .map(|d| d.trim().to_string())
                .unwrap_or_else(|| html_utils::collapsed_text(element)),
            "abbr" => element
                .value()
                .attr("title")
                .map(|t| t.trim().to_string())
                .unwrap_or_else(|| html_utils::collapsed_text(element)),
            "data" | "input" => element
                .value()
                .attr("value")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|| html_utils::collapsed_text(element)),
            _ => html_utils::collapsed_text(element),
        },
        _ => plain_value(element),
    }
}

/// Compose a datetime from value-class fragments: a date and a time join
/// with `T`, a trailing timezone is appended, and a missing date is
/// borrowed from the first previously seen datetime on the same item.
fn compose_datetime(fragments: &[String], dt_seen: &[String]) -> String {
    let mut date: Option<&str> = None;
    let mut time: Option<&str> = None;
    let mut zone: Option<&str> = None;

    for fragment in fragments {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        if looks_like_date(fragment) {
            date.get_or_insert(fragment);
        } else if looks_like_zone(fragment) {
            zone.get_or_insert(fragment);
        } else if looks_like_time(fragment) {
            time.get_or_insert(fragment);
        } else if date.is_none() {
            date = Some(fragment);
        }
    }

    // A time with no date inherits the date of an earlier dt- property
    if date.is_none() && time.is_some() {
        date = dt_seen.iter().find_map(|seen| date_prefix(seen));
    }

    let zone = zone.unwrap_or("");
    match (date, time) {
        (Some(d), Some(t)) => format!("{d}T{t}{zone}"),
        (Some(d), None) => d.to_string(),
        (None, Some(t)) => format!("{t}{zone}"),
        (None, None) => String::new(),
    }
}

/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY-DDD` ordinal dates.
fn looks_like_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < 7 || !bytes[..4].iter().all(u8::is_ascii_digit) || bytes[4] != b'-' {
        return false;
    }
    bytes[5..]
        .iter()
        .all(|&b| b.is_ascii_digit() || b == b'-')
}

/// `+HH:MM`, `-HHMM`, `+HH` or `Z`.
fn looks_like_zone(s: &str) -> bool {
    if s.eq_ignore_ascii_case("z") {
        return true;
    }
    let Some(rest) = s.strip_prefix(['+', '-']) else {
        return false;
    };
    !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit() || c == ':')
}

/// `HH:MM[:SS]` or `HH[:MM]am`/`pm`.
fn looks_like_time(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    let core = lower
        .strip_suffix("am")
        .or_else(|| lower.strip_suffix("pm"))
        .unwrap_or(&lower);
    !core.is_empty()
        && core.starts_with(|c: char| c.is_ascii_digit())
        && core.chars().all(|c| c.is_ascii_digit() || c == ':')
}

/// The leading `YYYY-MM-DD` of a previously seen datetime, if it has one.
fn date_prefix(value: &str) -> Option<&str> {
    let candidate = value.split('T').next().unwrap_or(value);
    if candidate.len() == 10 && looks_like_date(candidate) {
        Some(candidate)
    } else {
        None
    }
}
