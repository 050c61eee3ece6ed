use super::extract;
use crate::types::microdata::MicrodataValue;

fn text_values(values: &[MicrodataValue]) -> Vec<&str> {
    values
        .iter()
        .filter_map(|v| match v {
            MicrodataValue::Text(s) => Some(s.as_str()),
            MicrodataValue::Item(_) => None,
        })
        .collect()
}

#[test]
fn test_basic_item() {
    let html = r#"
        <div itemscope itemtype="https://schema.org/Person">
            <span itemprop="name">Jane Doe</span>
            <span itemprop="jobTitle">Engineer</span>
        </div>
    "#;
    let items = extract(html, None).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item_type, vec!["https://schema.org/Person"]);
    assert_eq!(text_values(&items[0].properties["name"]), vec!["Jane Doe"]);
    assert_eq!(
        text_values(&items[0].properties["jobTitle"]),
        vec!["Engineer"]
    );
}

#[test]
fn test_multiple_types_split() {
    let html = r#"<div itemscope itemtype="https://schema.org/Person https://schema.org/Employee"></div>"#;
    let items = extract(html, None).unwrap();
    assert_eq!(items[0].item_type.len(), 2);
}

#[test]
fn test_itemid() {
    let html = r#"<div itemscope itemid="urn:isbn:0-330-34032-8"></div>"#;
    let items = extract(html, None).unwrap();
    assert_eq!(items[0].id, Some("urn:isbn:0-330-34032-8".to_string()));
}

#[test]
fn test_nested_item_becomes_property_value() {
    let html = r#"
        <div itemscope itemtype="https://schema.org/Person">
            <span itemprop="name">Jane</span>
            <div itemprop="address" itemscope itemtype="https://schema.org/PostalAddress">
                <span itemprop="streetAddress">123 Main St</span>
            </div>
        </div>
    "#;
    let items = extract(html, None).unwrap();
    assert_eq!(items.len(), 1, "nested scope must not be top-level");
    match &items[0].properties["address"][0] {
        MicrodataValue::Item(nested) => {
            assert_eq!(
                text_values(&nested.properties["streetAddress"]),
                vec!["123 Main St"]
            );
        }
        MicrodataValue::Text(_) => panic!("expected nested item"),
    }
    // The nested item's property must not leak into the parent
    assert!(!items[0].properties.contains_key("streetAddress"));
}

#[test]
fn test_multiple_property_names_on_one_element() {
    let html = r#"
        <div itemscope>
            <span itemprop="name headline">Shared</span>
        </div>
    "#;
    let items = extract(html, None).unwrap();
    assert_eq!(text_values(&items[0].properties["name"]), vec!["Shared"]);
    assert_eq!(text_values(&items[0].properties["headline"]), vec!["Shared"]);
}

#[test]
fn test_property_value_by_tag() {
    let html = r#"
        <div itemscope>
            <meta itemprop="rating" content="4.5">
            <img itemprop="image" src="/photo.jpg">
            <a itemprop="url" href="/jane">profile</a>
            <object itemprop="attachment" data="/file.pdf"></object>
            <data itemprop="sku" value="8675309">SKU</data>
            <meter itemprop="score" value="0.9">90%</meter>
            <time itemprop="birthDate" datetime="1990-05-05">May 5th, 1990</time>
            <time itemprop="deathDate">not yet</time>
            <span itemprop="note">  spaced   text  </span>
        </div>
    "#;
    let items = extract(html, Some("https://example.com")).unwrap();
    let props = &items[0].properties;
    assert_eq!(text_values(&props["rating"]), vec!["4.5"]);
    assert_eq!(
        text_values(&props["image"]),
        vec!["https://example.com/photo.jpg"]
    );
    assert_eq!(text_values(&props["url"]), vec!["https://example.com/jane"]);
    assert_eq!(
        text_values(&props["attachment"]),
        vec!["https://example.com/file.pdf"]
    );
    assert_eq!(text_values(&props["sku"]), vec!["8675309"]);
    assert_eq!(text_values(&props["score"]), vec!["0.9"]);
    assert_eq!(text_values(&props["birthDate"]), vec!["1990-05-05"]);
    assert_eq!(text_values(&props["deathDate"]), vec!["not yet"]);
    assert_eq!(text_values(&props["note"]), vec!["spaced text"]);
}

#[test]
fn test_multiple_values_accumulate() {
    let html = r#"
        <div itemscope>
            <span itemprop="telephone">555-1234</span>
            <span itemprop="telephone">555-5678</span>
        </div>
    "#;
    let items = extract(html, None).unwrap();
    assert_eq!(
        text_values(&items[0].properties["telephone"]),
        vec!["555-1234", "555-5678"]
    );
}

#[test]
fn test_itemref_pulls_external_subtree() {
    let html = r#"
        <div itemscope itemref="extra"></div>
        <div id="extra">
            <span itemprop="name">Referenced</span>
        </div>
    "#;
    let items = extract(html, None).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(
        text_values(&items[0].properties["name"]),
        vec!["Referenced"]
    );
}

#[test]
fn test_itemref_cycle_terminates_without_duplicates() {
    let html = r#"
        <div itemscope id="a" itemref="b">
            <div id="b" itemref="a">
                <span itemprop="x">v</span>
            </div>
        </div>
    "#;
    let items = extract(html, None).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(text_values(&items[0].properties["x"]), vec!["v"]);
}

#[test]
fn test_itemref_unknown_id_ignored() {
    let html = r#"
        <div itemscope itemref="missing">
            <span itemprop="name">Still works</span>
        </div>
    "#;
    let items = extract(html, None).unwrap();
    assert_eq!(
        text_values(&items[0].properties["name"]),
        vec!["Still works"]
    );
}

#[test]
fn test_sibling_scope_without_itemprop_is_top_level() {
    let html = r#"
        <div itemscope itemtype="https://schema.org/Article">
            <div itemscope itemtype="https://schema.org/Person">
                <span itemprop="name">Standalone</span>
            </div>
        </div>
    "#;
    let items = extract(html, None).unwrap();
    // The inner scope has no itemprop, so it is its own top-level item and
    // contributes nothing to the outer one.
    assert_eq!(items.len(), 2);
    assert!(items[0].properties.is_empty());
    assert_eq!(
        text_values(&items[1].properties["name"]),
        vec!["Standalone"]
    );
}

#[test]
fn test_empty_property_omitted() {
    let html = r#"
        <div itemscope>
            <span itemprop="empty"></span>
            <span itemprop="full">x</span>
        </div>
    "#;
    let items = extract(html, None).unwrap();
    assert!(!items[0].properties.contains_key("empty"));
    assert!(items[0].properties.contains_key("full"));
}

#[test]
fn test_deeply_nested_scopes() {
    let mut html = String::new();
    for _ in 0..120 {
        html.push_str(r#"<div itemprop="child" itemscope>"#);
    }
    html.push_str(r#"<span itemprop="name">deep</span>"#);
    for _ in 0..120 {
        html.push_str("</div>");
    }
    // Wrap so the outermost scope is top-level
    let html = format!("<div itemscope>{html}</div>");
    let items = extract(&html, None).unwrap();
    assert_eq!(items.len(), 1);
}

#[test]
fn test_empty_input() {
    assert!(extract("", None).unwrap().is_empty());
}

#[test]
fn test_serialized_shape() {
    let html = r#"
        <div itemscope itemtype="https://schema.org/Person">
            <span itemprop="name">Jane</span>
        </div>
    "#;
    let items = extract(html, None).unwrap();
    let json = serde_json::to_value(&items).unwrap();
    assert_eq!(json[0]["type"][0], "https://schema.org/Person");
    assert_eq!(json[0]["properties"]["name"][0], "Jane");
}
