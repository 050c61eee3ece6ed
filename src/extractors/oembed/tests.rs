use super::extract;

#[test]
fn test_json_endpoint() {
    let html = r#"
        <link rel="alternate" type="application/json+oembed"
              href="https://example.com/oembed?format=json" title="Example">
    "#;
    let discovery = extract(html, None).unwrap();
    let json = discovery.json.unwrap();
    assert_eq!(json.href, "https://example.com/oembed?format=json");
    assert_eq!(json.title, Some("Example".to_string()));
    assert!(discovery.xml.is_none());
}

#[test]
fn test_xml_endpoint() {
    let html = r#"
        <link rel="alternate" type="text/xml+oembed"
              href="https://example.com/oembed?format=xml">
    "#;
    let discovery = extract(html, None).unwrap();
    assert!(discovery.json.is_none());
    let xml = discovery.xml.unwrap();
    assert_eq!(xml.href, "https://example.com/oembed?format=xml");
    assert_eq!(xml.title, None);
}

#[test]
fn test_both_flavors() {
    let html = r#"
        <link rel="alternate" type="application/json+oembed" href="/oembed.json">
        <link rel="alternate" type="application/xml+oembed" href="/oembed.xml">
    "#;
    let discovery = extract(html, Some("https://example.com")).unwrap();
    assert_eq!(
        discovery.json.unwrap().href,
        "https://example.com/oembed.json"
    );
    assert_eq!(
        discovery.xml.unwrap().href,
        "https://example.com/oembed.xml"
    );
}

#[test]
fn test_first_endpoint_of_each_flavor_wins() {
    let html = r#"
        <link rel="alternate" type="application/json+oembed" href="/first.json">
        <link rel="alternate" type="application/json+oembed" href="/second.json">
    "#;
    let discovery = extract(html, Some("https://example.com")).unwrap();
    assert_eq!(
        discovery.json.unwrap().href,
        "https://example.com/first.json"
    );
}

#[test]
fn test_non_oembed_alternate_ignored() {
    let html = r#"
        <link rel="alternate" type="application/rss+xml" href="/feed.xml">
        <link rel="alternate" type="application/json" href="/data.json">
    "#;
    let discovery = extract(html, None).unwrap();
    assert!(!discovery.has_endpoints());
}

#[test]
fn test_type_matched_case_insensitively() {
    let html = r#"<link rel="alternate" type="Application/JSON+oEmbed" href="/o.json">"#;
    let discovery = extract(html, None).unwrap();
    assert!(discovery.json.is_some());
}

#[test]
fn test_empty_href_skipped() {
    let html = r#"<link rel="alternate" type="application/json+oembed" href="">"#;
    let discovery = extract(html, None).unwrap();
    assert!(!discovery.has_endpoints());
}

#[test]
fn test_empty_input() {
    let discovery = extract("", None).unwrap();
    assert!(!discovery.has_endpoints());
}
