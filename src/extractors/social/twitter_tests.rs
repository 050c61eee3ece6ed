use super::twitter::{extract, extract_with_fallback};

#[test]
fn test_basic_card() {
    let html = r#"
        <meta name="twitter:card" content="summary_large_image">
        <meta name="twitter:title" content="Tweet Title">
        <meta name="twitter:description" content="Tweet description">
        <meta name="twitter:site" content="@example">
        <meta name="twitter:creator" content="@jane">
    "#;
    let card = extract(html, None).unwrap();
    assert_eq!(card.card, Some("summary_large_image".to_string()));
    assert_eq!(card.title, Some("Tweet Title".to_string()));
    assert_eq!(card.description, Some("Tweet description".to_string()));
    assert_eq!(card.site, Some("@example".to_string()));
    assert_eq!(card.creator, Some("@jane".to_string()));
}

#[test]
fn test_ids() {
    let html = r#"
        <meta name="twitter:site:id" content="11111">
        <meta name="twitter:creator:id" content="22222">
    "#;
    let card = extract(html, None).unwrap();
    assert_eq!(card.site_id, Some("11111".to_string()));
    assert_eq!(card.creator_id, Some("22222".to_string()));
}

#[test]
fn test_image_resolved_with_alt() {
    let html = r#"
        <meta name="twitter:image" content="/card.png">
        <meta name="twitter:image:alt" content="A card">
    "#;
    let card = extract(html, Some("https://example.com")).unwrap();
    assert_eq!(card.image, Some("https://example.com/card.png".to_string()));
    assert_eq!(card.image_alt, Some("A card".to_string()));
}

#[test]
fn test_player_subtree() {
    let html = r#"
        <meta name="twitter:card" content="player">
        <meta name="twitter:player" content="https://example.com/embed">
        <meta name="twitter:player:width" content="640">
        <meta name="twitter:player:height" content="360">
        <meta name="twitter:player:stream" content="/video.mp4">
    "#;
    let card = extract(html, Some("https://example.com")).unwrap();
    let player = card.player.unwrap();
    assert_eq!(player.url, Some("https://example.com/embed".to_string()));
    assert_eq!(player.width, Some("640".to_string()));
    assert_eq!(player.height, Some("360".to_string()));
    assert_eq!(
        player.stream,
        Some("https://example.com/video.mp4".to_string())
    );
}

#[test]
fn test_app_subtree() {
    let html = r#"
        <meta name="twitter:app:name:iphone" content="Example App">
        <meta name="twitter:app:id:iphone" content="123456">
        <meta name="twitter:app:url:iphone" content="example://page">
        <meta name="twitter:app:name:googleplay" content="Example Droid">
        <meta name="twitter:app:country" content="US">
    "#;
    let card = extract(html, None).unwrap();
    let app = card.app.unwrap();
    assert_eq!(app.name_iphone, Some("Example App".to_string()));
    assert_eq!(app.id_iphone, Some("123456".to_string()));
    assert_eq!(app.url_iphone, Some("example://page".to_string()));
    assert_eq!(app.name_googleplay, Some("Example Droid".to_string()));
    assert_eq!(app.country, Some("US".to_string()));
}

#[test]
fn test_no_twitter_tags() {
    let html = r#"<meta name="description" content="not twitter">"#;
    let card = extract(html, None).unwrap();
    assert_eq!(card.card, None);
    assert!(card.player.is_none());
    assert!(card.app.is_none());
}

#[test]
fn test_fallback_fills_absent_scalars() {
    let html = r#"
        <meta property="og:title" content="T">
        <meta property="og:description" content="D">
        <meta property="og:url" content="https://e.com/page">
        <meta property="og:image" content="https://e.com/a.jpg">
    "#;
    let card = extract_with_fallback(html, None).unwrap();
    assert_eq!(card.title, Some("T".to_string()));
    assert_eq!(card.description, Some("D".to_string()));
    assert_eq!(card.url, Some("https://e.com/page".to_string()));
    assert_eq!(card.image, Some("https://e.com/a.jpg".to_string()));
}

#[test]
fn test_fallback_does_not_override_twitter_values() {
    let html = r#"
        <meta name="twitter:title" content="Twitter Title">
        <meta property="og:title" content="OG Title">
        <meta property="og:description" content="OG Description">
    "#;
    let card = extract_with_fallback(html, None).unwrap();
    assert_eq!(card.title, Some("Twitter Title".to_string()));
    assert_eq!(card.description, Some("OG Description".to_string()));
}

#[test]
fn test_fallback_image_uses_first_og_image_url() {
    let html = r#"
        <meta property="og:image" content="/a.jpg">
        <meta property="og:image" content="/b.jpg">
    "#;
    let card = extract_with_fallback(html, Some("https://e.com")).unwrap();
    assert_eq!(card.image, Some("https://e.com/a.jpg".to_string()));
}

#[test]
fn test_fallback_without_og_is_noop() {
    let card = extract_with_fallback("<p>nothing here</p>", None).unwrap();
    assert_eq!(card.title, None);
    assert_eq!(card.url, None);
}

#[test]
fn test_plain_extract_never_sets_url() {
    let html = r#"
        <meta name="twitter:card" content="summary">
        <meta property="og:url" content="https://e.com/page">
    "#;
    let card = extract(html, None).unwrap();
    assert_eq!(card.url, None);
}
