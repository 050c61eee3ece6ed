//! Open Graph Protocol extractor.
//!
//! Scans `<meta property>` tags in the `og:`, `article:`, `book:`,
//! `profile:`, `music:`, `video:` and `fb:` namespaces. A bare structured
//! property (`og:image`, `music:album`, `video:actor`, ...) opens a new
//! subrecord; qualified properties attach to the most recently opened
//! subrecord of that group.

use scraper::Html;
use url::Url;

use crate::errors::Result;
use crate::extractors::common::{html_utils, url_utils};
use crate::types::social::{OgActor, OgMedia, OgMusicRef, OpenGraph};

/// Extract Open Graph metadata from HTML.
///
/// # Arguments
/// * `html` - HTML content to parse
/// * `base_url` - Optional base URL for resolving relative URLs
pub fn extract(html: &str, base_url: Option<&str>) -> Result<OpenGraph> {
    let document = html_utils::parse_document(html);
    let base = url_utils::parse_base(base_url);
    Ok(from_document(&document, base.as_ref()))
}

/// Extract Open Graph metadata from an already-parsed document.
pub(crate) fn from_document(document: &Html, base: Option<&Url>) -> OpenGraph {
    let mut og = OpenGraph::default();

    // Most recently opened subrecord of each structured group
    let mut current_image: Option<OgMedia> = None;
    let mut current_video: Option<OgMedia> = None;
    let mut current_audio: Option<OgMedia> = None;
    let mut current_album: Option<OgMusicRef> = None;
    let mut current_song: Option<OgMusicRef> = None;
    let mut current_actor: Option<OgActor> = None;

    let Ok(selector) = html_utils::selector("meta[property][content]") else {
        return og;
    };

    for element in document.select(&selector) {
        let Some(property) = html_utils::get_attr(&element, "property") else {
            continue;
        };
        let Some(content) = html_utils::get_attr_nonempty(&element, "content") else {
            continue;
        };

        if let Some(prop) = property.strip_prefix("og:") {
            match prop {
                "title" => set(&mut og.title, content),
                "type" => set(&mut og.og_type, content),
                "description" => set(&mut og.description, content),
                "site_name" => set(&mut og.site_name, content),
                "determiner" => set(&mut og.determiner, content),
                "locale" => set(&mut og.locale, content),
                "url" => set(&mut og.url, url_utils::resolve(base, &content)),
                "locale:alternate" => og.locale_alternate.push(content),
                "image" => {
                    open_media(&mut og.image, &mut current_image, content, base);
                }
                "video" => {
                    open_media(&mut og.video, &mut current_video, content, base);
                }
                "audio" => {
                    open_media(&mut og.audio, &mut current_audio, content, base);
                }
                _ if prop.starts_with("image:") => {
                    fill_media(&mut current_image, &prop[6..], content, base);
                }
                _ if prop.starts_with("video:") => {
                    fill_media(&mut current_video, &prop[6..], content, base);
                }
                _ if prop.starts_with("audio:") => {
                    fill_media(&mut current_audio, &prop[6..], content, base);
                }
                _ if !prop.contains(':') => {
                    og.extra.entry(prop.to_string()).or_insert(content);
                }
                _ => {}
            }
        } else if let Some(prop) = property.strip_prefix("article:") {
            let article = og.article.get_or_insert_with(Default::default);
            match prop {
                "published_time" => set(&mut article.published_time, content),
                "modified_time" => set(&mut article.modified_time, content),
                "expiration_time" => set(&mut article.expiration_time, content),
                "section" => set(&mut article.section, content),
                "author" => article.author.push(content),
                "tag" => article.tag.push(content),
                _ => {}
            }
        } else if let Some(prop) = property.strip_prefix("book:") {
            let book = og.book.get_or_insert_with(Default::default);
            match prop {
                "author" => book.author.push(content),
                "isbn" => set(&mut book.isbn, content),
                "release_date" => set(&mut book.release_date, content),
                "tag" => book.tag.push(content),
                _ => {}
            }
        } else if let Some(prop) = property.strip_prefix("profile:") {
            let profile = og.profile.get_or_insert_with(Default::default);
            match prop {
                "first_name" => set(&mut profile.first_name, content),
                "last_name" => set(&mut profile.last_name, content),
                "username" => set(&mut profile.username, content),
                "gender" => set(&mut profile.gender, content),
                _ => {}
            }
        } else if let Some(prop) = property.strip_prefix("music:") {
            let music = og.music.get_or_insert_with(Default::default);
            match prop {
                "duration" => set(&mut music.duration, content),
                "release_date" => set(&mut music.release_date, content),
                "creator" => set(&mut music.creator, content),
                "musician" => music.musician.push(content),
                "album" => {
                    if let Some(album) = current_album.take() {
                        music.album.push(album);
                    }
                    current_album = Some(OgMusicRef {
                        url: Some(content),
                        ..Default::default()
                    });
                }
                "song" => {
                    if let Some(song) = current_song.take() {
                        music.song.push(song);
                    }
                    current_song = Some(OgMusicRef {
                        url: Some(content),
                        ..Default::default()
                    });
                }
                "album:disc" => fill_music_ref(&mut current_album, |r| &mut r.disc, content),
                "album:track" => fill_music_ref(&mut current_album, |r| &mut r.track, content),
                "song:disc" => fill_music_ref(&mut current_song, |r| &mut r.disc, content),
                "song:track" => fill_music_ref(&mut current_song, |r| &mut r.track, content),
                _ => {}
            }
        } else if let Some(prop) = property.strip_prefix("video:") {
            let info = og.video_info.get_or_insert_with(Default::default);
            match prop {
                "actor" => {
                    if let Some(actor) = current_actor.take() {
                        info.actor.push(actor);
                    }
                    current_actor = Some(OgActor {
                        url: Some(content),
                        role: None,
                    });
                }
                "actor:role" => {
                    let actor = current_actor.get_or_insert_with(Default::default);
                    set(&mut actor.role, content);
                }
                "director" => info.director.push(content),
                "writer" => info.writer.push(content),
                "tag" => info.tag.push(content),
                "duration" => set(&mut info.duration, content),
                "release_date" => set(&mut info.release_date, content),
                "series" => set(&mut info.series, content),
                _ => {}
            }
        } else if let Some(prop) = property.strip_prefix("fb:") {
            match prop {
                "app_id" => set(&mut og.fb_app_id, content),
                "admins" => set(&mut og.fb_admins, content),
                "pages" => set(&mut og.fb_pages, content),
                _ => {}
            }
        }
    }

    // Flush the still-open subrecords
    if let Some(image) = current_image {
        og.image.push(image);
    }
    if let Some(video) = current_video {
        og.video.push(video);
    }
    if let Some(audio) = current_audio {
        og.audio.push(audio);
    }
    if let Some(album) = current_album {
        if let Some(music) = og.music.as_mut() {
            music.album.push(album);
        }
    }
    if let Some(song) = current_song {
        if let Some(music) = og.music.as_mut() {
            music.song.push(song);
        }
    }
    if let Some(actor) = current_actor {
        if let Some(info) = og.video_info.as_mut() {
            info.actor.push(actor);
        }
    }

    og
}

fn set(slot: &mut Option<String>, content: String) {
    if slot.is_none() {
        *slot = Some(content);
    }
}

/// A bare media property: flush the open subrecord of this group and start
/// a new one.
fn open_media(
    group: &mut Vec<OgMedia>,
    current: &mut Option<OgMedia>,
    content: String,
    base: Option<&Url>,
) {
    if let Some(media) = current.take() {
        group.push(media);
    }
    *current = Some(OgMedia {
        url: Some(url_utils::resolve(base, &content)),
        ..Default::default()
    });
}

/// A qualified media property: fill the open subrecord. A `:url` qualifier
/// with no open subrecord opens one.
fn fill_media(current: &mut Option<OgMedia>, qualifier: &str, content: String, base: Option<&Url>) {
    if current.is_none() && qualifier != "url" {
        return;
    }
    let media = current.get_or_insert_with(Default::default);
    match qualifier {
        "url" => set(&mut media.url, url_utils::resolve(base, &content)),
        "secure_url" => set(&mut media.secure_url, url_utils::resolve(base, &content)),
        "type" => set(&mut media.media_type, content),
        "width" => set(&mut media.width, content),
        "height" => set(&mut media.height, content),
        "alt" => set(&mut media.alt, content),
        other => {
            media.extra.entry(other.to_string()).or_insert(content);
        }
    }
}

fn fill_music_ref(
    current: &mut Option<OgMusicRef>,
    field: impl Fn(&mut OgMusicRef) -> &mut Option<String>,
    content: String,
) {
    if let Some(music_ref) = current.as_mut() {
        set(field(music_ref), content);
    }
}
