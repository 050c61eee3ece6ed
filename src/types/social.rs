//! Types for social-media metadata: Open Graph and Twitter Cards.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One Open Graph media subrecord (`og:image`, `og:video`, `og:audio`).
///
/// A bare base property opens a new subrecord; qualified properties
/// (`og:image:width`, ...) fill the most recently opened one. Numeric
/// qualifiers stay strings; consumers coerce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OgMedia {
    /// Media URL, resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// `:secure_url` qualifier, resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_url: Option<String>,
    /// `:type` qualifier (MIME type).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// `:width` qualifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// `:height` qualifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    /// `:alt` qualifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Unknown qualifiers, kept verbatim.
    #[serde(flatten, default)]
    pub extra: IndexMap<String, String>,
}

/// `article:*` namespace metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OgArticle {
    /// `article:published_time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    /// `article:modified_time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
    /// `article:expiration_time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<String>,
    /// `article:section`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// `article:author`, one entry per tag.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub author: Vec<String>,
    /// `article:tag`, one entry per tag.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tag: Vec<String>,
}

/// `book:*` namespace metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OgBook {
    /// `book:author`, one entry per tag.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub author: Vec<String>,
    /// `book:isbn`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    /// `book:release_date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// `book:tag`, one entry per tag.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tag: Vec<String>,
}

/// `profile:*` namespace metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OgProfile {
    /// `profile:first_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// `profile:last_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// `profile:username`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// `profile:gender`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// One `music:album` / `music:song` subrecord.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OgMusicRef {
    /// The referenced URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// `:disc` qualifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disc: Option<String>,
    /// `:track` qualifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
}

/// `music:*` namespace metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OgMusic {
    /// `music:duration`, seconds as written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// `music:album` subrecords.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub album: Vec<OgMusicRef>,
    /// `music:song` subrecords.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub song: Vec<OgMusicRef>,
    /// `music:musician` profile URLs.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub musician: Vec<String>,
    /// `music:creator` profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// `music:release_date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

/// One `video:actor` subrecord.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OgActor {
    /// Actor profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// `video:actor:role`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// The `video:*` type namespace (movies, episodes).
///
/// Distinct from the `og:video` media list, which lives on the `video`
/// key of [`OpenGraph`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OgVideoInfo {
    /// `video:actor` subrecords.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub actor: Vec<OgActor>,
    /// `video:director` profile URLs.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub director: Vec<String>,
    /// `video:writer` profile URLs.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub writer: Vec<String>,
    /// `video:tag` entries.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tag: Vec<String>,
    /// `video:duration`, seconds as written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// `video:release_date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// `video:series` URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
}

/// Open Graph metadata (`<meta property="og:*">` and companions).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenGraph {
    /// `og:title`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `og:type`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub og_type: Option<String>,
    /// `og:url`, resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// `og:description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `og:site_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    /// `og:determiner`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub determiner: Option<String>,
    /// `og:locale`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// `og:locale:alternate` entries.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub locale_alternate: Vec<String>,

    /// `og:image` subrecords, document order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub image: Vec<OgMedia>,
    /// `og:video` subrecords, document order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub video: Vec<OgMedia>,
    /// `og:audio` subrecords, document order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub audio: Vec<OgMedia>,

    /// `article:*` namespace, when any tag was present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<OgArticle>,
    /// `book:*` namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<OgBook>,
    /// `profile:*` namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<OgProfile>,
    /// `music:*` namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music: Option<OgMusic>,
    /// `video:*` type namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_info: Option<OgVideoInfo>,

    /// `fb:app_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fb_app_id: Option<String>,
    /// `fb:admins`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fb_admins: Option<String>,
    /// `fb:pages`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fb_pages: Option<String>,

    /// Unknown bare `og:*` properties, kept verbatim, first-wins.
    #[serde(flatten, default)]
    pub extra: IndexMap<String, String>,
}

/// Twitter player card subtree (`twitter:player*`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterPlayer {
    /// `twitter:player` iframe URL, resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// `twitter:player:width`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// `twitter:player:height`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    /// `twitter:player:stream`, resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,
}

/// Twitter app card subtree (`twitter:app:*`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterApp {
    /// `twitter:app:name:iphone`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_iphone: Option<String>,
    /// `twitter:app:name:ipad`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ipad: Option<String>,
    /// `twitter:app:name:googleplay`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_googleplay: Option<String>,
    /// `twitter:app:id:iphone`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_iphone: Option<String>,
    /// `twitter:app:id:ipad`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_ipad: Option<String>,
    /// `twitter:app:id:googleplay`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_googleplay: Option<String>,
    /// `twitter:app:url:iphone`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_iphone: Option<String>,
    /// `twitter:app:url:ipad`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_ipad: Option<String>,
    /// `twitter:app:url:googleplay`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_googleplay: Option<String>,
    /// `twitter:app:country`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Twitter Card metadata (`<meta name="twitter:*">`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TwitterCard {
    /// `twitter:card` kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    /// `twitter:site` handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    /// `twitter:site:id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    /// `twitter:creator` handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// `twitter:creator:id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,
    /// `twitter:title`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `twitter:description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `twitter:image`, resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// `twitter:image:alt`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    /// Canonical URL; populated only by the Open Graph fallback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Player card subtree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<TwitterPlayer>,
    /// App card subtree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<TwitterApp>,
}
