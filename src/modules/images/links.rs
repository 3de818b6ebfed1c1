use crate::modules::proxy::dto::MAX_QUALITY;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const THUMBNAIL_QUALITY: u8 = 40;
pub const PROXY_PATH: &str = "/api/proxy-image";

/// Everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, as a URI component.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Publicly viewable link for a Drive file id.
pub fn direct_link(file_id: &str) -> String {
    format!("https://drive.google.com/uc?export=view&id={}", file_id)
}

pub fn proxy_image_url(original: Option<&str>, quality: u8) -> Option<String> {
    let original = original.filter(|u| !u.is_empty())?;
    let encoded = utf8_percent_encode(original, URI_COMPONENT);
    Some(format!("{}?url={}&quality={}", PROXY_PATH, encoded, quality))
}

/// Grid thumbnail: prefers the direct link, then Drive's own thumbnail.
pub fn thumbnail_url(
    direct: Option<&str>,
    thumbnail: Option<&str>,
    web_content: Option<&str>,
) -> Option<String> {
    proxy_image_url(first_present([direct, thumbnail, web_content]), THUMBNAIL_QUALITY)
}

/// Modal view: full quality, Drive's thumbnail only as a last resort.
pub fn full_size_url(
    direct: Option<&str>,
    thumbnail: Option<&str>,
    web_content: Option<&str>,
) -> Option<String> {
    proxy_image_url(first_present([direct, web_content, thumbnail]), MAX_QUALITY)
}

fn first_present<const N: usize>(candidates: [Option<&str>; N]) -> Option<&str> {
    candidates.into_iter().flatten().find(|u| !u.is_empty())
}
