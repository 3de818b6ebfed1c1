use serde::Deserialize;
use utoipa::IntoParams;

pub const MIN_QUALITY: u8 = 10;
pub const MAX_QUALITY: u8 = 100;

/// Raw query string of `GET /api/proxy-image`. Everything is kept as text so
/// malformed numbers are defaulted instead of rejected.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProxyImageQuery {
    /// Source image URL (URL-encoded)
    pub url: Option<String>,
    /// Output quality, clamped to 10..=100
    pub quality: Option<String>,
    /// Maximum output width, 0 = unconstrained
    pub max_width: Option<String>,
    /// Maximum output height, 0 = unconstrained
    pub max_height: Option<String>,
}

/// Validated transcode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscodeParams {
    pub quality: u8,
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for TranscodeParams {
    fn default() -> Self {
        Self {
            quality: MAX_QUALITY,
            max_width: 0,
            max_height: 0,
        }
    }
}

impl TranscodeParams {
    pub fn from_query(query: &ProxyImageQuery) -> Self {
        let quality = query
            .quality
            .as_deref()
            .and_then(parse_lenient_int)
            .unwrap_or(MAX_QUALITY as i64)
            .clamp(MIN_QUALITY as i64, MAX_QUALITY as i64) as u8;

        Self {
            quality,
            max_width: parse_dimension(query.max_width.as_deref()),
            max_height: parse_dimension(query.max_height.as_deref()),
        }
    }

    /// True when the source must be decoded and re-encoded.
    pub fn compression_requested(&self) -> bool {
        self.quality < MAX_QUALITY || self.max_width > 0 || self.max_height > 0
    }

    pub fn has_bounds(&self) -> bool {
        self.max_width > 0 || self.max_height > 0
    }
}

fn parse_dimension(raw: Option<&str>) -> u32 {
    raw.and_then(parse_lenient_int)
        .map(|v| v.clamp(0, u32::MAX as i64) as u32)
        .unwrap_or(0)
}

/// Parses an optional sign followed by leading digits, ignoring whatever
/// trails them: `"50px"` is 50, `"abc"` is `None`.
pub fn parse_lenient_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Saturate instead of failing on absurdly long inputs.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
