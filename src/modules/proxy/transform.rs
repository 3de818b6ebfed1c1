//! In-memory decode, resize and re-encode of proxied images.
//!
//! Everything here is synchronous and CPU bound; callers run it on the
//! blocking pool.

use super::dto::TranscodeParams;
use super::error::ProxyError;
use bytes::Bytes;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};

/// Below this quality PNG sources are flattened to JPEG to minimise size.
pub const PNG_TO_JPEG_BELOW: u8 = 30;

/// libwebp method: 0 = fastest, 6 = smallest output.
const WEBP_METHOD: i32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCodec {
    Jpeg,
    Png,
    WebP,
}

impl OutputCodec {
    /// Codec used to re-encode a decoded `source` at `quality`.
    pub fn for_source(source: ImageFormat, quality: u8) -> Self {
        match source {
            ImageFormat::Jpeg => OutputCodec::Jpeg,
            ImageFormat::Png if quality < PNG_TO_JPEG_BELOW => OutputCodec::Jpeg,
            ImageFormat::Png => OutputCodec::Png,
            ImageFormat::WebP => OutputCodec::WebP,
            _ => OutputCodec::Jpeg,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Transcoded {
    pub bytes: Bytes,
    /// `None` when the source was passed through untouched.
    pub codec: Option<OutputCodec>,
    pub dimensions: Option<(u32, u32)>,
}

pub fn transform(source: Bytes, params: &TranscodeParams) -> Result<Transcoded, ProxyError> {
    if !params.compression_requested() {
        return Ok(Transcoded {
            bytes: source,
            codec: None,
            dimensions: None,
        });
    }

    let format = image::guess_format(&source).map_err(ProxyError::Decode)?;
    let mut img = image::load_from_memory_with_format(&source, format).map_err(ProxyError::Decode)?;

    if params.has_bounds() {
        let (width, height) = img.dimensions();
        let (target_w, target_h) = fit_inside(width, height, params.max_width, params.max_height);
        if (target_w, target_h) != (width, height) {
            img = img.resize_exact(target_w, target_h, FilterType::Lanczos3);
        }
    }

    let codec = OutputCodec::for_source(format, params.quality);
    let bytes = match codec {
        OutputCodec::Jpeg => encode_jpeg(&img, params.quality)?,
        OutputCodec::Png => encode_png(&img)?,
        OutputCodec::WebP => encode_webp(&img, params.quality)?,
    };

    Ok(Transcoded {
        bytes: Bytes::from(bytes),
        codec: Some(codec),
        dimensions: Some(img.dimensions()),
    })
}

/// Largest size that fits inside the bounds with the source aspect ratio.
/// A bound of 0 leaves that axis free. Never upscales.
pub fn fit_inside(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }

    let mut scale = 1.0_f64;
    if max_width > 0 {
        scale = scale.min(max_width as f64 / width as f64);
    }
    if max_height > 0 {
        scale = scale.min(max_height as f64 / height as f64);
    }
    if scale >= 1.0 {
        return (width, height);
    }

    let mut target_w = ((width as f64 * scale).round() as u32).clamp(1, width);
    let mut target_h = ((height as f64 * scale).round() as u32).clamp(1, height);
    if max_width > 0 {
        target_w = target_w.min(max_width);
    }
    if max_height > 0 {
        target_h = target_h.min(max_height);
    }
    (target_w, target_h)
}

/// Progressive JPEG with optimized Huffman tables.
fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>, ProxyError> {
    // JPEG has no alpha channel; transparency is dropped here.
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let (width, height) = match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(ProxyError::Failure(format!(
                "jpeg encode: {}x{} exceeds the format limit",
                width, height
            )));
        }
    };

    let mut out = Vec::new();
    let mut encoder = jpeg_encoder::Encoder::new(&mut out, quality);
    encoder.set_progressive(true);
    encoder.set_optimized_huffman_tables(true);
    encoder
        .encode(rgb.as_raw(), width, height, jpeg_encoder::ColorType::Rgb)
        .map_err(|e| ProxyError::Failure(format!("jpeg encode: {}", e)))?;
    Ok(out)
}

fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, ProxyError> {
    let mut out = Vec::new();
    img.write_with_encoder(PngEncoder::new_with_quality(
        &mut out,
        CompressionType::Best,
        PngFilter::Adaptive,
    ))
    .map_err(|e| ProxyError::Failure(format!("png encode: {}", e)))?;
    Ok(out)
}

fn encode_webp(img: &DynamicImage, quality: u8) -> Result<Vec<u8>, ProxyError> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut config = webp::WebPConfig::new()
        .map_err(|_| ProxyError::Failure("webp config init failed".to_string()))?;
    config.lossless = 0;
    config.quality = quality as f32;
    config.method = WEBP_METHOD;

    let encoded = webp::Encoder::from_rgba(rgba.as_raw(), width, height)
        .encode_advanced(&config)
        .map_err(|e| ProxyError::Failure(format!("webp encode: {:?}", e)))?;
    Ok(encoded.to_vec())
}
