use std::fs;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;

use super::assets::{BackgroundAssets, BackgroundLookup};
use super::layout::FIELD_ANCHORS;
use super::pdf::{PageCanvas, PageFont};
use super::CertificateFields;

/// Where the missing-background warning lands when the template image is
/// absent. The warning replaces the background, not the field text.
const WARNING_X: f32 = 100.0;
const WARNING_Y: f32 = 800.0;
const WARNING_SIZE: f32 = 12.0;

const BACKGROUND_JPEG_QUALITY: u8 = 90;

/// Failure to produce a document. A missing background asset is not an
/// error (the page degrades to a warning string); anything that goes wrong
/// while reading an existing asset, drawing, or serializing is.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("background asset unreadable: {0}")]
    AssetRead(#[source] std::io::Error),
    #[error("background image rejected: {0}")]
    Background(#[from] image::ImageError),
    #[error("document assembly failed: {0}")]
    Pdf(#[from] lopdf::Error),
}

/// Stateless renderer placing certificate fields onto the Form A template.
///
/// Every invocation allocates its own canvas and buffer; concurrent calls
/// share nothing but read-only access to the background asset file.
#[derive(Debug, Clone)]
pub struct CertificateRenderer {
    assets: BackgroundAssets,
}

impl CertificateRenderer {
    pub fn new(assets: BackgroundAssets) -> Self {
        Self { assets }
    }

    /// Render the fields onto a single A4 page and serialize it.
    ///
    /// Multi-line values stack downward from the field anchor, one font-size
    /// step per line, without wrapping or truncation: a value with many
    /// lines runs past the template's visual boundary.
    pub fn render(&self, fields: &CertificateFields) -> Result<Vec<u8>, RenderError> {
        let mut canvas = PageCanvas::a4();

        match self.assets.page_background(1) {
            BackgroundLookup::Available(path) => {
                let (jpeg, width_px, height_px) = prepare_background(&path)?;
                canvas.draw_background_jpeg(jpeg, width_px, height_px);
            }
            BackgroundLookup::Missing { filename } => {
                tracing::warn!(%filename, "background asset missing, degrading to in-page warning");
                canvas.draw_text(
                    PageFont::Bold,
                    WARNING_SIZE,
                    WARNING_X,
                    WARNING_Y,
                    &format!("Missing background: {filename}"),
                );
            }
        }

        for (field, anchor) in FIELD_ANCHORS {
            let value = fields.value(field);
            if value.is_empty() {
                continue;
            }
            for (line_index, line) in value.lines().enumerate() {
                canvas.draw_text(
                    PageFont::Regular,
                    anchor.size,
                    anchor.x,
                    anchor.y - line_index as f32 * anchor.size,
                    line,
                );
            }
        }

        canvas.finish()
    }
}

/// Decode the asset and re-encode it as RGB JPEG for embedding. Accepts any
/// format the image backend understands (the templates ship as JPEG, but a
/// PNG dropped into the asset directory works too).
fn prepare_background(path: &Path) -> Result<(Vec<u8>, u32, u32), RenderError> {
    let bytes = fs::read(path).map_err(RenderError::AssetRead)?;
    let decoded = image::load_from_memory(&bytes)?;
    let rgb = decoded.to_rgb8();
    let (width_px, height_px) = rgb.dimensions();

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, BACKGROUND_JPEG_QUALITY).encode(
        rgb.as_raw(),
        width_px,
        height_px,
        ExtendedColorType::Rgb8,
    )?;

    Ok((jpeg, width_px, height_px))
}
