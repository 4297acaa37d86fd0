//! Single-page PDF assembly over `lopdf`.
//!
//! The renderer composes a page from draw calls; this module owns the
//! translation into PDF objects: one content stream of text-show operations,
//! an optional full-page image XObject beneath them, base-14 Type1 font
//! resources, and the document skeleton. Streams are left uncompressed so
//! the draw operations stay inspectable after serialization.

use chrono::Local;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use super::renderer::RenderError;

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";
const BACKGROUND_RESOURCE: &str = "Im0";

/// Fonts available on the page. Both are base-14 fonts, so nothing is
/// embedded and text is limited to the standard Helvetica encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageFont {
    Regular,
    Bold,
}

impl PageFont {
    fn resource_name(self) -> &'static str {
        match self {
            PageFont::Regular => FONT_REGULAR,
            PageFont::Bold => FONT_BOLD,
        }
    }
}

struct BackgroundImage {
    jpeg: Vec<u8>,
    width_px: u32,
    height_px: u32,
}

/// An in-progress page. Draw calls append operations in order; `finish`
/// assembles and serializes the document.
pub(crate) struct PageCanvas {
    width: f32,
    height: f32,
    operations: Vec<Operation>,
    background: Option<BackgroundImage>,
}

impl PageCanvas {
    /// A4 portrait, 595x842 points.
    pub(crate) fn a4() -> Self {
        Self {
            width: 595.0,
            height: 842.0,
            operations: Vec::new(),
            background: None,
        }
    }

    /// Draw a JPEG-encoded image scaled to cover the full page. Call before
    /// any text so the image stays beneath the text layer.
    pub(crate) fn draw_background_jpeg(&mut self, jpeg: Vec<u8>, width_px: u32, height_px: u32) {
        self.operations.push(Operation::new("q", vec![]));
        self.operations.push(Operation::new(
            "cm",
            vec![
                self.width.into(),
                0.into(),
                0.into(),
                self.height.into(),
                0.into(),
                0.into(),
            ],
        ));
        self.operations
            .push(Operation::new("Do", vec![BACKGROUND_RESOURCE.into()]));
        self.operations.push(Operation::new("Q", vec![]));

        self.background = Some(BackgroundImage {
            jpeg,
            width_px,
            height_px,
        });
    }

    /// Show one line of text with its baseline origin at `(x, y)`.
    pub(crate) fn draw_text(&mut self, font: PageFont, size: f32, x: f32, y: f32, text: &str) {
        self.operations.push(Operation::new("BT", vec![]));
        self.operations.push(Operation::new(
            "Tf",
            vec![font.resource_name().into(), size.into()],
        ));
        self.operations
            .push(Operation::new("Td", vec![x.into(), y.into()]));
        self.operations
            .push(Operation::new("Tj", vec![Object::string_literal(text)]));
        self.operations.push(Operation::new("ET", vec![]));
    }

    /// Assemble the page tree and serialize the document to a byte buffer.
    pub(crate) fn finish(self) -> Result<Vec<u8>, RenderError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_regular_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let font_bold_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
        });

        let mut resources = dictionary! {
            "Font" => dictionary! {
                FONT_REGULAR => font_regular_id,
                FONT_BOLD => font_bold_id,
            },
        };

        if let Some(background) = self.background {
            let image_id = doc.add_object(Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => background.width_px as i64,
                    "Height" => background.height_px as i64,
                    "ColorSpace" => "DeviceRGB",
                    "BitsPerComponent" => 8,
                    "Filter" => "DCTDecode",
                },
                background.jpeg,
            ));
            resources.set("XObject", dictionary! { BACKGROUND_RESOURCE => image_id });
        }

        let content = Content {
            operations: self.operations,
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Resources" => resources,
            "MediaBox" => vec![0.into(), 0.into(), self.width.into(), self.height.into()],
            "Contents" => content_id,
        });

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let info_id = doc.add_object(dictionary! {
            "Producer" => Object::string_literal(concat!("gsp-cert ", env!("CARGO_PKG_VERSION"))),
            "CreationDate" => Object::string_literal(Local::now().format("D:%Y%m%d%H%M%S").to_string()),
        });
        doc.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        Ok(buffer)
    }
}
