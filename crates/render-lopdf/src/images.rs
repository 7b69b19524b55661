//! Image XObjects. JPEG data is embedded as-is with `DCTDecode`; every other
//! supported format is decoded to RGB and Flate-compressed, with a soft mask
//! when the source has transparency.

use crate::error::RenderError;
use crate::writer::PdfWriter;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::{ColorType, ImageFormat};
use lopdf::{Object, ObjectId, Stream, dictionary};
use stagerider_layout::ImageData;
use std::io::{Seek, Write};

struct DecodedImage {
    width: u32,
    height: u32,
    color_space: &'static str,
    filter: &'static str,
    data: Vec<u8>,
    alpha: Option<Vec<u8>>,
}

fn flate_compress(data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

fn decode(image: &ImageData) -> Result<DecodedImage, RenderError> {
    let bytes = image.bytes();
    let unsupported = |reason: String| RenderError::Image {
        key: image.key().to_string(),
        reason,
    };
    let format = image::guess_format(bytes).map_err(|e| unsupported(e.to_string()))?;
    let decoded = image::load_from_memory(bytes).map_err(|e| unsupported(e.to_string()))?;
    let (width, height) = (decoded.width(), decoded.height());

    if format == ImageFormat::Jpeg {
        let color_space = match decoded.color() {
            ColorType::L8 | ColorType::La8 => "DeviceGray",
            _ => "DeviceRGB",
        };
        return Ok(DecodedImage {
            width,
            height,
            color_space,
            filter: "DCTDecode",
            data: bytes.to_vec(),
            alpha: None,
        });
    }

    let rgba = decoded.to_rgba8();
    let mut rgb = Vec::with_capacity((width * height * 3) as usize);
    let mut alpha = Vec::with_capacity((width * height) as usize);
    let mut has_alpha = false;
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        if a != 255 {
            has_alpha = true;
        }
        rgb.extend_from_slice(&[r, g, b]);
        alpha.push(a);
    }

    Ok(DecodedImage {
        width,
        height,
        color_space: "DeviceRGB",
        filter: "FlateDecode",
        data: flate_compress(&rgb)?,
        alpha: if has_alpha {
            Some(flate_compress(&alpha)?)
        } else {
            None
        },
    })
}

/// Buffers the XObject (and its soft mask) and returns the image object id.
pub(crate) fn embed_image<W: Write + Seek>(
    writer: &mut PdfWriter<W>,
    image: &ImageData,
) -> Result<ObjectId, RenderError> {
    let decoded = decode(image)?;
    log::debug!(
        "[RENDER] Embedding image {} ({}x{}, {}).",
        image.key(),
        decoded.width,
        decoded.height,
        decoded.filter
    );

    let smask_id = decoded.alpha.map(|alpha| {
        let dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => decoded.width as i64,
            "Height" => decoded.height as i64,
            "ColorSpace" => "DeviceGray",
            "BitsPerComponent" => 8,
            "Filter" => "FlateDecode",
        };
        writer.add_object(Object::Stream(Stream::new(dict, alpha)))
    });

    let mut dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => decoded.width as i64,
        "Height" => decoded.height as i64,
        "ColorSpace" => decoded.color_space,
        "BitsPerComponent" => 8,
        "Filter" => decoded.filter,
    };
    if let Some(id) = smask_id {
        dict.set("SMask", id);
    }
    Ok(writer.add_object(Object::Stream(Stream::new(dict, decoded.data))))
}
