#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use serde_json::{Value, json};
use std::io::Cursor;

/// A rider with every section filled in
pub fn full_rider() -> Value {
    json!({
        "general-info": {
            "artistName": "Banda Teste",
            "tourName": "Summer Tour",
            "version": 2,
            "contacts": {
                "foh": { "name": "Ana", "phone": "+55 11 99999-0000", "email": "ana@example.com" },
                "roadManager": { "name": "Beto" }
            },
            "stagePlot": png_data_uri(8, 6)
        },
        "pa": {
            "systems": [{ "brand": "L-Acoustics", "model": "K2", "supplier": "promoter" }],
            "performance": { "spl": "105 dBA" }
        },
        "consoles": {
            "foh": { "brand": "DiGiCo", "model": "SD12", "supplier": "band" },
            "monitor": { "brand": "Yamaha", "model": "CL5", "alternatives": ["Avid S6L"] }
        },
        "listening-systems": { "iem": { "quantity": 4 } },
        "auxiliary-equipment": { "risers": { "quantity": 2, "model": "Steel deck 2x1" } },
        "input-list": { "inputs": band_inputs() },
        "monitor-mixes": { "mixes": mixes(&["stereo", "mono", "stereo"]) },
        "final-notes": { "notes": "Load-in at 14h" }
    })
}

/// `count` plain input rows numbered from 1
pub fn inputs(count: usize) -> Vec<Value> {
    (1..=count)
        .map(|i| json!({ "channelNumber": i.to_string(), "source": format!("Source {}", i) }))
        .collect()
}

/// Two band-owned SM58s, a band-owned DI and a house mic
pub fn band_inputs() -> Vec<Value> {
    vec![
        json!({ "channelNumber": "1", "source": "Lead vox", "microphoneOrDI": "Shure SM58", "suppliedByArtist": true }),
        json!({ "channelNumber": "2", "source": "Back vox", "microphoneOrDI": "Shure SM58", "suppliedByArtist": true }),
        json!({ "channelNumber": "3", "source": "Bass", "microphoneOrDI": "Radial JDI", "suppliedByArtist": "band" }),
        json!({ "channelNumber": "4", "source": "Kick", "microphoneOrDI": "AKG D112", "standType": "short-boom" }),
    ]
}

pub fn mixes(formats: &[&str]) -> Vec<Value> {
    formats
        .iter()
        .map(|format| json!({ "formato": format, "tipo": "wedge" }))
        .collect()
}

/// A small opaque PNG, base64-encoded as a data URI
pub fn png_data_uri(width: u32, height: u32) -> String {
    let image = RgbaImage::from_pixel(width, height, Rgba([200, 30, 30, 255]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode png");
    format!("data:image/png;base64,{}", STANDARD.encode(&bytes))
}
