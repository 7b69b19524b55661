use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::debug;
use serde_json::Value;
use stagerider_layout::ImageData;

/// Decodes a `data:` URI or bare base64 payload. Anything that does not decode
/// is treated as no image.
pub fn decode_image(value: &Value) -> Option<ImageData> {
    let raw = value.as_str()?.trim();
    if raw.is_empty() {
        return None;
    }
    let payload = match raw.strip_prefix("data:") {
        Some(rest) => rest.split_once(',')?.1,
        None => raw,
    };
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    match STANDARD.decode(compact.as_bytes()) {
        Ok(bytes) if !bytes.is_empty() => Some(ImageData::new(bytes)),
        Ok(_) => None,
        Err(e) => {
            debug!("[ASSEMBLER] Ignoring image that is not valid base64: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_uris_and_bare_payloads_decode_alike() {
        let uri = decode_image(&json!("data:image/png;base64,aGVsbG8=")).unwrap();
        let bare = decode_image(&json!("aGVs\nbG8=")).unwrap();
        assert_eq!(uri.bytes(), b"hello");
        assert_eq!(uri.key(), bare.key());
    }

    #[test]
    fn invalid_values_are_absent() {
        assert!(decode_image(&json!("not base64!")).is_none());
        assert!(decode_image(&json!("")).is_none());
        assert!(decode_image(&json!("data:image/png;base64")).is_none());
        assert!(decode_image(&json!(12)).is_none());
    }
}
