use base64::{DecodeError, Engine, engine::general_purpose::STANDARD};

use crate::mail::{InlineImage, SIGNATURE_CID, SIGNATURE_FILENAME};

const DEFAULT_CONTENT_TYPE: &str = "image/png";

/// Decodes a canvas snapshot such as `data:image/png;base64,iVBOR...`.
///
/// A bare base64 string is accepted too. Empty input, or a payload that decodes
/// to nothing, yields no attachment.
pub fn decode_signature(value: &str) -> Result<Option<InlineImage>, DecodeError> {
    let (content_type, payload) = match value.rsplit_once(";base64,") {
        Some((prefix, payload)) => {
            let mime = prefix
                .strip_prefix("data:")
                .filter(|mime| !mime.is_empty())
                .unwrap_or(DEFAULT_CONTENT_TYPE);
            (mime, payload)
        }
        None => (DEFAULT_CONTENT_TYPE, value),
    };

    let data = STANDARD.decode(payload.trim())?;
    if data.is_empty() {
        return Ok(None);
    }

    Ok(Some(InlineImage {
        filename: SIGNATURE_FILENAME.to_string(),
        content_id: SIGNATURE_CID.to_string(),
        content_type: content_type.to_string(),
        data,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIXEL: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    #[test]
    fn test_data_uri_decoded() {
        let image = decode_signature(&format!("data:image/png;base64,{PIXEL}"))
            .unwrap()
            .unwrap();

        assert_eq!(image.data, STANDARD.decode(PIXEL).unwrap());
        assert!(!image.data.is_empty());
        assert_eq!(image.content_type, "image/png");
        assert_eq!(image.content_id, SIGNATURE_CID);
        assert_eq!(image.filename, "signature.png");
    }

    #[test]
    fn test_mime_taken_from_prefix() {
        let image = decode_signature("data:image/jpeg;base64,/9j/4AAQ").unwrap().unwrap();
        assert_eq!(image.content_type, "image/jpeg");
    }

    #[test]
    fn test_bare_base64_accepted() {
        let image = decode_signature(PIXEL).unwrap().unwrap();
        assert_eq!(image.content_type, DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn test_empty_payload_is_no_attachment() {
        assert_eq!(decode_signature("").unwrap(), None);
        assert_eq!(decode_signature("data:image/png;base64,").unwrap(), None);
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(decode_signature("data:image/png;base64,@@not base64@@").is_err());
    }
}
