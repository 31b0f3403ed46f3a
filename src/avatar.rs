//! Avatar Helpers
//!
//! The avatar travels as a base64 body plus its MIME type. These helpers
//! turn that pair into something renderable and read a picked file back
//! into the same shape.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use wasm_bindgen_futures::JsFuture;

/// Inline `data:` URL for an `<img>` preview
pub fn data_url(content_type: &str, base64_body: &str) -> String {
    format!("data:{};base64,{}", content_type, base64_body)
}

/// Decoded size of a base64 body, 0 when the body is not valid base64
pub fn byte_size(base64_body: &str) -> usize {
    STANDARD.decode(base64_body).map(|b| b.len()).unwrap_or(0)
}

pub fn format_bytes(size: usize) -> String {
    if size < 1024 {
        format!("{} bytes", size)
    } else if size < 1024 * 1024 {
        format!("{:.1} KB", size as f64 / 1024.0)
    } else {
        format!("{:.1} MB", size as f64 / (1024.0 * 1024.0))
    }
}

/// Read a picked image file into `(content_type, base64_body)`
pub async fn read_image_file(file: web_sys::File) -> Result<(String, String), String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| format!("could not read file {}", file.name()))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok((file.type_(), STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url() {
        assert_eq!(
            data_url("image/png", "aGVsbG8="),
            "data:image/png;base64,aGVsbG8="
        );
    }

    #[test]
    fn test_byte_size_decodes() {
        // "hello" is 5 bytes
        assert_eq!(byte_size("aGVsbG8="), 5);
        assert_eq!(byte_size("not base64!!!"), 0);
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 bytes");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
