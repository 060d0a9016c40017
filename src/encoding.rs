use anyhow::Result;
use base64::{engine::general_purpose, Engine as _};

pub fn base64_encode(value: &str) -> String {
    general_purpose::STANDARD.encode(value)
}

pub fn base64_decode(value: &str) -> Result<String> {
    let data = general_purpose::STANDARD.decode(value)?;
    Ok(String::from_utf8(data)?)
}

// URL-safe variants are unpadded, for tokens embedded in URLs.
pub fn encode_url(value: &str) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(value)
}

pub fn decode_url(value: &str) -> Result<String> {
    let data = general_purpose::URL_SAFE_NO_PAD.decode(value)?;
    Ok(String::from_utf8(data)?)
}
