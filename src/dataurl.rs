//! `data:` URL decoding.
//!
//! Browsers and design tools hand out icons as data URLs
//! (`data:image/svg+xml;base64,PHN2Zy...`). These decode to raw bytes plus the
//! declared mime type so they can be fed to the transformer like a file.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use percent_encoding::percent_decode_str;
use thiserror::Error;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

#[derive(Debug, Error)]
pub enum DataUrlError {
    #[error("not a data url (missing `data:` scheme)")]
    MissingScheme,

    #[error("data url has no `,` separating header and payload")]
    MissingPayload,

    #[error("invalid base64 payload")]
    Base64(#[from] base64::DecodeError),
}

/// A decoded data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    /// Declared mime type, empty when the header omits it.
    pub mime: String,
    pub data: Vec<u8>,
}

impl DataUrl {
    /// Check whether `s` looks like a data URL without decoding it.
    pub fn is_data_url(s: &str) -> bool {
        s.trim_start()
            .get(..SCHEME.len())
            .is_some_and(|p| p.eq_ignore_ascii_case(SCHEME))
    }

    /// Parse and decode `data:[<mime>][;params][;base64],<payload>`.
    pub fn parse(s: &str) -> Result<Self, DataUrlError> {
        let s = s.trim();
        if !Self::is_data_url(s) {
            return Err(DataUrlError::MissingScheme);
        }

        let (header, payload) = s[SCHEME.len()..]
            .split_once(',')
            .ok_or(DataUrlError::MissingPayload)?;

        let mime = header.split(';').next().unwrap_or_default().to_string();

        let data = if header.to_ascii_lowercase().ends_with(BASE64_MARKER) {
            // base64 payloads in the wild are sometimes wrapped or padded with spaces
            let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
            STANDARD.decode(compact)?
        } else {
            percent_decode_str(payload).collect()
        };

        Ok(Self { mime, data })
    }

    /// Payload as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_svg() {
        let url = format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(r#"<svg><g id="a"/></svg>"#)
        );
        let decoded = DataUrl::parse(&url).unwrap();
        assert_eq!(decoded.mime, "image/svg+xml");
        assert_eq!(decoded.text(), r#"<svg><g id="a"/></svg>"#);
    }

    #[test]
    fn test_percent_encoded_svg() {
        let decoded =
            DataUrl::parse("data:image/svg+xml;charset=utf-8,%3Csvg%3E%3C%2Fsvg%3E").unwrap();
        assert_eq!(decoded.mime, "image/svg+xml");
        assert_eq!(decoded.text(), "<svg></svg>");
    }

    #[test]
    fn test_missing_mime() {
        let decoded = DataUrl::parse("data:,hello").unwrap();
        assert_eq!(decoded.mime, "");
        assert_eq!(decoded.data, b"hello");
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            DataUrl::parse("icons/home.svg"),
            Err(DataUrlError::MissingScheme)
        ));
        assert!(matches!(
            DataUrl::parse("data:image/png;base64"),
            Err(DataUrlError::MissingPayload)
        ));
        assert!(matches!(
            DataUrl::parse("data:image/png;base64,@@@"),
            Err(DataUrlError::Base64(_))
        ));
    }

    #[test]
    fn test_is_data_url() {
        assert!(DataUrl::is_data_url("data:image/png;base64,AAAA"));
        assert!(DataUrl::is_data_url("  DATA:,x"));
        assert!(!DataUrl::is_data_url("./data.svg"));
        assert!(!DataUrl::is_data_url("dat"));
    }
}
