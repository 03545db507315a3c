//! Share links that carry a whole form in the URL.
//!
//! A form is packed into a token by serializing an [`EncodedForm`] to JSON,
//! compressing it with raw deflate and encoding the bytes as unpadded
//! URL-safe base64. The token travels in the fragment of
//! `{origin}/{route}#{token}`, so it never reaches a server.
//!
//! Encoding reports failures as [`ShareError`]. Decoding is lenient about its
//! input but never errors: any token that cannot be unpacked yields `None`.

use std::io::{Read, Write};

use base64ct::{Base64UrlUnpadded, Encoding};
use flate2::{Compression, read::DeflateDecoder, write::DeflateEncoder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::field::Field;

mod config;
mod errors;

pub use config::{
    DEFAULT_ORIGIN, DEFAULT_ROUTE, Environment, MAX_URL_LENGTH, ShareConfig, StaticEnvironment,
};
pub use errors::ShareError;

/// Name given to a shared form that has none.
pub const DEFAULT_FORM_NAME: &str = "Shared Form";

/// Upper bound on the decompressed size of a token.
pub const MAX_DECODED_BYTES: u64 = 4 * 1024 * 1024;

/// The unit of sharing: a named field tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedForm {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<Field>,
}

#[derive(Serialize)]
struct EncodedFormRef<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    fields: &'a [Field],
}

/// Packs a form into a URL-safe token.
///
/// An empty or missing `name` becomes [`DEFAULT_FORM_NAME`].
pub fn encode_form(
    fields: &[Field],
    name: Option<&str>,
    description: Option<&str>,
) -> Result<String, ShareError> {
    let form = EncodedFormRef {
        name: name.filter(|n| !n.is_empty()).unwrap_or(DEFAULT_FORM_NAME),
        description,
        fields,
    };

    let json = serde_json::to_vec(&form).map_err(ShareError::encode)?;
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json).map_err(ShareError::encode)?;
    let compressed = encoder.finish().map_err(ShareError::encode)?;

    Ok(Base64UrlUnpadded::encode_string(&compressed))
}

/// Builds the full share link for a form.
pub fn encode_form_to_url(
    env: &impl Environment,
    fields: &[Field],
    name: Option<&str>,
    description: Option<&str>,
) -> Result<String, ShareError> {
    config::validate_origin(env.origin())?;
    let token = encode_form(fields, name, description)?;
    let link = format!(
        "{}/{}#{}",
        env.origin().trim_end_matches('/'),
        env.route().trim_matches('/'),
        token
    );
    debug!(length = link.len(), "generated share link");
    Ok(link)
}

/// Unpacks a token produced by [`encode_form`].
///
/// Returns `None` if the token is not valid base64, does not inflate, inflates
/// past [`MAX_DECODED_BYTES`], or does not hold an [`EncodedForm`].
pub fn decode_url_to_form(token: &str) -> Option<EncodedForm> {
    let compressed = match Base64UrlUnpadded::decode_vec(token.trim()) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!(error = %err, "share token is not valid base64");
            return None;
        }
    };

    let mut json = Vec::new();
    let mut decoder = DeflateDecoder::new(compressed.as_slice()).take(MAX_DECODED_BYTES + 1);
    if let Err(err) = decoder.read_to_end(&mut json) {
        debug!(error = %err, "share token does not inflate");
        return None;
    }
    if json.len() as u64 > MAX_DECODED_BYTES {
        debug!(limit = MAX_DECODED_BYTES, "share token inflates past the size limit");
        return None;
    }

    match serde_json::from_slice(&json) {
        Ok(form) => Some(form),
        Err(err) => {
            debug!(error = %err, "share token does not hold a form");
            None
        }
    }
}

/// The token part of a share link: everything after the first `#`, or the
/// whole input if it has no fragment.
pub fn extract_token(link: &str) -> &str {
    match link.split_once('#') {
        Some((_, token)) => token,
        None => link,
    }
}

/// Returns true if `url` is no longer than [`MAX_URL_LENGTH`].
pub fn is_url_safe(url: &str) -> bool {
    is_url_safe_with(url, MAX_URL_LENGTH)
}

/// Returns true if `url` is no longer than `limit` bytes.
pub fn is_url_safe_with(url: &str, limit: usize) -> bool {
    url.len() <= limit
}
