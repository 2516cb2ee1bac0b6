//! One-shot status messages carried across the post/redirect/get cycle in a
//! signed cookie.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

pub const COOKIE_NAME: &str = "flash";

/// Messages kept queued while the client has not looked at the form.
pub const MAX_PENDING: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Success,
    Danger,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Success => "success",
            Category::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub category: Category,
    pub message: String,
}

impl Flash {
    pub fn success<S: Into<String>>(message: S) -> Self {
        Self {
            category: Category::Success,
            message: message.into(),
        }
    }

    pub fn danger<S: Into<String>>(message: S) -> Self {
        Self {
            category: Category::Danger,
            message: message.into(),
        }
    }
}

type HmacSha256 = Hmac<Sha256>;

fn signer(secret: &str) -> Option<HmacSha256> {
    HmacSha256::new_from_slice(secret.as_bytes()).ok()
}

/// Drops all but the newest [`MAX_PENDING`] messages.
pub fn keep_latest(flashes: &mut Vec<Flash>) {
    if flashes.len() > MAX_PENDING {
        flashes.drain(..flashes.len() - MAX_PENDING);
    }
}

/// Encodes `flashes` as `payload.signature`.
pub fn seal(secret: &str, flashes: &[Flash]) -> Option<String> {
    let json = serde_json::to_vec(flashes).ok()?;
    let payload = URL_SAFE_NO_PAD.encode(json);
    let mut mac = signer(secret)?;
    mac.update(payload.as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());
    Some(format!("{}.{}", payload, signature))
}

/// Decodes a cookie value produced by [`seal`]. Anything unsigned, tampered
/// with, or malformed yields no messages.
pub fn open(secret: &str, value: &str) -> Vec<Flash> {
    let (payload, signature) = match value.rsplit_once('.') {
        Some(parts) => parts,
        None => return Vec::new(),
    };
    let signature = match hex::decode(signature) {
        Ok(bytes) => bytes,
        Err(_) => return Vec::new(),
    };
    let verified = signer(secret)
        .map(|mut mac| {
            mac.update(payload.as_bytes());
            mac.verify_slice(&signature).is_ok()
        })
        .unwrap_or(false);
    if !verified {
        log::warn!("Discarding flash cookie with a bad signature");
        return Vec::new();
    }
    URL_SAFE_NO_PAD
        .decode(payload)
        .ok()
        .and_then(|json| serde_json::from_slice(&json).ok())
        .unwrap_or_default()
}

pub fn set_cookie(secret: &str, flashes: &[Flash]) -> String {
    match seal(secret, flashes) {
        Some(value) => format!("{}={}; Path=/; HttpOnly; SameSite=Lax", COOKIE_NAME, value),
        None => {
            log::error!("Could not sign flash cookie; dropping {} message(s)", flashes.len());
            clear_cookie()
        }
    }
}

pub fn clear_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", COOKIE_NAME)
}
