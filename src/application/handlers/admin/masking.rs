//! Secret preview masking for admin responses.

use secrecy::{ExposeSecret, SecretString};

/// Masked preview of a secret: first and last four characters with the
/// middle elided. Short secrets are fully elided so a preview never
/// reveals more than eight characters or most of a short value.
pub fn mask_secret(secret: &SecretString) -> String {
    let exposed = secret.expose_secret();
    let chars: Vec<char> = exposed.chars().collect();
    if chars.len() <= 12 {
        return "••••".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}••••{tail}")
}
