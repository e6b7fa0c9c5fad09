//! priorscope-share — Reversible share-link encoding for scenarios.
//!
//! A scenario draft (no identity, no timestamps) is serialized to JSON
//! and wrapped in URL-safe base64 so it can ride in a query parameter.
//! Decoding is total: anything that fails to parse comes back as
//! `None` so callers can fall back instead of crashing.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use priorscope_common::{PriorscopeError, Result, ScenarioDraft};
use tracing::warn;

/// Query parameter carrying the encoded scenario.
const SHARE_PARAM: &str = "scenario";

/// Encode a draft as a URL-safe token.
pub fn encode_scenario(draft: &ScenarioDraft) -> Result<String> {
    let json = serde_json::to_vec(draft)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a token back into a draft; `None` on any malformed input.
pub fn decode_scenario(encoded: &str) -> Option<ScenarioDraft> {
    let bytes = match URL_SAFE_NO_PAD.decode(encoded.trim()) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, "share token is not valid base64");
            return None;
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(draft) => Some(draft),
        Err(e) => {
            warn!(error = %e, "share token payload is not a scenario");
            None
        }
    }
}

/// Build a full shareable URL from a base address.
pub fn share_url(base: &str, draft: &ScenarioDraft) -> Result<String> {
    if base.is_empty() {
        return Err(PriorscopeError::Codec("empty base URL".to_string()));
    }
    let encoded = encode_scenario(draft)?;
    Ok(format!("{}?{}={}", base.trim_end_matches('/'), SHARE_PARAM, encoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use priorscope_common::{Evidence, Hypotheses};
    use uuid::Uuid;

    fn sample_draft() -> ScenarioDraft {
        ScenarioDraft {
            name: "Moon Landing".to_string(),
            hypotheses: Hypotheses {
                h1: "It happened".to_string(),
                h2: "It was staged".to_string(),
            },
            prior_probability: 50.0,
            evidence: vec![Evidence {
                id: Uuid::nil(),
                description: "USSR acknowledged the landing".to_string(),
                likelihood_h1: 90.0,
                likelihood_h2: 20.0,
                certainty: 100.0,
                order: 1,
            }],
        }
    }

    #[test]
    fn round_trip_preserves_draft() {
        let draft = sample_draft();
        let encoded = encode_scenario(&draft).unwrap();
        assert_eq!(decode_scenario(&encoded), Some(draft));
    }

    #[test]
    fn token_is_url_safe() {
        let encoded = encode_scenario(&sample_draft()).unwrap();
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn garbage_decodes_to_none() {
        assert_eq!(decode_scenario("!!!not-base64!!!"), None);
        // Valid base64 but not a scenario payload
        let bogus = URL_SAFE_NO_PAD.encode(b"{\"hello\": 1}");
        assert_eq!(decode_scenario(&bogus), None);
        assert_eq!(decode_scenario(""), None);
    }

    #[test]
    fn share_url_embeds_token() {
        let draft = sample_draft();
        let url = share_url("https://example.com/app/", &draft).unwrap();
        let token = url.split("?scenario=").nth(1).unwrap();
        assert!(url.starts_with("https://example.com/app?scenario="));
        assert_eq!(decode_scenario(token), Some(draft));
    }

    #[test]
    fn share_url_rejects_empty_base() {
        assert!(share_url("", &sample_draft()).is_err());
    }
}
