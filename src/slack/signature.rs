//! Slack request signing (`X-Slack-Signature`, version `v0`).
//!
//! The signature is `v0=` followed by the lowercase hex HMAC-SHA256 of
//! `v0:{timestamp}:{raw body}` keyed with the app's signing secret.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use time::OffsetDateTime;

type HmacSha256 = Hmac<Sha256>;

pub const HEADER_TIMESTAMP: &str = "x-slack-request-timestamp";
pub const HEADER_SIGNATURE: &str = "x-slack-signature";

/// Oldest accepted request, in seconds behind the local clock.
///
/// There is no bound in the other direction: future timestamps pass.
pub const MAX_AGE_SECS: i64 = 300;

const VERSION_PREFIX: &str = "v0=";
const HEX_LEN: usize = 64;

fn mac_for(secret: &[u8], timestamp: &str, body: &[u8]) -> Option<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(secret).ok()?;
    mac.update(b"v0:");
    mac.update(timestamp.as_bytes());
    mac.update(b":");
    mac.update(body);
    Some(mac)
}

/// Header value Slack would send for this request.
#[cfg(test)]
pub fn compute_signature(secret: &[u8], timestamp: &str, body: &[u8]) -> String {
    let mac = mac_for(secret, timestamp, body).expect("HMAC accepts keys of any length");
    format!("{VERSION_PREFIX}{}", hex::encode(mac.finalize().into_bytes()))
}

/// Checks freshness and signature against an explicit clock (`now`, unix seconds).
///
/// Missing headers, a non-integer timestamp, a stale timestamp or any
/// difference from the exact lowercase rendering all reject.
pub fn verify(
    secret: &[u8],
    timestamp: Option<&str>,
    signature: Option<&str>,
    body: &[u8],
    now: i64,
) -> bool {
    let (Some(timestamp), Some(signature)) = (timestamp, signature) else {
        return false;
    };
    let Ok(issued_at) = timestamp.parse::<i64>() else {
        return false;
    };
    if now.saturating_sub(issued_at) > MAX_AGE_SECS {
        return false;
    }

    let (Some(claimed), Some(mac)) = (parse_signature(signature), mac_for(secret, timestamp, body))
    else {
        return false;
    };
    mac.verify_slice(&claimed).is_ok()
}

/// [`verify`] against the wall clock.
pub fn verify_now(
    secret: &[u8],
    timestamp: Option<&str>,
    signature: Option<&str>,
    body: &[u8],
) -> bool {
    verify(
        secret,
        timestamp,
        signature,
        body,
        OffsetDateTime::now_utc().unix_timestamp(),
    )
}

/// Digest bytes of a `v0=<64 lowercase hex>` header.
///
/// Uppercase hex is refused so that only the exact rendering matches.
fn parse_signature(header: &str) -> Option<Vec<u8>> {
    let hex_sig = header.strip_prefix(VERSION_PREFIX)?;
    if hex_sig.len() != HEX_LEN
        || !hex_sig.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    {
        return None;
    }
    hex::decode(hex_sig).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SECRET: &[u8] = b"8f742231b10e8888abcd99yyyzzz85a5";
    const NOW: i64 = 1_531_420_618;

    fn ts(offset: i64) -> String {
        (NOW + offset).to_string()
    }

    /// Example request from Slack's "Verifying requests from Slack" guide.
    #[test]
    fn slack_documentation_example() {
        let body = b"token=xyzz0WbapA4vBCDEFasx0q6G&team_id=T1DC2JH3J&team_domain=testteamnow&channel_id=G8PSS9T3V&channel_name=foobar&user_id=U2CERLKJA&user_name=roadrunner&command=%2Fwebhook-collect&text=&response_url=https%3A%2F%2Fhooks.slack.com%2Fcommands%2FT1DC2JH3J%2F397700885554%2F96rGlfmibIGlgcZRskXaIFfN&trigger_id=398738663015.47445629121.803a0bc887a14d10d2c447fce8b6703c";
        let expected = "v0=a2114d57b48eac39b9ad189dd8316235a7b4a8d21a10bd27519666489c69b503";
        assert_eq!(compute_signature(SECRET, "1531420618", body), expected);
        assert!(verify(SECRET, Some("1531420618"), Some(expected), body, NOW));
    }

    #[test]
    fn rendering_is_prefixed_lowercase_hex() {
        let sig = compute_signature(SECRET, &ts(0), b"text=beer");
        assert!(sig.starts_with("v0="));
        assert_eq!(sig.len(), 3 + HEX_LEN);
        assert!(sig[3..].bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }

    #[test]
    fn missing_headers_reject() {
        let sig = compute_signature(SECRET, &ts(0), b"x");
        assert!(!verify(SECRET, None, Some(&sig), b"x", NOW));
        assert!(!verify(SECRET, Some(&ts(0)), None, b"x", NOW));
        assert!(!verify(SECRET, None, None, b"x", NOW));
    }

    #[test]
    fn non_integer_timestamp_rejects() {
        let sig = compute_signature(SECRET, "soon", b"x");
        assert!(!verify(SECRET, Some("soon"), Some(&sig), b"x", NOW));
    }

    #[test]
    fn freshness_window_edges() {
        let at_edge = ts(-MAX_AGE_SECS);
        let sig = compute_signature(SECRET, &at_edge, b"x");
        assert!(verify(SECRET, Some(&at_edge), Some(&sig), b"x", NOW));

        let stale = ts(-MAX_AGE_SECS - 1);
        let sig = compute_signature(SECRET, &stale, b"x");
        assert!(!verify(SECRET, Some(&stale), Some(&sig), b"x", NOW));
    }

    #[test]
    fn future_timestamps_are_accepted() {
        let future = ts(3_600);
        let sig = compute_signature(SECRET, &future, b"x");
        assert!(verify(SECRET, Some(&future), Some(&sig), b"x", NOW));
    }

    #[test]
    fn wrong_secret_rejects() {
        let sig = compute_signature(b"other-secret", &ts(0), b"x");
        assert!(!verify(SECRET, Some(&ts(0)), Some(&sig), b"x", NOW));
    }

    #[test]
    fn uppercase_or_malformed_signature_rejects() {
        let sig = compute_signature(SECRET, &ts(0), b"x");
        let upper = format!("v0={}", sig[3..].to_uppercase());
        assert!(!verify(SECRET, Some(&ts(0)), Some(&upper), b"x", NOW));
        assert!(!verify(SECRET, Some(&ts(0)), Some(&sig[3..]), b"x", NOW));
        assert!(!verify(SECRET, Some(&ts(0)), Some("v0="), b"x", NOW));
        assert!(!verify(SECRET, Some(&ts(0)), Some("v1=abcd"), b"x", NOW));
        assert!(!verify(SECRET, Some(&ts(0)), Some(&format!("{sig}00")), b"x", NOW));
    }

    #[test]
    fn timestamp_is_part_of_the_signed_string() {
        let sig = compute_signature(SECRET, &ts(0), b"x");
        assert!(!verify(SECRET, Some(&ts(-1)), Some(&sig), b"x", NOW));
    }

    #[test]
    fn verify_now_accepts_fresh_request() {
        let now = OffsetDateTime::now_utc().unix_timestamp().to_string();
        let sig = compute_signature(SECRET, &now, b"text=beer");
        assert!(verify_now(SECRET, Some(&now), Some(&sig), b"text=beer"));
    }

    proptest! {
        #[test]
        fn prop_fresh_signatures_verify(
            body in any::<Vec<u8>>(),
            secret in any::<Vec<u8>>(),
            age in 0i64..=MAX_AGE_SECS,
        ) {
            let stamp = ts(-age);
            let sig = compute_signature(&secret, &stamp, &body);
            prop_assert!(verify(&secret, Some(&stamp), Some(&sig), &body, NOW));
        }

        #[test]
        fn prop_signature_bit_flip_rejects(
            body in any::<Vec<u8>>(),
            idx in any::<prop::sample::Index>(),
            bit in 0u8..7,
        ) {
            let stamp = ts(0);
            let sig = compute_signature(SECRET, &stamp, &body);
            let mut bytes = sig.into_bytes();
            let i = idx.index(bytes.len());
            bytes[i] ^= 1 << bit;
            let mutated = String::from_utf8(bytes).expect("ascii stays ascii");
            prop_assert!(!verify(SECRET, Some(&stamp), Some(&mutated), &body, NOW));
        }

        #[test]
        fn prop_body_bit_flip_rejects(
            body in prop::collection::vec(any::<u8>(), 1..256),
            idx in any::<prop::sample::Index>(),
            bit in 0u8..8,
        ) {
            let stamp = ts(0);
            let sig = compute_signature(SECRET, &stamp, &body);
            let mut mutated = body.clone();
            let i = idx.index(mutated.len());
            mutated[i] ^= 1 << bit;
            prop_assert!(!verify(SECRET, Some(&stamp), Some(&sig), &mutated, NOW));
        }

        #[test]
        fn prop_stale_requests_reject(body in any::<Vec<u8>>(), extra in 1i64..1_000_000) {
            let stamp = ts(-MAX_AGE_SECS - extra);
            let sig = compute_signature(SECRET, &stamp, &body);
            prop_assert!(!verify(SECRET, Some(&stamp), Some(&sig), &body, NOW));
        }

        #[test]
        fn prop_arbitrary_headers_never_panic(stamp: String, sig: String, body: Vec<u8>) {
            let _ = verify(SECRET, Some(&stamp), Some(&sig), &body, NOW);
        }
    }
}
