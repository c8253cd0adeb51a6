//! Naming/decode protocol for inbound messages
//!
//! Messages carry an optional in-band naming command distinguished by the
//! reserved marker `name=`. Decoding is a pure transformation from raw
//! payload bytes plus the current identity to a possibly updated identity
//! and a framed display line. The raw payload is always echoed verbatim,
//! including when it was itself a naming command.

// ----------------------------------------------------------------------------
// Protocol Constants
// ----------------------------------------------------------------------------

/// Marker substring that flags a payload as a naming command.
pub const NAME_MARKER: &[u8] = b"name=";

/// Separator between the sender identity and the payload in framed output.
pub const SEPARATOR: &[u8] = b": ";

// ----------------------------------------------------------------------------
// Identity
// ----------------------------------------------------------------------------

/// Current sender display name.
///
/// Kept as raw bytes so payloads that are not valid UTF-8 pass through
/// unchanged. Never empty after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity(Vec<u8>);

impl Identity {
    /// Wrap a display name. An empty name falls back to the default so the
    /// non-empty invariant holds.
    pub fn new(name: impl Into<Vec<u8>>) -> Self {
        let bytes = name.into();
        if bytes.is_empty() {
            Self::default()
        } else {
            Self(bytes)
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Default for Identity {
    fn default() -> Self {
        Identity(b"User".to_vec())
    }
}

// ----------------------------------------------------------------------------
// Decoding
// ----------------------------------------------------------------------------

/// Decode one raw payload against the current identity.
///
/// If the payload contains the `name=` marker, the bytes after the first `=`
/// become the new identity; an empty remainder keeps the current one. The
/// framed line uses the post-update identity, so a naming command is echoed
/// already tagged with the name it set.
pub fn decode(raw: &[u8], current: &Identity) -> (Identity, Vec<u8>) {
    let identity = match name_command(raw) {
        Some(name) => Identity::new(name),
        None => current.clone(),
    };
    let framed = frame(&identity, raw);
    (identity, framed)
}

/// Build the display line `identity ++ ": " ++ raw`.
///
/// One-way output: identity or payload may themselves contain the separator,
/// so the format is produced for display and never parsed back.
pub fn frame(identity: &Identity, raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(identity.as_bytes().len() + SEPARATOR.len() + raw.len());
    out.extend_from_slice(identity.as_bytes());
    out.extend_from_slice(SEPARATOR);
    out.extend_from_slice(raw);
    out
}

/// Extract the name carried by a naming command, if any.
///
/// The marker check and the split are separate on purpose: the payload is a
/// command whenever it contains `name=` anywhere, but the name itself is
/// everything after the first `=` in the payload.
fn name_command(raw: &[u8]) -> Option<&[u8]> {
    if !contains(raw, NAME_MARKER) {
        return None;
    }
    let pos = raw.iter().position(|&b| b == b'=')?;
    let rest = &raw[pos + 1..];
    (!rest.is_empty()).then_some(rest)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_payload_keeps_identity() {
        let id = Identity::new("User");
        let (next, framed) = decode(b"hello", &id);
        assert_eq!(next, id);
        assert_eq!(framed, b"User: hello");
    }

    #[test]
    fn naming_command_updates_identity() {
        let (next, framed) = decode(b"name=Alice", &Identity::new("User"));
        assert_eq!(next.as_bytes(), b"Alice");
        // The same call frames with the post-update identity.
        assert_eq!(framed, b"Alice: name=Alice");
    }

    #[test]
    fn empty_payload_frames_identity_and_separator() {
        let id = Identity::new("User");
        let (next, framed) = decode(b"", &id);
        assert_eq!(next, id);
        assert_eq!(framed, b"User: ");
    }

    #[test]
    fn empty_remainder_keeps_current_identity() {
        let (next, framed) = decode(b"name=", &Identity::new("Bob"));
        assert_eq!(next.as_bytes(), b"Bob");
        assert_eq!(framed, b"Bob: name=");
    }

    #[test]
    fn split_happens_at_first_equals_sign() {
        // The marker may appear later than the first `=`; the name is still
        // everything after the first one.
        let (next, framed) = decode(b"x=y name=z", &Identity::new("User"));
        assert_eq!(next.as_bytes(), b"y name=z");
        assert_eq!(framed, b"y name=z: x=y name=z");
    }

    #[test]
    fn marker_mid_payload_is_still_a_command() {
        let (next, _) = decode(b"my name=Carol", &Identity::new("User"));
        assert_eq!(next.as_bytes(), b"Carol");
    }

    #[test]
    fn non_utf8_payload_passes_through_byte_exact() {
        let raw = [0xff, 0xfe, 0x00, 0x42];
        let id = Identity::new("User");
        let (next, framed) = decode(&raw, &id);
        assert_eq!(next, id);
        let mut expected = b"User: ".to_vec();
        expected.extend_from_slice(&raw);
        assert_eq!(framed, expected);
    }

    #[test]
    fn identity_never_empty() {
        assert_eq!(Identity::new("").as_bytes(), b"User");
        assert_eq!(Identity::default().as_bytes(), b"User");
    }

    #[test]
    fn payload_may_contain_separator() {
        let (_, framed) = decode(b"a: b", &Identity::new("User"));
        assert_eq!(framed, b"User: a: b");
    }
}
