//! Transport encoding for cursor tokens.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

/// Standard alphabet. Emits padding, accepts tokens with or without it.
const CURSOR_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub(super) fn base64_encode(bytes: &[u8]) -> String {
    CURSOR_ENGINE.encode(bytes)
}

pub(super) fn base64_decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    CURSOR_ENGINE.decode(input)
}
