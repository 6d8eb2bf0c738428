//! Logical key events decoded from raw input bytes.
//!
//! One chunk read from the terminal decodes to exactly one [`KeyEvent`].
//! The decoder keeps no state across calls: the session read size exceeds
//! the longest recognized escape sequence, so every chunk is independently
//! decodable and anything longer or foreign collapses to [`KeyEvent::Unknown`].

use tracing::trace;

/// A logical key event produced from one raw read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEvent {
    /// A printable character. Space is never reported here; see [`KeyEvent::Space`].
    Rune(char),
    Enter,
    Backspace,
    Left,
    Right,
    Up,
    Down,
    /// Space is distinct from `Rune` so list prompts can bind it to toggle.
    Space,
    /// Ctrl plus a lowercase letter, e.g. `Ctrl('c')`.
    Ctrl(char),
    /// Anything the decoder does not recognize; callers discard it.
    Unknown,
}

const ESC: u8 = 0x1b;

/// Decode one chunk of raw input bytes into a logical key event.
pub fn decode(bytes: &[u8]) -> KeyEvent {
    let (first, rest) = match bytes.split_first() {
        Some(split) => split,
        None => return KeyEvent::Unknown,
    };

    match *first {
        b'\r' | b'\n' => KeyEvent::Enter,
        0x7f | 0x08 => KeyEvent::Backspace,
        b' ' => KeyEvent::Space,
        ESC => decode_escape(rest),
        // Remaining C0 controls map to Ctrl+letter; 0x03 (Ctrl-C) and
        // 0x11 (Ctrl-Q) are the cancellation keys every prompt honors.
        code @ 0x01..=0x1a => KeyEvent::Ctrl((b'a' + code - 1) as char),
        0x00 | 0x1c..=0x1f => KeyEvent::Unknown,
        _ => decode_rune(bytes),
    }
}

/// Decode the bytes following an ESC introducer.
///
/// Only the CSI arrow sequences `ESC [ A..D` are recognized; every other
/// sequence is discarded rather than buffered.
fn decode_escape(rest: &[u8]) -> KeyEvent {
    match rest {
        [b'[', b'A'] => KeyEvent::Up,
        [b'[', b'B'] => KeyEvent::Down,
        [b'[', b'C'] => KeyEvent::Right,
        [b'[', b'D'] => KeyEvent::Left,
        _ => {
            trace!("discarding unrecognized escape sequence: {:?}", rest);
            KeyEvent::Unknown
        }
    }
}

/// Recover one code point from the head of the chunk.
fn decode_rune(bytes: &[u8]) -> KeyEvent {
    let len = utf8_len(bytes[0]);
    if len == 0 || bytes.len() < len {
        trace!("malformed utf-8 input: {:?}", bytes);
        return KeyEvent::Unknown;
    }
    match std::str::from_utf8(&bytes[..len]) {
        Ok(s) => s.chars().next().map_or(KeyEvent::Unknown, KeyEvent::Rune),
        Err(_) => {
            trace!("malformed utf-8 input: {:?}", &bytes[..len]);
            KeyEvent::Unknown
        }
    }
}

/// Encoded length implied by a UTF-8 lead byte; 0 for continuation or
/// invalid leads.
fn utf8_len(lead: u8) -> usize {
    match lead {
        0x20..=0x7e => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => 0,
    }
}
