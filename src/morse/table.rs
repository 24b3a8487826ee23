//! International Morse table for letters and digits.

use crate::config::UNKNOWN_CHAR;

/// Code → character pairs. 26 letters followed by 10 digits.
pub const SIGNAL_TABLE: [(&str, char); 36] = [
    (".-", 'A'),
    ("-...", 'B'),
    ("-.-.", 'C'),
    ("-..", 'D'),
    (".", 'E'),
    ("..-.", 'F'),
    ("--.", 'G'),
    ("....", 'H'),
    ("..", 'I'),
    (".---", 'J'),
    ("-.-", 'K'),
    (".-..", 'L'),
    ("--", 'M'),
    ("-.", 'N'),
    ("---", 'O'),
    (".--.", 'P'),
    ("--.-", 'Q'),
    (".-.", 'R'),
    ("...", 'S'),
    ("-", 'T'),
    ("..-", 'U'),
    ("...-", 'V'),
    (".--", 'W'),
    ("-..-", 'X'),
    ("-.--", 'Y'),
    ("--..", 'Z'),
    ("-----", '0'),
    (".----", '1'),
    ("..---", '2'),
    ("...--", '3'),
    ("....-", '4'),
    (".....", '5'),
    ("-....", '6'),
    ("--...", '7'),
    ("---..", '8'),
    ("----.", '9'),
];

/// Longest code in [`SIGNAL_TABLE`].
pub const MAX_CODE_LEN: usize = 5;

/// Look up a dot/dash code. Returns `None` for anything not in the table,
/// including the empty string.
pub fn lookup(code: &str) -> Option<char> {
    if code.is_empty() || code.len() > MAX_CODE_LEN {
        return None;
    }
    SIGNAL_TABLE
        .iter()
        .find(|(key, _)| *key == code)
        .map(|&(_, ch)| ch)
}

/// Like [`lookup`], but unknown codes become the visible `?` marker.
pub fn resolve(code: &str) -> char {
    lookup(code).unwrap_or(UNKNOWN_CHAR)
}
