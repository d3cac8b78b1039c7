// Alphabet filtering: the first step of every comparison.
//
// Raw corpus text is reduced to the characters of one script block plus
// whitespace. Everything else (Latin letters, digits, Ethiopic punctuation,
// emoji) is deleted outright. Deleting rather than replacing means two
// script words separated only by punctuation become one word; downstream
// word counts depend on that, so it stays.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;

/// An inclusive range of code points treated as "letters" by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    first: char,
    last: char,
}

impl Alphabet {
    /// Ethiopic syllables, U+1200 through U+135A.
    ///
    /// Stops short of the combining marks (U+135D–U+135F), the Ethiopic
    /// punctuation (U+1360–U+1368) and the Ethiopic numerals, so word
    /// separators like `፡` and `።` are stripped along with Latin punctuation.
    pub const ETHIOPIC: Alphabet = Alphabet {
        first: '\u{1200}',
        last: '\u{135A}',
    };

    /// Build an alphabet from an inclusive range. Fails if `first > last`.
    pub fn new(first: char, last: char) -> Result<Self> {
        if first > last {
            anyhow::bail!(
                "Alphabet range is reversed: U+{:04X} comes after U+{:04X}",
                first as u32,
                last as u32
            );
        }
        Ok(Self { first, last })
    }

    pub fn contains(&self, c: char) -> bool {
        (self.first..=self.last).contains(&c)
    }

    /// Whether `c` survives normalization under this alphabet.
    pub fn retains(&self, c: char) -> bool {
        self.contains(c) || is_separator(c)
    }
}

/// Whether `c` separates words: Unicode whitespace plus the ASCII
/// information separators U+001C..U+001F, which some exported corpora use
/// as record and field breaks.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::ETHIOPIC
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}-{:04X}", self.first as u32, self.last as u32)
    }
}

/// Parses `"1200-135A"` style ranges (hex code points, optional `U+` prefix).
impl FromStr for Alphabet {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (first, last) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| anyhow::anyhow!("Alphabet range must look like 1200-135A, got {s:?}"))?;

        Alphabet::new(parse_code_point(first)?, parse_code_point(last)?)
    }
}

fn parse_code_point(raw: &str) -> Result<char> {
    let hex = raw.trim();
    let hex = hex
        .strip_prefix("U+")
        .or_else(|| hex.strip_prefix("u+"))
        .unwrap_or(hex);

    let value = u32::from_str_radix(hex, 16)
        .map_err(|e| anyhow::anyhow!("Invalid code point {raw:?}: {e}"))?;

    char::from_u32(value).ok_or_else(|| anyhow::anyhow!("U+{value:04X} is not a valid character"))
}

/// Strips every character outside the alphabet, keeping whitespace as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    alphabet: Alphabet,
}

impl Normalizer {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// Return the subsequence of `text` made of alphabet characters and
    /// whitespace. Whitespace runs are not collapsed.
    pub fn normalize(&self, text: &str) -> String {
        text.chars().filter(|&c| self.alphabet.retains(c)).collect()
    }
}

/// Normalize with the default (Ethiopic) alphabet.
pub fn normalize(text: &str) -> String {
    Normalizer::default().normalize(text)
}
