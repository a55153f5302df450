//! Module versions.
//!
//! A version string has the shape `$vnum(-$pre)?(+$build)?`:
//!
//! - `vnum` starts with a digit and is a sequence of tokens separated by `.` or `-`
//! - `pre` follows the first `-` and is a non-empty sequence of tokens separated by `.` or `-`
//! - `build` follows a `+` and is a non-empty sequence of tokens separated by `.`, `-` or `+`
//!
//! A token is either a run of ASCII digits (a number) or a run of any other characters up to the
//! next separator or digit (a string). `9.0.1`, `17-ea`, `1.2-rc1+b42` and `1.0b` are all valid.
//!
//! Versions compare by their parsed tokens, not by their text: `1.0` equals `1.0.0`, `1.10` is
//! greater than `1.9`, and a version without a pre-release is greater than the same version
//! with one. [`Version`] keeps the string it was parsed from as its canonical form.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::Peekable,
    str::{Chars, FromStr},
};

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Token {
    Number(u64),
    Text(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{value}"),
            Token::Text(value) => f.write_str(value),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Sequence,
    Pre,
    Build,
}

/// A parsed module version.
///
/// # Examples
///
/// ```rust
/// use modscope::Version;
///
/// let ga = Version::parse("17")?;
/// let ea = Version::parse("17-ea")?;
///
/// assert!(ea < ga);
/// assert_eq!(Version::parse("1.0")?, Version::parse("1.0.0")?);
/// assert_eq!(ea.to_string(), "17-ea");
/// # Ok::<(), modscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Version {
    source: String,
    sequence: Vec<Token>,
    pre: Vec<Token>,
    build: Vec<Token>,
}

impl Version {
    /// Parses a version string.
    ///
    /// # Errors
    /// Returns [`crate::Error::VersionParse`] if the string is empty, does not start with a digit,
    /// has an empty pre-release or build section, or holds a number too large for 64 bits.
    pub fn parse(version: &str) -> Result<Self> {
        let fail = |reason| Error::VersionParse {
            version: version.to_string(),
            reason,
        };

        let mut chars = version.chars().peekable();
        match chars.peek() {
            None => return Err(fail("empty version string")),
            Some(c) if !c.is_ascii_digit() => {
                return Err(fail("version string does not start with a number"))
            }
            Some(_) => {}
        }

        let mut sequence = Vec::new();
        let mut pre = Vec::new();
        let mut build = Vec::new();
        let mut section = Section::Sequence;

        while let Some(&c) = chars.peek() {
            match (c, section) {
                ('-', Section::Sequence) => {
                    chars.next();
                    section = Section::Pre;
                }
                ('+', Section::Sequence | Section::Pre) => {
                    if section == Section::Pre && pre.is_empty() {
                        return Err(fail("empty pre-release"));
                    }
                    chars.next();
                    section = Section::Build;
                }
                ('.' | '-' | '+', _) => {
                    chars.next();
                }
                _ => {
                    let token = take_token(&mut chars).ok_or_else(|| fail("number too large"))?;
                    match section {
                        Section::Sequence => sequence.push(token),
                        Section::Pre => pre.push(token),
                        Section::Build => build.push(token),
                    }
                }
            }
        }

        match section {
            Section::Pre if pre.is_empty() => Err(fail("empty pre-release")),
            Section::Build if build.is_empty() => Err(fail("empty build")),
            _ => Ok(Version {
                source: version.to_string(),
                sequence,
                pre,
                build,
            }),
        }
    }

    /// The string this version was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns `true` if the version carries a pre-release section.
    #[must_use]
    pub fn is_pre_release(&self) -> bool {
        !self.pre.is_empty()
    }
}

/// Reads one number or string token. Returns `None` if a number overflows.
fn take_token(chars: &mut Peekable<Chars<'_>>) -> Option<Token> {
    let Some(&first) = chars.peek() else {
        return Some(Token::Text(String::new()));
    };

    if first.is_ascii_digit() {
        let mut value: u64 = 0;
        while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
            value = value.checked_mul(10)?.checked_add(u64::from(digit))?;
            chars.next();
        }
        Some(Token::Number(value))
    } else {
        let mut text = String::new();
        while let Some(&c) = chars.peek() {
            if matches!(c, '.' | '-' | '+') || c.is_ascii_digit() {
                break;
            }
            text.push(c);
            chars.next();
        }
        Some(Token::Text(text))
    }
}

fn compare_tokens(left: &[Token], right: &[Token]) -> Ordering {
    for (l, r) in left.iter().zip(right) {
        let ordering = match (l, r) {
            (Token::Number(l), Token::Number(r)) => l.cmp(r),
            (Token::Text(l), Token::Text(r)) => l.cmp(r),
            _ => l.to_string().cmp(&r.to_string()),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    let common = left.len().min(right.len());
    let rest = if left.len() > right.len() {
        &left[common..]
    } else {
        &right[common..]
    };

    if rest.iter().all(|token| *token == Token::Number(0)) {
        Ordering::Equal
    } else {
        left.len().cmp(&right.len())
    }
}

/// Tokens with trailing zero numbers removed; equal versions have equal trimmed tokens.
fn significant(tokens: &[Token]) -> &[Token] {
    let end = tokens
        .iter()
        .rposition(|token| *token != Token::Number(0))
        .map_or(0, |position| position + 1);
    &tokens[..end]
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let ordering = compare_tokens(&self.sequence, &other.sequence);
        if ordering != Ordering::Equal {
            return ordering;
        }

        match (self.pre.is_empty(), other.pre.is_empty()) {
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            _ => {}
        }

        compare_tokens(&self.pre, &other.pre).then_with(|| compare_tokens(&self.build, &other.build))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        significant(&self.sequence).hash(state);
        significant(&self.pre).hash(state);
        significant(&self.build).hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}
