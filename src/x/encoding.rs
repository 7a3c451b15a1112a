//! Locale-aware text conversion.
//!
//! ICCCM `STRING` properties are encoded in the locale of whoever
//! wrote them, while the rest of the crate only deals in UTF-8.
//! [`Locale`] bridges the two.

use std::borrow::Cow;
use std::env;
use std::fmt;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use tracing::{debug, warn};

/// Environment variables consulted for the locale, in priority order.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

/// The character encoding of the process locale.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    encoding: &'static Encoding,
}

impl Locale {
    /// Resolves the locale encoding from the environment.
    ///
    /// The first non-empty of `LC_ALL`, `LC_CTYPE` and `LANG` is used,
    /// the same lookup `setlocale(LC_CTYPE, "")` performs. The codeset
    /// is the part after the `.` (`en_US.UTF-8` -> `UTF-8`). The `C`
    /// and `POSIX` locales, an unset locale, and a locale with no
    /// codeset are treated as ISO-8859-1.
    pub fn from_env() -> Self {
        let value = LOCALE_VARS
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|val| !val.is_empty());

        match value {
            Some(val) => Self::from_locale_name(&val),
            None => {
                debug!("No locale set, using ISO-8859-1");
                Self::latin1()
            }
        }
    }

    /// Resolves the encoding of a locale name such as `de_DE.ISO-8859-15@euro`.
    pub fn from_locale_name(name: &str) -> Self {
        let codeset = name
            .split('@')
            .next()
            .and_then(|n| n.split_once('.'))
            .map(|(_, codeset)| codeset);

        match codeset.and_then(Self::from_label) {
            Some(locale) => locale,
            None => {
                if codeset.is_some() {
                    warn!("Unknown codeset in locale {}, using ISO-8859-1", name);
                }
                Self::latin1()
            }
        }
    }

    /// Looks up an encoding by its label, e.g. `"UTF-8"` or `"ISO-8859-1"`.
    ///
    /// Returns `None` if the label is not a known encoding.
    pub fn from_label(label: &str) -> Option<Self> {
        Encoding::for_label(label.trim().as_bytes()).map(|encoding| Self { encoding })
    }

    /// The UTF-8 locale.
    pub fn utf8() -> Self {
        Self { encoding: UTF_8 }
    }

    /// The ISO-8859-1 locale.
    ///
    /// This decodes as windows-1252, its superset, as mandated by the
    /// WHATWG encoding standard.
    pub fn latin1() -> Self {
        Self {
            encoding: WINDOWS_1252,
        }
    }

    /// The name of the encoding.
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Whether the locale is already UTF-8.
    pub fn is_utf8(&self) -> bool {
        self.encoding == UTF_8
    }

    /// Converts text in the locale encoding to UTF-8.
    ///
    /// Returns `None` if `raw` is not valid in the locale encoding.
    pub fn to_utf8<'a>(&self, raw: &'a [u8]) -> Option<Cow<'a, str>> {
        self.encoding
            .decode_without_bom_handling_and_without_replacement(raw)
    }

    /// Converts UTF-8 text to the locale encoding.
    ///
    /// Returns `None` if `text` contains characters the locale
    /// encoding cannot represent.
    pub fn from_utf8<'a>(&self, text: &'a str) -> Option<Cow<'a, [u8]>> {
        let (bytes, _, had_errors) = self.encoding.encode(text);
        if had_errors {
            None
        } else {
            Some(bytes)
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::from_env()
    }
}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Locale").field(&self.name()).finish()
    }
}
