//! Culture identifiers and the lexicon that resolves resource keys.
//!
//! A [`Lexicon`] is an immutable configuration value: a default locale plus
//! optional custom lookup functions for failure and success strings. There is
//! no mutable process-wide state to reconfigure; callers either pass a
//! lexicon explicitly or install one process default exactly once.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest accepted locale tag, in bytes. BCP 47 tags in practice stay well
/// under this.
const MAX_TAG_LEN: usize = 35;

// ── Locale ───────────────────────────────────────────────────

/// Culture identifier in BCP 47 shape (`"en-US"`, `"tr"`, ...).
///
/// Tags are kept verbatim; matching inside lookup functions is exact and
/// case-sensitive. The neutral culture is [`Locale::INVARIANT`] (`"und"`).
///
/// # Invariants
///
/// - Non-empty, at most 35 bytes
/// - ASCII alphanumerics and `-` only
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(Cow<'static, str>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("locale tag must not be empty")]
    Empty,
    #[error("locale tag must be at most {MAX_TAG_LEN} bytes, got {0}")]
    TooLong(usize),
    #[error("locale tag must contain only ASCII alphanumerics or '-', got {0:?}")]
    InvalidCharacter(char),
}

impl Locale {
    /// The locale-neutral culture, used when no locale was configured.
    pub const INVARIANT: Locale = Locale(Cow::Borrowed("und"));

    pub fn new(tag: impl Into<String>) -> Result<Self, LocaleError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(LocaleError::Empty);
        }
        if tag.len() > MAX_TAG_LEN {
            return Err(LocaleError::TooLong(tag.len()));
        }
        if let Some(bad) = tag.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
            return Err(LocaleError::InvalidCharacter(bad));
        }
        Ok(Self(Cow::Owned(tag)))
    }

    /// Like [`Locale::new`], but for `'static` literals, validated via
    /// `const` assertion so an invalid tag fails at compile time.
    #[must_use]
    pub const fn from_static(tag: &'static str) -> Self {
        assert!(!tag.is_empty(), "locale tag must not be empty");
        assert!(tag.len() <= MAX_TAG_LEN, "locale tag must be at most 35 bytes");
        let bytes = tag.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            assert!(
                bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-',
                "locale tag must contain only ASCII alphanumerics or '-'"
            );
            i += 1;
        }
        Self(Cow::Borrowed(tag))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::INVARIANT
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Locale {
    type Error = LocaleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.0.into_owned()
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Lexicon ──────────────────────────────────────────────────

/// Resolver function: `(locale, key)` to the localized string, or `None`
/// when the key is unknown under that locale.
pub type LookupFn = Arc<dyn Fn(&Locale, &str) -> Option<String> + Send + Sync>;

/// Immutable localization configuration: a default locale plus optional
/// custom lookups for failure and success strings.
///
/// Resolution is layered: the custom lookup first, then the built-in
/// invariant defaults for the stock resource keys, then nothing. Callers of
/// [`crate::MessageSource::resolve`] fall back to the key itself, so a
/// missing translation degrades to a readable key instead of failing.
#[derive(Clone)]
pub struct Lexicon {
    locale: Locale,
    failure_lookup: Option<LookupFn>,
    success_lookup: Option<LookupFn>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a process-wide lexicon is already installed")]
pub struct LexiconInstallError;

static INSTALLED: OnceLock<Lexicon> = OnceLock::new();

static FALLBACK: Lexicon = Lexicon {
    locale: Locale::INVARIANT,
    failure_lookup: None,
    success_lookup: None,
};

impl Lexicon {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            failure_lookup: None,
            success_lookup: None,
        }
    }

    #[must_use]
    pub fn with_failure_lookup(
        mut self,
        lookup: impl Fn(&Locale, &str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.failure_lookup = Some(Arc::new(lookup));
        self
    }

    #[must_use]
    pub fn with_success_lookup(
        mut self,
        lookup: impl Fn(&Locale, &str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.success_lookup = Some(Arc::new(lookup));
        self
    }

    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Resolve a failure resource key, without the verbatim-key fallback.
    #[must_use]
    pub fn resolve_failure(&self, locale: &Locale, key: &str) -> Option<String> {
        if let Some(lookup) = &self.failure_lookup
            && let Some(text) = lookup(locale, key)
        {
            return Some(text);
        }
        builtin_text(key).map(str::to_owned)
    }

    /// Resolve a success resource key, without the verbatim-key fallback.
    #[must_use]
    pub fn resolve_success(&self, locale: &Locale, key: &str) -> Option<String> {
        if let Some(lookup) = &self.success_lookup
            && let Some(text) = lookup(locale, key)
        {
            return Some(text);
        }
        builtin_text(key).map(str::to_owned)
    }

    /// Install this lexicon as the process-wide default.
    ///
    /// Succeeds at most once per process; later calls fail and leave the
    /// installed lexicon untouched. [`Lexicon::current`] serves the invariant
    /// built-in lexicon until something is installed.
    pub fn install(self) -> Result<(), LexiconInstallError> {
        INSTALLED.set(self).map_err(|_rejected| LexiconInstallError)
    }

    /// The installed process-wide lexicon, or the invariant built-in one.
    #[must_use]
    pub fn current() -> &'static Lexicon {
        INSTALLED.get().unwrap_or(&FALLBACK)
    }
}

impl fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexicon")
            .field("locale", &self.locale)
            .field("failure_lookup", &self.failure_lookup.is_some())
            .field("success_lookup", &self.success_lookup.is_some())
            .finish()
    }
}

/// Invariant-culture defaults for the stock resource keys. Custom lookups
/// shadow these; unknown keys return `None`.
pub(crate) fn builtin_text(key: &str) -> Option<&'static str> {
    match key {
        "application.internal" => Some("An unexpected internal error occurred."),
        "validation.missing_field" => Some("Required field '{0}' is missing."),
        "validation.invalid_field" => Some("Field '{0}' is invalid."),
        "validation.out_of_range" => Some("Field '{0}' is out of range."),
        "resource.not_found" => Some("{0} was not found."),
        "resource.already_exists" => Some("{0} already exists."),
        "persistence.constraint_violation" => Some("A storage constraint was violated."),
        "success.ok" => Some("OK."),
        "success.created" => Some("Resource created."),
        "success.accepted" => Some("Request accepted."),
        "success.no_content" => Some("No content."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_accepts_bcp47_shaped_tags() {
        assert!(Locale::new("en-US").is_ok());
        assert!(Locale::new("tr").is_ok());
        assert!(Locale::new("zh-Hant-TW").is_ok());
    }

    #[test]
    fn locale_rejects_empty_and_bad_characters() {
        assert_eq!(Locale::new(""), Err(LocaleError::Empty));
        assert_eq!(Locale::new("en US"), Err(LocaleError::InvalidCharacter(' ')));
        assert_eq!(Locale::new("en_US"), Err(LocaleError::InvalidCharacter('_')));
    }

    #[test]
    fn locale_rejects_overlong_tags() {
        let long = "a".repeat(MAX_TAG_LEN + 1);
        assert_eq!(Locale::new(long), Err(LocaleError::TooLong(MAX_TAG_LEN + 1)));
    }

    #[test]
    fn invariant_is_the_default() {
        assert_eq!(Locale::default(), Locale::INVARIANT);
        assert_eq!(Locale::INVARIANT.as_str(), "und");
    }

    #[test]
    fn lexicon_custom_lookup_shadows_builtin() {
        let lexicon = Lexicon::new(Locale::INVARIANT).with_failure_lookup(|_, key| {
            (key == "resource.not_found").then(|| "missing!".to_owned())
        });
        let text = lexicon.resolve_failure(&Locale::INVARIANT, "resource.not_found");
        assert_eq!(text.as_deref(), Some("missing!"));
    }

    #[test]
    fn lexicon_falls_back_to_builtin_when_lookup_misses() {
        let lexicon = Lexicon::new(Locale::INVARIANT).with_failure_lookup(|_, _| None);
        let text = lexicon.resolve_failure(&Locale::INVARIANT, "application.internal");
        assert_eq!(text.as_deref(), Some("An unexpected internal error occurred."));
    }

    #[test]
    fn lexicon_unknown_key_resolves_to_none() {
        let lexicon = Lexicon::new(Locale::INVARIANT);
        assert_eq!(lexicon.resolve_failure(&Locale::INVARIANT, "no.such.key"), None);
        assert_eq!(lexicon.resolve_success(&Locale::INVARIANT, "no.such.key"), None);
    }

    #[test]
    fn lookup_receives_the_requested_locale() {
        let lexicon = Lexicon::new(Locale::from_static("en")).with_failure_lookup(|locale, _| {
            (locale.as_str() == "tr").then(|| "bulunamadi".to_owned())
        });
        let turkish = Locale::from_static("tr");
        assert_eq!(
            lexicon.resolve_failure(&turkish, "resource.not_found").as_deref(),
            Some("bulunamadi")
        );
        // Under "en" the lookup misses and the builtin default applies.
        let english = Locale::from_static("en");
        assert_eq!(
            lexicon.resolve_failure(&english, "resource.not_found").as_deref(),
            Some("{0} was not found.")
        );
    }

    // The one test allowed to touch the process-wide slot. It installs a
    // lexicon equivalent to the fallback so other tests stay order-independent.
    #[test]
    fn install_succeeds_once_then_fails() {
        let first = Lexicon::new(Locale::INVARIANT).install();
        assert!(first.is_ok());
        let second = Lexicon::new(Locale::from_static("fr")).install();
        assert_eq!(second, Err(LexiconInstallError));
        assert_eq!(Lexicon::current().locale(), &Locale::INVARIANT);
    }

    #[test]
    fn debug_hides_lookup_internals() {
        let lexicon = Lexicon::new(Locale::INVARIANT).with_failure_lookup(|_, _| None);
        let rendered = format!("{lexicon:?}");
        assert!(rendered.contains("failure_lookup: true"));
        assert!(rendered.contains("success_lookup: false"));
    }
}
