//! Lazy message sources: literal templates and localized resource keys.
//!
//! A [`MessageSource`] is pure data; nothing is rendered until
//! [`MessageSource::resolve`] runs, so the same source can be resolved under
//! different locales and each read reflects the locale it was asked for.

use std::borrow::Cow;
use std::fmt;

use crate::locale::{Lexicon, Locale};

/// Which lexicon lookup a resource key resolves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupDomain {
    Failure,
    Success,
}

/// Where a human-readable message comes from.
///
/// `Literal` is a fixed template with positional `{0}`-style placeholders.
/// `Resource` is a key resolved through a [`Lexicon`] at read time; an
/// unresolvable key degrades to the key itself rather than failing, so a
/// missing translation never turns into a second error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    Literal {
        template: Cow<'static, str>,
        args: Vec<String>,
    },
    Resource {
        key: Cow<'static, str>,
        args: Vec<String>,
        domain: LookupDomain,
    },
}

impl MessageSource {
    #[must_use]
    pub fn literal(template: impl Into<Cow<'static, str>>) -> Self {
        Self::Literal {
            template: template.into(),
            args: Vec::new(),
        }
    }

    /// Literal template plus positional args, captured in display form.
    #[must_use]
    pub fn literal_with(
        template: impl Into<Cow<'static, str>>,
        args: impl IntoIterator<Item = impl fmt::Display>,
    ) -> Self {
        Self::Literal {
            template: template.into(),
            args: capture(args),
        }
    }

    #[must_use]
    pub fn failure_key(key: impl Into<Cow<'static, str>>) -> Self {
        Self::Resource {
            key: key.into(),
            args: Vec::new(),
            domain: LookupDomain::Failure,
        }
    }

    #[must_use]
    pub fn failure_key_with(
        key: impl Into<Cow<'static, str>>,
        args: impl IntoIterator<Item = impl fmt::Display>,
    ) -> Self {
        Self::Resource {
            key: key.into(),
            args: capture(args),
            domain: LookupDomain::Failure,
        }
    }

    #[must_use]
    pub fn success_key(key: impl Into<Cow<'static, str>>) -> Self {
        Self::Resource {
            key: key.into(),
            args: Vec::new(),
            domain: LookupDomain::Success,
        }
    }

    #[must_use]
    pub fn success_key_with(
        key: impl Into<Cow<'static, str>>,
        args: impl IntoIterator<Item = impl fmt::Display>,
    ) -> Self {
        Self::Resource {
            key: key.into(),
            args: capture(args),
            domain: LookupDomain::Success,
        }
    }

    /// Positional args captured at construction time.
    #[must_use]
    pub fn args(&self) -> &[String] {
        match self {
            Self::Literal { args, .. } | Self::Resource { args, .. } => args,
        }
    }

    /// Render this source under the given lexicon and locale.
    ///
    /// Resource keys resolve through the lexicon (custom lookup, then the
    /// built-in defaults); a key that resolves nowhere is returned verbatim.
    #[must_use]
    pub fn resolve(&self, lexicon: &Lexicon, locale: &Locale) -> String {
        match self {
            Self::Literal { template, args } => render_template(template, args),
            Self::Resource { key, args, domain } => {
                let found = match domain {
                    LookupDomain::Failure => lexicon.resolve_failure(locale, key),
                    LookupDomain::Success => lexicon.resolve_success(locale, key),
                };
                if let Some(template) = found {
                    render_template(&template, args)
                } else {
                    tracing::debug!(
                        key = key.as_ref(),
                        locale = %locale,
                        "resource key unresolved, rendering key verbatim"
                    );
                    key.clone().into_owned()
                }
            }
        }
    }

    /// Render under the process-wide lexicon and its configured locale.
    #[must_use]
    pub fn resolve_default(&self) -> String {
        let lexicon = Lexicon::current();
        self.resolve(lexicon, lexicon.locale())
    }
}

fn capture(args: impl IntoIterator<Item = impl fmt::Display>) -> Vec<String> {
    args.into_iter().map(|arg| arg.to_string()).collect()
}

/// Substitute positional `{n}` placeholders. `{{` and `}}` escape literal
/// braces. Anything malformed or out of range is left verbatim; rendering
/// never fails.
fn render_template(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut digits = String::new();
                let mut closed = false;
                while let Some(&next) = chars.peek() {
                    if next.is_ascii_digit() {
                        digits.push(next);
                        chars.next();
                    } else if next == '}' {
                        chars.next();
                        closed = true;
                        break;
                    } else {
                        break;
                    }
                }
                let replacement = if closed && !digits.is_empty() {
                    digits.parse::<usize>().ok().and_then(|index| args.get(index))
                } else {
                    None
                };
                if let Some(arg) = replacement {
                    out.push_str(arg);
                } else {
                    out.push('{');
                    out.push_str(&digits);
                    if closed {
                        out.push('}');
                    }
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                out.push('}');
            }
            other => out.push(other),
        }
    }
    out
}
