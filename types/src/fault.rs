//! The failure value: coded, named, localizable, immutable.
//!
//! A [`Fault`] is a plain value. Its numeric identity (composed code) and its
//! taxonomy names are fixed at construction; the human-readable message stays
//! a lazy [`MessageSource`] until somebody asks for text in a locale.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::code::{FaultCode, ModulePrefix, Subcode};
use crate::locale::{Lexicon, Locale};
use crate::message::MessageSource;

// ── Detail ───────────────────────────────────────────────────

/// Field-scoped sub-message attached to a fault, e.g. one entry per invalid
/// form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultDetail {
    field: String,
    message: String,
}

impl FaultDetail {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// ── Kind records ─────────────────────────────────────────────

/// Registration record for one error kind: its position in the code space,
/// its taxonomy names, and the resource key its default message resolves
/// through.
///
/// Kinds are `const`-constructible so a module's catalog is a static table;
/// the registry later checks those tables against each other. Constructing a
/// fault from a kind never consults the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultKind {
    prefix: ModulePrefix,
    subcode: Subcode,
    module: &'static str,
    name: &'static str,
    default_key: &'static str,
}

impl FaultKind {
    #[must_use]
    pub const fn new(
        prefix: ModulePrefix,
        subcode: Subcode,
        module: &'static str,
        name: &'static str,
        default_key: &'static str,
    ) -> Self {
        Self {
            prefix,
            subcode,
            module,
            name,
            default_key,
        }
    }

    #[must_use]
    pub const fn code(&self) -> FaultCode {
        FaultCode::compose(self.prefix, self.subcode)
    }

    #[must_use]
    pub const fn prefix(&self) -> ModulePrefix {
        self.prefix
    }

    #[must_use]
    pub const fn subcode(&self) -> Subcode {
        self.subcode
    }

    #[must_use]
    pub const fn module(&self) -> &'static str {
        self.module
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn default_key(&self) -> &'static str {
        self.default_key
    }

    /// Fault with the kind's default message (resource key, resolved lazily).
    #[must_use]
    pub fn fault(&self) -> Fault {
        Fault::from_kind(self, MessageSource::failure_key(self.default_key))
    }

    /// Like [`FaultKind::fault`], with positional args for the template.
    #[must_use]
    pub fn fault_args(&self, args: impl IntoIterator<Item = impl fmt::Display>) -> Fault {
        Fault::from_kind(self, MessageSource::failure_key_with(self.default_key, args))
    }

    /// Fault with an ad-hoc literal message instead of the resource key.
    #[must_use]
    pub fn fault_with(&self, template: impl Into<Cow<'static, str>>) -> Fault {
        Fault::from_kind(self, MessageSource::literal(template))
    }
}

// ── Fault ────────────────────────────────────────────────────

/// The failure state of a verdict.
///
/// # Invariants
///
/// - `code` always decomposes into the owning module's prefix and the kind's
///   subcode; it is set once, from the [`FaultKind`], and never mutated
/// - builders (`with_message`, `with_detail`) consume and return the value,
///   so a fault visible to two readers never changes under either of them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    code: FaultCode,
    module: &'static str,
    kind: &'static str,
    source: MessageSource,
    details: Vec<FaultDetail>,
}

impl Fault {
    fn from_kind(kind: &FaultKind, source: MessageSource) -> Self {
        Self {
            code: kind.code(),
            module: kind.module,
            kind: kind.name,
            source,
            details: Vec::new(),
        }
    }

    #[must_use]
    pub fn code(&self) -> FaultCode {
        self.code
    }

    #[must_use]
    pub fn module(&self) -> &'static str {
        self.module
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    #[must_use]
    pub fn source(&self) -> &MessageSource {
        &self.source
    }

    #[must_use]
    pub fn details(&self) -> &[FaultDetail] {
        &self.details
    }

    /// Resolve the message under the process-wide lexicon, in `locale`.
    #[must_use]
    pub fn message(&self, locale: &Locale) -> String {
        self.source.resolve(Lexicon::current(), locale)
    }

    /// Resolve the message under an explicit lexicon.
    #[must_use]
    pub fn message_in(&self, lexicon: &Lexicon, locale: &Locale) -> String {
        self.source.resolve(lexicon, locale)
    }

    /// Replace the message with an ad-hoc literal template. Positional args
    /// captured at construction are kept, so `{0}`-style context survives
    /// the override.
    #[must_use]
    pub fn with_message(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        let args = self.source.args().to_vec();
        self.source = MessageSource::literal_with(template, args);
        self
    }

    #[must_use]
    pub fn with_detail(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.details.push(FaultDetail::new(field, message));
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl IntoIterator<Item = FaultDetail>) -> Self {
        self.details.extend(details);
        self
    }

    /// Flat, serializable view for boundary layers (HTTP mappers, log
    /// shippers). Everything is resolved; nothing lazy crosses the boundary.
    #[must_use]
    pub fn summary(&self, lexicon: &Lexicon, locale: &Locale) -> FaultSummary {
        FaultSummary {
            code: self.code,
            module: self.module.to_owned(),
            kind: self.kind.to_owned(),
            message: self.source.resolve(lexicon, locale),
            details: self.details.clone(),
        }
    }

    // Stock constructors. Codes come from the built-in catalog in
    // `crate::modules`; messages resolve through the failure lookup.

    /// Unexpected internal failure (`10/01`).
    #[must_use]
    pub fn internal() -> Self {
        crate::modules::application::INTERNAL.fault()
    }

    /// Internal failure with an explicit literal message.
    #[must_use]
    pub fn internal_with(template: impl Into<Cow<'static, str>>) -> Self {
        crate::modules::application::INTERNAL.fault_with(template)
    }

    /// Required field absent (`11/01`).
    #[must_use]
    pub fn missing_field(field: impl fmt::Display) -> Self {
        let field = field.to_string();
        crate::modules::validation::MISSING_FIELD
            .fault_args([&field])
            .with_detail(field, "is required")
    }

    /// Field present but invalid (`11/02`).
    #[must_use]
    pub fn invalid_field(field: impl fmt::Display, reason: impl Into<String>) -> Self {
        let field = field.to_string();
        crate::modules::validation::INVALID_FIELD
            .fault_args([&field])
            .with_detail(field, reason)
    }

    /// Field outside its allowed range (`11/03`).
    #[must_use]
    pub fn out_of_range(field: impl fmt::Display, reason: impl Into<String>) -> Self {
        let field = field.to_string();
        crate::modules::validation::OUT_OF_RANGE
            .fault_args([&field])
            .with_detail(field, reason)
    }

    /// Named thing does not exist (`12/01`).
    #[must_use]
    pub fn not_found(what: impl fmt::Display) -> Self {
        crate::modules::resource::NOT_FOUND.fault_args([what])
    }

    /// Named thing already exists (`12/02`).
    #[must_use]
    pub fn already_exists(what: impl fmt::Display) -> Self {
        crate::modules::resource::ALREADY_EXISTS.fault_args([what])
    }

    /// Storage constraint violated (`13/01`).
    #[must_use]
    pub fn constraint_violation() -> Self {
        crate::modules::persistence::CONSTRAINT_VIOLATION.fault()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.source.resolve_default())
    }
}

impl std::error::Error for Fault {}

// ── Summary ──────────────────────────────────────────────────

/// Resolved, serializable snapshot of a [`Fault`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultSummary {
    pub code: FaultCode,
    pub module: String,
    pub kind: String,
    pub message: String,
    pub details: Vec<FaultDetail>,
}
