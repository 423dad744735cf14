//! Numeric error-code scheme: module prefix, subcode, and the composed code.
//!
//! Codes are allocated as `prefix * 100 + subcode`, so every fault code names
//! its owning module and its position inside that module. The canonical
//! external rendering is fixed-width, zero-padded to five digits.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width of the subcode band: each module owns one hundred subcodes (00-99).
pub const SUBCODES_PER_MODULE: u32 = 100;

// ── Module prefix ────────────────────────────────────────────

/// Numeric prefix owned by exactly one error module.
///
/// Prefixes occupy 1..=999 so that every composed code fits the five-digit
/// canonical rendering. Construction outside that range is a programming
/// error, not an input error: [`ModulePrefix::new`] asserts (usable in
/// `const` contexts), while [`ModulePrefix::try_new`] reports the violation
/// as a value for dynamic paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct ModulePrefix(u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("module prefix must be between 1 and 999, got {0}")]
pub struct ModulePrefixError(pub u16);

impl ModulePrefix {
    /// Lowest prefix usable by application-defined modules. Everything below
    /// is reserved for the built-in catalog.
    pub const MIN_CUSTOM: ModulePrefix = ModulePrefix(20);

    #[must_use]
    pub const fn new(value: u16) -> Self {
        assert!(value >= 1 && value <= 999, "module prefix must be between 1 and 999");
        Self(value)
    }

    pub const fn try_new(value: u16) -> Result<Self, ModulePrefixError> {
        if value >= 1 && value <= 999 {
            Ok(Self(value))
        } else {
            Err(ModulePrefixError(value))
        }
    }

    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Whether this prefix sits in the band reserved for built-in modules.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        self.0 < Self::MIN_CUSTOM.0
    }
}

impl TryFrom<u16> for ModulePrefix {
    type Error = ModulePrefixError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ModulePrefix> for u16 {
    fn from(value: ModulePrefix) -> Self {
        value.0
    }
}

impl fmt::Display for ModulePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Subcode ──────────────────────────────────────────────────

/// Position of an error kind inside its module, 0..=99.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Subcode(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("subcode must be at most 99, got {0}")]
pub struct SubcodeError(pub u8);

impl Subcode {
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(value <= 99, "subcode must be at most 99");
        Self(value)
    }

    pub const fn try_new(value: u8) -> Result<Self, SubcodeError> {
        if value <= 99 {
            Ok(Self(value))
        } else {
            Err(SubcodeError(value))
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Subcode {
    type Error = SubcodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Subcode> for u8 {
    fn from(value: Subcode) -> Self {
        value.0
    }
}

impl fmt::Display for Subcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

// ── Composed fault code ──────────────────────────────────────

/// Composed numeric code: `prefix * 100 + subcode`.
///
/// The composition is injective, so a `FaultCode` can always be split back
/// into its [`ModulePrefix`] and [`Subcode`]. `Display` renders the canonical
/// wire form: five digits, zero-padded (`prefix 12, subcode 1` → `"01201"`).
///
/// # Serde
///
/// Serializes as a plain integer. Deserialization re-validates the range so
/// a code parsed from external data always decomposes into a valid prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FaultCode(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("fault code must be between 100 and 99999, got {0}")]
pub struct FaultCodeError(pub u32);

impl FaultCode {
    #[must_use]
    pub const fn compose(prefix: ModulePrefix, subcode: Subcode) -> Self {
        Self(prefix.value() as u32 * SUBCODES_PER_MODULE + subcode.value() as u32)
    }

    pub const fn try_new(value: u32) -> Result<Self, FaultCodeError> {
        if value >= SUBCODES_PER_MODULE && value <= 99_999 {
            Ok(Self(value))
        } else {
            Err(FaultCodeError(value))
        }
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn prefix(self) -> ModulePrefix {
        ModulePrefix((self.0 / SUBCODES_PER_MODULE) as u16)
    }

    #[must_use]
    pub const fn subcode(self) -> Subcode {
        Subcode((self.0 % SUBCODES_PER_MODULE) as u8)
    }
}

impl TryFrom<u32> for FaultCode {
    type Error = FaultCodeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<FaultCode> for u32 {
    fn from(value: FaultCode) -> Self {
        value.0
    }
}

impl fmt::Display for FaultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05}", self.0)
    }
}
