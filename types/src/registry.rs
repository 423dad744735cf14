//! Central module registry: additive registration, code-space validation,
//! and the introspectable error index.
//!
//! Registration is validated eagerly and atomically. Prefix ownership plus
//! per-module subcode uniqueness make composed codes unique across the whole
//! registry (the composition `prefix * 100 + subcode` is injective), so a
//! colliding catalog is rejected at startup rather than misrendering later.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::code::{FaultCode, ModulePrefix, Subcode};
use crate::fault::FaultKind;
use crate::locale::{Lexicon, Locale};
use crate::message::MessageSource;

// ── Module definition ────────────────────────────────────────

/// Static definition of one error module: its prefix, its name, and its
/// complete kind table. One of these per module is the whole registration
/// surface; there is nothing to reopen or subclass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleDef {
    prefix: ModulePrefix,
    name: &'static str,
    kinds: &'static [FaultKind],
}

impl ModuleDef {
    #[must_use]
    pub const fn new(
        prefix: ModulePrefix,
        name: &'static str,
        kinds: &'static [FaultKind],
    ) -> Self {
        Self {
            prefix,
            name,
            kinds,
        }
    }

    #[must_use]
    pub const fn prefix(&self) -> ModulePrefix {
        self.prefix
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn kinds(&self) -> &'static [FaultKind] {
        self.kinds
    }
}

// ── Errors ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("module '{name}' defines no kinds")]
    EmptyModule { name: &'static str },
    #[error("prefix {prefix} is reserved for built-in modules")]
    ReservedPrefix { prefix: ModulePrefix },
    #[error("prefix {prefix} is already registered to module '{existing}'")]
    PrefixTaken {
        prefix: ModulePrefix,
        existing: &'static str,
    },
    #[error("module name '{name}' is already registered")]
    NameTaken { name: &'static str },
    #[error("kind '{kind}' does not belong to module '{module}'")]
    ForeignKind {
        module: &'static str,
        kind: &'static str,
    },
    #[error("duplicate subcode {subcode} in module '{module}'")]
    DuplicateSubcode {
        module: &'static str,
        subcode: Subcode,
    },
    #[error("duplicate kind name '{kind}' in module '{module}'")]
    DuplicateKindName {
        module: &'static str,
        kind: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a process-wide registry is already installed")]
pub struct RegistryInstallError;

// ── Registry ─────────────────────────────────────────────────

/// Central catalog of registered error modules.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    modules: BTreeMap<ModulePrefix, ModuleDef>,
}

static INSTALLED: OnceLock<Registry> = OnceLock::new();
static BUILTIN: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// Empty registry. Most callers want [`Registry::builtin`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            modules: BTreeMap::new(),
        }
    }

    /// Registry pre-populated with the stock modules.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for def in crate::modules::builtin_defs() {
            let admitted = registry.admit(def);
            debug_assert!(admitted.is_ok(), "stock catalog rejected: {admitted:?}");
        }
        registry
    }

    /// Register an application module. Additive only: nothing already
    /// registered can be replaced or extended, and the whole definition is
    /// validated before any of it lands.
    pub fn register(&mut self, def: ModuleDef) -> Result<(), RegistryError> {
        if def.prefix().is_reserved() {
            return Err(RegistryError::ReservedPrefix {
                prefix: def.prefix(),
            });
        }
        self.admit(def)
    }

    /// Validation shared by built-in seeding and application registration.
    fn admit(&mut self, def: ModuleDef) -> Result<(), RegistryError> {
        if def.kinds().is_empty() {
            return Err(RegistryError::EmptyModule { name: def.name() });
        }
        if let Some(existing) = self.modules.get(&def.prefix()) {
            return Err(RegistryError::PrefixTaken {
                prefix: def.prefix(),
                existing: existing.name(),
            });
        }
        if self.modules.values().any(|module| module.name() == def.name()) {
            return Err(RegistryError::NameTaken { name: def.name() });
        }

        let mut subcodes = BTreeSet::new();
        let mut names = BTreeSet::new();
        for kind in def.kinds() {
            if kind.prefix() != def.prefix() || kind.module() != def.name() {
                return Err(RegistryError::ForeignKind {
                    module: def.name(),
                    kind: kind.name(),
                });
            }
            if !subcodes.insert(kind.subcode()) {
                return Err(RegistryError::DuplicateSubcode {
                    module: def.name(),
                    subcode: kind.subcode(),
                });
            }
            if !names.insert(kind.name()) {
                return Err(RegistryError::DuplicateKindName {
                    module: def.name(),
                    kind: kind.name(),
                });
            }
        }

        self.modules.insert(def.prefix(), def);
        Ok(())
    }

    /// Registered modules, in prefix order.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleDef> {
        self.modules.values()
    }

    /// The registered kind owning a composed code, if any.
    #[must_use]
    pub fn kind_for(&self, code: FaultCode) -> Option<&FaultKind> {
        let def = self.modules.get(&code.prefix())?;
        def.kinds().iter().find(|kind| kind.code() == code)
    }

    #[must_use]
    pub fn contains(&self, code: FaultCode) -> bool {
        self.kind_for(code).is_some()
    }

    /// Complete error documentation: module name to kind name to resolved
    /// summary. Stable order (sorted maps), every registered kind exactly
    /// once. Default texts render with their placeholders unfilled.
    #[must_use]
    pub fn error_index(&self, lexicon: &Lexicon, locale: &Locale) -> ErrorIndex {
        self.modules
            .values()
            .map(|def| {
                let kinds = def
                    .kinds()
                    .iter()
                    .map(|kind| {
                        let message =
                            MessageSource::failure_key(kind.default_key()).resolve(lexicon, locale);
                        let summary = KindSummary {
                            code: kind.code(),
                            name: kind.name().to_owned(),
                            message,
                        };
                        (kind.name().to_owned(), summary)
                    })
                    .collect();
                (def.name().to_owned(), kinds)
            })
            .collect()
    }

    /// Install this registry as the process-wide default. Succeeds at most
    /// once; later calls fail and leave the installed registry untouched.
    pub fn install(self) -> Result<(), RegistryInstallError> {
        INSTALLED.set(self).map_err(|_rejected| RegistryInstallError)
    }

    /// The installed process-wide registry, or the stock one.
    #[must_use]
    pub fn current() -> &'static Registry {
        INSTALLED.get().unwrap_or_else(|| BUILTIN.get_or_init(Self::builtin))
    }
}

/// Module name to kind name to summary, as produced by
/// [`Registry::error_index`].
pub type ErrorIndex = BTreeMap<String, BTreeMap<String, KindSummary>>;

/// One registered kind, resolved for documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindSummary {
    pub code: FaultCode,
    pub name: String,
    pub message: String,
}
