//! Core domain types for Verdict.
//!
//! This crate contains the pure result/error algebra with no IO, no async,
//! and minimal dependencies: composed fault codes, lazy localized messages,
//! the verdict state machine with its combinators, and the central module
//! registry. Everything here can be used from any layer of an application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod code;
mod fault;
mod locale;
mod message;
pub mod modules;
mod registry;
mod verdict;

pub use code::{
    FaultCode, FaultCodeError, ModulePrefix, ModulePrefixError, SUBCODES_PER_MODULE, Subcode,
    SubcodeError,
};
pub use fault::{Fault, FaultDetail, FaultKind, FaultSummary};
pub use locale::{Lexicon, LexiconInstallError, Locale, LocaleError, LookupFn};
pub use message::{LookupDomain, MessageSource};
pub use registry::{
    ErrorIndex, KindSummary, ModuleDef, Registry, RegistryError, RegistryInstallError,
};
pub use verdict::{AccessError, StatusKind, Success, Verdict};
