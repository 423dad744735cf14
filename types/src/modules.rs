//! Built-in error modules: static kind tables for the stock taxonomy.
//!
//! Prefixes 10..=19 are reserved for these tables; application modules
//! register from 20 up. Each kind's default message lives under a resource
//! key with an invariant-culture fallback in `crate::locale`.

/// Unexpected failures with no better classification.
pub mod application {
    use crate::code::{ModulePrefix, Subcode};
    use crate::fault::FaultKind;
    use crate::registry::ModuleDef;

    pub const PREFIX: ModulePrefix = ModulePrefix::new(10);

    pub const INTERNAL: FaultKind = FaultKind::new(
        PREFIX,
        Subcode::new(1),
        "application",
        "Internal",
        "application.internal",
    );

    pub const DEF: ModuleDef = ModuleDef::new(PREFIX, "application", &[INTERNAL]);
}

/// Input shape and range violations.
pub mod validation {
    use crate::code::{ModulePrefix, Subcode};
    use crate::fault::FaultKind;
    use crate::registry::ModuleDef;

    pub const PREFIX: ModulePrefix = ModulePrefix::new(11);

    pub const MISSING_FIELD: FaultKind = FaultKind::new(
        PREFIX,
        Subcode::new(1),
        "validation",
        "MissingField",
        "validation.missing_field",
    );

    pub const INVALID_FIELD: FaultKind = FaultKind::new(
        PREFIX,
        Subcode::new(2),
        "validation",
        "InvalidField",
        "validation.invalid_field",
    );

    pub const OUT_OF_RANGE: FaultKind = FaultKind::new(
        PREFIX,
        Subcode::new(3),
        "validation",
        "OutOfRange",
        "validation.out_of_range",
    );

    pub const DEF: ModuleDef = ModuleDef::new(
        PREFIX,
        "validation",
        &[MISSING_FIELD, INVALID_FIELD, OUT_OF_RANGE],
    );
}

/// Lifecycle of named things: lookups and duplicates.
pub mod resource {
    use crate::code::{ModulePrefix, Subcode};
    use crate::fault::FaultKind;
    use crate::registry::ModuleDef;

    pub const PREFIX: ModulePrefix = ModulePrefix::new(12);

    pub const NOT_FOUND: FaultKind = FaultKind::new(
        PREFIX,
        Subcode::new(1),
        "resource",
        "NotFound",
        "resource.not_found",
    );

    pub const ALREADY_EXISTS: FaultKind = FaultKind::new(
        PREFIX,
        Subcode::new(2),
        "resource",
        "AlreadyExists",
        "resource.already_exists",
    );

    pub const DEF: ModuleDef = ModuleDef::new(PREFIX, "resource", &[NOT_FOUND, ALREADY_EXISTS]);
}

/// Storage-layer failures surfaced as domain values.
pub mod persistence {
    use crate::code::{ModulePrefix, Subcode};
    use crate::fault::FaultKind;
    use crate::registry::ModuleDef;

    pub const PREFIX: ModulePrefix = ModulePrefix::new(13);

    pub const CONSTRAINT_VIOLATION: FaultKind = FaultKind::new(
        PREFIX,
        Subcode::new(1),
        "persistence",
        "ConstraintViolation",
        "persistence.constraint_violation",
    );

    pub const DEF: ModuleDef = ModuleDef::new(PREFIX, "persistence", &[CONSTRAINT_VIOLATION]);
}

/// All built-in module definitions, in prefix order.
#[must_use]
pub const fn builtin_defs() -> [crate::registry::ModuleDef; 4] {
    [
        application::DEF,
        validation::DEF,
        resource::DEF,
        persistence::DEF,
    ]
}
