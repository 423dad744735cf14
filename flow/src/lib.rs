//! Asynchronous half of the verdict algebra.
//!
//! [`PendingVerdict`] is an awaitable handle around a verdict still being
//! computed; [`VerdictExt`] lifts a finished [`verdict_types::Verdict`]
//! into the same combinator surface. Everything here is plain
//! `std::future` machinery; the crate never spawns tasks and runs under
//! any executor.

mod ext;
mod pending;

pub use ext::VerdictExt;
pub use pending::{PendingVerdict, VerdictFut};
