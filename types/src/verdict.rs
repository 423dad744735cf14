//! The verdict value: success XOR failure, checked access, and the chaining
//! combinators.
//!
//! `Verdict<T>` is an enum, so the two states are structurally exclusive.
//! Accessors for the wrong state return [`AccessError`] instead of panicking
//! or inventing defaults; chains built from [`Verdict::map`],
//! [`Verdict::bind`], [`Verdict::ensure`] and [`Verdict::tap`] short-circuit
//! on the first failure and carry that fault unchanged to the end.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fault::Fault;
use crate::locale::{Lexicon, Locale};
use crate::message::MessageSource;

// ── Status ───────────────────────────────────────────────────

/// Coarse classification carried by a success, for boundary layers that
/// distinguish created/accepted/empty outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Ok,
    Created,
    Accepted,
    NoContent,
}

impl StatusKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StatusKind::Ok => "ok",
            StatusKind::Created => "created",
            StatusKind::Accepted => "accepted",
            StatusKind::NoContent => "no_content",
        }
    }

    /// Resource key of the default success message for this status.
    #[must_use]
    pub const fn default_key(self) -> &'static str {
        match self {
            StatusKind::Ok => "success.ok",
            StatusKind::Created => "success.created",
            StatusKind::Accepted => "success.accepted",
            StatusKind::NoContent => "success.no_content",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Access errors ────────────────────────────────────────────

/// Wrong-state access: a failure was asked for its value, or a success for
/// its fault. Always returned as a value, never panicked, so probing a
/// verdict is safe in any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("value accessed on a failure verdict")]
    ValueOnFailure,
    #[error("fault accessed on a success verdict")]
    FaultOnSuccess,
}

// ── Success ──────────────────────────────────────────────────

/// The success state: a value plus its status marker and message source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success<T> {
    value: T,
    status: StatusKind,
    source: MessageSource,
}

impl Success<()> {
    #[must_use]
    pub fn ok() -> Self {
        Self::new((), StatusKind::Ok)
    }

    #[must_use]
    pub fn created() -> Self {
        Self::new((), StatusKind::Created)
    }

    #[must_use]
    pub fn accepted() -> Self {
        Self::new((), StatusKind::Accepted)
    }

    #[must_use]
    pub fn no_content() -> Self {
        Self::new((), StatusKind::NoContent)
    }
}

impl<T> Success<T> {
    /// Success with the status's default message source.
    #[must_use]
    pub fn new(value: T, status: StatusKind) -> Self {
        Self {
            value,
            status,
            source: MessageSource::success_key(status.default_key()),
        }
    }

    /// Plain `Ok`-status success around a value.
    #[must_use]
    pub fn of(value: T) -> Self {
        Self::new(value, StatusKind::Ok)
    }

    /// Success from explicit parts, for adapters that rebuild around a new
    /// value while keeping status and message source.
    #[must_use]
    pub fn from_parts(value: T, status: StatusKind, source: MessageSource) -> Self {
        Self {
            value,
            status,
            source,
        }
    }

    /// Replace the message with an ad-hoc literal template.
    #[must_use]
    pub fn with_message(mut self, template: impl Into<std::borrow::Cow<'static, str>>) -> Self {
        let args = self.source.args().to_vec();
        self.source = MessageSource::literal_with(template, args);
        self
    }

    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    #[must_use]
    pub fn status(&self) -> StatusKind {
        self.status
    }

    #[must_use]
    pub fn source(&self) -> &MessageSource {
        &self.source
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

    /// New success around the transformed value, keeping status and message
    /// source.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Success<U> {
        Success {
            value: f(self.value),
            status: self.status,
            source: self.source,
        }
    }
}

// ── Verdict ──────────────────────────────────────────────────

/// Outcome of a fallible operation: exactly one of success or failure.
///
/// Unlike `std::result::Result`, both sides carry domain metadata: the
/// success side a [`StatusKind`] and message source, the failure side a
/// coded [`Fault`]. [`Verdict::into_result`] bridges to std for `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<T = ()> {
    Success(Success<T>),
    Failure(Fault),
}

impl<T> Verdict<T> {
    #[must_use]
    pub fn of_success(success: Success<T>) -> Self {
        Self::Success(success)
    }

    #[must_use]
    pub fn of_failure(fault: Fault) -> Self {
        Self::Failure(fault)
    }

    /// Plain `Ok`-status success around a value.
    #[must_use]
    pub fn ok(value: T) -> Self {
        Self::Success(Success::of(value))
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The success value, or [`AccessError::ValueOnFailure`].
    pub fn value(&self) -> Result<&T, AccessError> {
        match self {
            Self::Success(success) => Ok(success.value()),
            Self::Failure(_) => Err(AccessError::ValueOnFailure),
        }
    }

    pub fn into_value(self) -> Result<T, AccessError> {
        match self {
            Self::Success(success) => Ok(success.into_value()),
            Self::Failure(_) => Err(AccessError::ValueOnFailure),
        }
    }

    /// The fault, or [`AccessError::FaultOnSuccess`].
    pub fn fault(&self) -> Result<&Fault, AccessError> {
        match self {
            Self::Success(_) => Err(AccessError::FaultOnSuccess),
            Self::Failure(fault) => Ok(fault),
        }
    }

    pub fn into_fault(self) -> Result<Fault, AccessError> {
        match self {
            Self::Success(_) => Err(AccessError::FaultOnSuccess),
            Self::Failure(fault) => Ok(fault),
        }
    }

    /// The whole success side, or [`AccessError::ValueOnFailure`].
    pub fn success(&self) -> Result<&Success<T>, AccessError> {
        match self {
            Self::Success(success) => Ok(success),
            Self::Failure(_) => Err(AccessError::ValueOnFailure),
        }
    }

    /// Status marker, success side only.
    pub fn status(&self) -> Result<StatusKind, AccessError> {
        self.success().map(Success::status)
    }

    /// Resolve the message of whichever side this verdict is in.
    #[must_use]
    pub fn message_in(&self, lexicon: &Lexicon, locale: &Locale) -> String {
        match self {
            Self::Success(success) => success.message_in(lexicon, locale),
            Self::Failure(fault) => fault.message_in(lexicon, locale),
        }
    }

    /// Bridge into `std::result::Result`, dropping success metadata.
    pub fn into_result(self) -> Result<T, Fault> {
        match self {
            Self::Success(success) => Ok(success.into_value()),
            Self::Failure(fault) => Err(fault),
        }
    }

    // ── Combinators ──────────────────────────────────────────
    //
    // One rule everywhere: on failure the supplied function is not invoked
    // and the original fault propagates unchanged.

    /// Transform the success value; status and message source carry over.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Verdict<U> {
        match self {
            Self::Success(success) => Verdict::Success(success.map(f)),
            Self::Failure(fault) => Verdict::Failure(fault),
        }
    }

    /// Chain a step that can itself fail. The step's verdict, whatever it
    /// is, becomes the chain's verdict.
    #[must_use]
    pub fn bind<U>(self, f: impl FnOnce(T) -> Verdict<U>) -> Verdict<U> {
        match self {
            Self::Success(success) => f(success.into_value()),
            Self::Failure(fault) => Verdict::Failure(fault),
        }
    }

    /// Keep the success only if `predicate` holds; otherwise fail with
    /// `fault`, discarding the value. An existing failure wins over `fault`.
    #[must_use]
    pub fn ensure(self, predicate: impl FnOnce(&T) -> bool, fault: Fault) -> Self {
        match self {
            Self::Success(success) if !predicate(success.value()) => Self::Failure(fault),
            other => other,
        }
    }

    /// Run `action` against the success value for its side effect, then pass
    /// the verdict through unchanged. Panics in `action` propagate.
    #[must_use]
    pub fn tap(self, action: impl FnOnce(&T)) -> Self {
        if let Self::Success(success) = &self {
            action(success.value());
        }
        self
    }
}

impl<T> From<Success<T>> for Verdict<T> {
    fn from(success: Success<T>) -> Self {
        Self::Success(success)
    }
}

impl<T> From<Fault> for Verdict<T> {
    fn from(fault: Fault) -> Self {
        Self::Failure(fault)
    }
}

impl<T> From<Result<T, Fault>> for Verdict<T> {
    fn from(result: Result<T, Fault>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(fault) => Self::Failure(fault),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn pass() -> Verdict<i32> {
        Verdict::ok(5)
    }

    fn fail() -> Verdict<i32> {
        Verdict::of_failure(Fault::not_found("Customer"))
    }

    #[test]
    fn states_are_exclusive() {
        assert!(pass().is_success());
        assert!(!pass().is_failure());
        assert!(fail().is_failure());
        assert!(!fail().is_success());
    }

    #[test]
    fn wrong_state_accessors_return_access_errors() {
        assert_eq!(pass().value().copied(), Ok(5));
        assert_eq!(pass().fault().err(), Some(AccessError::FaultOnSuccess));
        assert_eq!(pass().into_fault().err(), Some(AccessError::FaultOnSuccess));

        assert_eq!(fail().value().err(), Some(AccessError::ValueOnFailure));
        assert_eq!(fail().into_value().err(), Some(AccessError::ValueOnFailure));
        assert_eq!(fail().status().err(), Some(AccessError::ValueOnFailure));
        assert_eq!(fail().fault().unwrap().code().value(), 1201);
    }

    #[test]
    fn map_transforms_the_value_and_keeps_status() {
        let verdict = Verdict::of_success(Success::new(5, StatusKind::Created));
        let mapped = verdict.map(|n| n.to_string());
        assert_eq!(mapped.value().map(String::as_str), Ok("5"));
        assert_eq!(mapped.status(), Ok(StatusKind::Created));
    }

    #[test]
    fn map_keeps_the_message_source() {
        let verdict = Verdict::of_success(Success::of(2).with_message("two of them"));
        let mapped = verdict.map(|n| n * 10);
        let source = mapped.success().unwrap().source().clone();
        assert_eq!(source, MessageSource::literal_with("two of them", Vec::<String>::new()));
    }

    #[test]
    fn map_on_failure_never_calls_the_closure() {
        let calls = Cell::new(0);
        let original = fail();
        let mapped = original.clone().map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(mapped.fault(), original.fault());
    }

    #[test]
    fn bind_chains_fallible_steps() {
        let verdict = pass()
            .bind(|n| Verdict::ok(n * 2))
            .bind(|n| Verdict::ok(n + 1));
        assert_eq!(verdict.value().copied(), Ok(11));
    }

    #[test]
    fn bind_short_circuits_on_the_first_failure() {
        let calls = Cell::new(0);
        let verdict = pass()
            .bind(|_| Verdict::<i32>::of_failure(Fault::internal()))
            .bind(|n| {
                calls.set(calls.get() + 1);
                Verdict::ok(n)
            });
        assert_eq!(calls.get(), 0);
        assert_eq!(verdict.fault().unwrap().code().value(), 1001);
    }

    #[test]
    fn ensure_passes_and_fails_on_the_predicate() {
        let kept = pass().ensure(|n| *n > 0, Fault::invalid_field("n", "must be positive"));
        assert_eq!(kept.value().copied(), Ok(5));

        let failed = pass().ensure(|n| *n > 10, Fault::invalid_field("n", "too small"));
        assert!(failed.is_failure());
        assert_eq!(failed.fault().unwrap().code().value(), 1102);
    }

    #[test]
    fn ensure_on_failure_keeps_the_original_fault() {
        let verdict = fail().ensure(|_| false, Fault::internal());
        // Still the not-found fault, not the ensure replacement.
        assert_eq!(verdict.fault().unwrap().code().value(), 1201);
    }

    #[test]
    fn tap_observes_without_changing_the_verdict() {
        let seen = Cell::new(0);
        let verdict = pass().tap(|n| seen.set(*n));
        assert_eq!(seen.get(), 5);
        assert_eq!(verdict, pass());
    }

    #[test]
    fn tap_on_failure_is_not_invoked() {
        let calls = Cell::new(0);
        let verdict = fail().tap(|_| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 0);
        assert_eq!(verdict, fail());
    }

    #[test]
    fn chains_preserve_left_to_right_order() {
        let log = std::cell::RefCell::new(Vec::new());
        let verdict = pass()
            .tap(|_| log.borrow_mut().push("tap"))
            .map(|n| {
                log.borrow_mut().push("map");
                n
            })
            .bind(|n| {
                log.borrow_mut().push("bind");
                Verdict::ok(n)
            });
        assert!(verdict.is_success());
        assert_eq!(*log.borrow(), ["tap", "map", "bind"]);
    }

    #[test]
    fn std_result_bridge_round_trips() {
        assert_eq!(pass().into_result(), Ok(5));
        let fault = fail().into_result().unwrap_err();
        assert_eq!(fault.code().value(), 1201);

        let from_ok: Verdict<i32> = Ok(3).into();
        assert_eq!(from_ok.value().copied(), Ok(3));
        let from_err: Verdict<i32> = Err(Fault::internal()).into();
        assert!(from_err.is_failure());
    }

    #[test]
    fn unit_success_constructors_carry_their_status() {
        assert_eq!(Success::ok().status(), StatusKind::Ok);
        assert_eq!(Success::created().status(), StatusKind::Created);
        assert_eq!(Success::accepted().status(), StatusKind::Accepted);
        assert_eq!(Success::no_content().status(), StatusKind::NoContent);
    }

    #[test]
    fn success_messages_resolve_through_the_success_lookup() {
        let lexicon = Lexicon::new(Locale::INVARIANT)
            .with_success_lookup(|_, key| (key == "success.created").then(|| "stored".to_owned()));
        let success = Success::created();
        assert_eq!(success.message_in(&lexicon, &Locale::INVARIANT), "stored");
        // Builtin default when the lookup misses.
        assert_eq!(Success::ok().message_in(&lexicon, &Locale::INVARIANT), "OK.");
    }

    #[test]
    fn verdict_message_covers_both_sides() {
        let lexicon = Lexicon::new(Locale::INVARIANT);
        assert_eq!(pass().message_in(&lexicon, &Locale::INVARIANT), "OK.");
        assert_eq!(fail().message_in(&lexicon, &Locale::INVARIANT), "Customer was not found.");
    }

    #[test]
    fn success_with_message_overrides_the_default() {
        let lexicon = Lexicon::new(Locale::INVARIANT);
        let success = Success::of(7).with_message("seven is fine");
        assert_eq!(success.message_in(&lexicon, &Locale::INVARIANT), "seven is fine");
    }
}
