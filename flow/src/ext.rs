//! Lifting completed verdicts into the async surface.

use std::future::Future;

use verdict_types::{Fault, Verdict};

use crate::pending::PendingVerdict;

/// Async extension methods for [`Verdict`].
///
/// Each method wraps the verdict in a [`PendingVerdict`] and queues the
/// step there, so a finished verdict slots into an async chain without
/// ceremony.
pub trait VerdictExt<T>: Sized {
    /// Wrap as an already-resolved pending verdict.
    fn pending(self) -> PendingVerdict<T>;

    /// Transform the success value through an async step; failures pass
    /// through.
    fn map_async<U, F, Fut>(self, f: F) -> PendingVerdict<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static;

    /// Chain an async fallible step; failures pass through.
    fn bind_async<U, F, Fut>(self, f: F) -> PendingVerdict<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Verdict<U>> + Send + 'static;

    /// Demote to `fault` if the async predicate rejects the value.
    fn ensure_async<P, Fut>(self, predicate: P, fault: Fault) -> PendingVerdict<T>
    where
        P: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = bool> + Send + 'static;

    /// Run an async side effect against the success value without
    /// changing the verdict.
    fn tap_async<A, Fut>(self, action: A) -> PendingVerdict<T>
    where
        A: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static;
}

impl<T> VerdictExt<T> for Verdict<T>
where
    T: Send + 'static,
{
    fn pending(self) -> PendingVerdict<T> {
        PendingVerdict::ready(self)
    }

    fn map_async<U, F, Fut>(self, f: F) -> PendingVerdict<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
    {
        self.pending().map_async(f)
    }

    fn bind_async<U, F, Fut>(self, f: F) -> PendingVerdict<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Verdict<U>> + Send + 'static,
    {
        self.pending().bind_async(f)
    }

    fn ensure_async<P, Fut>(self, predicate: P, fault: Fault) -> PendingVerdict<T>
    where
        P: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        self.pending().ensure_async(predicate, fault)
    }

    fn tap_async<A, Fut>(self, action: A) -> PendingVerdict<T>
    where
        A: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.pending().tap_async(action)
    }
}
