//! Awaitable verdict handles.
//!
//! A [`PendingVerdict`] wraps a boxed future that resolves to a
//! [`Verdict`]. Awaiting the handle consumes it and yields the verdict
//! exactly as the producer built it; failures pass through untouched.
//! Combinators queue follow-on steps rather than running them eagerly:
//! each step starts only after the previous one resolved, so chains run
//! strictly in order and skip every remaining success step once a
//! failure appears.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use verdict_types::{Fault, Success, Verdict};

/// Boxed future type alias for a verdict still being computed.
pub type VerdictFut<T> = Pin<Box<dyn Future<Output = Verdict<T>> + Send>>;

// ── Handle ───────────────────────────────────────────────────

/// A verdict that is still being computed.
#[must_use = "a pending verdict does nothing until awaited"]
pub struct PendingVerdict<T = ()> {
    inner: VerdictFut<T>,
}

impl<T> PendingVerdict<T>
where
    T: Send + 'static,
{
    /// Wrap a future that already resolves to a verdict.
    pub fn new(future: impl Future<Output = Verdict<T>> + Send + 'static) -> Self {
        Self {
            inner: Box::pin(future),
        }
    }

    /// Handle around an already-resolved verdict.
    pub fn ready(verdict: Verdict<T>) -> Self {
        Self::new(std::future::ready(verdict))
    }

    /// Wrap a future of a plain value; the resolved value becomes an
    /// `Ok`-status success.
    pub fn from_value(future: impl Future<Output = T> + Send + 'static) -> Self {
        Self::new(async move { Verdict::ok(future.await) })
    }

    // ── Combinators ──────────────────────────────────────────

    /// Transform the success value once resolved; failures pass through.
    pub fn map<U, F>(self, f: F) -> PendingVerdict<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        PendingVerdict::new(async move { self.await.map(f) })
    }

    /// Chain a fallible step once resolved; failures pass through.
    pub fn bind<U, F>(self, f: F) -> PendingVerdict<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Verdict<U> + Send + 'static,
    {
        PendingVerdict::new(async move { self.await.bind(f) })
    }

    /// Demote to `fault` once resolved if the predicate rejects the value.
    pub fn ensure<P>(self, predicate: P, fault: Fault) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        Self::new(async move { self.await.ensure(predicate, fault) })
    }

    /// Observe the success value once resolved without changing the
    /// verdict.
    pub fn tap<A>(self, action: A) -> Self
    where
        A: FnOnce(&T) + Send + 'static,
    {
        Self::new(async move { self.await.tap(action) })
    }

    /// Transform the success value through an async step. Status and
    /// message source carry over unchanged.
    pub fn map_async<U, F, Fut>(self, f: F) -> PendingVerdict<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
    {
        PendingVerdict::new(async move {
            match self.await {
                Verdict::Success(success) => {
                    let status = success.status();
                    let source = success.source().clone();
                    let value = f(success.into_value()).await;
                    Verdict::Success(Success::from_parts(value, status, source))
                }
                Verdict::Failure(fault) => Verdict::Failure(fault),
            }
        })
    }

    /// Chain an async fallible step; its verdict replaces the current
    /// one.
    pub fn bind_async<U, F, Fut>(self, f: F) -> PendingVerdict<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Verdict<U>> + Send + 'static,
    {
        PendingVerdict::new(async move {
            match self.await {
                Verdict::Success(success) => f(success.into_value()).await,
                Verdict::Failure(fault) => Verdict::Failure(fault),
            }
        })
    }

    /// Demote to `fault` if the async predicate rejects the value.
    ///
    /// The predicate future must own its captures; copy or clone out of
    /// the borrowed value before going async.
    pub fn ensure_async<P, Fut>(self, predicate: P, fault: Fault) -> Self
    where
        P: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        Self::new(async move {
            match self.await {
                Verdict::Success(success) => {
                    if predicate(success.value()).await {
                        Verdict::Success(success)
                    } else {
                        Verdict::Failure(fault)
                    }
                }
                failure @ Verdict::Failure(_) => failure,
            }
        })
    }

    /// Run an async side effect against the success value without
    /// changing the verdict.
    ///
    /// Same capture rule as [`PendingVerdict::ensure_async`]: the action
    /// future must own what it touches.
    pub fn tap_async<A, Fut>(self, action: A) -> Self
    where
        A: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::new(async move {
            match self.await {
                Verdict::Success(success) => {
                    action(success.value()).await;
                    Verdict::Success(success)
                }
                failure @ Verdict::Failure(_) => failure,
            }
        })
    }
}

impl<T> Future for PendingVerdict<T> {
    type Output = Verdict<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.get_mut().inner.as_mut().poll(cx)
    }
}

impl<T> fmt::Debug for PendingVerdict<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingVerdict").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> From<Verdict<T>> for PendingVerdict<T> {
    fn from(verdict: Verdict<T>) -> Self {
        Self::ready(verdict)
    }
}

impl<T: Send + 'static> From<Success<T>> for PendingVerdict<T> {
    fn from(success: Success<T>) -> Self {
        Self::ready(Verdict::Success(success))
    }
}

impl<T: Send + 'static> From<Fault> for PendingVerdict<T> {
    fn from(fault: Fault) -> Self {
        Self::ready(Verdict::Failure(fault))
    }
}
