//! Async combinator chain tests

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use verdict_flow::{PendingVerdict, VerdictExt};
use verdict_types::{Fault, Locale, StatusKind, Success, Verdict};

use crate::common;

#[tokio::test]
async fn map_and_bind_compose_across_awaits() {
    let resolved = PendingVerdict::from_value(async { 2 })
        .map(|n| n * 3)
        .bind_async(|n| async move { Verdict::ok(n + 1) })
        .await;

    assert_eq!(resolved.into_value(), Ok(7));
}

#[tokio::test]
async fn failure_skips_every_remaining_step() {
    let touched = Arc::new(AtomicU32::new(0));
    let (map_probe, bind_probe, tap_probe) = (touched.clone(), touched.clone(), touched.clone());

    let resolved = common::failed::<u32>("order")
        .pending()
        .map(move |n| {
            map_probe.fetch_add(1, Ordering::SeqCst);
            n
        })
        .bind_async(move |n| {
            bind_probe.fetch_add(1, Ordering::SeqCst);
            async move { Verdict::ok(n) }
        })
        .tap_async(move |_| {
            tap_probe.fetch_add(1, Ordering::SeqCst);
            async {}
        })
        .await;

    assert!(resolved.is_failure());
    assert_eq!(touched.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn steps_resolve_strictly_in_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let (slow, fast) = (log.clone(), log.clone());

    let resolved = PendingVerdict::from_value(async { 1 })
        .map_async(move |n| async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            slow.lock().unwrap().push("slow");
            n + 1
        })
        .tap_async(move |_| async move {
            fast.lock().unwrap().push("fast");
        })
        .await;

    assert_eq!(resolved.into_value(), Ok(2));
    assert_eq!(*log.lock().unwrap(), ["slow", "fast"]);
}

#[tokio::test]
async fn ensure_async_accepts_and_rejects() {
    let kept = PendingVerdict::from_value(async { 42_u32 })
        .ensure_async(
            |n| {
                let n = *n;
                async move { n > 10 }
            },
            Fault::out_of_range("total", "must exceed 10"),
        )
        .await;
    assert_eq!(kept.into_value(), Ok(42));

    let rejected = PendingVerdict::from_value(async { 3_u32 })
        .ensure_async(
            |n| {
                let n = *n;
                async move { n > 10 }
            },
            Fault::out_of_range("total", "must exceed 10"),
        )
        .await;
    assert_eq!(rejected.fault().map(Fault::kind), Ok("OutOfRange"));
}

#[tokio::test]
async fn guards_never_replace_an_existing_failure() {
    let resolved = common::failed::<u32>("ledger")
        .pending()
        .ensure_async(|_| async { false }, Fault::internal())
        .await;

    assert_eq!(resolved.fault().map(Fault::kind), Ok("NotFound"));
}

#[tokio::test]
async fn map_async_keeps_status_and_message() {
    let resolved = Verdict::from(Success::new("charge-19", StatusKind::Created))
        .pending()
        .map_async(|id| async move { id.len() })
        .await;

    assert_eq!(resolved.status(), Ok(StatusKind::Created));
    let message = resolved.success().map(|s| s.message(&Locale::INVARIANT));
    assert_eq!(message.as_deref(), Ok("Resource created."));
    assert_eq!(resolved.into_value(), Ok(9));
}

#[tokio::test]
async fn finished_verdicts_join_async_chains() {
    let resolved = Verdict::ok(5)
        .map_async(|n| async move { n * 2 })
        .bind(|n| {
            if n == 10 {
                Verdict::ok(n)
            } else {
                common::failed("double")
            }
        })
        .await;

    assert_eq!(resolved.into_value(), Ok(10));
}

#[tokio::test]
async fn ext_guard_and_tap_run_only_on_success() {
    let seen = Arc::new(AtomicU32::new(0));
    let probe = seen.clone();

    let resolved = Verdict::ok(8_u32)
        .ensure_async(
            |n| {
                let n = *n;
                async move { n % 2 == 0 }
            },
            common::rejection(),
        )
        .tap_async(move |n| {
            let n = *n;
            async move { probe.store(n, Ordering::SeqCst) }
        })
        .await;

    assert_eq!(resolved.into_value(), Ok(8));
    assert_eq!(seen.load(Ordering::SeqCst), 8);
}

#[tokio::test]
#[should_panic(expected = "tap exploded")]
async fn tap_panics_surface_to_the_caller() {
    let _ = PendingVerdict::from_value(async { 1 })
        .tap(|_| panic!("tap exploded"))
        .await;
}
