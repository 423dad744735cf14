//! Pending handle construction and resolution tests

use verdict_flow::{PendingVerdict, VerdictExt};
use verdict_types::{Fault, StatusKind, Success, Verdict};

#[tokio::test]
async fn ready_round_trips_the_verdict() {
    let verdict = Verdict::ok(7);
    let resolved = PendingVerdict::ready(verdict.clone()).await;
    assert_eq!(resolved, verdict);
}

#[tokio::test]
async fn from_value_wraps_the_resolved_value_as_ok() {
    let resolved = PendingVerdict::from_value(async { 123 }).await;
    assert_eq!(resolved.value().copied(), Ok(123));
    assert_eq!(resolved.status(), Ok(StatusKind::Ok));
}

#[tokio::test]
async fn failing_future_preserves_the_original_fault() {
    let fault = Fault::not_found("receipt").with_detail("id", "no such receipt");
    let expected = fault.clone();

    let pending = PendingVerdict::<u32>::new(async move { Verdict::of_failure(fault) });
    let resolved = pending.await;

    assert_eq!(resolved.into_fault(), Ok(expected));
}

#[tokio::test]
async fn conversions_wrap_without_reinterpreting() {
    let from_fault: PendingVerdict<u32> = Fault::internal().into();
    assert_eq!(from_fault.await.fault().map(Fault::module), Ok("application"));

    let from_success: PendingVerdict<u32> = Success::of(9).into();
    assert_eq!(from_success.await.into_value(), Ok(9));

    let from_verdict: PendingVerdict<u32> = Verdict::ok(5).into();
    assert_eq!(from_verdict.await.into_value(), Ok(5));
}

#[tokio::test]
async fn pending_lifts_a_finished_verdict() {
    let resolved = Verdict::ok(3).pending().map(|n| n + 1).await;
    assert_eq!(resolved.into_value(), Ok(4));
}

#[tokio::test]
async fn unit_handles_default_the_type_parameter() {
    let pending: PendingVerdict = PendingVerdict::ready(Verdict::from(Success::accepted()));
    let resolved = pending.await;
    assert_eq!(resolved.status(), Ok(StatusKind::Accepted));
}

#[tokio::test]
async fn handles_cross_task_boundaries() {
    let pending = PendingVerdict::from_value(async { String::from("ok") });
    let joined = tokio::spawn(pending).await.unwrap();
    assert_eq!(joined.into_value().as_deref(), Ok("ok"));
}
