//! Tests for backoff delays and the retry loop.

use std::time::Duration;
use storyboard_error::{
    GeminiError, GeminiErrorKind, HttpError, JsonError, StoryboardError,
};
use storyboard_rate_limit::{BackoffPolicy, RetryFailure, is_rate_limited};
use tokio::time::Instant;

fn throttled() -> StoryboardError {
    GeminiError::new(GeminiErrorKind::HttpError {
        status_code: 429,
        message: "RESOURCE_EXHAUSTED: Quota exceeded".to_string(),
    })
    .into()
}

fn bad_request() -> StoryboardError {
    GeminiError::new(GeminiErrorKind::HttpError {
        status_code: 400,
        message: "INVALID_ARGUMENT: prompt blocked".to_string(),
    })
    .into()
}

#[test]
fn test_delay_doubles_per_attempt() {
    let policy = BackoffPolicy::default();
    assert_eq!(policy.delay_for(1, 0), Duration::from_millis(6_000));
    assert_eq!(policy.delay_for(2, 0), Duration::from_millis(12_000));
    assert_eq!(policy.delay_for(3, 0), Duration::from_millis(24_000));
    assert_eq!(policy.delay_for(4, 0), Duration::from_millis(48_000));
    assert_eq!(policy.delay_for(2, 500), Duration::from_millis(12_500));
}

#[test]
fn test_sampled_delay_stays_within_jitter_bounds() {
    let policy = BackoffPolicy::default();
    for attempt in 1..=4 {
        let floor = Duration::from_millis(2u64.pow(attempt) * 3_000);
        for _ in 0..50 {
            let delay = policy.sample_delay(attempt);
            assert!(delay >= floor, "{delay:?} below {floor:?}");
            assert!(delay < floor + Duration::from_millis(1_000));
        }
    }
}

#[test]
fn test_zero_jitter_is_deterministic() {
    let policy = BackoffPolicy {
        max_jitter_ms: 0,
        ..BackoffPolicy::default()
    };
    assert_eq!(policy.sample_delay(1), Duration::from_millis(6_000));
}

#[test]
fn test_schedule_allows_four_retries() {
    assert_eq!(BackoffPolicy::default().schedule().count(), 4);

    let single = BackoffPolicy {
        max_attempts: 1,
        ..BackoffPolicy::default()
    };
    assert_eq!(single.schedule().count(), 0);
}

#[test]
fn test_rate_limit_classification() {
    assert!(is_rate_limited(&throttled()));
    assert!(is_rate_limited(
        &GeminiError::new(GeminiErrorKind::HttpError {
            status_code: 503,
            message: "RESOURCE_EXHAUSTED".to_string(),
        })
        .into()
    ));
    assert!(!is_rate_limited(&bad_request()));
    assert!(!is_rate_limited(&HttpError::new("Connection reset").into()));
    assert!(!is_rate_limited(&JsonError::new("expected value").into()));
}

#[tokio::test(start_paused = true)]
async fn test_exhausts_after_five_throttled_attempts() {
    let policy = BackoffPolicy::default();
    let mut started = Vec::new();

    let outcome: Result<(), RetryFailure> = policy
        .execute(|_attempt| {
            started.push(Instant::now());
            async { Err::<(), _>(throttled()) }
        })
        .await;

    match outcome {
        Err(RetryFailure::Exhausted { attempts, error }) => {
            assert_eq!(attempts, 5);
            assert!(is_rate_limited(&error));
        }
        other => panic!("expected exhaustion, got {other:?}"),
    }

    assert_eq!(started.len(), 5);
    for (index, pair) in started.windows(2).enumerate() {
        let retry = index as u32 + 1;
        let gap = pair[1] - pair[0];
        let floor = Duration::from_millis(2u64.pow(retry) * 3_000);
        assert!(gap >= floor, "retry {retry} waited {gap:?}");
        assert!(gap < floor + Duration::from_millis(1_000), "retry {retry} waited {gap:?}");
    }
}

#[tokio::test(start_paused = true)]
async fn test_permanent_error_is_not_retried() {
    let policy = BackoffPolicy::default();
    let mut calls = 0u32;
    let start = Instant::now();

    let outcome: Result<(), RetryFailure> = policy
        .execute(|_attempt| {
            calls += 1;
            async { Err::<(), _>(bad_request()) }
        })
        .await;

    assert!(matches!(outcome, Err(RetryFailure::Permanent { attempts: 1, .. })));
    assert_eq!(calls, 1);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_permanent_error_after_throttling_stops_loop() {
    let policy = BackoffPolicy::default();

    let outcome: Result<(), RetryFailure> = policy
        .execute(|attempt| async move {
            if attempt == 1 {
                Err(throttled())
            } else {
                Err(bad_request())
            }
        })
        .await;

    assert!(matches!(outcome, Err(RetryFailure::Permanent { attempts: 2, .. })));
}

#[tokio::test(start_paused = true)]
async fn test_recovers_after_throttling() -> anyhow::Result<()> {
    let policy = BackoffPolicy::default();
    let start = Instant::now();

    let outcome = policy
        .execute(|attempt| async move {
            if attempt < 3 {
                Err(throttled())
            } else {
                Ok(format!("image on attempt {attempt}"))
            }
        })
        .await;

    let value = match outcome {
        Ok(value) => value,
        Err(failure) => anyhow::bail!("unexpected failure: {failure:?}"),
    };
    assert_eq!(value, "image on attempt 3");
    assert!(start.elapsed() >= Duration::from_millis(18_000));
    assert!(start.elapsed() < Duration::from_millis(20_000));
    Ok(())
}
