use std::thread::sleep;
use std::time::Duration;
use tracing::{error, warn};

/// Run a query function, retrying up to `max_retries` times with exponential backoff.
///
/// `max_retries = 0` runs the operation exactly once.
pub fn with_retry<F, T, E>(operation: F, max_retries: u32) -> Result<T, E>
where
    F: Fn() -> Result<T, E>,
    E: std::fmt::Display,
{
    let mut attempt = 0;
    loop {
        match operation() {
            Ok(result) => return Ok(result),
            Err(e) if attempt < max_retries => {
                let backoff_ms = 2_u64.pow(attempt) * 100; // 100ms, 200ms, 400ms...
                warn!(
                    attempt = attempt + 1,
                    max_retries,
                    backoff_ms,
                    "query failed: {}, retrying",
                    e
                );
                sleep(Duration::from_millis(backoff_ms));
                attempt += 1;
            }
            Err(e) => {
                if max_retries > 0 {
                    error!("query failed after {} attempts", max_retries + 1);
                }
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_retry_succeeds_on_first_attempt() {
        let result = with_retry(|| Ok::<i32, anyhow::Error>(42), 3);
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn test_retry_succeeds_after_failures() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let result = with_retry(
            move || {
                let count = counter_clone.fetch_add(1, Ordering::SeqCst);
                if count < 2 {
                    anyhow::bail!("Simulated failure")
                } else {
                    Ok(42)
                }
            },
            3,
        );

        assert_eq!(result.unwrap(), 42);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_no_retry_runs_once() {
        let counter = AtomicU32::new(0);
        let result: anyhow::Result<i32> = with_retry(
            || {
                counter.fetch_add(1, Ordering::SeqCst);
                anyhow::bail!("Always fails")
            },
            0,
        );
        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_retry_exhausts_attempts() {
        let result: anyhow::Result<i32> = with_retry(|| anyhow::bail!("Always fails"), 2);
        assert!(result.is_err());
    }
}
