use futures_util::future::{self, BoxFuture};
use std::time::Duration;

/// Waits out the simulated processing time of a play.
pub trait Delay: Send + Sync {
    fn wait(&self, duration: Duration) -> BoxFuture<'static, ()>;
}

/// Real wall-clock wait on the tokio timer.
pub struct TokioDelay;

impl Delay for TokioDelay {
    fn wait(&self, duration: Duration) -> BoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Resolves immediately.
pub struct InstantDelay;

impl Delay for InstantDelay {
    fn wait(&self, _duration: Duration) -> BoxFuture<'static, ()> {
        Box::pin(future::ready(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_instant_delay_does_not_sleep() {
        let started = Instant::now();
        InstantDelay.wait(Duration::from_secs(30)).await;
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_tokio_delay_waits() {
        let started = Instant::now();
        TokioDelay.wait(Duration::from_millis(20)).await;
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
