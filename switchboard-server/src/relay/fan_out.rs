use crate::transport::SharedConnection;
use futures::future::join_all;
use switchboard_core::OutboundMessage;
use tracing::warn;

/// Delivery tally for one fan-out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanOut {
    pub delivered: usize,
    pub failed: usize,
}

/// Sends `message` to every target concurrently. A failed target is logged
/// and skipped; it never stops delivery to the others.
pub async fn fan_out(targets: &[SharedConnection], message: &OutboundMessage) -> FanOut {
    let results = join_all(targets.iter().map(|target| target.send(message))).await;

    let mut report = FanOut::default();
    for result in results {
        match result {
            Ok(()) => report.delivered += 1,
            Err(e) => {
                report.failed += 1;
                warn!("Dropping '{}' for unreachable peer: {}", message.action(), e);
            }
        }
    }

    report
}
