//! Status-line sink the simulation reports through.

use tokio::sync::mpsc;
use tracing::info;

/// Receives the human-readable status lines the simulation emits.
///
/// The core calls [`report`](StatusReporter::report) once when a run starts
/// and once every 50 ticks; it makes no assumption about how the lines are
/// consumed. Hosts supply whatever sink fits: the console log, a channel
/// drained by a display layer, or a recording buffer in tests.
pub trait StatusReporter: Send + Sync {
    fn report(&mut self, line: &str);
}

/// Forwards status lines to the tracing console log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl StatusReporter for TracingReporter {
    fn report(&mut self, line: &str) {
        info!(target: "plant_status", "{line}");
    }
}

/// Pushes status lines into an unbounded channel for consumption elsewhere.
#[derive(Debug)]
pub struct ChannelReporter {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelReporter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl StatusReporter for ChannelReporter {
    fn report(&mut self, line: &str) {
        // The receiver may already be gone during shutdown; lines are
        // best-effort.
        let _ = self.tx.send(line.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_reporter_delivers_lines_in_order() {
        let (mut reporter, mut rx) = ChannelReporter::new();
        reporter.report("first");
        reporter.report("second");

        assert_eq!(rx.try_recv().as_deref(), Ok("first"));
        assert_eq!(rx.try_recv().as_deref(), Ok("second"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn channel_reporter_survives_a_dropped_receiver() {
        let (mut reporter, rx) = ChannelReporter::new();
        drop(rx);
        reporter.report("nobody listening");
    }
}
