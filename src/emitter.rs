use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use rand::Rng;
use tracing::{debug, error, info, warn};

use crate::cfg::Config;
use crate::error::EmitError;
use crate::generator::Generator;

/// Counts reported when the loop stops.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub(crate) struct Summary {
    pub(crate) emitted: u64,
    pub(crate) failed: u64,
    pub(crate) progress_notes: u64,
}

/// Whether the `emitted`-th entry is due a progress note.
pub(crate) fn progress_due(emitted: u64, every: u64) -> bool {
    emitted != 0 && emitted % every.max(1) == 0
}

/// Drives the generator: one JSON line per iteration until shutdown.
pub(crate) struct Emitter<'a, R, W, P> {
    generator: Generator<R>,
    out: W,
    pause: P,
    shutdown: &'a AtomicBool,
    progress_every: u64,
    error_backoff: Duration,
}

impl<'a, R, W, P> Emitter<'a, R, W, P>
where
    R: Rng,
    W: Write,
    P: FnMut(Duration),
{
    pub(crate) fn new(
        generator: Generator<R>,
        out: W,
        pause: P,
        shutdown: &'a AtomicBool,
        config: &Config,
    ) -> Self {
        Self {
            generator,
            out,
            pause,
            shutdown,
            progress_every: config.progress_every.max(1),
            error_backoff: config.error_backoff,
        }
    }

    /// Loop until `shutdown` is set. Failed iterations are logged and retried
    /// after the backoff, they never end the loop.
    pub(crate) fn run(&mut self) -> Summary {
        let mut summary = Summary::default();

        while !self.shutdown.load(Ordering::Relaxed) {
            match self.emit_one() {
                Ok(()) => {
                    summary.emitted += 1;
                    if progress_due(summary.emitted, self.progress_every) {
                        summary.progress_notes += 1;
                        info!(
                            emitted = summary.emitted,
                            "generated {} log entries", summary.emitted
                        );
                    }
                    let delay = self.generator.next_delay();
                    (self.pause)(delay);
                }
                Err(e) => {
                    summary.failed += 1;
                    error!(error = %e, "failed to emit log entry, retrying");
                    (self.pause)(self.error_backoff);
                }
            }
        }

        // warn so a quieter filter still shows it
        warn!(
            emitted = summary.emitted,
            failed = summary.failed,
            "shutting down, generated {} total logs", summary.emitted
        );
        summary
    }

    /// The whole line goes out in one `write_all`, so a failed entry is
    /// either rejected or partially written, never queued for later.
    fn emit_one(&mut self) -> Result<(), EmitError> {
        let entry = self.generator.build_entry();
        let line = entry.to_json_line()?;
        debug!(level = %entry.level, service = entry.service, "emitting");
        self.out.write_all(&line)?;
        self.out.flush()?;
        Ok(())
    }
}
