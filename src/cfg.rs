use std::time::Duration;

use clap::Parser;

/// Everything is hardcoded; the command line only answers --help and --version.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Args {}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    /// Chance that an error entry carries a `stack_trace`
    pub(crate) stack_trace_probability: f64,
    /// Chance that any entry carries the request context fields
    pub(crate) request_context_probability: f64,
    /// Chance that any entry carries `trace_id` and `span_id`
    pub(crate) trace_context_probability: f64,
    pub(crate) min_delay: Duration,
    pub(crate) max_delay: Duration,
    /// Emit a progress note every this many entries
    pub(crate) progress_every: u64,
    /// Pause after a failed iteration
    pub(crate) error_backoff: Duration,
}

impl Config {
    pub(crate) fn new(_args: Args) -> Self {
        Self::default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stack_trace_probability: 0.6,
            request_context_probability: 0.7,
            trace_context_probability: 0.5,
            min_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(2),
            progress_every: 100,
            error_backoff: Duration::from_secs(1),
        }
    }
}
