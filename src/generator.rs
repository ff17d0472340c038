use std::time::Duration;

use chrono::{DateTime, Local, SecondsFormat, TimeZone};
use rand::Rng;

use crate::catalog::{self, LogTemplate, Severity, TEMPLATES};
use crate::cfg::Config;
use crate::entry::{LogEntry, RequestContext, TraceContext};
use crate::fields;
use crate::template;

/// Builds random log entries from the catalog.
pub(crate) struct Generator<R> {
    rng: R,
    stack_trace_probability: f64,
    request_context_probability: f64,
    trace_context_probability: f64,
    min_delay: Duration,
    max_delay: Duration,
}

impl<R: Rng> Generator<R> {
    pub(crate) fn new(rng: R, config: &Config) -> Self {
        Self {
            rng,
            stack_trace_probability: config.stack_trace_probability,
            request_context_probability: config.request_context_probability,
            trace_context_probability: config.trace_context_probability,
            min_delay: config.min_delay,
            max_delay: config.max_delay,
        }
    }

    pub(crate) fn pick_template(&mut self) -> &'static LogTemplate {
        &TEMPLATES[self.rng.gen_range(0..TEMPLATES.len())]
    }

    pub(crate) fn build_entry(&mut self) -> LogEntry {
        self.build_entry_at(Local::now())
    }

    pub(crate) fn build_entry_at<Tz: TimeZone>(&mut self, now: DateTime<Tz>) -> LogEntry
    where
        Tz::Offset: std::fmt::Display,
    {
        let picked = self.pick_template();
        let rng = &mut self.rng;

        let mut entry = LogEntry {
            timestamp: now.to_rfc3339_opts(SecondsFormat::Micros, false),
            level: picked.severity,
            service: catalog::choose(rng, catalog::SERVICES),
            message: template::format_message(rng, picked.text),
            error_code: None,
            stack_trace: None,
            warning_type: None,
            request: None,
            trace: None,
        };

        match picked.severity {
            Severity::Error => {
                entry.error_code = Some(catalog::choose(rng, catalog::ERROR_CODES));
                if rng.gen_bool(self.stack_trace_probability) {
                    entry.stack_trace = Some(fields::stack_trace(rng));
                }
            }
            Severity::Warn => {
                entry.warning_type = Some(catalog::choose(rng, catalog::WARNING_TYPES));
            }
            Severity::Info | Severity::Debug => {}
        }

        if rng.gen_bool(self.request_context_probability) {
            entry.request = Some(RequestContext {
                request_id: fields::request_id(rng),
                user_id: fields::user_id(rng),
                endpoint: catalog::choose(rng, catalog::ENDPOINTS),
                method: catalog::choose(rng, catalog::HTTP_METHODS),
                duration_ms: fields::duration_ms(rng),
                status_code: catalog::choose(rng, catalog::STATUS_CODES),
            });
        }

        if rng.gen_bool(self.trace_context_probability) {
            entry.trace = Some(TraceContext {
                trace_id: fields::trace_id(rng),
                span_id: fields::span_id(rng),
            });
        }

        entry
    }

    /// How long to wait before the next entry.
    pub(crate) fn next_delay(&mut self) -> Duration {
        if self.min_delay >= self.max_delay {
            return self.min_delay;
        }
        self.rng.gen_range(self.min_delay..=self.max_delay)
    }
}
