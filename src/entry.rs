use serde::Serialize;

use crate::catalog::Severity;

/// One emitted log line. Absent optional fields are left out of the JSON.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub(crate) struct LogEntry {
    pub(crate) timestamp: String,
    pub(crate) level: Severity,
    pub(crate) service: &'static str,
    pub(crate) message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error_code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) stack_trace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) warning_type: Option<&'static str>,
    #[serde(flatten)]
    pub(crate) request: Option<RequestContext>,
    #[serde(flatten)]
    pub(crate) trace: Option<TraceContext>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub(crate) struct RequestContext {
    pub(crate) request_id: String,
    pub(crate) user_id: String,
    pub(crate) endpoint: &'static str,
    pub(crate) method: &'static str,
    pub(crate) duration_ms: u32,
    pub(crate) status_code: u16,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub(crate) struct TraceContext {
    pub(crate) trace_id: String,
    pub(crate) span_id: String,
}

impl LogEntry {
    pub(crate) fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// The entry as one newline-terminated line, ready for a single write.
    pub(crate) fn to_json_line(&self) -> serde_json::Result<Vec<u8>> {
        let mut line = serde_json::to_vec(self)?;
        line.push(b'\n');
        Ok(line)
    }
}
