//! The fixed tables that every generated entry draws from.

use std::fmt;

use rand::Rng;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Severity {
    Info,
    Debug,
    Warn,
    Error,
}

impl Severity {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct LogTemplate {
    pub(crate) severity: Severity,
    pub(crate) text: &'static str,
}

const fn template(severity: Severity, text: &'static str) -> LogTemplate {
    LogTemplate { severity, text }
}

pub(crate) const TEMPLATES: &[LogTemplate] = &[
    template(Severity::Info, "Request processed successfully"),
    template(Severity::Info, "User {user_id} logged in from {ip}"),
    template(
        Severity::Info,
        "API request: {method} {endpoint} completed in {duration}ms",
    ),
    template(Severity::Info, "Cache hit for key {cache_key}"),
    template(Severity::Info, "Database query completed in {duration}ms"),
    template(Severity::Debug, "Processing request for endpoint {endpoint}"),
    template(Severity::Debug, "Validating request parameters"),
    template(Severity::Debug, "Cache lookup for key {cache_key}"),
    template(
        Severity::Warn,
        "Slow query detected: {duration}ms for {endpoint}",
    ),
    template(Severity::Warn, "High memory usage: {percentage}% of limit"),
    template(Severity::Warn, "Rate limit approaching for user {user_id}"),
    template(
        Severity::Warn,
        "Cache miss rate above threshold: {percentage}%",
    ),
    template(
        Severity::Warn,
        "Queue depth for {queue} is {count} (threshold: {threshold})",
    ),
    template(Severity::Error, "Database connection failed: {error}"),
    template(
        Severity::Error,
        "Failed to process payment for user {user_id}: {error}",
    ),
    template(
        Severity::Error,
        "Authentication failed for user {user_id} from {ip}",
    ),
    template(
        Severity::Error,
        "Request timeout after {duration}ms for {endpoint}",
    ),
    template(
        Severity::Error,
        "Failed to connect to {database}: connection refused",
    ),
    template(Severity::Error, "Validation error: {error}"),
    template(Severity::Error, "Unexpected error in {endpoint}: {error}"),
];

pub(crate) const SERVICES: &[&str] = &[
    "api-gateway",
    "auth-service",
    "payment-service",
    "user-service",
    "notification-service",
    "order-service",
    "inventory-service",
];

pub(crate) const ENDPOINTS: &[&str] = &[
    "/api/v1/users",
    "/api/v1/orders",
    "/api/v1/products",
    "/api/v1/auth/login",
    "/api/v1/auth/register",
    "/api/v1/payments",
    "/api/v1/inventory",
    "/api/v2/users",
    "/health",
    "/metrics",
];

pub(crate) const HTTP_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "PATCH"];

pub(crate) const STATUS_CODES: &[u16] = &[200, 201, 204, 400, 401, 403, 404, 422, 500, 502, 503];

pub(crate) const ERROR_CODES: &[&str] = &[
    "ERR_DB_CONNECTION",
    "ERR_TIMEOUT",
    "ERR_VALIDATION",
    "ERR_AUTH_FAILED",
    "ERR_NOT_FOUND",
    "ERR_PAYMENT_FAILED",
];

pub(crate) const ERROR_MESSAGES: &[&str] = &[
    "connection timeout",
    "validation failed",
    "user not found",
    "permission denied",
    "invalid token",
    "database error",
];

pub(crate) const WARNING_TYPES: &[&str] = &["performance", "security", "capacity", "deprecation"];

pub(crate) const DATABASES: &[&str] = &[
    "postgres-primary",
    "postgres-replica",
    "redis-cache",
    "mongodb-orders",
];

pub(crate) const QUEUES: &[&str] = &[
    "email-queue",
    "notification-queue",
    "analytics-queue",
    "payment-queue",
];

pub(crate) const CACHE_KEYS: &[&str] = &["user", "session", "product", "inventory", "config"];

pub(crate) const STACK_FRAMES: &[&str] = &[
    "at handleRequest (app.js:145)",
    "at Database.query (db.js:89)",
    "at validateUser (auth.js:234)",
    "at processPayment (payment.js:456)",
    "at sendEmail (email.js:78)",
];

/// Uniform pick from one of the tables above. They are never empty.
pub(crate) fn choose<T: Copy, R: Rng + ?Sized>(rng: &mut R, table: &[T]) -> T {
    table[rng.gen_range(0..table.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Placeholder;
    use std::collections::HashSet;

    fn tokens(text: &str) -> Vec<&str> {
        let mut found = Vec::new();
        let mut rest = text;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            found.push(&rest[start..=start + len]);
            rest = &rest[start + len + 1..];
        }
        found
    }

    #[test]
    fn every_template_placeholder_is_recognized() {
        let known: HashSet<&str> = Placeholder::ALL.iter().map(|p| p.token()).collect();
        for template in TEMPLATES {
            for token in tokens(template.text) {
                assert!(
                    known.contains(token),
                    "unknown placeholder {token} in {:?}",
                    template.text
                );
            }
        }
    }

    #[test]
    fn catalog_covers_every_severity() {
        let severities: HashSet<Severity> = TEMPLATES.iter().map(|t| t.severity).collect();
        assert_eq!(severities.len(), 4);
        assert_eq!(TEMPLATES.len(), 20);
        let errors = TEMPLATES
            .iter()
            .filter(|t| t.severity == Severity::Error)
            .count();
        assert_eq!(errors, 7);
    }

    #[test]
    fn severity_serializes_lowercase() {
        for (severity, expected) in [
            (Severity::Info, "\"info\""),
            (Severity::Debug, "\"debug\""),
            (Severity::Warn, "\"warn\""),
            (Severity::Error, "\"error\""),
        ] {
            assert_eq!(serde_json::to_string(&severity).unwrap(), expected);
            assert_eq!(format!("\"{severity}\""), expected);
        }
    }
}
