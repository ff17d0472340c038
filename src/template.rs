use rand::Rng;

use crate::catalog;
use crate::fields;

/// A `{name}` token the generator knows how to fill.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Placeholder {
    UserId,
    Endpoint,
    Method,
    Status,
    Duration,
    Error,
    Ip,
    Count,
    Threshold,
    Database,
    Queue,
    CacheKey,
    Percentage,
}

impl Placeholder {
    /// Substitution order.
    pub(crate) const ALL: [Placeholder; 13] = [
        Placeholder::UserId,
        Placeholder::Endpoint,
        Placeholder::Method,
        Placeholder::Status,
        Placeholder::Duration,
        Placeholder::Error,
        Placeholder::Ip,
        Placeholder::Count,
        Placeholder::Threshold,
        Placeholder::Database,
        Placeholder::Queue,
        Placeholder::CacheKey,
        Placeholder::Percentage,
    ];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Placeholder::UserId => "{user_id}",
            Placeholder::Endpoint => "{endpoint}",
            Placeholder::Method => "{method}",
            Placeholder::Status => "{status}",
            Placeholder::Duration => "{duration}",
            Placeholder::Error => "{error}",
            Placeholder::Ip => "{ip}",
            Placeholder::Count => "{count}",
            Placeholder::Threshold => "{threshold}",
            Placeholder::Database => "{database}",
            Placeholder::Queue => "{queue}",
            Placeholder::CacheKey => "{cache_key}",
            Placeholder::Percentage => "{percentage}",
        }
    }

    pub(crate) fn generate<R: Rng + ?Sized>(self, rng: &mut R) -> String {
        match self {
            Placeholder::UserId => fields::user_id(rng),
            Placeholder::Endpoint => catalog::choose(rng, catalog::ENDPOINTS).to_string(),
            Placeholder::Method => catalog::choose(rng, catalog::HTTP_METHODS).to_string(),
            Placeholder::Status => catalog::choose(rng, catalog::STATUS_CODES).to_string(),
            Placeholder::Duration => fields::duration_ms(rng).to_string(),
            Placeholder::Error => catalog::choose(rng, catalog::ERROR_MESSAGES).to_string(),
            Placeholder::Ip => fields::ip(rng),
            Placeholder::Count => rng.gen_range(1..=1_000).to_string(),
            Placeholder::Threshold => rng.gen_range(50..=100).to_string(),
            Placeholder::Database => catalog::choose(rng, catalog::DATABASES).to_string(),
            Placeholder::Queue => catalog::choose(rng, catalog::QUEUES).to_string(),
            Placeholder::CacheKey => fields::cache_key(rng),
            Placeholder::Percentage => format!("{:.2}", rng.gen_range(0.0..100.0)),
        }
    }
}

/// Fill the first occurrence of every recognized placeholder in `text`.
///
/// Later occurrences of the same token and unknown `{...}` tokens are left as
/// they are.
pub(crate) fn format_message<R: Rng + ?Sized>(rng: &mut R, text: &str) -> String {
    let mut message = text.to_string();
    for placeholder in Placeholder::ALL {
        let token = placeholder.token();
        if let Some(at) = message.find(token) {
            let value = placeholder.generate(rng);
            message.replace_range(at..at + token.len(), &value);
        }
    }
    message
}
