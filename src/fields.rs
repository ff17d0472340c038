use rand::seq::index;
use rand::Rng;

use crate::catalog::{self, STACK_FRAMES};

const HEX: &[u8] = b"abcdef0123456789";

pub(crate) fn hex_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| HEX[rng.gen_range(0..HEX.len())] as char)
        .collect()
}

pub(crate) fn user_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("user_{}", rng.gen_range(1..=10_000))
}

pub(crate) fn ip<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}.{}.{}.{}",
        rng.gen_range(1..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(1..=255),
    )
}

pub(crate) fn duration_ms<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(10..=5_000)
}

pub(crate) fn cache_key<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "cache:{}:{}",
        catalog::choose(rng, catalog::CACHE_KEYS),
        rng.gen_range(1..=10_000)
    )
}

pub(crate) fn request_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("req_{}", hex_string(rng, 16))
}

pub(crate) fn trace_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    hex_string(rng, 32)
}

pub(crate) fn span_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    hex_string(rng, 16)
}

/// Two to four distinct frames in random order, joined by ` | `.
pub(crate) fn stack_trace<R: Rng + ?Sized>(rng: &mut R) -> String {
    let depth = rng.gen_range(2..=4).min(STACK_FRAMES.len());
    index::sample(rng, STACK_FRAMES.len(), depth)
        .into_iter()
        .map(|i| STACK_FRAMES[i])
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn is_lower_hex(s: &str) -> bool {
        s.bytes().all(|b| HEX.contains(&b))
    }

    #[test]
    fn ids_have_expected_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let req = request_id(&mut rng);
            assert_eq!(req.len(), 20);
            assert!(req.starts_with("req_"));
            assert!(is_lower_hex(&req[4..]));

            let trace = trace_id(&mut rng);
            assert_eq!(trace.len(), 32);
            assert!(is_lower_hex(&trace));

            let span = span_id(&mut rng);
            assert_eq!(span.len(), 16);
            assert!(is_lower_hex(&span));
        }
    }

    #[test]
    fn ip_octets_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let addr = ip(&mut rng);
            let octets: Vec<u16> = addr.split('.').map(|o| o.parse().unwrap()).collect();
            assert_eq!(octets.len(), 4, "{addr}");
            assert!((1..=255).contains(&octets[0]));
            assert!(octets[1] <= 255 && octets[2] <= 255);
            assert!((1..=255).contains(&octets[3]));
        }
    }

    #[test]
    fn stack_trace_uses_distinct_frames() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut depths = HashSet::new();
        for _ in 0..200 {
            let trace = stack_trace(&mut rng);
            let frames: Vec<&str> = trace.split(" | ").collect();
            assert!((2..=4).contains(&frames.len()), "{trace}");
            let unique: HashSet<&str> = frames.iter().copied().collect();
            assert_eq!(unique.len(), frames.len(), "{trace}");
            assert!(frames.iter().all(|f| STACK_FRAMES.contains(f)));
            depths.insert(frames.len());
        }
        assert_eq!(depths.len(), 3);
    }

    #[test]
    fn cache_key_and_user_id_formats() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let key = cache_key(&mut rng);
            let parts: Vec<&str> = key.split(':').collect();
            assert_eq!(parts[0], "cache");
            assert!(catalog::CACHE_KEYS.contains(&parts[1]));
            let n: u32 = parts[2].parse().unwrap();
            assert!((1..=10_000).contains(&n));

            let user = user_id(&mut rng);
            let n: u32 = user.strip_prefix("user_").unwrap().parse().unwrap();
            assert!((1..=10_000).contains(&n));
        }
    }
}
