use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

const REFERENCE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const REFERENCE_LEN: usize = 6;

/// Display-only booking reference, e.g. "HS-7Q2K9A".
///
/// Not unique and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingReference(String);

impl BookingReference {
    pub fn generate<R: Rng + ?Sized>(prefix: &str, rng: &mut R) -> Self {
        let suffix: String = (0..REFERENCE_LEN)
            .map(|_| REFERENCE_ALPHABET[rng.gen_range(0..REFERENCE_ALPHABET.len())] as char)
            .collect();
        Self(format!("{}-{}", prefix, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reference_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let r = BookingReference::generate("HS", &mut rng);
            let s = r.as_str();
            assert_eq!(s.len(), 9);
            assert!(s.starts_with("HS-"));
            assert!(s[3..]
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_references_drawn_independently() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = BookingReference::generate("HS", &mut rng);
        let b = BookingReference::generate("HS", &mut rng);
        assert_ne!(a, b);
    }
}
