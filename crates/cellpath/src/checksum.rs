//! Rolling hash over a path's state sequence.

use crate::traits::StateId;

const PRIME: u32 = 0x0100_0193;
const SEED: u32 = 0x811c_9dc5;

/// Order-sensitive fingerprint of `path`.
///
/// Two identical paths always hash the same; paths that differ in any state
/// or in order differ with overwhelming probability. An empty path hashes to
/// 0.
pub fn path_checksum(path: &[StateId]) -> u32 {
    if path.is_empty() {
        return 0;
    }
    path.iter().fold(SEED, |acc, s| {
        let h = s.0 as u64;
        let folded = (h as u32) ^ ((h >> 32) as u32);
        (acc.rotate_left(5) ^ folded).wrapping_mul(PRIME)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[usize]) -> Vec<StateId> {
        v.iter().copied().map(StateId).collect()
    }

    #[test]
    fn deterministic() {
        let p = ids(&[0, 5, 10, 15]);
        assert_eq!(path_checksum(&p), path_checksum(&p.clone()));
    }

    #[test]
    fn sensitive_to_order_and_content() {
        let a = path_checksum(&ids(&[0, 5, 10, 15]));
        assert_ne!(a, path_checksum(&ids(&[0, 10, 5, 15])));
        assert_ne!(a, path_checksum(&ids(&[0, 4, 10, 15])));
        assert_ne!(a, path_checksum(&ids(&[0, 5, 10])));
    }

    #[test]
    fn empty_path_is_zero() {
        assert_eq!(path_checksum(&[]), 0);
    }
}
