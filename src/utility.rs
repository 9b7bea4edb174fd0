use rand::prelude::*;
use rand_chacha::ChaCha20Rng;

/// Returns a random number generator, optionally seeded.
///
/// A `ChaCha20Rng` is used rather than `StdRng` so that a given seed keeps
/// producing the same stream across releases of the `rand` crate.
pub(crate) fn get_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        None => {
            let mut trng = thread_rng();
            ChaCha20Rng::seed_from_u64(trng.next_u64())
        }
        Some(s) => ChaCha20Rng::seed_from_u64(s),
    }
}

/// Returns the vertex indexes `0..n`, shuffled randomly.
pub(crate) fn get_shuffled_vertex_order(n: usize, rng: &mut ChaCha20Rng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    order
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_get_shuffled_vertex_order() {
        let mut rng = get_rng(Some(1));
        let mut order = get_shuffled_vertex_order(100, &mut rng);
        assert_eq!(order.len(), 100);
        order.sort_unstable();
        assert_eq!(order, (0..100).collect::<Vec<usize>>());
    }

    #[test]
    fn test_get_rng_deterministic() {
        let mut rng1 = get_rng(Some(42));
        let mut rng2 = get_rng(Some(42));
        assert_eq!(rng1.next_u64(), rng2.next_u64());
    }
}
