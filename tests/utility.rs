#[allow(dead_code)]

/// Returns the community sizes of a membership vector, largest first.
pub fn community_sizes(membership: &[usize]) -> Vec<usize> {
    let max = match membership.iter().max() {
        Some(&m) => m + 1,
        None => 0,
    };
    let mut counts = vec![0usize; max];
    for &comm in membership {
        counts[comm] += 1;
    }
    let mut sizes: Vec<usize> = counts.into_iter().filter(|&c| c > 0).collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes
}

/// `true` if two membership vectors induce the same grouping, regardless of
/// the community labels used.
#[allow(dead_code)]
pub fn same_grouping(membership1: &[usize], membership2: &[usize]) -> bool {
    if membership1.len() != membership2.len() {
        return false;
    }
    for u in 0..membership1.len() {
        for v in (u + 1)..membership1.len() {
            let together1 = membership1[u] == membership1[v];
            let together2 = membership2[u] == membership2[v];
            if together1 != together2 {
                return false;
            }
        }
    }
    true
}
