//! Ratcliff/Obershelp similarity
//!
//! Finds the longest common contiguous block, then recurses into the pieces
//! left and right of it. The ratio is `2 * M / T` with `M` the number of
//! matched characters and `T` the combined length of both strings.
//!
//! Tie-breaking follows the classic gestalt matcher: among equally long
//! blocks the one starting earliest in `a` wins, then earliest in `b`.
//! Characters of `b` that are very common in long strings (the "popular"
//! heuristic, strings of 200+ characters) are not used to seed blocks but
//! may still extend them.

use rustc_hash::FxHashMap;

/// Length at which popular characters of `b` stop seeding matches
const POPULAR_MIN_LEN: usize = 200;

/// Similarity ratio in `[0, 1]`
///
/// Two empty strings are identical, so their ratio is 1.0.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

/// Number of characters covered by the matching blocks of `a` and `b`
pub fn matching_characters(a: &[char], b: &[char]) -> usize {
    let index = BlockIndex::new(b);

    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = index.longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }

        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    matched
}

/// Positions of each character in `b`, minus popular characters
struct BlockIndex {
    positions: FxHashMap<char, Vec<usize>>,
}

impl BlockIndex {
    fn new(b: &[char]) -> Self {
        let mut positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (j, &c) in b.iter().enumerate() {
            positions.entry(c).or_default().push(j);
        }

        if b.len() >= POPULAR_MIN_LEN {
            let limit = b.len() / 100 + 1;
            positions.retain(|_, js| js.len() <= limit);
        }

        BlockIndex { positions }
    }

    /// Longest block `a[i..i+size] == b[j..j+size]` inside the given bounds
    fn longest_match(
        &self,
        a: &[char],
        b: &[char],
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // Length of the block ending at a[i - 1], b[j] for each j
        let mut run_lengths: FxHashMap<usize, usize> = FxHashMap::default();

        for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut next_runs: FxHashMap<usize, usize> = FxHashMap::default();

            if let Some(js) = self.positions.get(c) {
                for &j in js {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }

                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| run_lengths.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_runs.insert(j, k);

                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }

            run_lengths = next_runs;
        }

        // Grow the block over characters that were left out of the index
        while best_i > alo && best_j > blo && a[best_i - 1] == b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && a[best_i + best_size] == b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }
}
