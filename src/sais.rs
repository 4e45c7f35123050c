//! SA-IS: Suffix Array by Induced Sorting
//!
//! Linear-time O(n) suffix array construction over arbitrary bytes.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: "banana"
//!
//! Step 1: Shift bytes up by one, append sentinel (0) and classify suffixes
//! ┌───┬───┬───┬───┬───┬───┬───┐
//! │ b │ a │ n │ a │ n │ a │ $ │   ($ = sentinel, value 0)
//! ├───┼───┼───┼───┼───┼───┼───┤
//! │ L │ S │ L │ S │ L │ L │ S │   (S = smaller than next, L = larger)
//! └───┴───┴───┴───┴───┴───┴───┘
//!
//! Step 2: Find LMS (Leftmost S-type) suffixes
//!         LMS = S-type preceded by L-type
//!         Positions: 1, 3, 6
//!
//! Step 3: Induced sorting
//!         - Place LMS suffixes at bucket tails
//!         - Induce L-type positions (left-to-right)
//!         - Induce S-type positions (right-to-left)
//!
//! Step 4: If LMS substrings not unique, recurse on reduced problem
//!
//! Step 5: Use sorted LMS order to induce final suffix array
//!
//! Output: [5, 3, 1, 0, 4, 2]
//! ```
//!
//! The shift makes room for the sentinel, so texts containing `0x00` sort
//! correctly.
//!
//! # References
//!
//! - Nong, Zhang, Chan (2009): "Linear Suffix Array Construction by Almost Pure Induced-Sorting"
//! - <https://doi.org/10.1109/DCC.2009.42>

/// Suffix type classification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SuffixType {
    /// S-type: suffix is lexicographically smaller than the next suffix
    S,
    /// L-type: suffix is lexicographically larger than the next suffix
    L,
}

/// Sentinel value (smaller than every shifted input symbol).
const SENTINEL: usize = 0;

/// Symbols after shifting every byte up by one to free the sentinel.
const BYTE_ALPHABET: usize = 257;

const UNSET: usize = usize::MAX;

/// Build the suffix array of `text` in O(n) time.
///
/// `sa[i]` is the starting position of the i-th smallest suffix.
pub fn suffix_array(text: &[u8]) -> Vec<usize> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut shifted: Vec<usize> = Vec::with_capacity(text.len() + 1);
    shifted.extend(text.iter().map(|&b| b as usize + 1));
    shifted.push(SENTINEL);

    let sa = sais_inner(&shifted, BYTE_ALPHABET);

    // The sentinel suffix always sorts first
    debug_assert_eq!(sa[0], text.len());
    sa.into_iter().filter(|&pos| pos < text.len()).collect()
}

/// Core SA-IS over an integer alphabet `[0, alphabet_size)`.
///
/// `text` must end with a unique smallest symbol.
fn sais_inner(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![0];
    }
    if n == 2 {
        return if text[0] <= text[1] {
            vec![0, 1]
        } else {
            vec![1, 0]
        };
    }

    let types = classify_suffixes(text);
    let lms_positions: Vec<usize> = (1..n).filter(|&i| is_lms(&types, i)).collect();

    if lms_positions.is_empty() {
        let mut sa: Vec<usize> = (0..n).collect();
        sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
        return sa;
    }

    let bucket_sizes = compute_bucket_sizes(text, alphabet_size);

    // First pass: LMS suffixes in text order, only their substrings get sorted
    let mut sa = vec![UNSET; n];
    induce(text, &types, &bucket_sizes, &lms_positions, &mut sa);

    // Name LMS substrings in sorted order
    let mut name = 0usize;
    let mut prev_pos: Option<usize> = None;
    let mut lms_names = vec![0usize; n];

    for &pos in &sa {
        if !is_lms(&types, pos) {
            continue;
        }
        if let Some(prev) = prev_pos {
            if !lms_substrings_equal(text, &types, prev, pos) {
                name += 1;
            }
        }
        lms_names[pos] = name;
        prev_pos = Some(pos);
    }

    let unique_count = name + 1;
    let reduced: Vec<usize> = lms_positions.iter().map(|&pos| lms_names[pos]).collect();

    let sorted_lms_indices = if unique_count < lms_positions.len() {
        sais_inner(&reduced, unique_count)
    } else {
        // All unique: the names themselves give the order
        let mut order: Vec<usize> = (0..reduced.len()).collect();
        order.sort_by_key(|&i| reduced[i]);
        order
    };

    let sorted_lms: Vec<usize> = sorted_lms_indices
        .iter()
        .map(|&i| lms_positions[i])
        .collect();

    // Second pass with correctly ordered LMS suffixes
    sa.fill(UNSET);
    induce(text, &types, &bucket_sizes, &sorted_lms, &mut sa);

    sa
}

/// Seed `sa` with `lms` at bucket tails, then induce L-type and S-type suffixes.
fn induce(
    text: &[usize],
    types: &[SuffixType],
    bucket_sizes: &[usize],
    lms: &[usize],
    sa: &mut [usize],
) {
    let n = text.len();

    let mut tails = compute_bucket_tails(bucket_sizes);
    for &pos in lms.iter().rev() {
        let c = text[pos];
        tails[c] -= 1;
        sa[tails[c]] = pos;
    }

    let mut heads = compute_bucket_heads(bucket_sizes);
    for i in 0..n {
        if sa[i] == UNSET || sa[i] == 0 {
            continue;
        }
        let j = sa[i] - 1;
        if types[j] == SuffixType::L {
            let c = text[j];
            sa[heads[c]] = j;
            heads[c] += 1;
        }
    }

    let mut tails = compute_bucket_tails(bucket_sizes);
    for i in (0..n).rev() {
        if sa[i] == UNSET || sa[i] == 0 {
            continue;
        }
        let j = sa[i] - 1;
        if types[j] == SuffixType::S {
            let c = text[j];
            tails[c] -= 1;
            sa[tails[c]] = j;
        }
    }
}

/// Classify each suffix as S-type or L-type.
fn classify_suffixes(text: &[usize]) -> Vec<SuffixType> {
    let n = text.len();
    let mut types = vec![SuffixType::S; n];

    for i in (0..n - 1).rev() {
        types[i] = if text[i] > text[i + 1] {
            SuffixType::L
        } else if text[i] < text[i + 1] {
            SuffixType::S
        } else {
            types[i + 1]
        };
    }

    types
}

/// Check if position i is an LMS position.
#[inline]
fn is_lms(types: &[SuffixType], i: usize) -> bool {
    i > 0 && i < types.len() && types[i] == SuffixType::S && types[i - 1] == SuffixType::L
}

fn compute_bucket_sizes(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    let mut sizes = vec![0; alphabet_size];
    for &c in text {
        sizes[c] += 1;
    }
    sizes
}

fn compute_bucket_heads(sizes: &[usize]) -> Vec<usize> {
    let mut heads = vec![0; sizes.len()];
    let mut sum = 0;
    for (i, &size) in sizes.iter().enumerate() {
        heads[i] = sum;
        sum += size;
    }
    heads
}

fn compute_bucket_tails(sizes: &[usize]) -> Vec<usize> {
    let mut tails = vec![0; sizes.len()];
    let mut sum = 0;
    for (i, &size) in sizes.iter().enumerate() {
        sum += size;
        tails[i] = sum;
    }
    tails
}

/// Compare two LMS substrings for equality.
fn lms_substrings_equal(text: &[usize], types: &[SuffixType], i: usize, j: usize) -> bool {
    if i == j {
        return true;
    }

    let n = text.len();
    let mut k = 0;

    loop {
        let pi = i + k;
        let pj = j + k;

        if pi >= n || pj >= n {
            return pi >= n && pj >= n;
        }
        if text[pi] != text[pj] || types[pi] != types[pj] {
            return false;
        }

        // After first character, check if both reached next LMS
        if k > 0 {
            let lms_i = is_lms(types, pi);
            let lms_j = is_lms(types, pj);
            if lms_i && lms_j {
                return true;
            }
            if lms_i != lms_j {
                return false;
            }
        }

        k += 1;
    }
}
