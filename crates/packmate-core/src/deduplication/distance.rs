//! Levenshtein edit distance

/// Compute the Levenshtein distance between two strings.
///
/// Minimum number of single-character insertions, deletions, and
/// substitutions to turn `a` into `b`. Comparison is by character equality
/// and case-sensitive; callers normalize case first.
///
/// Item names are short, so the full `(len(b)+1) x (len(a)+1)` matrix is
/// retained rather than the two-row variant.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut matrix = vec![vec![0usize; a_chars.len() + 1]; b_chars.len() + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=b_chars.len() {
        for j in 1..=a_chars.len() {
            let cost = if b_chars[i - 1] == a_chars[j - 1] { 0 } else { 1 };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[b_chars.len()][a_chars.len()]
}
