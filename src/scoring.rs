/// Outcome of comparing one guess against the secret code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchResult {
    /// Right digit in the right position.
    pub exact: usize,
    /// Right digit, wrong position.
    pub misplaced: usize,
}

impl MatchResult {
    pub fn is_solved(&self, code_length: usize) -> bool {
        self.exact == code_length
    }

    /// Positions that contributed nothing.
    pub fn misses(&self, code_length: usize) -> usize {
        code_length.saturating_sub(self.exact + self.misplaced)
    }

    /// Renders the result as `★` per exact match, `☆` per misplaced digit and
    /// `-` for the rest.
    pub fn feedback(&self, code_length: usize) -> String {
        format!(
            "{}{}{}",
            "★".repeat(self.exact),
            "☆".repeat(self.misplaced),
            "-".repeat(self.misses(code_length))
        )
    }
}

/// Scores `guess` against `code`.
///
/// Both strings must have the same length; they are compared byte by byte and
/// are expected to contain only ASCII digits. Every code and guess symbol is
/// consumed at most once: exact matches are taken first, then each remaining
/// guess symbol (in guess order) claims the first unclaimed equal code symbol.
pub fn count_matches(code: &str, guess: &str) -> MatchResult {
    debug_assert_eq!(code.len(), guess.len());

    let mut code_left: Vec<Option<u8>> = code.bytes().map(Some).collect();
    let mut guess_left: Vec<Option<u8>> = guess.bytes().map(Some).collect();

    let mut result = MatchResult::default();

    // Exact pass
    for (c, g) in code_left.iter_mut().zip(guess_left.iter_mut()) {
        if c.is_some() && c == g {
            *c = None;
            *g = None;
            result.exact += 1;
        }
    }

    // Misplaced pass
    for g in guess_left.into_iter().flatten() {
        if let Some(slot) = code_left.iter_mut().find(|c| **c == Some(g)) {
            *slot = None;
            result.misplaced += 1;
        }
    }

    result
}
