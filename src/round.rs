use crate::{
    code::Code,
    scoring::{MatchResult, count_matches},
};

pub const INSTRUCTIONS: &str = "You select a code length. The computer will pick a random numeric code \
of that length. You then try to guess the code. On every guess, the computer will tell you how \
many numbers in your guess are both the correct number and in the correct position (★) and how \
many are the correct number but not in the correct position (☆). Using this information, you \
should eventually be able to deduce the correct code!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub digits: String,
    pub result: MatchResult,
}

/// A single game: one secret code and the guesses made against it.
#[derive(Debug)]
pub struct Round {
    code: Code,
    guesses: Vec<Guess>,
    solved: bool,
}

impl Round {
    pub fn new(code: Code) -> Self {
        Self {
            code,
            guesses: Vec::new(),
            solved: false,
        }
    }

    pub fn code(&self) -> &Code {
        &self.code
    }

    pub fn code_length(&self) -> usize {
        self.code.len()
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Number of guesses made so far, the solving one included.
    pub fn attempts(&self) -> u32 {
        self.guesses.len() as u32
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Scores a validated guess and records it.
    pub fn submit(&mut self, digits: &str) -> MatchResult {
        assert_eq!(digits.len(), self.code_length());

        let result = count_matches(self.code.as_str(), digits);
        tracing::debug!(
            "Scored guess {} as {} exact, {} misplaced",
            digits,
            result.exact,
            result.misplaced
        );

        self.guesses.push(Guess {
            digits: digits.to_string(),
            result,
        });

        if result.is_solved(self.code_length()) {
            self.solved = true;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round_is_empty() {
        let round = Round::new(Code::new("1234"));
        assert_eq!(round.code_length(), 4);
        assert_eq!(round.attempts(), 0);
        assert!(!round.is_solved());
        assert!(round.guesses().is_empty());
    }

    #[test]
    fn test_submit_records_guesses() {
        let mut round = Round::new(Code::new("1234"));

        let first = round.submit("1243");
        assert_eq!(
            first,
            MatchResult {
                exact: 2,
                misplaced: 2
            }
        );
        assert!(!round.is_solved());

        round.submit("5678");
        assert_eq!(round.attempts(), 2);
        assert_eq!(round.guesses()[1].digits, "5678");
        assert_eq!(round.guesses()[1].result, MatchResult::default());
    }

    #[test]
    fn test_solving_guess_counts_as_attempt() {
        let mut round = Round::new(Code::new("007"));
        round.submit("700");
        round.submit("070");
        let result = round.submit("007");

        assert!(result.is_solved(3));
        assert!(round.is_solved());
        assert_eq!(round.attempts(), 3);
    }

    #[test]
    #[should_panic]
    fn test_submit_rejects_length_mismatch() {
        let mut round = Round::new(Code::new("1234"));
        round.submit("123");
    }
}
