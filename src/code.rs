use std::fmt;

use rand::{Rng, rngs::ThreadRng};

pub const MIN_CODE_LENGTH: usize = 2;
pub const MAX_CODE_LENGTH: usize = 64;

/// Secret digit sequence for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code(String);

impl Code {
    /// Wraps an already validated digit string.
    pub fn new(digits: impl Into<String>) -> Self {
        let digits = digits.into();
        debug_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
        Self(digits)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of secret codes.
pub trait CodeGenerator {
    fn generate(&mut self, length: usize) -> Code;
}

/// Codes whose digits are drawn independently and uniformly from 0-9.
pub struct RandomCodes<R = ThreadRng> {
    rng: R,
}

impl RandomCodes {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomCodes {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomCodes<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CodeGenerator for RandomCodes<R> {
    fn generate(&mut self, length: usize) -> Code {
        let digits: String = (0..length)
            .map(|_| char::from(b'0' + self.rng.random_range(0..10u8)))
            .collect();
        Code(digits)
    }
}

/// Reasons a code length answer or a guess is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    NotANumber,
    LengthTooSmall,
    LengthTooLarge,
    WrongGuessLength { expected: usize },
    NotDigits,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "Nothing entered"),
            InputError::NotANumber => write!(f, "You must enter a number"),
            InputError::LengthTooSmall => {
                write!(f, "You must choose a number greater than {}", MIN_CODE_LENGTH - 1)
            }
            InputError::LengthTooLarge => {
                write!(f, "Codes can be at most {} digits long", MAX_CODE_LENGTH)
            }
            InputError::WrongGuessLength { expected } => {
                write!(f, "You must enter {} numbers", expected)
            }
            InputError::NotDigits => write!(f, "The code may contain only numbers"),
        }
    }
}

impl std::error::Error for InputError {}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses the player's answer to "how long do you want the code to be?".
pub fn parse_code_length(input: &str) -> Result<usize, InputError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(InputError::Empty);
    }

    if !is_numeric(input) {
        return Err(InputError::NotANumber);
    }

    // All digits, so a parse failure can only mean overflow
    let length: usize = input.parse().map_err(|_| InputError::LengthTooLarge)?;

    if length < MIN_CODE_LENGTH {
        return Err(InputError::LengthTooSmall);
    }
    if length > MAX_CODE_LENGTH {
        return Err(InputError::LengthTooLarge);
    }

    Ok(length)
}

/// Checks a guess against the current code length and returns the trimmed
/// guess ready for scoring.
pub fn validate_guess(input: &str, code_length: usize) -> Result<&str, InputError> {
    let guess = input.trim();

    if guess.is_empty() {
        return Err(InputError::Empty);
    }

    if guess.chars().count() != code_length {
        return Err(InputError::WrongGuessLength {
            expected: code_length,
        });
    }

    if !is_numeric(guess) {
        return Err(InputError::NotDigits);
    }

    Ok(guess)
}


#[cfg(test)]
mod tests {
    use super::testing::FixedCodes;
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_random_codes_have_requested_length() {
        let mut codes = RandomCodes::with_rng(StdRng::seed_from_u64(7));
        for length in [2, 3, 10, MAX_CODE_LENGTH] {
            let code = codes.generate(length);
            assert_eq!(code.len(), length);
            assert!(code.as_str().bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_random_codes_cover_all_digits() {
        let mut codes = RandomCodes::with_rng(StdRng::seed_from_u64(42));
        let code = codes.generate(MAX_CODE_LENGTH);
        let code = format!("{}{}", code, codes.generate(MAX_CODE_LENGTH));
        for digit in '0'..='9' {
            assert!(code.contains(digit), "digit {digit} never drawn");
        }
    }

    #[test]
    fn test_fixed_codes() {
        let mut codes = FixedCodes(vec!["007", "12"]);
        assert_eq!(codes.generate(3).as_str(), "007");
        assert_eq!(codes.generate(2).to_string(), "12");
    }

    #[test]
    fn test_parse_code_length() {
        assert_eq!(parse_code_length("4"), Ok(4));
        assert_eq!(parse_code_length(" 12\n"), Ok(12));
        assert_eq!(parse_code_length("02"), Ok(2));
        assert_eq!(parse_code_length(""), Err(InputError::Empty));
        assert_eq!(parse_code_length("four"), Err(InputError::NotANumber));
        assert_eq!(parse_code_length("-3"), Err(InputError::NotANumber));
        assert_eq!(parse_code_length("1"), Err(InputError::LengthTooSmall));
        assert_eq!(parse_code_length("0"), Err(InputError::LengthTooSmall));
        assert_eq!(parse_code_length("65"), Err(InputError::LengthTooLarge));
        assert_eq!(
            parse_code_length("99999999999999999999999"),
            Err(InputError::LengthTooLarge)
        );
    }

    #[test]
    fn test_validate_guess() {
        assert_eq!(validate_guess("1234", 4), Ok("1234"));
        assert_eq!(validate_guess(" 0000 ", 4), Ok("0000"));
        assert_eq!(validate_guess("", 4), Err(InputError::Empty));
        assert_eq!(
            validate_guess("123", 4),
            Err(InputError::WrongGuessLength { expected: 4 })
        );
        // Length is checked before content
        assert_eq!(
            validate_guess("abc", 4),
            Err(InputError::WrongGuessLength { expected: 4 })
        );
        assert_eq!(validate_guess("12a4", 4), Err(InputError::NotDigits));
        assert_eq!(validate_guess("１２３４", 4), Err(InputError::NotDigits));
    }

    #[test]
    fn test_input_error_messages() {
        assert_eq!(
            InputError::WrongGuessLength { expected: 5 }.to_string(),
            "You must enter 5 numbers"
        );
        assert_eq!(
            InputError::LengthTooSmall.to_string(),
            "You must choose a number greater than 1"
        );
        assert_eq!(
            InputError::NotDigits.to_string(),
            "The code may contain only numbers"
        );
    }
}
