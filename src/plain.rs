//! Line-oriented prompt mode.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;

use crate::{
    code::{CodeGenerator, parse_code_length, validate_guess},
    history::{self, HistoryStore},
    round::{INSTRUCTIONS, Round},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainOptions {
    /// Play every round at this length instead of asking.
    pub length: Option<usize>,
    pub reveal: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Reads answers from the player, asking again until they are valid.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Returns `None` once the input is exhausted.
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None); // EOF
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn read_code_length(&mut self) -> Result<Option<usize>> {
        loop {
            let Some(answer) = self.ask("How long do you want the code to be? ")? else {
                return Ok(None);
            };
            match parse_code_length(&answer) {
                Ok(length) => return Ok(Some(length)),
                Err(e) => self.say(e.to_string())?,
            }
        }
    }

    pub fn read_guess(&mut self, code_length: usize) -> Result<Option<String>> {
        loop {
            let Some(answer) = self.ask("Guess the code: ")? else {
                return Ok(None);
            };
            match validate_guess(&answer, code_length) {
                Ok(guess) => return Ok(Some(guess.to_string())),
                Err(e) => self.say(e.to_string())?,
            }
        }
    }
}

/// Runs the menu loop until the player quits or the input ends.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: W,
    store: &dyn HistoryStore,
    codes: &mut dyn CodeGenerator,
    options: PlainOptions,
) -> Result<()> {
    let mut prompt = Prompt::new(input, output);

    prompt.say("CODE⚡BREAKER")?;

    loop {
        prompt.say("")?;
        prompt.say("What do you want to do?")?;
        prompt.say("(i) Show instructions")?;
        prompt.say("(p) Play a game")?;
        prompt.say("(q) Quit")?;

        let Some(choice) = prompt.ask("")? else {
            info!("Input closed at menu");
            return Ok(());
        };

        match choice.as_str() {
            "i" => prompt.say(INSTRUCTIONS)?,
            "p" => {
                if play_round(&mut prompt, store, codes, options)? == Flow::Quit {
                    return Ok(());
                }
            }
            "q" => {
                prompt.say("Ok bye!")?;
                return Ok(());
            }
            _ => prompt.say("I don't understand...")?,
        }
    }
}

fn play_round<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    store: &dyn HistoryStore,
    codes: &mut dyn CodeGenerator,
    options: PlainOptions,
) -> Result<Flow> {
    let code_length = match options.length {
        Some(length) => length,
        None => match prompt.read_code_length()? {
            Some(length) => length,
            None => return Ok(Flow::Quit),
        },
    };

    let (mut history, load_error) = history::load_or_empty(store);
    if let Some(message) = load_error {
        prompt.say(message)?;
    }
    prompt.say(history::describe(&history, code_length))?;

    let mut round = Round::new(codes.generate(code_length));
    info!("Round started with code length {}", code_length);
    if options.reveal {
        prompt.say(format!("(The code is {})", round.code()))?;
    }

    loop {
        let Some(guess) = prompt.read_guess(code_length)? else {
            info!("Input closed mid-round after {} guesses", round.attempts());
            return Ok(Flow::Quit);
        };

        let result = round.submit(&guess);
        if round.is_solved() {
            let recorded =
                history::record_game(&mut history, store, code_length, round.attempts());
            for message in recorded.messages() {
                prompt.say(message)?;
            }
            return Ok(Flow::Continue);
        }

        prompt.say(result.feedback(code_length))?;
    }
}
