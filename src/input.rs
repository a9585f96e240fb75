use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use crate::data::validator::RawInput;

// ---------------------------------------------------------------------------
// Input provider
// ---------------------------------------------------------------------------

/// Anything that can hand over the four raw answers of an experiment run.
pub trait InputProvider {
    fn read_raw_input(&mut self) -> Result<RawInput>;
}

/// Prompt texts, in the order they are asked.
pub const PROMPTS: [&str; 4] = [
    "Input the least count of the angle scale (degrees): ",
    "Input the least count of the reflectance reading: ",
    "Input Angle values (x) separated by commas: ",
    "Input Reflectance values (y) separated by commas: ",
];

// ---------------------------------------------------------------------------
// Console prompts
// ---------------------------------------------------------------------------

/// Asks the four questions on `output` and reads one line per answer from
/// `input`. Blocks until each line arrives.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.output
            .write_all(prompt.as_bytes())
            .and_then(|()| self.output.flush())
            .context("writing prompt")?;

        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .with_context(|| format!("reading answer to '{}'", prompt.trim_end()))?;
        if n == 0 {
            bail!("input ended before answering '{}'", prompt.trim_end());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> InputProvider for ConsolePrompt<R, W> {
    fn read_raw_input(&mut self) -> Result<RawInput> {
        let [angle_lc, refl_lc, angles, reflectances] = PROMPTS;
        Ok(RawInput {
            angle_least_count: self.ask(angle_lc)?,
            reflectance_least_count: self.ask(refl_lc)?,
            angles: self.ask(angles)?,
            reflectances: self.ask(reflectances)?,
        })
    }
}
