use std::io::{self, IsTerminal};

use colored::Colorize;
use inquire::{
    InquireError, Text,
    ui::{RenderConfig, Styled},
};
use zipweather_core::{LineInput, PROMPT, PostalInput, WarningSink};

/// Prompts with `inquire` on an interactive terminal.
#[derive(Debug, Clone)]
pub struct InquireInput {
    render_config: RenderConfig<'static>,
}

impl Default for InquireInput {
    fn default() -> Self {
        Self {
            render_config: RenderConfig::default().with_prompt_prefix(Styled::new("")),
        }
    }
}

impl PostalInput for InquireInput {
    fn read_postal_code(&mut self) -> io::Result<Option<String>> {
        let answer = Text::new(PROMPT.trim_end())
            .with_render_config(self.render_config)
            .prompt();

        match answer {
            Ok(line) => Ok(Some(line)),
            // Esc and Ctrl-C end the session like end of input.
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(InquireError::IO(err)) => Err(err),
            Err(other) => Err(io::Error::other(other)),
        }
    }
}

/// `inquire` on a terminal, plain line reads when stdin is piped.
pub fn postal_input() -> Box<dyn PostalInput> {
    if io::stdin().is_terminal() {
        Box::new(InquireInput::default())
    } else {
        Box::new(LineInput::new(io::stdin().lock(), io::stdout()))
    }
}

/// Writes warnings to stdout in bright yellow.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColoredWarnings;

impl WarningSink for ColoredWarnings {
    fn warn(&mut self, message: &str) {
        println!("{}", message.bright_yellow());
    }
}
