//! The interactive console menu.
//!
//! Reads one line at a time from any `BufRead` and writes to any `Write`, so
//! the whole session can be driven from memory in tests. End of input leaves
//! the menu from wherever it is.

use std::io::{self, BufRead, Write};

use enclose_core::{
    Config, check,
    collections::{self, Command, ListPushPop, PushPop, QueuePushPop, StackPushPop, Step},
    render,
    text::reverse,
};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Exit,
    ExamineList,
    ExamineQueue,
    ExamineStack,
    CheckParentheses,
    ReverseText,
}

impl MenuOption {
    const ALL: [Self; 6] = [
        Self::Exit,
        Self::ExamineList,
        Self::ExamineQueue,
        Self::ExamineStack,
        Self::CheckParentheses,
        Self::ReverseText,
    ];

    const fn name(self) -> &'static str {
        match self {
            Self::Exit => "Exit",
            Self::ExamineList => "ExamineList",
            Self::ExamineQueue => "ExamineQueue",
            Self::ExamineStack => "ExamineStack",
            Self::CheckParentheses => "CheckParentheses",
            Self::ReverseText => "ReverseText",
        }
    }

    const fn description(self) -> &'static str {
        match self {
            Self::Exit => "Exit the application.",
            Self::ExamineList => "Examine the List type.",
            Self::ExamineQueue => "Examine the Queue type.",
            Self::ExamineStack => "Examine the Stack type.",
            Self::CheckParentheses => "Check a string for matching enclosers.",
            Self::ReverseText => "Reverse a piece of text.",
        }
    }

    /// Parse a choice given by number or by name.
    fn parse(choice: &str) -> Option<Self> {
        if let Ok(index) = choice.parse::<usize>() {
            return Self::ALL.get(index).copied();
        }
        Self::ALL.into_iter().find(|option| option.name() == choice)
    }
}

/// Where to go after an action finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Menu,
    Quit,
}

/// An interactive menu session.
pub struct Menu<R, W> {
    input: R,
    output: W,
    config: Config,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub const fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Run until the user picks `Exit` or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.display_menu()?;

            let option = loop {
                let Some(line) = self.read_line()? else {
                    return Ok(());
                };
                let choice = line.trim();
                if choice.is_empty() {
                    writeln!(self.output, "Please enter some input!")?;
                    continue;
                }
                match MenuOption::parse(choice) {
                    Some(option) => break option,
                    None => writeln!(self.output, "'{choice}' is not a valid menu option.")?,
                }
            };
            info!(option = option.name(), "menu choice");

            let flow = match option {
                MenuOption::Exit => Flow::Quit,
                MenuOption::ExamineList => self.examine(&mut ListPushPop::new())?,
                MenuOption::ExamineQueue => self.examine(&mut QueuePushPop::new())?,
                MenuOption::ExamineStack => self.examine(&mut StackPushPop::new())?,
                MenuOption::CheckParentheses => self.check_parentheses()?,
                MenuOption::ReverseText => self.reverse_text()?,
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn display_menu(&mut self) -> io::Result<()> {
        let width = MenuOption::ALL
            .iter()
            .map(|option| option.name().len())
            .max()
            .unwrap_or(0);

        writeln!(self.output, "Please choose one of the options below.")?;
        for (index, option) in MenuOption::ALL.iter().enumerate() {
            writeln!(
                self.output,
                "{index} : {:<width$} : {}",
                option.name(),
                option.description()
            )?;
        }
        Ok(())
    }

    /// Drive a collection with `+value`, `-value` and `0` lines.
    fn examine<C: PushPop<String>>(&mut self, collection: &mut C) -> io::Result<Flow> {
        let name = collection.name();
        let pop_help = if name == "List" {
            format!("To remove 'value' from the {name}, type '-value'.")
        } else {
            format!("To pop an entry from the {name}, type '-'.")
        };
        writeln!(
            self.output,
            "Examine a {name} of strings.\n\
             To add 'value' to the {name}, type '+value'.\n\
             {pop_help}\n\
             To exit to the main menu, type '0'.\n"
        )?;

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Quit);
            };
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            match collections::apply(collection, command) {
                Step::Continue { feedback, status } => {
                    writeln!(self.output, "{feedback} {status}")?;
                }
                Step::Exit => {
                    writeln!(self.output, "Press enter to return to the main menu.")?;
                    return Ok(match self.read_line()? {
                        Some(_) => Flow::Menu,
                        None => Flow::Quit,
                    });
                }
            }
        }
    }

    fn check_parentheses(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.output, "Examine if the enclosers in a string are correct.")?;
            writeln!(self.output, "Please provide a string to check:")?;
            let Some(text) = self.read_text()? else {
                return Ok(Flow::Quit);
            };

            let balance = check(&text);
            debug!(?balance, "checked menu input");
            if balance.is_balanced() {
                writeln!(self.output, "The given text has correctly matched enclosers.")?;
            } else {
                writeln!(self.output, "{}", render(&text, &balance, &self.config))?;
                writeln!(
                    self.output,
                    "The given text does not have correctly matched enclosers."
                )?;
            }

            if let Some(flow) = self.ask_again()? {
                return Ok(flow);
            }
        }
    }

    fn reverse_text(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.output, "Reverse text with help of a Stack.")?;
            writeln!(self.output, "Please enter some text to reverse:")?;
            let Some(text) = self.read_text()? else {
                return Ok(Flow::Quit);
            };

            writeln!(self.output, "The reversed text: {}", reverse(&text))?;
            writeln!(self.output)?;

            if let Some(flow) = self.ask_again()? {
                return Ok(flow);
            }
        }
    }

    /// Ask whether to go another round. `None` means yes.
    fn ask_again(&mut self) -> io::Result<Option<Flow>> {
        loop {
            write!(
                self.output,
                "Would you like to input another string [y/n]? "
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(Some(Flow::Quit));
            };
            if line.trim().is_empty() {
                writeln!(self.output, "Please use non-empty input.")?;
                continue;
            }

            match line.chars().next().map(|c| c.to_ascii_lowercase()) {
                Some('n') => return Ok(Some(Flow::Menu)),
                Some('y') => return Ok(None),
                _ => writeln!(
                    self.output,
                    "Please enter an input starting with 'y' or 'n'."
                )?,
            }
        }
    }

    /// Read a line that is not blank, re-prompting until one arrives.
    fn read_text(&mut self) -> io::Result<Option<String>> {
        loop {
            match self.read_line()? {
                None => return Ok(None),
                Some(line) if line.trim().is_empty() => {
                    writeln!(self.output, "Please enter non-empty text:")?;
                }
                Some(line) => return Ok(Some(line)),
            }
        }
    }

    /// Read one line without its line ending. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
