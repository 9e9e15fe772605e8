use colored::Colorize;
use journo::api::{CmdMessage, MessageLevel};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// Raw template text, exactly as it would be written to disk.
pub(super) fn print_content(content: &str) {
    print!("{}", content);
}
