//! The menu model: the lines the program prints and the choices it accepts.

/// The menu block, printed verbatim before every choice read.
pub const MENU: [&str; 7] = [
    "Menu:",
    "1. Add value",
    "2. Remove last value",
    "3. Print size and capacity",
    "4. Print vector",
    "5. Exit",
    "Enter choice:",
];

pub const PROMPT_VALUE: &str = "Enter value to add:";
pub const VALUE_ADDED: &str = "Value added.";
pub const LAST_VALUE_REMOVED: &str = "Last value removed.";
pub const VECTOR_IS_EMPTY: &str = "Vector is empty.";
pub const VECTOR_CONTENTS: &str = "Vector contents:";
pub const EXITING: &str = "Exiting...";
pub const INVALID_CHOICE: &str = "Invalid choice.";
pub const INVALID_VALUE: &str = "Invalid value.";

/// One of the five menu operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Add,
    RemoveLast,
    PrintStats,
    PrintVector,
    Exit,
}

impl Choice {
    /// Parses a choice from one input line.
    ///
    /// Surrounding whitespace is ignored; beyond that only the exact digits
    /// `1` through `5` are accepted. Everything else is the
    /// `Invalid choice.` path, including multi-digit input like `44`.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::RemoveLast),
            "3" => Some(Self::PrintStats),
            "4" => Some(Self::PrintVector),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}
