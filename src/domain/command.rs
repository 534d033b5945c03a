//! External command descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A program plus its arguments, written in config as a string array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CommandSpec {
    argv: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { argv: argv.into_iter().map(Into::into).collect() }
    }

    /// Program name, or an empty string for an empty command.
    pub fn program(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or("")
    }

    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.program().trim().is_empty()
    }
}

impl From<Vec<String>> for CommandSpec {
    fn from(argv: Vec<String>) -> Self {
        Self { argv }
    }
}

impl From<CommandSpec> for Vec<String> {
    fn from(spec: CommandSpec) -> Self {
        spec.argv
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv.join(" "))
    }
}
