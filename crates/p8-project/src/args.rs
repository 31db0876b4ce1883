//! Command line argument tokenizer.
//!
//! Splits a flat argument list into a command word, an option map and
//! positional arguments:
//! - `--name=value` and `--name value` set a string option
//! - `--name` followed by nothing, an empty token or another flag sets a
//!   boolean option
//! - `-abc` sets `a` and `b` to true; `c` takes the next non-flag token if any
//! - the first bare word is the command, later bare words are positional
//!
//! No schema is applied: every option name and value is accepted as-is.

use std::collections::BTreeMap;
use std::fmt;

/// Value of a single parsed option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Option given with a value (`--env=prod`, `-f file`)
    Value(String),
    /// Option given as a bare flag (`--verbose`, `-v`)
    Flag,
}

impl OptionValue {
    /// The string value, if the option carried one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Value(v) => Some(v),
            Self::Flag => None,
        }
    }

    /// Whether the option was given as a bare flag
    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.write_str(v),
            Self::Flag => f.write_str("true"),
        }
    }
}

/// Result of tokenizing an argument list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    /// First bare word, empty when none was given
    pub command: String,
    /// Options by name; a repeated name keeps the last occurrence
    pub options: BTreeMap<String, OptionValue>,
    /// Bare words after the command, in order
    pub positional: Vec<String>,
}

impl ParsedArguments {
    /// Look up an option by name
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    /// First string value among the given option names (e.g. `["p", "pm"]`)
    pub fn value_of(&self, names: &[&str]) -> Option<&str> {
        names
            .iter()
            .find_map(|name| self.options.get(*name).and_then(OptionValue::as_str))
    }

    /// Whether any of the given option names is present, as a flag or with a value
    pub fn has(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.options.contains_key(*name))
    }

    /// Positional argument at `index`
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }
}

/// Tokenize `args` into a [`ParsedArguments`]
pub fn parse<S: AsRef<str>>(args: &[S]) -> ParsedArguments {
    let mut result = ParsedArguments::default();
    let mut command_set = false;
    let mut i = 0;

    while i < args.len() {
        let arg = args[i].as_ref();

        if let Some(long) = arg.strip_prefix("--") {
            match long.split_once('=') {
                Some((name, value)) => {
                    result
                        .options
                        .insert(name.to_string(), OptionValue::Value(value.to_string()));
                }
                None => {
                    let value = take_value(args, &mut i);
                    result.options.insert(long.to_string(), value);
                }
            }
        } else if let Some(cluster) = arg.strip_prefix('-') {
            let keys: Vec<char> = cluster.chars().collect();
            if let Some((last, rest)) = keys.split_last() {
                for key in rest {
                    result.options.insert(key.to_string(), OptionValue::Flag);
                }
                let value = take_value(args, &mut i);
                result.options.insert(last.to_string(), value);
            }
        } else if !command_set {
            result.command = arg.to_string();
            command_set = true;
        } else {
            result.positional.push(arg.to_string());
        }

        i += 1;
    }

    result
}

/// Consume the token after `*i` as a value unless it is missing, empty or flag-like
fn take_value<S: AsRef<str>>(args: &[S], i: &mut usize) -> OptionValue {
    match args.get(*i + 1).map(AsRef::as_ref) {
        Some(next) if !next.is_empty() && !next.starts_with('-') => {
            *i += 1;
            OptionValue::Value(next.to_string())
        }
        _ => OptionValue::Flag,
    }
}
