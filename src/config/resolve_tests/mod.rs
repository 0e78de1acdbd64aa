//! Tests for the resolution pipeline.

use std::collections::VecDeque;

use super::ConfigError;
use super::cli::Cli;
use super::defaults::Defaults;
use super::options::{Key, Options, Value};
use super::prompt::Prompter;
use super::resolve::Resolver;

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["troop-client"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Defaults with a recognizable public server
fn test_defaults() -> Defaults {
    Defaults::default().with_public_server("public.example.org", 4242)
}

fn resolver() -> Resolver {
    Resolver::new(test_defaults())
}

/// A prompt seen by [`ScriptedPrompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct Asked {
    field: Key,
    default: Option<String>,
    secret: bool,
}

/// Answers prompts from a fixed script and records every prompt.
///
/// An empty scripted answer takes the offered default.
#[derive(Debug, Default)]
struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<Asked>,
}

impl ScriptedPrompter {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(ToString::to_string).collect(),
            asked: Vec::new(),
        }
    }

    fn asked_fields(&self) -> Vec<Key> {
        self.asked.iter().map(|a| a.field).collect()
    }

    fn next_answer(&mut self) -> String {
        self.answers.pop_front().expect("prompted more often than scripted")
    }
}

impl Prompter for ScriptedPrompter {
    fn read_text(
        &mut self,
        field: Key,
        _label: &str,
        default: Option<&str>,
    ) -> Result<String, ConfigError> {
        self.asked.push(Asked {
            field,
            default: default.map(str::to_string),
            secret: false,
        });
        let answer = self.next_answer();
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn read_secret(&mut self, field: Key, _label: &str) -> Result<String, ConfigError> {
        self.asked.push(Asked {
            field,
            default: None,
            secret: true,
        });
        Ok(self.next_answer())
    }
}

fn text(options: &Options, key: Key) -> Option<&str> {
    match options.get(key) {
        Some(Value::Text(s)) => Some(s.as_str()),
        _ => None,
    }
}

mod loading_tests;
