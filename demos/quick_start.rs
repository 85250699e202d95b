//! Building, inspecting and capturing outcomes.

use outcome_rail::prelude::*;
use std::fmt;

#[derive(Debug)]
enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, raw: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(key) => write!(f, "missing key `{key}`"),
            Self::Invalid { key, raw } => write!(f, "invalid value `{raw}` for `{key}`"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl_failure!(error: ConfigError);

fn lookup(key: &'static str) -> Outcome<&'static str, ConfigError> {
    match key {
        "port" => ok("8080"),
        "workers" => ok("many"),
        _ => err(ConfigError::Missing(key)),
    }
}

fn numeric(key: &'static str) -> Outcome<u32, ConfigError> {
    lookup(key).and_then(|raw| match raw.parse::<u32>() {
        Ok(value) => ok(value),
        Err(_) => err(ConfigError::Invalid { key, raw: raw.to_string() }),
    })
}

fn main() {
    println!("port    = {}", numeric("port").unwrap());
    println!("workers = {}", numeric("workers").unwrap_or(4));

    if let Some(error) = numeric("timeout").error() {
        println!("timeout: {error}");
    }

    // A raising call becomes a failure value instead of unwinding through main.
    let captured = capture_call!(|key: &'static str| numeric(key).unwrap(), "workers");
    match captured.error() {
        Some(panic) => match panic.downcast_ref::<ConfigError>() {
            Some(error) => println!("captured: {error}"),
            None => println!("captured: {panic}"),
        },
        None => println!("no failure"),
    }
}
