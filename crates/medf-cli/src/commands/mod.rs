//! CLI command implementations.

use std::io::{self, Read};

pub mod canonicalize;
pub mod cite;
pub mod stamp;
pub mod verify;

/// Reads command input from a file path or stdin.
pub(crate) fn read_input(input: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(path) = input {
        Ok(std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?)
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}
