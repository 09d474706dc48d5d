//! Canonicalize command implementation.

use medf_canonical::canonical_string;
use serde_json::Value;

use super::read_input;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let json_str = read_input(input)?;

    let value: Value =
        serde_json::from_str(&json_str).map_err(|e| format!("Invalid JSON: {}", e))?;

    println!("{}", canonical_string(&value));
    Ok(())
}
