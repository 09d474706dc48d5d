//! Verify command implementation.

use medf_core::verify_document_value;
use serde_json::Value;

use super::read_input;
use crate::output;

pub fn run(
    input: Option<String>,
    strict: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let value: Value = serde_json::from_str(&text).map_err(|e| format!("Invalid JSON: {}", e))?;

    let report = verify_document_value(&value);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_report(&report);
    }

    if strict && !report.valid {
        std::process::exit(1);
    }
    Ok(())
}
