//! Cite command implementation.

use medf_canonical::extract_citations;

use super::read_input;
use crate::output;

pub fn run(input: Option<String>, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let citations = extract_citations(&text);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&citations)?);
    } else {
        output::print_citations(&citations);
    }
    Ok(())
}
