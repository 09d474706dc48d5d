//! Stamp command implementation.

use chrono::{SecondsFormat, Utc};
use medf_canonical::Timestamp;
use medf_core::{stamp_document, MedfDocument};
use serde_json::json;

use super::read_input;

pub fn run(input: Option<String>, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let mut document: MedfDocument =
        serde_json::from_str(&text).map_err(|e| format!("Invalid document JSON: {}", e))?;

    // An empty snapshot is filled before hashing; the snapshot participates
    // in the document hash.
    if document.snapshot.as_ref().is_empty() {
        document.snapshot =
            Timestamp::new(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
    }

    let digests = stamp_document(&mut document)
        .map_err(|e| format!("Stamping failed: {}", e))?;

    if json_output {
        let summary = json!({
            "doc_hash": digests.doc_hash,
            "ipfs_cid": digests.ipfs_cid,
            "document": serde_json::to_value(&document)?,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", digests.canonical_json);
    }
    Ok(())
}
