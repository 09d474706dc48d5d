//! Output formatting utilities.

use medf_canonical::Citation;
use medf_core::VerificationReport;

/// Prints a verification report as a table.
pub fn print_report(report: &VerificationReport) {
    if let Some(error) = &report.error {
        println!("malformed document: {}", error);
        println!("OVERALL: INVALID");
        return;
    }

    println!("{:<28} {:<8} {}", "BLOCK_ID", "CLAIMED", "VERDICT");
    println!("{}", "-".repeat(48));
    for check in &report.block_results {
        println!(
            "{:<28} {:<8} {}",
            truncate(&check.block_id, 28),
            claim_label(check.expected.is_some()),
            verdict_label(check.valid)
        );
    }
    println!(
        "{:<28} {:<8} {}",
        "(document)",
        claim_label(report.doc_hash_result.expected.is_some()),
        verdict_label(report.doc_hash_result.valid)
    );
    println!("OVERALL: {}", if report.valid { "VALID" } else { "INVALID" });
}

/// Prints extracted citations as a table.
pub fn print_citations(citations: &[Citation]) {
    println!("{:<32} {:<24} {}", "DOCUMENT", "BLOCK", "MATCH");
    println!("{}", "-".repeat(80));
    for citation in citations {
        println!(
            "{:<32} {:<24} {}",
            truncate(&citation.document_id, 32),
            citation.block_id.as_deref().unwrap_or("-"),
            citation.full
        );
    }
}

fn claim_label(claimed: bool) -> &'static str {
    if claimed {
        "yes"
    } else {
        "none"
    }
}

fn verdict_label(valid: bool) -> &'static str {
    if valid {
        "ok"
    } else {
        "MISMATCH"
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}
