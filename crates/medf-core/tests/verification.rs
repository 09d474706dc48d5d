use std::collections::BTreeMap;

use medf_canonical::{BlockId, Digest, DigestAlg, MedfId, Timestamp};
use medf_core::{
    compute_block_hash, compute_doc_hash, stamp_document, verify_document,
    verify_document_value, MedfBlock, MedfDocument, MedfSignature, MEDF_VERSION,
};
use serde_json::json;

fn make_document() -> MedfDocument {
    MedfDocument {
        medf_version: MEDF_VERSION.to_string(),
        id: MedfId::new("paper-2026-example".to_string()),
        snapshot: Timestamp::new("2026-08-06T00:00:00.000Z".to_string()),
        issuer: "example-issuer".to_string(),
        document_type: Some("paper".to_string()),
        blocks: vec![
            MedfBlock::new(
                BlockId::new("introduction".to_string()),
                "body",
                "markdown",
                "# Intro\n\nSee MEDF: other-doc#methods for details.",
            ),
            MedfBlock::new(
                BlockId::new("methodology".to_string()),
                "body",
                "markdown",
                "We measured things.",
            ),
        ],
        doc_hash: None,
        signature: None,
        index: None,
        extra: BTreeMap::new(),
    }
}

fn is_hex64(s: &str) -> bool {
    s.len() == 64 && s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
}

#[test]
fn stamped_document_verifies() {
    let mut document = make_document();
    let digests = stamp_document(&mut document).unwrap();

    let report = verify_document(&document);
    assert!(report.valid);
    assert_eq!(report.block_results.len(), 2);
    for check in &report.block_results {
        assert!(check.valid);
        assert_eq!(check.expected.as_deref(), Some(check.computed.as_str()));
    }
    assert!(report.doc_hash_result.valid);
    assert_eq!(
        report.doc_hash_result.expected.as_deref(),
        Some(digests.doc_hash.as_str())
    );
    assert!(report.error.is_none());
}

#[test]
fn stamped_hashes_are_lowercase_hex() {
    let mut document = make_document();
    let digests = stamp_document(&mut document).unwrap();

    assert!(is_hex64(&digests.doc_hash));
    for block in &document.blocks {
        assert!(is_hex64(block.block_hash.as_deref().unwrap()));
    }
    assert!(Digest::new(DigestAlg::Sha256, digests.doc_hash.clone()).is_ok());
}

#[test]
fn tampering_with_block_text_is_detected() {
    let mut document = make_document();
    stamp_document(&mut document).unwrap();

    document.blocks[1].text.push_str(" Actually we did not.");

    let report = verify_document(&document);
    assert!(!report.valid);
    assert!(report.block_results[0].valid);
    assert!(!report.block_results[1].valid);
    // The text also feeds the document hash, so the document claim breaks too.
    assert!(!report.doc_hash_result.valid);
}

#[test]
fn tampering_with_metadata_is_detected() {
    let mut document = make_document();
    stamp_document(&mut document).unwrap();

    document.issuer = "someone-else".to_string();

    let report = verify_document(&document);
    assert!(!report.valid);
    assert!(report.block_results.iter().all(|r| r.valid));
    assert!(!report.doc_hash_result.valid);
}

#[test]
fn unstamped_document_is_trivially_valid() {
    let document = make_document();
    let report = verify_document(&document);
    assert!(report.valid);
    assert!(report.block_results.iter().all(|r| r.expected.is_none() && r.valid));
    assert_eq!(report.doc_hash_result.expected, None);
    assert!(report.doc_hash_result.valid);
}

#[test]
fn wrong_doc_hash_claim_alone_is_detected() {
    let mut document = make_document();
    document.doc_hash = Some(
        Digest::new(
            DigestAlg::Sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        )
        .unwrap(),
    );

    let report = verify_document(&document);
    assert!(!report.valid);
    assert!(report.block_results.iter().all(|r| r.valid));
    assert!(!report.doc_hash_result.valid);
}

#[test]
fn block_hash_is_deterministic_and_content_sensitive() {
    let base = make_document().blocks[0].clone();
    let baseline = compute_block_hash(&base);
    assert!(is_hex64(&baseline));
    assert_eq!(compute_block_hash(&base), baseline);

    let mut changed = base.clone();
    changed.block_id = BlockId::new("intro".to_string());
    assert_ne!(compute_block_hash(&changed), baseline);

    let mut changed = base.clone();
    changed.role = "abstract".to_string();
    assert_ne!(compute_block_hash(&changed), baseline);

    let mut changed = base.clone();
    changed.format = "plain".to_string();
    assert_ne!(compute_block_hash(&changed), baseline);

    let mut changed = base.clone();
    changed.text.push('!');
    assert_ne!(compute_block_hash(&changed), baseline);
}

#[test]
fn block_hash_ignores_the_stored_block_hash() {
    let mut block = make_document().blocks[0].clone();
    let before = compute_block_hash(&block);
    block.block_hash = Some(before.clone());
    assert_eq!(compute_block_hash(&block), before);
}

#[test]
fn doc_hash_excludes_exactly_the_derived_fields() {
    let mut document = make_document();
    let baseline = compute_doc_hash(&document).unwrap();

    document.doc_hash = Some(
        Digest::new(
            DigestAlg::Sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        )
        .unwrap(),
    );
    document.signature = Some(MedfSignature {
        algorithm: "ed25519".to_string(),
        value: "c2ln".to_string(),
        public_key: "cGs".to_string(),
        signed_at: Timestamp::new("2026-08-06T00:00:00Z".to_string()),
        signer: None,
    });
    document.index = Some(BTreeMap::from([(
        "introduction".to_string(),
        json!({"offset": 0}),
    )]));

    assert_eq!(compute_doc_hash(&document).unwrap(), baseline);
}

#[test]
fn doc_hash_includes_unknown_top_level_fields() {
    let mut document = make_document();
    let baseline = compute_doc_hash(&document).unwrap();

    document
        .extra
        .insert("review_round".to_string(), json!(2));

    assert_ne!(compute_doc_hash(&document).unwrap(), baseline);
}

#[test]
fn typed_and_untyped_documents_hash_identically() {
    let mut document = make_document();
    stamp_document(&mut document).unwrap();

    let value = serde_json::to_value(&document).unwrap();
    assert_eq!(
        compute_doc_hash(&document).unwrap(),
        compute_doc_hash(&value).unwrap()
    );
}

#[test]
fn verification_does_not_mutate_the_document() {
    let mut document = make_document();
    stamp_document(&mut document).unwrap();

    let before = document.clone();
    let _ = verify_document(&document);
    assert_eq!(document, before);
}

#[test]
fn malformed_value_reports_failed_verification() {
    let report = verify_document_value(&json!({"id": 42}));
    assert!(!report.valid);
    assert!(report.error.is_some());
    assert!(report.block_results.is_empty());
    assert!(!report.doc_hash_result.valid);
}

#[test]
fn stored_canonical_form_verifies_on_the_read_path() {
    let mut document = make_document();
    let digests = stamp_document(&mut document).unwrap();

    // The stored `medf_json` text parses and audits cleanly.
    let stored: serde_json::Value = serde_json::from_str(&digests.canonical_json).unwrap();
    let report = verify_document_value(&stored);
    assert!(report.valid);
    assert_eq!(
        report.doc_hash_result.expected.as_deref(),
        Some(digests.doc_hash.as_str())
    );
}

#[test]
fn stamp_digests_are_internally_consistent() {
    let mut document = make_document();
    let digests = stamp_document(&mut document).unwrap();

    assert_eq!(
        document.doc_hash.as_ref().map(|d| d.value.as_str()),
        Some(digests.doc_hash.as_str())
    );
    assert!(digests.ipfs_cid.starts_with("bafybeig"));
    assert_eq!(digests.ipfs_cid.len(), "bafybeig".len() + 52);
    assert!(!digests.canonical_json.contains('\n'));

    // Re-stamping identical content is a fixed point.
    let mut again = document.clone();
    let second = stamp_document(&mut again).unwrap();
    assert_eq!(second.doc_hash, digests.doc_hash);
    assert_eq!(second.canonical_json, digests.canonical_json);
    assert_eq!(second.ipfs_cid, digests.ipfs_cid);
}
