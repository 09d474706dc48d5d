//! In-memory document registry.

use std::collections::{BTreeMap, HashMap};

use medf_canonical::extract_citations;
use medf_core::{
    stamp_document, verify_document_value, DocumentDigests, MedfDocument, VerificationReport,
};

use crate::error::StoreError;
use crate::records::{BlockRecord, DocumentRecord, ReferenceRecord};

/// Result of publishing or updating a document.
#[derive(Debug, Clone)]
pub struct PublishOutcome {
    /// Registry-assigned numeric id.
    pub id: u64,
    /// MeDF id of the stored document.
    pub medf_id: String,
    /// Freshly stamped document hash.
    pub doc_hash: String,
    /// Simulated content identifier.
    pub ipfs_cid: String,
    /// The stamped document as stored.
    pub document: MedfDocument,
}

/// In-memory registry of documents, blocks, and cross-document references.
///
/// Stamping happens on every write path; auditing re-verifies the stored
/// canonical bytes through the same engine. Unresolved references are
/// indexed by target MeDF id, so resolution re-attempts on publish cost one
/// map lookup.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    next_id: u64,
    documents: BTreeMap<u64, DocumentRecord>,
    by_medf_id: HashMap<String, u64>,
    blocks: BTreeMap<u64, Vec<BlockRecord>>,
    references: BTreeMap<u64, Vec<ReferenceRecord>>,
    unresolved_by_target: HashMap<String, Vec<(u64, usize)>>,
}

impl DocumentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps and stores a new document, extracting and resolving its
    /// references.
    ///
    /// Citations may point at any existing document, including the new one
    /// itself. References created earlier against this document's id are
    /// resolved now.
    pub fn publish(&mut self, mut document: MedfDocument) -> Result<PublishOutcome, StoreError> {
        let medf_id = document.id.as_ref().to_string();
        if self.by_medf_id.contains_key(&medf_id) {
            return Err(StoreError::DuplicateDocument(medf_id));
        }

        let digests = stamp_document(&mut document)?;
        let id = self.next_id;
        self.next_id += 1;

        self.documents
            .insert(id, build_document_record(id, &document, &digests));
        self.by_medf_id.insert(medf_id.clone(), id);
        self.blocks.insert(id, build_block_records(id, &document));

        self.insert_references(id, &document);
        self.resolve_pending(&medf_id, id);

        Ok(PublishOutcome {
            id,
            medf_id,
            doc_hash: digests.doc_hash,
            ipfs_cid: digests.ipfs_cid,
            document,
        })
    }

    /// Restamps and replaces a stored document, its blocks, and its
    /// references.
    pub fn update(&mut self, id: u64, mut document: MedfDocument) -> Result<PublishOutcome, StoreError> {
        let old_medf_id = match self.documents.get(&id) {
            Some(record) => record.medf_id.clone(),
            None => return Err(StoreError::NotFound(id)),
        };

        let medf_id = document.id.as_ref().to_string();
        if medf_id != old_medf_id && self.by_medf_id.contains_key(&medf_id) {
            return Err(StoreError::DuplicateDocument(medf_id));
        }

        let digests = stamp_document(&mut document)?;

        if medf_id != old_medf_id {
            self.by_medf_id.remove(&old_medf_id);
            // Incoming references to the old id lose their target.
            self.demote_references_to(&old_medf_id);
        }
        self.documents
            .insert(id, build_document_record(id, &document, &digests));
        self.by_medf_id.insert(medf_id.clone(), id);
        self.blocks.insert(id, build_block_records(id, &document));

        self.clear_references(id);
        self.insert_references(id, &document);
        // The document is now reachable under its (possibly new) id.
        self.resolve_pending(&medf_id, id);

        Ok(PublishOutcome {
            id,
            medf_id,
            doc_hash: digests.doc_hash,
            ipfs_cid: digests.ipfs_cid,
            document,
        })
    }

    /// Removes a document, its blocks, and its outgoing references.
    ///
    /// Incoming references lose their target and are demoted back to
    /// unresolved; they resolve again if a document with the same id is
    /// later published.
    pub fn remove(&mut self, id: u64) -> Result<(), StoreError> {
        let record = self.documents.remove(&id).ok_or(StoreError::NotFound(id))?;
        self.by_medf_id.remove(&record.medf_id);
        self.blocks.remove(&id);
        self.clear_references(id);
        self.demote_references_to(&record.medf_id);
        Ok(())
    }

    /// Re-verifies the stored canonical bytes of a document.
    ///
    /// Stored text that is not valid JSON is a hard failure (corruption at
    /// the storage edge); text that parses but does not match the document
    /// shape yields a failed verification report.
    pub fn audit(&self, id: u64) -> Result<VerificationReport, StoreError> {
        let record = self.documents.get(&id).ok_or(StoreError::NotFound(id))?;
        let value: serde_json::Value = serde_json::from_str(&record.medf_json)?;
        Ok(verify_document_value(&value))
    }

    /// Looks up a document record by registry id.
    pub fn document(&self, id: u64) -> Option<&DocumentRecord> {
        self.documents.get(&id)
    }

    /// Looks up a document record by MeDF id.
    pub fn document_by_medf_id(&self, medf_id: &str) -> Option<&DocumentRecord> {
        self.by_medf_id
            .get(medf_id)
            .and_then(|id| self.documents.get(id))
    }

    /// Blocks of a document, in sort order. Empty for unknown ids.
    pub fn blocks(&self, id: u64) -> &[BlockRecord] {
        self.blocks.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Outgoing references of a document. Empty for unknown ids.
    pub fn outgoing_references(&self, id: u64) -> &[ReferenceRecord] {
        self.references.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All references citing the given MeDF id, resolved or not.
    pub fn incoming_references(&self, medf_id: &str) -> Vec<&ReferenceRecord> {
        self.references
            .values()
            .flatten()
            .filter(|reference| reference.target_medf_id == medf_id)
            .collect()
    }

    /// Iterates stored document records in registry-id order.
    pub fn documents(&self) -> impl Iterator<Item = &DocumentRecord> {
        self.documents.values()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the registry holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn insert_references(&mut self, source_doc_id: u64, document: &MedfDocument) {
        let mut refs = Vec::new();
        for block in &document.blocks {
            for citation in extract_citations(&block.text) {
                let target_doc_id = self.by_medf_id.get(&citation.document_id).copied();
                refs.push(ReferenceRecord {
                    source_doc_id,
                    source_block_id: Some(block.block_id.as_ref().to_string()),
                    target_medf_id: citation.document_id,
                    target_block_id: citation.block_id,
                    citation: citation.full,
                    resolved: target_doc_id.is_some(),
                    target_doc_id,
                });
            }
        }

        for (idx, reference) in refs.iter().enumerate() {
            if !reference.resolved {
                self.unresolved_by_target
                    .entry(reference.target_medf_id.clone())
                    .or_default()
                    .push((source_doc_id, idx));
            }
        }
        if !refs.is_empty() {
            self.references.insert(source_doc_id, refs);
        }
    }

    fn clear_references(&mut self, source_doc_id: u64) {
        if let Some(refs) = self.references.remove(&source_doc_id) {
            for reference in refs {
                if !reference.resolved {
                    if let Some(pending) =
                        self.unresolved_by_target.get_mut(&reference.target_medf_id)
                    {
                        pending.retain(|(src, _)| *src != source_doc_id);
                        if pending.is_empty() {
                            self.unresolved_by_target.remove(&reference.target_medf_id);
                        }
                    }
                }
            }
        }
    }

    /// Demotes every resolved reference citing `target_medf_id` back to
    /// unresolved and re-indexes it, after its target disappears.
    fn demote_references_to(&mut self, target_medf_id: &str) {
        for (source_id, refs) in self.references.iter_mut() {
            for (idx, reference) in refs.iter_mut().enumerate() {
                if reference.resolved && reference.target_medf_id == target_medf_id {
                    reference.resolved = false;
                    reference.target_doc_id = None;
                    self.unresolved_by_target
                        .entry(reference.target_medf_id.clone())
                        .or_default()
                        .push((*source_id, idx));
                }
            }
        }
    }

    fn resolve_pending(&mut self, medf_id: &str, target_doc_id: u64) {
        if let Some(pending) = self.unresolved_by_target.remove(medf_id) {
            for (source_id, idx) in pending {
                if let Some(reference) = self
                    .references
                    .get_mut(&source_id)
                    .and_then(|refs| refs.get_mut(idx))
                {
                    reference.resolved = true;
                    reference.target_doc_id = Some(target_doc_id);
                }
            }
        }
    }
}

fn build_document_record(
    id: u64,
    document: &MedfDocument,
    digests: &DocumentDigests,
) -> DocumentRecord {
    DocumentRecord {
        id,
        medf_id: document.id.as_ref().to_string(),
        medf_version: document.medf_version.clone(),
        title: derive_title(document),
        issuer: document.issuer.clone(),
        document_type: document.document_type.clone(),
        snapshot: document.snapshot.as_ref().to_string(),
        medf_json: digests.canonical_json.clone(),
        doc_hash: digests.doc_hash.clone(),
        ipfs_cid: digests.ipfs_cid.clone(),
        block_count: document.blocks.len(),
    }
}

fn build_block_records(id: u64, document: &MedfDocument) -> Vec<BlockRecord> {
    document
        .blocks
        .iter()
        .enumerate()
        .map(|(sort_order, block)| BlockRecord {
            document_id: id,
            block_id: block.block_id.as_ref().to_string(),
            role: block.role.clone(),
            format: block.format.clone(),
            text_content: block.text.clone(),
            block_hash: block.block_hash.clone(),
            sort_order,
        })
        .collect()
}

/// First line of the first block, stripped of leading `#` markers, falling
/// back to the document id.
fn derive_title(document: &MedfDocument) -> String {
    document
        .blocks
        .first()
        .and_then(|block| block.text.lines().next())
        .map(|line| line.trim_start_matches('#').trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| document.id.as_ref().to_string())
}
