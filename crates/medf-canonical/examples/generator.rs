use medf_canonical::{canonical_string, sha256_hex, simulate_cid};
use serde_json::json;

fn main() {
    let document = json!({
        "medf_version": "0.2.1",
        "id": "example-doc",
        "snapshot": "2026-01-01T00:00:00.000Z",
        "issuer": "example-issuer",
        "blocks": [
            {
                "block_id": "introduction",
                "role": "body",
                "format": "markdown",
                "text": "See MEDF: other-doc#methods for details."
            }
        ]
    });

    let canonical = canonical_string(&document);
    println!("{}", canonical);
    println!("doc_hash: {}", sha256_hex(&canonical));
    println!("cid:      {}", simulate_cid(&canonical));
}
