//! Shared fixtures.

use serde_json::{json, Value};

pub const PROCESS_NUMBER: &str = "0001253-24.2016.5.10.0013";

/// A court document record as served by the listing endpoint.
pub struct Document {
    pub id: u64,
    pub publication: &'static str,
    pub mime: &'static str,
}

impl Document {
    pub fn new(id: u64, publication: &'static str, mime: &'static str) -> Self {
        Self {
            id,
            publication,
            mime,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "peca": self.id,
            "dataPublicacao": self.publication,
            "formatoOriginal": self.mime,
        })
    }
}

/// A process with its documents, in order.
pub fn process(documents: &[Document]) -> Value {
    json!({
        "numProcCnj": PROCESS_NUMBER,
        "pecas": documents.iter().map(Document::to_json).collect::<Vec<_>>(),
    })
}
