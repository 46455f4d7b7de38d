/// Document keys are opaque strings assigned on create.
pub type DocId = String;

/// Generate a fresh document key.
///
/// UUID v7 keeps keys roughly time-ordered, which matches the natural
/// ordering of the stores.
pub fn new_doc_id() -> DocId {
    uuid::Uuid::now_v7().to_string()
}
