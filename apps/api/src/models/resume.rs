use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::resume::ordered_set::OrderedSet;
use crate::resume::parser::ParsedFields;

/// A parsed resume upload. Built once per upload and read-only afterwards,
/// so fields are only reachable through accessors.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    id: Uuid,
    filename: String,
    content_type: String,
    raw_text: String,
    #[serde(flatten)]
    fields: ParsedFields,
    uploaded_at: DateTime<Utc>,
}

impl ResumeRecord {
    pub(crate) fn new(
        filename: String,
        content_type: String,
        raw_text: String,
        fields: ParsedFields,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename,
            content_type,
            raw_text,
            fields,
            uploaded_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.fields.email.as_deref()
    }

    pub fn qualifications(&self) -> &OrderedSet<String> {
        &self.fields.qualifications
    }

    pub fn skills(&self) -> &OrderedSet<String> {
        &self.fields.skills
    }

    pub fn total_years(&self) -> Option<&str> {
        self.fields.total_years.as_deref()
    }
}
