//! The flat record written for each exported note.

use serde::Serialize;

use crate::gitlab::{MergeRequestId, MergeRequestSummary, Note};

/// One exported note joined with its merge request's fields.
///
/// Serialises with camelCase keys. Absent author, body, and URL become empty
/// strings; absent merge request fields serialise as `null`; an absent note
/// identifier is omitted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    /// Identifier of the merge request the note belongs to.
    pub merge_request: MergeRequestId,
    /// Merge request title.
    pub title: Option<String>,
    /// Approver names joined with `/`, as reported on the note's page.
    pub approved_by: String,
    /// Merge request creation timestamp.
    pub merge_request_created_at: Option<String>,
    /// Merge request merge timestamp.
    pub merge_request_merged_at: Option<String>,
    /// Note identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Note author display name.
    pub author: String,
    /// Note body.
    pub body: String,
    /// Note web URL.
    pub url: String,
}

impl OutputRecord {
    /// Builds a record from a note and the fields of its merge request.
    #[must_use]
    pub fn new(
        merge_request: &MergeRequestId,
        summary: &MergeRequestSummary,
        approved_by: &str,
        note: Note,
    ) -> Self {
        Self {
            merge_request: merge_request.clone(),
            title: summary.title.clone(),
            approved_by: approved_by.to_owned(),
            merge_request_created_at: summary.created_at.clone(),
            merge_request_merged_at: summary.merged_at.clone(),
            id: note.id,
            author: note.author.unwrap_or_default(),
            body: note.body.unwrap_or_default(),
            url: note.url.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_empty_strings_for_missing_note_fields() {
        let record = OutputRecord::new(
            &MergeRequestId::new("gid://gitlab/MergeRequest/1"),
            &MergeRequestSummary::default(),
            "",
            Note {
                id: Some("gid://gitlab/Note/5".to_owned()),
                ..Note::default()
            },
        );

        assert_eq!(record.author, "");
        assert_eq!(record.body, "");
        assert_eq!(record.url, "");
    }

    #[test]
    fn serialises_with_camel_case_keys_in_field_order() {
        let record = OutputRecord::new(
            &MergeRequestId::new("gid://gitlab/MergeRequest/1"),
            &MergeRequestSummary {
                title: Some("Add cache".to_owned()),
                created_at: Some("2024-05-01T09:00:00Z".to_owned()),
                merged_at: None,
            },
            "Alice/Bob",
            Note {
                id: Some("gid://gitlab/Note/5".to_owned()),
                author: Some("Carol".to_owned()),
                body: Some("Why?".to_owned()),
                url: Some("https://gitlab.com/g/p/-/merge_requests/1#note_5".to_owned()),
                system: false,
            },
        );

        let line = serde_json::to_string(&record).expect("record should serialise");
        assert_eq!(
            line,
            concat!(
                r#"{"mergeRequest":"gid://gitlab/MergeRequest/1","title":"Add cache","#,
                r#""approvedBy":"Alice/Bob","mergeRequestCreatedAt":"2024-05-01T09:00:00Z","#,
                r#""mergeRequestMergedAt":null,"id":"gid://gitlab/Note/5","author":"Carol","#,
                r#""body":"Why?","url":"https://gitlab.com/g/p/-/merge_requests/1#note_5"}"#
            )
        );
    }

    #[test]
    fn omits_missing_note_id() {
        let record = OutputRecord::new(
            &MergeRequestId::new("mr"),
            &MergeRequestSummary::default(),
            "",
            Note::default(),
        );

        let value = serde_json::to_value(&record).expect("record should serialise");
        assert!(value.get("id").is_none());
        assert_eq!(value.get("title"), Some(&serde_json::Value::Null));
    }
}
