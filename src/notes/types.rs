use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteTag {
    Todo,
    Work,
    Personal,
    Meeting,
    Shopping,
}

impl NoteTag {
    pub const ALL: [NoteTag; 5] = [
        Self::Todo,
        Self::Work,
        Self::Personal,
        Self::Meeting,
        Self::Shopping,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Meeting => "Meeting",
            Self::Shopping => "Shopping",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().find(|tag| tag.as_str() == raw).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub tag: NoteTag,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchNotesResponse {
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub total_pages: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteFormValues {
    pub title: String,
    pub content: String,
    pub tag: NoteTag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_tag_serializes_to_its_wire_name() {
        let encoded = serde_json::to_string(&NoteTag::Shopping).expect("tag should encode");
        assert_eq!(encoded, "\"Shopping\"");
    }

    #[test]
    fn note_tag_rejects_values_outside_the_set() {
        assert!(serde_json::from_str::<NoteTag>("\"Groceries\"").is_err());
        assert!(serde_json::from_str::<NoteTag>("\"todo\"").is_err());
    }

    #[test]
    fn parse_maps_labels_back_to_tags() {
        assert_eq!(NoteTag::parse("Meeting"), Some(NoteTag::Meeting));
        assert_eq!(NoteTag::parse("meeting"), None);
        assert_eq!(NoteTag::parse(""), None);
    }

    #[test]
    fn decodes_note_list_wire_format() {
        let body = r#"{
            "notes": [
                {
                    "id": "n-1",
                    "title": "Buy milk",
                    "content": "",
                    "tag": "Shopping",
                    "createdAt": "2026-01-02T03:04:05Z",
                    "updatedAt": "2026-01-02T03:04:05Z"
                }
            ],
            "totalPages": 3
        }"#;

        let response: FetchNotesResponse =
            serde_json::from_str(body).expect("response should decode");
        assert_eq!(response.total_pages, 3);
        assert_eq!(response.notes.len(), 1);
        assert_eq!(response.notes[0].title, "Buy milk");
        assert_eq!(response.notes[0].tag, NoteTag::Shopping);
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let response: FetchNotesResponse =
            serde_json::from_str("{}").expect("empty response should decode");
        assert!(response.notes.is_empty());
        assert_eq!(response.total_pages, 0);
    }

    #[test]
    fn form_values_encode_the_create_payload() {
        let values = NoteFormValues {
            title: "Buy milk".to_string(),
            content: String::new(),
            tag: NoteTag::Shopping,
        };
        let encoded = serde_json::to_value(&values).expect("values should encode");
        assert_eq!(
            encoded,
            serde_json::json!({"title": "Buy milk", "content": "", "tag": "Shopping"})
        );
    }
}
