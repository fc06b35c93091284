use serde::{Deserialize, Serialize};

/// Body of `POST /auth/google`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoogleCredential {
    pub credential: String,
}

/// Body of `POST /auth/google/mock`, the demo login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MockLogin {
    pub email: String,
    pub name: String,
}

/// Body of `POST /notes` and `PUT /notes/{id}`: a full replace of the
/// editable fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
    pub is_public: bool,
    pub is_anonymous: bool,
    /// Hosted image reference, `""` for none.
    pub image_url: String,
}

/// Query of `GET /public/notes`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PublicNotesQuery {
    pub page: u32,
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_payload_wire_shape() {
        let payload = NotePayload {
            title: "T".into(),
            content: "C".into(),
            is_public: true,
            is_anonymous: false,
            image_url: String::new(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "T",
                "content": "C",
                "isPublic": true,
                "isAnonymous": false,
                "imageUrl": ""
            })
        );
    }

    #[test]
    fn test_note_payload_rejects_unknown_fields() {
        let json = r#"{"title":"T","content":"C","isPublic":false,"isAnonymous":false,
            "imageUrl":"","authorId":"u1"}"#;
        assert!(serde_json::from_str::<NotePayload>(json).is_err());
    }

    #[test]
    fn test_mock_login_rejects_unknown_fields() {
        assert!(serde_json::from_str::<MockLogin>(r#"{"email":"a@b.c","name":"A"}"#).is_ok());
        assert!(
            serde_json::from_str::<MockLogin>(r#"{"email":"a@b.c","name":"A","admin":true}"#)
                .is_err()
        );
    }
}
