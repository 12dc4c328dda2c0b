use serde::{Deserialize, Serialize};

/// One row of the dashboard table.
///
/// The remote endpoint serves comments; the wire names (`postId`, `name`,
/// `email`) are mapped onto the names the table works with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    #[serde(rename = "postId")]
    pub group_id: i64,
    pub id: i64,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "email")]
    pub contact_email: String,
    pub body: String,
}

impl Record {
    pub fn new(
        group_id: i64,
        id: i64,
        display_name: impl Into<String>,
        contact_email: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            group_id,
            id,
            display_name: display_name.into(),
            contact_email: contact_email.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_endpoint_shape() {
        let json = r#"{
            "postId": 1,
            "id": 3,
            "name": "odio adipisci rerum aut animi",
            "email": "Nikita@garfield.biz",
            "body": "quia molestiae reprehenderit"
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.group_id, 1);
        assert_eq!(record.id, 3);
        assert_eq!(record.display_name, "odio adipisci rerum aut animi");
        assert_eq!(record.contact_email, "Nikita@garfield.biz");
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        let json = r#"{"postId": 1, "id": 3, "name": "no email"}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn test_encode_uses_wire_names() {
        let record = Record::new(2, 7, "Ann", "ann@example.com", "hello");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["postId"], 2);
        assert_eq!(value["name"], "Ann");
        assert_eq!(value["email"], "ann@example.com");
    }
}
