use serde::{Deserialize, Serialize};

/// Current-user record as served by the session endpoint.
///
/// Field names follow the identity provider's camelCase wire convention.
/// Image and name parts are optional; a record may arrive before the
/// provider has filled any of them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub image_url: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserInfo {
    /// Two-character monogram shown when no profile image is available.
    ///
    /// A missing name part contributes nothing instead of failing the
    /// render, so the result may be shorter than two characters.
    pub fn initials(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        first
            .chars()
            .next()
            .into_iter()
            .chain(last.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: Option<&str>, last: Option<&str>) -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            image_url: None,
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
        }
    }

    #[test]
    fn test_initials_from_both_names() {
        assert_eq!(user(Some("Ada"), Some("Lovelace")).initials(), "AL");
    }

    #[test]
    fn test_initials_are_uppercased() {
        assert_eq!(user(Some("ada"), Some("lovelace")).initials(), "AL");
    }

    #[test]
    fn test_initials_with_missing_parts() {
        assert_eq!(user(Some("Ada"), None).initials(), "A");
        assert_eq!(user(None, Some("Lovelace")).initials(), "L");
        assert_eq!(user(None, None).initials(), "");
        assert_eq!(user(Some(""), Some("")).initials(), "");
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let record: UserInfo = serde_json::from_str(
            r#"{"id":"u1","imageUrl":"http://x/y.png","firstName":"Ada","lastName":"Lovelace"}"#,
        )
        .unwrap();
        assert_eq!(record.image_url.as_deref(), Some("http://x/y.png"));
        assert_eq!(record.first_name.as_deref(), Some("Ada"));

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("imageUrl"));
        assert!(json.contains("firstName"));
        assert!(json.contains("lastName"));
    }
}
