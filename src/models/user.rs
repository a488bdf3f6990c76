use serde::{Deserialize, Serialize};

/// Party on either side of a payment (`payer` or `collector`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_wire_shape() {
        let user = User::new("prueba").with_email("user@decidir.com");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "id": "prueba", "email": "user@decidir.com" })
        );
    }

    #[test]
    fn test_empty_object_decodes_to_default() {
        let user: User = serde_json::from_str("{}").unwrap();
        assert_eq!(user, User::default());
    }
}
