use serde::{Deserialize, Serialize};

/// Read-only account details shown in the header and on the profile page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            user_id: "12345687".to_string(),
            name: "Ervin Howell".to_string(),
            email: "ervinhowell@gmail.com".to_string(),
            phone: "96068 12345".to_string(),
            address: "voluptate iusto quis nobis reprehenderit…".to_string(),
        }
    }
}

impl UserProfile {
    /// First letter of the first two words, upper-cased ("Ervin Howell" → "EH").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(UserProfile::default().initials(), "EH");

        let profile = UserProfile {
            name: "ada lovelace byron".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.initials(), "AL");

        let profile = UserProfile {
            name: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.initials(), "");
    }
}
