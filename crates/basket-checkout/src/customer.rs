//! Customer contact details.

use serde::{Deserialize, Serialize};

/// Contact details entered at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number, empty when not given.
    #[serde(default)]
    pub phone: String,
}

impl Customer {
    /// Create a customer, trimming surrounding whitespace from every field.
    pub fn new(name: &str, email: &str, phone: Option<&str>) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.unwrap_or_default().trim().to_string(),
        }
    }

    /// Names of required fields that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.email.is_empty() {
            missing.push("email");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_trimmed() {
        let customer = Customer::new("  Ana  ", " ana@example.com\n", Some(" 555 "));
        assert_eq!(customer.name, "Ana");
        assert_eq!(customer.email, "ana@example.com");
        assert_eq!(customer.phone, "555");
    }

    #[test]
    fn test_phone_defaults_to_empty() {
        let customer = Customer::new("Ana", "ana@example.com", None);
        assert_eq!(customer.phone, "");
        assert!(customer.missing_fields().is_empty());
    }

    #[test]
    fn test_whitespace_only_fields_are_missing() {
        let customer = Customer::new("   ", "", None);
        assert_eq!(customer.missing_fields(), vec!["name", "email"]);
    }
}
