//! Contact form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a field is addressed by a name the form does not have
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown contact form field: {0}")]
pub struct UnknownField(pub String);

/// One of the four contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Service,
    Message,
}

impl ContactField {
    /// All fields in display order
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Service,
        ContactField::Message,
    ];

    /// Wire name, also used as the payload key
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Service => "service",
            Self::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name *",
            Self::Email => "Email *",
            Self::Service => "What are you seeking help with? *",
            Self::Message => "Message *",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Your full name",
            Self::Email => "your@email.com",
            Self::Service => "Select a service",
            Self::Message => "Tell us about your family's goals and how we can help...",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContactField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Offerings selectable in the service dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOption {
    SchoolAdvisory,
    VisaPlanning,
    Mentorship,
    Comprehensive,
    Other,
}

impl ServiceOption {
    pub const ALL: [ServiceOption; 5] = [
        ServiceOption::SchoolAdvisory,
        ServiceOption::VisaPlanning,
        ServiceOption::Mentorship,
        ServiceOption::Comprehensive,
        ServiceOption::Other,
    ];

    /// Identifier stored in the form and sent in the payload
    pub fn value(&self) -> &'static str {
        match self {
            Self::SchoolAdvisory => "school-advisory",
            Self::VisaPlanning => "visa-planning",
            Self::Mentorship => "mentorship",
            Self::Comprehensive => "comprehensive",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SchoolAdvisory => "Elite School Advisory",
            Self::VisaPlanning => "Visa & Residency Planning",
            Self::Mentorship => "Academic & Business Mentorship",
            Self::Comprehensive => "Comprehensive Family Strategy",
            Self::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.value() == value)
    }

    /// Step through the options, treating "nothing selected" as a slot
    /// before the first one.
    pub fn cycle(current: Option<Self>, forward: bool) -> Self {
        let len = Self::ALL.len();
        let index = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(option), true) => (option.index() + 1) % len,
            (Some(option), false) => (option.index() + len - 1) % len,
        };
        Self::ALL[index]
    }

    fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|option| option == self)
            .unwrap_or_default()
    }
}

/// The four user-entered values. Unset values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Service => &self.service,
            ContactField::Message => &self.message,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Service => &mut self.service,
            ContactField::Message => &mut self.message,
        }
    }

    /// The selected service, if the stored value is a known identifier
    pub fn service_option(&self) -> Option<ServiceOption> {
        ServiceOption::from_value(&self.service)
    }

    /// Get the display value for rendering
    pub fn display_value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Service => self
                .service_option()
                .map(|option| option.label())
                .unwrap_or(""),
            other => self.get(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod contact_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_names_parse_back() {
            for field in ContactField::ALL {
                assert_eq!(field.name().parse::<ContactField>(), Ok(field));
            }
        }

        #[test]
        fn test_unknown_name_is_error() {
            let err = "phone".parse::<ContactField>().unwrap_err();
            assert_eq!(err, UnknownField("phone".to_string()));
            assert_eq!(err.to_string(), "unknown contact form field: phone");
        }

        #[test]
        fn test_only_message_is_multiline() {
            let multiline: Vec<_> = ContactField::ALL
                .into_iter()
                .filter(ContactField::is_multiline)
                .collect();
            assert_eq!(multiline, vec![ContactField::Message]);
        }
    }

    mod service_option {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_from_value_known_identifiers() {
            assert_eq!(
                ServiceOption::from_value("mentorship"),
                Some(ServiceOption::Mentorship)
            );
            assert_eq!(
                ServiceOption::from_value("school-advisory"),
                Some(ServiceOption::SchoolAdvisory)
            );
        }

        #[test]
        fn test_from_value_rejects_unknown_and_empty() {
            assert_eq!(ServiceOption::from_value(""), None);
            assert_eq!(ServiceOption::from_value("Mentorship"), None);
        }

        #[test]
        fn test_cycle_from_nothing_selected() {
            assert_eq!(
                ServiceOption::cycle(None, true),
                ServiceOption::SchoolAdvisory
            );
            assert_eq!(ServiceOption::cycle(None, false), ServiceOption::Other);
        }

        #[test]
        fn test_cycle_wraps() {
            assert_eq!(
                ServiceOption::cycle(Some(ServiceOption::Other), true),
                ServiceOption::SchoolAdvisory
            );
            assert_eq!(
                ServiceOption::cycle(Some(ServiceOption::SchoolAdvisory), false),
                ServiceOption::Other
            );
        }
    }

    mod form_fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_all_empty_strings() {
            let fields = FormFields::default();
            for field in ContactField::ALL {
                assert_eq!(fields.get(field), "");
            }
        }

        #[test]
        fn test_service_display_uses_label() {
            let fields = FormFields {
                service: "visa-planning".to_string(),
                ..Default::default()
            };
            assert_eq!(
                fields.display_value(ContactField::Service),
                "Visa & Residency Planning"
            );
        }

        #[test]
        fn test_payload_shape() {
            let fields = FormFields {
                name: "Jane".to_string(),
                email: "jane@x.com".to_string(),
                service: "mentorship".to_string(),
                message: "Hello".to_string(),
            };
            let json = serde_json::to_value(&fields).unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "name": "Jane",
                    "email": "jane@x.com",
                    "service": "mentorship",
                    "message": "Hello",
                })
            );
        }
    }
}
