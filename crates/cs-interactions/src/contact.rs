//! Contact form rules: a name, plus at least one way to reach the sender.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Name,
    Contact,
}

impl FieldError {
    pub const ALL: [FieldError; 2] = [FieldError::Name, FieldError::Contact];
}

#[derive(Debug, Clone, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactFields {
    fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    fn has_contact(&self) -> bool {
        !self.email.trim().is_empty() || !self.phone.trim().is_empty()
    }

    pub fn validate(&self) -> ContactValidation {
        let mut errors = Vec::new();
        if !self.has_name() {
            errors.push(FieldError::Name);
        }
        if !self.has_contact() {
            errors.push(FieldError::Contact);
        }
        ContactValidation { errors }
    }

    /// Errors that typing into a field may clear straight away. Only errors
    /// that the current input now satisfies are returned.
    pub fn resolved(&self, edited: FieldError) -> Option<FieldError> {
        let satisfied = match edited {
            FieldError::Name => self.has_name(),
            FieldError::Contact => self.has_contact(),
        };
        satisfied.then_some(edited)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactValidation {
    pub errors: Vec<FieldError>,
}

impl ContactValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, phone: &str) -> ContactFields {
        ContactFields {
            name: name.to_owned(),
            email: email.to_owned(),
            phone: phone.to_owned(),
        }
    }

    #[test]
    fn name_and_either_contact_is_valid() {
        assert!(fields("Sato", "sato@example.jp", "").validate().is_valid());
        assert!(fields("Sato", "", "03-0000-0000").validate().is_valid());
    }

    #[test]
    fn blank_form_reports_both_errors() {
        let result = fields("  ", "", " ").validate();
        assert_eq!(result.errors, vec![FieldError::Name, FieldError::Contact]);
        assert!(!result.is_valid());
    }

    #[test]
    fn missing_contact_only() {
        let result = fields("Sato", "", "").validate();
        assert_eq!(result.errors, vec![FieldError::Contact]);
    }

    #[test]
    fn live_input_clears_only_satisfied_errors() {
        assert_eq!(fields("S", "", "").resolved(FieldError::Name), Some(FieldError::Name));
        assert_eq!(fields(" ", "", "").resolved(FieldError::Name), None);
        assert_eq!(
            fields("", "", "090").resolved(FieldError::Contact),
            Some(FieldError::Contact)
        );
        assert_eq!(fields("", " ", "").resolved(FieldError::Contact), None);
    }
}
