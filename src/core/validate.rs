use crate::core::error::ValidationError;
use crate::core::model::GuestRegistration;

/// Checks a registration before any row is produced or any store call made.
///
/// Order is fixed: primary first name, primary last name, then each guest
/// entry in list order (first name before last name). The first violation is
/// returned; violations are never aggregated. An accepted registration is
/// passed through unchanged; trimming here is only for the emptiness check.
pub fn validate(registration: &GuestRegistration) -> Result<(), ValidationError> {
    if registration.first_name.trim().is_empty() {
        return Err(ValidationError::EmptyPrimaryFirstName);
    }
    if registration.last_name.trim().is_empty() {
        return Err(ValidationError::EmptyPrimaryLastName);
    }

    for (index, guest) in registration.guest_list.iter().enumerate() {
        if guest.first_name.trim().is_empty() {
            return Err(ValidationError::EmptyGuestFirstName(index));
        }
        if guest.last_name.trim().is_empty() {
            return Err(ValidationError::EmptyGuestLastName(index));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::core::error::ValidationError;
    use crate::core::model::{GuestEntry, GuestRegistration};

    fn registration() -> GuestRegistration {
        GuestRegistration {
            first_name: "jean".to_string(),
            last_name: "dupont".to_string(),
            meal: "Normal".to_string(),
            will_attend: true,
            number_of_guests: Some(2),
            guest_list: vec![GuestEntry {
                first_name: "marie".to_string(),
                last_name: "dupont".to_string(),
                meal: "Végétarien".to_string(),
                will_attend: true,
            }],
        }
    }

    #[test]
    fn accepts_well_formed_registration() {
        assert_eq!(validate(&registration()), Ok(()));
    }

    #[test]
    fn rejects_whitespace_only_primary_first_name() {
        let mut reg = registration();
        reg.first_name = "   ".to_string();
        assert_eq!(
            validate(&reg),
            Err(ValidationError::EmptyPrimaryFirstName)
        );
    }

    #[test]
    fn rejects_empty_primary_last_name() {
        let mut reg = registration();
        reg.last_name = String::new();
        assert_eq!(validate(&reg), Err(ValidationError::EmptyPrimaryLastName));
    }

    #[test]
    fn reports_guest_violations_with_their_index() {
        let mut reg = registration();
        reg.guest_list.push(GuestEntry {
            first_name: "paul".to_string(),
            last_name: "  ".to_string(),
            meal: String::new(),
            will_attend: false,
        });
        assert_eq!(validate(&reg), Err(ValidationError::EmptyGuestLastName(1)));
    }

    #[test]
    fn reports_only_the_first_violation() {
        let mut reg = registration();
        reg.first_name = String::new();
        reg.last_name = String::new();
        reg.guest_list[0].first_name = String::new();
        assert_eq!(validate(&reg), Err(ValidationError::EmptyPrimaryFirstName));
    }

    #[test]
    fn guest_first_name_checked_before_guest_last_name() {
        let mut reg = registration();
        reg.guest_list[0].first_name = " ".to_string();
        reg.guest_list[0].last_name = String::new();
        assert_eq!(validate(&reg), Err(ValidationError::EmptyGuestFirstName(0)));
    }
}
