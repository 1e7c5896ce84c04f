//! Registration input predicates.
//!
//! Pure functions with no I/O; the caller supplies "today".

use chrono::{Datelike, NaiveDate};

use crate::constants::{EMAIL_REQUIRED_CHARS, MINIMUM_AGE};
use crate::user::RejectionReason;

/// Both names must be present.
pub fn has_first_and_last_name(first_name: &str, last_name: &str) -> bool {
    !first_name.is_empty() && !last_name.is_empty()
}

/// Only checks for an `@` and a `.` somewhere in the address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REQUIRED_CHARS.iter().all(|c| email.contains(*c))
}

/// Age in whole years on `today`, counting a birthday as reached on the day itself.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if today.month() < date_of_birth.month()
        || (today.month() == date_of_birth.month() && today.day() < date_of_birth.day())
    {
        age -= 1;
    }
    age
}

/// Check that the user has reached [`MINIMUM_AGE`] on `today`.
pub fn is_old_enough(date_of_birth: NaiveDate, today: NaiveDate) -> bool {
    age_on(date_of_birth, today) >= MINIMUM_AGE
}

/// Run every input gate in order, reporting the first one that fails.
pub fn validate_registration(
    first_name: &str,
    last_name: &str,
    email: &str,
    date_of_birth: NaiveDate,
    today: NaiveDate,
) -> Result<(), RejectionReason> {
    if !has_first_and_last_name(first_name, last_name) {
        return Err(RejectionReason::MissingName);
    }
    if !is_valid_email(email) {
        return Err(RejectionReason::InvalidEmail);
    }
    let age = age_on(date_of_birth, today);
    if age < MINIMUM_AGE {
        return Err(RejectionReason::Underage { age });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_names_must_both_be_present() {
        assert!(has_first_and_last_name("Jan", "Kowalski"));
        assert!(!has_first_and_last_name("", "Kowalski"));
        assert!(!has_first_and_last_name("Jan", ""));
        assert!(!has_first_and_last_name("", ""));
    }

    #[test]
    fn test_whitespace_name_counts_as_present() {
        assert!(has_first_and_last_name(" ", "Kowalski"));
    }

    #[test]
    fn test_email_needs_at_and_dot() {
        assert!(is_valid_email("jan@example.com"));
        assert!(is_valid_email(".@"));
        assert!(!is_valid_email("jan.example.com"));
        assert!(!is_valid_email("jan@example"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_age_counts_birthday_on_the_day() {
        let today = date(2026, 10, 19);
        assert_eq!(age_on(date(2005, 10, 19), today), 21);
        assert_eq!(age_on(date(2005, 10, 20), today), 20);
        assert_eq!(age_on(date(2005, 11, 1), today), 20);
        assert_eq!(age_on(date(2005, 9, 30), today), 21);
    }

    #[test]
    fn test_leap_day_birthday() {
        let born = date(2004, 2, 29);
        assert_eq!(age_on(born, date(2025, 2, 28)), 20);
        assert_eq!(age_on(born, date(2025, 3, 1)), 21);
    }

    #[test]
    fn test_minimum_age_boundary() {
        let today = date(2026, 10, 19);
        assert!(is_old_enough(date(2005, 10, 19), today));
        assert!(!is_old_enough(date(2005, 10, 20), today));
    }

    #[test]
    fn test_validate_registration_reports_first_failure() {
        let today = date(2026, 10, 19);
        let adult = date(1990, 1, 1);

        assert_eq!(
            validate_registration("", "Kowalski", "bad", date(2020, 1, 1), today),
            Err(RejectionReason::MissingName)
        );
        assert_eq!(
            validate_registration("Jan", "Kowalski", "bad", date(2020, 1, 1), today),
            Err(RejectionReason::InvalidEmail)
        );
        assert_eq!(
            validate_registration("Jan", "Kowalski", "jan@example.com", date(2020, 1, 1), today),
            Err(RejectionReason::Underage { age: 6 })
        );
        assert_eq!(
            validate_registration("Jan", "Kowalski", "jan@example.com", adult, today),
            Ok(())
        );
    }
}
