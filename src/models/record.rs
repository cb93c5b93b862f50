//! Contact record: one person's name, phone numbers and birthday.

use crate::domain::{BirthdayDate, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact stored in the [`ContactBook`](crate::book::ContactBook).
///
/// The name is fixed at construction. Phones keep insertion order and are
/// not deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<BirthdayDate>,
}

impl ContactRecord {
    /// Create an empty record for `name`.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// The first phone in the list, which the REPL treats as primary.
    pub fn primary_phone(&self) -> Option<&PhoneNumber> {
        self.phones.first()
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// Appending a number that is already present creates a duplicate entry.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.push_phone(phone);
        Ok(())
    }

    /// Append an already validated phone.
    pub fn push_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove every phone equal to `raw`. Returns how many were removed.
    pub fn remove_phone(&mut self, raw: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|phone| phone != raw);
        before - self.phones.len()
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// `new` is validated before the list is searched, so a malformed
    /// replacement is reported even when `old` is absent.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let replacement = PhoneNumber::new(new)?;

        let slot = self
            .phones
            .iter_mut()
            .find(|phone| *phone == old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;

        *slot = replacement;
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| *phone == raw)
    }

    /// Parse `raw` as `DD.MM.YYYY` and store it, replacing any previous value.
    pub fn set_birthday(&mut self, raw: &str) -> BookResult<()> {
        self.birthday = Some(BirthdayDate::new(raw)?);
        Ok(())
    }

    /// Phones joined with `separator`, in list order.
    pub fn phones_joined(&self, separator: &str) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Full one-line description of the record.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: ",
            self.name,
            self.phones_joined("; ")
        )?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "not set"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn record(name: &str) -> ContactRecord {
        ContactRecord::new(ContactName::new(name).unwrap())
    }

    #[test]
    fn test_new_record_is_empty() {
        let r = record("John");
        assert_eq!(r.name().as_str(), "John");
        assert!(r.phones().is_empty());
        assert!(r.birthday().is_none());
    }

    #[test]
    fn test_add_phone_appends_duplicates() {
        let mut r = record("John");
        r.add_phone("1234567890").unwrap();
        r.add_phone("1234567890").unwrap();
        assert_eq!(r.phones().len(), 2);
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut r = record("John");
        let err = r.add_phone("12345").unwrap_err();
        assert_eq!(
            err,
            BookError::Validation(ValidationError::InvalidPhone("12345".into()))
        );
        assert!(r.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut r = record("John");
        r.add_phone("1111111111").unwrap();
        r.add_phone("2222222222").unwrap();
        r.add_phone("1111111111").unwrap();

        assert_eq!(r.remove_phone("1111111111"), 2);
        assert_eq!(r.phones_joined(","), "2222222222");
    }

    #[test]
    fn test_remove_missing_phone_is_noop() {
        let mut r = record("John");
        r.add_phone("1111111111").unwrap();
        assert_eq!(r.remove_phone("9999999999"), 0);
        assert_eq!(r.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces_in_place() {
        let mut r = record("John");
        r.add_phone("1111111111").unwrap();
        r.add_phone("2222222222").unwrap();
        r.add_phone("3333333333").unwrap();

        r.edit_phone("2222222222", "4444444444").unwrap();

        assert_eq!(r.phones().len(), 3);
        assert_eq!(r.phones()[1].as_str(), "4444444444");
        assert_eq!(r.phones_joined(" "), "1111111111 4444444444 3333333333");
    }

    #[test]
    fn test_edit_phone_only_touches_first_match() {
        let mut r = record("John");
        r.add_phone("1111111111").unwrap();
        r.add_phone("1111111111").unwrap();

        r.edit_phone("1111111111", "5555555555").unwrap();
        assert_eq!(r.phones_joined(","), "5555555555,1111111111");
    }

    #[test]
    fn test_edit_phone_missing_old_leaves_list_unchanged() {
        let mut r = record("John");
        r.add_phone("1111111111").unwrap();

        let err = r.edit_phone("9999999999", "2222222222").unwrap_err();
        assert_eq!(err, BookError::PhoneNotFound("9999999999".into()));
        assert_eq!(r.phones_joined(","), "1111111111");
    }

    #[test]
    fn test_edit_phone_validates_new_first() {
        let mut r = record("John");
        r.add_phone("1111111111").unwrap();

        let err = r.edit_phone("9999999999", "bad").unwrap_err();
        assert!(matches!(err, BookError::Validation(_)));
        assert_eq!(r.phones_joined(","), "1111111111");
    }

    #[test]
    fn test_find_phone() {
        let mut r = record("John");
        r.add_phone("1111111111").unwrap();
        assert_eq!(
            r.find_phone("1111111111").map(PhoneNumber::as_str),
            Some("1111111111")
        );
        assert!(r.find_phone("2222222222").is_none());
    }

    #[test]
    fn test_set_birthday_overwrites() {
        let mut r = record("John");
        r.set_birthday("01.02.1990").unwrap();
        r.set_birthday("03.04.1991").unwrap();
        assert_eq!(r.birthday().unwrap().to_string(), "03.04.1991");
    }

    #[test]
    fn test_set_birthday_rejects_bad_format() {
        let mut r = record("John");
        let err = r.set_birthday("1991-04-03").unwrap_err();
        assert!(err.to_string().contains("DD.MM.YYYY"));
        assert!(r.birthday().is_none());
    }

    #[test]
    fn test_describe_without_birthday() {
        let mut r = record("John");
        r.add_phone("1111111111").unwrap();
        r.add_phone("2222222222").unwrap();

        let text = r.describe();
        assert!(text.contains("1111111111; 2222222222"));
        assert!(text.contains("birthday: not set"));
        assert_eq!(
            text,
            "Contact name: John, phones: 1111111111; 2222222222, birthday: not set"
        );
    }

    #[test]
    fn test_describe_with_birthday() {
        let mut r = record("Jane");
        r.set_birthday("12.06.1990").unwrap();
        assert_eq!(
            r.describe(),
            "Contact name: Jane, phones: , birthday: 12.06.1990"
        );
    }

    #[test]
    fn test_record_serialization() {
        let mut r = record("Jane");
        r.add_phone("1111111111").unwrap();
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"name":"Jane","phones":["1111111111"]}"#);

        let parsed: ContactRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, r);

        let invalid: Result<ContactRecord, _> =
            serde_json::from_str(r#"{"name":"Jane","phones":["12"]}"#);
        assert!(invalid.is_err());
    }
}
