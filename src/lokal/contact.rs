//! Contact form intake: validation, spam rejection and persistence of
//! submitted messages.

use crate::error::{LokalError, Result};
use crate::model::{ContactMessage, MessageStatus};
use crate::store::MessageStore;
use uuid::Uuid;

/// A raw form submission, before validation.
#[derive(Debug, Clone, Default)]
pub struct SubmitForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub consent: bool,
    pub marketing: bool,
    /// Hidden anti-spam field. Humans never see it, so any content here
    /// marks the submission as automated.
    pub honeypot: String,
}

/// Validates a submission and persists it. A filled honeypot or a missing
/// required field rejects the form with nothing written; a storage failure
/// on a valid form fails the request rather than reporting a false success.
pub fn submit<S: MessageStore>(store: &mut S, form: &SubmitForm) -> Result<ContactMessage> {
    if !form.honeypot.trim().is_empty() {
        return Err(LokalError::Validation(
            "Submission rejected by spam check".to_string(),
        ));
    }
    validate(form)?;

    let message = ContactMessage::new(
        form.name.trim().to_string(),
        form.email.trim().to_string(),
        form.phone.trim().to_string(),
        form.subject.trim().to_string(),
        form.message.trim().to_string(),
        form.consent,
        form.marketing,
    );
    store.save_message(&message)?;
    Ok(message)
}

/// All stored messages, newest first.
pub fn messages<S: MessageStore>(store: &S) -> Result<Vec<ContactMessage>> {
    store.list_messages()
}

/// Moves a message through the handling workflow, optionally replacing its
/// notes. Unknown IDs surface as [`LokalError::MessageNotFound`].
pub fn set_status<S: MessageStore>(
    store: &mut S,
    id: &Uuid,
    status: MessageStatus,
    notes: Option<String>,
) -> Result<ContactMessage> {
    store.update_message(id, status, notes)
}

fn validate(form: &SubmitForm) -> Result<()> {
    let required = [
        ("name", &form.name),
        ("email", &form.email),
        ("phone", &form.phone),
        ("message", &form.message),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(LokalError::Validation(format!(
                "Missing required field: {}",
                field
            )));
        }
    }
    if !is_valid_email(form.email.trim()) {
        return Err(LokalError::Validation(
            "Invalid email address".to_string(),
        ));
    }
    if !is_valid_phone(form.phone.trim()) {
        return Err(LokalError::Validation(
            "Invalid phone number".to_string(),
        ));
    }
    Ok(())
}

/// Loose shape check: something before a single `@`, and a dot somewhere in
/// the domain part. Deliverability is the mail server's problem.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    let clean = |s: &str| !s.is_empty() && !s.chars().any(char::is_whitespace);
    clean(local) && clean(domain) && domain.split('.').filter(|p| clean(p)).count() >= 2
}

/// Accepts an optional leading `+` followed by at least nine characters
/// drawn from digits, dashes and parentheses, ignoring spaces.
fn is_valid_phone(phone: &str) -> bool {
    let stripped: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    let rest = stripped.strip_prefix('+').unwrap_or(&stripped);
    rest.len() >= 9 && rest.chars().all(|c| c.is_ascii_digit() || "-()".contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn valid_form() -> SubmitForm {
        SubmitForm {
            name: "Anna Kowalska".to_string(),
            email: "anna@example.com".to_string(),
            phone: "+48 600 100 200".to_string(),
            subject: "Unit 2-a-2".to_string(),
            message: "Is the reserved unit coming back on the market?".to_string(),
            consent: true,
            marketing: false,
            honeypot: String::new(),
        }
    }

    #[test]
    fn valid_submission_round_trips_with_status_new() {
        let mut store = InMemoryStore::new();
        let saved = submit(&mut store, &valid_form()).unwrap();

        let listed = messages(&store).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, saved.id);
        assert_eq!(listed[0].name, "Anna Kowalska");
        assert_eq!(listed[0].email, "anna@example.com");
        assert_eq!(listed[0].phone, "+48 600 100 200");
        assert_eq!(listed[0].message, saved.message);
        assert_eq!(listed[0].status, MessageStatus::New);
    }

    #[test]
    fn missing_required_field_persists_nothing() {
        let mut store = InMemoryStore::new();
        let form = SubmitForm {
            phone: String::new(),
            ..valid_form()
        };
        assert!(matches!(
            submit(&mut store, &form),
            Err(LokalError::Validation(_))
        ));
        assert!(messages(&store).unwrap().is_empty());
    }

    #[test]
    fn filled_honeypot_persists_nothing() {
        let mut store = InMemoryStore::new();
        let form = SubmitForm {
            honeypot: "http://spam.example".to_string(),
            ..valid_form()
        };
        assert!(matches!(
            submit(&mut store, &form),
            Err(LokalError::Validation(_))
        ));
        assert!(messages(&store).unwrap().is_empty());
    }

    #[test]
    fn email_shape_is_enforced() {
        assert!(is_valid_email("anna@example.com"));
        assert!(is_valid_email("a.b@mail.example.pl"));
        assert!(!is_valid_email("anna"));
        assert!(!is_valid_email("anna@example"));
        assert!(!is_valid_email("anna@@example.com"));
        assert!(!is_valid_email("an na@example.com"));
    }

    #[test]
    fn phone_shape_is_enforced() {
        assert!(is_valid_phone("+48 600 100 200"));
        assert!(is_valid_phone("600-100-200"));
        assert!(is_valid_phone("(22) 123 45 67"));
        assert!(!is_valid_phone("600 100"));
        assert!(!is_valid_phone("telephone"));
    }

    #[test]
    fn status_update_reaches_the_store() {
        let mut store = InMemoryStore::new();
        let saved = submit(&mut store, &valid_form()).unwrap();

        let updated = set_status(
            &mut store,
            &saved.id,
            MessageStatus::Resolved,
            Some("answered by phone".to_string()),
        )
        .unwrap();
        assert_eq!(updated.status, MessageStatus::Resolved);
        assert_eq!(updated.notes, "answered by phone");
    }

    #[test]
    fn unknown_id_update_is_not_found() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            set_status(&mut store, &Uuid::new_v4(), MessageStatus::Resolved, None),
            Err(LokalError::MessageNotFound(_))
        ));
    }

    #[test]
    fn fields_are_trimmed_before_storage() {
        let mut store = InMemoryStore::new();
        let form = SubmitForm {
            name: "  Jan Nowak  ".to_string(),
            ..valid_form()
        };
        let saved = submit(&mut store, &form).unwrap();
        assert_eq!(saved.name, "Jan Nowak");
    }
}
