pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

#[derive(Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MissingField,
    InvalidEmail,
}

impl Rejection {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingField => "Please fill in all fields.",
            Self::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

// Required-field checks run before the email shape check; the first violated
// rule is the one reported.
pub fn validate(submission: &Submission) -> Result<(), Rejection> {
    if submission.name.is_empty() || submission.email.is_empty() || submission.message.is_empty() {
        return Err(Rejection::MissingField);
    }

    if !is_valid_email(&submission.email) {
        return Err(Rejection::InvalidEmail);
    }

    Ok(())
}

// Same shape the site always accepted: a non-empty local part and domain
// around a single `@`, the domain dotted, no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(index, ch)| ch == '.' && index > 0 && index + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> Submission {
        Submission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn well_formed_submission_passes() {
        let entry = submission("Ada", "ada@example.com", "Hello there");
        assert!(validate(&entry).is_ok());
    }

    #[test]
    fn any_empty_field_rejects_first() {
        for entry in [
            submission("", "ada@example.com", "Hello"),
            submission("Ada", "", "Hello"),
            submission("Ada", "ada@example.com", ""),
        ] {
            assert!(matches!(validate(&entry), Err(Rejection::MissingField)));
        }
    }

    #[test]
    fn empty_field_wins_over_bad_email() {
        let entry = submission("", "not-an-email", "Hello");
        assert!(matches!(validate(&entry), Err(Rejection::MissingField)));
    }

    #[test]
    fn bad_email_rejects_once_fields_are_present() {
        let entry = submission("Ada", "not-an-email", "Hello");
        assert!(matches!(validate(&entry), Err(Rejection::InvalidEmail)));
    }

    #[test]
    fn whitespace_only_field_counts_as_present() {
        let entry = submission(" ", "ada@example.com", "Hello");
        assert!(validate(&entry).is_ok());
    }

    #[test]
    fn email_needs_a_dotted_domain() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.b"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@mail.example.co"));
    }

    #[test]
    fn email_needs_a_separator() {
        assert!(!is_valid_email("abc.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn email_rejects_whitespace() {
        assert!(!is_valid_email("a @b.com"));
        assert!(!is_valid_email(" a@b.com"));
        assert!(!is_valid_email("a@b.com "));
    }

    #[test]
    fn rejections_carry_their_notice_text() {
        assert_eq!(Rejection::MissingField.message(), "Please fill in all fields.");
        assert_eq!(
            Rejection::InvalidEmail.message(),
            "Please enter a valid email address."
        );
    }
}
