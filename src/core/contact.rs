// Contact form model and validation.
//
// Mirrors the mail endpoint's schema: names and subject need at least two
// characters, the message at least ten, and the email must look like an
// address. User-facing messages are in Croatian, matching the site copy.
// Dispatching the email itself is the server's job.

use serde::Serialize;

/// Inquiry payload; serializes to the camelCase JSON the endpoint expects.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// One failed field with its user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Result shape shared with the page: `errors` is empty on success.
#[derive(Clone, Debug, Serialize)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

pub const MSG_SENT: &str = "Poruka je uspješno poslana! Hvala na kontaktu.";
pub const MSG_VALIDATION_FAILED: &str = "Validacija forme nije uspjela";
pub const MSG_SEND_FAILED: &str =
    "Došlo je do pogreške prilikom slanja poruke. Molimo pokušajte kasnije.";

/// Check all fields; the returned list is empty for a valid form.
pub fn validate(form: &ContactForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.first_name.trim().chars().count() < 2 {
        errors.push(FieldError {
            field: "firstName",
            message: "Ime mora imati najmanje 2 znaka",
        });
    }
    if form.last_name.trim().chars().count() < 2 {
        errors.push(FieldError {
            field: "lastName",
            message: "Prezime mora imati najmanje 2 znaka",
        });
    }
    if !is_valid_email(form.email.trim()) {
        errors.push(FieldError {
            field: "email",
            message: "Unesite valjanu email adresu",
        });
    }
    if form.subject.trim().chars().count() < 2 {
        errors.push(FieldError {
            field: "subject",
            message: "Naslov mora imati najmanje 2 znaka",
        });
    }
    if form.message.trim().chars().count() < 10 {
        errors.push(FieldError {
            field: "message",
            message: "Poruka mora imati najmanje 10 znakova",
        });
    }
    errors
}

/// Syntactic check only: `local@domain.tld` with a non-empty local part and a
/// dotted domain. Deliverability is the mail server's problem.
pub fn is_valid_email(address: &str) -> bool {
    if address.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}
