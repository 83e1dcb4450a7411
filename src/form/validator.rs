//! Rule table for the upload form.
//!
//! Every field maps to an ordered list of rules. Fields are checked
//! independently and the first failing rule of a field is the one reported.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config;
use crate::form::state::FormValues;
use crate::submission::Submission;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Firma,
    Content,
    Consent,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Firma => "firma",
            Field::Content => "content",
            Field::Consent => "consent",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: &'static str,
}

/// At most one error per field, in field order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|e| e.to_string()).collect();
        f.write_str(&parts.join("; "))
    }
}

struct Rule {
    passes: fn(&FormValues) -> bool,
    message: &'static str,
}

const NAME_REQUIRED: &str = "Name ist erforderlich";
const NAME_TWO_WORDS: &str = "Bitte geben Sie mindestens zwei Worte ein";
const EMAIL_INVALID: &str = "Bitte geben Sie eine gültige E-Mail-Adresse ein";
const CONTENT_REQUIRED: &str = "Text ist erforderlich";
const CONTENT_TOO_SHORT: &str =
    "Bitte gebe mindestens 150 Worte ein, um eine Schreibstil Analyse zu erstellen.";
const CONSENT_REQUIRED: &str = "Aus Datenschutz Gründen muss uns genehmigt werden dir die WriteMap auf dein E-Mail Postfach zu senden, danke für dein Verständnis.";

// Firma has no rules.
const SCHEMA: &[(Field, &[Rule])] = &[
    (
        Field::Name,
        &[
            Rule { passes: |v| !v.name.is_empty(), message: NAME_REQUIRED },
            Rule { passes: |v| v.name.split_whitespace().count() >= 2, message: NAME_TWO_WORDS },
        ],
    ),
    (
        Field::Email,
        &[Rule { passes: |v| is_valid_email(&v.email), message: EMAIL_INVALID }],
    ),
    (
        Field::Content,
        &[
            Rule { passes: |v| !v.content.is_empty(), message: CONTENT_REQUIRED },
            Rule {
                passes: |v| word_count(&v.content) >= config::MIN_CONTENT_WORDS,
                message: CONTENT_TOO_SHORT,
            },
        ],
    ),
    (
        Field::Consent,
        &[Rule { passes: |v| v.consent, message: CONSENT_REQUIRED }],
    ),
];

// Local part: no leading dot, no "..", last char not '.' or '\''.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern compiles")
});

pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

/// Number of non-empty whitespace separated tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Errors for every field that fails, empty when the form is valid.
pub fn check(values: &FormValues) -> ValidationErrors {
    let errors = SCHEMA
        .iter()
        .filter_map(|(field, rules)| {
            rules
                .iter()
                .find(|rule| !(rule.passes)(values))
                .map(|rule| ValidationError {
                    field: *field,
                    message: rule.message,
                })
        })
        .collect();
    ValidationErrors { errors }
}

pub fn validate(values: &FormValues) -> Result<Submission, ValidationErrors> {
    let errors = check(values);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(Submission {
        name: values.name.clone(),
        email: values.email.clone(),
        firma: Some(values.firma.clone()).filter(|firma| !firma.is_empty()),
        content: values.content.clone(),
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::form::state::FormValues;

    pub fn words(n: usize) -> String {
        (0..n).map(|i| format!("wort{}", i)).collect::<Vec<_>>().join(" ")
    }

    pub fn valid_values() -> FormValues {
        FormValues {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            firma: String::new(),
            content: words(150),
            consent: true,
        }
    }
}
