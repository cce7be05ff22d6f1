use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::cpf;

pub const VALID_MESSAGE: &str = "CPF válido.";
pub const INVALID_MESSAGE: &str = "CPF Inválido";
pub const MISSING_MESSAGE: &str = "Por favor, informe o CPF.";

/// Body accepted by the validation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateCpfRequest {
    #[serde(default)]
    pub cpf: Option<String>,
}

impl ValidateCpfRequest {
    pub fn new(cpf: impl Into<String>) -> Self {
        Self {
            cpf: Some(cpf.into()),
        }
    }
}

/// What the endpoint concluded about a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationOutcome {
    Valid,
    Invalid,
    /// No identifier was supplied at all.
    Missing,
}

impl VerificationOutcome {
    pub fn from_request(request: Option<&ValidateCpfRequest>) -> Self {
        match request.and_then(|request| request.cpf.as_deref()) {
            None => Self::Missing,
            Some(candidate) if cpf::validate(candidate) => Self::Valid,
            Some(_) => Self::Invalid,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn status(self) -> StatusCode {
        match self {
            Self::Valid => StatusCode::OK,
            Self::Invalid | Self::Missing => StatusCode::BAD_REQUEST,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Valid => VALID_MESSAGE,
            Self::Invalid => INVALID_MESSAGE,
            Self::Missing => MISSING_MESSAGE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Missing => "missing",
        }
    }

    pub fn response(self) -> VerificationResponse {
        VerificationResponse {
            valid: self.is_valid(),
            message: self.message().to_string(),
        }
    }
}

/// JSON payload returned for every well-formed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResponse {
    pub valid: bool,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("request body is not a valid CPF payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Reads a raw request body.
///
/// An empty body and the JSON literal `null` both mean no payload was sent.
pub fn parse_request(body: &[u8]) -> Result<Option<ValidateCpfRequest>, PayloadError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    Ok(serde_json::from_slice::<Option<ValidateCpfRequest>>(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_null_bodies_carry_no_payload() {
        assert_eq!(parse_request(b"").expect("empty body"), None);
        assert_eq!(parse_request(b"  \n").expect("blank body"), None);
        assert_eq!(parse_request(b"null").expect("null body"), None);
    }

    #[test]
    fn missing_and_null_fields_parse_to_none() {
        let request = parse_request(br#"{}"#).expect("object parses");
        assert_eq!(request, Some(ValidateCpfRequest { cpf: None }));

        let request = parse_request(br#"{"cpf": null, "nome": "Maria"}"#).expect("object parses");
        assert_eq!(request, Some(ValidateCpfRequest { cpf: None }));
    }

    #[test]
    fn malformed_bodies_are_rejected() {
        assert!(parse_request(b"{cpf:").is_err());
        assert!(parse_request(br#"{"cpf": 11144477735}"#).is_err());
        assert!(parse_request(br#""11144477735""#).is_err());
    }

    #[test]
    fn outcome_distinguishes_missing_from_invalid() {
        assert_eq!(
            VerificationOutcome::from_request(None),
            VerificationOutcome::Missing
        );
        assert_eq!(
            VerificationOutcome::from_request(Some(&ValidateCpfRequest::default())),
            VerificationOutcome::Missing
        );
        assert_eq!(
            VerificationOutcome::from_request(Some(&ValidateCpfRequest::new(""))),
            VerificationOutcome::Invalid
        );
        assert_eq!(
            VerificationOutcome::from_request(Some(&ValidateCpfRequest::new("abc.def"))),
            VerificationOutcome::Invalid
        );
        assert_eq!(
            VerificationOutcome::from_request(Some(&ValidateCpfRequest::new("111.444.777-35"))),
            VerificationOutcome::Valid
        );
    }

    #[test]
    fn outcomes_map_to_statuses_and_messages() {
        let valid = VerificationOutcome::Valid.response();
        assert!(valid.valid);
        assert_eq!(valid.message, VALID_MESSAGE);
        assert_eq!(VerificationOutcome::Valid.status(), StatusCode::OK);

        assert_eq!(VerificationOutcome::Invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(VerificationOutcome::Missing.status(), StatusCode::BAD_REQUEST);
        assert_ne!(
            VerificationOutcome::Invalid.message(),
            VerificationOutcome::Missing.message()
        );
    }
}
