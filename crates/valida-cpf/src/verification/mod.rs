//! HTTP surface for CPF validation: request parsing, outcome mapping and routing.

pub mod auth;
pub mod domain;
pub mod router;

pub use auth::{require_function_key, FunctionKeyQuery, FUNCTION_KEY_HEADER};
pub use domain::{
    parse_request, PayloadError, ValidateCpfRequest, VerificationOutcome, VerificationResponse,
    INVALID_MESSAGE, MISSING_MESSAGE, VALID_MESSAGE,
};
pub use router::{verification_router, VALIDATE_CPF_PATH};
