//! Brazilian CPF validation as a library and an HTTP endpoint.

pub mod config;
pub mod cpf;
pub mod error;
pub mod telemetry;
pub mod verification;
