// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod cnpj;
mod normalization;

// This is the public API of the CNPJ validation library
pub use cnpj::{is_valid, validate, CnpjError};
pub use normalization::{format_cnpj, sanitize};
