//! Field validation for registrations and record appends.
//!
//! Every check here is pure and runs before an operation touches storage.

use soroban_sdk::String;

use crate::errors::ContractError;

pub const MAX_NAME_LEN: u32 = 100;
pub const MAX_GENDER_LEN: u32 = 32;
pub const MAX_PUBLIC_KEY_LEN: u32 = 256;
pub const MAX_SPECIALIZATION_LEN: u32 = 100;
pub const MAX_LICENSE_LEN: u32 = 64;
pub const MAX_CLINICAL_TEXT_LEN: u32 = 1024;
pub const MAX_NOTES_LEN: u32 = 2048;
/// Upper bound on records returned by one paged read, keeping a single
/// invocation well inside the host's resource budget.
pub const MAX_PAGE_SIZE: u32 = 50;

fn require_non_empty(value: &String, max_len: u32) -> Result<(), ContractError> {
    if value.len() == 0 {
        return Err(ContractError::InvalidInput);
    }
    require_max_len(value, max_len)
}

fn require_max_len(value: &String, max_len: u32) -> Result<(), ContractError> {
    if value.len() > max_len {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

/// Gender and public key are optional; only their length is bounded.
pub fn validate_patient(
    name: &String,
    gender: &String,
    public_key: &String,
) -> Result<(), ContractError> {
    require_non_empty(name, MAX_NAME_LEN)?;
    require_max_len(gender, MAX_GENDER_LEN)?;
    require_max_len(public_key, MAX_PUBLIC_KEY_LEN)
}

pub fn validate_doctor(
    name: &String,
    specialization: &String,
    license_number: &String,
) -> Result<(), ContractError> {
    require_non_empty(name, MAX_NAME_LEN)?;
    require_non_empty(specialization, MAX_SPECIALIZATION_LEN)?;
    require_non_empty(license_number, MAX_LICENSE_LEN)
}

/// A record needs a diagnosis; treatment, medication and notes may be blank.
pub fn validate_record(
    diagnosis: &String,
    treatment: &String,
    medication: &String,
    notes: &String,
) -> Result<(), ContractError> {
    require_non_empty(diagnosis, MAX_CLINICAL_TEXT_LEN)?;
    require_max_len(treatment, MAX_CLINICAL_TEXT_LEN)?;
    require_max_len(medication, MAX_CLINICAL_TEXT_LEN)?;
    require_max_len(notes, MAX_NOTES_LEN)
}

/// A page must hold between one and `MAX_PAGE_SIZE` records. Any `start`
/// is accepted; past the end it simply yields an empty page.
pub fn validate_page(limit: u32) -> Result<(), ContractError> {
    if limit == 0 || limit > MAX_PAGE_SIZE {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}
