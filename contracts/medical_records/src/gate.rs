//! Permission gate shared by every mutating entry point.
//!
//! Each check is a pure read. Callers run all of them before their first
//! storage write, so a rejected call never leaves a partial mutation.

use soroban_sdk::{Address, Env};

use crate::errors::ContractError;
use crate::identity::{self, Doctor, Patient};
use crate::{access, storage};

pub fn require_initialized(env: &Env) -> Result<Address, ContractError> {
    if !env.storage().instance().has(&storage::INITIALIZED) {
        return Err(ContractError::NotInitialized);
    }
    identity::admin(env).ok_or(ContractError::NotInitialized)
}

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let admin = require_initialized(env)?;
    if *caller != admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Resolves a registered patient, failing with `missing` otherwise.
pub fn require_patient(
    env: &Env,
    who: &Address,
    missing: ContractError,
) -> Result<Patient, ContractError> {
    identity::load_patient(env, who)
        .filter(|p| p.exists)
        .ok_or(missing)
}

/// Resolves a registered doctor, failing with `missing` otherwise.
pub fn require_doctor(
    env: &Env,
    who: &Address,
    missing: ContractError,
) -> Result<Doctor, ContractError> {
    identity::load_doctor(env, who)
        .filter(|d| d.exists)
        .ok_or(missing)
}

pub fn require_write_access(
    env: &Env,
    patient: &Address,
    doctor: &Address,
) -> Result<(), ContractError> {
    if !access::is_authorized_for_write(env, patient, doctor) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn require_read_access(
    env: &Env,
    caller: &Address,
    patient: &Address,
) -> Result<(), ContractError> {
    if !access::is_authorized_for_read(env, caller, patient) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}
