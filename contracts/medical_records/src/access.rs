use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::errors::ContractError;
use crate::{events, gate, identity, storage};

/// Current state of a patient's grant to one doctor.
///
/// A pair that was never granted reads as `Inactive`, so revoking it is a
/// no-op rather than a lookup failure.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum GrantState {
    Inactive = 0,
    Active = 1,
}

pub fn grant_state(env: &Env, patient: &Address, doctor: &Address) -> GrantState {
    env.storage()
        .persistent()
        .get(&storage::grant_key(patient, doctor))
        .unwrap_or(GrantState::Inactive)
}

fn set_grant_state(env: &Env, patient: &Address, doctor: &Address, state: GrantState) {
    let key = storage::grant_key(patient, doctor);
    env.storage().persistent().set(&key, &state);
    storage::extend_ttl_grant_key(env, &key);
}

fn granted_doctors(env: &Env, patient: &Address) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&storage::grantees_key(patient))
        .unwrap_or(Vec::new(env))
}

/// Remembers `doctor` in the patient's grantee index on first grant.
fn index_grantee(env: &Env, patient: &Address, doctor: &Address) {
    let mut doctors = granted_doctors(env, patient);
    if doctors.contains(doctor) {
        return;
    }
    doctors.push_back(doctor.clone());
    let key = storage::grantees_key(patient);
    env.storage().persistent().set(&key, &doctors);
    storage::extend_ttl_address_key(env, &key);
}

pub fn is_authorized_for_write(env: &Env, patient: &Address, doctor: &Address) -> bool {
    grant_state(env, patient, doctor) == GrantState::Active
}

/// The patient itself, a doctor holding an active grant, or the
/// administrator for audit.
pub fn is_authorized_for_read(env: &Env, caller: &Address, patient: &Address) -> bool {
    caller == patient
        || is_authorized_for_write(env, patient, caller)
        || identity::is_admin(env, caller)
}

/// Doctors currently holding an active grant, in first-grant order.
pub fn authorized_doctors(env: &Env, patient: &Address) -> Vec<Address> {
    let mut active = Vec::new(env);
    for doctor in granted_doctors(env, patient).iter() {
        if is_authorized_for_write(env, patient, &doctor) {
            active.push_back(doctor);
        }
    }
    active
}

pub fn grant_access(env: &Env, caller: &Address, doctor: &Address) -> Result<(), ContractError> {
    gate::require_initialized(env)?;
    gate::require_patient(env, caller, ContractError::NotFound)?;
    gate::require_doctor(env, doctor, ContractError::NotFound)?;

    if grant_state(env, caller, doctor) == GrantState::Active {
        return Ok(());
    }

    set_grant_state(env, caller, doctor, GrantState::Active);
    index_grantee(env, caller, doctor);

    events::publish_access_granted(env, caller.clone(), doctor.clone());
    Ok(())
}

pub fn revoke_access(env: &Env, caller: &Address, doctor: &Address) -> Result<(), ContractError> {
    gate::require_initialized(env)?;
    gate::require_patient(env, caller, ContractError::NotFound)?;

    if grant_state(env, caller, doctor) == GrantState::Inactive {
        return Ok(());
    }

    set_grant_state(env, caller, doctor, GrantState::Inactive);

    events::publish_access_revoked(env, caller.clone(), doctor.clone());
    Ok(())
}
