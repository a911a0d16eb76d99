use soroban_sdk::{contracttype, Address, Env, String, Vec};

use crate::errors::ContractError;
use crate::{events, gate, stats, storage, validation};

/// Role of an address, derived from the registries on every lookup.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Unregistered = 0,
    Patient = 1,
    Doctor = 2,
    Admin = 3,
}

/// Doctor identity, onboarded by the administrator.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Doctor {
    pub address: Address,
    pub name: String,
    pub specialization: String,
    pub license_number: String,
    pub exists: bool,
    pub registered_at: u64,
}

/// Patient identity, created by the patient itself.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patient {
    pub address: Address,
    pub name: String,
    /// Seconds since the UNIX epoch.
    pub date_of_birth: u64,
    pub gender: String,
    /// Reference to the key records are encrypted for off-ledger.
    pub public_key: String,
    pub exists: bool,
    pub registered_at: u64,
    /// Ids of this patient's records, in creation order.
    pub record_ids: Vec<u64>,
}

impl Doctor {
    fn unregistered(env: &Env, address: Address) -> Self {
        let empty = String::from_str(env, "");
        Doctor {
            address,
            name: empty.clone(),
            specialization: empty.clone(),
            license_number: empty,
            exists: false,
            registered_at: 0,
        }
    }
}

impl Patient {
    fn unregistered(env: &Env, address: Address) -> Self {
        let empty = String::from_str(env, "");
        Patient {
            address,
            name: empty.clone(),
            date_of_birth: 0,
            gender: empty.clone(),
            public_key: empty,
            exists: false,
            registered_at: 0,
            record_ids: Vec::new(env),
        }
    }
}

pub fn admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&storage::ADMIN)
}

pub fn is_admin(env: &Env, who: &Address) -> bool {
    admin(env).is_some_and(|admin| admin == *who)
}

pub fn load_patient(env: &Env, who: &Address) -> Option<Patient> {
    env.storage().persistent().get(&storage::patient_key(who))
}

pub(crate) fn save_patient(env: &Env, patient: &Patient) {
    let key = storage::patient_key(&patient.address);
    env.storage().persistent().set(&key, patient);
    storage::extend_ttl_address_key(env, &key);
}

pub fn load_doctor(env: &Env, who: &Address) -> Option<Doctor> {
    env.storage().persistent().get(&storage::doctor_key(who))
}

pub fn is_patient(env: &Env, who: &Address) -> bool {
    load_patient(env, who).is_some_and(|p| p.exists)
}

pub fn is_doctor(env: &Env, who: &Address) -> bool {
    load_doctor(env, who).is_some_and(|d| d.exists)
}

/// Unknown addresses yield a zero-value patient with `exists == false`.
pub fn get_patient(env: &Env, who: Address) -> Patient {
    load_patient(env, &who).unwrap_or_else(|| Patient::unregistered(env, who))
}

/// Unknown addresses yield a zero-value doctor with `exists == false`.
pub fn get_doctor(env: &Env, who: Address) -> Doctor {
    load_doctor(env, &who).unwrap_or_else(|| Doctor::unregistered(env, who))
}

/// Admin takes precedence over doctor, doctor over patient.
pub fn role_of(env: &Env, who: &Address) -> Role {
    if is_admin(env, who) {
        Role::Admin
    } else if is_doctor(env, who) {
        Role::Doctor
    } else if is_patient(env, who) {
        Role::Patient
    } else {
        Role::Unregistered
    }
}

pub fn register_patient(
    env: &Env,
    caller: &Address,
    name: String,
    date_of_birth: u64,
    gender: String,
    public_key: String,
) -> Result<(), ContractError> {
    gate::require_initialized(env)?;
    if is_patient(env, caller) {
        return Err(ContractError::AlreadyExists);
    }
    validation::validate_patient(&name, &gender, &public_key)?;

    let patient = Patient {
        address: caller.clone(),
        name: name.clone(),
        date_of_birth,
        gender,
        public_key,
        exists: true,
        registered_at: env.ledger().timestamp(),
        record_ids: Vec::new(env),
    };
    stats::record_patient(env)?;
    save_patient(env, &patient);

    events::publish_patient_registered(env, caller.clone(), name);
    Ok(())
}

pub fn register_doctor(
    env: &Env,
    caller: &Address,
    doctor: Address,
    name: String,
    specialization: String,
    license_number: String,
) -> Result<(), ContractError> {
    gate::require_admin(env, caller)?;
    if is_doctor(env, &doctor) {
        return Err(ContractError::AlreadyExists);
    }
    validation::validate_doctor(&name, &specialization, &license_number)?;

    let record = Doctor {
        address: doctor.clone(),
        name: name.clone(),
        specialization: specialization.clone(),
        license_number,
        exists: true,
        registered_at: env.ledger().timestamp(),
    };
    stats::record_doctor(env)?;
    let key = storage::doctor_key(&doctor);
    env.storage().persistent().set(&key, &record);
    storage::extend_ttl_address_key(env, &key);

    events::publish_doctor_registered(env, doctor, name, specialization);
    Ok(())
}
