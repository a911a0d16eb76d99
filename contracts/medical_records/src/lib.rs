#![no_std]
//! Consent-gated medical record ledger.
//!
//! Patients register themselves, a single administrator onboards doctors,
//! patients grant and revoke per-doctor access, and authorized doctors
//! append immutable records. Every mutating entry point authenticates its
//! caller, runs the permission gate, and only then writes.

pub mod access;
pub mod errors;
pub mod events;
pub mod gate;
pub mod identity;
pub mod records;
pub mod stats;
mod storage;
pub mod validation;

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Vec};

pub use access::GrantState;
pub use errors::{ContractError, ErrorCategory, ErrorContext};
pub use identity::{Doctor, Patient, Role};
pub use records::MedicalRecord;
pub use stats::LedgerStats;

#[contract]
pub struct MedicalRecordsContract;

#[contractimpl]
impl MedicalRecordsContract {
    /// Fix the administrator. Can only succeed once.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&storage::INITIALIZED) {
            return Err(errors::report(
                &env,
                ContractError::AlreadyInitialized,
                Some(&admin),
                symbol_short!("INIT"),
            ));
        }

        admin.require_auth();

        env.storage().instance().set(&storage::ADMIN, &admin);
        env.storage().instance().set(&storage::INITIALIZED, &true);
        storage::extend_ttl_instance(&env);

        events::publish_initialized(&env, admin);

        Ok(())
    }

    /// Get the administrator address
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        identity::admin(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&storage::INITIALIZED)
    }

    pub fn is_admin(env: Env, caller: Address) -> bool {
        identity::is_admin(&env, &caller)
    }

    /// Classify an address as admin, doctor, patient or unregistered.
    pub fn get_role(env: Env, address: Address) -> Role {
        identity::role_of(&env, &address)
    }

    // ======================== Identity ========================

    /// Self-registration: the caller becomes the patient.
    pub fn register_patient(
        env: Env,
        caller: Address,
        name: String,
        date_of_birth: u64,
        gender: String,
        public_key: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        identity::register_patient(&env, &caller, name, date_of_birth, gender, public_key)
            .map_err(|err| errors::report(&env, err, Some(&caller), symbol_short!("REG_PAT")))
    }

    /// Register a doctor. Administrator only.
    pub fn register_doctor(
        env: Env,
        caller: Address,
        doctor: Address,
        name: String,
        specialization: String,
        license_number: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        identity::register_doctor(&env, &caller, doctor, name, specialization, license_number)
            .map_err(|err| errors::report(&env, err, Some(&caller), symbol_short!("REG_DOC")))
    }

    pub fn get_patient(env: Env, address: Address) -> Patient {
        identity::get_patient(&env, address)
    }

    pub fn get_doctor(env: Env, address: Address) -> Doctor {
        identity::get_doctor(&env, address)
    }

    // ======================== Access ========================

    /// The calling patient authorizes `doctor` to read and append records.
    pub fn grant_access(env: Env, caller: Address, doctor: Address) -> Result<(), ContractError> {
        caller.require_auth();
        access::grant_access(&env, &caller, &doctor)
            .map_err(|err| errors::report(&env, err, Some(&caller), symbol_short!("GRT_ACC")))
    }

    /// The calling patient withdraws `doctor`'s authorization.
    pub fn revoke_access(env: Env, caller: Address, doctor: Address) -> Result<(), ContractError> {
        caller.require_auth();
        access::revoke_access(&env, &caller, &doctor)
            .map_err(|err| errors::report(&env, err, Some(&caller), symbol_short!("REV_ACC")))
    }

    pub fn get_grant(env: Env, patient: Address, doctor: Address) -> GrantState {
        access::grant_state(&env, &patient, &doctor)
    }

    pub fn is_authorized_for_write(env: Env, patient: Address, doctor: Address) -> bool {
        access::is_authorized_for_write(&env, &patient, &doctor)
    }

    pub fn is_authorized_for_read(env: Env, caller: Address, patient: Address) -> bool {
        access::is_authorized_for_read(&env, &caller, &patient)
    }

    /// Doctors currently authorized by `patient`, in first-grant order.
    pub fn get_authorized_doctors(env: Env, patient: Address) -> Vec<Address> {
        access::authorized_doctors(&env, &patient)
    }

    // ======================== Records ========================

    /// Append a record. Returns the new global record id.
    pub fn add_medical_record(
        env: Env,
        caller: Address,
        patient: Address,
        diagnosis: String,
        treatment: String,
        medication: String,
        notes: String,
    ) -> Result<u64, ContractError> {
        caller.require_auth();
        records::add_medical_record(
            &env, &caller, &patient, diagnosis, treatment, medication, notes,
        )
        .map_err(|err| errors::report(&env, err, Some(&caller), symbol_short!("ADD_REC")))
    }

    /// Fetch a record. The caller must pass the read gate for its patient.
    pub fn get_medical_record(
        env: Env,
        caller: Address,
        record_id: u64,
    ) -> Result<MedicalRecord, ContractError> {
        caller.require_auth();
        records::get_medical_record(&env, &caller, record_id)
            .map_err(|err| errors::report(&env, err, Some(&caller), symbol_short!("GET_REC")))
    }

    pub fn get_patient_record_ids(env: Env, patient: Address) -> Vec<u64> {
        records::patient_record_ids(&env, &patient)
    }

    /// A page of a patient's records in creation order, behind the read gate.
    /// `limit` must be between 1 and `validation::MAX_PAGE_SIZE`.
    pub fn get_patient_records(
        env: Env,
        caller: Address,
        patient: Address,
        start: u32,
        limit: u32,
    ) -> Result<Vec<MedicalRecord>, ContractError> {
        caller.require_auth();
        records::patient_records(&env, &caller, &patient, start, limit)
            .map_err(|err| errors::report(&env, err, Some(&caller), symbol_short!("GET_RECS")))
    }

    // ======================== Stats ========================

    pub fn get_stats(env: Env) -> LedgerStats {
        stats::get_stats(&env)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}

#[cfg(test)]
mod test_events;
