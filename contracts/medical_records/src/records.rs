use soroban_sdk::{contracttype, Address, Env, String, Vec};

use crate::errors::ContractError;
use crate::{events, gate, identity, stats, storage, validation};

/// One immutable diagnostic entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicalRecord {
    /// Global sequence number; orders records across all patients.
    pub id: u64,
    pub patient: Address,
    pub doctor: Address,
    pub diagnosis: String,
    pub treatment: String,
    pub medication: String,
    pub notes: String,
    pub timestamp: u64,
}

pub fn load_record(env: &Env, record_id: u64) -> Option<MedicalRecord> {
    env.storage().persistent().get(&storage::record_key(record_id))
}

/// Appends a record for `patient` authored by `caller`.
///
/// Every check runs before the first write. Id allocation bumps the record
/// counter, then the record and the patient's index entry land in the same
/// invocation.
pub fn add_medical_record(
    env: &Env,
    caller: &Address,
    patient: &Address,
    diagnosis: String,
    treatment: String,
    medication: String,
    notes: String,
) -> Result<u64, ContractError> {
    gate::require_initialized(env)?;
    gate::require_doctor(env, caller, ContractError::Unauthorized)?;
    let mut owner = gate::require_patient(env, patient, ContractError::NotFound)?;
    gate::require_write_access(env, patient, caller)?;
    validation::validate_record(&diagnosis, &treatment, &medication, &notes)?;

    let record_id = stats::allocate_record_id(env)?;
    let record = MedicalRecord {
        id: record_id,
        patient: patient.clone(),
        doctor: caller.clone(),
        diagnosis,
        treatment,
        medication,
        notes,
        timestamp: env.ledger().timestamp(),
    };

    let key = storage::record_key(record_id);
    env.storage().persistent().set(&key, &record);
    storage::extend_ttl_u64_key(env, &key);

    owner.record_ids.push_back(record_id);
    identity::save_patient(env, &owner);

    events::publish_record_added(env, record_id, patient.clone(), caller.clone());
    Ok(record_id)
}

/// Returns the record if it exists and `caller` may read its patient's data.
pub fn get_medical_record(
    env: &Env,
    caller: &Address,
    record_id: u64,
) -> Result<MedicalRecord, ContractError> {
    let record = load_record(env, record_id).ok_or(ContractError::NotFound)?;
    gate::require_read_access(env, caller, &record.patient)?;
    Ok(record)
}

/// Empty for patients with no records and for unknown addresses.
pub fn patient_record_ids(env: &Env, patient: &Address) -> Vec<u64> {
    identity::load_patient(env, patient)
        .map(|p| p.record_ids)
        .unwrap_or(Vec::new(env))
}

/// One page of a patient's records in creation order.
///
/// `start` indexes the patient's id list; `limit` is capped at
/// `validation::MAX_PAGE_SIZE`. Callers walk a long history by advancing
/// `start` until a short page comes back.
pub fn patient_records(
    env: &Env,
    caller: &Address,
    patient: &Address,
    start: u32,
    limit: u32,
) -> Result<Vec<MedicalRecord>, ContractError> {
    gate::require_read_access(env, caller, patient)?;
    validation::validate_page(limit)?;

    let ids = patient_record_ids(env, patient);
    let end = start.saturating_add(limit).min(ids.len());

    let mut records = Vec::new(env);
    for index in start..end {
        let record_id = ids.get(index).ok_or(ContractError::NotFound)?;
        let record = load_record(env, record_id).ok_or(ContractError::NotFound)?;
        records.push_back(record);
    }
    Ok(records)
}
