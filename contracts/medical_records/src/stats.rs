use soroban_sdk::{contracttype, Env};

use crate::errors::ContractError;

use crate::storage::{self, DOCTOR_COUNTER, PATIENT_COUNTER, RECORD_COUNTER};

/// Running totals of the three ledger tables.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerStats {
    pub patient_count: u64,
    pub doctor_count: u64,
    pub record_count: u64,
}

pub fn get_stats(env: &Env) -> LedgerStats {
    LedgerStats {
        patient_count: storage::read_counter(env, &PATIENT_COUNTER),
        doctor_count: storage::read_counter(env, &DOCTOR_COUNTER),
        record_count: storage::read_counter(env, &RECORD_COUNTER),
    }
}

pub(crate) fn record_patient(env: &Env) -> Result<(), ContractError> {
    storage::bump_counter(env, &PATIENT_COUNTER).map(|_| ())
}

pub(crate) fn record_doctor(env: &Env) -> Result<(), ContractError> {
    storage::bump_counter(env, &DOCTOR_COUNTER).map(|_| ())
}

/// Allocates the next record id. The id is the record count before the
/// append, so ids start at 0 and `record_count` stays equal to the number
/// of ids handed out.
pub(crate) fn allocate_record_id(env: &Env) -> Result<u64, ContractError> {
    storage::bump_counter(env, &RECORD_COUNTER)
}
