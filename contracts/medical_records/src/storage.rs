use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::errors::ContractError;

// ── Instance keys ────────────────────────────────────────────

pub(crate) const ADMIN: Symbol = symbol_short!("ADMIN");
pub(crate) const INITIALIZED: Symbol = symbol_short!("INIT");
pub(crate) const PATIENT_COUNTER: Symbol = symbol_short!("PAT_CTR");
pub(crate) const DOCTOR_COUNTER: Symbol = symbol_short!("DOC_CTR");
/// Doubles as the id allocator: the next record id is the current count.
pub(crate) const RECORD_COUNTER: Symbol = symbol_short!("REC_CTR");

// ── Persistent key prefixes ──────────────────────────────────

const PATIENT: Symbol = symbol_short!("PATIENT");
const DOCTOR: Symbol = symbol_short!("DOCTOR");
const GRANT: Symbol = symbol_short!("GRANT");
const GRANTEES: Symbol = symbol_short!("GRANTEES");
const RECORD: Symbol = symbol_short!("RECORD");

const TTL_THRESHOLD: u32 = 518_400;
const TTL_EXTEND_TO: u32 = 3_110_400;

pub(crate) fn patient_key(patient: &Address) -> (Symbol, Address) {
    (PATIENT, patient.clone())
}

pub(crate) fn doctor_key(doctor: &Address) -> (Symbol, Address) {
    (DOCTOR, doctor.clone())
}

pub(crate) fn grant_key(patient: &Address, doctor: &Address) -> (Symbol, Address, Address) {
    (GRANT, patient.clone(), doctor.clone())
}

pub(crate) fn grantees_key(patient: &Address) -> (Symbol, Address) {
    (GRANTEES, patient.clone())
}

pub(crate) fn record_key(record_id: u64) -> (Symbol, u64) {
    (RECORD, record_id)
}

/// Extends the TTL of an address-keyed persistent entry.
pub(crate) fn extend_ttl_address_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends the TTL of a grant entry.
pub(crate) fn extend_ttl_grant_key(env: &Env, key: &(Symbol, Address, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends the TTL of a record entry.
pub(crate) fn extend_ttl_u64_key(env: &Env, key: &(Symbol, u64)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Instance TTL covers the admin, the init flag and all three counters.
pub(crate) fn extend_ttl_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub(crate) fn read_counter(env: &Env, key: &Symbol) -> u64 {
    env.storage().instance().get(key).unwrap_or(0)
}

/// Increments a counter and returns the value it held before.
///
/// Fails instead of wrapping or saturating: the record counter is also the
/// id allocator, and a repeated value would overwrite an existing record.
pub(crate) fn bump_counter(env: &Env, key: &Symbol) -> Result<u64, ContractError> {
    let current = read_counter(env, key);
    let next = current
        .checked_add(1)
        .ok_or(ContractError::CounterOverflow)?;
    env.storage().instance().set(key, &next);
    extend_ttl_instance(env);
    Ok(current)
}
