#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::events::{
    AccessGrantedEvent, AccessRevokedEvent, DoctorRegisteredEvent, InitializedEvent,
    PatientRegisteredEvent, RecordAddedEvent,
};
use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::{vec, Env, IntoVal, Val};

const NOW: u64 = 1_700_000_000;

fn setup() -> (Env, MedicalRecordsContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(NOW);

    let contract_id = env.register(MedicalRecordsContract, ());
    let client = MedicalRecordsContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, client, admin)
}

fn s(env: &Env, value: &str) -> String {
    String::from_str(env, value)
}

/// The single event a successful invocation is expected to leave behind.
fn emitted(
    env: &Env,
    contract: &Address,
    topics: Vec<Val>,
    data: Val,
) -> Vec<(Address, Vec<Val>, Val)> {
    vec![env, (contract.clone(), topics, data)]
}

fn event_count(env: &Env) -> usize {
    env.events().all().events().len()
}

#[test]
fn test_initialize_emits_event() {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(NOW);
    let contract_id = env.register(MedicalRecordsContract, ());
    let client = MedicalRecordsContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    assert_eq!(
        env.events().all(),
        emitted(
            &env,
            &contract_id,
            (symbol_short!("INIT"),).into_val(&env),
            InitializedEvent {
                admin: admin.clone(),
                timestamp: NOW,
            }
            .into_val(&env),
        )
    );

    // a rejected second initialize leaves no event behind
    let _ = client.try_initialize(&admin);
    assert_eq!(event_count(&env), 0);
}

#[test]
fn test_registrations_emit_events() {
    let (env, client, admin) = setup();

    let patient = Address::generate(&env);
    client.register_patient(&patient, &s(&env, "Ada"), &0, &s(&env, ""), &s(&env, ""));
    assert_eq!(
        env.events().all(),
        emitted(
            &env,
            &client.address,
            (symbol_short!("PAT_REG"), patient.clone()).into_val(&env),
            PatientRegisteredEvent {
                patient: patient.clone(),
                name: s(&env, "Ada"),
                timestamp: NOW,
            }
            .into_val(&env),
        )
    );

    let doctor = Address::generate(&env);
    client.register_doctor(
        &admin,
        &doctor,
        &s(&env, "Dr. Event"),
        &s(&env, "Oncology"),
        &s(&env, "LIC-5"),
    );
    assert_eq!(
        env.events().all(),
        emitted(
            &env,
            &client.address,
            (symbol_short!("DOC_REG"), doctor.clone()).into_val(&env),
            DoctorRegisteredEvent {
                doctor: doctor.clone(),
                name: s(&env, "Dr. Event"),
                specialization: s(&env, "Oncology"),
                timestamp: NOW,
            }
            .into_val(&env),
        )
    );

    // duplicate registration fails and publishes nothing
    let _ = client.try_register_patient(
        &patient,
        &s(&env, "Ada"),
        &0,
        &s(&env, ""),
        &s(&env, ""),
    );
    assert_eq!(event_count(&env), 0);
}

#[test]
fn test_grant_and_revoke_emit_only_on_change() {
    let (env, client, admin) = setup();
    let patient = Address::generate(&env);
    client.register_patient(&patient, &s(&env, "Ada"), &0, &s(&env, ""), &s(&env, ""));
    let doctor = Address::generate(&env);
    client.register_doctor(
        &admin,
        &doctor,
        &s(&env, "Dr. Event"),
        &s(&env, "Oncology"),
        &s(&env, "LIC-5"),
    );

    client.grant_access(&patient, &doctor);
    assert_eq!(
        env.events().all(),
        emitted(
            &env,
            &client.address,
            (symbol_short!("ACC_GRT"), patient.clone(), doctor.clone()).into_val(&env),
            AccessGrantedEvent {
                patient: patient.clone(),
                doctor: doctor.clone(),
                timestamp: NOW,
            }
            .into_val(&env),
        )
    );

    client.grant_access(&patient, &doctor);
    assert_eq!(event_count(&env), 0);

    client.revoke_access(&patient, &doctor);
    assert_eq!(
        env.events().all(),
        emitted(
            &env,
            &client.address,
            (symbol_short!("ACC_REV"), patient.clone(), doctor.clone()).into_val(&env),
            AccessRevokedEvent {
                patient: patient.clone(),
                doctor: doctor.clone(),
                timestamp: NOW,
            }
            .into_val(&env),
        )
    );

    client.revoke_access(&patient, &doctor);
    assert_eq!(event_count(&env), 0);

    // never granted
    let stranger = Address::generate(&env);
    client.revoke_access(&patient, &stranger);
    assert_eq!(event_count(&env), 0);
}

#[test]
fn test_record_append_emits_identifiers_only() {
    let (env, client, admin) = setup();
    let patient = Address::generate(&env);
    client.register_patient(&patient, &s(&env, "Ada"), &0, &s(&env, ""), &s(&env, ""));
    let doctor = Address::generate(&env);
    client.register_doctor(
        &admin,
        &doctor,
        &s(&env, "Dr. Event"),
        &s(&env, "Oncology"),
        &s(&env, "LIC-5"),
    );
    client.grant_access(&patient, &doctor);

    let id = client.add_medical_record(
        &doctor,
        &patient,
        &s(&env, "melanoma"),
        &s(&env, "excision"),
        &s(&env, ""),
        &s(&env, ""),
    );
    assert_eq!(
        env.events().all(),
        emitted(
            &env,
            &client.address,
            (symbol_short!("REC_ADD"), patient.clone(), doctor.clone()).into_val(&env),
            RecordAddedEvent {
                record_id: id,
                patient: patient.clone(),
                doctor: doctor.clone(),
                timestamp: NOW,
            }
            .into_val(&env),
        )
    );

    // rejected append: no event
    let _ = client.try_add_medical_record(
        &doctor,
        &patient,
        &s(&env, ""),
        &s(&env, ""),
        &s(&env, ""),
        &s(&env, ""),
    );
    assert_eq!(event_count(&env), 0);
}

#[test]
fn test_read_only_calls_emit_nothing() {
    let (env, client, _admin) = setup();
    let patient = Address::generate(&env);
    client.register_patient(&patient, &s(&env, "Ada"), &0, &s(&env, ""), &s(&env, ""));

    client.get_patient(&patient);
    assert_eq!(event_count(&env), 0);
    client.get_stats();
    assert_eq!(event_count(&env), 0);
    client.get_patient_records(&patient, &patient, &0, &validation::MAX_PAGE_SIZE);
    assert_eq!(event_count(&env), 0);
}
