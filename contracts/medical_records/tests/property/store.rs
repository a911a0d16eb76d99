//! Property-based tests for registration and the record store.
//!
//! Invariants tested:
//! - Record ids are 0, 1, 2… in append order across all patients
//! - `get_patient_record_ids` equals the ids appended for that patient, in order
//! - `get_stats` equals the number of successful registrations and appends
//! - Registering the same patient twice always fails with `AlreadyExists`

use medical_records::{ContractError, MedicalRecordsContract, MedicalRecordsContractClient};
use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn setup() -> (Env, MedicalRecordsContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(MedicalRecordsContract, ());
    let client = MedicalRecordsContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, client, admin)
}

fn register_patient(env: &Env, client: &MedicalRecordsContractClient) -> Address {
    let patient = Address::generate(env);
    client.register_patient(
        &patient,
        &String::from_str(env, "Patient"),
        &0,
        &String::from_str(env, ""),
        &String::from_str(env, ""),
    );
    patient
}

fn register_doctor(
    env: &Env,
    client: &MedicalRecordsContractClient,
    admin: &Address,
) -> Address {
    let doctor = Address::generate(env);
    client.register_doctor(
        admin,
        &doctor,
        &String::from_str(env, "Dr. Prop"),
        &String::from_str(env, "General"),
        &String::from_str(env, "LIC-P"),
    );
    doctor
}

fn append(
    env: &Env,
    client: &MedicalRecordsContractClient,
    doctor: &Address,
    patient: &Address,
) -> u64 {
    let text = String::from_str(env, "observation");
    client.add_medical_record(doctor, patient, &text, &text, &text, &text)
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Appends spread over several patients receive consecutive global ids and
    /// each patient's index holds exactly its own ids in order.
    #[test]
    fn prop_ids_global_and_indexed(targets in prop::collection::vec(0usize..3, 1..16)) {
        let (env, client, admin) = setup();
        let doctor = register_doctor(&env, &client, &admin);
        let patients = [
            register_patient(&env, &client),
            register_patient(&env, &client),
            register_patient(&env, &client),
        ];
        for patient in patients.iter() {
            client.grant_access(patient, &doctor);
        }

        let mut expected: [std::vec::Vec<u64>; 3] = Default::default();
        for (n, target) in targets.iter().enumerate() {
            let id = append(&env, &client, &doctor, &patients[*target]);
            prop_assert_eq!(id, n as u64);
            expected[*target].push(id);
        }

        for (i, patient) in patients.iter().enumerate() {
            let stored = client.get_patient_record_ids(patient);
            prop_assert_eq!(stored.len() as usize, expected[i].len());
            for (pos, id) in expected[i].iter().enumerate() {
                prop_assert_eq!(stored.get(pos as u32), Some(*id));
            }
        }
        prop_assert_eq!(client.get_stats().record_count, targets.len() as u64);
    }

    /// Stats track successful registrations regardless of interleaved failures.
    #[test]
    fn prop_stats_ignore_failed_attempts(
        n_patients in 0usize..6,
        n_doctors in 0usize..4,
        n_duplicates in 0usize..4,
    ) {
        let (env, client, admin) = setup();
        let mut patients = std::vec::Vec::new();
        for _ in 0..n_patients {
            patients.push(register_patient(&env, &client));
        }
        for _ in 0..n_doctors {
            register_doctor(&env, &client, &admin);
        }

        if let Some(first) = patients.first() {
            for _ in 0..n_duplicates {
                let result = client.try_register_patient(
                    first,
                    &String::from_str(&env, "Dup"),
                    &0,
                    &String::from_str(&env, ""),
                    &String::from_str(&env, ""),
                );
                prop_assert_eq!(result, Err(Ok(ContractError::AlreadyExists)));
            }
        }
        for _ in 0..n_duplicates {
            let outsider = Address::generate(&env);
            let result = client.try_register_doctor(
                &outsider,
                &outsider,
                &String::from_str(&env, "Dr. Fake"),
                &String::from_str(&env, "None"),
                &String::from_str(&env, "X"),
            );
            prop_assert_eq!(result, Err(Ok(ContractError::Unauthorized)));
        }

        let stats = client.get_stats();
        prop_assert_eq!(stats.patient_count, n_patients as u64);
        prop_assert_eq!(stats.doctor_count, n_doctors as u64);
        prop_assert_eq!(stats.record_count, 0);
    }

    /// A stored record always reads back with the submitted fields.
    #[test]
    fn prop_record_matches_submission(diagnosis in "[a-z]{1,40}", notes in "[a-z ]{0,60}") {
        let (env, client, admin) = setup();
        let doctor = register_doctor(&env, &client, &admin);
        let patient = register_patient(&env, &client);
        client.grant_access(&patient, &doctor);

        let diagnosis = String::from_str(&env, &diagnosis);
        let notes = String::from_str(&env, &notes);
        let empty = String::from_str(&env, "");
        let id = client.add_medical_record(&doctor, &patient, &diagnosis, &empty, &empty, &notes);

        let record = client.get_medical_record(&patient, &id);
        prop_assert_eq!(record.diagnosis, diagnosis);
        prop_assert_eq!(record.notes, notes);
        prop_assert_eq!(record.doctor, doctor);
        prop_assert_eq!(record.patient, patient);
    }
}
