#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use medical_records::{MedicalRecordsContract, MedicalRecordsContractClient};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    RegisterPatient { who: u8, name_len: u8 },
    RegisterDoctor { caller: u8, who: u8 },
    Grant { patient: u8, doctor: u8 },
    Revoke { patient: u8, doctor: u8 },
    AddRecord { doctor: u8, patient: u8, diagnosis_len: u16 },
    ReadRecord { caller: u8, record_id: u8 },
}

fn text(env: &Env, len: usize) -> String {
    let buf = [b'a'; 2100];
    String::from_bytes(env, &buf[..len.min(buf.len())])
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(MedicalRecordsContract, ());
    let client = MedicalRecordsContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let _ = client.try_initialize(&admin);

    // index 0 is always the admin
    let mut users = vec![admin.clone()];
    for _ in 0..6 {
        users.push(Address::generate(&env));
    }
    let pick = |i: u8| &users[i as usize % users.len()];

    let mut successful_records = 0u64;

    for action in actions {
        match action {
            FuzzAction::RegisterPatient { who, name_len } => {
                let name = text(&env, name_len as usize % 120);
                let _ = client.try_register_patient(
                    pick(who),
                    &name,
                    &0,
                    &text(&env, 1),
                    &text(&env, 0),
                );
            }
            FuzzAction::RegisterDoctor { caller, who } => {
                let _ = client.try_register_doctor(
                    pick(caller),
                    pick(who),
                    &text(&env, 8),
                    &text(&env, 8),
                    &text(&env, 8),
                );
            }
            FuzzAction::Grant { patient, doctor } => {
                let _ = client.try_grant_access(pick(patient), pick(doctor));
            }
            FuzzAction::Revoke { patient, doctor } => {
                let _ = client.try_revoke_access(pick(patient), pick(doctor));
            }
            FuzzAction::AddRecord {
                doctor,
                patient,
                diagnosis_len,
            } => {
                let diagnosis = text(&env, diagnosis_len as usize);
                let empty = text(&env, 0);
                if let Ok(Ok(id)) = client.try_add_medical_record(
                    pick(doctor),
                    pick(patient),
                    &diagnosis,
                    &empty,
                    &empty,
                    &empty,
                ) {
                    assert_eq!(id, successful_records);
                    successful_records += 1;
                }
            }
            FuzzAction::ReadRecord { caller, record_id } => {
                let _ = client.try_get_medical_record(pick(caller), &(record_id as u64));
            }
        }
    }

    let stats = client.get_stats();
    assert_eq!(stats.record_count, successful_records);
    for user in users.iter() {
        let ids = client.get_patient_record_ids(user);
        for pair in 1..ids.len() {
            assert!(ids.get(pair - 1) < ids.get(pair));
        }
    }
});
