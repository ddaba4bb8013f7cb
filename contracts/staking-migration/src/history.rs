//! Append-only conversion history.
//!
//! Records live in an arena keyed by a global sequence number; each participant has
//! an index of their record ids in insertion order.

use soroban_sdk::{Address, Env, Vec};

use crate::types::{ConversionRecord, DataKey};

pub fn count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::RecordCount)
        .unwrap_or(0)
}

pub fn next_id(env: &Env) -> u64 {
    count(env) + 1
}

/// Stores `record` under its id and indexes it for its participant.
pub fn append(env: &Env, record: &ConversionRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::Record(record.id), record);
    env.storage()
        .instance()
        .set(&DataKey::RecordCount, &record.id);

    let key = DataKey::Participant(record.participant.clone());
    let mut ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env));
    ids.push_back(record.id);
    env.storage().persistent().set(&key, &ids);
}

pub fn get(env: &Env, id: u64) -> Option<ConversionRecord> {
    env.storage().persistent().get(&DataKey::Record(id))
}

/// Records of `participant`, oldest first.
pub fn records_of(env: &Env, participant: &Address) -> Vec<ConversionRecord> {
    let ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&DataKey::Participant(participant.clone()))
        .unwrap_or(Vec::new(env));

    let mut records = Vec::new(env);
    for id in ids.iter() {
        if let Some(record) = get(env, id) {
            records.push_back(record);
        }
    }
    records
}
