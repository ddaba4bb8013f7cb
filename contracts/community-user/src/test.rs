#![cfg(test)]

use super::*;
use soroban_sdk::testutils::{Address as _, Events as _};
use soroban_sdk::{symbol_short, vec, Address, Env, String, Symbol, TryFromVal, Vec};

fn create_contract<'a>() -> (Env, Address, CommunityUserClient<'a>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(CommunityUser, ());
    let client = CommunityUserClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin, &String::from_str(&env, "TALUSERS1"));

    (env, admin, client)
}

fn members(env: &Env, count: u32) -> Vec<Address> {
    let mut recipients = Vec::new(env);
    for _ in 0..count {
        recipients.push_back(Address::generate(env));
    }
    recipients
}

#[test]
fn test_metadata() {
    let (env, admin, client) = create_contract();

    assert_eq!(
        client.name(),
        String::from_str(&env, "Talent Protocol Community User")
    );
    assert_eq!(client.symbol(), String::from_str(&env, "TALUSERS1"));
    assert_eq!(client.get_admin(), admin);
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_cannot_initialize_twice() {
    let (env, admin, client) = create_contract();

    let result = client.try_initialize(&admin, &String::from_str(&env, "OTHER"));
    assert_eq!(result, Err(Ok(CommunityUserError::AlreadyInitialized)));
}

#[test]
fn test_initialize_requires_admin_auth() {
    let env = Env::default();
    let contract_id = env.register(CommunityUser, ());
    let client = CommunityUserClient::new(&env, &contract_id);
    let admin = Address::generate(&env);

    // No authorization from `admin` was given.
    let result = client.try_initialize(&admin, &String::from_str(&env, "TALUSERS1"));
    assert!(result.is_err());
    assert_eq!(client.try_get_admin(), Err(Ok(CommunityUserError::NotInitialized)));
}

#[test]
fn test_initialize_records_admin_auth() {
    let (env, admin, _client) = create_contract();

    let auths = env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, admin);
}

#[test]
fn test_airdrop_assigns_sequential_ids() {
    let (env, admin, client) = create_contract();
    let recipients = members(&env, 3);

    let ids = client.airdrop(&admin, &recipients);

    assert_eq!(ids, vec![&env, 1u64, 2, 3]);
    for (i, recipient) in recipients.iter().enumerate() {
        let id = i as u64 + 1;
        assert_eq!(client.owner_of(&id), recipient);
        assert_eq!(client.token_of(&recipient), id);
        assert_eq!(client.balance_of(&recipient), 1);
    }
    assert_eq!(client.total_supply(), 3);

    // Numbering continues across airdrops
    let later = members(&env, 2);
    assert_eq!(client.airdrop(&admin, &later), vec![&env, 4u64, 5]);
    assert_eq!(client.total_supply(), 5);
}

#[test]
fn test_non_admin_cannot_airdrop() {
    let (env, _admin, client) = create_contract();
    let outsider = Address::generate(&env);

    let result = client.try_airdrop(&outsider, &members(&env, 1));
    assert_eq!(result, Err(Ok(CommunityUserError::Unauthorized)));
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_airdrop_batch_limits() {
    let (env, admin, client) = create_contract();

    assert_eq!(
        client.try_airdrop(&admin, &Vec::new(&env)),
        Err(Ok(CommunityUserError::EmptyBatch))
    );
    assert_eq!(
        client.try_airdrop(&admin, &members(&env, MAX_BATCH_SIZE + 1)),
        Err(Ok(CommunityUserError::BatchTooLarge))
    );
}

#[test]
fn test_one_credential_per_address() {
    let (env, admin, client) = create_contract();
    let member = Address::generate(&env);
    let newcomer = Address::generate(&env);

    client.airdrop(&admin, &vec![&env, member.clone()]);

    let result = client.try_airdrop(&admin, &vec![&env, newcomer.clone(), member.clone()]);
    assert_eq!(result, Err(Ok(CommunityUserError::AlreadyMember)));

    // Nothing from the rejected batch was issued
    assert_eq!(client.balance_of(&newcomer), 0);
    assert_eq!(client.total_supply(), 1);

    let duplicated = vec![&env, newcomer.clone(), newcomer.clone()];
    assert_eq!(
        client.try_airdrop(&admin, &duplicated),
        Err(Ok(CommunityUserError::AlreadyMember))
    );
}

#[test]
fn test_unknown_credential() {
    let (env, _admin, client) = create_contract();

    assert_eq!(client.try_owner_of(&1), Err(Ok(CommunityUserError::NotFound)));
    assert_eq!(
        client.try_token_of(&Address::generate(&env)),
        Err(Ok(CommunityUserError::NotFound))
    );
}

#[test]
fn test_credentials_are_non_transferable() {
    let (env, admin, client) = create_contract();
    let member = Address::generate(&env);
    let other = Address::generate(&env);
    client.airdrop(&admin, &vec![&env, member.clone()]);

    assert_eq!(
        client.try_transfer(&member, &other, &1),
        Err(Ok(CommunityUserError::NonTransferable))
    );
    assert_eq!(
        client.try_transfer_from(&other, &member, &other, &1),
        Err(Ok(CommunityUserError::NonTransferable))
    );
    assert_eq!(client.owner_of(&1), member);
}

#[test]
fn test_airdrop_emits_event_per_credential() {
    let (env, admin, client) = create_contract();

    client.airdrop(&admin, &members(&env, 3));

    let events = env.events().all();
    let issued = events
        .iter()
        .filter(|event| {
            event.1.iter().any(|topic| {
                symbol_short!("issued")
                    == Symbol::try_from_val(&env, &topic).unwrap_or(symbol_short!(""))
            })
        })
        .count();
    assert_eq!(issued, 3);
}
