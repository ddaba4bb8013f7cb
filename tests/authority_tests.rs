#![cfg(test)]

use soroban_sdk::{testutils::Address as _, token, Address, Env};

use talent_factory::{FactoryError, TalentFactory, TalentFactoryClient};

fn setup_factory() -> (
    Env,
    Address, // admin
    token::Client<'static>,
    TalentFactoryClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let issuer = Address::generate(&env);
    let token_id = env.register_stellar_asset_contract_v2(issuer).address();

    let factory_id = env.register(TalentFactory, ());
    let factory = TalentFactoryClient::new(&env, &factory_id);
    token::StellarAssetClient::new(&env, &token_id).set_admin(&factory_id);

    let admin = Address::generate(&env);
    factory.initialize(&admin, &token_id);

    let talent = token::Client::new(&env, &token_id);
    (env, admin, talent, factory)
}

#[test]
fn test_latest_assignment_wins() {
    let (env, admin, talent, factory) = setup_factory();
    let x = Address::generate(&env);
    let y = Address::generate(&env);
    let holder = Address::generate(&env);

    factory.set_minter(&admin, &x);
    factory.set_minter(&admin, &y);

    assert_eq!(
        factory.try_mint(&x, &holder, &100),
        Err(Ok(FactoryError::Unauthorized))
    );
    factory.mint(&y, &holder, &100);

    assert_eq!(talent.balance(&holder), 100);
    assert_eq!(factory.get_minter(), Some(y));
}

#[test]
fn test_role_hand_over_chain() {
    let (env, admin, talent, factory) = setup_factory();
    let first = Address::generate(&env);
    let second = Address::generate(&env);
    let holder = Address::generate(&env);

    factory.set_minter(&admin, &first);
    factory.transfer_minter(&first, &second);

    assert_eq!(
        factory.try_mint(&first, &holder, &1),
        Err(Ok(FactoryError::Unauthorized))
    );
    factory.mint(&second, &holder, &7);

    factory.renounce_minter(&second);
    assert_eq!(factory.get_minter(), None);
    assert_eq!(
        factory.try_mint(&second, &holder, &1),
        Err(Ok(FactoryError::Unauthorized))
    );

    // The administrator can always reinstate a minter.
    factory.set_minter(&admin, &first);
    factory.mint(&first, &holder, &3);

    assert_eq!(talent.balance(&holder), 10);
    assert_eq!(factory.total_supply(), 10);
}

#[test]
fn test_token_admin_stays_with_factory() {
    let (env, admin, talent, factory) = setup_factory();
    let minter = Address::generate(&env);
    factory.set_minter(&admin, &minter);

    let sac = token::StellarAssetClient::new(&env, &talent.address);
    assert_eq!(sac.admin(), factory.address);
}
