//! Interface of the minting authority this contract mints through.

use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "MintAuthorityClient")]
pub trait MintAuthority {
    /// Mints `amount` destination tokens to `to`; `minter` must hold the role.
    fn mint(env: Env, minter: Address, to: Address, amount: i128);

    /// Destination token the authority mints.
    fn get_token(env: Env) -> Address;
}
