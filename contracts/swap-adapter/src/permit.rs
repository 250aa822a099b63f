use soroban_sdk::{contractclient, contracttype, Address, BytesN, Env};

/// Signed allowance grant, checked by the source token
#[contracttype]
#[derive(Clone, Debug)]
pub struct PermitParams {
    pub owner: Address,
    pub spender: Address,
    pub value: i128,
    pub deadline: u64,
    pub v: u32,
    pub r: BytesN<32>,
    pub s: BytesN<32>,
}

/// Tokens that accept a signature in place of an `approve` call
#[contractclient(name = "PermitClient")]
pub trait PermitInterface {
    fn permit(
        e: Env,
        owner: Address,
        spender: Address,
        value: i128,
        deadline: u64,
        v: u32,
        r: BytesN<32>,
        s: BytesN<32>,
    );
}
