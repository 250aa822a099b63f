use soroban_sdk::{contractevent, Address, Env, Symbol};

use crate::asset::Asset;

#[contractevent]
pub struct Initialized {
    pub router: Address,
}

#[contractevent]
pub struct Swapped {
    #[topic]
    pub caller: Address,
    /// `exact_in` or `exact_out`
    pub kind: Symbol,
    pub source: Asset,
    pub dest: Asset,
    pub amount_in: i128,
    pub amount_out: i128,
}

#[contractevent]
pub struct Refunded {
    #[topic]
    pub caller: Address,
    pub token: Address,
    pub amount: i128,
}

pub fn initialized(e: &Env, router: &Address) {
    Initialized {
        router: router.clone(),
    }
    .publish(e);
}

pub fn swapped(
    e: &Env,
    kind: Symbol,
    caller: &Address,
    source: &Asset,
    dest: &Asset,
    amount_in: i128,
    amount_out: i128,
) {
    Swapped {
        caller: caller.clone(),
        kind,
        source: source.clone(),
        dest: dest.clone(),
        amount_in,
        amount_out,
    }
    .publish(e);
}

pub fn refunded(e: &Env, caller: &Address, token: &Address, amount: i128) {
    Refunded {
        caller: caller.clone(),
        token: token.clone(),
        amount,
    }
    .publish(e);
}
