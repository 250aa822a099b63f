use soroban_sdk::{contracttype, Address, Env};

use crate::asset::NativeAssets;
use crate::error::SwapAdapterError;

const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - 4 * DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Admin,
    NativeAssets,
    Router,
}

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// Admin

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(e: &Env) -> Address {
    // Written by the constructor, always present
    e.storage().instance().get(&DataKey::Admin).unwrap()
}

// Native assets

pub fn set_native_assets(e: &Env, assets: &NativeAssets) {
    e.storage().instance().set(&DataKey::NativeAssets, assets);
}

pub fn get_native_assets(e: &Env) -> NativeAssets {
    // Written by the constructor, always present
    e.storage().instance().get(&DataKey::NativeAssets).unwrap()
}

// Router

pub fn has_router(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Router)
}

pub fn set_router(e: &Env, router: &Address) {
    e.storage().instance().set(&DataKey::Router, router);
}

pub fn get_router(e: &Env) -> Result<Address, SwapAdapterError> {
    e.storage()
        .instance()
        .get(&DataKey::Router)
        .ok_or(SwapAdapterError::NotInitialized)
}
