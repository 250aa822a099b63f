//! Moves the source asset into custody and gives the router exactly what it
//! needs to pull.

use soroban_sdk::{log, token, Address, Env};

use crate::asset::{Asset, NativeAssets};
use crate::error::SwapAdapterError;
use crate::permit::{PermitClient, PermitParams};

/// Source funds held by the adapter for the duration of one swap
#[derive(Clone, Debug)]
pub struct Staged {
    /// Token contract the funds are held in (the native token contract for
    /// native payments)
    pub token: Address,
    pub amount: i128,
    /// Native payments are forwarded to the router instead of approved
    pub native: bool,
}

/// Takes `amount` of `source` from `caller` and, for tokens, approves the
/// router for that exact amount
pub fn stage(
    e: &Env,
    caller: &Address,
    source: &Asset,
    amount: i128,
    native_payment: i128,
    assets: &NativeAssets,
    router: &Address,
) -> Result<Staged, SwapAdapterError> {
    match source {
        Asset::Native => stage_native(e, caller, amount, native_payment, assets),
        Asset::Token(token) => {
            pull(e, caller, token, amount)?;
            approve_router(e, token, router, amount)?;
            Ok(Staged {
                token: token.clone(),
                amount,
                native: false,
            })
        }
    }
}

/// Same as [`stage`] for a token source, preceded by the permit that grants
/// this contract its allowance
pub fn stage_with_permit(
    e: &Env,
    caller: &Address,
    source: &Asset,
    amount: i128,
    permit: &PermitParams,
    assets: &NativeAssets,
    router: &Address,
) -> Result<Staged, SwapAdapterError> {
    if permit.owner != *caller || permit.spender != e.current_contract_address() {
        return Err(SwapAdapterError::InvalidPermitParties);
    }
    let token = match source {
        Asset::Native => return Err(SwapAdapterError::PermitOnNativeAsset),
        Asset::Token(token) => token,
    };

    let result = PermitClient::new(e, token).try_permit(
        &permit.owner,
        &permit.spender,
        &permit.value,
        &permit.deadline,
        &permit.v,
        &permit.r,
        &permit.s,
    );
    if !matches!(result, Ok(Ok(()))) {
        return Err(SwapAdapterError::PermitRejected);
    }
    log!(e, "permit accepted", permit.value);

    stage(e, caller, source, amount, 0, assets, router)
}

fn stage_native(
    e: &Env,
    caller: &Address,
    amount: i128,
    native_payment: i128,
    assets: &NativeAssets,
) -> Result<Staged, SwapAdapterError> {
    if native_payment < amount {
        return Err(SwapAdapterError::InsufficientNativePayment);
    }
    let native = token::Client::new(e, &assets.native);
    let result = native.try_transfer(caller, &e.current_contract_address(), &amount);
    if !matches!(result, Ok(Ok(()))) {
        return Err(SwapAdapterError::TransferFailed);
    }
    log!(e, "native payment staged", amount);

    Ok(Staged {
        token: assets.native.clone(),
        amount,
        native: true,
    })
}

/// Pulls `amount` of `token` from `caller` against the allowance the caller
/// granted this contract
fn pull(e: &Env, caller: &Address, token: &Address, amount: i128) -> Result<(), SwapAdapterError> {
    let this = e.current_contract_address();
    let result = token::Client::new(e, token).try_transfer_from(&this, caller, &this, &amount);
    if !matches!(result, Ok(Ok(()))) {
        return Err(SwapAdapterError::TransferFailed);
    }
    log!(e, "source staged", amount);
    Ok(())
}

/// Allowance for the router, valid for the current ledger only
pub fn approve_router(
    e: &Env,
    token: &Address,
    router: &Address,
    amount: i128,
) -> Result<(), SwapAdapterError> {
    let result = token::Client::new(e, token).try_approve(
        &e.current_contract_address(),
        router,
        &amount,
        &e.ledger().sequence(),
    );
    if !matches!(result, Ok(Ok(()))) {
        return Err(SwapAdapterError::ApprovalFailed);
    }
    Ok(())
}

pub fn revoke_router(e: &Env, token: &Address, router: &Address) -> Result<(), SwapAdapterError> {
    approve_router(e, token, router, 0)
}

/// Sends a staged native payment to the router ahead of the swap call
pub fn forward_native(e: &Env, staged: &Staged, router: &Address) {
    token::Client::new(e, &staged.token).transfer(
        &e.current_contract_address(),
        router,
        &staged.amount,
    );
}
