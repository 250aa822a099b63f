//! Post-trade settlement: native payout and exact output refunds.

use soroban_sdk::{log, token, Address, Env};

use crate::custody::{revoke_router, Staged};
use crate::error::SwapAdapterError;
use crate::events;
use crate::router::SwapRouterClient;

/// Rejects a negative amount reported by the router before it is settled
/// or returned
pub fn check_reported_amount(amount: i128) -> Result<i128, SwapAdapterError> {
    if amount < 0 {
        Err(SwapAdapterError::NegativeRouterAmount)
    } else {
        Ok(amount)
    }
}

/// Has the router convert the wrapped proceeds it holds and pay `caller`
/// in native
pub fn deliver_native(
    e: &Env,
    router: &SwapRouterClient,
    amount: i128,
    caller: &Address,
) -> Result<(), SwapAdapterError> {
    if !matches!(router.try_unwrap_and_forward(&amount, caller), Ok(Ok(()))) {
        return Err(SwapAdapterError::UnwrapFailed);
    }
    log!(e, "native delivered", amount);
    Ok(())
}

/// Returns whatever part of the staged maximum the router did not spend
///
/// The router allowance is cleared before the refund so no approval
/// outlives the call.
pub fn reconcile_exact_output(
    e: &Env,
    router: &SwapRouterClient,
    staged: &Staged,
    spent: i128,
    caller: &Address,
) -> Result<(), SwapAdapterError> {
    let spent = check_reported_amount(spent)?;
    let unspent = staged
        .amount
        .checked_sub(spent)
        .filter(|unspent| *unspent >= 0)
        .ok_or(SwapAdapterError::RouterOverspent)?;
    if unspent == 0 {
        return Ok(());
    }

    if staged.native {
        router.refund_native(&e.current_contract_address());
    } else {
        revoke_router(e, &staged.token, &router.address)?;
    }

    let result = token::Client::new(e, &staged.token).try_transfer(
        &e.current_contract_address(),
        caller,
        &unspent,
    );
    if !matches!(result, Ok(Ok(()))) {
        return Err(SwapAdapterError::RefundFailed);
    }
    log!(e, "unspent input refunded", unspent);
    events::refunded(e, caller, &staged.token, unspent);
    Ok(())
}
