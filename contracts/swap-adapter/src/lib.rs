#![no_std]
//! # Swap Adapter - Custody Pattern
//!
//! This contract sits in front of a concentrated-liquidity router and executes
//! single-pool swaps on behalf of a caller.
//!
//! ## Key Characteristics:
//! - Contract takes custody of the input before the trade
//! - Router is approved for exactly the staged amount, valid for the current ledger
//! - Native asset is accepted on either side and traded as its wrapped token
//! - Exact output trades refund the unspent input and clear the router allowance
//! - Token flow: User → Adapter → Router → User (or Router → unwrap → User for native)
//!
//! ## Atomicity:
//! Every entry point either completes or returns an error. On error the host
//! rolls back all transfers and approvals made during the call, including
//! those performed by the router.

use soroban_sdk::{contract, contractimpl, contracttype, log, symbol_short, Address, Env};

mod asset;
mod custody;
mod error;
mod events;
mod permit;
mod router;
mod settlement;
mod storage;

pub use asset::{Asset, NativeAssets};
pub use error::SwapAdapterError;
pub use permit::{PermitClient, PermitInterface, PermitParams};
pub use router::{
    ExactInputSingleParams, ExactOutputSingleParams, SwapRouterClient, SwapRouterInterface,
};

use custody::{forward_native, stage, stage_with_permit, Staged};
use router::trade_deadline;
use settlement::{check_reported_amount, deliver_native, reconcile_exact_output};
use storage::{
    extend_instance_ttl, get_admin, get_native_assets, get_router, has_router, set_admin,
    set_native_assets, set_router,
};

/// Exact input swap, as submitted alongside a permit
#[contracttype]
#[derive(Clone, Debug)]
pub struct ExactInputRequest {
    pub amount_in: i128,
    pub source_asset: Asset,
    pub dest_asset: Asset,
    pub pool_fee: u32,
}

/// Validates that the amount is non-negative
pub fn check_nonnegative_amount(amount: i128) -> Result<(), SwapAdapterError> {
    if amount < 0 {
        Err(SwapAdapterError::NegativeNotAllowed)
    } else {
        Ok(())
    }
}

#[contract]
pub struct SwapAdapter;

#[contractimpl]
impl SwapAdapter {
    /// Store the network constants
    ///
    /// ## Parameters:
    /// - `admin`: The only address allowed to call `initialize`
    /// - `native`: Token contract of the native asset
    /// - `wrapped`: Wrapped native token the router trades
    pub fn __constructor(e: Env, admin: Address, native: Address, wrapped: Address) {
        set_admin(&e, &admin);
        set_native_assets(&e, &NativeAssets { native, wrapped });
    }

    /// Set the router all swaps are delegated to. Can only be done once.
    pub fn initialize(e: Env, router: Address) -> Result<(), SwapAdapterError> {
        get_admin(&e).require_auth();
        if has_router(&e) {
            return Err(SwapAdapterError::AlreadyInitialized);
        }
        set_router(&e, &router);
        extend_instance_ttl(&e);

        events::initialized(&e, &router);
        Ok(())
    }

    /// Swap exactly `amount_in` of `source_asset` for as much `dest_asset`
    /// as the pool gives
    ///
    /// ## Parameters:
    /// - `caller`: The user executing the swap (must sign the transaction)
    /// - `amount_in`: Amount of `source_asset` to sell
    /// - `source_asset`: Asset being sold
    /// - `dest_asset`: Asset being bought; `Native` is paid out unwrapped
    /// - `pool_fee`: Fee tier of the pool to trade in
    /// - `native_payment`: Native amount the caller attaches; must cover
    ///   `amount_in` when `source_asset` is `Native`, ignored otherwise
    ///
    /// ## Returns:
    /// Amount of `dest_asset` received by the caller
    pub fn swap_exact_input_single(
        e: Env,
        caller: Address,
        amount_in: i128,
        source_asset: Asset,
        dest_asset: Asset,
        pool_fee: u32,
        native_payment: i128,
    ) -> Result<i128, SwapAdapterError> {
        caller.require_auth();
        check_nonnegative_amount(amount_in)?;
        if source_asset.is_native() {
            check_nonnegative_amount(native_payment)?;
        }
        extend_instance_ttl(&e);

        let router = get_router(&e)?;
        let assets = get_native_assets(&e);
        let request = ExactInputRequest {
            amount_in,
            source_asset,
            dest_asset,
            pool_fee,
        };

        let staged = stage(
            &e,
            &caller,
            &request.source_asset,
            amount_in,
            native_payment,
            &assets,
            &router,
        )?;
        execute_exact_input(&e, &caller, &request, &staged, &assets, &router)
    }

    /// Exact input swap whose token allowance comes from a signed permit
    ///
    /// The permit must name the caller as owner and this contract as
    /// spender; it is checked before any funds move.
    pub fn swap_exact_input_single_permit(
        e: Env,
        caller: Address,
        request: ExactInputRequest,
        permit: PermitParams,
    ) -> Result<i128, SwapAdapterError> {
        caller.require_auth();
        check_nonnegative_amount(request.amount_in)?;
        extend_instance_ttl(&e);

        let router = get_router(&e)?;
        let assets = get_native_assets(&e);

        let staged = stage_with_permit(
            &e,
            &caller,
            &request.source_asset,
            request.amount_in,
            &permit,
            &assets,
            &router,
        )?;
        execute_exact_input(&e, &caller, &request, &staged, &assets, &router)
    }

    /// Buy exactly `amount_out` of `dest_asset`, spending at most
    /// `amount_in_maximum` of `source_asset`
    ///
    /// The full maximum is staged up front. Whatever the router leaves
    /// unspent goes back to the caller and the router allowance is cleared.
    ///
    /// ## Returns:
    /// Amount of `source_asset` actually spent
    ///
    /// `native_payment` follows the same rule as in `swap_exact_input_single`
    /// and must cover `amount_in_maximum` for a `Native` source.
    pub fn swap_exact_output_single(
        e: Env,
        caller: Address,
        amount_out: i128,
        amount_in_maximum: i128,
        source_asset: Asset,
        dest_asset: Asset,
        pool_fee: u32,
        native_payment: i128,
    ) -> Result<i128, SwapAdapterError> {
        caller.require_auth();
        check_nonnegative_amount(amount_out)?;
        check_nonnegative_amount(amount_in_maximum)?;
        if source_asset.is_native() {
            check_nonnegative_amount(native_payment)?;
        }
        extend_instance_ttl(&e);

        let router_address = get_router(&e)?;
        let assets = get_native_assets(&e);

        let staged = stage(
            &e,
            &caller,
            &source_asset,
            amount_in_maximum,
            native_payment,
            &assets,
            &router_address,
        )?;
        if staged.native {
            forward_native(&e, &staged, &router_address);
        }

        let router = SwapRouterClient::new(&e, &router_address);
        let amount_in = router.swap_exact_output_single(&ExactOutputSingleParams {
            token_in: assets.resolve(&source_asset),
            token_out: assets.resolve(&dest_asset),
            fee: pool_fee,
            payer: e.current_contract_address(),
            recipient: assets.recipient_for(&dest_asset, &caller),
            deadline: trade_deadline(&e),
            amount_out,
            amount_in_maximum,
            sqrt_price_limit_x96: 0,
        });
        log!(&e, "exact output routed", amount_in, amount_out);
        let amount_in = check_reported_amount(amount_in)?;

        if dest_asset.is_native() {
            deliver_native(&e, &router, amount_out, &caller)?;
        }
        reconcile_exact_output(&e, &router, &staged, amount_in, &caller)?;

        events::swapped(
            &e,
            symbol_short!("exact_out"),
            &caller,
            &source_asset,
            &dest_asset,
            amount_in,
            amount_out,
        );
        Ok(amount_in)
    }

    pub fn router(e: Env) -> Result<Address, SwapAdapterError> {
        get_router(&e)
    }

    pub fn native_assets(e: Env) -> NativeAssets {
        get_native_assets(&e)
    }

    pub fn admin(e: Env) -> Address {
        get_admin(&e)
    }
}

fn execute_exact_input(
    e: &Env,
    caller: &Address,
    request: &ExactInputRequest,
    staged: &Staged,
    assets: &NativeAssets,
    router_address: &Address,
) -> Result<i128, SwapAdapterError> {
    if staged.native {
        forward_native(e, staged, router_address);
    }

    let router = SwapRouterClient::new(e, router_address);
    let amount_out = router.swap_exact_input_single(&ExactInputSingleParams {
        token_in: assets.resolve(&request.source_asset),
        token_out: assets.resolve(&request.dest_asset),
        fee: request.pool_fee,
        payer: e.current_contract_address(),
        recipient: assets.recipient_for(&request.dest_asset, caller),
        deadline: trade_deadline(e),
        amount_in: staged.amount,
        // Slippage bounds are the router's and caller's concern
        amount_out_minimum: 0,
        sqrt_price_limit_x96: 0,
    });
    log!(e, "exact input routed", staged.amount, amount_out);
    let amount_out = check_reported_amount(amount_out)?;

    if request.dest_asset.is_native() {
        deliver_native(e, &router, amount_out, caller)?;
    }

    events::swapped(
        e,
        symbol_short!("exact_in"),
        caller,
        &request.source_asset,
        &request.dest_asset,
        staged.amount,
        amount_out,
    );
    Ok(amount_out)
}

#[cfg(test)]
mod test;
