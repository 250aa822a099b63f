use soroban_sdk::{contractclient, contracttype, Address, Env};

/// Single-pool exact input trade
#[contracttype]
#[derive(Clone, Debug)]
pub struct ExactInputSingleParams {
    pub token_in: Address,
    pub token_out: Address,
    /// Pool fee tier in hundredths of a bip (3000 = 0.3%)
    pub fee: u32,
    /// Account the router pulls `token_in` from, or the sender of the
    /// native amount forwarded ahead of the call
    pub payer: Address,
    /// `None` keeps the output in the router for post-processing
    pub recipient: Option<Address>,
    pub deadline: u64,
    pub amount_in: i128,
    pub amount_out_minimum: i128,
    pub sqrt_price_limit_x96: u128,
}

/// Single-pool exact output trade
#[contracttype]
#[derive(Clone, Debug)]
pub struct ExactOutputSingleParams {
    pub token_in: Address,
    pub token_out: Address,
    pub fee: u32,
    pub payer: Address,
    pub recipient: Option<Address>,
    pub deadline: u64,
    pub amount_out: i128,
    pub amount_in_maximum: i128,
    pub sqrt_price_limit_x96: u128,
}

/// Capabilities the adapter needs from the external router
#[contractclient(name = "SwapRouterClient")]
pub trait SwapRouterInterface {
    /// Returns the amount of `token_out` produced
    fn swap_exact_input_single(e: Env, params: ExactInputSingleParams) -> i128;

    /// Returns the amount of `token_in` spent
    fn swap_exact_output_single(e: Env, params: ExactOutputSingleParams) -> i128;

    /// Unwraps the wrapped native balance the router holds and sends it to
    /// `recipient` as native, failing when it is below `amount_minimum`
    fn unwrap_and_forward(e: Env, amount_minimum: i128, recipient: Address);

    /// Sends any native amount the router did not spend to `recipient`
    fn refund_native(e: Env, recipient: Address);
}

/// Deadline handed to the router
///
/// This is the current ledger timestamp, so the router's deadline check can
/// never fire for this adapter's trades. Callers that need protection against
/// delayed execution must bound it at the transaction level.
pub fn trade_deadline(e: &Env) -> u64 {
    e.ledger().timestamp()
}
