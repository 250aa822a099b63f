use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SwapAdapterError {
    /// Router address was already set
    AlreadyInitialized = 1,
    /// No router address set yet
    NotInitialized = 2,
    /// Native payment attached to the call does not cover the swap
    InsufficientNativePayment = 3,
    /// Pulling the source asset into custody failed
    TransferFailed = 4,
    /// Granting or clearing the router allowance failed
    ApprovalFailed = 5,
    /// Permit owner is not the caller or spender is not this contract
    InvalidPermitParties = 6,
    /// Token rejected the permit (expired, bad signature, wrong nonce)
    PermitRejected = 7,
    /// Router could not unwrap and forward the native proceeds
    UnwrapFailed = 8,
    /// Returning unspent input to the caller failed
    RefundFailed = 9,

    NegativeNotAllowed = 10,
    /// Permits only exist for tokenized assets
    PermitOnNativeAsset = 11,
    /// Router reported spending more than was staged
    RouterOverspent = 12,
    /// Router reported a negative amount
    NegativeRouterAmount = 13,
}
