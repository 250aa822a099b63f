use soroban_sdk::{contracttype, Address};

/// Asset accepted on either side of a swap
///
/// `Native` is the chain's native asset. The router never sees it: it is
/// translated to the wrapped token before the trade parameters are built.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Asset {
    Native,
    Token(Address),
}

impl Asset {
    pub fn is_native(&self) -> bool {
        matches!(self, Asset::Native)
    }
}

/// Native asset contract and its wrapped representation
///
/// Both addresses differ per network, so they are passed to the constructor
/// and stay fixed for the life of the contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NativeAssets {
    /// Token contract holding native balances
    pub native: Address,
    /// Wrapped token the router trades in place of `native`
    pub wrapped: Address,
}

impl NativeAssets {
    /// Address the router understands for `asset`
    pub fn resolve(&self, asset: &Asset) -> Address {
        match asset {
            Asset::Native => self.wrapped.clone(),
            Asset::Token(address) => address.clone(),
        }
    }

    /// Trade recipient for the given destination
    ///
    /// `None` tells the router to hold the wrapped proceeds so they can be
    /// unwrapped and forwarded afterwards.
    pub fn recipient_for(&self, dest: &Asset, caller: &Address) -> Option<Address> {
        if dest.is_native() {
            None
        } else {
            Some(caller.clone())
        }
    }
}
