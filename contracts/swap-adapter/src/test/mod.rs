#![cfg(test)]

extern crate std;



use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, BytesN, Env,
};

use crate::{PermitParams, SwapAdapter, SwapAdapterClient};
use mock_router::{MockRouter, MockRouterClient};
use permit_token::{PermitToken, PermitTokenClient};

pub const INVENTORY: i128 = 1_000_000;
pub const USER_FUNDS: i128 = 10_000;
pub const FEE: u32 = 3000;

pub fn create_token<'a>(e: &Env, admin: &Address) -> (TokenClient<'a>, StellarAssetClient<'a>) {
    let sac = e.register_stellar_asset_contract_v2(admin.clone());
    (
        TokenClient::new(e, &sac.address()),
        StellarAssetClient::new(e, &sac.address()),
    )
}

pub struct SwapTest<'a> {
    pub env: Env,
    pub admin: Address,
    pub user: Address,
    pub adapter: SwapAdapterClient<'a>,
    pub router: MockRouterClient<'a>,
    pub native: TokenClient<'a>,
    pub wrapped: TokenClient<'a>,
    pub token_a: TokenClient<'a>,
    pub token_b: TokenClient<'a>,
    /// Source token that supports permits and failure injection
    pub permit_token: PermitTokenClient<'a>,
}

impl<'a> SwapTest<'a> {
    /// Adapter wired to a mock router; the router holds inventory of every
    /// token and the user holds `USER_FUNDS` of native, A and the permit token
    pub fn setup() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let user = Address::generate(&env);

        let (native, native_admin) = create_token(&env, &admin);
        let (wrapped, wrapped_admin) = create_token(&env, &admin);
        let (token_a, token_a_admin) = create_token(&env, &admin);
        let (token_b, token_b_admin) = create_token(&env, &admin);
        let permit_token = PermitTokenClient::new(&env, &env.register(PermitToken, ()));

        let adapter_id = env.register(
            SwapAdapter,
            (admin.clone(), native.address.clone(), wrapped.address.clone()),
        );
        let adapter = SwapAdapterClient::new(&env, &adapter_id);

        let router_id = env.register(
            MockRouter,
            (native.address.clone(), wrapped.address.clone()),
        );
        let router = MockRouterClient::new(&env, &router_id);

        native_admin.mint(&router_id, &INVENTORY);
        wrapped_admin.mint(&router_id, &INVENTORY);
        token_a_admin.mint(&router_id, &INVENTORY);
        token_b_admin.mint(&router_id, &INVENTORY);
        permit_token.mint(&router_id, &INVENTORY);
        router.sync_reserve();

        native_admin.mint(&user, &USER_FUNDS);
        token_a_admin.mint(&user, &USER_FUNDS);
        permit_token.mint(&user, &USER_FUNDS);

        adapter.initialize(&router_id);

        SwapTest {
            env,
            admin,
            user,
            adapter,
            router,
            native,
            wrapped,
            token_a,
            token_b,
            permit_token,
        }
    }

    /// Caller-side allowance for the adapter to pull `amount` of `token`
    pub fn allow(&self, token: &TokenClient, amount: i128) {
        token.approve(
            &self.user,
            &self.adapter.address,
            &amount,
            &(self.env.ledger().sequence() + 100),
        );
    }

    pub fn permit_for(&self, owner: &Address, spender: &Address, value: i128) -> PermitParams {
        PermitParams {
            owner: owner.clone(),
            spender: spender.clone(),
            value,
            deadline: self.env.ledger().timestamp() + 600,
            v: 27,
            r: BytesN::from_array(&self.env, &[7u8; 32]),
            s: BytesN::from_array(&self.env, &[9u8; 32]),
        }
    }
}
