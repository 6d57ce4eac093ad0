#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod constants;
pub mod events;
pub mod fees;
pub mod metadata;
pub mod tokens;
pub mod whitelist;

use access_control::roles::Roles;

#[multiversx_sc::contract]
pub trait CertificateNft:
    access_control::AccessControl
    + access_control::roles::AccountRoles
    + config::ConfigModule
    + whitelist::WhitelistModule
    + tokens::TokensModule
    + metadata::MetadataModule
    + fees::FeesModule
    + events::EventsModule
{
    #[init]
    fn init(
        &self,
        base_uri: ManagedBuffer,
        not_revealed_uri: ManagedBuffer,
        mint_price: BigUint,
        max_supply: u64,
        max_per_address: u64,
        initial_whitelist: MultiValueEncoded<ManagedAddress>,
    ) {
        self.base_uri().set_if_empty(base_uri);
        self.not_revealed_uri().set_if_empty(not_revealed_uri);

        self.mint_price().set(mint_price);
        self.max_supply().set(max_supply);
        self.max_per_address().set(max_per_address);

        // Public mint starts closed; an admin has to open it explicitly
        self.paused().set(true);

        let caller = self.blockchain().get_caller();
        self.add_role(caller, Roles::ADMIN);

        for address in initial_whitelist.into_iter() {
            self.whitelist().add(&address);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[payable("EGLD")]
    #[endpoint(mint)]
    fn mint(&self, quantity: u64) -> MultiValueEncoded<u64> {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        let whitelisted = self.is_whitelisted(&caller);

        if !whitelisted {
            require!(!self.paused().get(), "Contract is paused");
        }

        require!(
            caller == self.blockchain().get_owner_address()
                || self.has_role(&caller, Roles::ADMIN | Roles::MINTER)
                || whitelisted,
            "Not allowed to mint"
        );

        require!(quantity > 0, "Zero mint amount");

        let last_token_id = self.last_token_id().get();
        require!(
            last_token_id + quantity <= self.max_supply().get(),
            "Max supply exceeded"
        );

        let minted_count_mapper = self.address_minted_count(&caller);
        let minted_count = minted_count_mapper.get();
        require!(
            minted_count + quantity <= self.max_per_address().get(),
            "Mint limit per address exceeded"
        );

        require!(
            payment == self.mint_price().get() * BigUint::from(quantity),
            "Wrong payment amount"
        );

        // Nothing was written so far; everything below commits together
        let first_token_id = last_token_id + 1;
        let new_last_token_id = last_token_id + quantity;

        let mut token_ids = MultiValueEncoded::new();
        for token_id in first_token_id..=new_last_token_id {
            self.token_owner(token_id).set(&caller);
            token_ids.push(token_id);
        }

        self.last_token_id().set(new_last_token_id);
        minted_count_mapper.set(minted_count + quantity);
        self.collected_fees().update(|fees| *fees += &payment);

        self.certificates_minted_event(&caller, first_token_id, new_last_token_id, &payment);

        token_ids
    }
}
