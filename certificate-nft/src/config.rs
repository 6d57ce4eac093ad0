multiversx_sc::imports!();

use crate::events;

#[multiversx_sc::module]
pub trait ConfigModule:
    access_control::AccessControl + access_control::roles::AccountRoles + events::EventsModule
{
    #[endpoint(setMintPrice)]
    fn set_mint_price(&self, mint_price: BigUint) {
        self.only_admin();

        self.mint_price_set_event(&mint_price);

        self.mint_price().set(mint_price);
    }

    #[endpoint(setMaxSupply)]
    fn set_max_supply(&self, max_supply: u64) {
        self.only_admin();

        self.max_supply_set_event(max_supply);

        self.max_supply().set(max_supply);
    }

    #[endpoint(setMaxPerAddress)]
    fn set_max_per_address(&self, max_per_address: u64) {
        self.only_admin();

        self.max_per_address_set_event(max_per_address);

        self.max_per_address().set(max_per_address);
    }

    #[endpoint(setPaused)]
    fn set_paused(&self, paused: bool) {
        self.only_admin();

        self.paused_set_event(paused);

        self.paused().set(paused);
    }

    #[view(getMintPrice)]
    #[storage_mapper("mint_price")]
    fn mint_price(&self) -> SingleValueMapper<BigUint>;

    #[view(getMaxSupply)]
    #[storage_mapper("max_supply")]
    fn max_supply(&self) -> SingleValueMapper<u64>;

    #[view(getMaxPerAddress)]
    #[storage_mapper("max_per_address")]
    fn max_per_address(&self) -> SingleValueMapper<u64>;

    #[view(isPaused)]
    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;
}
