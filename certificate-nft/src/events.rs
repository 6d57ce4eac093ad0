multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("certificates_minted_event")]
    fn certificates_minted_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] first_token_id: u64,
        #[indexed] last_token_id: u64,
        payment: &BigUint,
    );

    #[event("certificate_burned_event")]
    fn certificate_burned_event(&self, #[indexed] token_id: u64);

    #[event("collection_revealed_event")]
    fn collection_revealed_event(&self);

    #[event("mint_price_set_event")]
    fn mint_price_set_event(&self, mint_price: &BigUint);

    #[event("max_supply_set_event")]
    fn max_supply_set_event(&self, max_supply: u64);

    #[event("max_per_address_set_event")]
    fn max_per_address_set_event(&self, max_per_address: u64);

    #[event("paused_set_event")]
    fn paused_set_event(&self, paused: bool);

    #[event("fees_withdrawn_event")]
    fn fees_withdrawn_event(&self, #[indexed] receiver: &ManagedAddress, amount: &BigUint);
}
