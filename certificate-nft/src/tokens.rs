multiversx_sc::imports!();

use crate::events;

/// Certificate ledger. Ids are assigned sequentially starting from 1, so
/// `last_token_id` doubles as the total ever minted; burning clears ownership
/// but never lowers the per-address minted count.
#[multiversx_sc::module]
pub trait TokensModule:
    access_control::AccessControl + access_control::roles::AccountRoles + events::EventsModule
{
    #[endpoint(burn)]
    fn burn(&self, token_id: u64) {
        self.only_admin();

        let token_owner_mapper = self.token_owner(token_id);
        require!(!token_owner_mapper.is_empty(), "Token does not exist");

        token_owner_mapper.clear();

        self.certificate_burned_event(token_id);
    }

    #[view(ownerOf)]
    fn owner_of(&self, token_id: u64) -> ManagedAddress {
        let token_owner_mapper = self.token_owner(token_id);

        require!(!token_owner_mapper.is_empty(), "Token does not exist");

        token_owner_mapper.get()
    }

    fn require_token_exists(&self, token_id: u64) {
        require!(
            !self.token_owner(token_id).is_empty(),
            "Token does not exist"
        );
    }

    #[view(getLastTokenId)]
    #[storage_mapper("last_token_id")]
    fn last_token_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("token_owner")]
    fn token_owner(&self, token_id: u64) -> SingleValueMapper<ManagedAddress>;

    #[view(getAddressMintedCount)]
    #[storage_mapper("address_minted_count")]
    fn address_minted_count(&self, address: &ManagedAddress) -> SingleValueMapper<u64>;
}
