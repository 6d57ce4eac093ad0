multiversx_sc::imports!();

/// Addresses allowed to mint while the public mint is still paused.
#[multiversx_sc::module]
pub trait WhitelistModule:
    access_control::AccessControl + access_control::roles::AccountRoles
{
    #[endpoint(addToWhitelist)]
    fn add_to_whitelist(&self, address: ManagedAddress) {
        self.only_admin();

        self.whitelist_added_event(&address);

        self.whitelist().add(&address);
    }

    #[endpoint(removeFromWhitelist)]
    fn remove_from_whitelist(&self, address: ManagedAddress) {
        self.only_admin();

        self.whitelist_removed_event(&address);

        self.whitelist().remove(&address);
    }

    #[view(isWhitelisted)]
    fn is_whitelisted(&self, address: &ManagedAddress) -> bool {
        self.whitelist().contains(address)
    }

    #[storage_mapper("whitelist")]
    fn whitelist(&self) -> WhitelistMapper<ManagedAddress>;

    #[event("whitelist_added_event")]
    fn whitelist_added_event(&self, #[indexed] address: &ManagedAddress);

    #[event("whitelist_removed_event")]
    fn whitelist_removed_event(&self, #[indexed] address: &ManagedAddress);
}
