multiversx_sc::imports!();

use crate::events;

/// Mint payments accumulate here until an admin withdraws them to the
/// contract owner.
#[multiversx_sc::module]
pub trait FeesModule:
    access_control::AccessControl + access_control::roles::AccountRoles + events::EventsModule
{
    #[endpoint(withdraw)]
    fn withdraw(&self) {
        self.only_admin();

        let collected_fees_mapper = self.collected_fees();
        let amount = collected_fees_mapper.get();

        if amount == 0 {
            return;
        }

        collected_fees_mapper.clear();

        let owner = self.blockchain().get_owner_address();
        self.send().direct_egld(&owner, &amount);

        self.fees_withdrawn_event(&owner, &amount);
    }

    #[view(getCollectedFees)]
    #[storage_mapper("collected_fees")]
    fn collected_fees(&self) -> SingleValueMapper<BigUint>;
}
