multiversx_sc::imports!();

use crate::constants::ManagedBufferDecimal;
use crate::{events, tokens};

#[multiversx_sc::module]
pub trait MetadataModule:
    access_control::AccessControl
    + access_control::roles::AccountRoles
    + tokens::TokensModule
    + events::EventsModule
{
    /// One way switch; before it is flipped every certificate resolves to the
    /// same placeholder URI.
    #[endpoint(reveal)]
    fn reveal(&self) {
        self.only_admin();

        if self.revealed().get() {
            return;
        }

        self.revealed().set(true);

        self.collection_revealed_event();
    }

    #[view(tokenUri)]
    fn token_uri(&self, token_id: u64) -> ManagedBuffer {
        self.require_token_exists(token_id);

        if !self.revealed().get() {
            return self.not_revealed_uri().get();
        }

        let mut uri = self.base_uri().get();
        uri.append_bytes(b"/");
        uri.append_u64_dec(token_id);
        uri.append_bytes(b".json");

        uri
    }

    #[view(isRevealed)]
    #[storage_mapper("revealed")]
    fn revealed(&self) -> SingleValueMapper<bool>;

    #[view(getBaseUri)]
    #[storage_mapper("base_uri")]
    fn base_uri(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getNotRevealedUri)]
    #[storage_mapper("not_revealed_uri")]
    fn not_revealed_uri(&self) -> SingleValueMapper<ManagedBuffer>;
}
