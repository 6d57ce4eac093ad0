multiversx_sc::imports!();
use bitflags::bitflags;
use multiversx_sc::abi::TypeName;

pub const ADMIN_ROLE_NAME: &[u8] = b"ADMIN";
pub const MINTER_ROLE_NAME: &[u8] = b"MINTER";

bitflags! {
    #[derive(PartialEq, Copy, Clone)]
    pub struct Roles: u8 {
        const ADMIN = 0b00000001;
        const MINTER = 0b00000010;
    }
}

impl TopEncode for Roles {
    fn top_encode<O>(&self, output: O) -> Result<(), multiversx_sc::codec::EncodeError>
    where
        O: multiversx_sc::codec::TopEncodeOutput,
    {
        u8::top_encode(&self.bits(), output)
    }
}

impl TopDecode for Roles {
    fn top_decode<I>(input: I) -> Result<Self, DecodeError>
    where
        I: multiversx_sc::codec::TopDecodeInput,
    {
        let bits = u8::top_decode(input)?;
        Roles::from_bits(bits).ok_or(DecodeError::INVALID_VALUE)
    }
}

impl TypeAbi for Roles {
    fn type_name() -> TypeName {
        TypeName::from("u8")
    }
}

#[multiversx_sc::module]
pub trait AccountRoles {
    fn has_role(&self, address: &ManagedAddress, roles: Roles) -> bool {
        let account_roles_mapper = self.account_roles(address);

        if account_roles_mapper.is_empty() {
            return false;
        }

        let account_roles = account_roles_mapper.get();

        account_roles.intersects(roles)
    }

    fn add_role(&self, address: ManagedAddress, new_roles: Roles) {
        self.roles_added_event(&address, new_roles);

        self.account_roles(&address).update(|roles| {
            roles.insert(new_roles);
        });
    }

    fn remove_role(&self, address: ManagedAddress, old_roles: Roles) {
        self.roles_removed_event(&address, old_roles);

        self.account_roles(&address).update(|roles| {
            roles.remove(old_roles);
        });
    }

    #[view(getAccountRoles)]
    #[storage_mapper("account_roles")]
    fn account_roles(&self, address: &ManagedAddress) -> SingleValueMapper<Roles>;

    #[event("roles_added_event")]
    fn roles_added_event(&self, #[indexed] address: &ManagedAddress, roles: Roles);

    #[event("roles_removed_event")]
    fn roles_removed_event(&self, #[indexed] address: &ManagedAddress, roles: Roles);
}
