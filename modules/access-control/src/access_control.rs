#![no_std]

multiversx_sc::imports!();

pub mod roles;

use roles::Roles;

/// Role registry with a fixed role set and admin-gated membership mutation.
/// The role names themselves are closed at compile time; only membership
/// changes at runtime.
#[multiversx_sc::module]
pub trait AccessControl: roles::AccountRoles {
    #[endpoint(addUserToRole)]
    fn add_user_to_role(&self, role_name: ManagedBuffer, user: ManagedAddress) {
        let role = self.require_role_exists(&role_name);

        self.only_admin();

        self.add_role(user, role);
    }

    #[endpoint(removeUserFromRole)]
    fn remove_user_from_role(&self, role_name: ManagedBuffer, user: ManagedAddress) {
        let role = self.require_role_exists(&role_name);

        self.only_admin();

        self.remove_role(user, role);
    }

    #[view(roleExists)]
    fn role_exists(&self, role_name: &ManagedBuffer) -> bool {
        self.role_by_name(role_name).is_some()
    }

    #[view(isUserInRole)]
    fn is_user_in_role(&self, role_name: ManagedBuffer, user: ManagedAddress) -> bool {
        match self.role_by_name(&role_name) {
            Some(role) => self.has_role(&user, role),
            None => false,
        }
    }

    fn only_admin(&self) {
        let caller = self.blockchain().get_caller();

        require!(self.has_role(&caller, Roles::ADMIN), "Not admin");
    }

    fn require_role_exists(&self, role_name: &ManagedBuffer) -> Roles {
        match self.role_by_name(role_name) {
            Some(role) => role,
            None => sc_panic!("Role does not exist"),
        }
    }

    fn role_by_name(&self, role_name: &ManagedBuffer) -> Option<Roles> {
        if role_name == &ManagedBuffer::new_from_bytes(roles::ADMIN_ROLE_NAME) {
            return Some(Roles::ADMIN);
        }

        if role_name == &ManagedBuffer::new_from_bytes(roles::MINTER_ROLE_NAME) {
            return Some(Roles::MINTER);
        }

        None
    }
}
