multiversx_sc::imports!();

use crate::types::QuorumStatus;

// ============================================================
// Quorum Module
//
// A fixed roster of managers must unanimously confirm before a
// guarded mutation is allowed. Confirmations are idempotent and
// are cleared as a whole after every successful guarded change,
// so the next change again starts from zero.
// ============================================================

#[multiversx_sc::module]
pub trait QuorumModule {
    // ========================================================
    // ENDPOINT: confirm
    // Managers register their agreement to the next guarded
    // change. Confirming twice is a no-op, not an error.
    // ========================================================

    #[endpoint(confirm)]
    fn confirm(&self) {
        let caller = self.blockchain().get_caller();
        self.require_manager(&caller);

        if self.confirmations().insert(caller.clone()) {
            self.confirm_event(&caller, self.confirmations().len() as u32);
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getQuorumStatus)]
    fn quorum_status(&self) -> QuorumStatus {
        let confirmed = self.confirmations().len();
        if confirmed == 0 {
            QuorumStatus::Idle
        } else if confirmed < self.managers().len() {
            QuorumStatus::Collecting
        } else {
            QuorumStatus::Ready
        }
    }

    #[view(hasConfirmed)]
    fn has_confirmed(&self, manager: ManagedAddress) -> bool {
        self.confirmations().contains(&manager)
    }

    #[view(isManager)]
    fn is_manager(&self, address: ManagedAddress) -> bool {
        self.managers().contains(&address)
    }

    // ========================================================
    // INTERNAL: checks used by guarded endpoints
    // ========================================================

    fn require_manager(&self, caller: &ManagedAddress) {
        require!(self.managers().contains(caller), "Not a manager");
    }

    fn require_all_confirmed(&self) {
        require!(
            self.confirmations().len() == self.managers().len(),
            "Not all confirmed yet"
        );
    }

    fn reset_confirmations(&self) {
        self.confirmations().clear();
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("confirm")]
    fn confirm_event(&self, #[indexed] manager: &ManagedAddress, confirmed_count: u32);

    // ========================================================
    // STORAGE
    // ========================================================

    /// Roster fixed at init; no add/remove endpoint exists.
    #[view(getManagers)]
    #[storage_mapper("managers")]
    fn managers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getConfirmations)]
    #[storage_mapper("confirmations")]
    fn confirmations(&self) -> UnorderedSetMapper<ManagedAddress>;
}
