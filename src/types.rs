multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Stake Info — per-participant staking record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct StakeInfo<M: ManagedTypeApi> {
    /// Principal currently staked, in the token's smallest unit.
    pub staked_amount: BigUint<M>,
    /// Block nonce at which reward was last settled for this participant.
    /// Irrelevant once `staked_amount` returns to zero; the record is
    /// cleared at that point rather than kept around.
    pub last_accrual_block: u64,
}

// ============================================================
// Quorum Status — confirmation-set fill level
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum QuorumStatus {
    /// No manager has confirmed since the last successful change.
    Idle,
    /// Some but not all managers have confirmed.
    Collecting,
    /// Every manager has confirmed; the guarded setter may run.
    Ready,
}
