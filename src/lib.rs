#![no_std]

multiversx_sc::imports!();

pub mod quorum;
pub mod types;

use types::StakeInfo;

// ============================================================
// Contract
//
// Participants stake an ESDT token into a shared pool and earn
// a flat per-block reward, settled lazily whenever they next
// stake or withdraw. The reward rate is the one governed
// parameter: changing it requires every manager in the fixed
// roster to have confirmed (see quorum module).
// ============================================================

#[multiversx_sc::contract]
pub trait StakingPool: quorum::QuorumModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        staking_token: TokenIdentifier,
        reward_per_block: BigUint,
        managers: MultiValueEncoded<ManagedAddress>,
    ) {
        require!(
            staking_token.is_valid_esdt_identifier(),
            "Invalid token identifier"
        );
        require!(!managers.is_empty(), "Managers list is empty");

        self.staking_token().set(&staking_token);
        self.reward_per_block().set(&reward_per_block);
        self.total_staked().set(BigUint::zero());

        for manager in managers {
            require!(self.managers().insert(manager), "Duplicate manager");
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: stake
    // Payment arrives with the call; the chain moves the value
    // atomically, so there is no separate allowance/pull step.
    // ========================================================

    #[endpoint(stake)]
    #[payable("*")]
    fn stake(&self) {
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.staking_token().get(),
            "Invalid payment token"
        );
        require!(payment.amount > 0u64, "Amount must be positive");

        let caller = self.blockchain().get_caller();
        self.settle_reward(&caller);

        let current_block = self.blockchain().get_block_nonce();
        let info_mapper = self.stake_info(&caller);
        if info_mapper.is_empty() {
            info_mapper.set(&StakeInfo {
                staked_amount: payment.amount.clone(),
                last_accrual_block: current_block,
            });
            self.stakers().insert(caller.clone());
        } else {
            info_mapper.update(|info| info.staked_amount += &payment.amount);
        }
        self.total_staked().update(|total| *total += &payment.amount);

        self.stake_event(&caller, &payment.amount, current_block);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Pays out principal plus whatever reward has accrued since
    // the caller's last settlement.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) {
        require!(amount > 0u64, "Amount must be positive");

        let caller = self.blockchain().get_caller();
        require!(
            !self.stake_info(&caller).is_empty(),
            "Insufficient staked amount"
        );

        self.settle_reward(&caller);

        let info_mapper = self.stake_info(&caller);
        let mut info = info_mapper.get();
        require!(amount <= info.staked_amount, "Insufficient staked amount");

        info.staked_amount -= &amount;
        self.total_staked().update(|total| *total -= &amount);

        // Drop the record entirely once the participant is out.
        if info.staked_amount == 0u64 {
            info_mapper.clear();
            self.stakers().swap_remove(&caller);
        } else {
            info_mapper.set(&info);
        }

        let token = self.staking_token().get();
        self.send().direct_esdt(&caller, &token, 0, &amount);

        let current_block = self.blockchain().get_block_nonce();
        self.withdraw_event(&caller, &amount, current_block);
    }

    // ========================================================
    // ENDPOINT: setRewardPerBlock
    // The one guarded mutation. Requires unanimous confirmation;
    // a successful change clears every confirmation so the next
    // change starts from scratch.
    // ========================================================

    #[endpoint(setRewardPerBlock)]
    fn set_reward_per_block(&self, new_reward: BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_manager(&caller);
        self.require_all_confirmed();

        self.reward_per_block().set(&new_reward);
        self.reset_confirmations();

        self.reward_per_block_changed_event(&caller, &new_reward);
    }

    // ========================================================
    // INTERNAL: reward settlement
    // reward = rewardPerBlock × blocks elapsed since the last
    // settlement. Flat per participant; not scaled by stake
    // share. The reward is minted and sent immediately, and the
    // accrual clock restarts at the current block.
    // ========================================================

    fn settle_reward(&self, participant: &ManagedAddress) {
        let info_mapper = self.stake_info(participant);
        if info_mapper.is_empty() {
            return;
        }

        let mut info = info_mapper.get();
        let current_block = self.blockchain().get_block_nonce();
        let elapsed = current_block - info.last_accrual_block;

        if elapsed > 0 {
            let reward = self.reward_per_block().get() * elapsed;
            if reward > 0u64 {
                let token = self.staking_token().get();
                self.send().esdt_local_mint(&token, 0, &reward);
                self.send().direct_esdt(participant, &token, 0, &reward);
                self.reward_paid_event(participant, &reward, current_block);
            }
        }

        info.last_accrual_block = current_block;
        info_mapper.set(&info);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(staked)]
    fn staked(&self, participant: ManagedAddress) -> BigUint {
        let info_mapper = self.stake_info(&participant);
        if info_mapper.is_empty() {
            BigUint::zero()
        } else {
            info_mapper.get().staked_amount
        }
    }

    #[view(getPendingReward)]
    fn pending_reward(&self, participant: ManagedAddress) -> BigUint {
        let info_mapper = self.stake_info(&participant);
        if info_mapper.is_empty() {
            return BigUint::zero();
        }
        let info = info_mapper.get();
        let elapsed = self.blockchain().get_block_nonce() - info.last_accrual_block;
        self.reward_per_block().get() * elapsed
    }

    #[view(getStakers)]
    fn get_stakers(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.stakers().len();
        let start = from as usize;
        let end = core::cmp::min(start + count as usize, total);

        for (idx, staker) in self.stakers().iter().enumerate() {
            if idx >= start && idx < end {
                result.push(staker);
            }
            if idx >= end {
                break;
            }
        }
        result
    }

    #[view(getPoolStats)]
    fn get_pool_stats(&self) -> MultiValue4<BigUint, BigUint, u64, u64> {
        let total = self.total_staked().get();
        let rate = self.reward_per_block().get();
        let staker_count = self.stakers().len() as u64;
        let manager_count = self.managers().len() as u64;
        (total, rate, staker_count, manager_count).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("stake")]
    fn stake_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] amount: &BigUint,
        block: u64,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] amount: &BigUint,
        block: u64,
    );

    #[event("rewardPaid")]
    fn reward_paid_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] reward: &BigUint,
        block: u64,
    );

    #[event("rewardPerBlockChanged")]
    fn reward_per_block_changed_event(
        &self,
        #[indexed] manager: &ManagedAddress,
        new_reward: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[view(getStakingToken)]
    #[storage_mapper("stakingToken")]
    fn staking_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// Mutated only through `setRewardPerBlock`.
    #[view(getRewardPerBlock)]
    #[storage_mapper("rewardPerBlock")]
    fn reward_per_block(&self) -> SingleValueMapper<BigUint>;

    // ── Pool state ──

    #[view(totalStaked)]
    #[storage_mapper("totalStaked")]
    fn total_staked(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("stakeInfo")]
    fn stake_info(&self, participant: &ManagedAddress) -> SingleValueMapper<StakeInfo<Self::Api>>;

    #[storage_mapper("stakers")]
    fn stakers(&self) -> UnorderedSetMapper<ManagedAddress>;
}
