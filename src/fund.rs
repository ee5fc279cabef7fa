multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_FUNDS, ERR_ZERO_AMOUNT};
use crate::types::FundAccount;

// ============================================================
// Reward pool: owner-funded, with a reservation covering the
// block rewards owed to the current committee until the next
// refresh. Only balance - reserved can be withdrawn.
// ============================================================

#[multiversx_sc::module]
pub trait FundModule:
    crate::config::ConfigModule + crate::storage::StorageModule + crate::events::EventsModule
{
    #[only_owner]
    #[payable("EGLD")]
    #[endpoint(addFund)]
    fn add_fund(&self) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();
        require!(payment_amount > 0u64, ERR_ZERO_AMOUNT);

        self.fund_balance().update(|balance| *balance += &payment_amount);
        self.recompute_reservation();

        self.fund_added_event(&caller, &payment_amount);
    }

    #[only_owner]
    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) {
        require!(amount > 0u64, ERR_ZERO_AMOUNT);
        require!(amount <= self.available_funds(), ERR_INSUFFICIENT_FUNDS);

        let caller = self.blockchain().get_caller();
        self.fund_balance().update(|balance| *balance -= &amount);

        self.send().direct_egld(&caller, &amount);
        self.fund_withdrawn_event(&caller, &amount);
    }

    #[only_owner]
    #[endpoint(setRewards)]
    fn set_rewards(&self, block_reward: BigUint, tx_reward: BigUint) {
        self.block_reward().set(&block_reward);
        self.tx_reward().set(&tx_reward);
        self.recompute_reservation();

        self.rewards_updated_event(&block_reward, &tx_reward);
    }

    // ========================================================
    // INTERNAL: reservation
    // Called whenever the committee size or reward rates change,
    // and after every deposit so a shortfall clears as soon as
    // the balance covers it.
    // ========================================================

    fn recompute_reservation(&self) {
        let required = self.required_reservation();
        let balance = self.fund_balance().get();

        if required > balance {
            let shortfall = &required - &balance;
            self.reserved_funds().set(&balance);
            self.reservation_shortfall().set(&shortfall);
            self.reservation_shortfall_event(&required, &shortfall);
        } else {
            self.reserved_funds().set(&required);
            self.reservation_shortfall().clear();
        }

        self.reservation_updated_event(&balance, &self.reserved_funds().get());
    }

    /// nodeCount * blockReward * flushInRound
    fn required_reservation(&self) -> BigUint {
        let block_reward = self.block_reward().get();
        let per_block = &block_reward * self.seated_count();
        &per_block * self.flush_in_round().get()
    }

    fn available_funds(&self) -> BigUint {
        self.fund_balance().get() - self.reserved_funds().get()
    }

    fn is_reservation_at_risk(&self) -> bool {
        self.reservation_shortfall().get() > 0u64
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getFundAccount)]
    fn get_fund_account(&self) -> FundAccount<Self::Api> {
        FundAccount {
            owner: self.blockchain().get_owner_address(),
            balance: self.fund_balance().get(),
            reserved: self.reserved_funds().get(),
            shortfall: self.reservation_shortfall().get(),
        }
    }

    #[view(getAvailableFunds)]
    fn get_available_funds(&self) -> BigUint {
        self.available_funds()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("fundBalance")]
    fn fund_balance(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("reservedFunds")]
    fn reserved_funds(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("reservationShortfall")]
    fn reservation_shortfall(&self) -> SingleValueMapper<BigUint>;
}
