use log::debug;
use std::sync::RwLock;

use crate::constants::BASE_CREDITS;
use crate::donations::DonationRepositoryTrait;

/// Trait for wallet operations.
///
/// One running ZT balance. "Add credits" is the only mutator anywhere in
/// the exchange; bookings never subtract (the escrow narrative in the UI
/// text is not implemented).
pub trait WalletServiceTrait: Send + Sync {
    fn balance(&self) -> i32;

    /// Credit the wallet; invoked only by the donation confirm transition.
    fn add_credits(&self, amount: i32);
}

pub struct WalletService {
    balance: RwLock<i32>,
}

impl WalletService {
    /// Create a wallet with an explicit starting balance.
    pub fn new(balance: i32) -> Self {
        Self {
            balance: RwLock::new(balance),
        }
    }

    /// Seed the balance from the persisted donation history:
    /// `BASE_CREDITS` plus the sum of all persisted donation credits.
    pub fn initialize(repository: &dyn DonationRepositoryTrait) -> Self {
        let balance = BASE_CREDITS + repository.total_credits();
        debug!("Wallet initialized at {} ZT", balance);
        Self::new(balance)
    }
}

impl WalletServiceTrait for WalletService {
    fn balance(&self) -> i32 {
        *self.balance.read().unwrap()
    }

    fn add_credits(&self, amount: i32) {
        let mut balance = self.balance.write().unwrap();
        *balance += amount;
        debug!("Wallet credited {} ZT, balance {}", amount, *balance);
    }
}
