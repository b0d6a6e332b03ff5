//! Application-state container.
//!
//! All shared state lives here and is handed to the workflows by reference;
//! descendants mutate only through the defined operations (add-credits,
//! review prepend, history append/toggle), never by direct field writes.

use std::sync::Arc;

use zentime_ai::AiGateway;

use crate::donations::{DonationFlow, DonationRepository, DonationRepositoryTrait};
use crate::stays::StayService;
use crate::store::KeyValueStore;
use crate::wallet::WalletService;

pub struct AppState {
    gateway: Arc<dyn AiGateway>,
    donations: Arc<DonationRepository>,
    wallet: Arc<WalletService>,
    stays: Arc<StayService>,
}

impl AppState {
    /// Wire the services over a gateway and a key-value store.
    ///
    /// The wallet balance is seeded from the persisted donation history at
    /// construction time.
    pub fn new(gateway: Arc<dyn AiGateway>, store: Arc<dyn KeyValueStore>) -> Self {
        let donations = Arc::new(DonationRepository::new(store));
        let wallet = Arc::new(WalletService::initialize(donations.as_ref()));
        let stays = Arc::new(StayService::new(gateway.clone()));
        Self {
            gateway,
            donations,
            wallet,
            stays,
        }
    }

    pub fn donations(&self) -> Arc<DonationRepository> {
        self.donations.clone()
    }

    pub fn wallet(&self) -> Arc<WalletService> {
        self.wallet.clone()
    }

    pub fn stays(&self) -> Arc<StayService> {
        self.stays.clone()
    }

    /// Start a fresh donation flow bound to this container's services.
    pub fn new_donation_flow(&self) -> DonationFlow {
        DonationFlow::new(
            self.gateway.clone(),
            self.donations.clone(),
            self.wallet.clone(),
        )
    }

    /// Toggle a persisted donation's verification flag.
    ///
    /// History toggling is independent of any in-progress flow and may
    /// target any record at any time.
    pub fn toggle_history_verification(
        &self,
        id: &str,
    ) -> crate::errors::Result<crate::donations::DonationRecord> {
        self.donations.toggle_verified(id)
    }
}
