use chrono::Local;
use log::{debug, warn};
use std::sync::Arc;
use uuid::Uuid;

use zentime_ai::{AiGateway, GlassesEvaluation, ImageAttachment};

use crate::donations::{DonationRecord, DonationRepositoryTrait};
use crate::errors::{Error, Result};
use crate::wallet::WalletServiceTrait;

/// States of the donation flow.
///
/// Linear: Describe → Evaluating → Reviewed → Confirmed. The only backward
/// edges are the explicit `edit` action (Reviewed → Describe) and
/// `donate_again` (Confirmed → Describe).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonationFlowState {
    Describe,
    Evaluating,
    Reviewed,
    Confirmed,
}

impl DonationFlowState {
    fn name(&self) -> &'static str {
        match self {
            DonationFlowState::Describe => "Describe",
            DonationFlowState::Evaluating => "Evaluating",
            DonationFlowState::Reviewed => "Reviewed",
            DonationFlowState::Confirmed => "Confirmed",
        }
    }
}

/// One donation in progress: description and optional photo in, credit
/// award out.
///
/// The flow owns its transient state; confirmed records go through the
/// repository and wallet it was constructed with. Evaluation is an explicit
/// transition action: `begin_evaluation` both enters the Evaluating state
/// and performs the gateway call, so there is no side effect keyed off
/// state identity and re-entry while a call is pending is rejected.
pub struct DonationFlow {
    gateway: Arc<dyn AiGateway>,
    repository: Arc<dyn DonationRepositoryTrait>,
    wallet: Arc<dyn WalletServiceTrait>,
    state: DonationFlowState,
    description: String,
    image: Option<ImageAttachment>,
    evaluation: Option<GlassesEvaluation>,
    verified: bool,
}

impl DonationFlow {
    pub fn new(
        gateway: Arc<dyn AiGateway>,
        repository: Arc<dyn DonationRepositoryTrait>,
        wallet: Arc<dyn WalletServiceTrait>,
    ) -> Self {
        Self {
            gateway,
            repository,
            wallet,
            state: DonationFlowState::Describe,
            description: String::new(),
            image: None,
            evaluation: None,
            verified: false,
        }
    }

    pub fn state(&self) -> DonationFlowState {
        self.state
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The stored evaluation, available from the Reviewed state onward.
    pub fn evaluation(&self) -> Option<&GlassesEvaluation> {
        self.evaluation.as_ref()
    }

    /// The manual verification flag shown in the Reviewed state.
    pub fn verified(&self) -> bool {
        self.verified
    }

    fn require_state(
        &self,
        expected: DonationFlowState,
        action: &'static str,
    ) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(Error::InvalidTransition {
                from: self.state.name(),
                action,
            })
        }
    }

    /// Update the free-text description (Describe state only).
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<()> {
        self.require_state(DonationFlowState::Describe, "set_description")?;
        self.description = description.into();
        Ok(())
    }

    /// Attach or replace the photo (Describe state only).
    pub fn attach_image(&mut self, image: ImageAttachment) -> Result<()> {
        self.require_state(DonationFlowState::Describe, "attach_image")?;
        self.image = Some(image);
        Ok(())
    }

    /// Describe → Evaluating → Reviewed: flip the state and perform the
    /// evaluation round trip in one action.
    ///
    /// Requires a non-empty description. On gateway failure the flow
    /// reverts to Describe with the description intact and no partial
    /// record; the error propagates for the caller to surface.
    pub async fn begin_evaluation(&mut self) -> Result<()> {
        self.require_state(DonationFlowState::Describe, "begin_evaluation")?;
        if self.description.trim().is_empty() {
            return Err(Error::Validation("description must not be empty".to_string()));
        }

        self.state = DonationFlowState::Evaluating;
        debug!("Evaluating donation: {}", self.description);

        match self
            .gateway
            .evaluate_glasses(&self.description, self.image.as_ref())
            .await
        {
            Ok(evaluation) => {
                self.evaluation = Some(evaluation);
                self.verified = false;
                self.state = DonationFlowState::Reviewed;
                Ok(())
            }
            Err(e) => {
                warn!("Donation evaluation failed: {}", e);
                self.state = DonationFlowState::Describe;
                Err(e.into())
            }
        }
    }

    /// Toggle the manual verification flag (Reviewed state only). Purely
    /// local; never calls the gateway again.
    pub fn toggle_verified(&mut self) -> Result<bool> {
        self.require_state(DonationFlowState::Reviewed, "toggle_verified")?;
        self.verified = !self.verified;
        Ok(self.verified)
    }

    /// Reviewed → Confirmed: build the DonationRecord, prepend it to the
    /// persisted history, and credit the wallet.
    pub fn confirm(&mut self) -> Result<DonationRecord> {
        self.require_state(DonationFlowState::Reviewed, "confirm")?;
        let evaluation = self
            .evaluation
            .as_ref()
            .ok_or_else(|| Error::Unexpected("reviewed flow has no evaluation".to_string()))?;

        let record = DonationRecord {
            id: Uuid::new_v4().to_string(),
            description: self.description.clone(),
            credits: evaluation.credits,
            verification_checklist: evaluation.verification_checklist.clone(),
            verified: self.verified,
            date: Local::now().format("%Y年%m月%d日 %H:%M").to_string(),
        };

        self.repository.append(record.clone())?;
        self.wallet.add_credits(record.credits);
        self.state = DonationFlowState::Confirmed;
        Ok(record)
    }

    /// Reviewed → Describe: back to editing, keeping the description and
    /// photo. The stored evaluation is discarded on the next evaluation.
    pub fn edit(&mut self) -> Result<()> {
        self.require_state(DonationFlowState::Reviewed, "edit")?;
        self.state = DonationFlowState::Describe;
        Ok(())
    }

    /// Confirmed → Describe: start a fresh donation.
    pub fn donate_again(&mut self) -> Result<()> {
        self.require_state(DonationFlowState::Confirmed, "donate_again")?;
        self.description.clear();
        self.image = None;
        self.evaluation = None;
        self.verified = false;
        self.state = DonationFlowState::Describe;
        Ok(())
    }
}
