use ethers::types::Address;
use eyre::{eyre, Result};
use tracing::{info, warn};

use super::{Agent, Outcome};
use crate::{
    gateway::Gateway,
    oplog::Operation,
    planner::{plan_allocations, AllocationRules},
};

impl<G: Gateway> Agent<G> {
    /// Sets random allocation weights on the fund. Each token is approved for
    /// the owner's balance and set independently, so one rejected token
    /// doesn't stop the rest. Fails only if no allocation went through.
    pub async fn set_allocations(&mut self, owner: Address, fund: Address) -> Result<Outcome> {
        if self.catalog.is_empty() {
            return Ok(Outcome::Skipped("no tokens available for allocation".into()));
        }
        if let Some(skip) = self.require_owner(owner, fund).await? {
            return Ok(skip);
        }

        let rules = AllocationRules::from(&self.config);
        let plan = plan_allocations(&mut self.rng, self.catalog.tokens(), &rules);
        if plan.is_empty() {
            return Ok(Outcome::Skipped("allocation plan is empty".into()));
        }

        let mut succeeded = 0;
        for (entry, weight_bps) in &plan {
            let token = &entry.token;
            if let Err(e) = self.approve_for_fund(owner, fund, token.address).await {
                warn!(?fund, symbol = %token.symbol, %e, "error approving fund");
            }
            match self
                .gateway
                .set_allocation(owner, fund, token.address, *weight_bps)
                .await
            {
                Ok(_) => {
                    info!(?fund, symbol = %token.symbol, weight_bps, "set allocation");
                    self.record(
                        owner,
                        fund,
                        Operation::SetAllocation {
                            token: token.address,
                            allocation: *weight_bps,
                        },
                    );
                    succeeded += 1;
                }
                Err(e) => warn!(?fund, symbol = %token.symbol, weight_bps, %e, "error setting allocation"),
            }
        }

        if succeeded == 0 {
            return Err(eyre!("none of the {} allocations for {:?} went through", plan.len(), fund));
        }
        Ok(Outcome::Completed)
    }
}
