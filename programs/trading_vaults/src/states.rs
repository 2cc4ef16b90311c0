use anchor_lang::prelude::*;

use crate::errors::VaultError;
use crate::vault_math;

// PDA seeds
pub const VAULT_SEED: &str = "vault";
pub const TRADER_RISK_GROUP_SEED: &str = "trader_risk_group";
pub const INVESTOR_SEED: &str = "investor";

pub const DEFAULT_MIN_MANAGER_SHARE_BPS: u16 = 1_000;
pub const MAX_POSITIONS: usize = 100;
pub const MAX_OPEN_ORDERS: usize = 50;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum InvestmentStatus {
    NotInitialized,
    ActiveDeposit,
    Claimable,
}

impl Default for InvestmentStatus {
    fn default() -> Self {
        InvestmentStatus::NotInitialized
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum OrderType {
    Limit,
    Market,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum OrderState {
    Open,
    PartiallyFilled,
    Filled,
    Cancelled,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, InitSpace)]
pub struct Position {
    pub asset: Pubkey,
    pub quantity: u64,
    pub entry_price: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, InitSpace)]
pub struct OpenOrder {
    pub order_type: OrderType,
    pub size: u64,
    pub price: u64,
    pub state: OrderState,
}

#[account]
#[derive(InitSpace)]
pub struct Vault {
    pub owner: Pubkey,
    pub trader_risk_group: Pubkey,
    pub manager_deposits: u64, // lamports contributed by the manager
    pub total_deposits: u64,   // outstanding principal, manager included
    pub min_manager_share_bps: u16,
    pub bump: u8,
}

impl Vault {
    /// Admits an investor deposit, keeping the manager at or above the minimum share.
    pub fn accept_deposit(&mut self, amount: u64) -> Result<u64> {
        require!(amount > 0, VaultError::InvalidAmount);
        let new_total = self
            .total_deposits
            .checked_add(amount)
            .ok_or(VaultError::MathError)?;
        require!(
            vault_math::meets_manager_share(
                self.manager_deposits,
                new_total,
                self.min_manager_share_bps
            ),
            VaultError::ManagerShareTooLow
        );
        self.total_deposits = new_total;
        Ok(new_total)
    }

    pub fn accept_manager_deposit(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, VaultError::InvalidAmount);
        self.manager_deposits = self
            .manager_deposits
            .checked_add(amount)
            .ok_or(VaultError::MathError)?;
        self.total_deposits = self
            .total_deposits
            .checked_add(amount)
            .ok_or(VaultError::MathError)?;
        Ok(())
    }

    /// Checks that `trg` is this vault's own risk group and is held by the vault owner.
    pub fn ensure_trader_risk_group(&self, key: Pubkey, trg: &TraderRiskGroup) -> Result<()> {
        require_keys_eq!(
            key,
            self.trader_risk_group,
            VaultError::InvalidTraderRiskGroupKey
        );
        require_keys_eq!(
            trg.owner,
            self.owner,
            VaultError::InvalidTraderRiskGroupOwner
        );
        Ok(())
    }

    pub fn release(&mut self, amount: u64) -> Result<()> {
        self.total_deposits = self
            .total_deposits
            .checked_sub(amount)
            .ok_or(VaultError::MathError)?;
        Ok(())
    }
}

#[account]
#[derive(InitSpace)]
pub struct TraderRiskGroup {
    pub owner: Pubkey,
    pub market_product_group: Pubkey,
    #[max_len(MAX_POSITIONS)]
    pub positions: Vec<Position>,
    #[max_len(MAX_OPEN_ORDERS)]
    pub open_orders: Vec<OpenOrder>,
    pub cash_deposits: u64,
    pub bump: u8,
}

impl TraderRiskGroup {
    pub fn reset(&mut self, owner: Pubkey, market_product_group: Pubkey, bump: u8) {
        self.owner = owner;
        self.market_product_group = market_product_group;
        self.positions = Vec::new();
        self.open_orders = Vec::new();
        self.cash_deposits = 0;
        self.bump = bump;
    }
}

#[account]
#[derive(InitSpace)]
pub struct Investor {
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub status: InvestmentStatus,
    pub amount: u64,
    pub bump: u8,
}

impl Investor {
    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(VaultError::MathError)?;
        self.status = InvestmentStatus::ActiveDeposit;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, VaultError::InvalidAmount);
        require!(self.amount > 0, VaultError::NotADepositor);
        require!(self.amount >= amount, VaultError::InsufficientBalance);
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(VaultError::MathError)?;
        self.status = InvestmentStatus::Claimable;
        Ok(())
    }
}
