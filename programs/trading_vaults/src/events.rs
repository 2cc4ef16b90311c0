use anchor_lang::prelude::*;
#[event]
pub struct VaultInitializedEvent {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub trader_risk_group: Pubkey,
    pub initial_balance: u64,
    pub min_manager_share_bps: u16,
    pub timestamp: i64,
}
#[event]
pub struct TraderRiskGroupInitializedEvent {
    pub trader_risk_group: Pubkey,
    pub owner: Pubkey,
    pub market_product_group: Pubkey,
    pub timestamp: i64,
}
#[event]
pub struct InvestorInitializedEvent {
    pub investor: Pubkey,
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub timestamp: i64,
}
#[event]
pub struct DepositEvent {
    pub vault: Pubkey,
    pub investor: Pubkey,
    pub amount: u64,
    pub investor_total: u64,
    pub vault_total: u64,
    pub manager_share_bps: u16,
    pub timestamp: i64,
}
#[event]
pub struct ManagerDepositEvent {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub manager_total: u64,
    pub timestamp: i64,
}
#[event]
pub struct WithdrawEvent {
    pub vault: Pubkey,
    pub investor: Pubkey,
    pub amount: u64,
    pub investor_remaining: u64,
    pub vault_total: u64,
    pub timestamp: i64,
}
