use anchor_lang::prelude::*;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod states;
pub mod vault_math;
pub use instructions::*;
declare_id!("Eqs2vuTeCMLFhULBgh5f2TDuRCrYFecfgJxzUSGLRt21");
#[program]
pub mod trading_vaults {
    use super::*;
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }
    pub fn init_vault(ctx: Context<InitializeVault>, params: VaultParams) -> Result<()> {
        instructions::init_vault(ctx, params)
    }
    pub fn initialize_trader_risk_group(ctx: Context<InitializeTraderRiskGroup>) -> Result<()> {
        instructions::initialize_trader_risk_group(ctx)
    }
    pub fn init_investor(ctx: Context<InitializeInvestor>) -> Result<()> {
        instructions::init_investor(ctx)
    }
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }
    pub fn manager_deposit(ctx: Context<ManagerDeposit>, amount: u64) -> Result<()> {
        instructions::manager_deposit(ctx, amount)
    }
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }
}
