use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::VaultError;
use crate::events::VaultInitializedEvent;
use crate::states::*;
use crate::vault_math;

/// Parameters for opening a vault
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default)]
pub struct VaultParams {
    /// Manager's opening stake in lamports
    pub initial_balance: u64,
    /// Minimum manager share of total deposits; defaults to 10%
    pub min_manager_share_bps: Option<u16>,
}

impl VaultParams {
    /// Fills defaults and validates, returning the share floor to store.
    pub fn resolve(&self) -> Result<u16> {
        require!(self.initial_balance > 0, VaultError::InvalidAmount);
        let min_share = self
            .min_manager_share_bps
            .unwrap_or(DEFAULT_MIN_MANAGER_SHARE_BPS);
        require!(
            vault_math::valid_share_bps(min_share),
            VaultError::InvalidConfig
        );
        Ok(min_share)
    }
}

/// Opens a vault for the signing manager together with the vault's trader risk group,
/// funding it with the manager's opening stake.
pub fn init_vault(ctx: Context<InitializeVault>, params: VaultParams) -> Result<()> {
    let min_share = params.resolve()?;
    let clock = Clock::get()?;

    let transfer_ix = system_program::Transfer {
        from: ctx.accounts.owner.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.system_program.to_account_info(), transfer_ix);
    system_program::transfer(cpi_ctx, params.initial_balance)?;

    let owner = ctx.accounts.owner.key();
    let vault_key = ctx.accounts.vault.key();
    let trg_key = ctx.accounts.trader_risk_group.key();

    let trg = &mut ctx.accounts.trader_risk_group;
    trg.reset(owner, Pubkey::default(), ctx.bumps.trader_risk_group);

    let vault = &mut ctx.accounts.vault;
    vault.owner = owner;
    vault.trader_risk_group = trg_key;
    vault.manager_deposits = params.initial_balance;
    vault.total_deposits = params.initial_balance;
    vault.min_manager_share_bps = min_share;
    vault.bump = ctx.bumps.vault;

    msg!("Vault initialized:");
    msg!("  Manager stake: {} lamports", vault.manager_deposits);
    msg!(
        "  Min manager share: {}bps ({}%)",
        vault.min_manager_share_bps,
        vault.min_manager_share_bps / 100
    );

    emit!(VaultInitializedEvent {
        vault: vault_key,
        owner,
        trader_risk_group: trg_key,
        initial_balance: params.initial_balance,
        min_manager_share_bps: min_share,
        timestamp: clock.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = 8 + Vault::INIT_SPACE,
        seeds = [VAULT_SEED.as_bytes(), owner.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        init,
        payer = owner,
        space = 8 + TraderRiskGroup::INIT_SPACE,
        seeds = [TRADER_RISK_GROUP_SEED.as_bytes(), vault.key().as_ref()],
        bump
    )]
    pub trader_risk_group: Account<'info, TraderRiskGroup>,

    pub system_program: Program<'info, System>,
}
