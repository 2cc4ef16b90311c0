use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::VaultError;
use crate::events::DepositEvent;
use crate::states::*;
use crate::vault_math;

/// Accepts an investor deposit into the vault.
///
/// The deposit is voided (the whole transaction fails and no lamports move) when it
/// would push the manager's share of total deposits below the vault's floor.
pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    let investor = &mut ctx.accounts.investor;
    let clock = Clock::get()?;

    let new_total = vault.accept_deposit(amount)?;

    let transfer_ix = system_program::Transfer {
        from: ctx.accounts.owner.to_account_info(),
        to: vault.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.system_program.to_account_info(), transfer_ix);
    system_program::transfer(cpi_ctx, amount)?;

    investor.credit(amount)?;

    let manager_share = vault_math::manager_share_bps(vault.manager_deposits, new_total);
    msg!(
        "Deposit accepted: {} lamports, manager share {}bps",
        amount,
        manager_share
    );

    emit!(DepositEvent {
        vault: vault.key(),
        investor: investor.key(),
        amount,
        investor_total: investor.amount,
        vault_total: new_total,
        manager_share_bps: manager_share as u16,
        timestamp: clock.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), vault.owner.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        has_one = owner,
        has_one = vault @ VaultError::InvalidVault,
    )]
    pub investor: Account<'info, Investor>,

    pub system_program: Program<'info, System>,
}
