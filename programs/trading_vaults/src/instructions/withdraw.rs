use anchor_lang::prelude::*;

use crate::errors::VaultError;
use crate::events::WithdrawEvent;
use crate::states::*;
use crate::vault_math;

/// Pays an investor back out of the vault.
/// The vault must stay rent exempt after the payout.
pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    let investor = &mut ctx.accounts.investor;
    let clock = Clock::get()?;

    vault.ensure_trader_risk_group(
        ctx.accounts.trader_risk_group.key(),
        &ctx.accounts.trader_risk_group,
    )?;

    investor.debit(amount)?;

    let vault_account = vault.to_account_info();
    let rent = Rent::get()?;
    let rent_exempt = rent.minimum_balance(vault_account.data_len());
    let remaining =
        vault_math::remaining_after_payout(vault_account.lamports(), rent_exempt, amount)?;

    vault.release(amount)?;

    let investor_lamports = ctx
        .accounts
        .owner
        .lamports()
        .checked_add(amount)
        .ok_or(VaultError::MathError)?;
    **vault_account.try_borrow_mut_lamports()? = remaining;
    **ctx.accounts.owner.try_borrow_mut_lamports()? = investor_lamports;

    msg!("Investor withdrawal: {} lamports", amount);
    msg!("Vault deposits outstanding: {}", vault.total_deposits);

    emit!(WithdrawEvent {
        vault: vault.key(),
        investor: investor.key(),
        amount,
        investor_remaining: investor.amount,
        vault_total: vault.total_deposits,
        timestamp: clock.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
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

    pub trader_risk_group: Account<'info, TraderRiskGroup>,
}
