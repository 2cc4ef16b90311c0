use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::events::ManagerDepositEvent;
use crate::states::*;

/// Tops up the manager's stake, raising the room left for investor deposits.
pub fn manager_deposit(ctx: Context<ManagerDeposit>, amount: u64) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    let clock = Clock::get()?;

    vault.accept_manager_deposit(amount)?;

    let transfer_ix = system_program::Transfer {
        from: ctx.accounts.owner.to_account_info(),
        to: vault.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.system_program.to_account_info(), transfer_ix);
    system_program::transfer(cpi_ctx, amount)?;

    emit!(ManagerDepositEvent {
        vault: vault.key(),
        owner: vault.owner,
        amount,
        manager_total: vault.manager_deposits,
        timestamp: clock.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ManagerDeposit<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = owner,
        seeds = [VAULT_SEED.as_bytes(), owner.key().as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}
