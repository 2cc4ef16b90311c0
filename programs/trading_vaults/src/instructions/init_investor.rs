use anchor_lang::prelude::*;

use crate::events::InvestorInitializedEvent;
use crate::states::*;

pub fn init_investor(ctx: Context<InitializeInvestor>) -> Result<()> {
    let investor = &mut ctx.accounts.investor;
    let clock = Clock::get()?;

    investor.owner = ctx.accounts.owner.key();
    investor.vault = ctx.accounts.vault.key();
    investor.status = InvestmentStatus::default();
    investor.amount = 0;
    investor.bump = ctx.bumps.investor;

    emit!(InvestorInitializedEvent {
        investor: investor.key(),
        owner: investor.owner,
        vault: investor.vault,
        timestamp: clock.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeInvestor<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    pub vault: Account<'info, Vault>,

    #[account(
        init,
        payer = owner,
        space = 8 + Investor::INIT_SPACE,
        seeds = [INVESTOR_SEED.as_bytes(), vault.key().as_ref(), owner.key().as_ref()],
        bump
    )]
    pub investor: Account<'info, Investor>,

    pub system_program: Program<'info, System>,
}
