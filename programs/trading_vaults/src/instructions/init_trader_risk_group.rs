use anchor_lang::prelude::*;

use crate::events::TraderRiskGroupInitializedEvent;
use crate::states::*;

/// FUfpR31LmcP1VSbz5zDaM7nxnH55iBHkpwusgrnhaFjL
pub const MARKET_PRODUCT_GROUP: Pubkey = Pubkey::new_from_array([
    215, 26, 48, 156, 148, 171, 103, 68, 40, 212, 189, 139, 245, 240, 120, 23, 121, 110, 13, 92,
    208, 150, 135, 216, 246, 71, 240, 240, 168, 121, 158, 23,
]);

pub fn initialize_trader_risk_group(ctx: Context<InitializeTraderRiskGroup>) -> Result<()> {
    let trg = &mut ctx.accounts.trader_risk_group;
    let clock = Clock::get()?;
    trg.reset(
        ctx.accounts.user.key(),
        MARKET_PRODUCT_GROUP,
        ctx.bumps.trader_risk_group,
    );
    emit!(TraderRiskGroupInitializedEvent {
        trader_risk_group: trg.key(),
        owner: trg.owner,
        market_product_group: trg.market_product_group,
        timestamp: clock.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeTraderRiskGroup<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        init,
        payer = user,
        space = 8 + TraderRiskGroup::INIT_SPACE,
        seeds = [TRADER_RISK_GROUP_SEED.as_bytes(), user.key().as_ref()],
        bump
    )]
    pub trader_risk_group: Account<'info, TraderRiskGroup>,
    pub system_program: Program<'info, System>,
}
