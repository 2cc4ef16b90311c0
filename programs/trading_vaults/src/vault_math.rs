use anchor_lang::prelude::*;

use crate::errors::VaultError;

pub const BPS_DENOMINATOR: u64 = 10_000;
pub fn manager_share_bps(manager_deposits: u64, total_deposits: u64) -> u64 {
    if total_deposits == 0 {
        return BPS_DENOMINATOR;
    }
    let share = (manager_deposits as u128)
        .saturating_mul(BPS_DENOMINATOR as u128)
        .checked_div(total_deposits as u128)
        .unwrap_or(0);
    share.min(BPS_DENOMINATOR as u128) as u64
}
/// True when `manager_deposits / total_deposits >= min_share_bps / 10_000`,
/// compared exactly in u128 so no rounding lets a deposit slip under the floor.
pub fn meets_manager_share(manager_deposits: u64, total_deposits: u64, min_share_bps: u16) -> bool {
    if total_deposits == 0 {
        return true;
    }
    let lhs = (manager_deposits as u128) * (BPS_DENOMINATOR as u128);
    let rhs = (total_deposits as u128) * (min_share_bps as u128);
    lhs >= rhs
}
/// Vault lamports left after paying out `amount`.
///
/// A payout larger than the vault's lamports is a liquidity shortfall; one the vault
/// can cover only by dipping under its rent-exempt minimum is rejected separately.
pub fn remaining_after_payout(
    vault_lamports: u64,
    rent_exempt_minimum: u64,
    amount: u64,
) -> Result<u64> {
    let remaining = vault_lamports
        .checked_sub(amount)
        .ok_or(VaultError::InsufficientVaultLiquidity)?;
    require!(
        remaining >= rent_exempt_minimum,
        VaultError::InsufficientRemainingBalance
    );
    Ok(remaining)
}
pub fn valid_share_bps(min_share_bps: u16) -> bool {
    (min_share_bps as u64) <= BPS_DENOMINATOR
}
