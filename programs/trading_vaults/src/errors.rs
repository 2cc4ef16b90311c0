use anchor_lang::prelude::*;
#[error_code]
pub enum VaultError {
    #[msg("The provided Trader Risk Group account key does not match the vault record")]
    InvalidTraderRiskGroupKey,
    #[msg("The owner of the Trader Risk Group does not match the vault owner")]
    InvalidTraderRiskGroupOwner,
    #[msg("Investor has no active deposit in this vault")]
    NotADepositor,
    #[msg("Insufficient balance for the operation")]
    InsufficientBalance,
    #[msg("Arithmetic overflow")]
    MathError,
    #[msg("Withdrawal would leave the vault below its rent-exempt minimum")]
    InsufficientRemainingBalance,
    #[msg("Investor record does not belong to this vault")]
    InvalidVault,
    #[msg("Deposit would reduce the manager's share below the vault minimum")]
    ManagerShareTooLow,
    #[msg("Vault does not hold enough lamports for this withdrawal")]
    InsufficientVaultLiquidity,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Invalid vault configuration")]
    InvalidConfig,
}
