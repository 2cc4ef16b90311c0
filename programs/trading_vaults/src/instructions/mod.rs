pub mod deposit;
pub mod init_investor;
pub mod init_trader_risk_group;
pub mod init_vault;
pub mod initialize;
pub mod manager_deposit;
pub mod withdraw;

pub use deposit::*;
pub use init_investor::*;
pub use init_trader_risk_group::*;
pub use init_vault::*;
pub use initialize::*;
pub use manager_deposit::*;
pub use withdraw::*;
