//! Provider resolution for the localnet harness.
//!
//! Follows the variables `anchor test` exports: `ANCHOR_PROVIDER_URL` names the
//! cluster and `ANCHOR_WALLET` points at the payer keypair.
use std::path::PathBuf;
use std::rc::Rc;
use std::str::FromStr;

use anchor_client::solana_sdk::commitment_config::CommitmentConfig;
use anchor_client::solana_sdk::signature::{read_keypair_file, Keypair};
use anchor_client::{Client, ClientError, Cluster, Program};
use anchor_lang::prelude::Pubkey;
use thiserror::Error;

pub const PROVIDER_URL_VAR: &str = "ANCHOR_PROVIDER_URL";
pub const WALLET_VAR: &str = "ANCHOR_WALLET";
pub const DEFAULT_WALLET: &str = ".config/solana/id.json";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("invalid cluster {url:?}: {reason}")]
    InvalidCluster { url: String, reason: String },
    #[error("no wallet configured: set ANCHOR_WALLET or HOME")]
    MissingWallet,
    #[error("failed to read keypair {}: {reason}", path.display())]
    Keypair { path: PathBuf, reason: String },
    #[error(transparent)]
    Client(#[from] ClientError),
}

#[derive(Debug, Clone)]
pub struct Provider {
    pub cluster: Cluster,
    pub wallet: PathBuf,
    pub commitment: CommitmentConfig,
}

impl Provider {
    pub fn env() -> Result<Self, ProviderError> {
        Self::from_vars(
            std::env::var(PROVIDER_URL_VAR).ok(),
            std::env::var(WALLET_VAR).ok(),
            std::env::var("HOME").ok(),
        )
    }

    /// Resolves a provider from raw variable values. Blank values count as unset.
    pub fn from_vars(
        url: Option<String>,
        wallet: Option<String>,
        home: Option<String>,
    ) -> Result<Self, ProviderError> {
        let cluster = match non_blank(url) {
            Some(url) => Cluster::from_str(&url).map_err(|e| ProviderError::InvalidCluster {
                reason: e.to_string(),
                url,
            })?,
            None => Cluster::Localnet,
        };
        let wallet = match (non_blank(wallet), non_blank(home)) {
            (Some(path), _) => PathBuf::from(path),
            (None, Some(home)) => PathBuf::from(home).join(DEFAULT_WALLET),
            (None, None) => return Err(ProviderError::MissingWallet),
        };
        Ok(Self {
            cluster,
            wallet,
            commitment: CommitmentConfig::confirmed(),
        })
    }

    pub fn payer(&self) -> Result<Keypair, ProviderError> {
        read_keypair_file(&self.wallet).map_err(|e| ProviderError::Keypair {
            path: self.wallet.clone(),
            reason: e.to_string(),
        })
    }

    /// Binds a client handle to a deployed program, paid for by the provider wallet.
    pub fn program(
        &self,
        program_id: Pubkey,
    ) -> Result<(Program<Rc<Keypair>>, Rc<Keypair>), ProviderError> {
        let payer = Rc::new(self.payer()?);
        let client = Client::new_with_options(self.cluster.clone(), payer.clone(), self.commitment);
        let program = client.program(program_id)?;
        Ok((program, payer))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults_to_localnet_and_home_wallet() {
        let provider = Provider::from_vars(None, None, Some("/home/dev".into())).unwrap();
        assert_eq!(provider.cluster.url(), Cluster::Localnet.url());
        assert_eq!(
            provider.wallet,
            PathBuf::from("/home/dev/.config/solana/id.json")
        );
        assert_eq!(provider.commitment, CommitmentConfig::confirmed());
    }

    #[rstest]
    #[case("localnet", Cluster::Localnet)]
    #[case("devnet", Cluster::Devnet)]
    #[case("mainnet", Cluster::Mainnet)]
    fn test_named_clusters(#[case] name: &str, #[case] expected: Cluster) {
        let provider =
            Provider::from_vars(Some(name.into()), Some("/tmp/id.json".into()), None).unwrap();
        assert_eq!(provider.cluster.url(), expected.url());
    }

    #[test]
    fn test_custom_url_is_kept() {
        let provider = Provider::from_vars(
            Some("http://127.0.0.1:8899".into()),
            Some("/tmp/id.json".into()),
            None,
        )
        .unwrap();
        assert_eq!(provider.cluster.url(), "http://127.0.0.1:8899");
    }

    #[test]
    fn test_blank_url_falls_back_to_localnet() {
        let provider =
            Provider::from_vars(Some("  ".into()), Some("/tmp/id.json".into()), None).unwrap();
        assert_eq!(provider.cluster.url(), Cluster::Localnet.url());
    }

    #[test]
    fn test_unknown_cluster_rejected() {
        let err = Provider::from_vars(Some("moonnet".into()), Some("/tmp/id.json".into()), None)
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidCluster { ref url, .. } if url == "moonnet"));
    }

    #[test]
    fn test_wallet_var_wins_over_home() {
        let provider = Provider::from_vars(
            None,
            Some("/keys/payer.json".into()),
            Some("/home/dev".into()),
        )
        .unwrap();
        assert_eq!(provider.wallet, PathBuf::from("/keys/payer.json"));
    }

    #[test]
    fn test_missing_wallet_and_home() {
        let err = Provider::from_vars(None, Some(String::new()), None).unwrap_err();
        assert!(matches!(err, ProviderError::MissingWallet));
    }

    #[test]
    fn test_unreadable_keypair_reports_path() {
        let provider =
            Provider::from_vars(None, Some("/nonexistent/id.json".into()), None).unwrap();
        let err = provider.payer().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/id.json"));
    }
}
