//! CLI configuration.
//!
//! Global options come from flags, with environment fallbacks, and are
//! resolved once into a [Config] before any command runs.

use {
    crate::{
        error::RewardsCenterClientError, program::RewardsCenterProgram, state::PaymentShare,
    },
    clap::Args,
    solana_client::nonblocking::rpc_client::RpcClient,
    solana_sdk::{
        commitment_config::{CommitmentConfig, CommitmentLevel},
        pubkey::Pubkey,
        signature::{read_keypair_file, Keypair, Signer},
    },
    std::{path::PathBuf, str::FromStr},
};

/// Global options shared by every command.
#[derive(Args, Clone, Debug)]
pub struct ConfigArgs {
    /// RPC URL or cluster moniker (mainnet, devnet, testnet, localnet)
    #[arg(short = 'u', long, env = "RPC_URL", default_value = "mainnet", global = true)]
    pub url: String,

    /// Keypair that signs and pays [default: ~/.config/solana/id.json]
    #[arg(short, long, env = "KEYPAIR", global = true)]
    pub keypair: Option<PathBuf>,

    /// Commitment level to confirm transactions and read accounts at
    #[arg(long, default_value = "confirmed", global = true)]
    pub commitment: String,

    /// Print the transaction instead of sending it
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub rpc_url: String,
    pub keypair_path: PathBuf,
    pub commitment: CommitmentConfig,
    pub dry_run: bool,
}

impl Config {
    pub fn new(args: ConfigArgs) -> Result<Self, RewardsCenterClientError> {
        let commitment = CommitmentLevel::from_str(&args.commitment)
            .map_err(|_| RewardsCenterClientError::InvalidCommitment(args.commitment.clone()))?;
        Ok(Self {
            rpc_url: resolve_cluster_url(&args.url),
            keypair_path: args.keypair.unwrap_or_else(default_keypair_path),
            commitment: CommitmentConfig { commitment },
            dry_run: args.dry_run,
        })
    }

    pub fn load_wallet(&self) -> Result<Keypair, RewardsCenterClientError> {
        read_keypair_file(&self.keypair_path).map_err(|err| RewardsCenterClientError::Keypair {
            path: self.keypair_path.display().to_string(),
            reason: err.to_string(),
        })
    }

    pub fn connect(&self, wallet: Option<Box<dyn Signer>>) -> RewardsCenterProgram<RpcClient> {
        RewardsCenterProgram::connect(&self.rpc_url, wallet, Some(self.commitment))
    }
}

/// Expands a cluster moniker into its public RPC endpoint. Anything else is
/// taken to be a URL already.
pub fn resolve_cluster_url(url_or_moniker: &str) -> String {
    match url_or_moniker {
        "mainnet" | "mainnet-beta" | "m" => "https://api.mainnet-beta.solana.com",
        "devnet" | "d" => "https://api.devnet.solana.com",
        "testnet" | "t" => "https://api.testnet.solana.com",
        "localnet" | "localhost" | "l" => "http://localhost:8899",
        url => url,
    }
    .to_string()
}

fn default_keypair_path() -> PathBuf {
    let mut path = std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default();
    path.extend([".config", "solana", "id.json"]);
    path
}

pub fn parse_pubkey(value: &str) -> Result<Pubkey, String> {
    Pubkey::from_str(value).map_err(|err| format!("invalid address `{value}`: {err}"))
}

/// Parses a `<ADDRESS>:<BASIS_POINTS>` payment share.
pub fn parse_payment_share(value: &str) -> Result<PaymentShare, String> {
    let (address, basis_points) = value
        .split_once(':')
        .ok_or_else(|| format!("expected <ADDRESS>:<BASIS_POINTS>, got `{value}`"))?;
    let basis_points = basis_points
        .parse::<u16>()
        .map_err(|err| format!("invalid basis points `{basis_points}`: {err}"))?;
    Ok(PaymentShare::new(parse_pubkey(address)?, basis_points))
}

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    fn config_args(url: &str, commitment: &str) -> ConfigArgs {
        ConfigArgs {
            url: url.to_string(),
            keypair: Some(PathBuf::from("/tmp/does-not-exist.json")),
            commitment: commitment.to_string(),
            dry_run: false,
        }
    }

    #[test_case("mainnet", "https://api.mainnet-beta.solana.com")]
    #[test_case("devnet", "https://api.devnet.solana.com")]
    #[test_case("localnet", "http://localhost:8899")]
    #[test_case("http://127.0.0.1:8899", "http://127.0.0.1:8899")]
    fn test_resolve_cluster_url(input: &str, expected: &str) {
        assert_eq!(resolve_cluster_url(input), expected);
    }

    #[test]
    fn test_config_new() {
        let config = Config::new(config_args("devnet", "finalized")).unwrap();
        assert_eq!(config.rpc_url, "https://api.devnet.solana.com");
        assert_eq!(config.commitment, CommitmentConfig::finalized());
        assert_eq!(config.keypair_path, PathBuf::from("/tmp/does-not-exist.json"));
    }

    #[test]
    fn test_config_rejects_unknown_commitment() {
        let err = Config::new(config_args("devnet", "eventually")).unwrap_err();
        assert!(matches!(err, RewardsCenterClientError::InvalidCommitment(c) if c == "eventually"));
    }

    #[test]
    fn test_missing_keypair_is_reported() {
        let config = Config::new(config_args("devnet", "confirmed")).unwrap();
        let err = config.load_wallet().unwrap_err();
        assert!(matches!(err, RewardsCenterClientError::Keypair { .. }));
    }

    #[test]
    fn test_parse_payment_share() {
        let share = parse_payment_share("4dNCRewnFfS89p7BAV3rnJu6NKnDoKxzsY1pAX7Ga5JT:10000").unwrap();
        assert_eq!(
            share,
            PaymentShare::new(crate::tools::payment::DEFAULT_PAYMENT_RECIPIENT, 10_000)
        );
    }

    #[test_case("4dNCRewnFfS89p7BAV3rnJu6NKnDoKxzsY1pAX7Ga5JT" ; "missing basis points")]
    #[test_case("4dNCRewnFfS89p7BAV3rnJu6NKnDoKxzsY1pAX7Ga5JT:70000" ; "basis points overflow")]
    #[test_case("not-a-key:100" ; "bad address")]
    fn test_parse_payment_share_rejects(input: &str) {
        assert!(parse_payment_share(input).is_err());
    }
}
