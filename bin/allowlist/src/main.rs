//! Allowlist CLI
//!
//! Offline companion to the mint contract's allowlist:
//! - `root` computes the Merkle root to store with `setMerkleRoot`
//! - `proof` produces the proof an address passes to `allowlistMint`
//! - `verify` checks a pasted proof against a root
//!
//! Nothing here talks to a node or sends transactions.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use mint_allowlist::{
    Allowlist, AllowlistConfig, MerkleRoot, RootStatus, compare_roots, compute_leaf, parse_address,
    parse_proof, parse_root, verify_proof,
};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "allowlist")]
#[command(about = "Merkle allowlist roots and proofs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the allowlist root
    Root {
        #[command(flatten)]
        source: SourceArgs,

        /// Root currently stored on chain, to check against
        #[arg(long)]
        on_chain_root: Option<String>,
    },
    /// Print the proof for one address as JSON
    Proof {
        #[command(flatten)]
        source: SourceArgs,

        /// Address to prove
        #[arg(short, long)]
        address: String,
    },
    /// Verify a proof for an address against a root
    Verify {
        /// Address the proof is for
        #[arg(short, long)]
        address: String,

        /// Proof as a JSON array or comma-separated hashes
        #[arg(short, long)]
        proof: String,

        /// Root to verify against
        #[arg(short, long, env = "MERKLE_ROOT")]
        root: String,
    },
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// JSON file holding an array of addresses
    #[arg(short, long, env = "ALLOWLIST_FILE")]
    file: Option<PathBuf>,

    /// Comma-separated addresses, used instead of a file
    #[arg(long)]
    addresses: Option<String>,
}

impl SourceArgs {
    fn load(&self, config: &AllowlistConfig) -> Result<Allowlist> {
        let allowlist = match (&self.file, &self.addresses) {
            (Some(path), _) => Allowlist::from_json_file(path, config)
                .with_context(|| format!("Failed to load allowlist from {}", path.display()))?,
            (None, Some(list)) => {
                Allowlist::from_comma_separated(list, config).context("Invalid --addresses list")?
            }
            (None, None) => bail!("No allowlist given: pass --file, set ALLOWLIST_FILE, or pass --addresses"),
        };

        info!(entries = allowlist.len(), "Allowlist loaded");
        Ok(allowlist)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AllowlistConfig::from_env();

    match cli.command {
        Commands::Root { source, on_chain_root } => run_root(&source, on_chain_root.as_deref(), &config),
        Commands::Proof { source, address } => run_proof(&source, &address, &config),
        Commands::Verify { address, proof, root } => run_verify(&address, &proof, &root),
    }
}

fn run_root(source: &SourceArgs, on_chain_root: Option<&str>, config: &AllowlistConfig) -> Result<()> {
    let allowlist = source.load(config)?;
    let root = allowlist.root();
    if root.is_empty() {
        warn!("Allowlist is empty; there is no root to set");
    }
    println!("{root}");

    if let Some(on_chain) = on_chain_root {
        let on_chain = parse_root(on_chain).context("Invalid --on-chain-root")?;
        match compare_roots(&root, &on_chain) {
            RootStatus::Match => info!("Local root matches the on-chain root; no update needed"),
            RootStatus::Mismatch { local, on_chain } => {
                warn!(%local, %on_chain, "Local root differs from the on-chain root");
            }
            RootStatus::OnChainUnset => info!("No root is set on chain"),
            RootStatus::LocalEmpty => warn!("Local allowlist is empty but a root is set on chain"),
        }
    }

    Ok(())
}

fn run_proof(source: &SourceArgs, address: &str, config: &AllowlistConfig) -> Result<()> {
    let allowlist = source.load(config)?;
    let address = parse_address(address)?;

    let Some(proof) = allowlist.proof_for(&address) else {
        bail!("{address:#x} is not on the allowlist");
    };

    let json = serde_json::to_string_pretty(&proof).context("Failed to serialize proof")?;
    println!("{json}");
    Ok(())
}

fn run_verify(address: &str, proof: &str, root: &str) -> Result<()> {
    let leaf = compute_leaf(address)?;
    let proof = parse_proof(proof)?;
    let root = parse_root(root).context("Invalid --root")?;

    if root == MerkleRoot::Empty {
        warn!("Root is unset; no proof can verify against it");
    }

    if verify_proof(&proof, &root, &leaf) {
        println!("valid");
        Ok(())
    } else {
        println!("invalid");
        bail!("proof does not verify against {root}")
    }
}
