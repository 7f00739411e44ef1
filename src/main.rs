use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use fil_wlib::json::Reply;
use fil_wlib::{Config, Network, Wallet};
use fil_wlib_shared::DEFAULT_ACTORS_VERSION;

const NETWORK_ENV: &str = "FIL_WLIB_NETWORK";

#[derive(Parser)]
#[clap(name = env!("CARGO_PKG_NAME"))]
#[clap(version = env!("CARGO_PKG_VERSION"))]
#[clap(about = "Builds Filecoin multisig wallet parameters, message CIDs and signatures.", long_about = None)]
struct Cli {
    /// Network to render addresses for: mainnet or testnet
    #[clap(short, long, env = NETWORK_ENV, default_value = "mainnet")]
    network: Network,

    /// Actors version of the multisig code created by `create-multisig`
    #[clap(long, default_value_t = DEFAULT_ACTORS_VERSION)]
    actors_version: u32,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Address of a base64 public key
    Address { public_key: String, key_type: String },
    /// Re-format an address
    Normalize { address: String },
    /// Base64 CID bytes of a JSON message
    MessageCid { message: String },
    /// CID string of a JSON message
    MessageCidString { message: String },
    /// Public key of a base64 secp256k1 private key
    PublicKey { private_key: String },
    /// Address of a base64 secp256k1 private key
    KeyAddress { private_key: String },
    /// Sign a base64 payload
    Sign { private_key: String, payload: String },
    /// Init actor Exec params creating a multisig, from a JSON request
    CreateMultisig { request: String },
    /// Propose a transfer
    ProposeSend { to: String, value: String },
    /// Propose a miner balance withdrawal
    ProposeWithdraw { miner: String, amount: String },
    /// Propose a miner worker change, from a JSON request
    ProposeChangeWorker { miner: String, request: String },
    /// Propose a miner owner change
    ProposeChangeOwner {
        new_owner: String,
        miner: String,
        #[clap(default_value = "0")]
        value: String,
    },
    /// Propose confirming a miner worker key change
    ProposeConfirmWorker { miner: String },
    /// Propose creating a miner
    ProposeCreateMiner { owner: String, worker: String, proof_type: String },
    /// Approve a pending transaction, from a JSON request
    Approve { request: String },
}

fn run(wallet: &Wallet, command: Command) -> String {
    match command {
        Command::Address { public_key, key_type } => wallet.derive_address(&public_key, &key_type),
        Command::Normalize { address } => wallet.normalize_address(&address),
        Command::MessageCid { message } => wallet.message_cid(&message),
        Command::MessageCidString { message } => wallet.message_cid_string(&message),
        Command::PublicKey { private_key } => wallet.public_key(&private_key),
        Command::KeyAddress { private_key } => wallet.key_address(&private_key),
        Command::Sign { private_key, payload } => wallet.sign(&private_key, &payload),
        Command::CreateMultisig { request } => wallet.create_multisig(&request),
        Command::ProposeSend { to, value } => wallet.propose_send(&to, &value),
        Command::ProposeWithdraw { miner, amount } => {
            wallet.propose_withdraw_balance(&miner, &amount)
        }
        Command::ProposeChangeWorker { miner, request } => {
            wallet.propose_change_worker(&miner, &request)
        }
        Command::ProposeChangeOwner { new_owner, miner, value } => {
            wallet.propose_change_owner(&new_owner, &miner, &value)
        }
        Command::ProposeConfirmWorker { miner } => {
            wallet.propose_confirm_update_worker_key(&miner)
        }
        Command::ProposeCreateMiner { owner, worker, proof_type } => {
            wallet.propose_create_miner(&owner, &worker, &proof_type)
        }
        Command::Approve { request } => wallet.approve(&request),
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let wallet = Wallet::new(Config { network: cli.network, actors_version: cli.actors_version });
    let out = run(&wallet, cli.command);
    println!("{}", out);

    let reply: Reply = serde_json::from_str(&out).context("invalid reply")?;
    match reply {
        Reply::Err(e) => Err(anyhow!(e)),
        _ => Ok(()),
    }
}
