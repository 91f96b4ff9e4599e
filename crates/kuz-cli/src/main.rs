//! Command-line interface for the `kuzfile` encryption tool.

#![forbid(unsafe_code)]

mod integrity;
mod keyfile;
mod logger;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use kuz_core::{decrypt_block, encrypt_block, expand_key, Block, MasterKey};
use kuz_stream::{decrypt_stream, encrypt_stream_padded};
use log::info;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

/// Kuznechik file encryption CLI.
#[derive(Parser)]
#[command(
    name = "kuzfile",
    version,
    author,
    about = "Encrypts and decrypts files with the Kuznechik-family cipher in chained mode"
)]
struct Cli {
    /// Log file; lines go to stderr when omitted.
    #[arg(long, global = true, value_name = "FILE")]
    log: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file into a framed stream.
    Enc {
        /// File to encrypt.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Key file holding at least 256 bits of ASCII bit text.
        #[arg(long, value_name = "FILE")]
        key: PathBuf,
        /// Character offset into the key file.
        #[arg(long, default_value_t = 0)]
        key_offset: usize,
        /// Output path; derived from a timestamp digest when omitted.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Optional RNG seed for a reproducible IV.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Decrypt a framed stream back into the original bytes.
    Dec {
        /// Frame file to decrypt.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Key file holding at least 256 bits of ASCII bit text.
        #[arg(long, value_name = "FILE")]
        key: PathBuf,
        /// Character offset into the key file.
        #[arg(long, default_value_t = 0)]
        key_offset: usize,
        /// Output path; derived from a timestamp digest when omitted.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Rewrite the executable's reference checksum file.
    Checksum,
    /// Run the built-in cipher self-tests.
    Selftest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.log.as_deref())?;

    match cli.command {
        Commands::Enc {
            input,
            key,
            key_offset,
            output,
            seed,
        } => {
            guard()?;
            cmd_enc(&input, &key, key_offset, output.as_deref(), seed)
        }
        Commands::Dec {
            input,
            key,
            key_offset,
            output,
        } => {
            guard()?;
            cmd_dec(&input, &key, key_offset, output.as_deref())
        }
        Commands::Selftest => {
            guard()?;
            cmd_selftest()
        }
        Commands::Checksum => integrity::create_reference(),
    }
}

fn guard() -> Result<()> {
    integrity::verify_on_start()?;
    integrity::spawn_watchdog();
    Ok(())
}

fn cmd_enc(
    input: &Path,
    key_path: &Path,
    key_offset: usize,
    output: Option<&Path>,
    seed: Option<u64>,
) -> Result<()> {
    let master_key = keyfile::read_master_key(key_path, key_offset)?;
    let round_keys = expand_key(&master_key);
    let data = fs::read(input).with_context(|| format!("read {}", input.display()))?;

    info!("encrypting {} ({} bytes)", input.display(), data.len());
    let iv = generate_iv(seed);
    let frame = encrypt_stream_padded(&data, &round_keys, &iv);

    let output = named_or_derived(output, "enc");
    fs::write(&output, frame).with_context(|| format!("write {}", output.display()))?;
    info!("encrypted to {}", output.display());
    Ok(())
}

fn cmd_dec(input: &Path, key_path: &Path, key_offset: usize, output: Option<&Path>) -> Result<()> {
    let master_key = keyfile::read_master_key(key_path, key_offset)?;
    let round_keys = expand_key(&master_key);
    let frame = fs::read(input).with_context(|| format!("read {}", input.display()))?;

    info!("decrypting {} ({} bytes)", input.display(), frame.len());
    let plaintext = decrypt_stream(&frame, &round_keys)
        .with_context(|| format!("decrypt {}", input.display()))?;

    let output = named_or_derived(output, "dec");
    fs::write(&output, plaintext).with_context(|| format!("write {}", output.display()))?;
    info!("decrypted to {}", output.display());
    Ok(())
}

fn cmd_selftest() -> Result<()> {
    const GOLDEN_CIPHER: Block = [
        0x18, 0x5a, 0xd7, 0x1e, 0x16, 0xe6, 0x2f, 0x8d, 0xfd, 0x96, 0x73, 0xaf, 0x79, 0x75, 0xbe,
        0x9c,
    ];

    info!("running self-tests");

    let schedule = expand_key(&MasterKey::from([0u8; 32]));
    if encrypt_block(b"AAAAAAAAAAAAAAAA", &schedule) != GOLDEN_CIPHER {
        bail!("block cipher does not match the reference vector");
    }

    let mut rng = seeded_rng(None);
    for _ in 0..64 {
        let mut key_bytes = [0u8; 32];
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut key_bytes);
        rng.fill_bytes(&mut block);
        let keys = expand_key(&MasterKey::from(key_bytes));
        if decrypt_block(&encrypt_block(&block, &keys), &keys) != block {
            bail!("block round-trip failed");
        }
    }

    let mut payload = vec![0u8; 1000];
    rng.fill_bytes(&mut payload);
    let mut iv = [0u8; 16];
    rng.fill_bytes(&mut iv);
    let frame = encrypt_stream_padded(&payload, &schedule, &iv);
    let recovered = decrypt_stream(&frame, &schedule).context("stream self-test")?;
    if recovered != payload {
        bail!("stream round-trip failed");
    }

    info!("all self-tests passed");
    println!("self-test passed");
    Ok(())
}

/// Returns `output` when given; otherwise a fresh name derived from a
/// digest of the current timestamp, with the mode's extension.
fn named_or_derived(output: Option<&Path>, extension: &str) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => {
            let stamp = Local::now().format("%Y-%m-%d %H:%M:%S%.9f").to_string();
            let digest = hex::encode(Sha256::digest(stamp.as_bytes()));
            PathBuf::from(format!("{}.{extension}", &digest[..32]))
        }
    }
}

fn generate_iv(seed: Option<u64>) -> Block {
    let mut rng = seeded_rng(seed);
    let mut iv = [0u8; 16];
    rng.fill_bytes(&mut iv);
    iv
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
