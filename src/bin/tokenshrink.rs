//! TokenShrink CLI binary.
//!
//! Deterministic prompt compression for LLM APIs.
//!
//! # Commands
//!
//! - `compress` - Compress text and prepend a decoder header
//! - `decompress` - Expand text using its decoder header
//! - `detect` - Show the strategy and domain scores for text
//! - `tokens` - Count tokens (built-in table or cl100k_base)
//! - `dict` - Print a domain dictionary
//! - `verify` - Re-tokenize every dictionary entry with cl100k_base
//! - `server` - Start the HTTP API server

use std::collections::BTreeMap;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokenshrink::{
    codec::{
        self, strategy::domain_scores, CompressOptions, Domain, ShrinkEngine, Strategy,
        BUSINESS_DOMAIN, CODE_DOMAIN, COMMON_PHRASES, COMMON_WORDS, LEGAL_DOMAIN, MEDICAL_DOMAIN,
    },
    config::Config,
    server::{Server, ServerConfig},
    tokenizer::{cl100k_count, count_tokens, count_words, Tokenizer, HISTORICAL_ENTRIES, TOKEN_COSTS},
    VERSION,
};

#[derive(Parser)]
#[command(name = "tokenshrink")]
#[command(version = VERSION)]
#[command(about = "TokenShrink - deterministic prompt compression for LLM APIs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress text
    Compress {
        /// Text input (or - for stdin)
        input: Option<String>,

        /// Input file path
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Domain (auto, common, code, medical, legal, business, structural)
        #[arg(short, long, default_value = "auto")]
        domain: String,

        /// Force a strategy label (abbreviation, domain, structural, none)
        #[arg(long)]
        strategy: Option<String>,

        /// Count tokens with cl100k_base instead of the built-in table
        #[arg(long)]
        cl100k: bool,

        /// Show compression statistics
        #[arg(short, long)]
        stats: bool,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Expand compressed text
    Decompress {
        /// Compressed input (or - for stdin)
        input: Option<String>,

        /// Input file path
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Detect compression strategy
    Detect {
        /// Text input (or - for stdin)
        input: Option<String>,

        /// Input file path
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count tokens
    Tokens {
        /// Text input (or - for stdin)
        input: Option<String>,

        /// Input file path
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Also count with cl100k_base
        #[arg(long)]
        cl100k: bool,
    },

    /// Print a domain dictionary
    Dict {
        /// Domain name
        #[arg(default_value = "common")]
        domain: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify dictionary entries against cl100k_base
    Verify {
        /// Print a regenerated TOKEN_COSTS table instead of the report
        #[arg(long)]
        emit_costs: bool,
    },

    /// Start the HTTP API server
    Server {
        /// Listen port
        #[arg(short, long)]
        port: Option<u16>,

        /// Listen host
        #[arg(long)]
        host: Option<String>,

        /// Config file (default: <config dir>/tokenshrink/config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compress {
            input,
            file,
            output,
            domain,
            strategy,
            cl100k,
            stats,
            json,
        } => cmd_compress(input, file, output, domain, strategy, cl100k, stats, json),

        Commands::Decompress {
            input,
            file,
            output,
        } => cmd_decompress(input, file, output),

        Commands::Detect { input, file, json } => cmd_detect(input, file, json),

        Commands::Tokens {
            input,
            file,
            cl100k,
        } => cmd_tokens(input, file, cl100k),

        Commands::Dict { domain, json } => cmd_dict(&domain, json),

        Commands::Verify { emit_costs } => cmd_verify(emit_costs),

        Commands::Server {
            port,
            host,
            config,
            verbose,
        } => cmd_server(port, host, config, verbose),
    }
}

#[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
fn cmd_compress(
    input: Option<String>,
    file: Option<PathBuf>,
    output: Option<PathBuf>,
    domain: String,
    strategy: Option<String>,
    cl100k: bool,
    stats: bool,
    json: bool,
) -> anyhow::Result<()> {
    let content = read_input(input, file)?;
    let config = Config::load()?;
    let engine = ShrinkEngine::with_config(config.compression);

    let mut options = CompressOptions::new().with_domain(domain);
    if let Some(label) = strategy {
        options = options.with_strategy(label.parse::<Strategy>()?);
    }
    if cl100k {
        options = options.with_tokenizer(Tokenizer::cl100k()?);
    }

    let result = engine.compress(&content, &options)?;

    if json {
        write_output(output, &serde_json::to_string_pretty(&result)?)?;
    } else {
        write_output(output, &result.compressed)?;
    }

    if stats {
        let s = &result.stats;
        eprintln!();
        eprintln!("Compression Statistics:");
        eprintln!("  Outcome:      {:?}", result.outcome());
        eprintln!("  Strategy:     {} ({}, confidence {:.2})", s.strategy, s.domain, s.confidence);
        eprintln!("  Tokenizer:    {}", s.tokenizer.as_str());
        eprintln!(
            "  Words:        {} -> {} ({} body + {} header)",
            s.original_words, s.total_compressed_words, s.compressed_words, s.rosetta_words
        );
        eprintln!(
            "  Tokens:       {} -> {} ({} body + {} header)",
            s.original_tokens, s.total_compressed_tokens, s.compressed_tokens, s.rosetta_tokens
        );
        eprintln!("  Ratio:        {:.1}x", s.ratio);
        eprintln!("  Saved:        {} tokens (${:.2})", s.tokens_saved, s.dollars_saved);
        eprintln!(
            "  Entries:      {} replacements, {} patterns",
            s.replacement_count, s.pattern_count
        );
    }

    Ok(())
}

fn cmd_decompress(
    input: Option<String>,
    file: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let content = read_input(input, file)?;
    let result = codec::decompress(&content);

    if let Some(note) = &result.note {
        eprintln!("Warning: {note}");
    }

    write_output(output, &result.decompressed)
}

fn cmd_detect(input: Option<String>, file: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let content = read_input(input, file)?;
    let detection = codec::detect_strategy(&content);
    let scores = domain_scores(&content);

    if json {
        let output = serde_json::json!({
            "strategy": detection.strategy,
            "domain": detection.domain,
            "confidence": detection.confidence,
            "scores": scores
                .iter()
                .map(|(domain, score)| (domain.as_str(), *score))
                .collect::<BTreeMap<_, _>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Strategy:   {}", detection.strategy);
    println!("Domain:     {}", detection.domain);
    println!("Confidence: {:.2}", detection.confidence);
    println!();
    println!("Signal scores:");
    for (domain, score) in scores {
        println!("  {:<10} {score}", domain.as_str());
    }
    Ok(())
}

fn cmd_tokens(input: Option<String>, file: Option<PathBuf>, cl100k: bool) -> anyhow::Result<()> {
    let content = read_input(input, file)?;

    println!("Words:              {}", count_words(&content));
    println!("Tokens (built-in):  {}", count_tokens(&content));
    if cl100k {
        println!("Tokens (cl100k):    {}", cl100k_count(&content)?);
    }
    Ok(())
}

fn cmd_dict(domain: &str, json: bool) -> anyhow::Result<()> {
    let dictionary = codec::get_dictionary(domain);

    if json {
        println!("{}", serde_json::to_string_pretty(&dictionary)?);
        return Ok(());
    }

    println!(
        "{} dictionary ({} entries):",
        Domain::from_name(domain),
        dictionary.len()
    );
    for (original, replacement) in &dictionary {
        let shown = if replacement.is_empty() {
            "(deleted)"
        } else {
            replacement
        };
        println!("  {original:<32} {shown}");
    }
    Ok(())
}

fn cmd_verify(emit_costs: bool) -> anyhow::Result<()> {
    if emit_costs {
        return emit_cost_table();
    }

    let tables = [
        ("common words", &COMMON_WORDS),
        ("common phrases", &COMMON_PHRASES),
        ("code", &CODE_DOMAIN),
        ("medical", &MEDICAL_DOMAIN),
        ("legal", &LEGAL_DOMAIN),
        ("business", &BUSINESS_DOMAIN),
    ];

    let mut checked = 0;
    let mut violations = Vec::new();
    for (name, table) in tables {
        let mut entries: Vec<_> = table.entries().collect();
        entries.sort();
        for (original, replacement) in entries {
            checked += 1;
            let before = cl100k_count(original)?;
            let after = if replacement.is_empty() {
                0
            } else {
                cl100k_count(replacement)?
            };
            if after >= before {
                violations.push((name, *original, *replacement, before, after));
            }
        }
    }

    println!("Checked {checked} dictionary entries against cl100k_base");
    if violations.is_empty() {
        println!("All entries save at least one token");
        return Ok(());
    }

    println!();
    println!("Entries that do not save tokens:");
    for (table, original, replacement, before, after) in &violations {
        println!("  [{table}] {original:?} -> {replacement:?}: {before} -> {after} tokens");
    }
    std::process::exit(1);
}

/// Print a `TOKEN_COSTS` body priced with cl100k_base
fn emit_cost_table() -> anyhow::Result<()> {
    let mut keys: Vec<String> = TOKEN_COSTS.keys().map(|k| (*k).to_string()).collect();
    for table in [
        &COMMON_WORDS,
        &COMMON_PHRASES,
        &CODE_DOMAIN,
        &MEDICAL_DOMAIN,
        &LEGAL_DOMAIN,
        &BUSINESS_DOMAIN,
    ] {
        for (original, replacement) in table.entries() {
            keys.push(original.to_lowercase());
            keys.push(replacement.to_lowercase());
        }
    }
    for (original, replacement) in HISTORICAL_ENTRIES {
        keys.push(original.to_lowercase());
        keys.push(replacement.to_lowercase());
    }

    let mut costs = BTreeMap::new();
    for key in keys.into_iter().filter(|k| !k.is_empty()) {
        if !costs.contains_key(&key) {
            let cost = cl100k_count(&key)?;
            costs.insert(key, cost);
        }
    }

    println!("pub static TOKEN_COSTS: phf::Map<&'static str, usize> = phf_map! {{");
    for (key, cost) in &costs {
        println!("    {key:?} => {cost},");
    }
    println!("}};");
    Ok(())
}

fn cmd_server(
    port: Option<u16>,
    host: Option<String>,
    config_path: Option<PathBuf>,
    verbose: bool,
) -> anyhow::Result<()> {
    // Initialize logging
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Build config
    let mut config = match config_path {
        Some(path) => Config::from_file(path)?.with_env_overrides(),
        None => Config::load()?,
    };
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(host) = host {
        config.server.host = host;
    }
    config.validate()?;

    let server = Server::new(ServerConfig::from_config(&config)?);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async { server.run().await.map_err(|e| anyhow::anyhow!("{}", e)) })
}

// Helper functions

fn read_input(input: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(path) = file {
        Ok(std::fs::read_to_string(path)?)
    } else if let Some(s) = input {
        if s == "-" {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        } else {
            Ok(s)
        }
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

fn write_output(output: Option<PathBuf>, content: &str) -> anyhow::Result<()> {
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}
