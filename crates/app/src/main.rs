//! Emas POS utilities CLI.
//!
//! `quote` computes counter prices off a price-board JSON export (or
//! the built-in demo board) without touching the backend.

use std::{fs, path::PathBuf, process};

use clap::{Args, Parser, Subcommand};
use emas::{
    fixtures,
    money::rupiah,
    prices::PriceSnapshot,
    pricing,
    products::{GoldType, Purity},
};
use rust_decimal::Decimal;

use emas_app::domain::prices::models::GoldPriceRecord;

#[derive(Debug, Parser)]
#[command(name = "emas-app", about = "Emas POS utilities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Quote a line price off a price snapshot.
    Quote(QuoteCommand),
}

#[derive(Debug, Args)]
struct QuoteCommand {
    #[command(subcommand)]
    command: QuoteSubcommand,
}

#[derive(Debug, Subcommand)]
enum QuoteSubcommand {
    /// Sell-side quote for a finished item.
    Sell(SellArgs),

    /// Buy-side quote for customer gold.
    Buyback(BuybackArgs),
}

#[derive(Debug, Args)]
struct SnapshotArgs {
    /// Path to a JSON list of gold price records.
    #[arg(long, conflicts_with = "demo")]
    prices: Option<PathBuf>,

    /// Use the built-in demo price board.
    #[arg(long)]
    demo: bool,
}

#[derive(Debug, Args)]
struct SellArgs {
    #[command(flatten)]
    snapshot: SnapshotArgs,

    /// Gold type (LM, UBS or Lokal).
    #[arg(long)]
    gold_type: GoldType,

    /// Fineness in parts per thousand.
    #[arg(long)]
    purity: u16,

    /// Weight in grams.
    #[arg(long)]
    weight: Decimal,

    /// Making charge in whole rupiah.
    #[arg(long, default_value_t = 0)]
    labor_cost: u64,
}

#[derive(Debug, Args)]
struct BuybackArgs {
    #[command(flatten)]
    snapshot: SnapshotArgs,

    /// Gold type (LM, UBS or Lokal).
    #[arg(long)]
    gold_type: GoldType,

    /// Fineness in parts per thousand.
    #[arg(long)]
    purity: u16,

    /// Weight in grams.
    #[arg(long)]
    weight: Decimal,
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli) {
        eprintln!("{error}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Quote(QuoteCommand {
            command: QuoteSubcommand::Sell(args),
        }) => quote_sell(&args),
        Commands::Quote(QuoteCommand {
            command: QuoteSubcommand::Buyback(args),
        }) => quote_buyback(&args),
    }
}

fn load_snapshot(args: &SnapshotArgs) -> Result<PriceSnapshot, String> {
    if args.demo {
        return Ok(fixtures::demo_snapshot());
    }

    let Some(path) = &args.prices else {
        return Err("pass --prices <file.json> or --demo".to_string());
    };

    let raw = fs::read_to_string(path)
        .map_err(|error| format!("failed to read {}: {error}", path.display()))?;

    let records: Vec<GoldPriceRecord> = serde_json::from_str(&raw)
        .map_err(|error| format!("failed to parse {}: {error}", path.display()))?;

    Ok(PriceSnapshot::from_rows(
        records.iter().map(GoldPriceRecord::to_price),
    ))
}

fn quote_sell(args: &SellArgs) -> Result<(), String> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let purity = Purity::new(args.purity);

    let Some(per_gram) = snapshot.sell_price_per_gram(args.gold_type, purity) else {
        return Err(format!(
            "no sell price today for {} {}",
            args.gold_type.label(),
            purity.label()
        ));
    };

    let price = pricing::sale_price(args.weight, per_gram, args.labor_cost);

    println!(
        "{} {} @ {}/gr",
        args.gold_type.label(),
        purity.label(),
        rupiah(per_gram)
    );
    println!(
        "{} gr + labor {} = {}",
        args.weight,
        rupiah(args.labor_cost),
        rupiah(price)
    );

    Ok(())
}

fn quote_buyback(args: &BuybackArgs) -> Result<(), String> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let purity = Purity::new(args.purity);

    let Some(per_gram) = snapshot.buy_price_per_gram(args.gold_type, purity) else {
        return Err(format!(
            "no buyback price today for {} {}",
            args.gold_type.label(),
            purity.label()
        ));
    };

    let price = pricing::buyback_price(args.weight, per_gram);

    println!(
        "{} {} @ {}/gr",
        args.gold_type.label(),
        purity.label(),
        rupiah(per_gram)
    );
    println!("{} gr = {}", args.weight, rupiah(price));

    Ok(())
}
