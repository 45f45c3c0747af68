//! Credito main entry point

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use credito_config::Config;
use credito_core::{DueWindow, Frequency, LoanBook, LoanRecord, LoanStatus, NewLoan};
use credito_parser::DefaultSheetParser;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "credito")]
#[command(author = "Credito Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight installment-credit tracker", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Portfolio totals and per-status breakdown
    Summary,
    /// List loans, optionally filtered by status or client
    List {
        /// Status label, e.g. "Vencido" or "Pagado"
        #[arg(long)]
        status: Option<LoanStatus>,
        /// Client-name substring, case-insensitive
        #[arg(long)]
        client: Option<String>,
        /// Page number, 1-based
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Collection list: overdue loans plus those due within N days
    Due {
        #[arg(long, default_value_t = 0)]
        days: i64,
    },
    /// Record a payment for the first loan matching a client name
    Pay {
        #[arg(long)]
        client: String,
        #[arg(long)]
        amount: Decimal,
    },
    /// Add a new credit
    Add {
        #[arg(long)]
        client: String,
        #[arg(long)]
        valor: Decimal,
        /// Payment cadence: diario, semanal, quincenal, mensual
        #[arg(long, default_value = "diario")]
        tipo: Frequency,
        /// Origin date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        fecha: Option<NaiveDate>,
    },
    /// Write the annotated sheet
    Export {
        /// Destination path; defaults to the configured export file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the default configuration file
    InitConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    if matches!(args.command, Command::InitConfig) {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let config = match Config::load(args.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] {}", e.to_details());
            std::process::exit(2);
        }
    };

    let rt = Runtime::new()?;
    rt.block_on(async {
        let parser = Arc::new(DefaultSheetParser::default());
        let mut book = LoanBook::new(config.clone(), parser);

        let sheet_path = config.sheet_path();
        if sheet_path.exists() {
            book.load(sheet_path.clone()).await?;
            for issue in book.import_issues() {
                eprintln!(
                    "[WARN] Row {} flagged: {} (client: {})",
                    issue.row,
                    issue.reason,
                    issue.client.as_deref().unwrap_or("?")
                );
            }
        } else {
            eprintln!("[WARN] Credit sheet not found: {}", sheet_path.display());
        }

        run(args.command, &book, &config).await
    })
}

async fn run(
    command: Command,
    book: &LoanBook,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Summary => {
            println!("{}", book.summary());
            println!();
            for slice in book.status_breakdown() {
                if slice.count > 0 {
                    println!(
                        "{:<18} {:>4}  pendiente {}",
                        slice.label, slice.count, slice.outstanding
                    );
                }
            }
        }
        Command::List {
            status,
            client,
            page,
        } => {
            let mut records = book.all_loans();
            if let Some(status) = status {
                records.retain(|l| l.status == status);
            }
            if let Some(ref query) = client {
                records.retain(|l| l.matches_client(query));
            }

            let per_page = book.page_size();
            let offset = page.saturating_sub(1) * per_page;
            let total = records.len();
            print_loans(records.into_iter().skip(offset).take(per_page));
            println!("-- page {} ({} total)", page, total);
        }
        Command::Due { days } => {
            let today = LoanBook::today();
            let mut records = book.loans_due_within(&DueWindow::next_days(today, days));
            records.sort_by_key(|l| l.next_due_date);
            print_loans(records.into_iter());
        }
        Command::Pay { client, amount } => {
            let updated = book.record_payment_by_client(&client, amount)?;
            println!(
                "{}: pagó {}, saldo {} ({})",
                updated.client,
                amount,
                updated.outstanding(),
                updated.status
            );
            book.export(config.sheet_path()).await?;
        }
        Command::Add {
            client,
            valor,
            tipo,
            fecha,
        } => {
            let record = book.add_loan(NewLoan {
                client,
                principal: valor,
                frequency: tipo,
                origin_date: fecha,
            })?;
            println!(
                "{}: crédito de {} ({}), próximo pago {}",
                record.client,
                record.principal,
                record.frequency,
                record
                    .next_due_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string())
            );
            book.export(config.sheet_path()).await?;
        }
        Command::Export { output } => {
            let path = output.unwrap_or_else(|| config.export_path());
            book.export(path.clone()).await?;
            println!("Exported {} loans to {}", book.loans_count(), path.display());
        }
        Command::InitConfig => unreachable!("handled before loading config"),
    }

    Ok(())
}

fn print_loans(records: impl Iterator<Item = LoanRecord>) {
    println!(
        "{:<20} {:>10} {:<10} {:<12} {:>10} {}",
        "Cliente", "Valor", "Tipo", "Próximo", "Saldo", "Estatus"
    );
    for record in records {
        println!(
            "{:<20} {:>10} {:<10} {:<12} {:>10} {}",
            record.client,
            record.principal,
            record.frequency,
            record
                .next_due_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            record.outstanding(),
            record.status
        );
    }
}
