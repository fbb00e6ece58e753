use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::api;
use crate::record::{LocalTableStore, MediaRecord, RecordStore};
use crate::tools::domain::domain_of;
use crate::tools::fetch::{FetchOptions, DEFAULT_MAX_BYTES, DEFAULT_TIMEOUT_MS};
use crate::types::{ApiResponse, ExtractionOutcome};

const MANUAL_ENTRY_NOTICE: &str = "could not extract content automatically; add it manually";

#[derive(Parser)]
#[command(
    name = "presscut",
    version,
    about = "Article previews from URLs + media record keeping (JSON only)"
)]
pub struct Cli {
    #[command(flatten)]
    fetch: FetchArgs,

    /// Record table file (JSON lines). Defaults to the user data directory.
    #[arg(long, env = "PRESSCUT_STORE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args)]
struct FetchArgs {
    /// Request timeout in milliseconds
    #[arg(long, env = "PRESSCUT_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,
    /// Maximum response body bytes kept
    #[arg(long, env = "PRESSCUT_MAX_BYTES", default_value_t = DEFAULT_MAX_BYTES)]
    max_bytes: usize,
    /// Override the User-Agent header
    #[arg(long, env = "PRESSCUT_USER_AGENT")]
    user_agent: Option<String>,
}

impl FetchArgs {
    fn options(&self) -> FetchOptions {
        let opts = FetchOptions::new()
            .with_timeout_ms(self.timeout_ms)
            .with_max_bytes(self.max_bytes);
        match &self.user_agent {
            Some(ua) => opts.with_user_agent(ua.clone()),
            None => opts,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Extract title, body text and domain from a URL
    Extract { url: String },
    /// Build a media record (extracted values + overrides) and save it
    Save(SaveArgs),
    /// List saved media records
    List,
}

#[derive(Args)]
struct SaveArgs {
    url: String,
    /// Article title (overrides the extracted one)
    #[arg(long)]
    title: Option<String>,
    /// Article content (overrides the extracted body)
    #[arg(long)]
    content: Option<String>,
    #[arg(long)]
    spokesperson: Option<String>,
    #[arg(long = "portfolio-company")]
    portfolio_company: Option<String>,
    #[arg(long = "managed-by-fund")]
    managed_by_fund: bool,
    /// Publish date (YYYY-MM-DD); defaults to today
    #[arg(long = "publish-date")]
    publish_date: Option<NaiveDate>,
    /// Skip fetching; only the URL's domain is filled in automatically
    #[arg(long = "no-fetch")]
    no_fetch: bool,
}

/// Parse arguments, run the command and print its JSON response.
///
/// Returns whether the response was `ok`.
pub fn run() -> bool {
    let cli = Cli::parse();
    let opts = cli.fetch.options();

    match cli.cmd {
        Command::Extract { url } => finish(extract_cmd(&url, &opts)),
        Command::Save(args) => match open_store(cli.store) {
            Ok(store) => finish(save_cmd(&store, args, &opts)),
            Err(e) => finish(ApiResponse::<()>::err(e.to_string())),
        },
        Command::List => {
            let res = open_store(cli.store).and_then(|store| store.list());
            match res {
                Ok(rows) => finish(ApiResponse::ok(rows)),
                Err(e) => finish(ApiResponse::<()>::err(e.to_string())),
            }
        }
    }
}

fn open_store(path: Option<PathBuf>) -> crate::Result<LocalTableStore> {
    match path {
        Some(p) => LocalTableStore::at(p),
        None => LocalTableStore::new(),
    }
}

fn extract_cmd(url: &str, opts: &FetchOptions) -> ApiResponse<ExtractionOutcome> {
    match api::try_extract(url, opts) {
        Ok(outcome) if outcome.needs_manual_entry() => {
            ApiResponse::ok(outcome).with_notice(MANUAL_ENTRY_NOTICE)
        }
        Ok(outcome) => ApiResponse::ok(outcome),
        Err(e) => ApiResponse::ok(ExtractionOutcome::empty(domain_of(url)))
            .with_notice(format!("{e}; {MANUAL_ENTRY_NOTICE}")),
    }
}

fn save_cmd<S: RecordStore>(
    store: &S,
    args: SaveArgs,
    opts: &FetchOptions,
) -> ApiResponse<crate::record::InsertResult> {
    let (outcome, notice) = if args.no_fetch {
        (ExtractionOutcome::empty(domain_of(&args.url)), None)
    } else {
        match api::try_extract(&args.url, opts) {
            Ok(outcome) => (outcome, None),
            Err(e) => (
                ExtractionOutcome::empty(domain_of(&args.url)),
                Some(format!("{e}; saved without extracted values")),
            ),
        }
    };

    let mut record = MediaRecord::draft(&args.url, &outcome, Local::now().naive_local())
        .with_managed_by_fund(args.managed_by_fund);
    if let Some(title) = args.title {
        record = record.with_title(title);
    }
    if let Some(content) = args.content {
        record = record.with_content(content);
    }
    if let Some(spokesperson) = args.spokesperson {
        record = record.with_spokesperson(spokesperson);
    }
    if let Some(company) = args.portfolio_company {
        record = record.with_portfolio_company(company);
    }
    if let Some(date) = args.publish_date {
        record = record.with_publish_date(date);
    }

    if let Err(e) = record.check() {
        return ApiResponse::err(e.to_string());
    }

    let result = store.insert(&record);
    if !result.success {
        return ApiResponse::err(result.message);
    }
    match notice {
        Some(notice) => ApiResponse::ok(result).with_notice(notice),
        None => ApiResponse::ok(result),
    }
}

fn finish<T: serde::Serialize>(res: ApiResponse<T>) -> bool {
    let ok = res.ok;
    print_json(&res);
    ok
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
