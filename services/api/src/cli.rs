use crate::infra::{parse_date, parse_filing_status, parse_locale};
use crate::render;
use crate::server;
use benefit_screener::config::AppConfig;
use benefit_screener::error::AppError;
use benefit_screener::screening::{
    FilerAnswers, FilingStatus, HouseholdAnswers, HouseholdCsvImporter, Locale, ScreeningService,
};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Benefit Screener",
    about = "Screen households for public benefits and tax credits",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Screen one household against every benefit program
    Benefits(BenefitsArgs),
    /// Screen one filer against every tax credit
    Taxes(TaxesArgs),
    /// Screen every household in a CSV export
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct OutputArgs {
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    /// Language for program names and descriptions (en or es)
    #[arg(long, default_value = "en", value_parser = parse_locale)]
    pub(crate) lang: Locale,
    /// Report date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

impl OutputArgs {
    fn report_date(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[derive(Args, Debug)]
pub(crate) struct BenefitsArgs {
    /// Two-letter state code
    #[arg(long)]
    state: String,
    #[arg(long)]
    household_size: u32,
    /// Annual household income in dollars
    #[arg(long)]
    income: f64,
    #[arg(long)]
    age: u32,
    #[arg(long)]
    pregnant: bool,
    #[arg(long)]
    children_under_5: bool,
    #[arg(long)]
    children_under_18: bool,
    #[arg(long)]
    disability: bool,
    #[arg(long)]
    employed: bool,
    #[arg(long)]
    student: bool,
    #[command(flatten)]
    output: OutputArgs,
}

impl BenefitsArgs {
    fn answers(&self) -> HouseholdAnswers {
        HouseholdAnswers {
            state: self.state.clone(),
            household_size: self.household_size,
            annual_income: self.income,
            age: self.age,
            is_pregnant: self.pregnant,
            has_children_under_5: self.children_under_5,
            has_children_under_18: self.children_under_18,
            has_disability: self.disability,
            is_employed: self.employed,
            is_student: self.student,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct TaxesArgs {
    /// Annual income in dollars
    #[arg(long)]
    income: f64,
    /// single, married or hoh
    #[arg(long, default_value = "single", value_parser = parse_filing_status)]
    filing_status: FilingStatus,
    /// Qualifying children for the earned income credit
    #[arg(long, default_value_t = 0)]
    children: u32,
    #[arg(long, default_value_t = 0)]
    children_under_17: u32,
    #[arg(long)]
    age: u32,
    #[arg(long)]
    student: bool,
    /// Contributes to a 401(k), IRA or similar account
    #[arg(long)]
    retirement: bool,
    #[arg(long)]
    college: bool,
    #[arg(long)]
    employed: bool,
    #[command(flatten)]
    output: OutputArgs,
}

impl TaxesArgs {
    fn answers(&self) -> FilerAnswers {
        FilerAnswers {
            annual_income: self.income,
            filing_status: self.filing_status,
            num_children: self.children,
            children_under_17: self.children_under_17,
            age: self.age,
            is_student: self.student,
            contributes_to_retirement: self.retirement,
            is_enrolled_in_college: self.college,
            is_employed: self.employed,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with one household per row
    #[arg(long)]
    csv: PathBuf,
    /// Print the outcomes as JSON instead of text
    #[arg(long)]
    json: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Benefits(args) => run_benefits(args),
        Command::Taxes(args) => run_taxes(args),
        Command::Batch(args) => run_batch(args),
    }
}

fn screening_service() -> Result<ScreeningService, AppError> {
    let config = AppConfig::load()?;
    Ok(ScreeningService::from_config(&config.screening)?)
}

fn run_benefits(args: BenefitsArgs) -> Result<(), AppError> {
    let service = screening_service()?;
    let report = service.screen_benefits(
        &args.answers(),
        args.output.lang,
        args.output.report_date(),
    )?;

    if args.output.json {
        render::print_json(&report)?;
    } else {
        render::print_benefits_report(&report);
    }
    Ok(())
}

fn run_taxes(args: TaxesArgs) -> Result<(), AppError> {
    let service = screening_service()?;
    let report = service.screen_tax_credits(
        &args.answers(),
        args.output.lang,
        args.output.report_date(),
    )?;

    if args.output.json {
        render::print_json(&report)?;
    } else {
        render::print_tax_credit_report(&report);
    }
    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let service = screening_service()?;
    let households = HouseholdCsvImporter::from_path(&args.csv)?;
    let outcomes = service.screen_batch(&households);

    if args.json {
        render::print_json(&render::batch_rows(&outcomes))?;
    } else {
        render::print_batch_outcomes(&args.csv, &outcomes);
    }
    Ok(())
}
