//! `stockwise` command line: render one report from a JSON snapshot.
//!
//! The acting user is named on the command line and must hold the
//! `reports.view` permission in the snapshot's user list.

use std::path::PathBuf;

use anyhow::{Context, anyhow};
use chrono::NaiveDate;
use clap::Parser;

use stockwise_auth::{Permission, authorize, explain_authorization, find_user};
use stockwise_catalog::TransactionType;
use stockwise_core::ProductId;
use stockwise_reporting::{DateRange, ReportFilters, ReportKind, ReportSettings, Snapshot, run_report};

#[derive(Debug, Clone, Parser)]
#[command(name = "stockwise", version, about = "Inventory reports over a JSON snapshot")]
pub struct Cli {
    /// Snapshot file with products, transactions, categories and users.
    pub snapshot: PathBuf,

    /// Report to render: dashboard, low-stock, top-selling, turnover,
    /// categories, valuation or transactions.
    #[arg(short, long, default_value = "dashboard")]
    pub report: ReportKind,

    /// Username of the person requesting the report.
    #[arg(short, long)]
    pub user: String,

    /// First day (inclusive) for the transactions report.
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day (inclusive) for the transactions report.
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Restrict the transactions report to one product.
    #[arg(long)]
    pub product: Option<ProductId>,

    /// Restrict the transactions report to one operator.
    #[arg(long)]
    pub performed_by: Option<String>,

    /// Restrict the transactions report to `in` or `out` movements.
    #[arg(long = "type")]
    pub kind: Option<TransactionType>,
}

impl Cli {
    pub fn filters(&self) -> ReportFilters {
        let date_range = match (self.from, self.to) {
            (None, None) => None,
            (from, to) => Some(DateRange::new(
                from.unwrap_or(NaiveDate::MIN),
                to.unwrap_or(NaiveDate::MAX),
            )),
        };

        ReportFilters {
            date_range,
            product_id: self.product,
            performed_by: self.performed_by.clone(),
            kind: self.kind,
        }
    }
}

/// Load the snapshot and settings, authorize the user, and render the report
/// as pretty-printed JSON.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let settings = ReportSettings::from_env().context("invalid report settings")?;

    let raw = std::fs::read_to_string(&cli.snapshot)
        .with_context(|| format!("failed to read snapshot {}", cli.snapshot.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse snapshot {}", cli.snapshot.display()))?;

    tracing::info!(
        products = snapshot.products.len(),
        transactions = snapshot.transactions.len(),
        categories = snapshot.categories.len(),
        users = snapshot.users.len(),
        "snapshot loaded"
    );

    render(cli, &snapshot, &settings)
}

/// Render the requested report from an already-loaded snapshot.
pub fn render(cli: &Cli, snapshot: &Snapshot, settings: &ReportSettings) -> anyhow::Result<String> {
    let user = find_user(&snapshot.users, &cli.user)
        .ok_or_else(|| anyhow!("unknown user '{}'", cli.user))?;

    let explanation = explain_authorization(user, Permission::ViewReports);
    if !explanation.granted {
        tracing::warn!(user = %user.username, reason = %explanation.reason, "report access denied");
    }
    authorize(user, Permission::ViewReports)?;

    let value = run_report(cli.report, snapshot, settings, &cli.filters())?;

    tracing::info!(report = %cli.report, user = %user.username, "report produced");
    Ok(serde_json::to_string_pretty(&value)?)
}
