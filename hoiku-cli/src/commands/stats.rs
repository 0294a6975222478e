//! `stats`: reservation counts.

use crate::commands::FilterArgs;
use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use chrono::{NaiveDate, Utc};
use clap::Args;
use hoiku::query::{DashboardStats, ReservationView};

/// Show reservation counts.
#[derive(Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Day the dashboard figures refer to (defaults to today, UTC)
    #[arg(long, value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl StatsCommand {
    /// Execute the stats command.
    ///
    /// Status and type counts honour the filter; dashboard figures always
    /// cover every reservation.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let mut view = ReservationView::from_repository(&db, config.view_config())?;
        view.set_filter(self.filter.to_filter());
        let counts = view.stats();

        let today = self.today.unwrap_or_else(|| Utc::now().date_naive());
        let dashboard = DashboardStats::compute(view.records(), today);

        if self.json {
            let json = serde_json::json!({
                "total": counts.total(),
                "by_status": counts.by_status,
                "by_type": counts.by_type,
                "dashboard": {
                    "date": today,
                    "stats": dashboard,
                },
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
            return Ok(());
        }

        println!("Total: {}", counts.total());
        println!("By status:");
        for (status, count) in &counts.by_status {
            println!("  {:<12} {count}", status.as_str());
        }
        println!("By type:");
        for (kind, count) in &counts.by_type {
            println!("  {} {count}", kind.label());
        }
        println!("Dashboard ({today}):");
        println!("  today:           {}", dashboard.today_total);
        println!("  pending:         {}", dashboard.pending);
        println!("  checked in:      {}", dashboard.checked_in);
        println!("  cancelled today: {}", dashboard.cancelled_today);
        println!("  children today:  {}", dashboard.children_today);
        Ok(())
    }
}
