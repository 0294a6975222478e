//! `list`: filtered, sorted reservation listings.

use crate::error::CliError;
use crate::utils::{format_timestamp, load_configuration, open_database, FormatArg, GlobalOptions};
use chrono::NaiveDate;
use clap::Args;
use hoiku::query::{DateRange, ReservationFilter, ReservationView, SortDirection, SortKey, SortSpec};
use hoiku::{Reservation, ReservationStatus, ReservationType};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 10] = [
    "id",
    "date",
    "start_time",
    "end_time",
    "child_name",
    "parent_name",
    "phone",
    "status",
    "type",
    "created_at",
];

/// Filter options shared by `list` and `bulk-status`.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// First day to include (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<NaiveDate>,

    /// Keep these statuses (repeatable or comma-separated)
    #[arg(long, value_name = "STATUS", value_delimiter = ',')]
    pub status: Vec<ReservationStatus>,

    /// Keep these types, by label or slug (repeatable or comma-separated)
    #[arg(long = "type", value_name = "TYPE", value_delimiter = ',')]
    pub kind: Vec<ReservationType>,

    /// Case-insensitive match on child, parent, phone or email
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,
}

impl FilterArgs {
    /// Builds the library filter. An open end of the date range is unbounded.
    pub fn to_filter(&self) -> ReservationFilter {
        let mut filter = ReservationFilter::new()
            .with_statuses(self.status.iter().copied())
            .with_kinds(self.kind.iter().copied());

        if self.from.is_some() || self.to.is_some() {
            filter = filter.with_date_range(DateRange::new(
                self.from.unwrap_or(NaiveDate::MIN),
                self.to.unwrap_or(NaiveDate::MAX),
            ));
        }
        if let Some(search) = &self.search {
            filter = filter.with_search(search.clone());
        }
        filter
    }
}

/// List reservations.
#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Sort key
    #[arg(long, value_name = "KEY")]
    pub sort: Option<SortKey>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Output format (defaults to the configured one)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let view_config = config.view_config();
        let mut view = ReservationView::from_repository(&db, view_config)?;
        view.set_filter(self.filter.to_filter());

        if self.sort.is_some() || self.desc {
            let key = self.sort.unwrap_or(view_config.default_sort.key);
            let direction = if self.desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            view.set_sort(SortSpec::new(key, direction));
        }

        let visible = view.visible();
        let format = self
            .format
            .unwrap_or_else(|| FormatArg::from(config.output_format()));
        match format {
            FormatArg::Table => format_as_table(&visible)?,
            FormatArg::Json => format_as_json(&visible)?,
            FormatArg::Csv => format_as_delimited(&visible, b',')?,
            FormatArg::Tsv => format_as_delimited(&visible, b'\t')?,
        }
        Ok(())
    }
}

fn row(r: &Reservation) -> [String; 10] {
    [
        r.id().to_string(),
        r.slot().date_key(),
        r.slot().start_time.format("%H:%M").to_string(),
        r.slot().end_time.format("%H:%M").to_string(),
        r.child().name.clone(),
        r.parent().name.clone(),
        r.parent().phone.clone().unwrap_or_default(),
        r.status().to_string(),
        r.kind().label().to_string(),
        format_timestamp(r.created_at()),
    ]
}

/// Format reservations as a human-readable table.
pub fn format_as_table(reservations: &[&Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "ID\tDATE\tTIME\tCHILD\tPARENT\tSTATUS\tTYPE")?;
    for r in reservations {
        writeln!(
            handle,
            "{}\t{}\t{}-{}\t{}\t{}\t{}\t{}",
            r.id(),
            r.slot().date_key(),
            r.slot().start_time.format("%H:%M"),
            r.slot().end_time.format("%H:%M"),
            r.child().name,
            r.parent().name,
            r.status().label(),
            r.kind().label(),
        )?;
    }
    Ok(())
}

/// Format reservations as a pretty JSON array of full records.
pub fn format_as_json(reservations: &[&Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, reservations)?;
    writeln!(handle)?;
    Ok(())
}

fn format_as_delimited(reservations: &[&Reservation], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(stdout.lock());

    writer.write_record(COLUMN_HEADERS)?;
    for r in reservations {
        writer.write_record(row(r))?;
    }
    writer.flush()?;
    Ok(())
}
