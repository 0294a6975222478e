//! `facilities`: search the facility directory.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, ValueEnum};
use hoiku::facility::{mail_uri, sort_facilities, Facility, FacilityFilter, FacilitySort, FacilityType};
use hoiku::sample::sample_facilities;
use std::io::Write;

/// Output format for the facility list.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FacilityFormat {
    /// Tab-separated table
    Table,
    /// JSON array
    Json,
}

/// Search childcare facilities.
#[derive(Args)]
pub struct FacilitiesCommand {
    /// Keep these facility types, by label or slug (comma-separated)
    #[arg(long = "type", value_name = "TYPE", value_delimiter = ',')]
    pub types: Vec<FacilityType>,

    /// Maximum distance in kilometres
    #[arg(long, value_name = "KM")]
    pub max_distance: Option<f64>,

    /// Minimum rating
    #[arg(long, value_name = "RATING")]
    pub min_rating: Option<f64>,

    /// Only facilities with open slots
    #[arg(long)]
    pub available: bool,

    /// Case-insensitive match on name or address
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Ordering: distance, rating or name
    #[arg(long, default_value = "distance")]
    pub sort: FacilitySort,

    /// Include tel: and mailto: links in the table
    #[arg(long)]
    pub links: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: FacilityFormat,
}

impl FacilitiesCommand {
    /// Execute the facilities command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut filter = FacilityFilter::new().with_types(self.types.iter().copied());
        if let Some(km) = self.max_distance {
            filter = filter.with_max_distance(km);
        }
        if let Some(rating) = self.min_rating {
            filter = filter.with_min_rating(rating);
        }
        if self.available {
            filter = filter.only_available();
        }
        if let Some(search) = &self.search {
            filter = filter.with_search(search.clone());
        }

        let facilities = sample_facilities();
        let matching = filter.apply(&facilities);
        let sorted = sort_facilities(&matching, self.sort);

        match self.format {
            FacilityFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&sorted)?);
                Ok(())
            }
            FacilityFormat::Table => print_table(&sorted, self.links),
        }
    }
}

fn print_table(facilities: &[&Facility], links: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    if links {
        writeln!(handle, "ID\tNAME\tTYPE\tKM\tRATING\tSLOTS\tTEL\tMAIL")?;
    } else {
        writeln!(handle, "ID\tNAME\tTYPE\tKM\tRATING\tSLOTS")?;
    }

    for f in facilities {
        write!(
            handle,
            "{}\t{}\t{}\t{:.1}\t{:.1}\t{}/{}",
            f.id,
            f.name,
            f.facility_type.label(),
            f.distance_km,
            f.rating,
            f.available_slots,
            f.capacity,
        )?;
        if links {
            let tel = f.dial_uri().unwrap_or_else(|| "-".into());
            let subject = format!("{}について", f.name);
            let mail = f
                .contact
                .email
                .as_deref()
                .and_then(|email| mail_uri(email, Some(subject.as_str())).ok())
                .unwrap_or_else(|| "-".into());
            write!(handle, "\t{tel}\t{mail}")?;
        }
        writeln!(handle)?;
    }
    Ok(())
}
