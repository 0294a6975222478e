//! `show`: one reservation in detail.

use crate::error::CliError;
use crate::utils::{format_timestamp, load_configuration, open_database, parse_id, GlobalOptions};
use clap::Args;
use hoiku::service::ReservationService;
use hoiku::Reservation;

/// Show one reservation.
#[derive(Args)]
pub struct ShowCommand {
    /// Reservation id
    pub id: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let id = parse_id(&self.id)?;
        let config = load_configuration(global)?;
        let service = ReservationService::new(open_database(global, &config)?);
        let reservation = service.get(&id)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&reservation)?);
        } else {
            print_details(&reservation);
        }
        Ok(())
    }
}

fn print_details(r: &Reservation) {
    let slot = r.slot();
    println!("ID:        {}", r.id());
    println!(
        "Slot:      {} {}-{}",
        slot.date_key(),
        slot.start_time.format("%H:%M"),
        slot.end_time.format("%H:%M")
    );
    println!("Status:    {} ({})", r.status().label(), r.status());
    println!("Type:      {}", r.kind().label());

    let child = r.child();
    match child.age {
        Some(age) => println!("Child:     {} ({age})", child.name),
        None => println!("Child:     {}", child.name),
    }
    if let Some(birth) = child.birth_date {
        println!("Born:      {birth}");
    }

    let parent = r.parent();
    println!("Parent:    {}", parent.name);
    if let Some(phone) = &parent.phone {
        println!("Phone:     {phone}");
    }
    if let Some(email) = &parent.email {
        println!("Email:     {email}");
    }

    if !r.allergies().is_empty() {
        println!("Allergies: {}", r.allergies().join(", "));
    }
    for (label, value) in [
        ("Medical:  ", r.medical_notes()),
        ("Requests: ", r.special_requests()),
        ("Notes:    ", r.notes()),
    ] {
        if let Some(value) = value {
            println!("{label} {value}");
        }
    }

    println!("Created:   {}", format_timestamp(r.created_at()));
    println!("Updated:   {}", format_timestamp(r.updated_at()));
    if let Some(at) = r.checked_in_at() {
        println!("Check-in:  {}", format_timestamp(at));
    }
    if let Some(at) = r.checked_out_at() {
        println!("Check-out: {}", format_timestamp(at));
    }
}
