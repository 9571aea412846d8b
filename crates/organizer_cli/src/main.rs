//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `organizer_core` linkage with a deterministic report.
//! - Exercise one rejected and one accepted submit end to end.
//!
//! Usage: `organizer_cli [config.json] [contact query]`

use organizer_core::{
    core_version, init_logging, DashboardSummary, ListState, Navigator, Organizer, OrganizerConfig,
    OrganizerError, SubmitOutcome, MENU, NO_CONTACTS_MESSAGE,
};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "ORGANIZER_LOG_DIR";

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match OrganizerConfig::from_path(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("organizer_cli: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => OrganizerConfig::default(),
    };
    let query = args.next().unwrap_or_default();

    if let Ok(dir) = std::env::var(LOG_DIR_ENV) {
        let level = organizer_core::default_log_level();
        if let Err(err) = init_logging(level.as_str(), &dir) {
            eprintln!("organizer_cli: logging disabled: {err}");
        }
    }

    match run(config, &query) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_run module=cli status=error error={err}");
            eprintln!("organizer_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: OrganizerConfig, query: &str) -> Result<(), OrganizerError> {
    println!("organizer_core version={}", core_version());

    let mut nav = Navigator::new();
    println!("user={}", nav.user_name());
    for item in MENU {
        let marker = if nav.is_active(item.route_key) { "*" } else { " " };
        println!("menu {marker} {:<10} {}", item.label, item.route_key);
    }

    let delete_policy = config.contact_delete_policy;
    let mut organizer = Organizer::new(config)?;
    let summary = DashboardSummary::build(&organizer, Some(3));
    println!(
        "counts contacts={} reminders={} notes={} emergency={}",
        summary.contact_count,
        summary.reminder_count,
        summary.note_count,
        summary.emergency_contact_count
    );
    for row in &summary.upcoming {
        println!(
            "upcoming {} {} {} ({})",
            row.date,
            row.time,
            row.title,
            row.contact_name.as_deref().unwrap_or("unknown contact")
        );
    }

    if nav.navigate("/contacts").is_ok() {
        let view = organizer.filter_contacts(query);
        match view.state() {
            ListState::NoResults => println!("contacts: {NO_CONTACTS_MESSAGE}"),
            ListState::Rows(count) => {
                println!("contacts query={query:?} rows={count}");
                for contact in view.iter() {
                    println!(
                        "  #{} {:<12} {:<12} {}",
                        contact.id, contact.name, contact.phone, contact.relationship
                    );
                }
            }
        }
    }

    let mut contacts = organizer.contacts_mut();
    contacts.open_add();
    contacts.change_field("phone", "123")?;
    contacts.change_field("relationship", "Brother")?;
    if let SubmitOutcome::Rejected(err) = contacts.submit()? {
        for (field, messages) in err.errors().iter() {
            println!("rejected {field}: {}", messages.join("; "));
        }
    }
    contacts.change_field("name", "Demo Contact")?;
    if let SubmitOutcome::Committed(id) = contacts.submit()? {
        println!("committed contact id={id}");
    }

    println!("contact delete policy={delete_policy:?}");

    nav.logout();
    println!("active route after logout={:?}", nav.active());
    Ok(())
}
