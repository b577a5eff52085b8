use clap::Parser;
use colored::*;
use lokal::api::LokalApi;
use lokal::contact::SubmitForm;
use lokal::error::{LokalError, Result};
use lokal::listing::{ListingState, PageSize, RawFilter, SortDirection, SortKey, SortSpec, PAGE_SIZES};
use lokal::loader;
use lokal::model::{ContactMessage, MessageStatus};
use lokal::render;
use lokal::settings::SiteSettings;
use lokal::store::fs::FileStore;
use std::path::PathBuf;
use uuid::Uuid;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: LokalApi<FileStore>,
    data_dir: PathBuf,
    verbose: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = FileStore::new(cli.data_dir.join("contact_messages"));
    let mut ctx = AppContext {
        api: LokalApi::new(store),
        data_dir: cli.data_dir.clone(),
        verbose: cli.verbose,
    };

    match cli.command {
        Some(Commands::List {
            search,
            status,
            floor,
            area_min,
            area_max,
            price_min,
            price_max,
            sort,
            desc,
            page,
            per_page,
            cards,
        }) => {
            let filter = RawFilter {
                search: search.unwrap_or_default(),
                status: status.unwrap_or_default(),
                floor: floor.unwrap_or_default(),
                area_min: area_min.unwrap_or_default(),
                area_max: area_max.unwrap_or_default(),
                price_min: price_min.unwrap_or_default(),
                price_max: price_max.unwrap_or_default(),
            };
            handle_list(&ctx, filter, sort, desc, page, per_page, cards)
        }
        Some(Commands::Settings) => handle_settings(&ctx),
        Some(Commands::Submit {
            name,
            email,
            phone,
            subject,
            message,
            consent,
            marketing,
        }) => {
            let form = SubmitForm {
                name,
                email,
                phone,
                subject,
                message,
                consent,
                marketing,
                honeypot: String::new(),
            };
            handle_submit(&mut ctx, &form)
        }
        Some(Commands::Messages) => handle_messages(&ctx),
        Some(Commands::SetStatus { id, status, notes }) => {
            handle_set_status(&mut ctx, &id, &status, notes)
        }
        None => handle_list(&ctx, RawFilter::default(), None, false, 1, 25, false),
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_list(
    ctx: &AppContext,
    filter: RawFilter,
    sort: Option<String>,
    desc: bool,
    page: usize,
    per_page: usize,
    cards: bool,
) -> Result<()> {
    let report = loader::load_units(&ctx.data_dir.join("units"));
    if ctx.verbose && report.skipped > 0 {
        eprintln!(
            "{}",
            format!("Skipped {} unreadable unit file(s)", report.skipped).yellow()
        );
    }

    let mut state = ListingState::new(report.units);
    state.set_filter(lokal::listing::FilterSpec::parse(&filter));

    if let Some(key) = sort {
        let key: SortKey = key.parse().map_err(LokalError::Validation)?;
        let direction = if desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        state.set_sort(Some(SortSpec { key, direction }));
    }

    let per_page = PageSize::new(per_page).ok_or_else(|| {
        LokalError::Validation(format!("Page size must be one of {:?}", PAGE_SIZES))
    })?;
    state.set_per_page(per_page);
    state.go_to_page(page);

    let view = render::project(&state);
    if cards {
        print!("{}", render::render_cards(&view.rows));
    } else {
        print!("{}", render::render_table(&view.rows, state.sort()));
    }

    let strip = render::render_pagination(&view.pagination);
    if !strip.is_empty() {
        println!();
        print!("{}", strip);
    }
    println!(
        "{}",
        format!(
            "{} unit(s), page {} of {}",
            view.total_filtered,
            view.page,
            view.total_pages.max(1)
        )
        .dimmed()
    );
    if ctx.verbose && view.skipped_rows > 0 {
        eprintln!(
            "{}",
            format!("Skipped {} malformed record(s)", view.skipped_rows).yellow()
        );
    }
    Ok(())
}

fn handle_settings(ctx: &AppContext) -> Result<()> {
    let settings = SiteSettings::load(
        ctx.data_dir
            .join("site_settings")
            .join("site-settings.json"),
    );

    let fields = [
        ("title", &settings.title),
        ("description", &settings.description),
        ("logo", &settings.logo),
        ("phone", &settings.phone),
        ("email", &settings.email),
        ("prospectus", &settings.prospectus),
    ];
    for (label, value) in fields {
        match value {
            Some(v) => println!("{:<12} {}", label, v),
            None => println!("{:<12} {}", label, "(default)".dimmed()),
        }
    }
    Ok(())
}

fn handle_submit(ctx: &mut AppContext, form: &SubmitForm) -> Result<()> {
    let message = ctx.api.submit_message(form)?;
    println!(
        "{} {}",
        "Message received.".green(),
        format!("id: {}", message.id).dimmed()
    );
    Ok(())
}

fn handle_messages(ctx: &AppContext) -> Result<()> {
    let messages = ctx.api.list_messages()?;
    if messages.is_empty() {
        println!("No messages.");
        return Ok(());
    }
    for (i, message) in messages.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_message(message, ctx.verbose);
    }
    Ok(())
}

fn handle_set_status(
    ctx: &mut AppContext,
    id: &str,
    status: &str,
    notes: Option<String>,
) -> Result<()> {
    let id = Uuid::parse_str(id)
        .map_err(|_| LokalError::Validation(format!("Invalid message id: {}", id)))?;
    let status: MessageStatus = status.parse().map_err(LokalError::Validation)?;

    let updated = ctx.api.update_message(&id, status, notes)?;
    println!(
        "{} {} {}",
        "Updated".green(),
        updated.id.to_string().dimmed(),
        status_colored(&updated.status)
    );
    Ok(())
}

fn print_message(message: &ContactMessage, verbose: bool) {
    println!(
        "{}  {}  {}",
        status_colored(&message.status),
        message.name.bold(),
        format_time_ago(message.timestamp).dimmed()
    );
    println!("  {}  {}", message.email, message.phone.dimmed());
    if !message.subject.is_empty() {
        println!("  Subject: {}", message.subject);
    }
    println!("  {}", message.message);
    if !message.notes.is_empty() {
        println!("  Notes: {}", message.notes.italic());
    }
    if verbose {
        println!("  {}", format!("id: {}", message.id).dimmed());
    }
}

fn status_colored(status: &MessageStatus) -> ColoredString {
    match status {
        MessageStatus::New => status.to_string().yellow(),
        MessageStatus::InProgress => status.to_string().blue(),
        MessageStatus::Resolved => status.to_string().green(),
    }
}

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let duration = chrono::Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
