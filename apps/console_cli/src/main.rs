use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use console_core::{
    config::{load_settings, normalize_service_url},
    CustomerConsole, CustomerDirectory, HttpCustomerDirectory, LogNotifier, Notification,
    Notifier, RequestOutcome, Severity,
};
use shared::domain::{Customer, DraftEdit, SortField};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "customer-console", about = "Manage customers in the directory service")]
struct Cli {
    /// Overrides the service url from console.toml and the environment.
    #[arg(long)]
    service_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the customer table.
    List {
        #[arg(long)]
        search: Option<String>,
        /// Header clicks, applied in order after the search.
        #[arg(long = "sort", value_name = "FIELD")]
        sorts: Vec<SortField>,
    },
    Add {
        name: String,
        email: String,
        fav_number: String,
        #[arg(long)]
        inactive: bool,
    },
    Update {
        email: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        new_email: Option<String>,
        #[arg(long)]
        fav_number: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        email: String,
    },
    Toggle {
        email: String,
    },
}

/// Prints to the terminal and keeps a copy in the log.
struct PrintNotifier {
    log: LogNotifier,
}

impl Notifier for PrintNotifier {
    fn notify(&self, notification: Notification) {
        self.log.notify(notification.clone());
        match notification.severity {
            Severity::Success => println!("ok: {}", notification.message),
            Severity::Error => eprintln!("error: {}", notification.message),
        }
    }
}

fn find_customer<'a>(customers: &'a [Customer], email: &str) -> Result<&'a Customer> {
    customers
        .iter()
        .find(|customer| customer.email == email)
        .ok_or_else(|| anyhow!("no customer with email '{email}'"))
}

fn render_table(customers: &[Customer]) -> String {
    let headers = ["#", "Name", "Email", "Favorite Number", "Active"];
    let rows: Vec<[String; 5]> = customers
        .iter()
        .enumerate()
        .map(|(index, customer)| {
            [
                (index + 1).to_string(),
                customer.name.clone(),
                customer.email.clone(),
                customer.fav_number.clone(),
                if customer.active { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();

    let mut widths = headers.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 5]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(headers)];
    out.extend(rows.iter().map(|row| line(row.each_ref().map(String::as_str))));
    out.join("\n")
}

async fn run<D: CustomerDirectory>(
    console: &mut CustomerConsole<D, PrintNotifier>,
    command: Command,
) -> Result<RequestOutcome<()>> {
    let mounted = console.mount().await;
    if !mounted.is_success() {
        return Ok(mounted);
    }

    let outcome = match command {
        Command::List { search, sorts } => {
            if let Some(term) = search {
                console.search(term);
            }
            for field in sorts {
                console.sort(field);
            }
            RequestOutcome::Success(())
        }
        Command::Add {
            name,
            email,
            fav_number,
            inactive,
        } => {
            console.edit_draft(DraftEdit::Name(name));
            console.edit_draft(DraftEdit::Email(email));
            console.edit_draft(DraftEdit::FavNumber(fav_number));
            console.edit_draft(DraftEdit::Active(!inactive));
            console.submit().await
        }
        Command::Update {
            email,
            name,
            new_email,
            fav_number,
            active,
        } => {
            let target = find_customer(console.state().customers(), &email)?.clone();
            console.begin_edit(&target);
            let edits = [
                name.map(DraftEdit::Name),
                new_email.map(DraftEdit::Email),
                fav_number.map(DraftEdit::FavNumber),
                active.map(DraftEdit::Active),
            ];
            for edit in edits.into_iter().flatten() {
                console.edit_draft(edit);
            }
            console.submit().await
        }
        Command::Delete { email } => console.delete(&email).await,
        Command::Toggle { email } => {
            let current = find_customer(console.state().customers(), &email)?.active;
            console.toggle_active(&email, current).await
        }
    };

    println!("{}", render_table(console.state().displayed()));
    Ok(outcome)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut settings = load_settings().context("failed to load console settings")?;
    if let Some(url) = cli.service_url.as_deref() {
        settings.service_url = normalize_service_url(url)?;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(service_url = %settings.service_url, "console: starting");

    let directory = HttpCustomerDirectory::new(&settings.service_url)
        .with_context(|| format!("cannot use service url '{}'", settings.service_url))?;
    let mut console = CustomerConsole::new(directory, PrintNotifier { log: LogNotifier });

    let outcome = run(&mut console, cli.command).await?;
    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
