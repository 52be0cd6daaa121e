//! Command implementations for the weather admin CLI.
//!
//! Each subcommand loads the initial state, performs one operation through
//! the same controller the browser widget uses and prints the resulting
//! screen.

use clap::Subcommand;

pub mod output;
pub mod session;

pub use session::Session;

#[derive(Subcommand)]
pub enum Command {
    /// Show the initial state: configuration, services and locations
    Init,

    /// Reload form data and the location table
    Refresh,

    /// Change configuration values and apply them
    Apply {
        /// Field to set, as NAME=VALUE (repeatable)
        #[arg(short, long = "set", value_parser = parse_setting)]
        settings: Vec<(String, String)>,
    },

    /// Add a location with the given dialog fields
    Add {
        /// Dialog field to set, as NAME=VALUE (repeatable)
        #[arg(short, long = "set", value_parser = parse_setting)]
        settings: Vec<(String, String)>,
    },

    /// Delete the location at a row of the table
    Delete {
        /// 0-based row, as listed by `init`
        row: usize,
    },

    /// Show the weather data of the location at a row
    Show {
        /// 0-based row, as listed by `init`
        row: usize,
    },

    /// Switch to another weather service
    ChangeService {
        /// Service key
        service: String,
    },

    /// Run a service specific lookup from the add dialog (e.g. findcity)
    Lookup {
        /// Dialog action name
        action: String,

        /// Select list that receives the choices
        #[arg(long, default_value = "locationlist")]
        target: String,

        /// Dialog field to set, as NAME=VALUE (repeatable)
        #[arg(short, long = "set", value_parser = parse_setting)]
        settings: Vec<(String, String)>,
    },
}

fn parse_setting(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

pub async fn run(endpoint: &str, csv_output: bool, command: Command) -> anyhow::Result<()> {
    let mut session = Session::connect(endpoint)?;
    session.init().await?;

    let lookup_target = match &command {
        Command::Lookup { target, .. } => Some(target.clone()),
        _ => None,
    };
    match command {
        Command::Init => {}
        Command::Refresh => session.perform(wx_admin::Intent::Refresh).await?,
        Command::Apply { settings } => session.apply(&settings).await?,
        Command::Add { settings } => session.add(&settings).await?,
        Command::Delete { row } => session.perform(wx_admin::Intent::DeleteRow(row)).await?,
        Command::Show { row } => session.perform(wx_admin::Intent::ShowData(row)).await?,
        Command::ChangeService { service } => {
            session.perform(wx_admin::Intent::ChangeService(service)).await?
        }
        Command::Lookup {
            action,
            target,
            settings,
        } => session.lookup(&action, &target, &settings).await?,
    }

    let controller = session.controller();
    let screen = controller.screen();
    if let Some(target) = lookup_target {
        for choice in controller.add_form().choices(&target) {
            println!("{}\t{}", choice.key, choice.name);
        }
    } else if csv_output {
        print!("{}", output::table_csv(&screen.locations)?);
    } else {
        print!(
            "{}",
            output::format_screen(screen, controller.config_form(), controller.add_form())
        );
    }

    if screen.error_panel.visible {
        anyhow::bail!("Server reported {} error(s)", screen.error_panel.messages.len());
    }
    Ok(())
}
