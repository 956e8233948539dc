// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod cli;
mod commands;
mod render;

use std::time::Duration;

use afterclass_client::{
    ApiClient, ClientConfig, ClientError, INQUIRY_FAILURE_MESSAGE, REGISTRATION_FAILURE_MESSAGE,
};
use afterclass_domain::{Notification, NotificationKind, parse_timezone};
use clap::Parser;
use color_eyre::Result;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::cli::{AdminCommand, Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over -v
    let filter: EnvFilter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(args.verbosity.log_level_filter().as_trace().into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let config = ClientConfig {
        base_url: args.api_url.clone(),
        request_timeout: Duration::from_secs(args.timeout),
        display_timezone: parse_timezone(&args.timezone)?,
        ..ClientConfig::default()
    };
    let mut client: ApiClient = ApiClient::new(config)?;

    let fallback: &str = failure_message(&args.command);
    let result: Result<()> = match args.command {
        Command::Status => commands::status(&client).await,
        Command::Register(register) => commands::register(&client, register).await,
        Command::Inquire(inquire) => commands::inquire(&client, inquire).await,
        Command::Admin(admin) => commands::admin(&mut client, admin).await,
    };

    if let Err(report) = result {
        let notification: Notification = report.downcast_ref::<ClientError>().map_or_else(
            || Notification::new(format!("{report:#}"), NotificationKind::Error),
            |err| {
                let kind = if matches!(err, ClientError::Validation(_)) {
                    NotificationKind::Warning
                } else {
                    NotificationKind::Error
                };
                Notification::new(err.user_message(fallback), kind)
            },
        );
        tracing::debug!(error = ?report, "Command failed");
        eprintln!("{notification}");
        if report
            .downcast_ref::<ClientError>()
            .is_some_and(ClientError::is_unauthorized)
        {
            eprintln!("Log in with `afterclass admin login` and pass the token with --token");
        }
        std::process::exit(1);
    }
    Ok(())
}

/// Message shown when the backend rejects a command without saying why.
const fn failure_message(command: &Command) -> &'static str {
    match command {
        Command::Status => "Failed to load the registration page",
        Command::Register(_) => REGISTRATION_FAILURE_MESSAGE,
        Command::Inquire(_) => INQUIRY_FAILURE_MESSAGE,
        Command::Admin(admin) => match admin.command {
            AdminCommand::Login { .. } => "Wrong password",
            AdminCommand::Window { .. } => "Failed to update the registration time",
            AdminCommand::Courses(_) => "The course operation failed",
            AdminCommand::Registrations(_) => "The registration operation failed",
        },
    }
}
