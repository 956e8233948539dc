// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line arguments.

use afterclass_client::DEFAULT_BASE_URL;
use clap::{Args as ClapArgs, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Debug, Parser)]
#[command(name = "afterclass", author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the registration backend
    #[arg(long, env = "AFTERCLASS_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "AFTERCLASS_TIMEOUT_SECS", default_value_t = 15)]
    pub timeout: u64,

    /// IANA timezone used to read and display times
    #[arg(long, env = "AFTERCLASS_TIMEZONE", default_value = "Asia/Taipei")]
    pub timezone: String,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the registration window, courses, supplies and classes
    Status,

    /// Submit a registration
    Register(RegisterArgs),

    /// Send a question to the school
    Inquire(InquireArgs),

    /// Back-office operations
    Admin(AdminArgs),
}

#[derive(Debug, ClapArgs)]
pub struct RegisterArgs {
    /// The student's name
    #[arg(long)]
    pub name: String,

    /// The student's birthday (YYYY-MM-DD)
    #[arg(long)]
    pub birthday: String,

    /// The student's class
    #[arg(long)]
    pub class: String,

    /// A course to register for; repeat for several
    #[arg(long = "course")]
    pub courses: Vec<String>,

    /// A supply to order; repeat for several
    #[arg(long = "supply")]
    pub supplies: Vec<String>,
}

#[derive(Debug, ClapArgs)]
pub struct InquireArgs {
    /// Contact name
    #[arg(long)]
    pub name: String,

    /// Mobile number (09xxxxxxxx)
    #[arg(long)]
    pub phone: String,

    /// The question
    #[arg(long)]
    pub question: String,
}

#[derive(Debug, ClapArgs)]
pub struct AdminArgs {
    /// Bearer token from `afterclass admin login`
    #[arg(long, env = "AFTERCLASS_ADMIN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Log in and print a token for later commands
    Login {
        /// The admin password
        #[arg(long, env = "AFTERCLASS_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Show the registration window, or set it when both bounds are given
    Window {
        /// Opening time, e.g. 2026-03-01T09:00
        #[arg(long, requires = "end")]
        start: Option<String>,

        /// Closing time, e.g. 2026-03-31T18:00
        #[arg(long, requires = "start")]
        end: Option<String>,
    },

    /// Course management
    #[command(subcommand)]
    Courses(CourseCommand),

    /// Registration management
    #[command(subcommand)]
    Registrations(RegistrationCommand),
}

#[derive(Debug, Subcommand)]
pub enum CourseCommand {
    /// List courses with remaining capacity
    List,

    /// Create a course
    Add(CourseFields),

    /// Replace a course
    Edit {
        /// Course id
        id: i64,

        #[command(flatten)]
        fields: CourseFields,
    },

    /// Set the capacity of a course
    Capacity {
        /// Course id
        id: i64,

        /// New capacity
        capacity: String,
    },

    /// Delete a course
    Delete {
        /// Course id
        id: i64,
    },
}

#[derive(Debug, ClapArgs)]
pub struct CourseFields {
    /// Course name
    #[arg(long)]
    pub name: String,

    /// Price
    #[arg(long)]
    pub price: String,

    /// Number of sessions
    #[arg(long, default_value = "")]
    pub sessions: String,

    /// Meeting frequency
    #[arg(long, default_value = "")]
    pub frequency: String,

    /// Seat capacity (30 when omitted)
    #[arg(long, default_value = "")]
    pub capacity: String,

    /// Description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Preview video URL
    #[arg(long, default_value = "")]
    pub video_url: String,
}

#[derive(Debug, Subcommand)]
pub enum RegistrationCommand {
    /// List registrations with statistics
    List {
        /// Only show registrations whose student or class matches
        #[arg(long)]
        search: Option<String>,
    },

    /// Show one registration with its line items
    Show {
        /// Registration id
        id: i64,
    },

    /// Delete a registration
    Delete {
        /// Registration id
        id: i64,
    },

    /// Flip the payment status of a registration
    TogglePayment {
        /// Registration id
        id: i64,
    },

    /// Export every registration as CSV
    Export {
        /// Directory to write the file into
        #[arg(long, default_value = ".")]
        dir: std::path::PathBuf,
    },
}
