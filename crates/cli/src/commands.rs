// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command handlers.
//!
//! Handlers print their result to stdout and return any failure to `main`,
//! which turns it into a notification.

use afterclass_client::{
    ApiClient, PageContext, SyncOutcome, export_file_name, export_registrations_csv,
    submit_inquiry, submit_registration, sync_page,
};
use afterclass_domain::{
    CourseDraft, CourseDraftInput, DomainError, FormSnapshot, Notification, NotificationKind,
    filter_registrations, local_date, visible_courses,
};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use time::OffsetDateTime;
use tracing::info;

use crate::cli::{
    AdminArgs, AdminCommand, CourseCommand, CourseFields, InquireArgs, RegisterArgs,
    RegistrationCommand,
};
use crate::render;

fn print_success(message: Option<String>, fallback: &str) {
    let message: String = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());
    println!("{}", Notification::new(message, NotificationKind::Success));
}

async fn load_page(client: &ApiClient) -> PageContext {
    let SyncOutcome { context, report } = sync_page(client).await;
    if let Some(notification) = report.notification() {
        eprintln!("{notification}");
    }
    context
}

pub async fn status(client: &ApiClient) -> Result<()> {
    let page: PageContext = load_page(client).await;
    let tz = client.config().display_timezone;
    let state = page.window_state(OffsetDateTime::now_utc());

    print!("{}", render::window_section(&state, &page.window, tz));
    println!("\nCourses:");
    print!("{}", render::course_list(&page.courses));
    println!("\nSupplies:");
    print!("{}", render::supply_list(&page.supplies));
    println!("\nClasses: {}", page.classes.join(", "));
    Ok(())
}

pub async fn register(client: &ApiClient, args: RegisterArgs) -> Result<()> {
    let mut page: PageContext = load_page(client).await;

    if !page.classes.is_empty() && !page.classes.iter().any(|c| *c == args.class) {
        return Err(DomainError::UnknownClass(args.class).into());
    }

    let mut form: FormSnapshot = page.blank_form();
    form.name = args.name;
    form.birthday = args.birthday;
    form.class = Some(args.class);
    for course in &args.courses {
        form.check_course(course)?;
    }
    for supply in &args.supplies {
        form.check_supply(supply)?;
    }

    let message: String =
        submit_registration(client, &mut page, &mut form, OffsetDateTime::now_utc()).await?;
    println!("{}", Notification::new(message, NotificationKind::Success));
    println!("\nCourses:");
    print!("{}", render::course_list(&page.courses));
    Ok(())
}

pub async fn inquire(client: &ApiClient, args: InquireArgs) -> Result<()> {
    let message: String = submit_inquiry(client, &args.name, &args.phone, &args.question).await?;
    println!("{}", Notification::new(message, NotificationKind::Success));
    Ok(())
}

pub async fn admin(client: &mut ApiClient, args: AdminArgs) -> Result<()> {
    if args.token.is_some() {
        client.set_token(args.token);
    }

    match args.command {
        AdminCommand::Login { password } => {
            let token: String = client.login(&password).await?;
            println!(
                "{}",
                Notification::with_title(
                    "Login successful",
                    "Set AFTERCLASS_ADMIN_TOKEN or pass --token to use this session",
                    NotificationKind::Success,
                )
            );
            println!("{token}");
            Ok(())
        }
        AdminCommand::Window { start, end } => window(client, start, end).await,
        AdminCommand::Courses(command) => courses(client, command).await,
        AdminCommand::Registrations(command) => registrations(client, command).await,
    }
}

async fn window(client: &ApiClient, start: Option<String>, end: Option<String>) -> Result<()> {
    let tz = client.config().display_timezone;
    let now = OffsetDateTime::now_utc();

    if let (Some(start), Some(end)) = (start, end) {
        let status = client.save_registration_window(&start, &end, now).await?;
        println!(
            "{}",
            Notification::with_title(
                "Saved",
                "Registration time updated",
                NotificationKind::Success
            )
        );
        println!("{}", status.label);
        return Ok(());
    }

    let window = client.registration_window().await?;
    let status = window.evaluate(now).admin_status();
    print!("{}", render::admin_window(&window, &status, tz));
    Ok(())
}

fn draft(fields: &CourseFields) -> Result<CourseDraft, DomainError> {
    CourseDraft::parse(&CourseDraftInput {
        name: &fields.name,
        price: &fields.price,
        sessions: &fields.sessions,
        frequency: &fields.frequency,
        capacity: &fields.capacity,
        description: &fields.description,
        video_url: &fields.video_url,
    })
}

async fn courses(client: &ApiClient, command: CourseCommand) -> Result<()> {
    match command {
        CourseCommand::List => {
            let courses = client.admin_courses().await?;
            print!("{}", render::admin_course_table(&visible_courses(&courses)));
        }
        CourseCommand::Add(fields) => {
            let draft: CourseDraft = draft(&fields)?;
            let message = client.create_course(&draft).await?;
            print_success(message, "Course created");
        }
        CourseCommand::Edit { id, fields } => {
            let draft: CourseDraft = draft(&fields)?;
            let message = client.update_course(id, &draft).await?;
            print_success(message, "Course updated");
        }
        CourseCommand::Capacity { id, capacity } => {
            let message = client.update_capacity(id, &capacity).await?;
            print_success(message, "Capacity updated");
        }
        CourseCommand::Delete { id } => {
            let message = client.delete_course(id).await?;
            print_success(message, "Course deleted");
        }
    }
    Ok(())
}

async fn registrations(client: &ApiClient, command: RegistrationCommand) -> Result<()> {
    let tz = client.config().display_timezone;

    match command {
        RegistrationCommand::List { search } => {
            let response = client.registrations().await?;
            print!("{}", render::statistics(&response.statistics));
            let shown = filter_registrations(
                &response.registrations,
                search.as_deref().unwrap_or_default(),
            );
            print!("{}", render::registration_table(&shown, tz));
        }
        RegistrationCommand::Show { id } => {
            let detail = client.registration_detail(id).await?;
            print!("{}", render::registration_detail(&detail, tz));
        }
        RegistrationCommand::Delete { id } => {
            let message = client.delete_registration(id).await?;
            print_success(message, "Registration deleted");
        }
        RegistrationCommand::TogglePayment { id } => {
            let response = client.registrations().await?;
            let current = response
                .registrations
                .iter()
                .find(|r| r.id == id)
                .ok_or_else(|| eyre!("Registration #{id} not found"))?;
            let message = client.toggle_payment(id, current.is_paid).await?;
            print_success(message, "Payment status updated");
        }
        RegistrationCommand::Export { dir } => {
            let response = client.registrations().await?;
            let bytes: Vec<u8> = export_registrations_csv(&response.registrations, tz)
                .wrap_err("Failed to build the CSV file")?;
            let path = dir.join(export_file_name(local_date(OffsetDateTime::now_utc(), tz)));
            std::fs::write(&path, bytes)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), rows = response.registrations.len(), "Exported registrations");
            println!(
                "{}",
                Notification::with_title(
                    "Export complete",
                    format!("Registrations exported to {}", path.display()),
                    NotificationKind::Success,
                )
            );
        }
    }
    Ok(())
}
