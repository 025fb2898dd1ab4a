use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use frontdesk::api::FrontdeskApi;
use frontdesk::commands::config::ConfigAction;
use frontdesk::config::FrontdeskConfig;
use frontdesk::error::{FrontdeskError, Result};
use frontdesk::model::{Guest, Payment, Record, Reservation, Room};
use frontdesk::query::window::ELLIPSIS;
use frontdesk::query::{DateRange, FilterCriteria, ListPage, PageInfo, PageRequest};
use frontdesk::store::fs::FileStore;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands, Domain, ListArgs};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: FrontdeskApi<FileStore>,
    config: FrontdeskConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Reservations { list, room_type }) => {
            handle_reservations(&ctx, &list, room_type)
        }
        Some(Commands::Rooms {
            list,
            hotel,
            room_type,
            floor,
        }) => handle_rooms(&ctx, &list, hotel, room_type, floor),
        Some(Commands::Guests {
            list,
            room_type,
            loyalty,
        }) => handle_guests(&ctx, &list, room_type, loyalty),
        Some(Commands::Payments { list, method }) => handle_payments(&ctx, &list, method),
        Some(Commands::View { domain, id }) => handle_view(&ctx, domain, &id),
        Some(Commands::SetStatus { domain, id, status }) => {
            handle_set_status(&mut ctx, domain, &id, &status)
        }
        Some(Commands::Delete { domain, id }) => handle_delete(&mut ctx, domain, &id),
        Some(Commands::Stats {
            domain,
            status,
            search,
        }) => handle_stats(&ctx, domain, status, search),
        Some(Commands::Report {
            from,
            to,
            occupancy,
        }) => handle_report(&ctx, from, to, occupancy),
        Some(Commands::Export {
            status,
            method,
            from,
            to,
            output,
        }) => handle_export(&ctx, status, method, from, to, output),
        Some(Commands::Seed { seed }) => handle_seed(&mut ctx, seed),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_reservations(&ctx, &ListArgs::default(), None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "frontdesk", "frontdesk")
            .ok_or_else(|| FrontdeskError::Api("Could not determine the data directory".into()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = FrontdeskConfig::load(&data_dir)?;
    let store = FileStore::new(data_dir.clone());
    let api = FrontdeskApi::new(store, data_dir);

    Ok(AppContext { api, config })
}

fn build_criteria(list: &ListArgs, categories: &[(&str, Option<String>)]) -> Result<FilterCriteria> {
    let mut criteria = FilterCriteria::new();
    if let Some(status) = &list.status {
        criteria = criteria.with_status(status);
    }
    if let Some(term) = &list.search {
        criteria = criteria.with_search(term);
    }
    if list.from.is_some() || list.to.is_some() {
        let range = DateRange::parse(list.from.as_deref(), list.to.as_deref())?;
        criteria = criteria.with_date_range(range);
    }
    for (key, value) in categories {
        if let Some(value) = value {
            criteria = criteria.with_category(*key, value);
        }
    }
    Ok(criteria)
}

fn page_request(list: &ListArgs, config: &FrontdeskConfig) -> PageRequest {
    PageRequest::new(list.page, list.page_size.unwrap_or(config.page_size))
}

fn handle_reservations(ctx: &AppContext, list: &ListArgs, room_type: Option<String>) -> Result<()> {
    let criteria = build_criteria(list, &[("room-type", room_type)])?;
    let page: ListPage<Reservation> = ctx.api.list(&criteria, &page_request(list, &ctx.config))?;

    let stats = ctx.api.stats::<Reservation>(None)?;
    println!(
        "{}",
        format!(
            "{} reservations · {} confirmed · {} pending · {} checked in · revenue {}",
            stats.total_reservations,
            stats.confirmed,
            stats.pending,
            stats.checked_in,
            format_amount(stats.revenue, &ctx.config.currency),
        )
        .dimmed()
    );

    if page.rows.is_empty() {
        println!("No reservations found.");
    }
    for r in &page.rows {
        println!(
            "{:<8} {:<22} {:<6} {:<14} {} {:>6} {:>10}",
            r.id,
            truncate_to_width(&r.guest.name, 22),
            r.room.number,
            r.check_in.format("%Y-%m-%d"),
            status_badge(r.status_label()),
            format!("{}n", r.nights),
            format_amount(r.total, &ctx.config.currency),
        );
    }
    print_pagination(&page.pagination);
    Ok(())
}

fn handle_rooms(
    ctx: &AppContext,
    list: &ListArgs,
    hotel: Option<String>,
    room_type: Option<String>,
    floor: Option<String>,
) -> Result<()> {
    let criteria = build_criteria(
        list,
        &[("hotel", hotel), ("room-type", room_type), ("floor", floor)],
    )?;
    let page: ListPage<Room> = ctx.api.list(&criteria, &page_request(list, &ctx.config))?;

    let stats = ctx.api.stats::<Room>(None)?;
    println!(
        "{}",
        format!(
            "{} rooms · {} available · {} occupied · avg rate {}",
            stats.total_rooms,
            stats.available,
            stats.occupied,
            format_amount(stats.avg_rate_per_night, &ctx.config.currency),
        )
        .dimmed()
    );

    if page.rows.is_empty() {
        println!("No rooms found.");
    }
    for r in &page.rows {
        println!(
            "{:<10} {:<6} {:<14} fl.{:<3} {} {:>10}",
            r.id,
            r.room_number,
            truncate_to_width(&r.room_type.name, 14),
            r.floor,
            status_badge(r.status_label()),
            format_amount(r.price, &ctx.config.currency),
        );
    }
    print_pagination(&page.pagination);
    Ok(())
}

fn handle_guests(
    ctx: &AppContext,
    list: &ListArgs,
    room_type: Option<String>,
    loyalty: Option<String>,
) -> Result<()> {
    let criteria = build_criteria(list, &[("room-type", room_type), ("loyalty", loyalty)])?;
    let page: ListPage<Guest> = ctx.api.list(&criteria, &page_request(list, &ctx.config))?;

    let stats = ctx.api.stats::<Guest>(None)?;
    println!(
        "{}",
        format!(
            "{} guests · {} active · {} VIP · {} new",
            stats.total_guests, stats.active_guests, stats.vip_guests, stats.new_guests,
        )
        .dimmed()
    );

    if page.rows.is_empty() {
        println!("No guests found.");
    }
    for g in &page.rows {
        let loyalty = g
            .loyalty_tier
            .map(|t| t.as_str())
            .unwrap_or("-");
        println!(
            "{:<8} {:<22} {:<6} {:<14} {:<10} {}",
            g.guest_id,
            truncate_to_width(&g.name, 22),
            g.room.number,
            g.check_in.format("%Y-%m-%d"),
            loyalty,
            status_badge(g.status_label()),
        );
    }
    print_pagination(&page.pagination);
    Ok(())
}

fn handle_payments(ctx: &AppContext, list: &ListArgs, method: Option<String>) -> Result<()> {
    let criteria = build_criteria(list, &[("method", method)])?;
    let page: ListPage<Payment> = ctx.api.list(&criteria, &page_request(list, &ctx.config))?;

    let stats = ctx.api.stats::<Payment>(None)?;
    println!(
        "{}",
        format!(
            "revenue {} · {} completed · {} pending · {} failed",
            format_amount(stats.total_revenue, &ctx.config.currency),
            stats.completed,
            stats.pending,
            stats.failed,
        )
        .dimmed()
    );

    if page.rows.is_empty() {
        println!("No payments found.");
    }
    for p in &page.rows {
        println!(
            "{:<8} {:<18} {:<14} {:>10} {} {}",
            p.id,
            truncate_to_width(&p.transaction_id, 18),
            p.method.as_str(),
            format_amount(p.amount, &ctx.config.currency),
            status_badge(p.payment_status.as_str()),
            format_time_ago(p.created_at).dimmed(),
        );
    }
    print_pagination(&page.pagination);
    Ok(())
}

fn handle_view(ctx: &AppContext, domain: Domain, id: &str) -> Result<()> {
    let rendered = match domain {
        Domain::Reservations => render_record(&ctx.api.view::<Reservation>(id)?)?,
        Domain::Rooms => render_record(&ctx.api.view::<Room>(id)?)?,
        Domain::Guests => render_record(&ctx.api.view::<Guest>(id)?)?,
        Domain::Payments => render_record(&ctx.api.view::<Payment>(id)?)?,
    };
    println!("{}", rendered);
    Ok(())
}

fn render_record<R: serde::Serialize>(record: &R) -> Result<String> {
    serde_json::to_string_pretty(record).map_err(FrontdeskError::Serialization)
}

fn handle_set_status(ctx: &mut AppContext, domain: Domain, id: &str, status: &str) -> Result<()> {
    let label = match domain {
        Domain::Reservations => ctx
            .api
            .set_status::<Reservation>(id, status)?
            .status_label(),
        Domain::Rooms => ctx.api.set_status::<Room>(id, status)?.status_label(),
        Domain::Guests => ctx.api.set_status::<Guest>(id, status)?.status_label(),
        Domain::Payments => ctx.api.set_status::<Payment>(id, status)?.status_label(),
    };
    println!("{} {} is now {}", "Updated:".green(), id, status_badge(label));
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, domain: Domain, id: &str) -> Result<()> {
    match domain {
        Domain::Reservations => ctx.api.delete::<Reservation>(id)?,
        Domain::Rooms => ctx.api.delete::<Room>(id)?,
        Domain::Guests => ctx.api.delete::<Guest>(id)?,
        Domain::Payments => ctx.api.delete::<Payment>(id)?,
    }
    println!("{} {}", "Deleted:".green(), id);
    Ok(())
}

fn handle_stats(
    ctx: &AppContext,
    domain: Domain,
    status: Option<String>,
    search: Option<String>,
) -> Result<()> {
    let criteria = match (&status, &search) {
        (None, None) => None,
        _ => {
            let mut c = FilterCriteria::new();
            if let Some(s) = status {
                c = c.with_status(s);
            }
            if let Some(term) = search {
                c = c.with_search(term);
            }
            Some(c)
        }
    };
    let criteria = criteria.as_ref();
    let currency = &ctx.config.currency;

    match domain {
        Domain::Reservations => {
            let stats = ctx.api.stats::<Reservation>(criteria)?;
            print_card("Total reservations", &stats.total_reservations.to_string());
            print_card("Confirmed", &stats.confirmed.to_string());
            print_card("Pending", &stats.pending.to_string());
            print_card("Checked in", &stats.checked_in.to_string());
            print_card("Cancelled", &stats.cancelled.to_string());
            print_card("Revenue", &format_amount(stats.revenue, currency));
        }
        Domain::Rooms => {
            let stats = ctx.api.stats::<Room>(criteria)?;
            print_card("Total rooms", &stats.total_rooms.to_string());
            print_card("Available", &stats.available.to_string());
            print_card("Occupied", &stats.occupied.to_string());
            print_card(
                "Avg rate per night",
                &format_amount(stats.avg_rate_per_night, currency),
            );
        }
        Domain::Guests => {
            let stats = ctx.api.stats::<Guest>(criteria)?;
            print_card("Total guests", &stats.total_guests.to_string());
            print_card("Active", &stats.active_guests.to_string());
            print_card("VIP", &stats.vip_guests.to_string());
            print_card("New", &stats.new_guests.to_string());
        }
        Domain::Payments => {
            let stats = ctx.api.stats::<Payment>(criteria)?;
            print_card("Total revenue", &format_amount(stats.total_revenue, currency));
            print_card("Completed", &stats.completed.to_string());
            print_card("Pending", &stats.pending.to_string());
            print_card("Failed", &stats.failed.to_string());
        }
    }
    Ok(())
}

fn handle_report(
    ctx: &AppContext,
    from: Option<String>,
    to: Option<String>,
    occupancy: bool,
) -> Result<()> {
    if occupancy {
        let snapshot = ctx.api.occupancy()?;
        print_card(
            "Occupied",
            &format!("{:.1}%", snapshot.occupied_percentage),
        );
        print_card(
            "Available",
            &format!("{:.1}%", snapshot.available_percentage),
        );
        return Ok(());
    }

    let range = DateRange::parse(from.as_deref(), to.as_deref())?;
    let rows = ctx.api.reports(&range)?;
    if rows.is_empty() {
        println!("No reservation activity in range.");
        return Ok(());
    }

    println!(
        "{:<12} {:>13} {:>12} {:>14}",
        "Date".bold(),
        "Reservations".bold(),
        "Revenue".bold(),
        "Avg/night".bold(),
    );
    for row in &rows {
        println!(
            "{:<12} {:>13} {:>12} {:>14}",
            row.date,
            row.total_reservations,
            format_amount(row.total_revenue, &ctx.config.currency),
            format_amount(row.avg_price_per_night, &ctx.config.currency),
        );
    }
    Ok(())
}

fn handle_export(
    ctx: &AppContext,
    status: Option<String>,
    method: Option<String>,
    from: Option<String>,
    to: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut criteria = FilterCriteria::new();
    if let Some(status) = status {
        criteria = criteria.with_status(status);
    }
    if let Some(method) = method {
        criteria = criteria.with_category("method", method);
    }
    if from.is_some() || to.is_some() {
        criteria = criteria.with_date_range(DateRange::parse(from.as_deref(), to.as_deref())?);
    }

    let csv = ctx.api.export_payments(&criteria)?;
    match output {
        Some(path) => {
            std::fs::write(&path, csv).map_err(FrontdeskError::Io)?;
            println!("{} {}", "Exported to".green(), path.display());
        }
        None => print!("{}", csv),
    }
    Ok(())
}

fn handle_seed(ctx: &mut AppContext, seed: u64) -> Result<()> {
    let summary = ctx.api.seed(seed)?;
    println!(
        "{} {} rooms, {} guests, {} reservations, {} payments (seed {})",
        "Seeded:".green(),
        summary.rooms,
        summary.guests,
        summary.reservations,
        summary.payments,
        seed,
    );
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set { key, value },
    };

    let config = ctx.api.config(action)?;
    println!("page-size = {}", config.page_size);
    println!("currency = {}", config.currency);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let created = ctx.api.init()?;
    if created {
        println!(
            "{} {}",
            "Initialized data directory".green(),
            ctx.api.data_dir().display()
        );
    } else {
        println!("Data directory already exists.");
    }
    Ok(())
}

fn print_card(label: &str, value: &str) {
    println!("{:<22} {}", format!("{}:", label).dimmed(), value.bold());
}

/// Render the paging control line, e.g. `1 … 4 [5] 6 … 20`.
fn print_pagination(info: &PageInfo) {
    if info.total_items == 0 {
        return;
    }

    let mut bar = String::new();
    for n in info.window() {
        if !bar.is_empty() {
            bar.push(' ');
        }
        if n == ELLIPSIS {
            bar.push('…');
        } else if n as usize == info.page {
            bar.push_str(&format!("[{}]", n));
        } else {
            bar.push_str(&n.to_string());
        }
    }

    println!(
        "{}  {}",
        bar,
        format!(
            "page {} of {}, {} records",
            info.page, info.total_pages, info.total_items
        )
        .dimmed(),
    );
}

fn status_badge(label: &str) -> ColoredString {
    match label.to_lowercase().as_str() {
        "confirmed" | "available" | "active" | "vip active" | "completed" | "check-in" => {
            label.green()
        }
        "pending" | "reserved" | "cleaning" | "new" => label.yellow(),
        "cancelled" | "failed" | "blacklisted" | "no show" | "out of service" => label.red(),
        _ => label.normal(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_amount(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
