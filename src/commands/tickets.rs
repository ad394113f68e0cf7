use chrono::Utc;
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::TicketListArgs;
use crate::derived;
use crate::error::Result;
use crate::filter;
use crate::output;
use crate::store::DataStore;
use crate::types::Ticket;

#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Brand")]
    brand: String,
    #[tabled(rename = "Type")]
    design_type: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Assignee")]
    assignee: String,
    #[tabled(rename = "Due")]
    due: String,
}

fn to_row(ticket: &Ticket, now: chrono::DateTime<chrono::Utc>) -> TicketRow {
    let due = match &ticket.due_date {
        Some(date) => {
            let formatted = output::format_date_only(date);
            if derived::is_overdue(ticket, now) {
                formatted.red().bold().to_string()
            } else if derived::is_due_soon(ticket, now) {
                formatted.yellow().to_string()
            } else {
                formatted
            }
        }
        None => "-".to_string(),
    };
    TicketRow {
        id: ticket.id.clone(),
        title: output::truncate(&ticket.title, 40),
        brand: ticket.brand_name.clone(),
        design_type: ticket.design_type.label().to_string(),
        status: ticket.status.colored(),
        priority: ticket.priority.colored(),
        assignee: ticket.assignee_name.clone().unwrap_or_default(),
        due,
    }
}

pub fn list(store: &DataStore, args: &TicketListArgs) -> Result<()> {
    // One clock read for the whole pass so overdue/due-soon are consistent
    let now = Utc::now();

    let mut tickets: Vec<&Ticket> = store.tickets.iter().collect();
    if let Some(brand_id) = &args.brand {
        tickets = filter::by_brand(tickets, brand_id);
    }
    if let Some(assignee_id) = &args.assignee {
        tickets = filter::by_assignee(tickets, assignee_id);
    }
    if !args.status.is_empty() {
        tickets = filter::by_statuses(tickets, &args.status);
    }
    if let Some(priority) = args.priority {
        tickets.retain(|t| t.priority == priority);
    }
    if args.overdue {
        tickets.retain(|t| derived::is_overdue(t, now));
    }
    if args.due_soon {
        tickets.retain(|t| derived::is_due_soon(t, now));
    }

    output::print_table(&tickets, |t| to_row(t, now));
    Ok(())
}

/// Ticket plus its derived flags, for JSON consumers.
#[derive(Serialize)]
struct TicketDetail<'a> {
    #[serde(flatten)]
    ticket: &'a Ticket,
    #[serde(rename = "isOverdue")]
    is_overdue: bool,
    #[serde(rename = "isDueSoon")]
    is_due_soon: bool,
    #[serde(rename = "productionProgress")]
    production_progress: Option<f64>,
}

pub fn view(store: &DataStore, id: &str) -> Result<()> {
    let now = Utc::now();
    let ticket = store.ticket(id)?;

    let detail = TicketDetail {
        ticket,
        is_overdue: derived::is_overdue(ticket, now),
        is_due_soon: derived::is_due_soon(ticket, now),
        production_progress: derived::production_progress(ticket),
    };

    output::print_item(&detail, |d| {
        let t = d.ticket;
        println!("{} - {}", t.id, t.title.bold());
        println!();
        println!("Brand:    {}", t.brand_name);
        println!("Type:     {}", t.design_type.label());
        println!("Status:   {}", t.status.colored());
        println!("Priority: {}", t.priority.colored());
        println!(
            "Assignee: {}",
            t.assignee_name.as_deref().unwrap_or("unassigned")
        );
        match &t.due_date {
            Some(date) => {
                let mut line = output::format_date_only(date);
                if d.is_overdue {
                    line = format!("{} {}", line, "(overdue)".red().bold());
                } else if d.is_due_soon {
                    line = format!("{} {}", line, "(due soon)".yellow());
                }
                println!("Due:      {line}");
            }
            None => println!("Due:      -"),
        }
        match t.estimated_hours {
            Some(est) => println!("Hours:    {:.1} tracked / {:.1} estimated", t.tracked_time, est),
            None => println!("Hours:    {:.1} tracked", t.tracked_time),
        }
        // N/A is not the same as 0%; only production tickets with an
        // estimate get a bar
        if let Some(pct) = d.production_progress {
            println!("Progress: {} {:.0}%", output::render_bar(pct, 20), pct);
        }

        if !t.versions.is_empty() {
            println!();
            println!("Versions:");
            for version in &t.versions {
                println!(
                    "  v{}  {}  by {}  {}",
                    version.number,
                    version.file_name,
                    version.uploaded_by,
                    output::format_relative(&version.uploaded_at)
                );
            }
        }

        if !t.attachments.is_empty() {
            println!();
            println!("Attachments:");
            for attachment in &t.attachments {
                println!("  {}  {}", attachment.name, attachment.url.bright_black());
            }
        }

        if !t.comments.is_empty() {
            println!();
            println!("Comments:");
            for comment in &t.comments {
                println!(
                    "  {} ({}):",
                    comment.author_name.bold(),
                    output::format_relative(&comment.created_at)
                );
                println!("    {}", comment.body);
            }
        }
    });

    Ok(())
}
