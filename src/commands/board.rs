use chrono::Utc;
use colored::Colorize;
use serde::Serialize;

use crate::cli::BoardArgs;
use crate::derived;
use crate::error::Result;
use crate::filter;
use crate::output;
use crate::store::DataStore;
use crate::types::{Ticket, TicketStatus};

/// One kanban column, for JSON consumers.
#[derive(Serialize)]
struct Column<'a> {
    status: TicketStatus,
    label: &'static str,
    count: usize,
    tickets: Vec<&'a Ticket>,
}

pub fn run(store: &DataStore, args: &BoardArgs) -> Result<()> {
    let now = Utc::now();

    let mut tickets: Vec<&Ticket> = store.tickets.iter().collect();
    if let Some(brand_id) = &args.brand {
        // Fail early so a typo reads as "brand not found", not an empty board
        store.brand(brand_id)?;
        tickets = filter::by_brand(tickets, brand_id);
    }
    if let Some(assignee_id) = &args.assignee {
        store.member(assignee_id)?;
        tickets = filter::by_assignee(tickets, assignee_id);
    }

    let columns: Vec<Column> = TicketStatus::ALL
        .iter()
        .map(|&status| {
            let column_tickets = filter::by_status(tickets.iter().copied(), status);
            Column {
                status,
                label: status.label(),
                count: column_tickets.len(),
                tickets: column_tickets,
            }
        })
        .collect();

    output::print_item(&columns, |columns| {
        for column in columns {
            let (r, g, b) = column.status.color();
            println!(
                "{} {} {}",
                "●".truecolor(r, g, b),
                column.label.bold(),
                format!("({})", column.count).bright_black()
            );
            if column.tickets.is_empty() {
                println!("    {}", "no tickets".bright_black());
            }
            for ticket in &column.tickets {
                let mut line = format!(
                    "  {} {} {} {}",
                    ticket.priority.marker(),
                    ticket.id,
                    output::truncate(&ticket.title, 36),
                    format!("[{}]", ticket.brand_name).bright_black()
                );
                if let Some(pct) = derived::production_progress(ticket) {
                    line.push_str(&format!(" {:.0}%", pct));
                }
                if derived::is_overdue(ticket, now) {
                    line.push_str(&format!(" {}", "overdue".red().bold()));
                } else if derived::is_due_soon(ticket, now) {
                    line.push_str(&format!(" {}", "due soon".yellow()));
                }
                println!("{line}");
            }
            if column.count > 0 {
                println!("    {}", column.status.hint().bright_black());
            }
            println!();
        }
    });

    Ok(())
}
