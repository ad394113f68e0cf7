use chrono::Utc;
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::aggregate::{self, TicketStats};
use crate::derived;
use crate::error::Result;
use crate::filter;
use crate::output;
use crate::store::DataStore;
use crate::types::{Brand, ColorType, FontType, Ticket};

#[derive(Serialize)]
struct BrandSummary<'a> {
    #[serde(flatten)]
    brand: &'a Brand,
    stats: TicketStats,
}

#[derive(Tabled)]
struct BrandRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Active")]
    active: usize,
    #[tabled(rename = "Done")]
    completed: usize,
    #[tabled(rename = "Completion")]
    completion: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&BrandSummary<'_>> for BrandRow {
    fn from(summary: &BrandSummary<'_>) -> Self {
        Self {
            id: summary.brand.id.clone(),
            name: summary.brand.name.clone(),
            active: summary.stats.active,
            completed: summary.stats.completed,
            completion: format!("{}%", summary.stats.completion_rate),
            updated: output::format_relative(&summary.brand.updated_at),
        }
    }
}

pub fn list(store: &DataStore) -> Result<()> {
    let summaries: Vec<BrandSummary> = store
        .brands
        .iter()
        .map(|brand| BrandSummary {
            brand,
            stats: aggregate::brand_stats(&store.tickets, &brand.id),
        })
        .collect();

    output::print_table(&summaries, |s| BrandRow::from(s));
    Ok(())
}

pub fn view(store: &DataStore, id: &str) -> Result<()> {
    let now = Utc::now();
    let brand = store.brand(id)?;
    let stats = aggregate::brand_stats(&store.tickets, &brand.id);
    let summary = BrandSummary { brand, stats };

    output::print_item(&summary, |s| {
        let brand = s.brand;
        match brand.primary_color() {
            Some(primary) => println!("{} {}", output::swatch(&primary.hex), brand.name.bold()),
            None => println!("{}", brand.name.bold()),
        }
        println!("{}", brand.description);
        println!();
        if let Some(mission) = &brand.mission {
            println!("Mission:  {mission}");
        }
        if let Some(vision) = &brand.vision {
            println!("Vision:   {vision}");
        }
        println!("Audience: {}", brand.target_audience);
        if !brand.values.is_empty() {
            println!("Values:   {}", brand.values.join(", "));
        }
        if !brand.personality.is_empty() {
            println!("Traits:   {}", brand.personality.join(", "));
        }
        println!("Updated:  {}", output::format_relative(&brand.updated_at));

        if !brand.colors.is_empty() {
            println!();
            println!("Palette:");
            for color in &brand.colors {
                let role = match color.color_type {
                    ColorType::Primary => "primary",
                    ColorType::Secondary => "secondary",
                    ColorType::Accent => "accent",
                };
                println!(
                    "  {}  {} ({role})",
                    output::swatch(&color.hex),
                    color.name
                );
            }
        }

        if !brand.fonts.is_empty() {
            println!();
            println!("Fonts:");
            for font in &brand.fonts {
                let role = match font.font_type {
                    FontType::Primary => "primary",
                    FontType::Secondary => "secondary",
                };
                println!("  {} ({role}) - {}", font.name.bold(), font.usage);
            }
        }

        let assets = brand.logos.len() + brand.reference_images.len() + brand.inspirations.len();
        if assets > 0 {
            println!();
            println!(
                "Assets:   {} logos, {} references, {} inspirations",
                brand.logos.len(),
                brand.reference_images.len(),
                brand.inspirations.len()
            );
        }

        println!();
        print_stats_block(&s.stats);

        let active = filter::active(filter::by_brand(&store.tickets, &brand.id));
        if !active.is_empty() {
            println!();
            println!("Active tickets:");
            for ticket in active {
                print_ticket_line(ticket, now);
            }
        }
    });

    Ok(())
}

pub fn print_stats_block(stats: &TicketStats) {
    println!(
        "Tickets:  {} total, {} active, {} delivered",
        stats.total, stats.active, stats.completed
    );
    println!("Tracked:  {:.0}h total", stats.total_tracked_time);
    println!(
        "Average:  {:.0}h per delivered ticket",
        stats.avg_time_per_completed
    );
    println!(
        "Complete: {} {}%",
        output::render_bar(stats.completion_rate as f64, 20),
        stats.completion_rate
    );
}

pub fn print_ticket_line(ticket: &Ticket, now: chrono::DateTime<chrono::Utc>) {
    let mut line = format!(
        "  {} {} {} - {}",
        ticket.priority.marker(),
        ticket.id,
        ticket.status.colored(),
        output::truncate(&ticket.title, 44)
    );
    if derived::is_overdue(ticket, now) {
        line.push_str(&format!(" {}", "overdue".red().bold()));
    } else if derived::is_due_soon(ticket, now) {
        line.push_str(&format!(" {}", "due soon".yellow()));
    }
    println!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{brand, for_brand, ticket};
    use crate::types::TicketStatus;

    #[test]
    fn test_brand_row_from_summary() {
        let tickets = vec![
            for_brand(ticket("t1", TicketStatus::Production), "b1"),
            for_brand(ticket("t2", TicketStatus::Delivered), "b1"),
        ];
        let b = brand("b1", "Acme");
        let summary = BrandSummary {
            brand: &b,
            stats: aggregate::brand_stats(&tickets, "b1"),
        };
        let row = BrandRow::from(&summary);
        assert_eq!(row.id, "b1");
        assert_eq!(row.name, "Acme");
        assert_eq!(row.active, 1);
        assert_eq!(row.completed, 1);
        assert_eq!(row.completion, "50%");
    }

    #[test]
    fn test_summaries_render_as_table() {
        let b = brand("b1", "Acme");
        let summaries = vec![BrandSummary {
            brand: &b,
            stats: aggregate::brand_stats(&[], "b1"),
        }];
        // Row conversion must work for summaries borrowing any lifetime
        output::print_table(&summaries, |s| BrandRow::from(s));
    }
}
