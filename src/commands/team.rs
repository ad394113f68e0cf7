use chrono::Utc;
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::aggregate::{self, TicketStats};
use crate::error::Result;
use crate::filter;
use crate::output;
use crate::store::DataStore;
use crate::types::TeamMember;
use crate::workload::{self, WorkloadTier};

use super::brands::{print_stats_block, print_ticket_line};

#[derive(Serialize)]
struct MemberSummary<'a> {
    #[serde(flatten)]
    member: &'a TeamMember,
    tier: WorkloadTier,
    stats: TicketStats,
}

#[derive(Tabled)]
struct MemberRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Available")]
    available: String,
    #[tabled(rename = "Load")]
    load: String,
    #[tabled(rename = "Workload")]
    tier: String,
}

impl From<&MemberSummary<'_>> for MemberRow {
    fn from(summary: &MemberSummary<'_>) -> Self {
        let member = summary.member;
        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            role: member.role.clone(),
            available: if member.is_available {
                "yes".green().to_string()
            } else {
                "no".bright_black().to_string()
            },
            load: format!("{:.0}/{:.0}", member.current_load, member.max_capacity),
            tier: summary.tier.colored(),
        }
    }
}

fn summarize<'a>(store: &DataStore, member: &'a TeamMember) -> MemberSummary<'a> {
    MemberSummary {
        member,
        tier: workload::classify(member.current_load, member.max_capacity),
        stats: aggregate::member_stats(&store.tickets, &member.id),
    }
}

pub fn list(store: &DataStore) -> Result<()> {
    let summaries: Vec<MemberSummary> = store
        .members
        .iter()
        .map(|member| summarize(store, member))
        .collect();

    output::print_table(&summaries, |s| MemberRow::from(s));
    Ok(())
}

pub fn view(store: &DataStore, id: &str) -> Result<()> {
    let now = Utc::now();
    let member = store.member(id)?;
    let summary = summarize(store, member);

    output::print_item(&summary, |s| {
        let member = s.member;
        println!("{}", member.name.bold());
        println!("Email:    {}", member.email);
        println!("Role:     {}", member.role);
        println!(
            "Status:   {}",
            if member.is_available {
                "available".green().to_string()
            } else {
                "unavailable".bright_black().to_string()
            }
        );
        if !member.skills.is_empty() {
            println!("Skills:   {}", member.skills.join(", "));
        }

        println!();
        let pct = workload::utilization(member.current_load, member.max_capacity);
        println!(
            "Workload: {} {:.0}/{:.0} ({})",
            output::render_bar(pct, 20),
            member.current_load,
            member.max_capacity,
            s.tier.colored()
        );
        println!("Free:     {:.0}%", member.available_capacity());

        println!();
        print_stats_block(&s.stats);

        let active = filter::active(filter::by_assignee(&store.tickets, &member.id));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::member;

    #[test]
    fn test_member_row_from_summary() {
        let m = member("maya", "Maya Lindqvist");
        let summary = MemberSummary {
            member: &m,
            tier: workload::classify(m.current_load, m.max_capacity),
            stats: aggregate::member_stats(&[], "maya"),
        };
        let row = MemberRow::from(&summary);
        assert_eq!(row.id, "maya");
        assert_eq!(row.name, "Maya Lindqvist");
        assert_eq!(row.load, "50/100");
    }

    #[test]
    fn test_summaries_render_as_table() {
        let m = member("maya", "Maya Lindqvist");
        let summaries = vec![MemberSummary {
            member: &m,
            tier: workload::classify(m.current_load, m.max_capacity),
            stats: aggregate::member_stats(&[], "maya"),
        }];
        // Row conversion must work for summaries borrowing any lifetime
        output::print_table(&summaries, |s| MemberRow::from(s));
    }
}
