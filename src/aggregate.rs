//! Aggregate statistics over a ticket partition (per brand, per member).

use serde::Serialize;

use crate::filter;
use crate::types::{Ticket, TicketStatus};

/// Counts, hours, and rates for one partition of the ticket collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    /// Sum of tracked hours over the whole partition, active and completed.
    #[serde(rename = "totalTrackedTime")]
    pub total_tracked_time: f64,
    /// Zero when nothing is completed; a display statistic, not a flag.
    #[serde(rename = "avgTimePerCompleted")]
    pub avg_time_per_completed: f64,
    /// Percentage rounded to the nearest integer, 0 for an empty partition.
    #[serde(rename = "completionRate")]
    pub completion_rate: u32,
}

/// Compute stats for any slice of the ticket collection. Never mutates
/// its input; safe to call repeatedly against the same snapshot.
pub fn stats<'a, I>(tickets: I) -> TicketStats
where
    I: IntoIterator<Item = &'a Ticket>,
{
    let mut total = 0usize;
    let mut completed = 0usize;
    let mut total_tracked_time = 0.0f64;

    for ticket in tickets {
        total += 1;
        total_tracked_time += ticket.tracked_time;
        if ticket.status == TicketStatus::Delivered {
            completed += 1;
        }
    }

    let avg_time_per_completed = if completed > 0 {
        total_tracked_time / completed as f64
    } else {
        0.0
    };
    let completion_rate = if total > 0 {
        (completed as f64 / total as f64 * 100.0).round() as u32
    } else {
        0
    };

    TicketStats {
        total,
        active: total - completed,
        completed,
        total_tracked_time,
        avg_time_per_completed,
        completion_rate,
    }
}

/// Stats for the partition of tickets belonging to one brand.
pub fn brand_stats(tickets: &[Ticket], brand_id: &str) -> TicketStats {
    stats(filter::by_brand(tickets, brand_id))
}

/// Stats for the partition of tickets assigned to one member.
pub fn member_stats(tickets: &[Ticket], member_id: &str) -> TicketStats {
    stats(filter::by_assignee(tickets, member_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assigned_to, for_brand, ticket};

    fn tracked(mut t: Ticket, hours: f64) -> Ticket {
        t.tracked_time = hours;
        t
    }

    #[test]
    fn test_empty_partition_is_all_zero() {
        let stats = stats(&[] as &[Ticket]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completion_rate, 0);
        assert_eq!(stats.avg_time_per_completed, 0.0);
        assert_eq!(stats.total_tracked_time, 0.0);
    }

    #[test]
    fn test_brand_with_ten_tickets_four_delivered() {
        let mut tickets = Vec::new();
        for i in 0..4 {
            tickets.push(tracked(
                for_brand(ticket(&format!("d{i}"), TicketStatus::Delivered), "b1"),
                7.0,
            ));
        }
        for i in 0..6 {
            tickets.push(tracked(
                for_brand(ticket(&format!("a{i}"), TicketStatus::Production), "b1"),
                2.0,
            ));
        }
        let stats = brand_stats(&tickets, "b1");
        assert_eq!(stats.total, 10);
        assert_eq!(stats.active, 6);
        assert_eq!(stats.completed, 4);
        assert_eq!(stats.total_tracked_time, 40.0);
        assert_eq!(stats.avg_time_per_completed, 10.0);
        assert_eq!(stats.completion_rate, 40);
    }

    #[test]
    fn test_completion_rate_rounds_to_nearest() {
        let tickets = vec![
            ticket("t1", TicketStatus::Delivered),
            ticket("t2", TicketStatus::Production),
            ticket("t3", TicketStatus::Submitted),
        ];
        // 1/3 = 33.33 -> 33
        assert_eq!(stats(&tickets).completion_rate, 33);

        let tickets = vec![
            ticket("t1", TicketStatus::Delivered),
            ticket("t2", TicketStatus::Delivered),
            ticket("t3", TicketStatus::Production),
        ];
        // 2/3 = 66.67 -> 67
        assert_eq!(stats(&tickets).completion_rate, 67);
    }

    #[test]
    fn test_completion_rate_bounds() {
        let all_done = vec![
            ticket("t1", TicketStatus::Delivered),
            ticket("t2", TicketStatus::Delivered),
        ];
        assert_eq!(stats(&all_done).completion_rate, 100);

        let none_done = vec![ticket("t1", TicketStatus::Assessment)];
        assert_eq!(stats(&none_done).completion_rate, 0);
    }

    #[test]
    fn test_tracked_time_includes_active_tickets() {
        let tickets = vec![
            tracked(ticket("t1", TicketStatus::Production), 3.5),
            tracked(ticket("t2", TicketStatus::Delivered), 6.5),
        ];
        let s = stats(&tickets);
        assert_eq!(s.total_tracked_time, 10.0);
        // Average divides by completed count only
        assert_eq!(s.avg_time_per_completed, 10.0);
    }

    #[test]
    fn test_member_stats_ignores_other_assignees() {
        let tickets = vec![
            tracked(
                assigned_to(ticket("t1", TicketStatus::Delivered), "m1", "Maya"),
                4.0,
            ),
            tracked(
                assigned_to(ticket("t2", TicketStatus::Production), "m2", "Jonas"),
                9.0,
            ),
            ticket("t3", TicketStatus::Submitted),
        ];
        let s = member_stats(&tickets, "m1");
        assert_eq!(s.total, 1);
        assert_eq!(s.completed, 1);
        assert_eq!(s.total_tracked_time, 4.0);
        assert_eq!(s.completion_rate, 100);
    }
}
