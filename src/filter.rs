//! Pure, order-preserving selection over the ticket collection.
//!
//! Each filter accepts anything that iterates borrowed tickets and
//! returns a `Vec<&Ticket>`, so filters chain by sequential application:
//! `by_status(by_brand(&store.tickets, id), TicketStatus::Production)`.

use crate::types::{Ticket, TicketStatus};

pub fn by_brand<'a, I>(tickets: I, brand_id: &str) -> Vec<&'a Ticket>
where
    I: IntoIterator<Item = &'a Ticket>,
{
    tickets
        .into_iter()
        .filter(|t| t.brand_id == brand_id)
        .collect()
}

pub fn by_assignee<'a, I>(tickets: I, assignee_id: &str) -> Vec<&'a Ticket>
where
    I: IntoIterator<Item = &'a Ticket>,
{
    tickets
        .into_iter()
        .filter(|t| t.assignee_id.as_deref() == Some(assignee_id))
        .collect()
}

pub fn by_status<'a, I>(tickets: I, status: TicketStatus) -> Vec<&'a Ticket>
where
    I: IntoIterator<Item = &'a Ticket>,
{
    tickets
        .into_iter()
        .filter(|t| t.status == status)
        .collect()
}

pub fn by_statuses<'a, I>(tickets: I, statuses: &[TicketStatus]) -> Vec<&'a Ticket>
where
    I: IntoIterator<Item = &'a Ticket>,
{
    tickets
        .into_iter()
        .filter(|t| statuses.contains(&t.status))
        .collect()
}

/// Everything not yet delivered.
pub fn active<'a, I>(tickets: I) -> Vec<&'a Ticket>
where
    I: IntoIterator<Item = &'a Ticket>,
{
    tickets
        .into_iter()
        .filter(|t| t.status != TicketStatus::Delivered)
        .collect()
}

pub fn completed<'a, I>(tickets: I) -> Vec<&'a Ticket>
where
    I: IntoIterator<Item = &'a Ticket>,
{
    by_status(tickets, TicketStatus::Delivered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assigned_to, for_brand, ticket};

    fn fixture() -> Vec<Ticket> {
        vec![
            for_brand(ticket("t1", TicketStatus::Submitted), "b1"),
            assigned_to(
                for_brand(ticket("t2", TicketStatus::Production), "b1"),
                "m1",
                "Maya",
            ),
            assigned_to(
                for_brand(ticket("t3", TicketStatus::Delivered), "b2"),
                "m1",
                "Maya",
            ),
            assigned_to(
                for_brand(ticket("t4", TicketStatus::Production), "b2"),
                "m2",
                "Jonas",
            ),
            for_brand(ticket("t5", TicketStatus::Delivered), "b1"),
        ]
    }

    fn ids(tickets: &[&Ticket]) -> Vec<String> {
        tickets.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_by_brand_preserves_order() {
        let all = fixture();
        assert_eq!(ids(&by_brand(&all, "b1")), vec!["t1", "t2", "t5"]);
    }

    #[test]
    fn test_by_assignee_skips_unassigned() {
        let all = fixture();
        assert_eq!(ids(&by_assignee(&all, "m1")), vec!["t2", "t3"]);
        assert!(by_assignee(&all, "nobody").is_empty());
    }

    #[test]
    fn test_by_status_single_and_set() {
        let all = fixture();
        assert_eq!(ids(&by_status(&all, TicketStatus::Production)), vec!["t2", "t4"]);
        assert_eq!(
            ids(&by_statuses(
                &all,
                &[TicketStatus::Submitted, TicketStatus::Delivered]
            )),
            vec!["t1", "t3", "t5"]
        );
    }

    #[test]
    fn test_active_and_completed_split() {
        let all = fixture();
        assert_eq!(ids(&active(&all)), vec!["t1", "t2", "t4"]);
        assert_eq!(ids(&completed(&all)), vec!["t3", "t5"]);
    }

    #[test]
    fn test_chained_filters_commute() {
        let all = fixture();
        let brand_then_status = by_status(by_brand(&all, "b1"), TicketStatus::Production);
        let status_then_brand = by_brand(by_status(&all, TicketStatus::Production), "b1");
        assert_eq!(ids(&brand_then_status), ids(&status_then_brand));
        assert_eq!(ids(&brand_then_status), vec!["t2"]);
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let all = fixture();
        assert!(by_brand(&all, "unknown-brand").is_empty());
    }
}
