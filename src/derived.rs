//! Per-ticket derived state: overdue, due-soon, production progress.
//!
//! Every consumer goes through these functions so the semantics cannot
//! drift between views. All functions are pure; callers capture `now`
//! once per evaluation pass so a single render sees consistent flags.

use chrono::{DateTime, Duration, Utc};

use crate::types::{Ticket, TicketStatus};

/// Window before the due date in which a ticket counts as due soon.
pub const DUE_SOON_WINDOW_SECS: i64 = 259_200; // 3 days

/// A ticket is overdue when its due date has passed and it has not been
/// delivered. Delivered tickets are never overdue regardless of date.
pub fn is_overdue(ticket: &Ticket, now: DateTime<Utc>) -> bool {
    match ticket.due_date {
        Some(due) => due < now && ticket.status != TicketStatus::Delivered,
        None => false,
    }
}

/// A ticket is due soon when its due date is within the next three days.
/// Mutually exclusive with overdue by construction.
pub fn is_due_soon(ticket: &Ticket, now: DateTime<Utc>) -> bool {
    if ticket.status == TicketStatus::Delivered || is_overdue(ticket, now) {
        return false;
    }
    match ticket.due_date {
        Some(due) => due - now < Duration::seconds(DUE_SOON_WINDOW_SECS),
        None => false,
    }
}

/// Production progress percentage, capped at 100.
///
/// Defined only for tickets in production with a positive hour estimate;
/// `None` means "no progress bar", which callers must not render as 0%.
/// A zero estimate is treated as not-applicable rather than dividing.
pub fn production_progress(ticket: &Ticket) -> Option<f64> {
    if ticket.status != TicketStatus::Production {
        return None;
    }
    match ticket.estimated_hours {
        Some(estimate) if estimate > 0.0 => {
            Some((ticket.tracked_time / estimate * 100.0).min(100.0))
        }
        _ => None,
    }
}
