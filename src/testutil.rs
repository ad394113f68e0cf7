use chrono::{DateTime, TimeZone, Utc};

use crate::types::{Brand, DesignType, Priority, TeamMember, Ticket, TicketStatus};

/// Fixed reference instant so derived-state tests are deterministic.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
}

/// Minimal ticket with sensible defaults; tests override what they need.
pub fn ticket(id: &str, status: TicketStatus) -> Ticket {
    Ticket {
        id: id.to_string(),
        title: format!("Ticket {id}"),
        design_type: DesignType::Logo,
        priority: Priority::Normal,
        status,
        brand_id: "brand-1".to_string(),
        brand_name: "Acme".to_string(),
        brand_color: "#6366f1".to_string(),
        assignee_id: None,
        assignee_name: None,
        due_date: None,
        estimated_hours: None,
        tracked_time: 0.0,
        comments: vec![],
        attachments: vec![],
        versions: vec![],
        created_at: now(),
        updated_at: now(),
    }
}

pub fn brand(id: &str, name: &str) -> Brand {
    Brand {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        mission: None,
        vision: None,
        colors: vec![],
        fonts: vec![],
        values: vec![],
        personality: vec![],
        target_audience: String::new(),
        logos: vec![],
        reference_images: vec![],
        inspirations: vec![],
        updated_at: now(),
    }
}

pub fn member(id: &str, name: &str) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{id}@atelier.example"),
        avatar: None,
        role: "Designer".to_string(),
        skills: vec![],
        is_available: true,
        current_load: 50.0,
        max_capacity: 100.0,
    }
}

pub fn assigned_to(mut t: Ticket, member_id: &str, member_name: &str) -> Ticket {
    t.assignee_id = Some(member_id.to_string());
    t.assignee_name = Some(member_name.to_string());
    t
}

pub fn for_brand(mut t: Ticket, brand_id: &str) -> Ticket {
    t.brand_id = brand_id.to_string();
    t
}
