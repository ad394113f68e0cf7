use serde::{Deserialize, Serialize};

/// A workflow participant.
///
/// `current_load` and `max_capacity` are workload percentage points.
/// `current_load` may exceed `max_capacity`; overload is a valid,
/// detectable state, not an error.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    /// Workflow role; the role set is deployment configuration, not
    /// modeled as a closed enum here.
    pub role: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(rename = "isAvailable")]
    pub is_available: bool,
    #[serde(rename = "currentLoad")]
    pub current_load: f64,
    #[serde(rename = "maxCapacity")]
    pub max_capacity: f64,
}

impl TeamMember {
    /// Capacity still unallocated, clamped at zero when overloaded.
    pub fn available_capacity(&self) -> f64 {
        (self.max_capacity - self.current_load).max(0.0)
    }
}
