use serde::{Deserialize, Serialize};

/// Ticket priority: a rank (1–4) and a maximum response time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl PriorityLevel {
    pub const ALL: [PriorityLevel; 4] = [
        PriorityLevel::Low,
        PriorityLevel::Medium,
        PriorityLevel::High,
        PriorityLevel::Critical,
    ];

    pub const fn rank(self) -> u8 {
        match self {
            PriorityLevel::Low => 1,
            PriorityLevel::Medium => 2,
            PriorityLevel::High => 3,
            PriorityLevel::Critical => 4,
        }
    }

    /// Upper bound on the time to first response.
    pub const fn response_time_hours(self) -> u32 {
        match self {
            PriorityLevel::Low => 48,
            PriorityLevel::Medium => 24,
            PriorityLevel::High => 8,
            PriorityLevel::Critical => 1,
        }
    }

    /// High and critical tickets.
    pub const fn is_urgent(self) -> bool {
        matches!(self, PriorityLevel::High | PriorityLevel::Critical)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PriorityLevel::Low => "LOW",
            PriorityLevel::Medium => "MEDIUM",
            PriorityLevel::High => "HIGH",
            PriorityLevel::Critical => "CRITICAL",
        }
    }

    /// e.g. `CRITICAL (level 4, response 1h)`.
    pub fn label(self) -> String {
        format!(
            "{} (level {}, response {}h)",
            self.as_str(),
            self.rank(),
            self.response_time_hours()
        )
    }
}

impl core::fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
