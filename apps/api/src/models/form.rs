use serde::{Deserialize, Serialize};

/// One evaluation request, exactly as submitted by the form.
///
/// Fields serialize as camelCase so persisted history stays layout-compatible
/// with records written by the web client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    // Personal profile
    pub gender: String,
    pub age: u32,
    pub family_status: String,
    pub spouse_status: String,
    pub education: String,
    /// Years of experience.
    pub experience: u32,

    // Job
    pub company_name: String,
    pub position: String,
    pub company_type: String,

    // Location & compensation
    pub city: String,
    pub area_type: String,
    /// Monthly pre-tax salary.
    pub salary: f64,
    /// Salary months per year.
    pub months: u32,
    pub benefits: String,
    /// Annual leave days.
    pub vacation_days: u32,
    /// Team atmosphere.
    pub colleague_environment: String,

    // Workload
    pub work_days_per_week: u32,
    pub work_hours_per_day: u32,
    /// Round-trip commute minutes per day.
    pub commute_time: u32,
    /// 1-10. Constrained by the input surface, not re-validated downstream.
    pub stress: u8,

    /// Self-reported drawbacks, free text.
    pub job_drawbacks: String,
}

impl FormInput {
    /// Submission-time invariants. Everything else is the input surface's
    /// responsibility.
    pub fn validate(&self) -> Result<(), String> {
        if self.position.trim().is_empty() {
            return Err("position must not be empty".to_string());
        }
        if self.city.trim().is_empty() {
            return Err("city must not be empty".to_string());
        }
        if !self.salary.is_finite() || self.salary <= 0.0 {
            return Err("salary must be a positive number".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
impl FormInput {
    /// Shared fixture for tests across the crate.
    pub(crate) fn sample() -> Self {
        FormInput {
            gender: "男".to_string(),
            age: 28,
            family_status: "未婚".to_string(),
            spouse_status: "无".to_string(),
            education: "本科".to_string(),
            experience: 5,
            company_name: "某大厂".to_string(),
            position: "产品经理".to_string(),
            company_type: "互联网".to_string(),
            city: "北京".to_string(),
            area_type: "一线城市".to_string(),
            salary: 12000.0,
            months: 13,
            benefits: "五险一金".to_string(),
            vacation_days: 5,
            colleague_environment: "还行".to_string(),
            work_days_per_week: 5,
            work_hours_per_day: 8,
            commute_time: 60,
            stress: 6,
            job_drawbacks: String::new(),
        }
    }
}
