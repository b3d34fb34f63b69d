use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::day_entry::{deserialize_monthly_data, MonthlyData};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub rate: Decimal,
    #[serde(default, deserialize_with = "deserialize_monthly_data")]
    pub monthly_data: MonthlyData,
}

impl Employee {
    pub fn new(name: String, rate: Decimal) -> Self {
        Self {
            id: EmployeeId::new(),
            name,
            rate,
            monthly_data: MonthlyData::new(),
        }
    }

    /// Shallow merge: each field present in `patch` replaces the stored one.
    /// `monthly_data` is swapped wholesale, never merged day by day.
    pub fn apply(&mut self, patch: EmployeePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
        if let Some(monthly_data) = patch.monthly_data {
            self.monthly_data = monthly_data;
        }
    }
}

/// Partial update for an [`Employee`]. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub rate: Option<Decimal>,
    pub monthly_data: Option<MonthlyData>,
}

impl EmployeePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn rate(mut self, rate: Decimal) -> Self {
        self.rate = Some(rate);
        self
    }

    pub fn monthly_data(mut self, monthly_data: MonthlyData) -> Self {
        self.monthly_data = Some(monthly_data);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.rate.is_none() && self.monthly_data.is_none()
    }
}
