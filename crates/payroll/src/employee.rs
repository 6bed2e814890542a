use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use bytebank_core::{DomainError, DomainResult, EmployeeId, Entity};

use crate::birth_date::BirthDate;
use crate::policy::PayrollPolicy;

/// Entity: Employee.
///
/// Name and birth date are fixed at construction; salary only changes through
/// [`Employee::apply_salary_decrease`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    birth_date: BirthDate,
    salary: f64,
}

impl Employee {
    /// Create an employee without validating the birth date.
    ///
    /// A malformed birth date is only reported when [`Employee::age`] is called.
    pub fn new(name: impl Into<String>, birth_date: impl Into<BirthDate>, salary: f64) -> Self {
        Self::with_id(EmployeeId::new(), name, birth_date, salary)
    }

    pub fn with_id(
        id: EmployeeId,
        name: impl Into<String>,
        birth_date: impl Into<BirthDate>,
        salary: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            birth_date: birth_date.into(),
            salary,
        }
    }

    /// Create an employee, rejecting a blank name, a negative or NaN salary, or a
    /// birth date that is not a real `DD/MM/YYYY` calendar date.
    pub fn try_new(
        name: impl Into<String>,
        birth_date: impl Into<BirthDate>,
        salary: f64,
    ) -> DomainResult<Self> {
        let employee = Self::new(name, birth_date, salary);
        if employee.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if employee.salary.is_nan() || employee.salary < 0.0 {
            return Err(DomainError::invariant("salary cannot be negative"));
        }
        employee.birth_date.to_naive_date()?;
        Ok(employee)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> &BirthDate {
        &self.birth_date
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// Age in whole years as of the current local calendar year.
    pub fn age(&self) -> DomainResult<i32> {
        self.age_in(Local::now().year())
    }

    /// Age as of `current_year`: `current_year - birth year`.
    pub fn age_in(&self, current_year: i32) -> DomainResult<i32> {
        let birth_year = self.birth_date.year()?;
        current_year.checked_sub(birth_year).ok_or_else(|| {
            DomainError::validation(format!(
                "age from birth year {birth_year} in {current_year} is out of range"
            ))
        })
    }

    /// Last space-separated token of the trimmed name.
    pub fn surname(&self) -> &str {
        self.name.trim().rsplit(' ').next().unwrap_or_default()
    }

    /// Cut 10% of the current salary for royal-surnamed employees earning at
    /// least 100 000.
    pub fn apply_salary_decrease(&mut self) {
        self.apply_salary_decrease_with(&PayrollPolicy::default());
    }

    /// The eligibility check runs on every call against the current salary, so
    /// repeated calls compound only while the salary stays above the threshold.
    pub fn apply_salary_decrease_with(&mut self, policy: &PayrollPolicy) {
        let eligible = self.salary >= policy.decrease_threshold && policy.is_royal(self.surname());
        if !eligible {
            tracing::debug!(
                employee_id = %self.id,
                salary = self.salary,
                "salary decrease not applicable"
            );
            return;
        }

        let previous = self.salary;
        let decrease = self.salary * policy.decrease_rate;
        self.salary -= decrease;

        tracing::debug!(
            employee_id = %self.id,
            surname = self.surname(),
            previous_salary = previous,
            new_salary = self.salary,
            "salary decrease applied"
        );
    }

    /// 10% of the salary, or 0 when that exceeds 1 000.
    pub fn calculate_bonus(&self) -> f64 {
        self.calculate_bonus_with(&PayrollPolicy::default())
    }

    pub fn calculate_bonus_with(&self, policy: &PayrollPolicy) -> f64 {
        let bonus = self.salary * policy.bonus_rate;
        if bonus > policy.bonus_cap {
            // Suppressed, not clamped.
            tracing::debug!(
                employee_id = %self.id,
                raw_bonus = bonus,
                cap = policy.bonus_cap,
                "bonus above cap suppressed"
            );
            return 0.0;
        }
        bonus
    }
}

impl Entity for Employee {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Employee {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Employee({}, {}, {})", self.name, self.birth_date, self.salary)
    }
}
