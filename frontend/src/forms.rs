//! Form state and the checks that run before anything is sent.

use chrono::{Local, NaiveDate};

use crate::error::ValidationError;
use crate::models::{ExpenseDraft, IncomeDraft, LoginRequest, RegisterRequest};

pub const EXPENSE_CATEGORIES: [&str; 8] = [
    "Food",
    "Rent",
    "Transport",
    "Shopping",
    "Entertainment",
    "Health",
    "Utilities",
    "Other",
];

pub const INCOME_CATEGORIES: [&str; 6] = [
    "Salary",
    "Freelance",
    "Investment",
    "Business",
    "Gift",
    "Other",
];

pub const DEFAULT_INCOME_CATEGORY: &str = "Salary";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `YYYY-MM-DD`, the format `<input type="date">` speaks.
pub fn date_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[derive(Clone, Debug, PartialEq)]
pub struct IncomeForm {
    pub source: String,
    pub category: String,
    pub amount: String,
    pub date: String,
    pub description: String,
}

impl IncomeForm {
    pub fn new(today: NaiveDate) -> Self {
        IncomeForm {
            source: String::new(),
            category: DEFAULT_INCOME_CATEGORY.to_string(),
            amount: String::new(),
            date: date_input_value(today),
            description: String::new(),
        }
    }

    pub fn validate(&self) -> Result<IncomeDraft, ValidationError> {
        let source = required(&self.source, "source")?;
        let amount = parse_amount(&self.amount)?;
        let date = parse_date(&self.date)?;
        let category = match self.category.trim() {
            "" => DEFAULT_INCOME_CATEGORY.to_string(),
            other => other.to_string(),
        };

        Ok(IncomeDraft {
            source,
            category,
            amount,
            date,
            description: optional(&self.description),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseForm {
    pub category: String,
    pub amount: String,
    pub date: String,
    pub description: String,
}

impl ExpenseForm {
    pub fn new(today: NaiveDate) -> Self {
        ExpenseForm {
            category: String::new(),
            amount: String::new(),
            date: date_input_value(today),
            description: String::new(),
        }
    }

    pub fn validate(&self) -> Result<ExpenseDraft, ValidationError> {
        let category = self.category.trim();
        if category.is_empty() {
            return Err(ValidationError::MissingChoice("category"));
        }
        let amount = parse_amount(&self.amount)?;
        let date = parse_date(&self.date)?;

        Ok(ExpenseDraft {
            category: category.to_string(),
            amount,
            date,
            description: optional(&self.description),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let email = required(&self.email, "email")?;
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("password"));
        }

        Ok(LoginRequest {
            email,
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl SignUpForm {
    /// `profile_image_url` is filled in after the optional photo upload.
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let full_name = required(&self.full_name, "full name")?;
        let email = required(&self.email, "email")?;
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("password"));
        }

        Ok(RegisterRequest {
            full_name,
            email,
            password: self.password.clone(),
            profile_image_url: String::new(),
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    match value.trim() {
        "" => Err(ValidationError::MissingField(field)),
        v => Ok(v.to_string()),
    }
}

fn optional(value: &str) -> Option<String> {
    match value.trim() {
        "" => None,
        v => Some(v.to_string()),
    }
}

pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingField("amount"));
    }
    match raw.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(ValidationError::InvalidAmount),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::MissingField("date"));
    }
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)
}

/// Loose shape check: something@something.tld with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
