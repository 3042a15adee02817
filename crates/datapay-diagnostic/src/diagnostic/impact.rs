use serde::{Deserialize, Serialize};

use super::error::{DiagnosticError, InputProblem};

/// Share of marketing spend treated as wasted without integrated data.
pub const WASTED_SPEND_RATIO: f64 = 0.30;
/// Conversion uplift benchmark applied to the customer revenue base.
pub const CONVERSION_UPLIFT_RATIO: f64 = 0.20;
/// Churn reduction benchmark applied to the customer revenue base.
pub const CHURN_REDUCTION_RATIO: f64 = 0.15;
/// Fraction of the revenue base the uplift and churn benchmarks act on.
pub const REVENUE_BASE_SHARE: f64 = 0.01;

pub const MONTHS_PER_YEAR: u64 = 12;
pub const MAX_REPURCHASE_RATE: u64 = 100;

/// Company inputs named as the form and the persistence sink name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompanyField {
    ActiveCustomers,
    InactiveCustomers,
    MonthlyMarketingSpend,
    AverageTicket,
    RepurchaseRate,
}

impl CompanyField {
    pub fn name(self) -> &'static str {
        match self {
            CompanyField::ActiveCustomers => "activeCustomers",
            CompanyField::InactiveCustomers => "inactiveCustomers",
            CompanyField::MonthlyMarketingSpend => "monthlyMarketingSpend",
            CompanyField::AverageTicket => "averageTicket",
            CompanyField::RepurchaseRate => "repurchaseRate",
        }
    }
}

/// Validated company profile. `None` means "not provided", never zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInputs {
    pub active_customers: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactive_customers: Option<u64>,
    pub monthly_marketing_spend: Option<u64>,
    pub average_ticket: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repurchase_rate: Option<u8>,
}

impl CompanyInputs {
    pub fn new(active_customers: u64, monthly_marketing_spend: u64, average_ticket: u64) -> Self {
        Self {
            active_customers: Some(active_customers),
            monthly_marketing_spend: Some(monthly_marketing_spend),
            average_ticket: Some(average_ticket),
            ..Self::default()
        }
    }

    /// Parse raw form strings. Required fields must be present, optional ones may be blank.
    pub fn parse(form: &CompanyInputsForm) -> Result<Self, DiagnosticError> {
        let active_customers = parse_required(
            CompanyField::ActiveCustomers,
            form.active_customers.as_deref(),
        )?;
        let inactive_customers = parse_optional(
            CompanyField::InactiveCustomers,
            form.inactive_customers.as_deref(),
        )?;
        let monthly_marketing_spend = parse_required(
            CompanyField::MonthlyMarketingSpend,
            form.monthly_marketing_spend.as_deref(),
        )?;
        let average_ticket =
            parse_required(CompanyField::AverageTicket, form.average_ticket.as_deref())?;
        let repurchase_rate =
            parse_optional(CompanyField::RepurchaseRate, form.repurchase_rate.as_deref())?
                .map(|value| {
                    if value > MAX_REPURCHASE_RATE {
                        Err(invalid(
                            CompanyField::RepurchaseRate,
                            InputProblem::OutOfRange {
                                value,
                                max: MAX_REPURCHASE_RATE,
                            },
                        ))
                    } else {
                        Ok(value as u8)
                    }
                })
                .transpose()?;

        Ok(Self {
            active_customers: Some(active_customers),
            inactive_customers,
            monthly_marketing_spend: Some(monthly_marketing_spend),
            average_ticket: Some(average_ticket),
            repurchase_rate,
        })
    }

    fn require(field: CompanyField, value: Option<u64>) -> Result<u64, DiagnosticError> {
        value.ok_or_else(|| invalid(field, InputProblem::Missing))
    }
}

/// Company fields exactly as a form submits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInputsForm {
    #[serde(default)]
    pub active_customers: Option<String>,
    #[serde(default)]
    pub inactive_customers: Option<String>,
    #[serde(default)]
    pub monthly_marketing_spend: Option<String>,
    #[serde(default)]
    pub average_ticket: Option<String>,
    #[serde(default)]
    pub repurchase_rate: Option<String>,
}

/// Monthly and annual currency figures derived from the benchmark ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialImpact {
    pub monthly_waste: u64,
    pub monthly_potential: u64,
    pub annual_impact: u64,
}

/// Apply the benchmark model to the company inputs.
pub fn estimate_impact(inputs: &CompanyInputs) -> Result<FinancialImpact, DiagnosticError> {
    let active_customers =
        CompanyInputs::require(CompanyField::ActiveCustomers, inputs.active_customers)?;
    let marketing_spend = CompanyInputs::require(
        CompanyField::MonthlyMarketingSpend,
        inputs.monthly_marketing_spend,
    )?;
    let average_ticket =
        CompanyInputs::require(CompanyField::AverageTicket, inputs.average_ticket)?;

    let monthly_waste = (marketing_spend as f64 * WASTED_SPEND_RATIO).round() as u64;

    let revenue_base = active_customers as f64 * average_ticket as f64;
    let conversion_uplift = revenue_base * CONVERSION_UPLIFT_RATIO * REVENUE_BASE_SHARE;
    let churn_savings = revenue_base * CHURN_REDUCTION_RATIO * REVENUE_BASE_SHARE;
    let monthly_potential = (conversion_uplift + churn_savings).round() as u64;

    let annual_impact = monthly_waste
        .saturating_add(monthly_potential)
        .saturating_mul(MONTHS_PER_YEAR);

    Ok(FinancialImpact {
        monthly_waste,
        monthly_potential,
        annual_impact,
    })
}

fn invalid(field: CompanyField, problem: InputProblem) -> DiagnosticError {
    DiagnosticError::InvalidCompanyInputs { field, problem }
}

fn parse_required(field: CompanyField, raw: Option<&str>) -> Result<u64, DiagnosticError> {
    parse_optional(field, raw)?.ok_or_else(|| invalid(field, InputProblem::Missing))
}

fn parse_optional(
    field: CompanyField,
    raw: Option<&str>,
) -> Result<Option<u64>, DiagnosticError> {
    let Some(trimmed) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    let value = trimmed.parse::<i64>().map_err(|_| {
        invalid(
            field,
            InputProblem::NotAnInteger {
                raw: trimmed.to_string(),
            },
        )
    })?;
    if value < 0 {
        return Err(invalid(field, InputProblem::Negative { value }));
    }

    Ok(Some(value as u64))
}
