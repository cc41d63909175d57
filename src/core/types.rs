use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInputs {
    pub initial_investment: f64,
    #[serde(default)]
    pub monthly_contribution: f64,
    pub annual_return_percent: f64,
    pub inflation_percent: f64,
    pub years: u32,
}

impl ScenarioInputs {
    /// Range checks applied before any projection runs. Messages use the
    /// wire field names so API rejections read back to the form.
    pub fn validate(&self) -> Result<(), String> {
        if !self.initial_investment.is_finite() || self.initial_investment < 0.0 {
            return Err("initialInvestment must be >= 0".to_string());
        }
        if !self.monthly_contribution.is_finite() || self.monthly_contribution < 0.0 {
            return Err("monthlyContribution must be >= 0".to_string());
        }
        if !self.annual_return_percent.is_finite()
            || !(0.0..=100.0).contains(&self.annual_return_percent)
        {
            return Err("annualReturn must be between 0 and 100".to_string());
        }
        if !self.inflation_percent.is_finite() || !(0.0..=100.0).contains(&self.inflation_percent)
        {
            return Err("inflationRate must be between 0 and 100".to_string());
        }
        if !(1..=100).contains(&self.years) {
            return Err("years must be between 1 and 100".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyPoint {
    pub year: u32,
    pub nominal_value: f64,
    pub real_value: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub color: &'static str,
    pub visible: bool,
    pub inputs: ScenarioInputs,
    pub yearly_data: Vec<YearlyPoint>,
}
