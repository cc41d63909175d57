use super::types::{ScenarioInputs, YearlyPoint};

/// Projects a scenario into `years + 1` yearly points, year 0 included.
/// Assumes pre-validated inputs; never fails for in-range values.
pub fn project(inputs: &ScenarioInputs) -> Vec<YearlyPoint> {
    let annual_nominal = inputs.annual_return_percent / 100.0;
    let inflation = inputs.inflation_percent / 100.0;
    // Fisher equation: exact real rate, not the nominal - inflation shortcut.
    let annual_real = (1.0 + annual_nominal) / (1.0 + inflation) - 1.0;

    let monthly_nominal = monthly_rate(annual_nominal);
    let monthly_real = monthly_rate(annual_real);

    let mut points = Vec::with_capacity(inputs.years as usize + 1);
    for year in 0..=inputs.years {
        let months = year * 12;
        points.push(YearlyPoint {
            year,
            nominal_value: round_cents(future_value(
                inputs.initial_investment,
                inputs.monthly_contribution,
                monthly_nominal,
                months,
            )),
            real_value: round_cents(future_value(
                inputs.initial_investment,
                inputs.monthly_contribution,
                monthly_real,
                months,
            )),
        });
    }
    points
}

// Effective per-month rate: twelve compounded months reproduce the annual rate.
fn monthly_rate(annual: f64) -> f64 {
    (1.0 + annual).powf(1.0 / 12.0) - 1.0
}

// Future value with end-of-period contributions (ordinary annuity).
fn future_value(initial: f64, contribution: f64, rate: f64, months: u32) -> f64 {
    if rate == 0.0 {
        // The annuity term divides by the rate; zero rate is straight-line.
        return initial + contribution * months as f64;
    }
    let growth = (1.0 + rate).powi(months as i32);
    initial * growth + contribution * ((growth - 1.0) / rate)
}

// Round-half-away-from-zero at the cent, applied to the value scaled by 100.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
