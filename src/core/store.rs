use uuid::Uuid;

use super::codec::{self, SharedScenario, TokenError};
use super::engine::project;
use super::format::{format_currency, format_percent, palette_color};
use super::types::{Scenario, ScenarioInputs};

/// Owned scenario collection. Projections are computed on insert and on
/// token load, never stored anywhere else.
#[derive(Debug, Default)]
pub struct ScenarioStore {
    scenarios: Vec<Scenario>,
}

impl ScenarioStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Adds a computed scenario; an empty name falls back to the
    /// `"$<initial> @ <return>%"` form.
    pub fn add(&mut self, inputs: ScenarioInputs, name: &str) -> &Scenario {
        let name = if name.trim().is_empty() {
            default_name(&inputs)
        } else {
            name.trim().to_string()
        };
        let scenario = Scenario {
            id: Uuid::new_v4().to_string(),
            name,
            color: palette_color(self.scenarios.len()),
            visible: true,
            yearly_data: project(&inputs),
            inputs,
        };
        self.scenarios.push(scenario);
        self.scenarios.last().expect("just pushed")
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.scenarios.len();
        self.scenarios.retain(|s| s.id != id);
        self.scenarios.len() != before
    }

    pub fn clear(&mut self) {
        self.scenarios.clear();
    }

    pub fn set_visibility(&mut self, id: &str, visible: bool) -> bool {
        match self.scenarios.iter_mut().find(|s| s.id == id) {
            Some(scenario) => {
                scenario.visible = visible;
                true
            }
            None => false,
        }
    }

    pub fn share_token(&self) -> String {
        let records: Vec<SharedScenario> = self
            .scenarios
            .iter()
            .map(|s| SharedScenario::new(&s.name, &s.inputs, s.visible))
            .collect();
        codec::encode_share_token(&records)
    }

    /// Replaces the collection with the decoded token contents, re-running
    /// the engine per scenario and reassigning colors by decoded index.
    /// A decode failure leaves the collection untouched; an empty token is
    /// a no-op.
    pub fn load_share_token(&mut self, token: &str) -> Result<usize, TokenError> {
        if token.is_empty() {
            return Ok(0);
        }
        let records = codec::decode_share_token(token)?;
        self.scenarios = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let inputs = record.inputs();
                Scenario {
                    id: Uuid::new_v4().to_string(),
                    name: record.n,
                    color: palette_color(index),
                    visible: record.v != 0,
                    yearly_data: project(&inputs),
                    inputs,
                }
            })
            .collect();
        Ok(self.scenarios.len())
    }
}

fn default_name(inputs: &ScenarioInputs) -> String {
    format!(
        "{} @ {}%",
        format_currency(inputs.initial_investment),
        format_percent(inputs.annual_return_percent)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inputs() -> ScenarioInputs {
        ScenarioInputs {
            initial_investment: 10_000.0,
            monthly_contribution: 0.0,
            annual_return_percent: 7.0,
            inflation_percent: 3.0,
            years: 10,
        }
    }

    #[test]
    fn add_computes_projection_and_assigns_identity() {
        let mut store = ScenarioStore::new();
        let scenario = store.add(sample_inputs(), "my plan");
        assert_eq!(scenario.name, "my plan");
        assert_eq!(scenario.color, "#00d4aa");
        assert!(scenario.visible);
        assert_eq!(scenario.yearly_data.len(), 11);
        assert!(!scenario.id.is_empty());
    }

    #[test]
    fn empty_name_falls_back_to_amount_at_rate() {
        let mut store = ScenarioStore::new();
        let scenario = store.add(sample_inputs(), "  ");
        assert_eq!(scenario.name, "$10,000 @ 7%");
    }

    #[test]
    fn colors_cycle_by_insertion_index() {
        let mut store = ScenarioStore::new();
        for _ in 0..12 {
            store.add(sample_inputs(), "s");
        }
        let scenarios = store.scenarios();
        assert_eq!(scenarios[0].color, scenarios[10].color);
        assert_eq!(scenarios[1].color, scenarios[11].color);
        assert_ne!(scenarios[0].color, scenarios[1].color);
    }

    #[test]
    fn remove_drops_only_the_matching_scenario() {
        let mut store = ScenarioStore::new();
        store.add(sample_inputs(), "a");
        let id = store.scenarios()[0].id.clone();
        store.add(sample_inputs(), "b");

        assert!(store.remove(&id));
        assert_eq!(store.len(), 1);
        assert_eq!(store.scenarios()[0].name, "b");
        // Colors stay as assigned at insertion.
        assert_eq!(store.scenarios()[0].color, "#5eb5ff");
        assert!(!store.remove(&id));
    }

    #[test]
    fn clear_empties_the_collection() {
        let mut store = ScenarioStore::new();
        store.add(sample_inputs(), "a");
        store.add(sample_inputs(), "b");
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.share_token(), "");
    }

    #[test]
    fn set_visibility_flips_the_flag_by_id() {
        let mut store = ScenarioStore::new();
        store.add(sample_inputs(), "a");
        let id = store.scenarios()[0].id.clone();

        assert!(store.set_visibility(&id, false));
        assert!(!store.scenarios()[0].visible);
        assert!(store.set_visibility(&id, true));
        assert!(store.scenarios()[0].visible);
        assert!(!store.set_visibility("no-such-id", false));
    }

    #[test]
    fn share_token_round_trips_inputs_and_projections() {
        let mut store = ScenarioStore::new();
        store.add(sample_inputs(), "lump sum");
        store.add(
            ScenarioInputs {
                initial_investment: 100_000.0,
                monthly_contribution: 500.0,
                annual_return_percent: 7.0,
                inflation_percent: 3.0,
                years: 30,
            },
            "with contributions",
        );
        let id = store.scenarios()[1].id.clone();
        store.set_visibility(&id, false);

        let token = store.share_token();
        let mut restored = ScenarioStore::new();
        assert_eq!(restored.load_share_token(&token).expect("valid token"), 2);

        for (original, loaded) in store.scenarios().iter().zip(restored.scenarios()) {
            assert_eq!(loaded.inputs, original.inputs);
            assert_eq!(loaded.name, original.name);
            assert_eq!(loaded.color, original.color);
            assert_eq!(loaded.visible, original.visible);
            assert_eq!(loaded.yearly_data, original.yearly_data);
        }
    }

    #[test]
    fn bad_token_leaves_existing_scenarios_untouched() {
        let mut store = ScenarioStore::new();
        store.add(sample_inputs(), "keep me");

        assert!(store.load_share_token("@@@not-a-token@@@").is_err());
        assert_eq!(store.len(), 1);
        assert_eq!(store.scenarios()[0].name, "keep me");
    }

    #[test]
    fn empty_token_is_a_no_op() {
        let mut store = ScenarioStore::new();
        store.add(sample_inputs(), "keep me");
        assert_eq!(store.load_share_token("").expect("empty is valid"), 0);
        assert_eq!(store.len(), 1);
    }
}
