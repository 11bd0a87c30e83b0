//! Structured context handed to the recommendation generator.

use serde::{Deserialize, Serialize};

use super::Risk;

/// Everything the external generator needs about one session: the
/// declared areas and goals, the finally-selected characteristics,
/// and the risks attached to each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationContext {
    pub system_areas: Vec<String>,
    pub strategic_goals: Vec<String>,
    pub characteristics: Vec<CharacteristicContext>,
}

/// One finally-selected characteristic with its risks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicContext {
    pub name: String,
    pub description: String,
    pub risks: Vec<RiskContext>,
}

/// One risk, flattened to the wire shape of the generator request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskContext {
    pub description: String,
    pub probability: Option<u8>,
    pub impact: Option<u8>,
}

impl From<&Risk> for RiskContext {
    fn from(risk: &Risk) -> Self {
        Self {
            description: risk.description.clone(),
            probability: risk.probability.map(|p| p.value()),
            impact: risk.impact.map(|i| i.value()),
        }
    }
}

impl RecommendationContext {
    /// Renders the context as a prompt for a text-generation provider.
    ///
    /// The rendering is deterministic so repeated generations with the
    /// same session state produce the same request.
    pub fn render_prompt(&self) -> String {
        let mut prompt = String::from(
            "You are an experienced software architecture advisor. A team has run an \
             architecture characteristics workshop with the following outcome.\n\n",
        );

        prompt.push_str("System areas in scope:\n");
        for area in &self.system_areas {
            prompt.push_str(&format!("- {}\n", area));
        }

        prompt.push_str("\nStrategic goals:\n");
        for goal in &self.strategic_goals {
            prompt.push_str(&format!("- {}\n", goal));
        }

        prompt.push_str("\nDriving characteristics and identified risks:\n");
        for characteristic in &self.characteristics {
            prompt.push_str(&format!(
                "\n## {}\n{}\n",
                characteristic.name, characteristic.description
            ));
            if characteristic.risks.is_empty() {
                prompt.push_str("No risks recorded.\n");
            }
            for risk in &characteristic.risks {
                match (risk.probability, risk.impact) {
                    (Some(p), Some(i)) => prompt.push_str(&format!(
                        "- {} (probability {}/3, impact {}/3, score {})\n",
                        risk.description,
                        p,
                        i,
                        p * i
                    )),
                    _ => prompt.push_str(&format!("- {} (not yet scored)\n", risk.description)),
                }
            }
        }

        prompt.push_str(
            "\nGive concrete, prioritized recommendations for how the architecture should \
             address these characteristics and mitigate the identified risks.\n",
        );
        prompt
    }
}
