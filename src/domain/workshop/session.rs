//! Workshop session aggregate.
//!
//! One `WorkshopSession` owns all workflow state for one mounted workshop:
//! prerequisites, the shortlist of seven, the final narrowing, risks,
//! discussion threads, collapse state, and recommendation generation.
//! All mutation goes through the session so transitions and invariants
//! are centrally enforced and testable.

use std::collections::{HashMap, HashSet};

use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Catalog, Characteristic};
use crate::domain::foundation::{CommentId, RiskId, Timestamp};
use crate::ports::ConfirmationPrompt;

use super::{
    CharacteristicContext, Comment, GenerationState, RecommendationContext, Risk, RiskLevel,
    SessionRejection, WorkshopPhase,
};

/// Maximum shortlist size in the selection stage.
pub const SELECTION_LIMIT: usize = 7;

/// Suggested size of the final selection. The UI renders "n / 3" but
/// the session does not enforce an upper bound here.
pub const FINAL_SELECTION_TARGET: usize = 3;

/// The workshop wizard state machine for a single session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkshopSession {
    phase: WorkshopPhase,
    system_areas: Vec<String>,
    strategic_goals: Vec<String>,
    /// Shortlisted characteristic names, in selection order, at most 7.
    selection: Vec<String>,
    /// Final selection drawn from the shortlist; reset on every entry
    /// into the narrowing stage.
    final_selection: Vec<String>,
    /// Characteristic list fixed when risk assessment is entered.
    assessment_list: Vec<String>,
    /// Risks keyed by owning characteristic name.
    risks: HashMap<String, Vec<Risk>>,
    /// Discussion threads keyed by characteristic name.
    comments: HashMap<String, Vec<Comment>>,
    /// Risk-assessment sections currently expanded.
    expanded_sections: HashSet<String>,
    generation: GenerationState,
    created_at: Timestamp,
    #[serde(skip, default = "Catalog::standard")]
    catalog: &'static Catalog,
    /// Held only in session memory for reuse across generations,
    /// never serialized.
    #[serde(skip)]
    api_key: Option<Secret<String>>,
}

impl WorkshopSession {
    /// Creates a fresh session against the standard catalog.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::standard())
    }

    /// Creates a fresh session against the given catalog.
    pub fn with_catalog(catalog: &'static Catalog) -> Self {
        Self {
            phase: WorkshopPhase::Prerequisites,
            system_areas: Vec::new(),
            strategic_goals: Vec::new(),
            selection: Vec::new(),
            final_selection: Vec::new(),
            assessment_list: Vec::new(),
            risks: HashMap::new(),
            comments: HashMap::new(),
            expanded_sections: HashSet::new(),
            generation: GenerationState::Idle,
            created_at: Timestamp::now(),
            catalog,
            api_key: None,
        }
    }

    // ------------------------------------------------------------------
    // Prerequisites
    // ------------------------------------------------------------------

    /// Appends a system area. Empty labels (after trim) are ignored.
    ///
    /// Returns true if the label was appended.
    pub fn add_system_area(&mut self, label: &str) -> bool {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.system_areas.push(trimmed.to_string());
        self.recompute_prerequisites();
        true
    }

    /// Removes a system area by position.
    ///
    /// If the list becomes empty, all characteristic selections are wiped
    /// and cards are disabled; the session is not navigated away from a
    /// later phase.
    pub fn remove_system_area(&mut self, index: usize) -> bool {
        if index >= self.system_areas.len() {
            return false;
        }
        self.system_areas.remove(index);
        self.recompute_prerequisites();
        true
    }

    /// Appends a strategic goal. Empty labels (after trim) are ignored.
    pub fn add_strategic_goal(&mut self, label: &str) -> bool {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.strategic_goals.push(trimmed.to_string());
        self.recompute_prerequisites();
        true
    }

    /// Removes a strategic goal by position, with the same cascading
    /// clear behavior as [`Self::remove_system_area`].
    pub fn remove_strategic_goal(&mut self, index: usize) -> bool {
        if index >= self.strategic_goals.len() {
            return false;
        }
        self.strategic_goals.remove(index);
        self.recompute_prerequisites();
        true
    }

    /// Both prerequisite lists are non-empty.
    pub fn prerequisites_met(&self) -> bool {
        !self.system_areas.is_empty() && !self.strategic_goals.is_empty()
    }

    /// Characteristic cards are selectable.
    pub fn selection_enabled(&self) -> bool {
        self.prerequisites_met()
    }

    /// Re-evaluates the prerequisites guard after every mutation of the
    /// area/goal lists. Losing prerequisites clears both selection sets
    /// everywhere; the phase only moves between the prerequisites and
    /// shortlist stages, never away from a later one.
    fn recompute_prerequisites(&mut self) {
        if self.prerequisites_met() {
            if self.phase == WorkshopPhase::Prerequisites {
                self.phase = WorkshopPhase::SelectSeven;
            }
        } else {
            self.selection.clear();
            self.final_selection.clear();
            if self.phase == WorkshopPhase::SelectSeven {
                self.phase = WorkshopPhase::Prerequisites;
            }
        }
    }

    // ------------------------------------------------------------------
    // Shortlist of seven
    // ------------------------------------------------------------------

    /// Toggles a characteristic in or out of the shortlist.
    ///
    /// Rejected while prerequisites are unmet, outside the shortlist
    /// stage, for unknown names, and when adding an eighth entry.
    pub fn toggle_characteristic(&mut self, name: &str) -> Result<(), SessionRejection> {
        if !self.selection_enabled() {
            return Err(SessionRejection::PrerequisitesUnmet);
        }
        if self.phase != WorkshopPhase::SelectSeven {
            return Err(SessionRejection::WrongPhase {
                action: "toggle_characteristic",
                phase: self.phase,
            });
        }
        if !self.catalog.contains(name) {
            return Err(SessionRejection::UnknownCharacteristic {
                name: name.to_string(),
            });
        }
        if let Some(position) = self.selection.iter().position(|s| s == name) {
            self.selection.remove(position);
        } else if self.selection.len() == SELECTION_LIMIT {
            return Err(SessionRejection::SelectionLimit {
                max: SELECTION_LIMIT,
            });
        } else {
            self.selection.push(name.to_string());
        }
        Ok(())
    }

    /// Continue is enabled iff the shortlist holds exactly seven entries.
    pub fn can_continue_to_narrow_down(&self) -> bool {
        self.phase == WorkshopPhase::SelectSeven && self.selection.len() == SELECTION_LIMIT
    }

    /// Transitions to the narrowing stage.
    ///
    /// The final selection starts empty on every entry, including
    /// re-entry after [`Self::back_to_selection`].
    pub fn continue_to_narrow_down(&mut self) -> Result<(), SessionRejection> {
        if self.phase != WorkshopPhase::SelectSeven {
            return Err(SessionRejection::WrongPhase {
                action: "continue_to_narrow_down",
                phase: self.phase,
            });
        }
        if self.selection.len() != SELECTION_LIMIT {
            return Err(SessionRejection::ShortlistIncomplete {
                selected: self.selection.len(),
                required: SELECTION_LIMIT,
            });
        }
        self.phase = WorkshopPhase::NarrowToThree;
        self.final_selection.clear();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Narrow to three
    // ------------------------------------------------------------------

    /// Returns to the shortlist stage, preserving the shortlist exactly.
    /// The final selection is discarded.
    pub fn back_to_selection(&mut self) -> Result<(), SessionRejection> {
        if self.phase != WorkshopPhase::NarrowToThree {
            return Err(SessionRejection::WrongPhase {
                action: "back_to_selection",
                phase: self.phase,
            });
        }
        self.phase = WorkshopPhase::SelectSeven;
        self.final_selection.clear();
        Ok(())
    }

    /// Toggles membership in the final selection. Only shortlisted
    /// characteristics are eligible; no upper bound is enforced.
    pub fn toggle_final_characteristic(&mut self, name: &str) -> Result<(), SessionRejection> {
        if self.phase != WorkshopPhase::NarrowToThree {
            return Err(SessionRejection::WrongPhase {
                action: "toggle_final_characteristic",
                phase: self.phase,
            });
        }
        if !self.catalog.contains(name) {
            return Err(SessionRejection::UnknownCharacteristic {
                name: name.to_string(),
            });
        }
        if !self.selection.iter().any(|s| s == name) {
            return Err(SessionRejection::NotShortlisted {
                name: name.to_string(),
            });
        }
        if let Some(position) = self.final_selection.iter().position(|s| s == name) {
            self.final_selection.remove(position);
        } else {
            self.final_selection.push(name.to_string());
        }
        Ok(())
    }

    /// Transitions to risk assessment, fixing the assessed characteristic
    /// list to the current final selection. The first section starts
    /// expanded, all others collapsed.
    pub fn continue_to_risk_assessment(&mut self) -> Result<(), SessionRejection> {
        if self.phase != WorkshopPhase::NarrowToThree {
            return Err(SessionRejection::WrongPhase {
                action: "continue_to_risk_assessment",
                phase: self.phase,
            });
        }
        self.phase = WorkshopPhase::RiskAssessment;
        self.assessment_list = self.final_selection.clone();
        self.expanded_sections.clear();
        if let Some(first) = self.assessment_list.first() {
            self.expanded_sections.insert(first.clone());
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Risk assessment
    // ------------------------------------------------------------------

    /// Flips the collapse state of one risk-assessment section.
    /// Purely presentational; unknown sections are ignored.
    pub fn toggle_section_collapse(&mut self, name: &str) {
        if !self.assessment_list.iter().any(|s| s == name) {
            return;
        }
        if !self.expanded_sections.remove(name) {
            self.expanded_sections.insert(name.to_string());
        }
    }

    /// Returns true if the section for the given characteristic is expanded.
    pub fn is_section_expanded(&self, name: &str) -> bool {
        self.expanded_sections.contains(name)
    }

    /// Adds a risk to a characteristic under assessment.
    ///
    /// Empty descriptions (after trim) and characteristics outside the
    /// fixed assessment list are ignored.
    pub fn add_risk(&mut self, characteristic: &str, description: &str) -> Option<RiskId> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return None;
        }
        if !self.assessment_list.iter().any(|s| s == characteristic) {
            return None;
        }
        let risk = Risk::new(trimmed);
        let id = risk.id;
        self.risks
            .entry(characteristic.to_string())
            .or_default()
            .push(risk);
        Some(id)
    }

    /// Removes a risk by id from a characteristic's list. Unconditional,
    /// no confirmation required.
    pub fn remove_risk(&mut self, characteristic: &str, id: RiskId) -> bool {
        match self.risks.get_mut(characteristic) {
            Some(list) => {
                let before = list.len();
                list.retain(|r| r.id != id);
                list.len() < before
            }
            None => false,
        }
    }

    /// Sets the probability factor of a risk. Idempotently re-settable.
    pub fn set_risk_probability(
        &mut self,
        id: RiskId,
        level: RiskLevel,
    ) -> Result<(), SessionRejection> {
        let risk = self
            .find_risk_mut(id)
            .ok_or(SessionRejection::RiskNotFound { id })?;
        risk.probability = Some(level);
        Ok(())
    }

    /// Sets the impact factor of a risk. Idempotently re-settable.
    pub fn set_risk_impact(&mut self, id: RiskId, level: RiskLevel) -> Result<(), SessionRejection> {
        let risk = self
            .find_risk_mut(id)
            .ok_or(SessionRejection::RiskNotFound { id })?;
        risk.impact = Some(level);
        Ok(())
    }

    /// Finds a risk by id across all characteristics.
    pub fn find_risk(&self, id: RiskId) -> Option<&Risk> {
        self.risks.values().flatten().find(|r| r.id == id)
    }

    fn find_risk_mut(&mut self, id: RiskId) -> Option<&mut Risk> {
        self.risks.values_mut().flatten().find(|r| r.id == id)
    }

    /// Risks attached to one characteristic, in creation order.
    pub fn risks(&self, characteristic: &str) -> &[Risk] {
        self.risks
            .get(characteristic)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // ------------------------------------------------------------------
    // Discussion comments
    // ------------------------------------------------------------------

    /// Adds a comment to a characteristic's discussion thread.
    ///
    /// Text is trimmed before storage; empty trimmed text and names
    /// outside the catalog are ignored. Threads are independent of the
    /// wizard phase and of the current selection.
    pub fn add_comment(&mut self, characteristic: &str, text: &str) -> Option<CommentId> {
        let trimmed = text.trim();
        if trimmed.is_empty() || !self.catalog.contains(characteristic) {
            return None;
        }
        let comment = Comment::new(trimmed);
        let id = comment.id;
        self.comments
            .entry(characteristic.to_string())
            .or_default()
            .push(comment);
        Some(id)
    }

    /// Updates a comment's text. Empty trimmed text is rejected without
    /// touching the comment.
    ///
    /// Returns true if the comment changed.
    pub fn update_comment(
        &mut self,
        characteristic: &str,
        id: CommentId,
        text: &str,
    ) -> Result<bool, SessionRejection> {
        let comment = self
            .comments
            .get_mut(characteristic)
            .and_then(|thread| thread.iter_mut().find(|c| c.id == id))
            .ok_or(SessionRejection::CommentNotFound { id })?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }
        comment.text = trimmed.to_string();
        Ok(true)
    }

    /// Deletes a comment, gated on a yes/no confirmation from the caller.
    ///
    /// Declining leaves the thread unchanged. Returns true if the comment
    /// was removed.
    pub fn delete_comment(
        &mut self,
        characteristic: &str,
        id: CommentId,
        confirmation: &dyn ConfirmationPrompt,
    ) -> Result<bool, SessionRejection> {
        let thread = self
            .comments
            .get_mut(characteristic)
            .filter(|thread| thread.iter().any(|c| c.id == id))
            .ok_or(SessionRejection::CommentNotFound { id })?;
        if !confirmation.confirm("Are you sure you want to delete this comment?") {
            return Ok(false);
        }
        thread.retain(|c| c.id != id);
        Ok(true)
    }

    /// The discussion thread for one characteristic, oldest first.
    pub fn comments(&self, characteristic: &str) -> &[Comment] {
        self.comments
            .get(characteristic)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of comments on one characteristic.
    pub fn comment_count(&self, characteristic: &str) -> usize {
        self.comments(characteristic).len()
    }

    // ------------------------------------------------------------------
    // Recommendation generation
    // ------------------------------------------------------------------

    /// Stores the generator API key in session memory for reuse across
    /// repeated generations. It is never serialized with the session.
    pub fn set_api_key(&mut self, key: Secret<String>) {
        self.api_key = Some(key);
    }

    /// The stored API key, if one was provided this session.
    pub fn api_key(&self) -> Option<&Secret<String>> {
        self.api_key.as_ref()
    }

    /// Marks a generation request as outstanding. Rejects double-submit.
    pub fn begin_generation(&mut self) -> Result<(), SessionRejection> {
        self.generation.begin()
    }

    /// Records a successful generation.
    pub fn complete_generation(&mut self, recommendations: impl Into<String>) {
        self.generation.complete(recommendations);
    }

    /// Records a failed generation attempt; no other state is touched.
    pub fn fail_generation(&mut self, message: impl Into<String>) {
        self.generation.fail(message);
    }

    /// Current state of the recommendation call.
    pub fn generation(&self) -> &GenerationState {
        &self.generation
    }

    /// Assembles the structured context for the recommendation generator
    /// from the declared areas, goals, and the assessed characteristics
    /// with their risks.
    pub fn recommendation_context(&self) -> RecommendationContext {
        let characteristics = self
            .assessment_list
            .iter()
            .filter_map(|name| self.catalog.get(name))
            .map(|characteristic| CharacteristicContext {
                name: characteristic.name.clone(),
                description: characteristic.description.clone(),
                risks: self
                    .risks(&characteristic.name)
                    .iter()
                    .map(Into::into)
                    .collect(),
            })
            .collect();

        RecommendationContext {
            system_areas: self.system_areas.clone(),
            strategic_goals: self.strategic_goals.clone(),
            characteristics,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Current wizard phase.
    pub fn phase(&self) -> WorkshopPhase {
        self.phase
    }

    /// Declared system areas, in insertion order.
    pub fn system_areas(&self) -> &[String] {
        &self.system_areas
    }

    /// Declared strategic goals, in insertion order.
    pub fn strategic_goals(&self) -> &[String] {
        &self.strategic_goals
    }

    /// Shortlisted names, in selection order.
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Number of shortlisted characteristics (rendered as "n / 7").
    pub fn selection_count(&self) -> usize {
        self.selection.len()
    }

    /// Returns true if the characteristic is shortlisted.
    pub fn is_selected(&self, name: &str) -> bool {
        self.selection.iter().any(|s| s == name)
    }

    /// Finally-selected names, in toggle order.
    pub fn final_selection(&self) -> &[String] {
        &self.final_selection
    }

    /// Number of finally-selected characteristics (rendered as "n / 3").
    pub fn final_selection_count(&self) -> usize {
        self.final_selection.len()
    }

    /// Returns true if the characteristic is in the final selection.
    pub fn is_final_selected(&self, name: &str) -> bool {
        self.final_selection.iter().any(|s| s == name)
    }

    /// The shortlisted characteristics, in catalog order. In the
    /// narrowing stage these are the selectable cards.
    pub fn shortlist(&self) -> Vec<&Characteristic> {
        self.catalog
            .iter()
            .filter(|c| self.is_selected(&c.name))
            .collect()
    }

    /// Catalog entries outside the shortlist, in catalog order. Shown
    /// for context only in the narrowing stage; not selectable.
    pub fn remaining(&self) -> Vec<&Characteristic> {
        self.catalog
            .iter()
            .filter(|c| !self.is_selected(&c.name))
            .collect()
    }

    /// The characteristic list fixed when risk assessment was entered.
    pub fn assessment_list(&self) -> &[String] {
        &self.assessment_list
    }

    /// The catalog this session selects from.
    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// When the session was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

impl Default for WorkshopSession {
    fn default() -> Self {
        Self::new()
    }
}
