use crate::error::CriteriaError;
use crate::normalize::normalize;
use crate::template::template;
use crate::tree::types::{CriteriaTree, FundType};

/// Mutation API for a configuration session.
///
/// Every mutator is synchronous and in-memory. None of them fail on
/// invalidity: a weight edit that pushes a level away from 100% is a normal
/// intermediate state while the user is still adjusting, observable through
/// `validate()` rather than an error. The only error these methods return is
/// `UnknownNodeId` for an id that does not resolve.
impl CriteriaTree {
    /// Set a category's weight, clamped to [0,100]. Siblings are never
    /// auto-renormalized; the caller surfaces the running total live so the
    /// user self-corrects.
    pub fn set_category_weight(&mut self, id: &str, weight: f64) -> Result<(), CriteriaError> {
        let cat = self
            .category_mut(id)
            .ok_or_else(|| CriteriaError::UnknownNodeId(id.to_string()))?;
        cat.weight = clamp_weight(weight);
        Ok(())
    }

    /// Set a subcategory's weight, clamped to [0,100]. Never renormalizes.
    pub fn set_subcategory_weight(
        &mut self,
        category_id: &str,
        id: &str,
        weight: f64,
    ) -> Result<(), CriteriaError> {
        let cat = self
            .category_mut(category_id)
            .ok_or_else(|| CriteriaError::UnknownNodeId(category_id.to_string()))?;
        let sub = cat
            .subcategory_mut(id)
            .ok_or_else(|| CriteriaError::UnknownNodeId(format!("{}/{}", category_id, id)))?;
        sub.weight = clamp_weight(weight);
        Ok(())
    }

    /// Flip a category's enabled flag, preserving its weight across the flip
    /// so re-enabling restores the prior contribution without re-entry.
    /// Returns the new enabled state.
    pub fn toggle_category(&mut self, id: &str) -> Result<bool, CriteriaError> {
        let cat = self
            .category_mut(id)
            .ok_or_else(|| CriteriaError::UnknownNodeId(id.to_string()))?;
        cat.enabled = !cat.enabled;
        Ok(cat.enabled)
    }

    /// Flip a subcategory's enabled flag, preserving its weight.
    /// Returns the new enabled state.
    pub fn toggle_subcategory(&mut self, category_id: &str, id: &str) -> Result<bool, CriteriaError> {
        let cat = self
            .category_mut(category_id)
            .ok_or_else(|| CriteriaError::UnknownNodeId(category_id.to_string()))?;
        let sub = cat
            .subcategory_mut(id)
            .ok_or_else(|| CriteriaError::UnknownNodeId(format!("{}/{}", category_id, id)))?;
        sub.enabled = !sub.enabled;
        Ok(sub.enabled)
    }

    /// Discard the current tree and replace it with a freshly normalized
    /// template for `fund_type`. This is the one transition where automatic
    /// redistribution is expected, since there is no prior user work to
    /// protect.
    pub fn load_template(&mut self, fund_type: FundType) {
        *self = template(fund_type);
        normalize(self);
    }

    /// Running total of enabled category weights, for live display next to
    /// the category sliders.
    pub fn enabled_category_weight_sum(&self) -> f64 {
        self.enabled_categories().map(|c| c.weight).sum()
    }

    /// Running total of enabled subcategory weights inside one category.
    ///
    /// # Errors
    ///
    /// Returns `CriteriaError::UnknownNodeId` if the category id does not
    /// resolve.
    pub fn enabled_subcategory_weight_sum(&self, category_id: &str) -> Result<f64, CriteriaError> {
        let cat = self
            .category(category_id)
            .ok_or_else(|| CriteriaError::UnknownNodeId(category_id.to_string()))?;
        Ok(cat.enabled_subcategories().map(|s| s.weight).sum())
    }

    /// Shorthand for `validate(self).is_valid()`, used by wizards to gate
    /// their save/advance action.
    pub fn is_valid(&self) -> bool {
        crate::validation::validate(self).is_valid()
    }
}

fn clamp_weight(weight: f64) -> f64 {
    // NaN never enters the tree; it would make every sum check pass vacuously.
    if weight.is_finite() {
        weight.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
