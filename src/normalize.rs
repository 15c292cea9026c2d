use tracing::debug;

use crate::tree::CriteriaTree;

/// Equal-redistribution repair: give every enabled sibling at a level the
/// same share of 100%, top-down. Disabled nodes keep their stored weight so
/// re-enabling restores the prior contribution.
///
/// This runs after template load or a fund-type switch - never behind a
/// user's back during manual edits, which are allowed to stay transiently
/// invalid. A level with zero enabled nodes is left untouched; the engine
/// never fabricates a weight for an empty level, and `validate()` keeps
/// reporting it.
pub fn normalize(tree: &mut CriteriaTree) {
    let enabled_count = tree.categories.iter().filter(|c| c.enabled).count();
    if enabled_count > 0 {
        let equal = 100.0 / enabled_count as f64;
        for cat in tree.categories.iter_mut().filter(|c| c.enabled) {
            cat.weight = equal;
        }
        debug!(categories = enabled_count, weight = equal, "redistributed category weights");
    }

    for cat in tree.categories.iter_mut().filter(|c| c.enabled) {
        let enabled_subs = cat.subcategories.iter().filter(|s| s.enabled).count();
        if enabled_subs == 0 {
            continue;
        }
        let equal = 100.0 / enabled_subs as f64;
        for sub in cat.subcategories.iter_mut().filter(|s| s.enabled) {
            sub.weight = equal;
        }
        debug!(
            category = %cat.id,
            subcategories = enabled_subs,
            weight = equal,
            "redistributed subcategory weights"
        );
    }
}
