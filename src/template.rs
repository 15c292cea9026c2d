use crate::tree::{Category, CriteriaTree, FundType, Subcategory};

/// Build a fresh, fully-enabled default criteria tree for the given fund
/// type. Templates are fixtures: every call returns an independent deep copy
/// whose weights already sum to 100 at the root and inside every category,
/// so a freshly loaded tree is always valid.
pub fn template(fund_type: FundType) -> CriteriaTree {
    match fund_type {
        FundType::Vc => vc_template(),
        FundType::Pe => pe_template(),
    }
}

fn sub(id: &str, name: &str, weight: f64, requirements: &str) -> Subcategory {
    Subcategory {
        id: id.to_string(),
        name: name.to_string(),
        weight,
        enabled: true,
        description: String::new(),
        requirements: requirements.to_string(),
        positive_signals: vec![],
        negative_signals: vec![],
    }
}

fn category(id: &str, name: &str, weight: f64, description: &str, subcategories: Vec<Subcategory>) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        weight,
        enabled: true,
        description: description.to_string(),
        requirements: String::new(),
        subcategories,
    }
}

fn signals(mut s: Subcategory, positive: &[&str], negative: &[&str]) -> Subcategory {
    s.positive_signals = positive.iter().map(|v| v.to_string()).collect();
    s.negative_signals = negative.iter().map(|v| v.to_string()).collect();
    s
}

fn vc_template() -> CriteriaTree {
    CriteriaTree {
        fund_type: FundType::Vc,
        categories: vec![
            category(
                "team",
                "Team",
                25.0,
                "Founding team quality and completeness",
                vec![
                    signals(
                        sub(
                            "founder-experience",
                            "Founder Experience",
                            40.0,
                            "Prior operating history, exits, and relevant scar tissue",
                        ),
                        &["Prior successful exit", "Deep network in the target market"],
                        &["No prior startup experience across the founding team"],
                    ),
                    sub(
                        "team-completeness",
                        "Team Completeness",
                        30.0,
                        "Coverage of product, engineering, and commercial roles",
                    ),
                    sub(
                        "domain-expertise",
                        "Domain Expertise",
                        30.0,
                        "Depth of insight into the problem space",
                    ),
                ],
            ),
            category(
                "market",
                "Market",
                25.0,
                "Size, growth, and structure of the addressable market",
                vec![
                    sub("market-size", "Market Size", 40.0, "TAM/SAM credibility, bottom-up"),
                    sub("growth-rate", "Growth Rate", 35.0, "Market CAGR and tailwinds"),
                    signals(
                        sub(
                            "competition",
                            "Competitive Landscape",
                            25.0,
                            "Incumbent strength and differentiation pressure",
                        ),
                        &["Fragmented incumbents"],
                        &["Well-funded direct competitor at scale"],
                    ),
                ],
            ),
            category(
                "product",
                "Product",
                25.0,
                "Product strength and defensibility",
                vec![
                    sub(
                        "differentiation",
                        "Differentiation",
                        40.0,
                        "Why this product wins against alternatives",
                    ),
                    sub(
                        "technology-moat",
                        "Technology Moat",
                        35.0,
                        "Proprietary technology, data, or network effects",
                    ),
                    sub("scalability", "Scalability", 25.0, "Architecture and margin profile at scale"),
                ],
            ),
            category(
                "financials",
                "Financials",
                25.0,
                "Traction and capital efficiency",
                vec![
                    sub("traction", "Revenue Traction", 40.0, "ARR level, growth, and retention"),
                    sub("unit-economics", "Unit Economics", 35.0, "CAC payback, gross margin, LTV/CAC"),
                    sub(
                        "capital-efficiency",
                        "Capital Efficiency",
                        25.0,
                        "Burn multiple and runway discipline",
                    ),
                ],
            ),
        ],
    }
}

fn pe_template() -> CriteriaTree {
    CriteriaTree {
        fund_type: FundType::Pe,
        categories: vec![
            category(
                "financial-performance",
                "Financial Performance",
                30.0,
                "Historical and normalized financial quality",
                vec![
                    sub("revenue-quality", "Revenue Quality", 35.0, "Recurring share, churn, concentration"),
                    sub("ebitda-margin", "EBITDA Margin", 35.0, "Margin level and trajectory vs peers"),
                    sub("cash-conversion", "Cash Conversion", 30.0, "FCF conversion and working-capital needs"),
                ],
            ),
            category(
                "market-position",
                "Market Position",
                20.0,
                "Standing within the served market",
                vec![
                    sub("market-share", "Market Share", 40.0, "Relative share and share trend"),
                    sub("competitive-moat", "Competitive Moat", 35.0, "Switching costs, brand, regulation"),
                    signals(
                        sub(
                            "customer-concentration",
                            "Customer Concentration",
                            25.0,
                            "Top-customer revenue share",
                        ),
                        &["No customer above 10% of revenue"],
                        &["Single customer above 30% of revenue"],
                    ),
                ],
            ),
            category(
                "management",
                "Management Team",
                20.0,
                "Leadership quality and incentive alignment",
                vec![
                    sub("track-record", "Track Record", 40.0, "Delivery against prior plans"),
                    sub("depth-of-bench", "Depth of Bench", 30.0, "Second-layer leadership strength"),
                    sub("alignment", "Incentive Alignment", 30.0, "Rollover equity and management incentives"),
                ],
            ),
            category(
                "operations",
                "Operational Excellence",
                15.0,
                "Maturity of systems and processes",
                vec![
                    sub("operational-efficiency", "Operational Efficiency", 40.0, "Cost position vs benchmark"),
                    sub("systems-maturity", "Systems Maturity", 30.0, "ERP/reporting quality, data reliability"),
                    sub("value-creation-levers", "Value Creation Levers", 30.0, "Identified, quantified upside initiatives"),
                ],
            ),
            category(
                "exit-potential",
                "Exit Potential",
                15.0,
                "Paths to realization at target multiple",
                vec![
                    sub("strategic-buyers", "Strategic Buyer Universe", 40.0, "Breadth of credible acquirers"),
                    sub("multiple-expansion", "Multiple Expansion", 30.0, "Entry vs expected exit multiple"),
                    sub("ipo-readiness", "IPO Readiness", 30.0, "Scale and governance for a listing"),
                ],
            ),
        ],
    }
}
