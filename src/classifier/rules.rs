//! Keyword Rule Engine
//!
//! Local classifier: lowercased title+description is matched against an
//! ordered keyword list per major group. The first matching rule in a
//! group wins; rule order is part of the contract and must not change.

use super::types::Classification;

/// Classify an application with keyword rules.
///
/// Major group evaluation order: CS/software first, then finance, each
/// entered only when the major string matches its pattern. Anything else
/// falls through to Other/Other at 0.40.
pub fn rules_classify(title: &str, description: &str, major: &str) -> Classification {
    let text = format!("{} {}", title, description).to_lowercase();
    let hit = |keys: &[&str]| keys.iter().any(|k| text.contains(k));
    let major = major.to_lowercase();

    // CS/Software majors
    if major.contains("computer") || major.contains("cs") || major.contains("software") {
        if hit(&["react", "frontend", "ui", "css"]) {
            return Classification::new("Software Engineering", "Frontend", 0.8);
        }
        if hit(&["node", "api", "backend", "java", "spring"]) {
            return Classification::new("Software Engineering", "Backend", 0.85);
        }
        if hit(&["sql", "etl", "pipeline", "spark", "warehouse"]) {
            return Classification::new("Data", "Data Engineering", 0.85);
        }
        if hit(&["ml", "tensorflow", "pytorch", "nlp"]) {
            return Classification::new("Data", "Machine Learning", 0.8);
        }
        if hit(&["security", "threat", "soc", "incident"]) {
            return Classification::new("Cybersecurity", "Security Analyst", 0.8);
        }
    }

    // Finance majors
    if major.contains("finance") {
        if hit(&["m&a", "mergers", "acquisition"]) {
            return Classification::new("Investment Banking", "M&A", 0.8);
        }
        if hit(&["fp&a", "budget", "forecast"]) {
            return Classification::new("Corporate Finance", "FP&A", 0.8);
        }
        if hit(&["audit", "tax"]) {
            let subcategory = if hit(&["tax"]) { "Tax" } else { "Audit" };
            return Classification::new("Accounting", subcategory, 0.75);
        }
    }

    Classification::new("Other", "Other", 0.4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cs_frontend_match() {
        let result = rules_classify("React Frontend Intern", "", "Computer Science");
        assert_eq!(result.category, "Software Engineering");
        assert_eq!(result.subcategory, "Frontend");
        assert_eq!(result.confidence, 0.8);
    }

    #[test]
    fn test_first_match_wins_over_later_rules() {
        // Text hits both the frontend rule (react) and the backend rule
        // (node); the earlier rule must win.
        let result = rules_classify(
            "Fullstack Intern",
            "Work with react and node services",
            "Computer Science",
        );
        assert_eq!(result.subcategory, "Frontend");
        assert_eq!(result.confidence, 0.8);
    }

    #[test]
    fn test_cs_backend_match() {
        let result = rules_classify("Java Spring Intern", "", "Software Engineering");
        assert_eq!(result.category, "Software Engineering");
        assert_eq!(result.subcategory, "Backend");
        assert_eq!(result.confidence, 0.85);
    }

    #[test]
    fn test_cs_data_engineering_from_description() {
        let result = rules_classify("Intern", "Build ETL pipelines in Spark", "CS");
        assert_eq!(result.category, "Data");
        assert_eq!(result.subcategory, "Data Engineering");
    }

    #[test]
    fn test_cs_security_match() {
        let result = rules_classify("SOC Analyst Intern", "", "computer engineering");
        assert_eq!(result.category, "Cybersecurity");
        assert_eq!(result.subcategory, "Security Analyst");
    }

    #[test]
    fn test_finance_ma_match() {
        let result = rules_classify("Summer Analyst", "Support mergers deals", "Finance");
        assert_eq!(result.category, "Investment Banking");
        assert_eq!(result.subcategory, "M&A");
    }

    #[test]
    fn test_finance_tax_vs_audit_subcategory() {
        let tax = rules_classify("Tax Intern", "", "Finance");
        assert_eq!(tax.category, "Accounting");
        assert_eq!(tax.subcategory, "Tax");
        assert_eq!(tax.confidence, 0.75);

        let audit = rules_classify("Audit Intern", "", "Finance");
        assert_eq!(audit.category, "Accounting");
        assert_eq!(audit.subcategory, "Audit");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let result = rules_classify("REACT FRONTEND INTERN", "", "COMPUTER SCIENCE");
        assert_eq!(result.subcategory, "Frontend");
    }

    #[test]
    fn test_unknown_major_falls_through() {
        let result = rules_classify("React Frontend Intern", "", "Biology");
        assert_eq!(result.category, "Other");
        assert_eq!(result.subcategory, "Other");
        assert_eq!(result.confidence, 0.4);
    }

    #[test]
    fn test_cs_major_without_keyword_falls_through() {
        let result = rules_classify("Barista", "Make coffee", "Computer Science");
        assert_eq!(result.category, "Other");
        assert_eq!(result.confidence, 0.4);
    }

    #[test]
    fn test_empty_major_falls_through() {
        let result = rules_classify("React Intern", "", "");
        assert_eq!(result.category, "Other");
    }
}
