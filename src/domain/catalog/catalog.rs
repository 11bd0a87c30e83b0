//! The fixed 22-entry architecture characteristics catalog.

use once_cell::sync::Lazy;

use super::Characteristic;

/// Number of entries in the standard catalog.
pub const CATALOG_SIZE: usize = 22;

/// Read-only ordered sequence of architecture characteristics.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Characteristic>,
}

impl Catalog {
    fn from_entries(entries: Vec<Characteristic>) -> Self {
        debug_assert_eq!(entries.len(), CATALOG_SIZE);
        Self { entries }
    }

    /// Returns the standard 22-entry catalog.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    /// Looks up a characteristic by name.
    pub fn get(&self, name: &str) -> Option<&Characteristic> {
        self.entries.iter().find(|c| c.name == name)
    }

    /// Returns true if a characteristic with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Characteristic> {
        self.entries.iter()
    }

    /// Returns all entries in catalog order.
    pub fn entries(&self) -> &[Characteristic] {
        &self.entries
    }
}

static STANDARD: Lazy<Catalog> = Lazy::new(|| {
    let raw: [(&str, &str, &str); CATALOG_SIZE] = [
        (
            "Performance",
            "The amount of time it takes for the system to process a business request",
            "⚡",
        ),
        (
            "Responsiveness",
            "The amount of time it takes to get a response to the user",
            "⏱️",
        ),
        (
            "Availability",
            "The amount of uptime of a system; usually measured in 9's (e.g., 99.9%)",
            "🟢",
        ),
        (
            "Fault Tolerance",
            "When fatal errors occur, other parts of the system continue to function",
            "🛡️",
        ),
        (
            "Scalability",
            "A function of system capacity and growth over time; as the number of users or requests increase in the system, responsiveness, performance, and error rates remain consistent",
            "📈",
        ),
        (
            "Elasticity",
            "The system is able to expend and respond quickly to unexpected or anticipated extreme loads (e.g., going from 20 to 250,000 users instantly)",
            "🎈",
        ),
        (
            "Data Integrity",
            "The data across the system is correct and there is no data loss in the system",
            "✅",
        ),
        (
            "Data Consistency",
            "The data across the system is in sync and consistent across databases and tables",
            "🔄",
        ),
        (
            "Adaptability",
            "The ease in which a system can adapt to changes in environment and functionality",
            "🦎",
        ),
        (
            "Concurrency",
            "The ability of the system to process simultaneous requests, in most cases in the same order in which they were received; implied when scalability and elasticity are supported",
            "⚙️",
        ),
        (
            "Interoperability",
            "The ability of the system to interface and interact with other systems to complete a business request",
            "🔌",
        ),
        (
            "Extensibility",
            "The ease in which a system can be extended with additional features and functionality",
            "🧩",
        ),
        (
            "Deployability",
            "The amount of ceremony involved with releasing the software, the frequency in which releases occur, and the overall risk of deployment",
            "🚀",
        ),
        (
            "Testability",
            "The ease of and completeness of testing",
            "🧪",
        ),
        (
            "Abstraction",
            "The level at which parts of the system are isolated from other parts of the system (both internal and external system interactions)",
            "📦",
        ),
        (
            "Workflow",
            "The ability of the system to manage complex workflows that require multiple parts (services) of the system to complete a business request",
            "🔀",
        ),
        (
            "Configurability",
            "The ability of the system to support multiple configurations, as well as support custom on-demand configurations and configuration updates",
            "⚙️",
        ),
        (
            "Recoverability",
            "The ability of the system to start where it left off in the event of a system crash",
            "♻️",
        ),
        (
            "Feasibility",
            "Taking into account timeframes, budgets, and developer skills when making architectural choices; tight timeframes and budgets make this a driving architectural characteristic",
            "💰",
        ),
        (
            "Security",
            "The ability of the system to restrict access to sensitive information or functionality",
            "🔒",
        ),
        (
            "Maintainability",
            "The level of effort required to locate and apply changes to the system",
            "🔧",
        ),
        (
            "Observability",
            "The ability of a system or a service to make available and stream metrics such as overall health, uptime, response times, performance, etc.",
            "👁️",
        ),
    ];

    Catalog::from_entries(
        raw.into_iter()
            .map(|(name, description, emoji)| Characteristic::new(name, description, emoji))
            .collect(),
    )
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_catalog_has_exactly_22_entries() {
        assert_eq!(Catalog::standard().len(), CATALOG_SIZE);
        assert!(!Catalog::standard().is_empty());
    }

    #[test]
    fn catalog_names_are_unique() {
        let names: HashSet<&str> = Catalog::standard().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), CATALOG_SIZE);
    }

    #[test]
    fn get_finds_characteristic_by_name() {
        let scalability = Catalog::standard().get("Scalability").unwrap();
        assert_eq!(scalability.emoji, "📈");
        assert!(scalability.description.contains("system capacity and growth"));
    }

    #[test]
    fn get_returns_none_for_unknown_name() {
        assert!(Catalog::standard().get("Blockchain Readiness").is_none());
        assert!(!Catalog::standard().contains("Blockchain Readiness"));
    }

    #[test]
    fn catalog_order_starts_with_performance() {
        let first = &Catalog::standard().entries()[0];
        assert_eq!(first.name, "Performance");
    }

    #[test]
    fn every_entry_has_description_and_emoji() {
        for c in Catalog::standard().iter() {
            assert!(!c.description.is_empty(), "{} has no description", c.name);
            assert!(!c.emoji.is_empty(), "{} has no emoji", c.name);
        }
    }
}
