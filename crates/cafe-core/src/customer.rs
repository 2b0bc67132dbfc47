//! Customer records

/// A customer, identified by name (case-insensitive) and carrying their
/// cumulative spend across completed sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    name: String,
    total_spent: f64,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_spent: 0.0,
        }
    }

    /// Display name, with the casing it was first registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_spent(&self) -> f64 {
        self.total_spent
    }

    /// Credit a completed session's payment.
    ///
    /// Negative or non-finite amounts are ignored so the total never decreases.
    pub fn add_spent(&mut self, amount: f64) {
        if amount.is_finite() && amount > 0.0 {
            self.total_spent += amount;
        }
    }

    /// Case-insensitive name comparison, one character at a time
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.chars().count() == name.chars().count()
            && self
                .name
                .chars()
                .zip(name.chars())
                .all(|(a, b)| chars_match_ignoring_case(a, b))
    }
}

/// Single-character case mapping; full mappings that expand to several
/// characters (e.g. `ß` → `SS`) leave the character as is, except that
/// a lowercase expansion keeps its leading letter (`İ` → `i`).
fn chars_match_ignoring_case(a: char, b: char) -> bool {
    fn upper(c: char) -> char {
        let mut mapped = c.to_uppercase();
        match mapped.len() {
            1 => mapped.next().unwrap_or(c),
            _ => c,
        }
    }

    fn lower(c: char) -> char {
        c.to_lowercase().next().unwrap_or(c)
    }

    a == b || upper(a) == upper(b) || lower(a) == lower(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_customer_has_spent_nothing() {
        let customer = Customer::new("Alice");
        assert_eq!(customer.name(), "Alice");
        assert_eq!(customer.total_spent(), 0.0);
    }

    #[test]
    fn spend_accumulates() {
        let mut customer = Customer::new("Alice");
        customer.add_spent(20.0);
        customer.add_spent(10.0);
        assert_eq!(customer.total_spent(), 30.0);
    }

    #[test]
    fn spend_never_decreases() {
        let mut customer = Customer::new("Alice");
        customer.add_spent(5.0);
        customer.add_spent(-3.0);
        customer.add_spent(f64::NAN);
        assert_eq!(customer.total_spent(), 5.0);
    }

    #[test]
    fn name_match_ignores_case() {
        let customer = Customer::new("Alice");
        assert!(customer.matches_name("alice"));
        assert!(customer.matches_name("ALICE"));
        assert!(!customer.matches_name("Alicia"));

        let customer = Customer::new("Émile");
        assert!(customer.matches_name("émile"));
    }

    #[test]
    fn name_match_folds_each_character_on_its_own() {
        // Dotted capital I lowercases to a plain i
        let customer = Customer::new("İnci");
        assert!(customer.matches_name("inci"));

        // Multi-character expansions don't count
        let customer = Customer::new("Straße");
        assert!(!customer.matches_name("STRASSE"));
        assert!(customer.matches_name("STRAẞE"));
    }
}
