//! Address derivation properties across a large random sample.

#[cfg(test)]
mod tests {
    use rand::distributions::Alphanumeric;
    use rand::Rng;
    use std::collections::HashSet;

    use supplier_protocol::{family, supplier_address};

    #[test]
    fn test_random_sample_has_no_collisions() {
        let prefix = family::namespace_prefix();
        let mut rng = rand::thread_rng();
        let mut seen = HashSet::new();

        for _ in 0..1000 {
            let id: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(12)
                .map(char::from)
                .collect();
            let address = supplier_address(&prefix, &id);

            assert_eq!(address.len(), 70);
            assert!(address.chars().all(|c| c.is_ascii_hexdigit()));
            assert!(address.starts_with(&prefix));
            seen.insert(address);
        }

        // Duplicate random ids are possible in principle but vanishingly
        // unlikely in a 12-char alphanumeric sample of this size.
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn test_same_id_same_address_across_call_sites() {
        let prefix = family::namespace_prefix();
        let client_side = supplier_address(&prefix, "S1");
        let handler_side = supplier_address(&prefix, "S1");
        assert_eq!(client_side, handler_side);
    }
}
