//! End-to-end supplier lifecycle against the in-memory state store.
//!
//! Plays the client and the ledger runtime: payloads are built exactly as
//! the client builds them, handed to the handler the way the runtime hands
//! them over, and stored state is decoded back through the same view
//! mapping the CLI renders.

#[cfg(test)]
mod tests {
    use supplier_client::envelope::{build_batch_list, build_transaction, TransactionHeader};
    use supplier_client::{Signer, SupplierView};
    use supplier_processor::{ApplyError, InMemoryStateStore, StateStore, SupplierTransactionHandler};
    use supplier_protocol::{family, supplier_address, SupplierPayload, SupplierRecord};

    fn retrieve_view(store: &InMemoryStateStore, supplier_id: &str) -> SupplierView {
        let address = supplier_address(&family::namespace_prefix(), supplier_id);
        let bytes = store.get_state(&address).unwrap().unwrap();
        let (_, record) = SupplierRecord::from_state_bytes(&bytes).unwrap();
        SupplierView::from(record)
    }

    #[test]
    fn test_create_then_retrieve_then_add_part() {
        let handler = SupplierTransactionHandler::default();
        let store = InMemoryStateStore::new();

        let create =
            SupplierPayload::create("S1", "s1", "Acme", "h4sh", "http://acme.example").to_bytes();
        handler.apply(&create, &store).unwrap();

        let view = retrieve_view(&store, "S1");
        assert_eq!(view.uuid, "S1");
        assert_eq!(view.name, "Acme");
        assert_eq!(view.url, "http://acme.example");
        assert!(view.parts.is_empty());

        let add = SupplierPayload::add_part("S1", "P1").to_bytes();
        handler.apply(&add, &store).unwrap();

        let view = retrieve_view(&store, "S1");
        assert_eq!(view.parts.len(), 1);
        assert_eq!(view.parts[0].part_id, "P1");

        // Second identical add-part leaves the parts sequence unchanged.
        handler.apply(&add, &store).unwrap();
        assert_eq!(retrieve_view(&store, "S1").parts.len(), 1);
    }

    #[test]
    fn test_duplicate_create_is_rejected_without_state_change() {
        let handler = SupplierTransactionHandler::default();
        let store = InMemoryStateStore::new();
        let address = supplier_address(&family::namespace_prefix(), "S1");

        handler
            .apply(
                &SupplierPayload::create("S1", "s1", "Acme", "h4sh", "u").to_bytes(),
                &store,
            )
            .unwrap();
        let before = store.get_state(&address).unwrap().unwrap();

        let err = handler
            .apply(
                &SupplierPayload::create("S1", "xx", "Imposter", "nope", "v").to_bytes(),
                &store,
            )
            .unwrap_err();
        assert!(matches!(err, ApplyError::InvalidTransaction(_)));
        assert_eq!(store.get_state(&address).unwrap().unwrap(), before);
    }

    #[test]
    fn test_add_part_to_unknown_supplier_is_rejected() {
        let handler = SupplierTransactionHandler::default();
        let store = InMemoryStateStore::new();

        let err = handler
            .apply(&SupplierPayload::add_part("ghost", "P1").to_bytes(), &store)
            .unwrap_err();
        assert!(matches!(err, ApplyError::InvalidTransaction(ref m) if m.contains("not found")));
        assert_eq!(store.entry_count(), 0);
    }

    #[test]
    fn test_client_payload_survives_envelope_round_trip() {
        // What the client wraps and signs is byte-for-byte what the
        // handler decodes after the ledger unwraps the batch.
        let signer = Signer::generate();
        let payload = SupplierPayload::create("S2", "s2", "Widget Co", "s3cr3t", "http://w.example");

        let tx = build_transaction(&signer, &payload).unwrap();
        let batch_list = build_batch_list(&signer, vec![tx]).unwrap();
        let submitted = batch_list.to_bytes().unwrap();

        // The runtime unwraps the batch and hands the payload to the handler.
        let unwrapped: supplier_client::envelope::BatchList =
            bincode::deserialize(&submitted).unwrap();
        let delivered = &unwrapped.batches[0].transactions[0].payload;

        let decoded = SupplierPayload::from_bytes(delivered).unwrap();
        assert_eq!(decoded, payload);

        let handler = SupplierTransactionHandler::default();
        let store = InMemoryStateStore::new();
        handler.apply(delivered, &store).unwrap();
        assert_eq!(retrieve_view(&store, "S2").name, "Widget Co");
    }

    #[test]
    fn test_declared_address_set_matches_handler_write() {
        let signer = Signer::generate();
        let payload = SupplierPayload::create("S3", "s3", "Parts Inc", "h", "http://p.example");
        let tx = build_transaction(&signer, &payload).unwrap();
        let header: TransactionHeader = bincode::deserialize(&tx.header).unwrap();

        let handler = SupplierTransactionHandler::default();
        let store = InMemoryStateStore::new();
        handler.apply(&tx.payload, &store).unwrap();

        // The one address the handler wrote is the one the header declared.
        assert_eq!(store.entry_count(), 1);
        let written = store.get_state(&header.outputs[0]).unwrap();
        assert!(written.is_some());
    }

    #[test]
    fn test_short_payload_rejected_before_any_write() {
        let handler = SupplierTransactionHandler::default();
        let store = InMemoryStateStore::new();

        for bad in [&b"S1"[..], &b"S1,s1,Acme,h4sh"[..], &b""[..]] {
            let err = handler.apply(bad, &store).unwrap_err();
            assert!(matches!(err, ApplyError::InvalidTransaction(_)));
        }
        assert_eq!(store.entry_count(), 0);
    }

    #[test]
    fn test_two_suppliers_live_under_distinct_addresses() {
        let handler = SupplierTransactionHandler::default();
        let store = InMemoryStateStore::new();

        handler
            .apply(
                &SupplierPayload::create("S1", "s1", "Acme", "h", "u1").to_bytes(),
                &store,
            )
            .unwrap();
        handler
            .apply(
                &SupplierPayload::create("S2", "s2", "Widget Co", "h", "u2").to_bytes(),
                &store,
            )
            .unwrap();

        assert_eq!(store.entry_count(), 2);
        let listed = store.entries_with_prefix(&family::namespace_prefix());
        assert_eq!(listed.len(), 2);

        let mut names: Vec<String> = listed
            .iter()
            .map(|(_, bytes)| {
                SupplierRecord::from_state_bytes(bytes)
                    .unwrap()
                    .1
                    .supplier_name
            })
            .collect();
        names.sort();
        assert_eq!(names, vec!["Acme".to_string(), "Widget Co".to_string()]);
    }
}
