//! # Integration Test Flows
//!
//! End-to-end transaction flows through the registry and handler:
//!
//! 1. **Collection issuance**: CREATE_COLLECTION writes one collection and three moji
//! 2. **Sire selection**: SELECT_SIRE lists an existing moji for the signer
//! 3. **Rejections**: invalid transactions leave state untouched
//! 4. **Store failures**: propagated to the host unchanged

#[cfg(test)]
mod tests {
    use super::super::{init_test_logging, registry, request};
    use moji_processor::prelude::*;
    use moji_processor::{derive_dna, sha512_hex, AddressKind, CodecError, DNA_LENGTH};
    use rand::Rng;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn create(signer: &str, signature: &str) -> TpProcessRequest {
        request(&MojiPayload::create_collection(), signer, signature).unwrap()
    }

    fn select(signer: &str, sire: &StateAddress) -> TpProcessRequest {
        request(&MojiPayload::select_sire(sire.as_str()), signer, "5e1ec7").unwrap()
    }

    fn random_hex(len: usize) -> String {
        let bytes: Vec<u8> = (0..len / 2).map(|_| rand::thread_rng().gen()).collect();
        hex::encode(bytes)
    }

    fn handler() -> MojiHandler {
        MojiHandler::default()
    }

    // =============================================================================
    // COLLECTION ISSUANCE
    // =============================================================================

    #[tokio::test]
    async fn test_create_collection_for_pub1_abc123() -> anyhow::Result<()> {
        init_test_logging();
        let state = InMemoryState::new();
        let owner = PublicKey::new("pub1");

        registry().apply(&create("pub1", "abc123"), &state).await?;

        let [dna1, dna2, dna3] = derive_dna(&Signature::new("abc123"));
        assert_eq!(dna1.as_str(), &sha512_hex(b"abc123")[..DNA_LENGTH]);
        assert_eq!(dna2.as_str(), &sha512_hex(dna1.as_str().as_bytes())[..DNA_LENGTH]);
        assert_eq!(dna3.as_str(), &sha512_hex(dna2.as_str().as_bytes())[..DNA_LENGTH]);

        let addresses = handler().addresses().clone();
        let collection = handler()
            .load_collection(&state, &owner)
            .await?
            .expect("collection written");
        assert_eq!(
            collection.moji_addresses,
            [
                addresses.moji_address(&owner, &dna1),
                addresses.moji_address(&owner, &dna2),
                addresses.moji_address(&owner, &dna3),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_create_collection_writes_exactly_four_addresses() -> anyhow::Result<()> {
        let state = InMemoryState::new();
        let owner = PublicKey::new(random_hex(66));

        registry()
            .apply(&create(owner.as_str(), &random_hex(128)), &state)
            .await?;

        let batches = state.batches()?;
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 4);
        assert_eq!(state.len()?, 4);

        let codec = handler().addresses().clone();
        let collection = handler().load_collection(&state, &owner).await?.expect("collection");
        let written_moji: Vec<&StateAddress> = batches[0]
            .keys()
            .filter(|address| codec.kind_of(address) == Some(AddressKind::Moji))
            .collect();
        assert_eq!(written_moji.len(), 3);
        for address in &collection.moji_addresses {
            assert!(written_moji.contains(&address));
        }

        let owned = handler().load_owned_moji(&state, &owner).await?;
        assert_eq!(owned.len(), 3);
        assert!(owned.iter().all(|entry| entry.moji.owner == owner));
        assert!(owned.iter().all(|entry| entry.moji.sire.is_none()));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_collection_is_not_idempotent() -> anyhow::Result<()> {
        let state = InMemoryState::new();
        let registry = registry();
        registry.apply(&create("pub1", "abc123"), &state).await?;
        let before = state.batches()?;

        // Same signer, same or different signature.
        for signature in ["abc123", "def456"] {
            let err = registry
                .apply(&create("pub1", signature), &state)
                .await
                .unwrap_err();
            assert_eq!(err.reason(), Some(&InvalidTransaction::OwnerAlreadyExists));
        }

        assert_eq!(state.batches()?, before);
        assert_eq!(state.len()?, 4);
        Ok(())
    }

    #[tokio::test]
    async fn test_independent_owners_get_distinct_records() -> anyhow::Result<()> {
        let state = InMemoryState::new();
        let registry = registry();

        // Disjoint address sets, so the host may apply them concurrently.
        let requests: Vec<TpProcessRequest> = (0..8)
            .map(|_| create(&random_hex(66), &random_hex(128)))
            .collect();
        futures::future::try_join_all(requests.iter().map(|req| registry.apply(req, &state))).await?;

        assert_eq!(state.len()?, requests.len() * 4);
        assert_eq!(state.batches()?.len(), requests.len());
        Ok(())
    }

    // =============================================================================
    // SIRE SELECTION
    // =============================================================================

    #[tokio::test]
    async fn test_select_sire_lists_exact_address() -> anyhow::Result<()> {
        let state = InMemoryState::new();
        let registry = registry();
        let owner = PublicKey::new("pub1");
        registry.apply(&create("pub1", "abc123"), &state).await?;

        let collection = handler().load_collection(&state, &owner).await?.expect("collection");
        let sire = collection.moji_addresses[1].clone();
        registry.apply(&select("pub1", &sire), &state).await?;

        let listing = handler().load_sire_listing(&state, &owner).await?;
        assert_eq!(listing, Some(SireListing { owner, sire }));
        Ok(())
    }

    #[tokio::test]
    async fn test_select_sire_overwrites_previous_listing() -> anyhow::Result<()> {
        let state = InMemoryState::new();
        let registry = registry();
        let owner = PublicKey::new("pub1");
        registry.apply(&create("pub1", "abc123"), &state).await?;
        let collection = handler().load_collection(&state, &owner).await?.expect("collection");

        registry.apply(&select("pub1", &collection.moji_addresses[0]), &state).await?;
        registry.apply(&select("pub1", &collection.moji_addresses[2]), &state).await?;

        let listing = handler().load_sire_listing(&state, &owner).await?.expect("listing");
        assert_eq!(listing.sire, collection.moji_addresses[2]);
        // Collection + 3 moji + one listing.
        assert_eq!(state.len()?, 5);
        Ok(())
    }

    /// Known boundary: ownership of the sire is not checked. Selecting another
    /// owner's moji succeeds.
    #[tokio::test]
    async fn test_select_sire_accepts_foreign_moji() -> anyhow::Result<()> {
        let state = InMemoryState::new();
        let registry = registry();
        registry.apply(&create("alice", "a1a1"), &state).await?;
        registry.apply(&create("bob", "b0b0"), &state).await?;

        let bobs = handler()
            .load_collection(&state, &PublicKey::new("bob"))
            .await?
            .expect("collection");
        registry.apply(&select("alice", &bobs.moji_addresses[0]), &state).await?;

        let listing = handler()
            .load_sire_listing(&state, &PublicKey::new("alice"))
            .await?
            .expect("listing");
        assert_eq!(listing.sire, bobs.moji_addresses[0]);
        Ok(())
    }

    // =============================================================================
    // REJECTIONS
    // =============================================================================

    #[tokio::test]
    async fn test_select_sire_without_collection_for_any_address() -> anyhow::Result<()> {
        let state = InMemoryState::new();
        let registry = registry();
        registry.apply(&create("pub1", "abc123"), &state).await?;
        let existing = handler()
            .load_collection(&state, &PublicKey::new("pub1"))
            .await?
            .expect("collection")
            .moji_addresses[0]
            .clone();
        let before = state.batches()?;

        let sires = [
            existing.as_str().to_string(),
            format!("5f4d7601{}", random_hex(62)),
            "not-an-address".to_string(),
            String::new(),
        ];
        for sire in sires {
            let req = request(&MojiPayload::select_sire(sire), "stranger", "ff").unwrap();
            let err = registry.apply(&req, &state).await.unwrap_err();
            assert_eq!(err.reason(), Some(&InvalidTransaction::NoCollection));
        }
        assert_eq!(state.batches()?, before);
        Ok(())
    }

    #[tokio::test]
    async fn test_select_sire_missing_sire_with_collection() -> anyhow::Result<()> {
        let state = InMemoryState::new();
        let registry = registry();
        registry.apply(&create("pub1", "abc123"), &state).await?;

        let absent = StateAddress::parse(&format!("5f4d7601{}", random_hex(62))).expect("address");
        let err = registry.apply(&select("pub1", &absent), &state).await.unwrap_err();

        assert_eq!(err.reason(), Some(&InvalidTransaction::SireNotFound));
        assert!(handler()
            .load_sire_listing(&state, &PublicKey::new("pub1"))
            .await?
            .is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_select_sire_without_sire_field() -> anyhow::Result<()> {
        let state = InMemoryState::new();
        let registry = registry();
        let mut req = create("stranger", "ff");
        req.payload = br#"{"action":"SELECT_SIRE"}"#.to_vec();

        // No collection yet: the collection check comes first.
        let err = registry.apply(&req, &state).await.unwrap_err();
        assert_eq!(err.reason(), Some(&InvalidTransaction::NoCollection));
        assert!(state.is_empty()?);

        registry.apply(&create("stranger", "ff"), &state).await?;
        let before = state.batches()?;

        let err = registry.apply(&req, &state).await.unwrap_err();
        assert_eq!(err.reason(), Some(&InvalidTransaction::SireNotFound));
        assert_eq!(state.batches()?, before);
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_and_unknown_payloads() {
        let state = InMemoryState::new();
        let registry = registry();
        let mut req = create("pub1", "abc123");

        req.payload = b"\xde\xad\xbe\xef".to_vec();
        let err = registry.apply(&req, &state).await.unwrap_err();
        assert!(matches!(err.reason(), Some(InvalidTransaction::MalformedPayload(_))));

        req.payload = br#"{"action":"BREED_MOJI"}"#.to_vec();
        let err = registry.apply(&req, &state).await.unwrap_err();
        assert_eq!(
            err.reason(),
            Some(&InvalidTransaction::UnknownAction("BREED_MOJI".to_string()))
        );

        req.payload = br#"{}"#.to_vec();
        let err = registry.apply(&req, &state).await.unwrap_err();
        assert!(matches!(err.reason(), Some(InvalidTransaction::UnknownAction(_))));

        assert!(state.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_unregistered_version_rejected() {
        let state = InMemoryState::new();
        let mut req = create("pub1", "abc123");
        req.header.family_version = "1.0".to_string();

        let err = registry().apply(&req, &state).await.unwrap_err();
        assert!(matches!(err, ApplyError::UnsupportedFamily { .. }));
        assert!(state.is_empty().unwrap());
    }

    // =============================================================================
    // STORE FAILURES
    // =============================================================================

    #[tokio::test]
    async fn test_store_errors_propagate_unchanged() {
        for failure in [
            StateError::Unavailable,
            StateError::Timeout,
            StateError::Other("disk full".to_string()),
        ] {
            let state = InMemoryState::new();
            state.fail_with(Some(failure.clone())).unwrap();

            let err = registry().apply(&create("pub1", "abc123"), &state).await.unwrap_err();
            assert_eq!(err, ApplyError::State(failure));
            assert!(!err.is_invalid_transaction());
        }
    }

    #[tokio::test]
    async fn test_corrupt_collection_surfaces_codec_error() -> anyhow::Result<()> {
        let state = InMemoryState::new();
        let owner = PublicKey::new("pub1");
        state.insert(handler().addresses().collection_address(&owner), b"garbage".to_vec())?;

        let result = handler().load_collection(&state, &owner).await;
        assert!(matches!(result, Err(ApplyError::Codec(CodecError::Decode(_)))));

        // Existence is all CREATE_COLLECTION checks.
        let err = registry().apply(&create("pub1", "abc123"), &state).await.unwrap_err();
        assert_eq!(err.reason(), Some(&InvalidTransaction::OwnerAlreadyExists));
        Ok(())
    }

    // =============================================================================
    // TELEMETRY
    // =============================================================================

    #[test]
    fn test_telemetry_config_for_family() {
        let config = moji_telemetry::TelemetryConfig::for_family(moji_processor::FAMILY_NAME);
        assert_eq!(config.service_name, "cryptomoji-tp");
    }
}
