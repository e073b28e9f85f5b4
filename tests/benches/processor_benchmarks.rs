//! # Cryptomoji Processor Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | Addressing | collection / moji address derivation |
//! | DNA | three-strand chain from a signature |
//! | Apply | CREATE_COLLECTION and SELECT_SIRE against in-memory state |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use moji_processor::prelude::*;
use moji_processor::{derive_dna, AddressCodec, Namespace, NAMESPACE};
use rand::Rng;
use std::sync::Arc;
use tokio::runtime::Runtime;

fn random_hex(len: usize) -> String {
    let bytes: Vec<u8> = (0..len / 2).map(|_| rand::thread_rng().gen()).collect();
    hex::encode(bytes)
}

fn request(payload: &MojiPayload, signer: &str, signature: &str) -> TpProcessRequest {
    TpProcessRequest {
        payload: JsonCodec
            .encode_payload(&payload.to_raw())
            .expect("payload encodes"),
        header: TransactionHeader {
            signer_public_key: PublicKey::new(signer),
            family_name: moji_processor::FAMILY_NAME.to_string(),
            family_version: moji_processor::FAMILY_VERSION.to_string(),
        },
        signature: Signature::new(signature),
    }
}

// ============================================================================
// Addressing and DNA
// ============================================================================

fn bench_addressing(c: &mut Criterion) {
    let mut group = c.benchmark_group("addressing");
    let codec = AddressCodec::new(Namespace::parse(NAMESPACE).expect("namespace"));
    let owner = PublicKey::new(random_hex(66));
    let [dna, _, _] = derive_dna(&Signature::new(random_hex(128)));

    group.bench_function("collection_address", |b| {
        b.iter(|| black_box(codec.collection_address(&owner)))
    });
    group.bench_function("moji_address", |b| {
        b.iter(|| black_box(codec.moji_address(&owner, &dna)))
    });
    group.finish();
}

fn bench_dna_chain(c: &mut Criterion) {
    let signature = Signature::new(random_hex(128));
    c.bench_function("dna/derive_three_strands", |b| {
        b.iter(|| black_box(derive_dna(&signature)))
    });
}

// ============================================================================
// Apply
// ============================================================================

fn bench_create_collection(c: &mut Criterion) {
    let runtime = Runtime::new().expect("tokio runtime");
    let mut group = c.benchmark_group("apply/create_collection");

    for size in [1usize, 10, 100] {
        let requests: Vec<TpProcessRequest> = (0..size)
            .map(|_| request(&MojiPayload::create_collection(), &random_hex(66), &random_hex(128)))
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &requests, |b, requests| {
            b.iter(|| {
                let handler: MojiHandler = MojiHandler::default();
                let state = InMemoryState::new();
                runtime.block_on(async {
                    for req in requests {
                        black_box(handler.apply(req, &state).await.is_ok());
                    }
                });
            })
        });
    }
    group.finish();
}

fn bench_select_sire(c: &mut Criterion) {
    let runtime = Runtime::new().expect("tokio runtime");
    let mut registry = HandlerRegistry::new();
    let handler: MojiHandler = MojiHandler::default();
    registry.register(Arc::new(handler.clone()));
    let state = InMemoryState::new();
    let owner = PublicKey::new("bench-owner");

    let sire = runtime.block_on(async {
        registry
            .apply(&request(&MojiPayload::create_collection(), owner.as_str(), "beef"), &state)
            .await
            .expect("collection created");
        handler
            .load_collection(&state, &owner)
            .await
            .expect("collection loads")
            .expect("collection present")
            .moji_addresses[0]
            .clone()
    });
    let req = request(&MojiPayload::select_sire(sire.as_str()), owner.as_str(), "cafe");

    c.bench_function("apply/select_sire", |b| {
        b.iter(|| runtime.block_on(async { black_box(registry.apply(&req, &state).await.is_ok()) }))
    });
}

criterion_group!(
    benches,
    bench_addressing,
    bench_dna_chain,
    bench_create_collection,
    bench_select_sire
);
criterion_main!(benches);
