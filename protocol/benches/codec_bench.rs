// Codec benchmarks.
//
// Covers transaction decode and encode at several input counts, readable
// projection, and address decoding.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use txcore_protocol::address::{decode_address, encode_address, Address};
use txcore_protocol::crypto::{sha256, Signature};
use txcore_protocol::transaction::{
    deserialize_transaction, ReadableTransaction, Transaction, TransactionOutput,
};

fn build_transaction(inputs: usize) -> Transaction {
    let ins = (0..inputs)
        .map(|i| sha256(format!("input-{i:06}").as_bytes()))
        .collect();
    let sigs = (0..inputs)
        .map(|i| Signature::from_bytes([i as u8; 65]))
        .collect();
    let outs = (0..2)
        .map(|i| TransactionOutput::new(Address::from_key([i as u8; 20]), 1_000_000, 10))
        .collect();
    Transaction::new(ins, sigs, outs).unwrap()
}

fn bench_deserialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/deserialize");

    for inputs in [1, 10, 100, 1000] {
        let bytes = build_transaction(inputs).serialize();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(inputs), &bytes, |b, bytes| {
            b.iter(|| deserialize_transaction(bytes).unwrap());
        });
    }

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let txn = build_transaction(10);

    c.bench_function("codec/serialize_10_inputs", |b| {
        b.iter(|| txn.serialize());
    });
}

fn bench_project(c: &mut Criterion) {
    let txn = build_transaction(10);

    c.bench_function("readable/project_10_inputs", |b| {
        b.iter(|| ReadableTransaction::project(&txn, false).unwrap());
    });
}

fn bench_decode_address(c: &mut Criterion) {
    let text = encode_address(&Address::from_key([0x42; 20]));

    c.bench_function("address/decode", |b| {
        b.iter(|| decode_address(&text).unwrap());
    });
}

criterion_group!(
    benches,
    bench_deserialize,
    bench_serialize,
    bench_project,
    bench_decode_address,
);
criterion_main!(benches);
