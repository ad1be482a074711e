#![allow(non_snake_case)]

#[macro_use]
extern crate criterion;
use criterion::Criterion;

use curve25519_dalek::scalar::Scalar;
use merlin::Transcript;
use rand::Rng;

use rangeproof::{commit, gen_proof, verify_proof, Pedersen, Proof};

fn bench_gen_proof(c: &mut Criterion) {
    c.bench_function("interval gen_proof", |bench| {
        let commitment = commit(100_000);
        bench.iter(|| gen_proof(100_000, &commitment, 0, 1_000_000).unwrap());
    });
}

fn bench_verify_proof(c: &mut Criterion) {
    c.bench_function("interval verify_proof", |bench| {
        let commitment = commit(100_000);
        let proof = gen_proof(100_000, &commitment, 0, 1_000_000).unwrap();
        bench.iter(|| verify_proof(&proof).unwrap());
    });
}

fn bench_aggregated_prove(c: &mut Criterion) {
    c.bench_function("aggregated prove m=2", |bench| {
        let ped = Pedersen::new(b"bench.rangeproof");
        let mut rng = rand::thread_rng();
        let values: Vec<u64> = (0..2).map(|_| rng.gen()).collect();
        let blindings: Vec<Scalar> = (0..2).map(|_| Scalar::random(&mut rng)).collect();

        bench.iter(|| {
            let mut transcript = Transcript::new(b"bench");
            Proof::create(&ped, &mut transcript, &values, &blindings, &mut rng).unwrap()
        });
    });
}

fn bench_aggregated_verify(c: &mut Criterion) {
    c.bench_function("aggregated verify m=2", |bench| {
        let ped = Pedersen::new(b"bench.rangeproof");
        let mut rng = rand::thread_rng();
        let values: Vec<u64> = (0..2).map(|_| rng.gen()).collect();
        let blindings: Vec<Scalar> = (0..2).map(|_| Scalar::random(&mut rng)).collect();

        let mut transcript = Transcript::new(b"bench");
        let proof =
            Proof::create(&ped, &mut transcript, &values, &blindings, &mut rng).unwrap();

        bench.iter(|| {
            let mut transcript = Transcript::new(b"bench");
            proof.verify(&ped, &mut transcript, &mut rng).unwrap()
        });
    });
}

criterion_group! {
    name = range_proofs;
    config = Criterion::default().sample_size(10);
    targets = bench_gen_proof, bench_verify_proof, bench_aggregated_prove, bench_aggregated_verify
}

criterion_main!(range_proofs);
