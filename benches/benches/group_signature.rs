use ark_bls12_381::Bls12_381;
use ark_bn254::Bn254;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use benches::setup_group;
use blake2::Blake2b512;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ps_group_sig::prelude::*;

macro_rules! sign_verify {
    ($curve: ident, $name: expr, $rng: ident, $c: ident) => {
        let (gsk, gpk, members) = setup_group::<$curve, _>(&mut $rng, 1);
        let member = &members[0];
        let message = b"withdraw";

        let mut group = $c.benchmark_group(format!("Group signature {}", $name));
        group.bench_function("accept user", |b| {
            b.iter(|| {
                accept_user(&mut $rng, black_box(&member.join_request), black_box(&gsk)).unwrap()
            })
        });
        group.bench_function("sign", |b| {
            b.iter(|| {
                Signature::new(
                    &mut $rng,
                    black_box(message),
                    black_box(&member.credential),
                    black_box(&gpk),
                    black_box(&member.secret),
                )
                .unwrap()
            })
        });
        group.bench_function("sign deterministic", |b| {
            b.iter(|| {
                Signature::new_deterministic::<Blake2b512>(
                    black_box(message),
                    black_box(&member.credential),
                    black_box(&gpk),
                    black_box(&member.secret),
                )
                .unwrap()
            })
        });
        let sig =
            Signature::new(&mut $rng, message, &member.credential, &gpk, &member.secret).unwrap();
        group.bench_function("verify", |b| {
            b.iter(|| assert!(sig.verify(black_box(message), black_box(&gpk))))
        });
        group.bench_function("open", |b| {
            b.iter(|| assert!(open(black_box(&sig), black_box(&member.join_request), &gpk)))
        });
        group.finish();
    };
}

fn group_signature_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    sign_verify!(Bn254, "BN254", rng, c);
    sign_verify!(Bls12_381, "BLS12-381", rng, c);
}

fn open_among_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let member_counts = [10, 50, 100, 500];
    let mut group = c.benchmark_group("Opening among members");
    for count in member_counts {
        let (_, gpk, members) = setup_group::<Bn254, _>(&mut rng, count);
        let registry = members
            .iter()
            .map(|m| m.join_request.clone())
            .collect::<Vec<_>>();
        // Signer is last
        let signer = &members[count - 1];
        let sig =
            Signature::new(&mut rng, b"m", &signer.credential, &gpk, &signer.secret).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                assert_eq!(
                    open_among(black_box(&sig), black_box(&registry), &gpk),
                    Some(count - 1)
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, group_signature_benchmark, open_among_benchmark);
criterion_main!(benches);
