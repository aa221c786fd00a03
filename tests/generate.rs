use pcg_rand::Pcg64;
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rust_dcsrgg::algorithm::algo_parallel::AlgoParallel;
use rust_dcsrgg::algorithm::algo_sequential::AlgoSequential;
use rust_dcsrgg::generator::generate_with;
use rust_dcsrgg::latent::sample_pareto;
use rust_dcsrgg::parameters::DEMO_LABELS;
use rust_dcsrgg::prelude::*;

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("v{}", i)).collect()
}

fn hyperparameters(gamma: f64, beta: f64, little_c: f64, x_0: f64) -> Hyperparameters {
    Hyperparameters {
        gamma,
        beta,
        little_c,
        x_0,
        ..Default::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn stored_pairs_follow_input_order(
        n in 0usize..40,
        seed: u64,
        gamma in 1.1f64..4.0,
        beta in 0.5f64..4.0,
        little_c in 0.0f64..5.0,
        x_0 in 0.1f64..3.0,
    ) {
        let ids = labels(n);
        let mut rng = Pcg64::seed_from_u64(seed);
        let (adjacency, coordinates) =
            generate(&ids, &hyperparameters(gamma, beta, little_c, x_0), &mut rng).unwrap();

        prop_assert_eq!(adjacency.number_of_nodes(), n);
        prop_assert_eq!(coordinates.len(), n);

        let position = |id: &String| ids.iter().position(|x| x == id);
        for (u, row) in adjacency.iter() {
            let i = position(u);
            prop_assert!(i.is_some());
            prop_assert!(coordinates.contains_key(u));

            for (v, &present) in row {
                prop_assert!(present);
                let j = position(v);
                prop_assert!(j.is_some());
                prop_assert!(i <= j);
                if u != v {
                    prop_assert!(!adjacency.contains(v, u));
                }
            }
        }
    }

    #[test]
    fn seeded_calls_are_identical(n in 0usize..30, seed: u64) {
        let ids = labels(n);
        let hp = Hyperparameters::default();

        let first = generate(&ids, &hp, &mut Pcg64::seed_from_u64(seed)).unwrap();
        let second = generate(&ids, &hp, &mut Pcg64::seed_from_u64(seed)).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn pareto_samples_respect_minimum(seed: u64, x_0 in 0.01f64..10.0, gamma in 1.01f64..6.0) {
        let mut rng = Pcg64::seed_from_u64(seed);
        for _ in 0..100 {
            prop_assert!(sample_pareto(&mut rng, x_0, gamma).unwrap() >= x_0);
        }
    }

    #[test]
    fn kernel_non_decreasing_in_distance(
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
        k_i in 1.0f64..50.0,
        k_j in 1.0f64..50.0,
        beta in 0.01f64..6.0,
    ) {
        let kernel = ConnectionKernel::new(2.0, beta).unwrap();
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(kernel.from_distance(near, k_i, k_j) <= kernel.from_distance(far, k_i, k_j));
    }
}

#[test]
fn empty_input_yields_empty_outputs() {
    let ids: Vec<String> = Vec::new();
    let mut rng = Pcg64::seed_from_u64(0);
    let (adjacency, coordinates) = generate(&ids, &Hyperparameters::default(), &mut rng).unwrap();

    assert!(adjacency.is_empty());
    assert!(coordinates.is_empty());
}

#[test]
fn single_node() {
    let ids = vec!["solo"];
    for seed in 0..10 {
        let mut rng = Pcg64::seed_from_u64(seed);
        let (adjacency, coordinates) =
            generate(&ids, &Hyperparameters::default(), &mut rng).unwrap();

        assert_eq!(adjacency.number_of_nodes(), 1);
        assert!(adjacency.number_of_edges() <= 1);
        assert_eq!(coordinates.len(), 1);

        let (radius, angle) = coordinates[&"solo"].as_tuple();
        assert!(radius <= 5.0);
        assert!((0.0..360.0).contains(&angle));
    }
}

#[test]
fn decaying_kernel_connects_every_self_pair() {
    let ids = labels(12);
    let hp = Hyperparameters {
        shape: KernelShape::Decaying,
        ..Default::default()
    };
    let (adjacency, _) = generate(&ids, &hp, &mut Pcg64::seed_from_u64(8)).unwrap();

    assert!(ids.iter().all(|id| adjacency.contains(id, id)));
}

#[test]
fn self_pairs_can_be_excluded() {
    let ids = labels(12);
    let hp = Hyperparameters {
        shape: KernelShape::Decaying,
        self_loops: false,
        ..Default::default()
    };
    let (adjacency, _) = generate(&ids, &hp, &mut Pcg64::seed_from_u64(8)).unwrap();

    assert!(ids.iter().all(|id| !adjacency.contains(id, id)));
}

#[test]
fn invalid_exponent_consumes_no_randomness() {
    let ids = labels(10);
    let bad = Hyperparameters {
        gamma: 1.0,
        ..Default::default()
    };

    let mut rng = Pcg64::seed_from_u64(42);
    assert_eq!(
        generate(&ids, &bad, &mut rng).unwrap_err(),
        GeneratorError::InvalidExponent { gamma: 1.0 }
    );
    let after_failure = generate(&ids, &Hyperparameters::default(), &mut rng).unwrap();

    let mut fresh = Pcg64::seed_from_u64(42);
    let untouched = generate(&ids, &Hyperparameters::default(), &mut fresh).unwrap();

    assert_eq!(after_failure, untouched);
    assert_eq!(rng.gen::<u64>(), fresh.gen::<u64>());
}

#[test]
fn invalid_inputs_are_rejected() {
    let mut rng = Pcg64::seed_from_u64(1);

    let err = generate(&labels(3), &hyperparameters(0.5, 2.5, 2.0, 1.0), &mut rng).unwrap_err();
    assert_eq!(err, GeneratorError::InvalidExponent { gamma: 0.5 });

    let err = generate(&labels(3), &hyperparameters(2.05, 2.5, 2.0, -1.0), &mut rng).unwrap_err();
    assert_eq!(err, GeneratorError::InvalidSupport { x_0: -1.0 });

    let err = generate(&["a", "b", "a"], &Hyperparameters::default(), &mut rng).unwrap_err();
    assert_eq!(
        err,
        GeneratorError::DuplicateIdentifier {
            first: 0,
            second: 2
        }
    );
}

#[test]
fn parallel_is_independent_of_thread_count() {
    let ids: Vec<&str> = DEMO_LABELS.to_vec();
    let hp = Hyperparameters {
        radial_offset: 15.0,
        gamma: 2.005,
        ..Default::default()
    };

    let run = |threads| {
        let mut rng = Pcg64::seed_from_u64(2024);
        generate_with::<AlgoParallel, _, _>(&ids, &hp, &mut rng, threads).unwrap()
    };

    let reference = run(1);
    for threads in [2, 4, 7, 32] {
        assert_eq!(run(threads), reference);
    }
}

#[test]
fn parallel_and_sequential_share_latent_draws() {
    let ids = labels(25);
    let hp = Hyperparameters::default();

    let (_, seq) = generate_with::<AlgoSequential, _, _>(&ids, &hp, &mut Pcg64::seed_from_u64(5), 1)
        .unwrap();
    let (_, par) = generate_with::<AlgoParallel, _, _>(&ids, &hp, &mut Pcg64::seed_from_u64(5), 4)
        .unwrap();

    assert_eq!(seq, par);
}

#[test]
fn unseeded_generators_are_accepted() {
    let ids = labels(20);
    let (adjacency, coordinates) =
        generate(&ids, &Hyperparameters::default(), &mut rand::thread_rng()).unwrap();

    assert_eq!(adjacency.number_of_nodes(), 20);
    assert_eq!(coordinates.len(), 20);

    let latents = LatentVariables::from_parts(vec![0.2, 0.8], vec![1.5, 2.0]).unwrap();
    let (adjacency, _) = build_graph(
        &["a", "b"],
        &latents,
        &Hyperparameters::default(),
        &mut rand::thread_rng(),
    )
    .unwrap();
    assert!(adjacency.contains(&"a", &"b"));
}

#[test]
fn misaligned_latents_are_rejected() {
    assert_eq!(
        LatentVariables::from_parts(vec![0.2, 0.8], vec![1.5]),
        Err(GeneratorError::MisalignedLatents {
            positions: 2,
            kappas: 1
        })
    );
}
