use super::*;
use itertools::Itertools;

/// Evaluates rows on `num_threads` scoped workers. Row `u` draws from its own
/// generator, seeded by the `u`-th value taken from the caller's generator, and
/// rows are merged in index order. The result depends on the seed only, not on
/// the number of threads; it differs from [`super::algo_sequential::AlgoSequential`]
/// for the same seed.
pub struct AlgoParallel {
    kernel: ConnectionKernel,
    self_loops: bool,
    num_threads: usize,
}

impl Algorithm for AlgoParallel {
    const IS_PARALLEL: bool = true;

    fn new(kernel: ConnectionKernel, self_loops: bool, num_threads: usize) -> Self {
        Self {
            kernel,
            self_loops,
            num_threads: num_threads.max(1),
        }
    }

    fn run<R: Rng + SeedableRng, W: EdgeWriter + ?Sized>(
        &mut self,
        rng: &mut R,
        latents: &LatentVariables,
        writer: &mut W,
    ) -> Result<(), GeneratorError> {
        let n = latents.len();
        let row_seeds = (0..n).map(|_| rng.gen::<u64>()).collect_vec();
        let num_threads = self.num_threads.min(n).max(1);

        tracing::debug!(
            nodes = n,
            pairs = number_of_pairs(n, self.self_loops),
            threads = num_threads,
            "sampling pairs in parallel"
        );

        let kernel = self.kernel;
        let self_loops = self.self_loops;
        let row_seeds = &row_seeds;

        let per_worker = crossbeam::scope(|scope| {
            let handles = (0..num_threads)
                .map(|rank| {
                    scope.spawn(move |_| {
                        (rank..n)
                            .step_by(num_threads)
                            .map(|u| {
                                let mut row_rng = R::seed_from_u64(row_seeds[u]);
                                let mut neighbors = Vec::new();
                                sample_row(&kernel, latents, u, self_loops, &mut row_rng, |v| {
                                    neighbors.push(v)
                                });
                                (u, neighbors)
                            })
                            .collect_vec()
                    })
                })
                .collect_vec();

            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Result<Vec<_>, _>>()
        })
        .map_err(|_| GeneratorError::WorkerPanicked)?
        .map_err(|_| GeneratorError::WorkerPanicked)?;

        let mut rows = per_worker.into_iter().flatten().collect_vec();
        rows.sort_unstable_by_key(|(u, _)| *u);

        for (u, neighbors) in rows {
            for v in neighbors {
                writer.add_edge(u, v);
            }
        }

        Ok(())
    }
}
