use rust_dcsrgg::algorithm::algo_parallel::AlgoParallel;
use rust_dcsrgg::algorithm::algo_sequential::AlgoSequential;
use rust_dcsrgg::algorithm::Algorithm;
use rust_dcsrgg::error::GeneratorError;
use rust_dcsrgg::generator::generate_with;
use rust_dcsrgg::logging::init_logging;
use rust_dcsrgg::parameters::{get_and_check_options, Parameters, SamplingAlgorithm};
use rust_dcsrgg::report::report_graph;
use std::io::{stdout, Write};
use std::process::ExitCode;

use pcg_rand::Pcg64;
use rand::SeedableRng;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("failed to write graph: {0}")]
    Io(#[from] std::io::Error),
}

fn execute<T: Algorithm>(opt: &Parameters) -> Result<(), CliError> {
    let mut rng = if let Some(seed_value) = opt.seed_value {
        Pcg64::seed_from_u64(seed_value)
    } else {
        Pcg64::from_entropy()
    };

    let labels = opt.node_labels();
    let (adjacency, coordinates) = generate_with::<T, _, _>(
        &labels,
        &opt.hyperparameters(),
        &mut rng,
        opt.num_threads(),
    )?;

    let mut out = stdout().lock();
    report_graph(&labels, &adjacency, &coordinates, &mut out)?;
    out.flush()?;

    Ok(())
}

fn run() -> Result<(), CliError> {
    let opt = get_and_check_options()?;
    tracing::debug!(?opt, "parsed options");

    match opt.algorithm {
        SamplingAlgorithm::Sequential => execute::<AlgoSequential>(&opt),
        SamplingAlgorithm::Parallel => execute::<AlgoParallel>(&opt),
    }
}

fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        eprintln!("structured logging already configured elsewhere: {}", err);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "generation failed");
            ExitCode::FAILURE
        }
    }
}
