// scripts/benchmark.rs
use std::error::Error;
use std::fs;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vasicek_sde::analytics::vasicek_moments;
use vasicek_sde::math_utils::Timer;
use vasicek_sde::models::ModelParameters;
use vasicek_sde::output;
use vasicek_sde::rng::RngFactory;
use vasicek_sde::simulation::{PathMatrix, PathSimulator};

const RESULTS_DIR: &str = "results";

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    paths: usize,
    steps: usize,
    time_ms: f64,
    throughput_paths_per_sec: f64,
    terminal_mean: f64,
    terminal_std: f64,
    euler_mean: f64,
    euler_std: f64,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn terminal_moments(paths: &PathMatrix) -> (f64, f64) {
    let last = paths.column(paths.ncols() - 1);
    let n = last.len() as f64;
    let mean = last.sum() / n;
    let var = last.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0).max(1.0);
    (mean, var.sqrt())
}

fn run_case(
    name: &str,
    simulator: &PathSimulator,
    run: impl Fn(&PathSimulator) -> PathMatrix,
) -> BenchmarkResult {
    let p = simulator.params();

    let mut timer = Timer::new();
    timer.start();
    let paths = run(simulator);
    let time_ms = timer.elapsed_ms();

    let (terminal_mean, terminal_std) = terminal_moments(&paths);
    let k = p.n - 1;

    let result = BenchmarkResult {
        name: name.to_string(),
        paths: p.paths,
        steps: p.n,
        time_ms,
        throughput_paths_per_sec: p.paths as f64 / (time_ms / 1000.0),
        terminal_mean,
        terminal_std,
        euler_mean: vasicek_moments::euler_mean(p, k),
        euler_std: vasicek_moments::euler_variance(p, k).sqrt(),
    };

    info!(
        case = name,
        paths = result.paths,
        time_ms = result.time_ms,
        terminal_mean = result.terminal_mean,
        terminal_std = result.terminal_std,
        "benchmark case finished"
    );

    result
}

fn run_benchmarks() -> Result<Vec<BenchmarkResult>, Box<dyn Error>> {
    let mut results = Vec::new();

    for &paths in &[10_000, 100_000] {
        let params = ModelParameters::new(0.03, 0.5, 0.04, 0.02, 1.0, 252, paths);
        let simulator = PathSimulator::new(params)?;
        let antithetic = simulator.clone().with_antithetic(true);
        let factory = RngFactory::new(42);

        results.push(run_case(
            &format!("Serial ({}k paths)", paths / 1000),
            &simulator,
            |s| s.simulate_seeded(42),
        ));
        results.push(run_case(
            &format!("Parallel ({}k paths)", paths / 1000),
            &simulator,
            |s| s.simulate_parallel(&factory),
        ));
        results.push(run_case(
            &format!("Parallel antithetic ({}k paths)", paths / 1000),
            &antithetic,
            |s| s.simulate_parallel(&factory),
        ));
    }

    Ok(results)
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    info!(
        rayon_threads = rayon::current_num_threads(),
        "vasicek-sde benchmark suite"
    );

    let results = run_benchmarks()?;

    println!("\n{:=<100}", "");
    println!(
        "{:<36} {:>8} {:>6} {:>11} {:>13} {:>10} {:>10} {:>10}",
        "Benchmark", "Paths", "Steps", "Time (ms)", "Paths/sec", "Mean(T)", "Std(T)", "Euler Std"
    );
    println!("{:-<100}", "");
    for r in &results {
        println!(
            "{:<36} {:>8} {:>6} {:>11.2} {:>13.0} {:>10.6} {:>10.6} {:>10.6}",
            r.name,
            r.paths,
            r.steps,
            r.time_ms,
            r.throughput_paths_per_sec,
            r.terminal_mean,
            r.terminal_std,
            r.euler_std
        );
    }
    println!("{:=<100}", "");

    fs::create_dir_all(RESULTS_DIR)?;

    let summary: Vec<(&str, String)> = results
        .iter()
        .map(|r| {
            (
                r.name.as_str(),
                format!(
                    "{:.2},{:.6},{:.6},{:.6},{:.6}",
                    r.time_ms, r.terminal_mean, r.euler_mean, r.terminal_std, r.euler_std
                ),
            )
        })
        .collect();
    let summary_file = format!("{}/benchmark_summary.csv", RESULTS_DIR);
    output::write_summary_to_csv(&summary_file, &summary)?;

    // Small sample for plotting
    let sample = PathSimulator::new(ModelParameters::new(0.03, 0.5, 0.04, 0.02, 1.0, 252, 20))?;
    let paths_file = format!("{}/sample_paths.csv", RESULTS_DIR);
    output::write_paths_to_csv(&paths_file, &sample.simulate_seeded(42), &sample.time_grid())?;

    info!(summary = %summary_file, paths = %paths_file, "results written");
    Ok(())
}
