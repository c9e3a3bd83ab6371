use quadbench::benchmark::report::BenchmarkReport;
use quadbench::benchmark::stopwatch::Stopwatch;
use quadbench::math::function::trigintegrand::TrigLogRatio;
use quadbench::math::quadrature::interval::Interval;
use quadbench::math::quadrature::midpointrule::MidpointRule;
use quadbench::math::quadrature::partition::Partition;

// Bounds sit 1e-9 inside [0, π] so the integrand stays clear of its
// singularities at the endpoints.
const LOWER_BOUND: f64 = 1e-9;
const UPPER_BOUND: f64 = std::f64::consts::PI - 1e-9;
const TOTAL_COMPUTATIONAL_UNITS: usize = 1_000_000;

const METHOD: &'static str = "Sequential CPU Midpoint Rule";

fn main() {
    let interval = Interval::new(LOWER_BOUND, UPPER_BOUND).unwrap();
    let partition = Partition::new(interval, TOTAL_COMPUTATIONAL_UNITS).unwrap();
    let integrand = TrigLogRatio;

    let stopwatch = Stopwatch::start();
    let total_sum = MidpointRule::integrate(&integrand, &partition);
    let elapsed_milliseconds = stopwatch.elapsed_milliseconds();

    let report = BenchmarkReport::new(
        integrand.formula(),
        METHOD,
        &partition,
        total_sum,
        elapsed_milliseconds);
    report.print();
}
