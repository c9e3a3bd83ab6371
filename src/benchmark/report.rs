use std::fmt;

use crate::math::quadrature::partition::Partition;

const SEPARATOR: &'static str = "--------------------------------------------------------";

/// The fixed console report. Parameter lines use default float formatting,
/// the result and timing lines are fixed-point with 15 decimal digits.
pub struct BenchmarkReport {
    formula: &'static str,
    method: &'static str,
    lower: f64,
    upper: f64,
    units: usize,
    delta_x: f64,
    integral: f64,
    elapsed_milliseconds: f64
}

impl BenchmarkReport {
    pub fn new(formula: &'static str,
               method: &'static str,
               partition: &Partition,
               integral: f64,
               elapsed_milliseconds: f64) -> BenchmarkReport {
        BenchmarkReport {
            formula,
            method,
            lower: partition.interval().lower(),
            upper: partition.interval().upper(),
            units: partition.units(),
            delta_x: partition.delta_x(),
            integral,
            elapsed_milliseconds
        }
    }

    pub fn print(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Integrating {}", self.formula)?;
        writeln!(f, "Method: {}", self.method)?;
        writeln!(f, "Interval: [{}, {}]", self.lower, self.upper)?;
        writeln!(f, "Total computational units (N): {}", self.units)?;
        writeln!(f, "Delta x: {}", self.delta_x)?;
        writeln!(f, "{}", SEPARATOR)?;
        writeln!(f, "Integral result (CPU): {:.15}", self.integral)?;
        writeln!(f, "Execution time (CPU): {:.15} ms", self.elapsed_milliseconds)?;
        write!(f, "{}", SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::quadrature::interval::Interval;

    fn sample_report() -> BenchmarkReport {
        let interval = Interval::new(0.0, 2.0).unwrap();
        let partition = Partition::new(interval, 4).unwrap();
        BenchmarkReport::new("f(x) = x", "Sequential CPU Midpoint Rule", &partition, 2.0, 1.5)
    }

    #[test]
    fn renders_the_fixed_line_sequence() {
        let lines: Vec<String> = sample_report().
            to_string().
            lines().
            map(str::to_owned).
            collect();
        assert_eq!(lines, vec![
            "Integrating f(x) = x",
            "Method: Sequential CPU Midpoint Rule",
            "Interval: [0, 2]",
            "Total computational units (N): 4",
            "Delta x: 0.5",
            "--------------------------------------------------------",
            "Integral result (CPU): 2.000000000000000",
            "Execution time (CPU): 1.500000000000000 ms",
            "--------------------------------------------------------"
        ]);
    }

    #[test]
    fn fixed_point_lines_keep_15_decimals_regardless_of_magnitude() {
        let interval = Interval::new(0.0, 1.0).unwrap();
        let partition = Partition::new(interval, 1).unwrap();
        let report = BenchmarkReport::new("f", "m", &partition, 12345.5, 0.0001);
        let text = report.to_string();
        assert!(text.contains("Integral result (CPU): 12345.500000000000000"));
        assert!(text.contains("Execution time (CPU): 0.000100000000000 ms"));
    }
}
