use crate::math::function::scalarfunction::ScalarFunction;
use crate::math::quadrature::partition::Partition;

pub struct MidpointRule;

impl MidpointRule {
    /// Sums f(x_i) * delta_x over every midpoint x_i of the partition, in
    /// index order, with plain left-to-right accumulation. Non-finite
    /// function values flow into the total untouched. Callers timing the
    /// computation should wrap exactly this call.
    pub fn integrate<F>(integrand: &F, partition: &Partition) -> f64
        where F : ScalarFunction {
        let delta_x = partition.delta_x();
        let mut total_sum = 0.0;
        for i in 0..partition.units() {
            total_sum += integrand.value(partition.midpoint(i)) * delta_x;
        }
        total_sum
    }
}
