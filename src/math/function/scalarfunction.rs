pub trait ScalarFunction {
    fn value(&self, x: f64) -> f64;
}

impl<F> ScalarFunction for F
    where F : Fn(f64) -> f64 {
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}
