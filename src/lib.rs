pub mod math {
    pub mod function {
        pub mod scalarfunction;
        pub mod trigintegrand;
    }

    pub mod quadrature {
        pub mod interval;
        pub mod partition;
        pub mod midpointrule;
    }
}

pub mod benchmark {
    pub mod stopwatch;
    pub mod report;
}
