// Domain layer: the fixed denomination table and the tender breakdown.

pub mod model;
