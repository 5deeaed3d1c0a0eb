use crate::types::{DecimalPlaces, NGramSize};

pub const DEFAULT_N_GRAMS: &[NGramSize] = &[2, 3];

pub const DEFAULT_PLACES: DecimalPlaces = 9;

pub const DEFAULT_MAX_WEIGHT: f64 = f64::INFINITY;

pub const DEFAULT_MIN_WEIGHT: f64 = f64::NEG_INFINITY;
