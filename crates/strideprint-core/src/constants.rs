// ABOUTME: Sports-science constants and fixed classification thresholds
// ABOUTME: Single source of truth for windows, breakpoints, bands, and goals
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

//! Sports-science constants used throughout the analytics engine
//!
//! Every threshold that drives a classification lives here so the rule sets
//! stay auditable as data. Values are fixed (never population-relative) so
//! results are reproducible and comparable across users.

/// Acute:chronic workload ratio model
///
/// References:
/// - Gabbett, T.J. (2016). The training-injury prevention paradox
///   <https://bjsm.bmj.com/content/50/5/273>
/// - Hulin, B.T., et al. (2016). The acute:chronic workload ratio predicts injury
pub mod training_load {
    /// Acute load window - most recent 7 days ending "today"
    pub const ACUTE_WINDOW_DAYS: i64 = 7;

    /// Chronic load window - most recent 42 days ending "today"
    pub const CHRONIC_WINDOW_DAYS: i64 = 42;

    /// Chronic sum divisor to normalize 42 days to a weekly-equivalent rate
    pub const CHRONIC_WEEKLY_DIVISOR: f64 = 6.0;

    /// Below this ratio the athlete is detraining
    pub const DETRAINING_CEILING: f64 = 0.8;

    /// Recovery zone upper bound (exclusive)
    pub const RECOVERY_CEILING: f64 = 1.0;

    /// Optimal training zone upper bound (exclusive)
    pub const OPTIMAL_CEILING: f64 = 1.3;

    /// Overreaching caution zone upper bound (exclusive); above is danger
    pub const OVERREACHING_CEILING: f64 = 1.5;
}

/// Race time prediction policy
///
/// References:
/// - Riegel, P.S. (1981). Athletic records and human endurance.
///   *American Scientist*, 69(3), 285-290
pub mod race_prediction {
    /// Riegel endurance formula exponent (typical value for running)
    pub const RIEGEL_EXPONENT: f64 = 1.06;

    /// Minimum base run distance to qualify for extrapolation (km)
    pub const MIN_BASE_DISTANCE_KM: f64 = 3.0;

    /// Maximum target/base distance ratio; larger extrapolations are omitted
    pub const MAX_EXTRAPOLATION_RATIO: f64 = 5.0;

    /// Base runs must fall within this trailing window (days)
    pub const RECENT_WINDOW_DAYS: i64 = 90;

    /// Standard race target distances in kilometers
    pub const TARGETS_KM: [(&str, f64); 4] = [
        ("5K", 5.0),
        ("10K", 10.0),
        ("Half Marathon", 21.0975),
        ("Marathon", 42.195),
    ];
}

/// Distance distribution bands (km, inclusive-lower / exclusive-upper)
pub mod distance_bands {
    /// Band labels and lower bounds; upper bound is the next band's lower
    /// bound, the last band is open-ended
    pub const BANDS: [(&str, f64); 6] = [
        ("<5K", 0.0),
        ("5-10K", 5.0),
        ("10-15K", 10.0),
        ("Half zone", 15.0),
        ("Marathon zone", 25.0),
        ("Ultra", 45.0),
    ];
}

/// Personality axis bucketing thresholds
///
/// Each axis maps a continuous metric in [0,1] (volume uses km) through four
/// ascending breakpoints into an integer score 1-5. The tables are monotonic
/// by construction; every breakpoint is covered by a boundary test.
pub mod personality {
    /// Trailing window for the consistency axis (ISO weeks)
    pub const CONSISTENCY_WINDOW_WEEKS: i64 = 8;

    /// Consistency: fraction of trailing weeks containing at least one run
    pub const CONSISTENCY_BREAKPOINTS: [f64; 4] = [0.25, 0.45, 0.65, 0.85];

    /// Speed: fraction of runs at least 5% faster than the median pace
    pub const SPEED_BREAKPOINTS: [f64; 4] = [0.05, 0.10, 0.18, 0.28];

    /// Pace must be at least this much faster than median to count as a
    /// tempo-type effort (fraction of median pace)
    pub const TEMPO_PACE_FACTOR: f64 = 0.95;

    /// Endurance: fraction of runs classified as long
    pub const ENDURANCE_BREAKPOINTS: [f64; 4] = [0.05, 0.12, 0.22, 0.35];

    /// A run is long when its distance reaches this multiple of the median
    pub const LONG_RUN_DISTANCE_FACTOR: f64 = 1.4;

    /// A run is also long when its duration reaches this many seconds
    pub const LONG_RUN_DURATION_SECONDS: u64 = 4_500; // 75 minutes

    /// Variety: mean of band/location/time-slot diversity ratios
    pub const VARIETY_BREAKPOINTS: [f64; 4] = [0.25, 0.40, 0.55, 0.75];

    /// Location diversity saturates at this many distinct locations
    pub const VARIETY_LOCATION_CAP: usize = 5;

    /// Volume: total km over the trailing 28 days (absolute scale, same for
    /// every user so scores stay comparable)
    pub const VOLUME_WINDOW_DAYS: i64 = 28;

    /// Volume axis breakpoints in km per 28 days
    pub const VOLUME_BREAKPOINTS_KM: [f64; 4] = [40.0, 80.0, 140.0, 220.0];

    /// Fixed reference cumulative distribution for the percentile, indexed by
    /// score sum minus 5 (sums range 5-25). Approximates the bell curve of
    /// recreational runners; independent of any live user table.
    pub const PERCENTILE_BY_SUM: [f64; 21] = [
        1.0, 2.0, 4.0, 7.0, 11.0, 16.0, 22.0, 29.0, 37.0, 45.0, 54.0, 62.0, 70.0, 77.0, 83.0,
        88.0, 92.0, 95.0, 97.0, 99.0, 99.5,
    ];
}

/// Lifetime distance milestone goals
pub mod milestones {
    /// Round-number lifetime distance goals in kilometers, ascending
    pub const GOALS_KM: [f64; 7] = [100.0, 250.0, 500.0, 1000.0, 2000.0, 5000.0, 10_000.0];

    /// Trailing window used to estimate the weekly accumulation rate (weeks)
    pub const RATE_WINDOW_WEEKS: i64 = 8;
}

/// Recovery analysis thresholds
pub mod recovery {
    /// Distance percentile above which a run counts as hard
    pub const HARD_DISTANCE_PERCENTILE: f64 = 0.80;
}

/// Today's-plan recommendation constants
pub mod todays_plan {
    /// Easy pace suggestion as a multiple of the median recent pace
    pub const EASY_PACE_FACTOR: f64 = 1.10;

    /// Tempo pace suggestion as a multiple of the median recent pace
    pub const TEMPO_PACE_FACTOR: f64 = 0.93;

    /// Scenario distances as multiples of the median run distance
    pub const SCENARIO_DISTANCE_FACTORS: [f64; 4] = [0.6, 1.0, 1.4, 1.8];

    /// Fixed scenario ladder (km) for histories too short to scale from
    pub const SCENARIO_FALLBACK_KM: [f64; 4] = [3.0, 5.0, 8.0, 10.0];

    /// Fallback safe distance (km) when no chronic history exists
    pub const COLD_START_SAFE_KM: f64 = 5.0;

    /// Margin below the optimal ceiling when solving for the safe-max
    /// distance, so running exactly that distance still classifies Optimal
    pub const SAFE_TARGET_MARGIN: f64 = 0.01;
}
