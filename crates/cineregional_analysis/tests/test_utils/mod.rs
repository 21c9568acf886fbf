//! Test utilities for analysis tests.
//!
//! This module provides a mock grounded driver and canned answers.

pub mod mock_grounded;

#[allow(unused_imports)]
pub use mock_grounded::{MockBehavior, MockGroundedDriver, MockResponse};

/// A well-formed answer for "Dune: Part Two" with all three blocks.
#[allow(dead_code)]
pub const DUNE_ANSWER: &str = r#"1. Dune: Part Two is a global blockbuster still playing on premium screens.
2. Global highlights:
- Crossed $700M worldwide
- IMAX screens sold out for weeks
3. Regional breakdown
The United States led, followed by China and the UK.
4. Continental breakdown
Europe and Asia together outgrossed North America.

DATA_BLOCK:
```json
[
  {"region": "USA", "boxOffice": 282.1, "popularityScore": 94, "availability": ["Theaters", "Max"]},
  {"region": "China", "boxOffice": 80.5, "popularityScore": 71, "availability": ["Theaters"]},
  {"region": "UK", "boxOffice": 48.2, "popularityScore": 88, "availability": ["Theaters", "Sky [4K]"]}
]
```

CONTINENTAL_BLOCK:
```json
[
  {"continent": "North America", "marketShare": 40, "status": "Stable", "topCountry": "USA"},
  {"continent": "Asia", "marketShare": 25, "status": "Trending", "topCountry": "China"}
]
```

GLOBAL_STATS:
```json
{"totalBoxOffice": "$711M", "criticScore": 92, "audienceScore": 95, "globalReachIndex": 9, "releaseStatus": "Streaming"}
```
"#;
