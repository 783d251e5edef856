/// Threshold evaluation and alert generation.
///
/// Submodules:
/// - `ranges`: pure range classification (safe / warning / danger).
/// - `generate`: stateless alert generation from a reading snapshot.

pub mod generate;
pub mod ranges;
