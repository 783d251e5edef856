/// Reading delivery boundary.
///
/// The service never fetches anything itself; transport belongs to the
/// external collaborator. This module only decodes what that collaborator
/// hands over.
///
/// Submodules:
/// - `feed`: JSON decoding of reading payloads (single, push envelope,
///   newest-first batch).

pub mod feed;
