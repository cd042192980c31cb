// AI resume matching.
// Scoring happens in a remote service; this module forwards the request and
// normalizes whatever JSON comes back into `AiMatchData`.

pub mod client;
pub mod handlers;
pub mod normalizer;
