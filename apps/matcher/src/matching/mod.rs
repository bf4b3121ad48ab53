//! Match scoring core: similarity, skill overlap, experience ratio, weighted
//! blend and ranking. Pure and synchronous apart from the embedding resolve
//! step in `ranking`, which is the only place the injected embedder is called.

pub mod analysis;
pub mod embedding_cache;
pub mod experience;
pub mod ranking;
pub mod similarity;
pub mod skills;
