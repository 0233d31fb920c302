use luhn::engine::LuhnEngine;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn seeded_engine(seed: u64) -> LuhnEngine<StdRng> {
    LuhnEngine::with_rng(StdRng::seed_from_u64(seed))
}
