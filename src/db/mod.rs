pub mod journal;
pub mod pool;
