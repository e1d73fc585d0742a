pub mod clock;

pub use clock::Clock as FixedClock;
