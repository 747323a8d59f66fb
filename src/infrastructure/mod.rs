pub mod appraiser;
pub mod clock;
pub mod in_memory;
pub mod notifier;
