mod loader;

pub use loader::question_bank;
