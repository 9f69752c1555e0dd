/// Screen modules for the finder
pub mod finder;
