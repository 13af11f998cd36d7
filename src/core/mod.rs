pub mod ballistics;
pub mod window;

#[cfg(test)]
mod proptest_ballistics;
