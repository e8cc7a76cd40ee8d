pub mod cube;
pub mod heuristic;
pub mod r#move;
pub mod prelude;
pub mod solver;

#[cfg(test)]
mod test;
