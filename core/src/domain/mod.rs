pub mod common;
pub mod health;
pub mod order;

#[cfg(test)]
mod test;
