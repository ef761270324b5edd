mod health;
mod order;
