mod bulk_stats;
mod health;
mod validation;
