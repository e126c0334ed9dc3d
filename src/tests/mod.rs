mod config_tests;
mod seed_tests;
