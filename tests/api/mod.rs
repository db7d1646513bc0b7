mod health_tests;
mod place_tests;
mod user_tests;
