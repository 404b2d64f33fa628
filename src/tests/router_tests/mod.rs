mod api_tests;
mod detail_tests;
mod filter_tests;
mod listing_tests;
