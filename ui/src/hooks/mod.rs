pub mod use_latest_block;
