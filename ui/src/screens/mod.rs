pub mod latest_block;
