pub mod advisory;
