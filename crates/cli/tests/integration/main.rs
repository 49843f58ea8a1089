#![cfg(unix)]

mod build_tests;
mod common;
mod var_tests;
