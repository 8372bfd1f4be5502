//! Start command implementation.

use std::ffi::OsString;

use crate::domain::AppError;

pub fn run_start(args: Vec<OsString>) -> Result<i32, AppError> {
    crate::app::api::start(&args)
}
