#![allow(dead_code)]


/// Install a test logger once; repeated calls are ignored.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
