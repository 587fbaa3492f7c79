#![allow(unsafe_op_in_unsafe_fn)]

mod scenarios;
mod test_ctx;

use coverage_dumper::{get_version, set_debug};

fn main() {
    set_debug(true);
    println!("{}", get_version());
    unsafe {
        scenarios::run_all();
    }
    println!("dump_test all scenarios passed");
}
