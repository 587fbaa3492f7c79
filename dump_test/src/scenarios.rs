mod basic;
mod concurrent;

use crate::test_ctx::env_flag;

pub unsafe fn run_all() {
    run("no-handler", basic::scenario_no_handler);
    run("sentinels", basic::scenario_sentinels);
    run("dump-once", basic::scenario_dump_once);
    run("dump-twice", basic::scenario_dump_twice);
    run("concurrent-dump", concurrent::scenario_concurrent_dump);
    if env_flag("DUMP_TEST_STRESS") {
        run("concurrent-dump-stress", concurrent::scenario_concurrent_dump_stress);
    }
}

unsafe fn run(name: &str, scenario: unsafe fn()) {
    println!("scenario: {name}");
    scenario();
}
