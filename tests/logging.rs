//! Global subscriber setup; kept in its own test binary because a process
//! can install only one subscriber

use combopt::knapsack::fill_multi_use;
use combopt::logging::init_tracing;

#[test]
fn test_init_tracing_then_run_algorithm() {
    init_tracing(true, None, false).unwrap();

    // A second installation in the same process is refused
    assert!(init_tracing(false, Some("debug"), true).is_err());

    let table = fill_multi_use(5, &[2, 3]).unwrap();
    assert!(table[5]);
}
