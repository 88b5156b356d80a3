use small_puzzles::{DemoConfig, DemoEngine, MultiplesDemo, ReversedSumDemo};

fn run_to_string<D: small_puzzles::domain::ports::Demo>(demo: D) -> String {
    let mut buffer = Vec::new();
    DemoEngine::new(demo).run(&mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_multiples_demo_output() {
    let output = run_to_string(MultiplesDemo::from_config(&DemoConfig::default()));

    assert_eq!(
        output,
        "Natural numbers below 1000 that are multiples of 3 or 5:\n\
         First 10 multiples: [3, 5, 6, 9, 10, 12, 15, 18, 20, 21]...\n\
         Total number of multiples found: 466\n\
         Sum of these multiples: 233168\n"
    );
}

#[test]
fn test_reversed_sum_demo_output() {
    let output = run_to_string(ReversedSumDemo::from_config(&DemoConfig::default()));

    assert_eq!(
        output,
        "Example 1:\n\
         Array 1: [1, 2, 3] (represents 321)\n\
         Array 2: [4, 5, 6] (represents 654)\n\
         Sum: 975\n\
         Result array: [5, 7, 9]\n\
         \n\
         Example 2:\n\
         Array 1: [9, 9] (represents 99)\n\
         Array 2: [1] (represents 1)\n\
         Sum: 100\n\
         Result array: [0, 0, 1]\n"
    );
}
