use irt_core::{assemble, format, Assembler, Fragment, FragmentSequence, IrtConfig, Value};
use proptest::prelude::*;

// The generated programs assembled into `char[1024]` with strcat. Anything
// longer overflowed; here it must come back whole.
#[test]
fn output_longer_than_legacy_buffer_is_complete() {
    let word = "interpolation-";
    let mut seq = FragmentSequence::new();
    let mut expected = String::new();
    for i in 0..500 {
        seq.push(Fragment::Literal(word));
        seq.push(Fragment::Computed(Value::Int(i)));
        expected.push_str(word);
        expected.push_str(&i.to_string());
    }

    let text = assemble(&seq).expect("assembly failed");
    assert!(text.len() > 1024);
    assert_eq!(text.as_str(), expected);
}

#[test]
fn single_huge_literal() {
    let big = "x".repeat(64 * 1024);
    let seq = FragmentSequence::new().literal("<").literal(&big).literal(">");
    let text = assemble(&seq).expect("assembly failed");
    assert_eq!(text.len(), big.len() + 2);
    assert!(text.as_str().starts_with("<x"));
    assert!(text.as_str().ends_with("x>"));
}

#[test]
fn demonstration_lines() {
    let msg = "Test";
    let count = 42;
    let pi = 3.14;

    let lines = [
        FragmentSequence::new().literal("Message: ").value(msg),
        FragmentSequence::new().literal("Count: ").value(count),
        FragmentSequence::new().literal("Pi: ").value(pi),
    ];
    let out: Vec<String> = lines
        .iter()
        .map(|seq| assemble(seq).expect("assembly failed").into_string())
        .collect();

    assert_eq!(out, ["Message: Test", "Count: 42", "Pi: 3.14"]);
}

#[test]
fn concurrent_assemblies_agree() {
    let assembler = Assembler::from_config(&IrtConfig::new());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8i64)
            .map(|n| {
                let assembler = &assembler;
                scope.spawn(move || {
                    let seq = FragmentSequence::new().literal("n=").value(n).literal(";");
                    assembler.assemble(&seq).expect("assembly failed").into_string()
                })
            })
            .collect();

        for (n, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().expect("thread panicked"), format!("n={n};"));
        }
    });
}

proptest! {
    #[test]
    fn int_round_trips(n in any::<i64>()) {
        let text = format(&Value::Int(n));
        prop_assert_eq!(text.parse::<i64>().unwrap(), n);
    }

    #[test]
    fn int_has_no_leading_zeros(n in any::<i64>()) {
        let text = format(&Value::Int(n)).into_owned();
        let digits = text.trim_start_matches('-');
        prop_assert!(digits == "0" || !digits.starts_with('0'));
        prop_assert!(!digits.contains(','));
    }

    #[test]
    fn nice_float_has_at_most_two_decimals(v in -1.0e9f64..1.0e9f64) {
        let text = format(&Value::Float(v)).into_owned();
        let decimals = text.split('.').nth(1).map_or(0, str::len);
        prop_assert!(decimals <= 2, "{} rendered as {}", v, text);
        prop_assert!(!text.contains('e'));
    }

    #[test]
    fn assembly_is_ordered_concatenation(parts in proptest::collection::vec(("[a-z ]{0,8}", any::<i32>()), 0..32)) {
        let mut seq = FragmentSequence::new();
        let mut expected = String::new();
        for (lit, n) in &parts {
            seq.push(Fragment::Literal(lit));
            seq.push(Fragment::Computed(Value::from(*n)));
            expected.push_str(lit);
            expected.push_str(&n.to_string());
        }
        let text = assemble(&seq).unwrap();
        prop_assert_eq!(text.as_str(), expected.as_str());
    }
}
