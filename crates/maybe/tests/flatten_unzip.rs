use maybe::{flatten, none, some, unzip, Flatten, O};

#[test]
fn test_flatten_nested() {
    println!("=== Testing Flatten: nested O ===");
    assert_eq!(flatten(some(some(3))).unwrap(), 3);
    assert_eq!(some(some("v")).flatten(), some("v"));
    assert_eq!(flatten(some(none::<i32>())), none());
    assert_eq!(flatten(none::<O<i32>>()), none());
    println!("✓ one level of nesting removed");
}

#[test]
fn test_flatten_passthrough() {
    println!("=== Testing Flatten: non-nested pass-through ===");
    assert_eq!(flatten(some(3i32)).unwrap(), 3);
    assert_eq!(flatten(some(String::from("s"))), some(String::from("s")));
    assert_eq!(flatten(some(vec![1, 2])), some(vec![1, 2]));
    assert_eq!(flatten(some((1, 'a'))), some((1, 'a')));
    assert_eq!(flatten(none::<u64>()), none());
    println!("✓ plain values pass through unchanged");
}

#[derive(Debug, PartialEq)]
struct Point(i32);

impl maybe::flatten::Leaf for Point {}

#[test]
fn test_flatten_passthrough_for_user_types() {
    println!("=== Testing Flatten: user types and references ===");
    assert_eq!(flatten(some(Point(1))).unwrap(), Point(1));
    assert_eq!(flatten(none::<Point>()), none());
    assert_eq!(flatten(some(some(Point(2)))), some(Point(2)));

    let x = 5u8;
    assert_eq!(flatten(some(&x)).unwrap(), &5);
    assert_eq!(flatten(some(Box::new(Point(3)))), some(Box::new(Point(3))));
    println!("✓ Leaf opt-in passes through unchanged");
}

#[test]
fn test_flatten_output_type() {
    fn flattened<F: Flatten>(f: F) -> F::Output {
        f.flatten()
    }
    let once: O<O<u8>> = flattened(some(some(some(1u8))));
    assert_eq!(once, some(some(1)));
    let twice: O<u8> = flattened(once);
    assert_eq!(twice, some(1));
}

#[test]
fn test_unzip() {
    println!("=== Testing Unzip ===");
    assert_eq!(unzip(some((10, "foo"))), (some(10), some("foo")));
    assert_eq!(unzip(none::<(i32, &str)>()), (none(), none()));
    assert_eq!(some((1, 2)).unzip(), (some(1), some(2)));
    println!("✓ unzip splits pairs and propagates None");
}

#[test]
fn test_zip_then_unzip() {
    let (a, b) = some(1).zip(some('z')).unzip();
    assert_eq!(a, some(1));
    assert_eq!(b, some('z'));
}
