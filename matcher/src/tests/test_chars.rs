use crate::chars::{CharClass, chars_eq_ignore_case, classify, is_boundary};

fn boundaries(word: &str) -> Vec<usize> {
    let chars: Vec<char> = word.chars().collect();
    (0..chars.len()).filter(|&i| is_boundary(&chars, i)).collect()
}

#[test]
fn classify_ascii() {
    assert_eq!(classify('a'), CharClass::Lower);
    assert_eq!(classify('Z'), CharClass::Upper);
    assert_eq!(classify('7'), CharClass::Digit);
    for ch in ['_', '-', '.', '$', ' ', '#'] {
        assert_eq!(classify(ch), CharClass::Separator, "{ch:?}");
    }
}

#[test]
fn classify_unicode() {
    assert_eq!(classify('é'), CharClass::Lower);
    assert_eq!(classify('Ö'), CharClass::Upper);
    assert_eq!(classify('語'), CharClass::Other);
    assert_eq!(classify('٣'), CharClass::Digit);
    assert_eq!(classify('→'), CharClass::Separator);
}

#[test]
fn boundaries_snake_and_camel() {
    assert_eq!(boundaries("foo_bar"), vec![0, 4]);
    assert_eq!(boundaries("fooBarBaz"), vec![0, 3, 6]);
    assert_eq!(boundaries("_foo_Bar"), vec![0, 1, 5]);
    assert_eq!(boundaries("v2Api"), vec![0, 2]);
    assert_eq!(boundaries("HTTPServer"), vec![0]);
    assert_eq!(boundaries("a__b"), vec![0, 3]);
    assert_eq!(boundaries(""), Vec::<usize>::new());
}

#[test]
fn boundary_out_of_range_is_false() {
    let chars: Vec<char> = "ab".chars().collect();
    assert!(!is_boundary(&chars, 2));
}

#[test]
fn case_folding() {
    assert!(chars_eq_ignore_case('a', 'A'));
    assert!(chars_eq_ignore_case('É', 'é'));
    assert!(chars_eq_ignore_case('_', '_'));
    assert!(!chars_eq_ignore_case('a', 'b'));
    // 'İ' lowercases to two chars; it only equals itself.
    assert!(chars_eq_ignore_case('İ', 'İ'));
    assert!(!chars_eq_ignore_case('İ', 'i'));
}
