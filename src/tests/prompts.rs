use std::io::Cursor;

use crate::components::{
    catalog::error::{CatalogError, InputError},
    console::prompt::{parse_bounded, parse_selection, Console},
};

fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn printed(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn test_parse_bounded() {
    assert_eq!(parse_bounded("1185", Some(1185), Some(2024)), Ok(1185));
    assert_eq!(parse_bounded(" 2024 ", Some(1185), Some(2024)), Ok(2024));
    assert_eq!(
        parse_bounded::<i32>("abc", Some(1185), Some(2024)),
        Err(InputError::NotANumber)
    );
    assert_eq!(
        parse_bounded("1000", Some(1185), Some(2024)),
        Err(InputError::BelowMin("1185".to_string()))
    );
    assert_eq!(
        parse_bounded("2025", Some(1185), Some(2024)),
        Err(InputError::AboveMax("2024".to_string()))
    );
    assert_eq!(parse_bounded::<i32>("-7", None, None), Ok(-7));
    assert_eq!(parse_bounded::<u32>("-7", None, None), Err(InputError::NotANumber));
}

#[test]
fn test_bounded_reprompts_once_per_bad_answer() {
    let mut console = console("abc\n1000\n1185\n");

    let year = console.bounded("Year: ", Some(1185), Some(2024)).unwrap();
    assert_eq!(year, 1185);

    let output = printed(console);
    assert_eq!(output.matches("Error, enter a number").count(), 1);
    assert_eq!(output.matches("Value cannot be less than 1185").count(), 1);
    assert_eq!(output.matches("Year: ").count(), 3);
}

#[test]
fn test_bounded_rejects_above_max() {
    let mut console = console("3000\n1999\n");

    assert_eq!(console.bounded("Year: ", Some(1185), Some(2024)).unwrap(), 1999);
    assert!(printed(console).contains("Value cannot be greater than 2024"));
}

#[test]
fn test_non_empty_skips_blank_lines() {
    let mut console = console("\n   \nDune\n");

    assert_eq!(console.non_empty("Title: ").unwrap(), "Dune");
    assert_eq!(printed(console).matches("Title: ").count(), 3);
}

#[test]
fn test_parse_selection() {
    assert_eq!(parse_selection("1 3", &[1u32, 2, 3]), Ok(vec![1, 3]));
    assert_eq!(parse_selection("3 1 3", &[1u32, 2, 3]), Ok(vec![3, 1, 3]));
    assert_eq!(
        parse_selection("1 4", &[1u32, 2, 3]),
        Err(InputError::InvalidSelection)
    );
    assert_eq!(
        parse_selection("1 x", &[1u32, 2, 3]),
        Err(InputError::InvalidSelection)
    );
    let yes_no = ["y".to_string(), "n".to_string()];
    assert_eq!(parse_selection("n", &yes_no), Ok(vec!["n".to_string()]));
    assert_eq!(
        parse_selection("maybe", &yes_no),
        Err(InputError::InvalidSelection)
    );
}

#[test]
fn test_select_reprompts_whole_line() {
    let mut console = console("\n1 9\n2\n");

    assert_eq!(console.select("Pick: ", &[1u32, 2, 3]).unwrap(), vec![2]);
    assert_eq!(printed(console).matches("Choose a valid value").count(), 1);
}

#[test]
fn test_confirm() {
    let mut console = console("x\ny\nn\n");

    assert!(console.confirm("Again? ").unwrap());
    assert!(!console.confirm("Again? ").unwrap());
}

#[test]
fn test_closed_input() {
    let mut console = console("");
    assert!(matches!(
        console.non_empty("Title: "),
        Err(CatalogError::InputClosed)
    ));
}
