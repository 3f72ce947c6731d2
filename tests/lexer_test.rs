use color_eyre::eyre::{Context, Result};
use proptest::prelude::*;
use std::{
    fs::{read_dir, read_to_string},
    path::Path,
};

use loxide::{
    diagnostic::BufferedReporter,
    lexer::{Lexer, LexicalErrorKind},
    token::{
        formatter::{BasicFormatter, TokenFormatter},
        Span, Token, TokenKind, TokenLiteral,
    },
};

fn check(input: &str, expected: &str, test_name: &str) {
    let mut scanner = Lexer::new(input);
    let formatter = BasicFormatter;
    let mut buffer = String::new();
    loop {
        match scanner.next_token() {
            Ok(token) => {
                buffer.push_str(&formatter.format(&token));
                if token.is_eof() {
                    break;
                }
            }
            Err(error) => {
                buffer.push_str(&formatter.format_lexical_error(&error));
            }
        }
        buffer.push('\n');
    }

    assert_eq!(buffer, expected.trim_end(), "Failed the test {test_name}");
}

fn scan(input: &str) -> (Vec<Token>, BufferedReporter) {
    let mut reporter = BufferedReporter::new();
    let scanned = Lexer::new(input).scan(&mut reporter);
    assert_eq!(scanned.had_error, !reporter.is_empty());
    (scanned.tokens, reporter)
}

#[test]
fn smoke_test() {
    check("", "EOF  null", "smoke");
}

#[test]
fn test_all() -> Result<()> {
    let input_dir = Path::new("./test_data/lexer/in");
    let output_dir = Path::new("./test_data/lexer/out");

    let mut succeeded = true;
    for entry in read_dir(input_dir).context("Failed to open input test data folder")? {
        let entry = entry?;
        let path = entry.path();

        let Some(extension) = path.extension() else {
            continue;
        };

        if extension != "lox" {
            continue;
        }

        let test_name = AsRef::<Path>::as_ref(
            path.file_name()
                .expect("File name can't be none as the path is to a real file."),
        );

        let input = read_to_string(&path).context("Failed to open input test data file")?;

        let expected = {
            let output_file_name = test_name.with_extension("txt");
            let output_path = output_dir.join(output_file_name);
            read_to_string(output_path).context("Failed to open output test data file")?
        };

        let res = std::panic::catch_unwind(|| {
            check(&input, &expected, &test_name.to_string_lossy());
        });
        if res.is_err() {
            succeeded = false;
        }
    }

    assert!(succeeded, "Some lexer test cases failed.");

    Ok(())
}

#[test]
fn unterminated_string_reports_once() {
    let (tokens, reporter) = scan("\"abc");
    assert_eq!(reporter.diagnostics(), &[(1u32, "Unterminated string.".to_string())]);
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_eof());
}

#[test]
fn unknown_character_is_skipped() {
    let (tokens, reporter) = scan("1 @ + 2");
    assert_eq!(reporter.diagnostics().len(), 1);
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::NumericLiteral,
            TokenKind::Plus,
            TokenKind::NumericLiteral,
            TokenKind::Eof
        ]
    );
}

#[test]
fn non_ascii_character_is_one_error() {
    let mut scanner = Lexer::new("é1");
    let error = scanner.next_token().expect_err("é is not a valid character");
    assert_eq!(error.kind, LexicalErrorKind::Unrecognized('é'));
    assert_eq!(error.span.range(), 0..2);
    let token = scanner.next_token().expect("1 is a number");
    assert_eq!(token.literal, Some(TokenLiteral::Number(1.0)));
}

#[test]
fn multiline_string_advances_line() {
    let (tokens, reporter) = scan("\"one\ntwo\" 3");
    assert!(reporter.is_empty());
    assert_eq!(
        tokens[0].literal,
        Some(TokenLiteral::String("one\ntwo".into()))
    );
    assert_eq!(tokens[0].lexeme.as_str(), "\"one\ntwo\"");
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[2].line, 2);
}

#[test]
fn eof_carries_final_line() {
    let (tokens, _) = scan("1\n2\n\n");
    let eof = tokens.last().expect("There is always an EOF token");
    assert!(eof.is_eof());
    assert_eq!(eof.line, 4);
    assert_eq!(eof.lexeme.as_str(), "");
}

#[test]
fn exhausted_lexer_keeps_returning_eof() {
    let mut scanner = Lexer::new("+");
    assert_eq!(scanner.next_token().map(|t| t.kind), Ok(TokenKind::Plus));
    assert_eq!(scanner.next_token().map(|t| t.kind), Ok(TokenKind::Eof));
    assert_eq!(scanner.next_token().map(|t| t.kind), Ok(TokenKind::Eof));
}

#[test]
fn spans_cover_lexemes() {
    let source = "  >= \"s\" abc";
    let (tokens, _) = scan(source);
    for token in tokens.iter().filter(|token| !token.is_eof()) {
        assert_eq!(&source[token.span.range()], token.lexeme.as_str());
    }
}

#[test]
fn lexical_error_has_no_source() {
    let error = Lexer::new("@").next_token().expect_err("@ is not a valid character");
    assert_eq!(error.to_string(), "Unexpected character: @");
    assert!(std::error::Error::source(&error).is_none());
}

#[test]
fn span_saturates_past_u32() {
    let span = Span::new(5, usize::MAX);
    assert_eq!(span.length, u32::MAX);
    assert_eq!(span.end(), 5 + u32::MAX as usize);

    let span = Span::empty_at(usize::MAX);
    assert_eq!(span.start, u32::MAX);
    assert!(span.is_empty());
}

// Property-based tests

fn symbol_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        Just(",".to_string()),
        Just(".".to_string()),
        Just("-".to_string()),
        Just("+".to_string()),
        Just(";".to_string()),
        Just("*".to_string()),
        Just("!".to_string()),
        Just("!=".to_string()),
        Just("=".to_string()),
        Just("==".to_string()),
        Just("<".to_string()),
        Just("<=".to_string()),
        Just(">".to_string()),
        Just(">=".to_string()),
        Just("/".to_string()),
    ]
}

fn numeric_literal_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]+".prop_map(|s| s),          // Integer literals
        "[0-9]+\\.[0-9]+".prop_map(|s| s)  // Decimal literals
    ]
}

fn string_literal_strategy() -> impl Strategy<Value = String> {
    "[^\"]*".prop_map(|s: String| format!("\"{}\"", s))
}

fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]*".prop_map(|s: String| s)
}

fn comment_strategy() -> impl Strategy<Value = String> {
    "[^\n]*".prop_map(|s: String| format!("//{}\n", s))
}

fn token_sequence_strategy() -> impl Strategy<Value = Vec<String>> {
    const MIN_TOKEN_COUNT: usize = 1;
    const MAX_TOKEN_COUNT: usize = 100;
    prop::collection::vec(
        prop_oneof![
            symbol_strategy(),
            numeric_literal_strategy(),
            string_literal_strategy(),
            identifier_strategy(),
        ],
        MIN_TOKEN_COUNT..MAX_TOKEN_COUNT,
    )
}

fn token_sequence_with_comments_strategy() -> impl Strategy<Value = String> {
    const MIN_TOKEN_COUNT: usize = 1;
    const MAX_TOKEN_COUNT: usize = 100;
    prop::collection::vec(
        prop_oneof![
            symbol_strategy(),
            numeric_literal_strategy(),
            string_literal_strategy(),
            identifier_strategy(),
            comment_strategy(),
        ],
        MIN_TOKEN_COUNT..MAX_TOKEN_COUNT,
    )
    .prop_map(|tokens| tokens.join(" "))
}

proptest! {
    #[test]
    fn numeric_literal_scans_to_one_number(input in numeric_literal_strategy()) {
        let (tokens, reporter) = scan(&input);
        prop_assert!(reporter.is_empty());
        prop_assert_eq!(tokens.len(), 2);
        let expected: f64 = input.parse().unwrap();
        prop_assert_eq!(tokens[0].kind, TokenKind::NumericLiteral);
        prop_assert_eq!(&tokens[0].literal, &Some(TokenLiteral::Number(expected)));
    }

    #[test]
    fn lexer_handles_valid_tokens_without_comments(input in token_sequence_strategy()) {
        // Add 1 to include EOF token
        let expected_num_tokens = input.len() + 1;
        let input = input.join(" ");
        let (tokens, reporter) = scan(&input);
        prop_assert!(reporter.is_empty());
        prop_assert_eq!(tokens.len(), expected_num_tokens);
    }

    #[test]
    fn lexer_handles_valid_tokens_with_comments(input in token_sequence_with_comments_strategy()) {
        let (tokens, reporter) = scan(&input);
        prop_assert!(reporter.is_empty());
        prop_assert_eq!(tokens.iter().filter(|token| token.is_eof()).count(), 1);
    }
}
