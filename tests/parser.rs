//! Integration tests for teeny-parser crate.

use teeny_diagnostic::ErrorCode;
use teeny_parser::{Analysis, Error, parse};
use teeny_syntax::{PrintArg, StmtKind};

fn accepts(source: &str) -> Analysis {
    parse(source).unwrap_or_else(|e| panic!("expected {source:?} to parse, got {e}"))
}

fn rejects(source: &str) -> Error {
    match parse(source) {
        Ok(_) => panic!("expected {source:?} to be rejected"),
        Err(e) => e,
    }
}

fn parse_error_code(source: &str) -> ErrorCode {
    match rejects(source) {
        Error::Parse(e) => e.code,
        Error::Lex(e) => panic!("expected a parse error, got {e}"),
    }
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_parse_print() {
    let analysis = accepts("PRINT \"hello\"\nPRINT 1 + 2\n");
    let stmts = &analysis.program.statements;
    assert_eq!(stmts.len(), 2);
    assert!(matches!(&stmts[0].kind, StmtKind::Print(PrintArg::String(s)) if s == "hello"));
    assert!(matches!(&stmts[1].kind, StmtKind::Print(PrintArg::Expr(_))));
}

#[test]
fn test_parse_let_and_input() {
    let analysis = accepts("LET a = 1\nINPUT b\nPRINT a * b\n");
    let vars: Vec<_> = analysis.symbols.variables().collect();
    assert_eq!(vars, vec!["a", "b"]);
}

#[test]
fn test_parse_if() {
    let analysis = accepts("IF 1 == 1 THEN\nPRINT \"yes\"\nENDIF\n");
    assert!(matches!(
        &analysis.program.statements[0].kind,
        StmtKind::If { body, .. } if body.len() == 1
    ));
}

#[test]
fn test_parse_while() {
    let analysis = accepts("LET i = 0\nWHILE i < 10 REPEAT\nLET i = i + 1\nENDWHILE\n");
    assert_eq!(analysis.program.statements.len(), 2);
    assert_eq!(analysis.program.statement_count(), 3);
}

#[test]
fn test_parse_nested_blocks() {
    let source = "\
LET n = 5
WHILE n > 0 REPEAT
    IF n / 2 * 2 == n THEN
        PRINT \"even\"
    ENDIF
    LET n = n - 1
ENDWHILE
";
    let analysis = accepts(source);
    assert_eq!(analysis.program.statement_count(), 5);
}

#[test]
fn test_all_comparison_operators() {
    for op in ["==", "!=", "<", "<=", ">", ">="] {
        accepts(&format!("IF 1 {op} 2 THEN\nENDIF\n"));
    }
}

#[test]
fn test_unary_signs() {
    accepts("LET x = -1\nLET y = +x * -2\n");
}

#[test]
fn test_empty_program() {
    let analysis = accepts("");
    assert!(analysis.program.statements.is_empty());
    accepts("\n\n\n");
    accepts("# just a comment\n");
}

#[test]
fn test_blank_lines_between_statements() {
    accepts("\n\nPRINT 1\n\n\n\nPRINT 2\n\n");
}

#[test]
fn test_missing_final_newline_is_fine() {
    accepts("PRINT 1");
}

// ============================================================================
// Syntax errors
// ============================================================================

#[test]
fn test_two_statements_on_one_line() {
    assert_eq!(parse_error_code("PRINT 1 PRINT 2\n"), ErrorCode::UnexpectedToken);
}

#[test]
fn test_invalid_statement() {
    assert_eq!(parse_error_code("x = 1\n"), ErrorCode::InvalidStatement);
    assert_eq!(parse_error_code("ENDIF\n"), ErrorCode::InvalidStatement);
    assert_eq!(parse_error_code("42\n"), ErrorCode::InvalidStatement);
}

#[test]
fn test_invalid_statement_message() {
    let err = rejects("THEN\n");
    assert_eq!(err.to_string(), "[Error parsing] Invalid statement at \"THEN\" (THEN)");
}

#[test]
fn test_expected_message_names_kinds() {
    let err = rejects("IF 1 == 1\nENDIF\n");
    assert_eq!(err.to_string(), "[Error parsing] Expected: THEN, got: NEWLINE");
}

#[test]
fn test_missing_comparison_operator() {
    assert_eq!(parse_error_code("IF 1 THEN\nENDIF\n"), ErrorCode::ExpectedComparison);
    assert_eq!(
        parse_error_code("WHILE 1 + 2 REPEAT\nENDWHILE\n"),
        ErrorCode::ExpectedComparison
    );
}

#[test]
fn test_unclosed_block() {
    assert_eq!(parse_error_code("IF 1 < 2 THEN\nPRINT 1\n"), ErrorCode::InvalidStatement);
    assert_eq!(
        parse_error_code("WHILE 1 < 2 REPEAT\nPRINT 1\nENDIF\n"),
        ErrorCode::InvalidStatement
    );
}

#[test]
fn test_block_body_needs_newline_after_then() {
    assert_eq!(parse_error_code("IF 1 < 2 THEN PRINT 1\nENDIF\n"), ErrorCode::UnexpectedToken);
}

#[test]
fn test_let_requires_assignment() {
    assert_eq!(parse_error_code("LET x 1\n"), ErrorCode::UnexpectedToken);
    assert_eq!(parse_error_code("LET x == 1\n"), ErrorCode::UnexpectedToken);
    assert_eq!(parse_error_code("LET = 1\n"), ErrorCode::UnexpectedToken);
}

#[test]
fn test_keyword_is_not_an_identifier() {
    assert_eq!(parse_error_code("LET PRINT = 1\n"), ErrorCode::UnexpectedToken);
    assert_eq!(parse_error_code("LABEL GOTO\n"), ErrorCode::UnexpectedToken);
}

#[test]
fn test_power_is_not_an_expression_operator() {
    assert_eq!(parse_error_code("PRINT 2 ** 3\n"), ErrorCode::UnexpectedToken);
}

#[test]
fn test_double_sign_is_rejected() {
    assert_eq!(parse_error_code("PRINT --1\n"), ErrorCode::UnexpectedToken);
}

#[test]
fn test_print_needs_an_operand() {
    assert_eq!(parse_error_code("PRINT\n"), ErrorCode::UnexpectedToken);
}

// ============================================================================
// Variables
// ============================================================================

#[test]
fn test_variable_defined_before_use() {
    accepts("LET x = 5\nPRINT x\n");
}

#[test]
fn test_variable_used_before_definition() {
    let err = rejects("PRINT x\nLET x = 5\n");
    assert!(matches!(&err, Error::Parse(e) if e.code == ErrorCode::UndefinedVariable));
    assert_eq!(
        err.to_string(),
        "[Error parsing] Referencing variable before assignment: x"
    );
}

#[test]
fn test_input_declares() {
    accepts("INPUT n\nPRINT n\n");
}

#[test]
fn test_definition_check_is_lexical_not_flow_sensitive() {
    // The only assignment appears after the read, even though a GOTO would
    // run it first at runtime.
    let source = "\
GOTO init
LABEL use
PRINT x
LABEL init
LET x = 1
GOTO use
";
    assert_eq!(parse_error_code(source), ErrorCode::UndefinedVariable);
}

#[test]
fn test_assignment_inside_branch_counts_for_later_lines() {
    accepts("IF 1 < 2 THEN\nLET y = 1\nENDIF\nPRINT y\n");
}

#[test]
fn test_let_can_read_its_own_target() {
    accepts("LET x = x + 1\n");
}

#[test]
fn test_undefined_variable_in_condition() {
    assert_eq!(
        parse_error_code("WHILE k < 3 REPEAT\nENDWHILE\n"),
        ErrorCode::UndefinedVariable
    );
}

// ============================================================================
// Labels
// ============================================================================

#[test]
fn test_forward_goto() {
    let analysis = accepts("GOTO skip\nPRINT 1\nLABEL skip\n");
    assert!(analysis.symbols.is_label("skip"));
    assert!(analysis.symbols.referenced_labels().contains("skip"));
}

#[test]
fn test_backward_goto() {
    accepts("LABEL top\nPRINT 1\nGOTO top\n");
}

#[test]
fn test_goto_to_undeclared_label() {
    let err = rejects("GOTO missing\n");
    match &err {
        Error::Parse(e) => {
            assert_eq!(e.code, ErrorCode::UndeclaredLabel);
            assert_eq!(e.span.range(), 5..12);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        err.to_string(),
        "[Error parsing] Attempting to GOTO to undeclared label: missing"
    );
}

#[test]
fn test_undeclared_label_is_reported_after_syntax_errors() {
    // The syntax error on line 2 wins over the missing label on line 1.
    assert_eq!(parse_error_code("GOTO nowhere\nLET\n"), ErrorCode::UnexpectedToken);
}

#[test]
fn test_first_undeclared_label_is_reported() {
    let err = rejects("LABEL ok\nGOTO second\nGOTO ok\nGOTO third\n");
    assert!(err.to_string().ends_with("undeclared label: second"));
}

#[test]
fn test_duplicate_label() {
    let err = rejects("LABEL a\nLABEL a\n");
    match &err {
        Error::Parse(e) => {
            assert_eq!(e.code, ErrorCode::DuplicateLabel);
            assert_eq!(e.span.range(), 14..15);
            let (first, _) = e.related.as_ref().expect("first declaration is attached");
            assert_eq!(first.range(), 6..7);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_duplicate_label_is_immediate() {
    // Reported at the second LABEL even though later lines are broken.
    assert_eq!(parse_error_code("LABEL a\nLABEL a\nLET\n"), ErrorCode::DuplicateLabel);
}

#[test]
fn test_duplicate_label_beats_lexing_error_on_next_line() {
    // The token after the name is never scanned.
    let err = rejects("LABEL a\nLABEL a\n!x\n");
    assert!(matches!(&err, Error::Parse(e) if e.code == ErrorCode::DuplicateLabel));
}

#[test]
fn test_duplicate_label_across_blocks() {
    assert_eq!(
        parse_error_code("LABEL a\nIF 1 < 2 THEN\nLABEL a\nENDIF\n"),
        ErrorCode::DuplicateLabel
    );
}

#[test]
fn test_labels_and_variables_are_separate_namespaces() {
    accepts("LABEL x\nLET x = 1\nGOTO x\nPRINT x\n");
    assert_eq!(parse_error_code("LABEL x\nPRINT x\n"), ErrorCode::UndefinedVariable);
}

// ============================================================================
// Lexing errors surface through the parser
// ============================================================================

#[test]
fn test_lex_errors_propagate() {
    assert!(matches!(rejects("PRINT \"50%\"\n"), Error::Lex(_)));
    assert!(matches!(rejects("LET x = 1.\n"), Error::Lex(_)));
    assert!(matches!(rejects("IF x ! 1 THEN\n"), Error::Lex(_)));
}

#[test]
fn test_idempotent() {
    for source in ["LET x = 1\nPRINT x\n", "PRINT x\n", "GOTO a\n", "PRINT @\n"] {
        assert_eq!(parse(source).is_ok(), parse(source).is_ok());
        assert_eq!(
            parse(source).err().map(|e| e.code()),
            parse(source).err().map(|e| e.code())
        );
    }
}
