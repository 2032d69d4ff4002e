//! Tests for statement splitting, dialect selection and option
//! validation.

mod common;
use common::*;

use oxide_sql_tree::{
    parse, parse_bytes, split, tokenize, ConfigurationError, Parser, ParseOptions, TokenKind,
};
use serde_json::json;

// ============================================================================
// Splitting
// ============================================================================

#[test]
fn split_dollar_quoted_functions() {
    let sql = "
    CREATE OR REPLACE FUNCTION testfunc1(integer) RETURNS integer AS $$
          ....
    $$ LANGUAGE plpgsql;
    CREATE OR REPLACE FUNCTION testfunc2(integer) RETURNS integer AS $$
          ....
    $$ LANGUAGE plpgsql;";
    let parts = split(sql, &ParseOptions::default()).unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts.concat(), sql);

    let sql = "
    CREATE OR REPLACE FUNCTION testfunc1(integer) RETURNS integer AS $PROC_1$
          ....
    $PROC_1$ LANGUAGE plpgsql;
    CREATE OR REPLACE FUNCTION testfunc2(integer) RETURNS integer AS $PROC_2$
          ....
    $PROC_2$ LANGUAGE plpgsql;";
    assert_eq!(split(sql, &ParseOptions::default()).unwrap().len(), 2);
}

#[test]
fn split_ignores_terminators_in_strings_and_comments() {
    let sql = "select ';' from t; -- a; b\nselect /* ; */ 2;";
    let parts = split(sql, &ParseOptions::default()).unwrap();
    assert_eq!(parts, vec!["select ';' from t; -- a; b\n", "select /* ; */ 2;"]);
}

#[test]
fn split_keeps_procedure_bodies_together() {
    let sql = "create procedure p() begin select 1; select 2; end; select 3;";
    let parts = split(sql, &ParseOptions::default()).unwrap();
    assert_eq!(
        parts,
        vec!["create procedure p() begin select 1; select 2; end; ", "select 3;"]
    );
}

#[test]
fn split_keeps_declare_sections_together() {
    let sql = "create function f() returns int as declare x int; begin if x then x := 1; end if; end; select 1;";
    let parts = split(sql, &ParseOptions::default()).unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[1], "select 1;");
}

#[test]
fn split_preserves_whitespace() {
    for dialect in DIALECTS {
        let sql = "  select 1;  \n\n select 2 ;\r\n";
        let parts = split(sql, &options(dialect)).unwrap();
        assert_eq!(parts, vec!["  select 1;  \n", "\n select 2 ;\r\n"]);
    }
}

#[test]
fn statements_match_split() {
    let sql = "select 1; update t set a = 2;\ndelete from t";
    let parser = Parser::new(&ParseOptions::default()).unwrap();
    let texts: Vec<_> = parser.parse(sql).iter().map(ToString::to_string).collect();
    assert_eq!(texts, parser.split(sql));
}

// ============================================================================
// Dialects
// ============================================================================

#[test]
fn tsql_variable_and_builtin() {
    let statement = parse_one_in("DECLARE @my_var int;", "TransactSQL");
    assert_eq!(statement.len(), 6);
    let variable = statement.token(2).unwrap();
    assert_eq!(variable.token_kind(), Some(TokenKind::Variable));
    assert_eq!(variable.text(), "@my_var");

    let statement = parse_one_in("SELECT @@Version;", "TransactSQL");
    assert_eq!(statement.len(), 4);
    let builtin = statement.token(2).unwrap();
    assert_eq!(builtin.token_kind(), Some(TokenKind::Builtin));
    assert_eq!(builtin.text(), "@@Version");
}

#[test]
fn tsql_national_strings() {
    let tokens = tokens_in("select N'abc'", "TransactSQL");
    assert_eq!(tokens[2].kind, TokenKind::Single);
    assert_eq!(tokens[2].text, "N'abc'");
}

#[test]
fn default_dialect_has_no_variables() {
    let tokens = tokens_in("SELECT @@Version", "Default");
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Variable));
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Builtin));
}

#[test]
fn dialect_names_ignore_case() {
    for name in ["default", "DEFAULT", "transactsql", "tsql", "mssql", "ansi"] {
        assert!(parse("select 1", &options(name)).is_ok(), "{name}");
    }
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn unknown_dialect_is_rejected() {
    let options = ParseOptions::new().dialect("invalid_sql_dialect");
    let err = parse("select * from fool;", &options).unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::UnknownDialect("invalid_sql_dialect".into())
    );
    assert!(split("select 1", &options).is_err());
    assert!(tokenize("select 1", &options).is_err());
    assert!(Parser::new(&options).is_err());
}

#[test]
fn keyword_mapping_is_rejected() {
    let err = ParseOptions::from_json(&json!({
        "additional_keywords": { "keyword": "value" },
    }))
    .unwrap_err();
    assert!(matches!(err, ConfigurationError::InvalidKeywords(_)));
}

#[test]
fn additional_keywords() {
    let options = ParseOptions::new().additional_keywords(["NEW_KEYWORD_FUNCTION"]);
    let statements = parse("NEW_KEYWORD_FUNCTION", &options).unwrap();
    assert_eq!(statements.len(), 1);
    assert_eq!(
        statements[0].token(0).unwrap().token_kind(),
        Some(TokenKind::Keyword)
    );

    let statements = parse("new_keyword_function", &ParseOptions::default()).unwrap();
    assert_eq!(statements[0].token(0).unwrap().token_kind(), None);
}

#[test]
fn options_from_json_drive_parsing() {
    let options = ParseOptions::from_json(&json!({
        "sql_dialect": "TransactSQL",
        "additional_keywords": ["bacon"],
    }))
    .unwrap();
    let tokens: Vec<_> = tokenize("select @x, bacon", &options).unwrap().collect();
    assert_eq!(tokens[2].kind, TokenKind::Variable);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Keyword);
}

// ============================================================================
// Byte input
// ============================================================================

#[test]
fn parse_utf8_bytes() {
    let sql = "insert into test (id, name) values (1, 'тест');";
    for dialect in DIALECTS {
        let statements = parse_bytes(sql.as_bytes(), "utf-8", &options(dialect)).unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].to_string(), sql);
    }
}

#[test]
fn parse_latin1_bytes() {
    let statements = parse_bytes(b"select 'caf\xe9'", "latin-1", &ParseOptions::default()).unwrap();
    assert_eq!(statements[0].to_string(), "select 'café'");
}

#[test]
fn bad_bytes_are_configuration_errors() {
    let options = ParseOptions::default();
    assert!(matches!(
        parse_bytes(b"select '\xff'", "utf-8", &options),
        Err(ConfigurationError::Decode { .. })
    ));
    assert!(matches!(
        parse_bytes(b"select 1", "ebcdic", &options),
        Err(ConfigurationError::UnknownEncoding(_))
    ));
}
