//! # Default Prompt Tests
//!
//! This test suite validates the two built-in prompts: that each declares
//! the variable set its text actually uses, and that rendering reproduces
//! the template text with every placeholder replaced verbatim.

use anysql::parser::parse_comma_separated_list;
use anysql::prompts::{
    SQL_QUERY_PROMPT, SQL_QUERY_TEMPLATE, TABLE_DECIDER_PROMPT, TABLE_DECIDER_TEMPLATE,
};
use std::collections::HashMap;

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// --- Tests for `SQL_QUERY_PROMPT` ---

/// Verifies the declared variable set of the query generation prompt.
#[test]
fn test_sql_query_prompt_declares_expected_variables() {
    assert_eq!(
        SQL_QUERY_PROMPT.variables(),
        ["input", "table_info", "dialect", "top_k"]
    );
    assert_eq!(SQL_QUERY_PROMPT.text(), SQL_QUERY_TEMPLATE);
}

/// Verifies that a complete variable set replaces each placeholder verbatim
/// and leaves all other text unchanged.
#[test]
fn test_sql_query_prompt_renders_all_placeholders() {
    let rendered = SQL_QUERY_PROMPT
        .render(&vars(&[
            ("dialect", "SQLite"),
            ("top_k", "5"),
            ("table_info", "CREATE TABLE users (id INTEGER, name TEXT)"),
            ("input", "How many users are there?"),
        ]))
        .expect("all variables provided");

    assert!(rendered.starts_with("Given an input question, first create a syntactically correct SQLite query to run"));
    assert!(rendered.contains("at most 5 results using the 'LIMIT' clause"));
    assert!(rendered.contains("CREATE TABLE users (id INTEGER, name TEXT)"));
    assert!(rendered.ends_with("Question: How many users are there?"));

    // Everything outside the four substitution points is untouched.
    assert!(rendered.contains("SQLQuery: \"SQL Query to run\""));
    assert!(!rendered.contains('{'));
    assert!(!rendered.contains('}'));
}

// --- Tests for `TABLE_DECIDER_PROMPT` ---

/// Verifies the declared variable set of the table decider prompt.
#[test]
fn test_table_decider_prompt_declares_expected_variables() {
    assert_eq!(TABLE_DECIDER_PROMPT.variables(), ["query", "table_names"]);
    assert_eq!(TABLE_DECIDER_PROMPT.text(), TABLE_DECIDER_TEMPLATE);
}

/// Verifies that the decider prompt renders the question and the candidate
/// table list into the expected slots.
#[test]
fn test_table_decider_prompt_renders() {
    let rendered = TABLE_DECIDER_PROMPT
        .render(&vars(&[
            ("query", "Which artists sold the most albums?"),
            ("table_names", "artists, albums, invoices"),
        ]))
        .expect("all variables provided");

    assert!(rendered.contains("Question: Which artists sold the most albums?"));
    assert!(rendered.contains("Table Names: artists, albums, invoices"));
    assert!(rendered.ends_with("Relevant Table Names:"));
}

/// Verifies the full decider round trip: render the prompt, then parse a
/// model-shaped reply into the relevant table names.
#[test]
fn test_table_decider_reply_parses_to_table_names() {
    TABLE_DECIDER_PROMPT
        .render(&vars(&[
            ("query", "Which artists sold the most albums?"),
            ("table_names", "artists, albums, invoices"),
        ]))
        .expect("all variables provided");

    let reply = " artists, albums ";
    assert_eq!(parse_comma_separated_list(reply), ["artists", "albums"]);
}
