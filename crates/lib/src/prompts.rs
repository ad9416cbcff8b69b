//! # Default Prompt Templates
//!
//! This module contains the default prompt templates for the two stages of a
//! text-to-SQL chain: query generation and table selection. The texts are
//! plain string constants; [`SQL_QUERY_PROMPT`] and [`TABLE_DECIDER_PROMPT`]
//! wrap them in validated [`Template`] values, constructed once on first use
//! and shared for the lifetime of the process.

use crate::template::Template;
use std::sync::LazyLock;

/// The default template for the query generation stage.
///
/// Asks the model for a syntactically correct query in the target dialect,
/// capped at `top_k` rows, answered in the four-line
/// `Question/SQLQuery/SQLResult/Answer` format.
///
/// Placeholders: `{dialect}`, `{top_k}`, `{table_info}`, `{input}`
pub const SQL_QUERY_TEMPLATE: &str = r#"Given an input question, first create a syntactically correct {dialect} query to run, then look at the results of the query and return the answer. Unless the user specifies in the question a specific number of examples to obtain, always limit your query to at most {top_k} results using the 'LIMIT' clause. You can order the results by a relevant column to return the most interesting examples in the database, but you must place the 'ORDER' clause before the 'LIMIT' clause and never after. The 'LIMIT' clause should always be the last in your query.

Never ask for all the columns in a specific table, only for the few relevant columns given the question. When possible, don't query exactly but use 'LIKE' to make your queries more robust. Pay attention to use only the column names that you can see in the schema description and use exactly the same casing. Be careful not to include columns that do not exist and not to ask for columns in the wrong table.

Use the following format:

Question: "Question here"
SQLQuery: "SQL Query to run"
SQLResult: "Result of the SQLQuery"
Answer: "Final answer here"

Only use the following tables:

{table_info}

Question: {input}"#;

/// The default template for the table selection stage.
///
/// The model's reply is a comma separated list of table names; feed it
/// through [`crate::parser::parse_comma_separated_list`] to obtain the
/// relevant tables.
///
/// Placeholders: `{query}`, `{table_names}`
pub const TABLE_DECIDER_TEMPLATE: &str = r#"Given the below input question and list of potential tables, output a comma separated list of the table names that may be necessary to answer this question.

Question: {query}

Table Names: {table_names}

Relevant Table Names:"#;

/// The query generation prompt, ready to render.
pub static SQL_QUERY_PROMPT: LazyLock<Template> = LazyLock::new(|| {
    Template::new(
        "sql_query",
        SQL_QUERY_TEMPLATE,
        &["input", "table_info", "dialect", "top_k"],
    )
    .expect("SQL query template text matches its declared variables")
});

/// The table selection prompt, ready to render.
pub static TABLE_DECIDER_PROMPT: LazyLock<Template> = LazyLock::new(|| {
    Template::new(
        "table_decider",
        TABLE_DECIDER_TEMPLATE,
        &["query", "table_names"],
    )
    .expect("table decider template text matches its declared variables")
});
