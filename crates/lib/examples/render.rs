use anysql::{parse_comma_separated_list, SQL_QUERY_PROMPT, TABLE_DECIDER_PROMPT};
use serde_json::{json, Value};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // --- Command-line argument parsing ---
    // The SQL prompt variables are passed as a single JSON object; a demo
    // set is used when no argument is given.
    let args: Vec<String> = env::args().collect();
    let variables: Value = if args.len() > 1 {
        serde_json::from_str(&args[1])?
    } else {
        json!({
            "dialect": "SQLite",
            "top_k": "5",
            "table_info": "CREATE TABLE artists (id INTEGER, name TEXT)\nCREATE TABLE albums (id INTEGER, artist_id INTEGER, title TEXT)",
            "input": "Which artists released the most albums?",
        })
    };

    let sql_prompt = SQL_QUERY_PROMPT.render_from_value(variables)?;
    println!("--- SQL Query Prompt ---");
    println!("{sql_prompt}");

    let decider_prompt = TABLE_DECIDER_PROMPT.render_from_value(json!({
        "query": "Which artists released the most albums?",
        "table_names": "artists, albums, invoices",
    }))?;
    println!("\n--- Table Decider Prompt ---");
    println!("{decider_prompt}");

    // A reply in the shape the decider prompt asks for.
    let reply = "artists, albums";
    println!("\n--- Parsed Decider Reply ---");
    println!("{:?}", parse_comma_separated_list(reply));

    Ok(())
}
